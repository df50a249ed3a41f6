//! Cell comparators for table sorting.
//!
//! Every comparator is a total order so `slice::sort_by` stays well-defined:
//! cells that fail to parse as a number or date sort after all parsed cells
//! and compare equal among themselves.

#[cfg(test)]
#[path = "table_sort_test.rs"]
mod table_sort_test;

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::util::number::parse_leading_f64;

/// How a column's cell text is interpreted when sorting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKind {
    #[default]
    Text,
    Number,
    Date,
}

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y", "%Y/%m/%d"];

/// Parse a cell as a point in time, in milliseconds since the Unix epoch.
///
/// Accepts RFC 3339 plus the `YYYY-MM-DD[ HH:MM[:SS]]` and
/// `DD.MM.YYYY[ HH:MM[:SS]]` layouts the admin templates render.
/// Naive values are read as UTC.
#[must_use]
pub fn parse_date_ms(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.timestamp_millis());
    }
    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt.and_utc().timestamp_millis());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return date
                .and_hms_opt(0, 0, 0)
                .map(|dt| dt.and_utc().timestamp_millis());
        }
    }
    None
}

fn compare_parsed<T>(a: Option<T>, b: Option<T>, cmp: impl FnOnce(&T, &T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(&a, &b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Case-insensitive text order, falling back to code points to break ties.
#[must_use]
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Compare two cell texts (already trimmed or not) under `kind`.
#[must_use]
pub fn compare_cells(kind: SortKind, a: &str, b: &str) -> Ordering {
    let (a, b) = (a.trim(), b.trim());
    match kind {
        SortKind::Text => compare_text(a, b),
        SortKind::Number => compare_parsed(parse_leading_f64(a), parse_leading_f64(b), |x, y| x.total_cmp(y)),
        SortKind::Date => compare_parsed(parse_date_ms(a), parse_date_ms(b), Ord::cmp),
    }
}
