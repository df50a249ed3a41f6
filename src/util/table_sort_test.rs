use super::*;

fn sorted(kind: SortKind, cells: &[&str]) -> Vec<String> {
    let mut out: Vec<String> = cells.iter().map(|c| (*c).to_owned()).collect();
    out.sort_by(|a, b| compare_cells(kind, a, b));
    out
}

// =============================================================
// SortKind
// =============================================================

#[test]
fn sort_kind_default_is_text() {
    assert_eq!(SortKind::default(), SortKind::Text);
}

// =============================================================
// compare_cells
// =============================================================

#[test]
fn number_sort_is_numeric() {
    assert_eq!(sorted(SortKind::Number, &["10", "2", "33"]), vec!["2", "10", "33"]);
}

#[test]
fn text_sort_is_lexicographic() {
    assert_eq!(sorted(SortKind::Text, &["10", "2", "33"]), vec!["10", "2", "33"]);
}

#[test]
fn text_sort_ignores_case_first() {
    assert_eq!(sorted(SortKind::Text, &["beta", "Alpha", "alpha", "Gamma"]), vec![
        "Alpha", "alpha", "beta", "Gamma"
    ]);
}

#[test]
fn number_sort_reads_leading_numeric_prefix() {
    assert_eq!(sorted(SortKind::Number, &["12.5 kg", "3 kg", "100 kg"]), vec![
        "3 kg", "12.5 kg", "100 kg"
    ]);
}

#[test]
fn number_sort_places_unparseable_cells_last() {
    assert_eq!(sorted(SortKind::Number, &["n/a", "5", "", "-1"]), vec!["-1", "5", "n/a", ""]);
}

#[test]
fn date_sort_orders_chronologically() {
    assert_eq!(
        sorted(SortKind::Date, &["2024-03-01 09:00:00", "2023-12-31", "2024-01-15 18:30:00"]),
        vec!["2023-12-31", "2024-01-15 18:30:00", "2024-03-01 09:00:00"]
    );
}

#[test]
fn date_sort_mixes_layouts() {
    assert_eq!(sorted(SortKind::Date, &["15.01.2024", "2024-01-10", "2024-01-20T08:00:00Z"]), vec![
        "2024-01-10",
        "15.01.2024",
        "2024-01-20T08:00:00Z"
    ]);
}

#[test]
fn cells_are_trimmed_before_comparison() {
    assert_eq!(compare_cells(SortKind::Text, "  apple ", "apple"), std::cmp::Ordering::Equal);
    assert_eq!(compare_cells(SortKind::Number, " 2 ", "10"), std::cmp::Ordering::Less);
}

// =============================================================
// parse_date_ms
// =============================================================

#[test]
fn parse_date_ms_supported_layouts() {
    assert_eq!(parse_date_ms("1970-01-01"), Some(0));
    assert_eq!(parse_date_ms("1970-01-01 00:00:01"), Some(1000));
    assert_eq!(parse_date_ms("01.01.1970 00:01"), Some(60_000));
    assert_eq!(parse_date_ms("1970-01-01T00:00:00+01:00"), Some(-3_600_000));
}

#[test]
fn parse_date_ms_rejects_garbage() {
    assert_eq!(parse_date_ms(""), None);
    assert_eq!(parse_date_ms("yesterday"), None);
    assert_eq!(parse_date_ms("2024-13-45"), None);
}
