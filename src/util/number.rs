//! Numeric input helpers.

#[cfg(test)]
#[path = "number_test.rs"]
mod number_test;

/// Replacement value for a number input holding a negative value.
///
/// Returns `Some("0")` when `raw` parses to a value below zero and `None`
/// when the input should be left alone (non-negative, empty, or not a
/// number yet, e.g. a lone `-` mid-typing).
#[must_use]
pub fn clamp_non_negative(raw: &str) -> Option<String> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value < 0.0 => Some("0".to_owned()),
        _ => None,
    }
}

/// Parse the longest numeric prefix of `text`, ignoring leading whitespace.
///
/// Mirrors how table cells like `"12.5 kg"` or `"1e3"` are read for numeric
/// sorting. Returns `None` when no digits lead the string.
#[must_use]
pub fn parse_leading_f64(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let rest = &s[end..];
    if rest.starts_with("Infinity") {
        let sign = if s.starts_with('-') { -1.0 } else { 1.0 };
        return Some(sign * f64::INFINITY);
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}
