//! Lenient numeric coercion and 2-decimal rounding.
//!
//! Raw form fields are free text. A field is read by taking the longest
//! leading decimal literal (after leading whitespace) and ignoring whatever
//! follows; a field with no such prefix reads as zero. Parsing never fails.

/// Round half away from zero to 2 decimal places.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Parse the leading decimal literal of `raw`, or return 0.
///
/// Accepts `[+-]?(digits[.digits*] | .digits)([eE][+-]?digits)?` and
/// `[+-]?Infinity`. An exponent marker without digits is not consumed, so
/// `"1e"` reads as 1. NaN and negative zero both read as 0.
pub fn parse_lenient(raw: &str) -> f64 {
    let s = raw.trim_start();
    let end = literal_len(s.as_bytes());
    if end == 0 {
        return 0.0;
    }

    let value = s[..end].parse::<f64>().unwrap_or(0.0);
    if value.is_nan() || value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Length in bytes of the decimal literal at the start of `b` (0 if none).
fn literal_len(b: &[u8]) -> usize {
    let mut i = 0;
    if matches!(b.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    if b[i..].starts_with(b"Infinity") {
        return i + "Infinity".len();
    }

    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut frac_digits = 0;
    if i < b.len() && b[i] == b'.' {
        let mut j = i + 1;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        frac_digits = j - (i + 1);
        // "5." is a literal, a bare "." is not.
        if int_digits > 0 || frac_digits > 0 {
            i = j;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}
