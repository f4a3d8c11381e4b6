//! # Input Text Parsing
//!
//! Page inputs are free text. They are read leniently: leading whitespace is
//! skipped, the longest numeric prefix is taken and anything after it is
//! ignored. Text with no numeric prefix yields NaN, which the calculator
//! treats as missing input.
//!
//! ## Example
//! ```rust
//! use timing_calc::parse::{parse_float, parse_int};
//!
//! assert_eq!(parse_float(" 67.5 bpm"), 67.5);
//! assert_eq!(parse_int("2.7"), 2.0);
//! assert!(parse_float("").is_nan());
//! ```

const INFINITY_LITERAL: &str = "Infinity";

/// Parse the leading decimal literal of `text` as a float.
///
/// Accepts an optional sign, then either `Infinity` or digits with an
/// optional fraction and exponent (`12`, `.5`, `5.`, `1e3`, `-2.5E-1`).
/// An incomplete exponent is dropped (`"3e"` parses as 3).
pub fn parse_float(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with(INFINITY_LITERAL) {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

/// Parse the leading base-10 integer of `text`.
///
/// Stops at the first non-digit, so `"2.7"` is 2 and `"0x10"` is 0.
/// Returned as `f64` so that "no number" can be NaN like the float inputs.
pub fn parse_int(text: &str) -> f64 {
    let s = text.trim_start();
    let (negative, unsigned) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits = count_digits(unsigned.as_bytes());
    if digits == 0 {
        return f64::NAN;
    }

    let magnitude: f64 = unsigned[..digits].parse().unwrap_or(f64::NAN);
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_float_plain_numbers() {
        assert_eq!(parse_float("120"), 120.0);
        assert_eq!(parse_float("67.5"), 67.5);
        assert_eq!(parse_float("16.0909"), 16.0909);
        assert_eq!(parse_float("-1"), -1.0);
        assert_eq!(parse_float("+4"), 4.0);
    }

    #[test]
    fn test_parse_float_partial_literals() {
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("5."), 5.0);
        assert_eq!(parse_float("1e3"), 1000.0);
        assert_eq!(parse_float("2.5E-1"), 0.25);
        // Dangling exponent is not part of the literal
        assert_eq!(parse_float("3e"), 3.0);
        assert_eq!(parse_float("3e+"), 3.0);
    }

    #[test]
    fn test_parse_float_ignores_trailing_text() {
        assert_eq!(parse_float("  128 bpm"), 128.0);
        assert_eq!(parse_float("4/4"), 4.0);
        assert_eq!(parse_float("1.2.3"), 1.2);
    }

    #[test]
    fn test_parse_float_infinity() {
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_float("inf").is_nan());
    }

    #[test]
    fn test_parse_float_without_number_is_nan() {
        for text in ["", "   ", "abc", "-", ".", "+.", "e5"] {
            assert!(parse_float(text).is_nan(), "{:?} should be NaN", text);
        }
    }

    #[test]
    fn test_parse_int_truncates_at_non_digit() {
        assert_eq!(parse_int("3"), 3.0);
        assert_eq!(parse_int("2.7"), 2.0);
        assert_eq!(parse_int("21x"), 21.0);
        assert_eq!(parse_int(" -1"), -1.0);
        assert_eq!(parse_int("0x10"), 0.0);
    }

    #[test]
    fn test_parse_int_without_digits_is_nan() {
        for text in ["", "x", "-", ".5", "Infinity"] {
            assert!(parse_int(text).is_nan(), "{:?} should be NaN", text);
        }
    }
}
