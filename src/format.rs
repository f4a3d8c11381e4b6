//! # Result Formatting
//!
//! Renders a [`TimingResult`] as display strings, one per [`ResultField`].
//!
//! ## Precision
//! The precision is the number of digits after the decimal point. It is only
//! honoured when it lies in `0..=20`; any other value (negative, too large,
//! NaN for "not given") leaves the numbers unrounded in their shortest form.
//!
//! | value     | precision | rendered        |
//! |-----------|-----------|-----------------|
//! | `0.46875` | NaN       | `0.46875 sec`   |
//! | `0.46875` | `3`       | `0.469 sec`     |
//! | `2.8125`  | `3`       | `2.813 sec`     |
//! | `90.0`    | `25`      | `90 sec`        |
//!
//! Fixed-point rounding works on the exact binary value of the number and
//! breaks ties away from zero.
//!
//! ## Example
//! ```rust
//! use timing_calc::{calculate, format_result};
//!
//! let formatted = format_result(&calculate(120.0, 4.0, 32.0), 2.0);
//! assert_eq!(formatted.one_beat, "0.50 sec");
//! assert_eq!(formatted.song_length_min, "1 min 4.00 sec");
//! ```

use std::fmt;

use serde::Serialize;

use crate::calculator::{ResultField, TimeValue, TimingResult};

/// Largest accepted precision.
pub const MAX_DIGITS: usize = 20;

/// Enough fraction digits to spell out any finite `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Fixed-point formatting is only used below this magnitude.
const FIXED_LIMIT: f64 = 1e21;

/// Outcome of [`round_to_fixed`].
#[derive(Debug, Clone, PartialEq)]
pub enum Rounded {
    /// Fixed-point text with exactly the requested fraction digits
    Fixed(String),
    /// The input number, untouched because the precision was unusable
    Raw(f64),
}

impl fmt::Display for Rounded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rounded::Fixed(text) => f.write_str(text),
            Rounded::Raw(value) => f.write_str(&display_number(*value)),
        }
    }
}

/// Interpret a precision value, truncating fractions toward zero.
///
/// Returns `None` unless the precision lies in `0..=20`.
pub fn fixed_digits(digits: f64) -> Option<usize> {
    if digits.is_nan() || !(0.0..=MAX_DIGITS as f64).contains(&digits) {
        return None;
    }
    Some(digits.trunc() as usize)
}

/// Round `value` to `digits` fraction digits, or pass it through unchanged
/// when `digits` is not a usable precision.
pub fn round_to_fixed(value: f64, digits: f64) -> Rounded {
    match fixed_digits(digits) {
        Some(digits) => Rounded::Fixed(to_fixed(value, digits)),
        None => Rounded::Raw(value),
    }
}

/// Fixed-point text for `value` with exactly `digits` fraction digits.
///
/// Magnitudes of `1e21` and above (and non-finite values) fall back to
/// [`display_number`].
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() || value.abs() >= FIXED_LIMIT {
        return display_number(value);
    }

    // Full exact expansion on every call; the digit after the cut decides
    // the rounding and an exact tie must be seen as one.
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<char> = int_part
        .chars()
        .chain(frac_part.chars().take(digits))
        .collect();
    let round_up = frac_part
        .as_bytes()
        .get(digits)
        .is_some_and(|&digit| digit >= b'5');
    if round_up {
        increment_decimal(&mut kept);
    }

    let int_len = kept.len() - digits;
    let mut text = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        text.push('-');
    }
    text.extend(&kept[..int_len]);
    if digits > 0 {
        text.push('.');
        text.extend(&kept[int_len..]);
    }
    text
}

/// Add one unit in the last place to a string of decimal digits.
fn increment_decimal(digits: &mut Vec<char>) {
    for digit in digits.iter_mut().rev() {
        if *digit == '9' {
            *digit = '0';
        } else {
            *digit = char::from(*digit as u8 + 1);
            return;
        }
    }
    digits.insert(0, '1');
}

/// Shortest text that reads back as `value`.
///
/// Plain decimal notation is used for decimal exponents in `-6..=20`,
/// exponent notation (`1e-7`, `1.5e+21`) outside it. Negative zero prints
/// as `0` and the infinities as `Infinity` / `-Infinity`.
pub fn display_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    if (-6..21).contains(&exponent) {
        value.to_string()
    } else if exponent < 0 {
        format!("{}e{}", mantissa, exponent)
    } else {
        format!("{}e+{}", mantissa, exponent)
    }
}

/// Render one result field.
///
/// Plain durations become `"<value> sec"`. A minutes/seconds pair becomes
/// `"<minutes> min <seconds> sec"` where the minutes always use zero
/// fraction digits.
pub fn format_time(value: TimeValue, digits: f64) -> String {
    match value {
        TimeValue::Seconds(seconds) => format!("{} sec", round_to_fixed(seconds, digits)),
        TimeValue::MinutesSeconds(split) => format!(
            "{} min {} sec",
            round_to_fixed(split.minutes, 0.0),
            round_to_fixed(split.seconds, digits)
        ),
    }
}

/// Display strings for every field of a [`TimingResult`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedResult {
    pub one_beat: String,
    pub one_measure: String,
    pub song_length: String,
    pub song_length_min: String,
}

impl FormattedResult {
    pub fn get(&self, field: ResultField) -> &str {
        match field {
            ResultField::OneBeat => &self.one_beat,
            ResultField::OneMeasure => &self.one_measure,
            ResultField::SongLength => &self.song_length,
            ResultField::SongLengthMin => &self.song_length_min,
        }
    }

    fn slot(&mut self, field: ResultField) -> &mut String {
        match field {
            ResultField::OneBeat => &mut self.one_beat,
            ResultField::OneMeasure => &mut self.one_measure,
            ResultField::SongLength => &mut self.song_length,
            ResultField::SongLengthMin => &mut self.song_length_min,
        }
    }

    /// Fields paired with their text, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (ResultField, &str)> + '_ {
        ResultField::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }

    /// One `<element id>: <text>` line per field, in display order.
    pub fn to_text(&self) -> String {
        self.iter()
            .map(|(field, text)| format!("{}: {}", field.id(), text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Format every field of `result` with the given precision.
pub fn format_result(result: &TimingResult, digits: f64) -> FormattedResult {
    if !digits.is_nan() && fixed_digits(digits).is_none() {
        log::debug!(
            "Precision {} is outside 0..={}, leaving values unrounded",
            digits,
            MAX_DIGITS
        );
    }

    let mut formatted = FormattedResult::default();
    for field in ResultField::ALL {
        *formatted.slot(field) = format_time(result.value(field), digits);
    }
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{calculate, MinutesSeconds};

    #[test]
    fn test_fixed_digits_range() {
        assert_eq!(fixed_digits(0.0), Some(0));
        assert_eq!(fixed_digits(-0.0), Some(0));
        assert_eq!(fixed_digits(3.0), Some(3));
        assert_eq!(fixed_digits(2.9), Some(2));
        assert_eq!(fixed_digits(20.0), Some(20));
        assert_eq!(fixed_digits(21.0), None);
        assert_eq!(fixed_digits(-1.0), None);
        assert_eq!(fixed_digits(f64::NAN), None);
        assert_eq!(fixed_digits(f64::INFINITY), None);
    }

    #[test]
    fn test_to_fixed_pads_and_rounds() {
        assert_eq!(to_fixed(0.5, 2), "0.50");
        assert_eq!(to_fixed(64.0, 2), "64.00");
        assert_eq!(to_fixed(4.0, 0), "4");
        assert_eq!(to_fixed(0.46875, 3), "0.469");
        assert_eq!(to_fixed(60.0 / 67.5, 4), "0.8889");
        assert_eq!(to_fixed(0.0, 20), "0.00000000000000000000");
    }

    #[test]
    fn test_to_fixed_breaks_exact_ties_upward() {
        assert_eq!(to_fixed(2.8125, 3), "2.813");
        assert_eq!(to_fixed(0.5, 0), "1");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(0.125, 2), "0.13");
    }

    #[test]
    fn test_to_fixed_uses_exact_binary_value() {
        // 1.005 is stored slightly below the tie
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(0.1, 20), "0.10000000000000000555");
    }

    #[test]
    fn test_to_fixed_carries_into_integer_part() {
        assert_eq!(to_fixed(9.996, 2), "10.00");
        assert_eq!(to_fixed(99.5, 0), "100");
    }

    #[test]
    fn test_to_fixed_sign_handling() {
        assert_eq!(to_fixed(-1.25, 1), "-1.3");
        assert_eq!(to_fixed(-0.001, 2), "-0.00");
        assert_eq!(to_fixed(-0.0, 2), "0.00");
    }

    #[test]
    fn test_to_fixed_large_and_special_values() {
        assert_eq!(to_fixed(1e21, 2), "1e+21");
        assert_eq!(to_fixed(f64::INFINITY, 2), "Infinity");
        assert_eq!(to_fixed(f64::NAN, 2), "NaN");
    }

    #[test]
    fn test_display_number_shortest_form() {
        assert_eq!(display_number(0.46875), "0.46875");
        assert_eq!(display_number(90.0), "90");
        assert_eq!(display_number(-0.0), "0");
        assert_eq!(display_number(2.0 / 3.0), "0.6666666666666666");
        assert_eq!(display_number(0.000001), "0.000001");
        assert_eq!(display_number(1e-7), "1e-7");
        assert_eq!(display_number(1.5e21), "1.5e+21");
        assert_eq!(display_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_round_to_fixed_passes_through_invalid_precision() {
        assert_eq!(round_to_fixed(0.46875, 3.0), Rounded::Fixed("0.469".to_string()));
        assert_eq!(round_to_fixed(0.46875, 25.0), Rounded::Raw(0.46875));
        assert_eq!(round_to_fixed(0.46875, -1.0), Rounded::Raw(0.46875));
        assert_eq!(round_to_fixed(0.46875, f64::NAN), Rounded::Raw(0.46875));
    }

    #[test]
    fn test_round_to_fixed_digit_count() {
        for digits in 0..=MAX_DIGITS {
            let Rounded::Fixed(text) = round_to_fixed(60.0 / 7.0, digits as f64) else {
                panic!("precision {} should be fixed", digits);
            };
            let fraction = text.split_once('.').map_or("", |(_, frac)| frac);
            assert_eq!(fraction.len(), digits, "{}", text);
        }
    }

    #[test]
    fn test_format_time_variants() {
        assert_eq!(format_time(TimeValue::Seconds(0.5), 2.0), "0.50 sec");
        assert_eq!(format_time(TimeValue::Seconds(0.5), f64::NAN), "0.5 sec");

        let split = MinutesSeconds {
            minutes: 1.0,
            seconds: 30.0,
        };
        assert_eq!(format_time(TimeValue::MinutesSeconds(split), 3.0), "1 min 30.000 sec");
        assert_eq!(format_time(TimeValue::MinutesSeconds(split), f64::NAN), "1 min 30 sec");
    }

    #[test]
    fn test_format_result_zero() {
        let formatted = format_result(&TimingResult::ZERO, f64::NAN);
        assert_eq!(formatted.one_beat, "0 sec");
        assert_eq!(formatted.one_measure, "0 sec");
        assert_eq!(formatted.song_length, "0 sec");
        assert_eq!(formatted.song_length_min, "0 min 0 sec");
    }

    #[test]
    fn test_format_result_unrounded_precision() {
        let formatted = format_result(&calculate(90.0, 4.0, 8.0), 25.0);
        assert_eq!(formatted.one_beat, format!("{} sec", display_number(60.0 / 90.0)));
        assert_eq!(formatted.one_beat, "0.6666666666666666 sec");
        assert_eq!(formatted.song_length_min, "0 min 21.333333333333332 sec");
    }

    #[test]
    fn test_formatted_result_iterates_in_display_order() {
        let formatted = format_result(&calculate(120.0, 4.0, 32.0), 2.0);
        let fields: Vec<_> = formatted.iter().collect();
        assert_eq!(
            fields,
            vec![
                (ResultField::OneBeat, "0.50 sec"),
                (ResultField::OneMeasure, "2.00 sec"),
                (ResultField::SongLength, "64.00 sec"),
                (ResultField::SongLengthMin, "1 min 4.00 sec"),
            ]
        );
    }

    #[test]
    fn test_formatted_result_to_text() {
        let formatted = format_result(&calculate(60.0, 4.0, 8.0), f64::NAN);
        assert_eq!(
            formatted.to_text(),
            "one-beat: 1 sec\none-measure: 4 sec\nsong-length: 32 sec\nsong-length-min: 0 min 32 sec"
        );
    }

    #[test]
    fn test_formatted_result_serializes_camel_case() {
        let formatted = format_result(&TimingResult::ZERO, f64::NAN);
        let json = serde_json::to_string(&formatted).unwrap();
        assert_eq!(
            json,
            r#"{"oneBeat":"0 sec","oneMeasure":"0 sec","songLength":"0 sec","songLengthMin":"0 min 0 sec"}"#
        );
    }
}
