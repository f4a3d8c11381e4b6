pub mod calculator;
pub mod error;
pub mod format;
pub mod page;
pub mod parse;
pub mod sheet;

pub use calculator::*;
pub use error::*;
pub use format::{format_result, format_time, round_to_fixed, FormattedResult, Rounded};
pub use page::{reset_page, update_page, Form, InputField, InputReader, OutputWriter};
pub use sheet::Sheet;

/// Calculate and format in one step.
/// This is the main entry point for the library.
pub fn evaluate(
    tempo: f64,
    beats_per_measure: f64,
    measure_count: f64,
    digits: f64,
) -> FormattedResult {
    format_result(&calculate(tempo, beats_per_measure, measure_count), digits)
}
