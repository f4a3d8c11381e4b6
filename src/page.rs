//! # Calculator Page
//!
//! The page is a small form: four text inputs and four text outputs. Two
//! actions drive it:
//! - **compute** ([`update_page`]) reads and parses the inputs, calculates,
//!   formats and writes every output
//! - **reset** ([`reset_page`]) clears every input, then computes, which
//!   leaves the placeholder zeroes in the outputs
//!
//! Field access goes through the [`InputReader`] and [`OutputWriter`] traits
//! so the pipeline doesn't care where the fields live. [`Form`] is the
//! in-memory implementation used by the command line tool and the tests.
//!
//! ## Example
//! ```rust
//! use timing_calc::page::{Form, InputField};
//! use timing_calc::ResultField;
//!
//! let mut form = Form::load();
//! assert_eq!(form.output(ResultField::SongLengthMin), "0 min 0 sec");
//!
//! form.set_input(InputField::Tempo, "60");
//! form.set_input(InputField::Beats, "4");
//! form.set_input(InputField::Measures, "8");
//! form.update();
//! assert_eq!(form.output(ResultField::SongLength), "32 sec");
//! ```

use crate::calculator::{ResultField, TimingInputs};
use crate::error::TimingError;
use crate::format::{format_result, FormattedResult};
use crate::parse::{parse_float, parse_int};
use crate::sheet::Sheet;

/// A text input on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    Tempo,
    Beats,
    Measures,
    NumDigits,
}

impl InputField {
    pub const ALL: [InputField; 4] = [
        InputField::Tempo,
        InputField::Beats,
        InputField::Measures,
        InputField::NumDigits,
    ];

    pub fn id(self) -> &'static str {
        match self {
            InputField::Tempo => "tempo",
            InputField::Beats => "beats",
            InputField::Measures => "measures",
            InputField::NumDigits => "num-digits",
        }
    }

    pub fn from_id(id: &str) -> Result<InputField, TimingError> {
        Self::ALL
            .into_iter()
            .find(|field| field.id() == id)
            .ok_or_else(|| TimingError::UnknownField(id.to_string()))
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Read access to the page inputs.
pub trait InputReader {
    /// Current raw text of `field`.
    fn read(&self, field: InputField) -> String;

    /// Empty `field`.
    fn clear(&mut self, field: InputField);
}

/// Write access to the page outputs.
pub trait OutputWriter {
    fn write(&mut self, field: ResultField, text: &str);
}

/// Parsed page inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageInputs {
    pub timing: TimingInputs,
    /// Precision digits; NaN when not given
    pub digits: f64,
}

impl PageInputs {
    /// Parse the raw text of every input. The three counts are read as
    /// floats, the precision as an integer.
    pub fn read<R: InputReader + ?Sized>(reader: &R) -> Self {
        Self {
            timing: TimingInputs::new(
                parse_float(&reader.read(InputField::Tempo)),
                parse_float(&reader.read(InputField::Beats)),
                parse_float(&reader.read(InputField::Measures)),
            ),
            digits: parse_int(&reader.read(InputField::NumDigits)),
        }
    }

    pub fn evaluate(&self) -> FormattedResult {
        let result = self.timing.calculate();
        if result.is_zero() {
            log::debug!("Zero result for {:?}", self.timing);
        }
        format_result(&result, self.digits)
    }
}

/// Compute action: parse inputs, calculate, format, write all outputs.
pub fn update_page<R, W>(inputs: &R, outputs: &mut W) -> FormattedResult
where
    R: InputReader + ?Sized,
    W: OutputWriter + ?Sized,
{
    let page_inputs = PageInputs::read(inputs);
    log::trace!("Updating page with {:?}", page_inputs);

    let formatted = page_inputs.evaluate();
    for (field, text) in formatted.iter() {
        outputs.write(field, text);
    }
    formatted
}

/// Reset action: clear every input, then compute.
pub fn reset_page<R, W>(inputs: &mut R, outputs: &mut W) -> FormattedResult
where
    R: InputReader + ?Sized,
    W: OutputWriter + ?Sized,
{
    for field in InputField::ALL {
        inputs.clear(field);
    }
    update_page(inputs, outputs)
}

/// In-memory input fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInputs {
    values: [String; 4],
}

impl FormInputs {
    pub fn get(&self, field: InputField) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: InputField, text: impl Into<String>) {
        self.values[field.index()] = text.into();
    }

    /// Set every given field, leaving the others as they are.
    pub fn override_with<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = (InputField, S)>,
        S: Into<String>,
    {
        for (field, text) in values {
            self.set(field, text);
        }
    }
}

impl InputReader for FormInputs {
    fn read(&self, field: InputField) -> String {
        self.get(field).to_string()
    }

    fn clear(&mut self, field: InputField) {
        self.values[field.index()].clear();
    }
}

/// In-memory output fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormOutputs {
    values: [String; 4],
}

impl FormOutputs {
    pub fn get(&self, field: ResultField) -> &str {
        &self.values[output_index(field)]
    }
}

impl OutputWriter for FormOutputs {
    fn write(&mut self, field: ResultField, text: &str) {
        text.clone_into(&mut self.values[output_index(field)]);
    }
}

fn output_index(field: ResultField) -> usize {
    field as usize
}

/// A complete in-memory page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    pub inputs: FormInputs,
    pub outputs: FormOutputs,
}

impl Form {
    /// A blank form after its initial compute, showing the placeholder zeroes.
    pub fn load() -> Self {
        let mut form = Self::default();
        form.update();
        form
    }

    /// A loaded form with inputs taken from `sheet`, then from `overrides`.
    ///
    /// Overrides win over sheet values. Outputs still show the load-time
    /// placeholders until the next [`Form::update`].
    pub fn prefilled<I, S>(sheet: Option<&Sheet>, overrides: I) -> Self
    where
        I: IntoIterator<Item = (InputField, S)>,
        S: Into<String>,
    {
        let mut form = Self::load();
        if let Some(sheet) = sheet {
            sheet.apply(&mut form.inputs);
        }
        form.inputs.override_with(overrides);
        form
    }

    pub fn input(&self, field: InputField) -> &str {
        self.inputs.get(field)
    }

    pub fn set_input(&mut self, field: InputField, text: impl Into<String>) {
        self.inputs.set(field, text);
    }

    pub fn output(&self, field: ResultField) -> &str {
        self.outputs.get(field)
    }

    pub fn update(&mut self) -> FormattedResult {
        update_page(&self.inputs, &mut self.outputs)
    }

    pub fn reset(&mut self) -> FormattedResult {
        reset_page(&mut self.inputs, &mut self.outputs)
    }
}
