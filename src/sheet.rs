//! # Input Sheets
//!
//! A sheet is a YAML document holding preset page inputs, keyed by the
//! page's element ids:
//!
//! ```yaml
//! tempo: 128
//! beats: 6
//! measures: 32
//! num-digits: 3
//! ```
//!
//! Every key is optional. Values may be numbers or text; either way they are
//! handed to the page as raw text and parsed like typed input, so
//! `tempo: "120 bpm"` works the same as `tempo: 120`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::TimingError;
use crate::format::display_number;
use crate::page::{FormInputs, InputField};

/// Scalar sheet value.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum SheetValue {
    Number(f64),
    Text(String),
}

impl SheetValue {
    pub fn to_text(&self) -> String {
        match self {
            SheetValue::Number(value) => display_number(*value),
            SheetValue::Text(text) => text.clone(),
        }
    }
}

/// Preset page inputs read from YAML.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Sheet {
    pub tempo: Option<SheetValue>,
    pub beats: Option<SheetValue>,
    pub measures: Option<SheetValue>,
    pub num_digits: Option<SheetValue>,
}

impl Sheet {
    pub fn from_yaml(content: &str) -> Result<Sheet, TimingError> {
        if content.trim().is_empty() {
            return Ok(Sheet::default());
        }
        serde_yaml::from_str(content).map_err(|e| TimingError::Sheet(e.to_string()))
    }

    pub fn from_path(path: &Path) -> Result<Sheet, TimingError> {
        let content = fs::read_to_string(path).map_err(|source| TimingError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded sheet from {}", path.display());
        Self::from_yaml(&content)
    }

    pub fn get(&self, field: InputField) -> Option<&SheetValue> {
        match field {
            InputField::Tempo => self.tempo.as_ref(),
            InputField::Beats => self.beats.as_ref(),
            InputField::Measures => self.measures.as_ref(),
            InputField::NumDigits => self.num_digits.as_ref(),
        }
    }

    /// Copy every value present in the sheet into `inputs`.
    pub fn apply(&self, inputs: &mut FormInputs) {
        for field in InputField::ALL {
            if let Some(value) = self.get(field) {
                inputs.set(field, value.to_text());
            }
        }
    }
}
