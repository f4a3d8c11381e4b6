//! # Error Types
//!
//! The timing pipeline itself never fails: bad numbers collapse to a zero
//! result or pass through unrounded. Errors only come from the edges around
//! it, i.e. reading sheet files, serializing output and resolving field ids.
//!
//! ## Usage
//! ```rust
//! use timing_calc::{Sheet, TimingError};
//!
//! match Sheet::from_yaml("tempo: [1, 2]") {
//!     Ok(_) => println!("Loaded"),
//!     Err(TimingError::Sheet(message)) => eprintln!("Bad sheet: {}", message),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimingError {
    /// A sheet file could not be read.
    #[error("Error reading '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid YAML sheet.
    ///
    /// # Example
    /// ```
    /// # use timing_calc::TimingError;
    /// let err = TimingError::Sheet("unknown field `bpm`".to_string());
    /// assert_eq!(err.to_string(), "Invalid sheet: unknown field `bpm`");
    /// ```
    #[error("Invalid sheet: {0}")]
    Sheet(String),

    /// Result could not be rendered in the requested output format.
    #[error("Serialization failed: {0}")]
    Serialize(String),

    /// No page field carries the given element id.
    ///
    /// # Example
    /// ```
    /// # use timing_calc::TimingError;
    /// let err = TimingError::UnknownField("bpm".to_string());
    /// assert_eq!(err.to_string(), "Unknown field id: bpm");
    /// ```
    #[error("Unknown field id: {0}")]
    UnknownField(String),
}
