//! # Timing Calculator
//!
//! Turns a tempo, a beat count per measure and a measure count into
//! durations in seconds.
//!
//! ## Degenerate Input
//! The calculation never fails. Instead:
//! - A tempo that is not strictly positive (including NaN) yields the
//!   all-zero [`TimingResult`]
//! - Negative beat or measure counts are clamped to zero
//! - Any intermediate NaN collapses to zero
//!
//! ## Example
//! ```rust
//! use timing_calc::calculate;
//!
//! let result = calculate(120.0, 4.0, 32.0);
//! assert_eq!(result.one_beat, 0.5);
//! assert_eq!(result.one_measure, 2.0);
//! assert_eq!(result.song_length, 64.0);
//! assert_eq!(result.song_length_min.minutes, 1.0);
//! assert_eq!(result.song_length_min.seconds, 4.0);
//! ```

use serde::Serialize;

const SECONDS_PER_MINUTE: f64 = 60.0;

/// Raw numeric inputs for one calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingInputs {
    /// Beats per minute
    pub tempo: f64,
    pub beats_per_measure: f64,
    pub measure_count: f64,
}

impl TimingInputs {
    pub fn new(tempo: f64, beats_per_measure: f64, measure_count: f64) -> Self {
        Self {
            tempo,
            beats_per_measure,
            measure_count,
        }
    }

    pub fn calculate(&self) -> TimingResult {
        calculate(self.tempo, self.beats_per_measure, self.measure_count)
    }
}

/// A duration split into whole minutes and remaining seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MinutesSeconds {
    /// Whole minutes. Kept as `f64` so an infinite song length stays infinite.
    pub minutes: f64,
    pub seconds: f64,
}

impl MinutesSeconds {
    /// Split a duration in seconds, guarding both parts against NaN.
    pub fn from_seconds(total: f64) -> Self {
        Self {
            minutes: or_zero((total / SECONDS_PER_MINUTE).floor()),
            seconds: or_zero(total % SECONDS_PER_MINUTE),
        }
    }
}

/// A named field of a timing result, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultField {
    OneBeat,
    OneMeasure,
    SongLength,
    SongLengthMin,
}

impl ResultField {
    pub const ALL: [ResultField; 4] = [
        ResultField::OneBeat,
        ResultField::OneMeasure,
        ResultField::SongLength,
        ResultField::SongLengthMin,
    ];

    /// Element id of the page output showing this field.
    pub fn id(self) -> &'static str {
        match self {
            ResultField::OneBeat => "one-beat",
            ResultField::OneMeasure => "one-measure",
            ResultField::SongLength => "song-length",
            ResultField::SongLengthMin => "song-length-min",
        }
    }

    pub fn from_id(id: &str) -> Option<ResultField> {
        Self::ALL.into_iter().find(|field| field.id() == id)
    }
}

/// The value of one result field: a plain duration or a minutes/seconds split.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeValue {
    Seconds(f64),
    MinutesSeconds(MinutesSeconds),
}

/// Durations in seconds derived from [`TimingInputs`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingResult {
    pub one_beat: f64,
    pub one_measure: f64,
    pub song_length: f64,
    pub song_length_min: MinutesSeconds,
}

impl TimingResult {
    /// The all-zero result produced for an unusable tempo.
    pub const ZERO: TimingResult = TimingResult {
        one_beat: 0.0,
        one_measure: 0.0,
        song_length: 0.0,
        song_length_min: MinutesSeconds {
            minutes: 0.0,
            seconds: 0.0,
        },
    };

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    pub fn value(&self, field: ResultField) -> TimeValue {
        match field {
            ResultField::OneBeat => TimeValue::Seconds(self.one_beat),
            ResultField::OneMeasure => TimeValue::Seconds(self.one_measure),
            ResultField::SongLength => TimeValue::Seconds(self.song_length),
            ResultField::SongLengthMin => TimeValue::MinutesSeconds(self.song_length_min),
        }
    }
}

/// Calculate beat, measure and song durations.
///
/// # Example
/// ```rust
/// use timing_calc::{calculate, TimingResult};
///
/// // Zero tempo is not an error, just an empty result
/// assert_eq!(calculate(0.0, 4.0, 32.0), TimingResult::ZERO);
///
/// // Negative beat count is clamped to zero
/// let result = calculate(100.0, -3.0, 10.0);
/// assert_eq!(result.one_beat, 0.6);
/// assert_eq!(result.one_measure, 0.0);
/// assert_eq!(result.song_length, 0.0);
/// ```
pub fn calculate(tempo: f64, beats_per_measure: f64, measure_count: f64) -> TimingResult {
    if tempo.is_nan() || tempo <= 0.0 {
        log::trace!("Tempo {} is not positive, using zero result", tempo);
        return TimingResult::ZERO;
    }

    let one_beat = SECONDS_PER_MINUTE / tempo;
    let one_measure = or_zero(one_beat * clamp_non_negative(beats_per_measure));
    let song_length = or_zero(one_measure * clamp_non_negative(measure_count));

    TimingResult {
        one_beat,
        one_measure,
        song_length,
        song_length_min: MinutesSeconds::from_seconds(song_length),
    }
}

/// `max(value, 0)` that keeps NaN as NaN.
fn clamp_non_negative(value: f64) -> f64 {
    if value.is_nan() {
        value
    } else {
        value.max(0.0)
    }
}

/// Collapse NaN and negative zero to `0.0`.
fn or_zero(value: f64) -> f64 {
    if value.is_nan() || value == 0.0 {
        0.0
    } else {
        value
    }
}
