//! Prediction error types

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while validating a prediction request
///
/// Anchor unavailability is deliberately not represented here: a missing
/// forecast is a first-class `None` handled by the blend's fallback policy,
/// not a failure.
#[derive(Error, Debug)]
pub enum PredictionError {
    /// Target date earlier than the reference date
    #[error("Cannot predict for past dates: {target} is before {reference}")]
    PastTargetDate {
        target: NaiveDate,
        reference: NaiveDate,
    },

    /// Coordinate outside its valid range
    #[error("Invalid coordinate '{name}': {value} is outside [{min}, {max}]")]
    CoordinateOutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Date string that does not parse as a calendar date
    #[error("Invalid date format. Use YYYY-MM-DD")]
    InvalidDateFormat { input: String },
}
