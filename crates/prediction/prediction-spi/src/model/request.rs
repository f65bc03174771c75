//! Prediction request model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A point-location prediction request
///
/// Coordinate ranges and `target_date >= reference_date` are enforced by the
/// validation in front of the estimators, not by this struct.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Latitude in decimal degrees, [-90, 90]
    pub latitude: f64,
    /// Longitude in decimal degrees, [-180, 180]
    pub longitude: f64,
    /// Calendar date the prediction is for
    pub target_date: NaiveDate,
    /// Calendar date the prediction is made on
    pub reference_date: NaiveDate,
}

impl PredictionRequest {
    /// Signed lead time in days; negative when the target is in the past
    pub fn lead_days(&self) -> i64 {
        self.target_date
            .signed_duration_since(self.reference_date)
            .num_days()
    }
}
