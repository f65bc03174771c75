//! Trait for climatology lookup

use chrono::NaiveDate;

use crate::model::ClimatologyEstimate;

/// Trait for climatology lookup
///
/// Consumers depend only on the `(mean, std)` output shape, so the parametric
/// seasonal model can later be swapped for a historical-record lookup without
/// touching the blend.
pub trait ClimatologyProvider: Send + Sync {
    /// Long-run mean/variability estimate for a latitude and calendar date
    fn climatology(&self, latitude: f64, target_date: NaiveDate) -> ClimatologyEstimate;
}
