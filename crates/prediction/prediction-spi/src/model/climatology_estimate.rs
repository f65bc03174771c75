//! Climatology estimate model

use serde::{Deserialize, Serialize};

/// Long-run seasonal estimate for a location and calendar day
///
/// Derived purely from `(latitude, day_of_year)`, recomputed on demand, no
/// identity or lifecycle beyond the call that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClimatologyEstimate {
    /// Climatological mean temperature
    pub mean: f64,
    /// Climatological standard deviation (non-negative)
    pub std_dev: f64,
}
