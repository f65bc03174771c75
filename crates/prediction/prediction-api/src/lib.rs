//! Prediction Consumer API
//!
//! Consumer configurations for the prediction stack.
//!
//! This crate provides:
//! - Configuration types for the blend estimator and the offset seam
//! - Re-exports from SPI and core for convenience

// Re-export from core
pub use prediction_core::{
    blend, blend_estimate, climatology, seasonal_normals, service, validate_coordinates,
    validated_lead_days, BlendEstimator, PredictionService, SeasonalCycleClimatology,
};

// Re-export contracts, models, and errors from SPI
pub use prediction_spi::{
    AnchorSource, ClimatologyEstimate, ClimatologyProvider, Explanation, Interval, Prediction,
    PredictionError, PredictionRequest, Result,
};

use serde::{Deserialize, Serialize};

/// Configuration for the anchor blend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlendConfig {
    /// Longest lead (days) at which the anchor is trusted outright
    pub short_lead_max_days: u32,
    /// Half-life (days) of the anchor weight beyond that window
    pub half_life_days: f64,
}

impl Default for BlendConfig {
    fn default() -> Self {
        Self {
            short_lead_max_days: blend::SHORT_LEAD_MAX_DAYS,
            half_life_days: blend::DECAY_HALF_LIFE_DAYS,
        }
    }
}

impl BlendConfig {
    /// Build the estimator this configuration describes
    pub fn build(&self) -> BlendEstimator {
        BlendEstimator::with_decay(self.short_lead_max_days, self.half_life_days)
    }
}

/// Configuration for the additive correction seam
///
/// Stays 0.0 until an offset model exists; kept addressable so a future model
/// slots in without touching the blend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffsetConfig {
    /// Correction added after blending
    pub ai_offset: f64,
}

impl Default for OffsetConfig {
    fn default() -> Self {
        Self { ai_offset: 0.0 }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{BlendConfig, OffsetConfig};
    pub use prediction_core::{
        blend_estimate, seasonal_normals, BlendEstimator, PredictionService,
        SeasonalCycleClimatology,
    };
    pub use prediction_spi::{
        AnchorSource, ClimatologyEstimate, ClimatologyProvider, Explanation, Interval, Prediction,
        PredictionError, PredictionRequest, Result,
    };
}
