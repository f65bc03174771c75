//! Prediction Core
//!
//! Core implementations for temperature prediction: the parametric
//! seasonal-cycle climatology, the anchor/climatology blend estimator, and
//! the validation service that ties them together.

pub mod blend;
pub mod climatology;
pub mod service;

// Re-export SPI types for implementations
pub use prediction_spi::{
    AnchorSource, ClimatologyEstimate, ClimatologyProvider, Explanation, Interval, Prediction,
    PredictionError, PredictionRequest, Result,
};

// Re-export main types
pub use blend::{blend_estimate, BlendEstimator};
pub use climatology::{seasonal_normals, SeasonalCycleClimatology};
pub use service::{validate_coordinates, validated_lead_days, PredictionService};
