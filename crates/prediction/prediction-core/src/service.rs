//! Prediction service
//!
//! The single entry point in front of the estimators: validates a request,
//! resolves the lead time, looks up climatology, and runs the blend. The
//! forecast anchor arrives already resolved into an `Option`; fetching it is
//! the caller's concern.

use prediction_spi::{
    ClimatologyProvider, Prediction, PredictionError, PredictionRequest, Result,
};

use crate::blend::BlendEstimator;

/// Latitude bounds accepted by the service
const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
/// Longitude bounds accepted by the service
const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// Orchestrates validation, climatology lookup, and blending
pub struct PredictionService<C: ClimatologyProvider> {
    climatology: C,
    blender: BlendEstimator,
}

impl<C: ClimatologyProvider> PredictionService<C> {
    pub fn new(climatology: C) -> Self {
        Self {
            climatology,
            blender: BlendEstimator::new(),
        }
    }

    /// Service with a non-default blend configuration
    pub fn with_blender(climatology: C, blender: BlendEstimator) -> Self {
        Self {
            climatology,
            blender,
        }
    }

    /// Produce a prediction for an already-resolved anchor.
    ///
    /// A `None` anchor is the forecast source saying it had nothing; that is
    /// handled by the blend's fallback policy, not reported as an error.
    /// Validation failures (out-of-range coordinates, past target dates) are
    /// rejected here with descriptive errors, never silently clamped.
    pub fn predict(
        &self,
        request: &PredictionRequest,
        anchor: Option<f64>,
        ai_offset: f64,
    ) -> Result<Prediction> {
        validate_coordinates(request)?;
        let lead_days = validated_lead_days(request)?;
        let climatology = self
            .climatology
            .climatology(request.latitude, request.target_date);
        Ok(self
            .blender
            .estimate(lead_days, anchor, &climatology, ai_offset))
    }
}

/// Reject out-of-range (or non-finite) coordinates
pub fn validate_coordinates(request: &PredictionRequest) -> Result<()> {
    check_range("lat", request.latitude, LATITUDE_RANGE)?;
    check_range("lon", request.longitude, LONGITUDE_RANGE)?;
    Ok(())
}

/// Non-negative lead time in days, or an error for past target dates
pub fn validated_lead_days(request: &PredictionRequest) -> Result<u32> {
    let lead = request.lead_days();
    if lead < 0 {
        return Err(Box::new(PredictionError::PastTargetDate {
            target: request.target_date,
            reference: request.reference_date,
        }));
    }
    Ok(lead as u32)
}

fn check_range(name: &str, value: f64, (min, max): (f64, f64)) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(Box::new(PredictionError::CoordinateOutOfRange {
            name: name.to_string(),
            value,
            min,
            max,
        }))
    }
}
