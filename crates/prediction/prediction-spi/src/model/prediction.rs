//! Prediction result model

use serde::{Deserialize, Serialize};

/// Symmetric uncertainty interval around a point estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    /// Lower bound
    pub low: f64,
    /// Upper bound
    pub high: f64,
}

impl Interval {
    /// Interval centered on `center` with the given half-width
    pub fn centered(center: f64, half_width: f64) -> Self {
        Self {
            low: center - half_width,
            high: center + half_width,
        }
    }

    /// Width of the interval
    pub fn width(&self) -> f64 {
        self.high - self.low
    }
}

/// Provenance snapshot of every term used to produce a point estimate
///
/// Always returned alongside the prediction, never omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    /// Forecast anchor temperature, if the forecast source returned one
    pub anchor: Option<f64>,
    /// Climatological mean used in the blend
    pub climatology_mean: f64,
    /// Blend weight given to the anchor, in [0, 1]
    pub anchor_weight: f64,
    /// Additive correction from the AI offset seam
    pub ai_offset: f64,
    /// Days between the reference and target dates
    pub lead_days: u32,
    /// Climatological standard deviation the bands are derived from
    pub climatology_std: f64,
}

/// Blended temperature prediction with calibrated uncertainty bands
///
/// Invariant: `band95.low <= band80.low <= point_estimate <= band80.high <=
/// band95.high`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Blended point estimate, AI offset included
    pub point_estimate: f64,
    /// Interval intended to contain the outcome with ~80% coverage
    pub band80: Interval,
    /// Interval intended to contain the outcome with ~95% coverage
    pub band95: Interval,
    /// How the estimate was derived
    pub explanation: Explanation,
}

impl Prediction {
    /// Presentation copy with temperatures and bounds at 1 decimal place and
    /// the anchor weight at 2.
    ///
    /// All arithmetic upstream stays full precision; call this only when
    /// building outward-facing output.
    pub fn rounded(&self) -> Self {
        Self {
            point_estimate: round_to(self.point_estimate, 1),
            band80: round_interval(self.band80),
            band95: round_interval(self.band95),
            explanation: Explanation {
                anchor: self.explanation.anchor.map(|a| round_to(a, 1)),
                climatology_mean: round_to(self.explanation.climatology_mean, 1),
                anchor_weight: round_to(self.explanation.anchor_weight, 2),
                ai_offset: round_to(self.explanation.ai_offset, 1),
                lead_days: self.explanation.lead_days,
                climatology_std: round_to(self.explanation.climatology_std, 1),
            },
        }
    }
}

fn round_interval(interval: Interval) -> Interval {
    Interval {
        low: round_to(interval.low, 1),
        high: round_to(interval.high, 1),
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
