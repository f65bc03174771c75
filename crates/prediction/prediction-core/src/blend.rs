//! Blend estimator
//!
//! Blends a short-range forecast anchor with a climatological estimate and
//! derives symmetric 80%/95% uncertainty bands around the result.

use prediction_spi::{ClimatologyEstimate, Explanation, Interval, Prediction};

/// Longest lead, in days, at which the anchor is trusted outright
pub const SHORT_LEAD_MAX_DAYS: u32 = 10;
/// Half-life, in days, of the anchor weight beyond the short-lead window
pub const DECAY_HALF_LIFE_DAYS: f64 = 7.0;
/// Minimum half-width of the 80% band
const UNCERTAINTY_FLOOR: f64 = 1.0;
/// Contribution of climatological spread to the 80% half-width
const STD_FACTOR: f64 = 0.6;
/// Band widening per day of lead time
const LEAD_FACTOR: f64 = 0.1;
/// Ratio of the 95% half-width to the 80% half-width
const BAND95_RATIO: f64 = 1.6;

/// Anchor/climatology blend estimator
///
/// Stateless pure transform; identical inputs always yield identical outputs,
/// and it may be invoked concurrently without coordination.
#[derive(Debug, Clone, Copy)]
pub struct BlendEstimator {
    short_lead_max_days: u32,
    half_life_days: f64,
}

impl BlendEstimator {
    pub fn new() -> Self {
        Self {
            short_lead_max_days: SHORT_LEAD_MAX_DAYS,
            half_life_days: DECAY_HALF_LIFE_DAYS,
        }
    }

    /// Override the short-lead cutoff and decay half-life
    pub fn with_decay(short_lead_max_days: u32, half_life_days: f64) -> Self {
        Self {
            short_lead_max_days,
            half_life_days,
        }
    }

    /// Weight the anchor would receive at this lead time, ignoring whether
    /// one is available
    fn decay_weight(&self, lead_days: u32) -> f64 {
        if lead_days <= self.short_lead_max_days {
            1.0
        } else {
            0.5_f64.powf((lead_days - self.short_lead_max_days) as f64 / self.half_life_days)
        }
    }

    /// Blend the anchor (when present) with the climatological mean and
    /// attach uncertainty bands.
    ///
    /// An absent anchor always falls back to climatology alone, and the
    /// explanation reports the 0.0 weight that was actually used rather than
    /// the weight the decay formula would have produced.
    pub fn estimate(
        &self,
        lead_days: u32,
        anchor: Option<f64>,
        climatology: &ClimatologyEstimate,
        ai_offset: f64,
    ) -> Prediction {
        let (anchor_weight, blended) = match anchor {
            Some(value) => {
                let w = self.decay_weight(lead_days);
                (w, w * value + (1.0 - w) * climatology.mean)
            }
            None => (0.0, climatology.mean),
        };
        let point_estimate = blended + ai_offset;

        let half80 = (STD_FACTOR * climatology.std_dev + LEAD_FACTOR * lead_days as f64)
            .max(UNCERTAINTY_FLOOR);
        let half95 = BAND95_RATIO * half80;

        Prediction {
            point_estimate,
            band80: Interval::centered(point_estimate, half80),
            band95: Interval::centered(point_estimate, half95),
            explanation: Explanation {
                anchor,
                climatology_mean: climatology.mean,
                anchor_weight,
                ai_offset,
                lead_days,
                climatology_std: climatology.std_dev,
            },
        }
    }
}

impl Default for BlendEstimator {
    fn default() -> Self {
        Self::new()
    }
}

/// Blend with the default cutoff and half-life
pub fn blend_estimate(
    lead_days: u32,
    anchor: Option<f64>,
    climatology: &ClimatologyEstimate,
    ai_offset: f64,
) -> Prediction {
    BlendEstimator::new().estimate(lead_days, anchor, climatology, ai_offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn climatology(mean: f64, std_dev: f64) -> ClimatologyEstimate {
        ClimatologyEstimate { mean, std_dev }
    }

    #[test]
    fn test_band_ordering_invariant() {
        let climo = climatology(8.0, 3.0);
        for lead_days in 0..60 {
            for anchor in [Some(10.0), Some(-5.0), None] {
                let p = blend_estimate(lead_days, anchor, &climo, 0.0);
                assert!(p.band95.low <= p.band80.low);
                assert!(p.band80.low <= p.point_estimate);
                assert!(p.point_estimate <= p.band80.high);
                assert!(p.band80.high <= p.band95.high);
            }
        }
    }

    #[test]
    fn test_weight_bounds() {
        let climo = climatology(8.0, 3.0);
        for lead_days in 0..120 {
            for anchor in [Some(10.0), None] {
                let w = blend_estimate(lead_days, anchor, &climo, 0.0)
                    .explanation
                    .anchor_weight;
                assert!((0.0..=1.0).contains(&w), "weight {} at lead {}", w, lead_days);
            }
        }
    }

    #[test]
    fn test_short_lead_uses_anchor_outright() {
        let climo = climatology(8.0, 3.0);
        for lead_days in [0, 1, 5, 10] {
            let p = blend_estimate(lead_days, Some(10.0), &climo, 0.5);
            assert_eq!(p.explanation.anchor_weight, 1.0);
            assert!((p.point_estimate - 10.5).abs() < 1e-12);
        }
    }

    #[test]
    fn test_missing_anchor_falls_back_to_climatology() {
        let climo = climatology(5.0, 2.0);
        for lead_days in [0, 3, 10, 11, 30, 90] {
            let p = blend_estimate(lead_days, None, &climo, 0.0);
            assert_eq!(p.explanation.anchor_weight, 0.0);
            assert_eq!(p.point_estimate, 5.0);
            assert_eq!(p.explanation.anchor, None);
        }
    }

    #[test]
    fn test_fallback_applies_ai_offset() {
        let climo = climatology(5.0, 2.0);
        let p = blend_estimate(3, None, &climo, 1.5);
        assert!((p.point_estimate - 6.5).abs() < 1e-12);
    }

    #[test]
    fn test_weight_decays_monotonically_past_the_window() {
        let climo = climatology(8.0, 3.0);
        let mut previous = 1.0;
        for lead_days in 11..60 {
            let w = blend_estimate(lead_days, Some(10.0), &climo, 0.0)
                .explanation
                .anchor_weight;
            assert!(w < previous, "weight did not decay at lead {}", lead_days);
            assert!(w > 0.0);
            previous = w;
        }
    }

    #[test]
    fn test_decay_half_life() {
        // One half-life past the window the weight is exactly 0.5
        let climo = climatology(8.0, 3.0);
        let p = blend_estimate(17, Some(10.0), &climo, 0.0);
        assert!((p.explanation.anchor_weight - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_long_lead_blend_example() {
        // lead 30, anchor 10, climo mean 2: w = 0.5^(20/7) ~ 0.138
        let climo = climatology(2.0, 3.0);
        let p = blend_estimate(30, Some(10.0), &climo, 0.0);
        let expected_w = 0.5_f64.powf(20.0 / 7.0);
        assert!((p.explanation.anchor_weight - expected_w).abs() < 1e-12);
        assert!((p.point_estimate - (expected_w * 10.0 + (1.0 - expected_w) * 2.0)).abs() < 1e-12);
        assert!((p.point_estimate - 3.104).abs() < 0.01);
    }

    #[test]
    fn test_uncertainty_floor() {
        // Tiny spread and zero lead still yield a 1.0 degree half-width
        let climo = climatology(25.0, 0.1);
        let p = blend_estimate(0, Some(25.0), &climo, 0.0);
        assert!((p.band80.high - p.point_estimate - 1.0).abs() < 1e-12);
        assert!((p.band95.high - p.point_estimate - 1.6).abs() < 1e-12);
    }

    #[test]
    fn test_bands_widen_with_variance() {
        let mut previous_width = 0.0;
        for std_dev in [1.0, 2.0, 3.0, 5.0, 8.0] {
            let p = blend_estimate(5, Some(10.0), &climatology(8.0, std_dev), 0.0);
            assert!(p.band80.width() >= previous_width);
            previous_width = p.band80.width();
        }
    }

    #[test]
    fn test_bands_widen_with_lead_time() {
        let climo = climatology(8.0, 3.0);
        let near = blend_estimate(2, Some(10.0), &climo, 0.0);
        let far = blend_estimate(40, Some(10.0), &climo, 0.0);
        assert!(far.band80.width() > near.band80.width());
    }

    #[test]
    fn test_end_to_end_example() {
        // lead 5, anchor 10.0, climo (8.0, 3.0): base = max(1.0, 0.6*3 + 0.1*5) = 2.3
        let p = blend_estimate(5, Some(10.0), &climatology(8.0, 3.0), 0.0);
        assert_eq!(p.explanation.anchor_weight, 1.0);
        assert!((p.point_estimate - 10.0).abs() < 1e-12);
        assert!((p.band80.low - 7.7).abs() < 1e-12);
        assert!((p.band80.high - 12.3).abs() < 1e-12);
        assert!((p.band95.low - 6.32).abs() < 1e-12);
        assert!((p.band95.high - 13.68).abs() < 1e-12);
    }

    #[test]
    fn test_explanation_snapshot_is_complete() {
        let p = blend_estimate(12, Some(4.0), &climatology(6.0, 2.5), 0.3);
        let e = &p.explanation;
        assert_eq!(e.anchor, Some(4.0));
        assert_eq!(e.climatology_mean, 6.0);
        assert_eq!(e.climatology_std, 2.5);
        assert_eq!(e.ai_offset, 0.3);
        assert_eq!(e.lead_days, 12);
    }

    #[test]
    fn test_zero_anchor_is_not_treated_as_missing() {
        // 0.0 degrees is a real forecast, not absence
        let p = blend_estimate(5, Some(0.0), &climatology(8.0, 3.0), 0.0);
        assert_eq!(p.explanation.anchor, Some(0.0));
        assert_eq!(p.explanation.anchor_weight, 1.0);
        assert!((p.point_estimate - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_custom_decay_parameters() {
        let estimator = BlendEstimator::with_decay(5, 3.0);
        let climo = climatology(8.0, 3.0);
        // One half-life past the custom window
        let p = estimator.estimate(8, Some(10.0), &climo, 0.0);
        assert!((p.explanation.anchor_weight - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_referential_transparency() {
        let climo = climatology(8.0, 3.0);
        let a = blend_estimate(21, Some(9.5), &climo, 0.0);
        let b = blend_estimate(21, Some(9.5), &climo, 0.0);
        assert_eq!(a, b);
    }
}
