//! Seasonal-cycle climatology implementation
//!
//! A closed-form parametric stand-in for a historical climatology lookup,
//! kept swappable behind the `ClimatologyProvider` seam.

use chrono::{Datelike, NaiveDate};
use prediction_spi::{ClimatologyEstimate, ClimatologyProvider};

/// Day of year of the seasonal temperature peak in the northern hemisphere (~July 15)
const NORTHERN_PEAK_DAY: f64 = 196.0;
/// Day of year of the seasonal temperature peak in the southern hemisphere (~January 15)
const SOUTHERN_PEAK_DAY: f64 = 15.0;
/// Mean length of the calendar year in days
const DAYS_PER_YEAR: f64 = 365.25;
/// Seasonal amplitude gained per degree of latitude
const AMPLITUDE_PER_DEGREE: f64 = 0.4;
/// Annual-mean temperature at the equator
const EQUATORIAL_BASE_MEAN: f64 = 25.0;
/// Mean temperature lost per degree of latitude toward the poles
const COOLING_PER_DEGREE: f64 = 0.6;
/// Variability floor shared by all latitudes
const BASE_STD: f64 = 2.0;
/// Additional standard deviation per degree of latitude
const STD_PER_DEGREE: f64 = 0.05;

/// Parametric seasonal-cycle climatology
///
/// Produces a deterministic mean/std pair from latitude and calendar day
/// alone. Behavior outside latitude [-90, 90] is undefined; callers validate
/// upstream.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeasonalCycleClimatology;

impl SeasonalCycleClimatology {
    pub fn new() -> Self {
        Self
    }
}

impl ClimatologyProvider for SeasonalCycleClimatology {
    fn climatology(&self, latitude: f64, target_date: NaiveDate) -> ClimatologyEstimate {
        seasonal_normals(latitude, target_date.ordinal())
    }
}

/// Seasonal mean/std pair for a latitude and day of year (1-366)
pub fn seasonal_normals(latitude: f64, day_of_year: u32) -> ClimatologyEstimate {
    let peak_day = if latitude >= 0.0 {
        NORTHERN_PEAK_DAY
    } else {
        SOUTHERN_PEAK_DAY
    };
    let phase = 2.0 * std::f64::consts::PI * (day_of_year as f64 - peak_day) / DAYS_PER_YEAR;

    let amplitude = latitude.abs() * AMPLITUDE_PER_DEGREE;
    let base_mean = EQUATORIAL_BASE_MEAN - latitude.abs() * COOLING_PER_DEGREE;
    let mean = base_mean + amplitude * phase.cos();

    // Variability is largest near the seasonal peak and trough, smallest at
    // the inflection of the cosine
    let base_std = BASE_STD + latitude.abs() * STD_PER_DEGREE;
    let std_dev = base_std * (1.0 + 0.5 * phase.cos().abs());

    ClimatologyEstimate { mean, std_dev }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JULY_PEAK: u32 = 196;
    const JANUARY_PEAK: u32 = 15;

    #[test]
    fn test_seasonal_asymmetry_northern_hemisphere() {
        // Northern summer is warmer than northern winter at the same latitude
        let summer = seasonal_normals(45.0, JULY_PEAK);
        let winter = seasonal_normals(45.0, JANUARY_PEAK);
        assert!(summer.mean > winter.mean);
    }

    #[test]
    fn test_hemisphere_inversion() {
        // The southern hemisphere peaks in January instead of July
        let south_january = seasonal_normals(-45.0, JANUARY_PEAK);
        let south_july = seasonal_normals(-45.0, JULY_PEAK);
        assert!(south_january.mean > south_july.mean);
    }

    #[test]
    fn test_mean_at_peak_day() {
        // At the peak day the phase is zero, so mean = base + full amplitude
        let estimate = seasonal_normals(60.0, JULY_PEAK);
        let expected = (25.0 - 60.0 * 0.6) + 60.0 * 0.4;
        assert!((estimate.mean - expected).abs() < 1e-9);
    }

    #[test]
    fn test_equator_has_no_seasonal_cycle() {
        for day in [1, 100, 196, 300, 365] {
            let estimate = seasonal_normals(0.0, day);
            assert!((estimate.mean - 25.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_amplitude_grows_with_latitude() {
        let low_lat = seasonal_normals(20.0, JULY_PEAK).mean - seasonal_normals(20.0, JANUARY_PEAK).mean;
        let high_lat =
            seasonal_normals(60.0, JULY_PEAK).mean - seasonal_normals(60.0, JANUARY_PEAK).mean;
        assert!(high_lat > low_lat);
    }

    #[test]
    fn test_std_bounds() {
        // std is base * [1.0, 1.5] depending on the seasonal phase
        for lat in [-80.0, -30.0, 0.0, 30.0, 80.0] {
            let base = 2.0 + f64::abs(lat) * 0.05;
            for day in 1..=366 {
                let estimate = seasonal_normals(lat, day);
                assert!(estimate.std_dev >= base - 1e-9);
                assert!(estimate.std_dev <= 1.5 * base + 1e-9);
            }
        }
    }

    #[test]
    fn test_std_peaks_with_the_season() {
        // Largest spread near the seasonal extremes, smallest a quarter cycle away
        let at_peak = seasonal_normals(45.0, JULY_PEAK);
        let quarter_later = seasonal_normals(45.0, JULY_PEAK + 91);
        assert!(at_peak.std_dev > quarter_later.std_dev);
    }

    #[test]
    fn test_provider_uses_day_of_year() {
        let provider = SeasonalCycleClimatology::new();
        let date = NaiveDate::from_ymd_opt(2026, 7, 15).unwrap();
        let via_provider = provider.climatology(60.4833, date);
        let direct = seasonal_normals(60.4833, date.ordinal());
        assert_eq!(via_provider, direct);
    }

    #[test]
    fn test_leap_day_is_defined() {
        let provider = SeasonalCycleClimatology::new();
        let leap_day = NaiveDate::from_ymd_opt(2028, 2, 29).unwrap();
        let estimate = provider.climatology(50.0, leap_day);
        assert!(estimate.std_dev > 0.0);
        assert!(estimate.mean.is_finite());
    }
}
