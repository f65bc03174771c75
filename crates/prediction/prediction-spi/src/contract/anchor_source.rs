//! Trait for resolving the short-range forecast anchor

use async_trait::async_trait;

/// Trait for resolving a short-range forecast anchor temperature.
///
/// Implementations resolve transport and parse failures internally: an absent
/// anchor is a first-class `None`, never an error. Callers hand the resolved
/// value to the blend estimator, which falls back to climatology on `None`.
#[async_trait]
pub trait AnchorSource: Send + Sync {
    /// Daily-mean temperature at the anchor day for the given location, if
    /// the forecast source has one
    async fn anchor_temperature(
        &self,
        latitude: f64,
        longitude: f64,
        lead_days: u32,
    ) -> Option<f64>;
}
