//! # meteo
//!
//! Open-Meteo forecast anchor client. Resolves the daily-mean temperature at
//! the anchor day for a location, turning every transport, status, or parse
//! failure into an absent anchor (`None`) rather than an error. The blend's
//! fallback policy takes it from there.

use std::time::Duration;

use async_trait::async_trait;
use prediction_spi::AnchorSource;
use serde::Deserialize;

/// Furthest day out the anchor is ever taken from
pub const MAX_ANCHOR_LEAD_DAYS: u32 = 10;
/// Timeout for a single forecast request
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com";

/// Client for the Open-Meteo daily forecast API
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: Option<DailySeries>,
}

#[derive(Debug, Deserialize)]
struct DailySeries {
    #[serde(default)]
    temperature_2m_mean: Vec<Option<f64>>,
}

impl OpenMeteoClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different host (tests, proxies)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(concat!("weather-fortune/", env!("CARGO_PKG_VERSION")))
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("reqwest client"),
            base_url: base_url.into(),
        }
    }

    async fn fetch_daily_means(
        &self,
        latitude: f64,
        longitude: f64,
        forecast_days: u32,
    ) -> reqwest::Result<ForecastResponse> {
        self.client
            .get(format!("{}/v1/forecast", self.base_url))
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("daily", "temperature_2m_mean".to_string()),
                ("forecast_days", forecast_days.to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

impl Default for OpenMeteoClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnchorSource for OpenMeteoClient {
    async fn anchor_temperature(
        &self,
        latitude: f64,
        longitude: f64,
        lead_days: u32,
    ) -> Option<f64> {
        let day = anchor_day(lead_days);
        match self.fetch_daily_means(latitude, longitude, day + 1).await {
            Ok(response) => anchor_from_response(&response, day),
            Err(err) => {
                tracing::warn!("forecast anchor fetch failed: {err}");
                None
            }
        }
    }
}

/// Index into the daily series the anchor is read from: the target day inside
/// the short-lead window, day 10 beyond it
pub fn anchor_day(lead_days: u32) -> u32 {
    lead_days.min(MAX_ANCHOR_LEAD_DAYS)
}

fn anchor_from_response(response: &ForecastResponse, day: u32) -> Option<f64> {
    response
        .daily
        .as_ref()
        .and_then(|series| series.temperature_2m_mean.get(day as usize).copied())
        .flatten()
}
