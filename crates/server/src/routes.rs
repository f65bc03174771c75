//! API route handlers

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{Local, NaiveDate};
use prediction_facade::{
    validate_coordinates, validated_lead_days, AnchorSource, Prediction, PredictionError,
    PredictionRequest,
};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Additive correction seam; stays 0.0 until an offset model exists
const AI_OFFSET: f64 = 0.0;

#[derive(Debug, Deserialize)]
pub struct PredictQuery {
    pub lat: f64,
    pub lon: f64,
    /// Target date, YYYY-MM-DD
    pub date: String,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub temp: f64,
    pub low80: f64,
    pub high80: f64,
    pub low95: f64,
    pub high95: f64,
    pub explain: ExplainBody,
}

#[derive(Debug, Serialize)]
pub struct ExplainBody {
    pub anchor: Option<f64>,
    pub climo: f64,
    pub w_anchor: f64,
    pub ai_offset: f64,
    pub days_ahead: u32,
    pub climo_std: f64,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<Prediction> for PredictResponse {
    fn from(prediction: Prediction) -> Self {
        let rounded = prediction.rounded();
        Self {
            temp: rounded.point_estimate,
            low80: rounded.band80.low,
            high80: rounded.band80.high,
            low95: rounded.band95.low,
            high95: rounded.band95.high,
            explain: ExplainBody {
                anchor: rounded.explanation.anchor,
                climo: rounded.explanation.climatology_mean,
                w_anchor: rounded.explanation.anchor_weight,
                ai_offset: rounded.explanation.ai_offset,
                days_ahead: rounded.explanation.lead_days,
                climo_std: rounded.explanation.climatology_std,
            },
        }
    }
}

pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Weather Fortune API" }))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

type Rejection = (StatusCode, Json<ErrorResponse>);

pub async fn predict(
    State(state): State<AppState>,
    Query(query): Query<PredictQuery>,
) -> Result<Json<PredictResponse>, Rejection> {
    let target_date = parse_target_date(&query.date).map_err(bad_request)?;
    let request = PredictionRequest {
        latitude: query.lat,
        longitude: query.lon,
        target_date,
        reference_date: Local::now().date_naive(),
    };

    // Validate before spending a forecast request
    validate_coordinates(&request).map_err(bad_request)?;
    let lead_days = validated_lead_days(&request).map_err(bad_request)?;

    let anchor = state
        .anchors
        .anchor_temperature(request.latitude, request.longitude, lead_days)
        .await;

    let prediction = state
        .service
        .predict(&request, anchor, AI_OFFSET)
        .map_err(bad_request)?;

    Ok(Json(prediction.into()))
}

fn parse_target_date(input: &str) -> Result<NaiveDate, PredictionError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| PredictionError::InvalidDateFormat {
        input: input.to_string(),
    })
}

fn bad_request(error: impl std::fmt::Display) -> Rejection {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
}
