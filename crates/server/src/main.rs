//! # fortune-server
//!
//! REST API server for the Weather Fortune temperature prediction service.
//! Blends short-range Open-Meteo forecasts with seasonal climatology and
//! serves calibrated uncertainty bands.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use meteo::OpenMeteoClient;
use prediction_facade::{PredictionService, SeasonalCycleClimatology};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod routes;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    service: Arc<PredictionService<SeasonalCycleClimatology>>,
    anchors: OpenMeteoClient,
}

#[tokio::main]
async fn main() {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fortune_server=info,tower_http=info".into()),
        )
        .init();

    // Create application state
    let state = AppState {
        service: Arc::new(PredictionService::new(SeasonalCycleClimatology::new())),
        anchors: OpenMeteoClient::new(),
    };

    // CORS configuration: exact frontend origin, since credentials are allowed
    let origin = env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let cors = CorsLayer::new()
        .allow_origin(
            origin
                .parse::<HeaderValue>()
                .expect("CORS_ORIGIN must be a valid origin"),
        )
        .allow_methods([Method::GET])
        .allow_credentials(true);

    // Build router with middleware
    let app = Router::new()
        .route("/", get(routes::root))
        .route("/health", get(routes::health))
        .route("/api/predict", get(routes::predict))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    // Server configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8000".to_string())
        .parse()
        .expect("PORT must be a valid number");
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("Invalid HOST:PORT configuration");

    tracing::info!(
        "fortune-server v{} listening on {}",
        env!("CARGO_PKG_VERSION"),
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
