//! # fortune-cli
//!
//! Command-line interface for the Weather Fortune prediction service.

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use meteo::OpenMeteoClient;
use prediction_facade::{
    validated_lead_days, AnchorSource, ClimatologyProvider, PredictionRequest, PredictionService,
    SeasonalCycleClimatology,
};

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "fortune")]
#[command(about = "Temperature prediction CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict the temperature for a location and date
    Predict {
        /// Latitude in decimal degrees
        #[arg(long)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long)]
        lon: f64,

        /// Target date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Use this anchor temperature instead of fetching one
        #[arg(long)]
        anchor: Option<f64>,

        /// Additive correction applied after blending
        #[arg(long, default_value = "0.0")]
        ai_offset: f64,

        /// Skip the forecast fetch and fall back to climatology
        #[arg(long)]
        offline: bool,
    },

    /// Show the climatological mean/std for a location and date
    Climatology {
        /// Latitude in decimal degrees
        #[arg(long)]
        lat: f64,

        /// Target date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Predict {
            lat,
            lon,
            date,
            anchor,
            ai_offset,
            offline,
        } => run_predict(lat, lon, &date, anchor, ai_offset, offline).await,
        Commands::Climatology { lat, date } => run_climatology(lat, &date),
    };

    if let Err(message) = outcome {
        eprintln!("Error: {}", message);
        std::process::exit(1);
    }
}

fn parse_date(input: &str) -> CliResult<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date '{}'. Use YYYY-MM-DD", input))
}

async fn run_predict(
    lat: f64,
    lon: f64,
    date: &str,
    anchor: Option<f64>,
    ai_offset: f64,
    offline: bool,
) -> CliResult<()> {
    let request = PredictionRequest {
        latitude: lat,
        longitude: lon,
        target_date: parse_date(date)?,
        reference_date: Local::now().date_naive(),
    };

    let anchor = match (anchor, offline) {
        (Some(value), _) => Some(value),
        (None, true) => None,
        (None, false) => {
            let lead_days = validated_lead_days(&request).map_err(|e| e.to_string())?;
            OpenMeteoClient::new()
                .anchor_temperature(lat, lon, lead_days)
                .await
        }
    };

    let service = PredictionService::new(SeasonalCycleClimatology::new());
    let prediction = service
        .predict(&request, anchor, ai_offset)
        .map_err(|e| e.to_string())?;

    let json = serde_json::to_string_pretty(&prediction.rounded()).map_err(|e| e.to_string())?;
    println!("{}", json);
    Ok(())
}

fn run_climatology(lat: f64, date: &str) -> CliResult<()> {
    let target_date = parse_date(date)?;
    let estimate = SeasonalCycleClimatology::new().climatology(lat, target_date);
    println!("mean: {:.1} C  std: {:.1} C", estimate.mean, estimate.std_dev);
    Ok(())
}
