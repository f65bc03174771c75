//! Basic example demonstrating a blended temperature prediction
//!
//! Run with: cargo run --example basic -p prediction-facade

use chrono::NaiveDate;
use prediction_facade::{
    seasonal_normals, PredictionRequest, PredictionService, SeasonalCycleClimatology,
};

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    println!("=== Weather Fortune Basic Examples ===\n");

    // 1. Seasonal climatology for Borlänge, Sweden
    println!("1. Seasonal climatology at 60.48 N");
    let july = seasonal_normals(60.4833, 196);
    let january = seasonal_normals(60.4833, 15);
    println!("   July 15:    mean {:.1} C, std {:.1} C", july.mean, july.std_dev);
    println!("   January 15: mean {:.1} C, std {:.1} C\n", january.mean, january.std_dev);

    // 2. Short-lead prediction with a forecast anchor
    println!("2. Five-day prediction with a 10.0 C anchor");
    let service = PredictionService::new(SeasonalCycleClimatology::new());
    let request = PredictionRequest {
        latitude: 60.4833,
        longitude: 15.4167,
        target_date: NaiveDate::from_ymd_opt(2026, 8, 11).unwrap(),
        reference_date: NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
    };
    let prediction = service.predict(&request, Some(10.0), 0.0)?;
    println!("{}\n", serde_json::to_string_pretty(&prediction.rounded())?);

    // 3. Long-lead prediction falls back toward climatology
    println!("3. Thirty-day prediction without an anchor");
    let request = PredictionRequest {
        target_date: NaiveDate::from_ymd_opt(2026, 9, 5).unwrap(),
        ..request
    };
    let prediction = service.predict(&request, None, 0.0)?;
    println!("{}", serde_json::to_string_pretty(&prediction.rounded())?);

    println!("\n=== Examples Complete ===");
    Ok(())
}
