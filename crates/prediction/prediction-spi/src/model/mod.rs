//! Model module containing data structures

mod climatology_estimate;
mod prediction;
mod request;

pub use climatology_estimate::ClimatologyEstimate;
pub use prediction::{Explanation, Interval, Prediction};
pub use request::PredictionRequest;
