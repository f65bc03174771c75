//! Prediction Service Provider Interface
//!
//! Defines the contracts, value-object models, and error types shared by the
//! temperature prediction stack.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{AnchorSource, ClimatologyProvider};
pub use error::{PredictionError, Result};
pub use model::{ClimatologyEstimate, Explanation, Interval, Prediction, PredictionRequest};
