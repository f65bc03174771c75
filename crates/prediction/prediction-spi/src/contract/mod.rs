//! Contract module containing trait definitions for prediction collaborators

mod anchor_source;
mod climatology_provider;

pub use anchor_source::AnchorSource;
pub use climatology_provider::ClimatologyProvider;
