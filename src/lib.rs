//! `Coastwatch` - beach safety advisories for Indian coastal destinations
//!
//! This library answers natural-language questions about Indian beaches by
//! orchestrating a geocoder, a weather service, a tsunami bulletin and an
//! encyclopedia, classifying the result with a rule-based safety verdict.

pub mod advisory;
pub mod alert;
pub mod api;
pub mod config;
pub mod details;
pub mod error;
pub mod llm;
pub mod location;
pub mod models;
pub mod narrative;
pub mod resolver;
pub mod safety;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use api::AppState;
pub use config::AppConfig;
pub use error::CoastwatchError;
pub use models::{
    BeachDetails, Coordinates, SafetyStatus, SafetyVerdict, Sourced, StatusColor, WeatherSnapshot,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, CoastwatchError>;
