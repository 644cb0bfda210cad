//! Data models for the weatherdash application
//!
//! This module contains the core domain models organized by concern:
//! - Location: Geographic coordinates and metadata
//! - Weather: Current conditions and the weather code table
//! - Forecast: Daily high/low temperature entries

pub mod forecast;
pub mod location;
pub mod weather;

// Re-export all public types for convenient access
pub use forecast::ForecastDay;
pub use location::Location;
pub use weather::{CurrentConditions, weather_code_to_description};
