//! weatherdash - location-aware weather dashboard
//!
//! This library provides the core functionality for the dashboard: location
//! persistence, Open-Meteo geocoding and forecast clients, pure rendering of
//! panel content and the HTTP surface serving the frontend.

pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod geocoding;
pub mod models;
pub mod render;
pub mod store;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use config::DashboardConfig;
pub use dashboard::{Dashboard, PanelSet};
pub use error::WeatherdashError;
pub use geocoding::{CandidateLocation, GeocodingClient};
pub use models::{CurrentConditions, ForecastDay, Location, weather_code_to_description};
pub use render::{CurrentView, ForecastDayView, PanelState, SearchView};
pub use store::LocationStore;
pub use weather::{DEFAULT_FORECAST_DAYS, WeatherClient};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WeatherdashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
