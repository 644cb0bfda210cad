//! Location model for geographic coordinates and metadata

use serde::{Deserialize, Serialize};

/// Named geographic point used as the basis for all weather queries
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// Location name (city, region, etc.)
    pub name: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Country name
    pub country: String,
    /// IANA timezone identifier, or "auto" to let the API resolve one
    pub timezone: String,
}

impl Location {
    /// Create a new location
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        country: impl Into<String>,
        timezone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
            country: country.into(),
            timezone: timezone.into(),
        }
    }

    /// Display label shown next to the panels, e.g. "New York, United States"
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }

    /// Timezone to pass to the weather API, falling back to automatic
    /// resolution when none is set
    #[must_use]
    pub fn timezone_or_auto(&self) -> &str {
        if self.timezone.trim().is_empty() {
            "auto"
        } else {
            &self.timezone
        }
    }
}

impl Default for Location {
    /// The location used until the user selects one
    fn default() -> Self {
        Self::new(
            "New York",
            40.7128,
            -74.0060,
            "United States",
            "America/New_York",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_location() {
        let location = Location::default();
        assert_eq!(location.name, "New York");
        assert_eq!(location.country, "United States");
        assert_eq!(location.latitude, 40.7128);
        assert_eq!(location.longitude, -74.0060);
        assert_eq!(location.timezone, "America/New_York");
    }

    #[test]
    fn test_label() {
        let location = Location::default();
        assert_eq!(location.label(), "New York, United States");
    }

    #[test]
    fn test_timezone_or_auto() {
        let mut location = Location::default();
        assert_eq!(location.timezone_or_auto(), "America/New_York");

        location.timezone = String::new();
        assert_eq!(location.timezone_or_auto(), "auto");

        location.timezone = "   ".to_string();
        assert_eq!(location.timezone_or_auto(), "auto");
    }
}
