//! Current weather conditions and the WMO weather code table

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Instantaneous weather snapshot for the active location.
/// Recomputed on every fetch, never persisted.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CurrentConditions {
    /// Temperature in Celsius
    pub temperature: f64,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// WMO weather code reported by the API
    pub weather_code: i32,
    /// Local observation time as reported by the API
    pub observed_at: NaiveDateTime,
    /// Timezone the observation time is expressed in
    pub timezone: String,
}

/// Convert a WMO weather code to a human-readable description.
/// Codes outside the known set resolve to "Unknown".
#[must_use]
pub fn weather_code_to_description(code: i32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Foggy",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        71 => "Slight snow",
        73 => "Moderate snow",
        75 => "Heavy snow",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "Clear sky")]
    #[case(2, "Partly cloudy")]
    #[case(3, "Overcast")]
    #[case(45, "Foggy")]
    #[case(61, "Slight rain")]
    #[case(75, "Heavy snow")]
    #[case(95, "Thunderstorm")]
    #[case(99, "Thunderstorm with heavy hail")]
    fn test_known_weather_codes(#[case] code: i32, #[case] expected: &str) {
        assert_eq!(weather_code_to_description(code), expected);
    }

    #[rstest]
    #[case(13)]
    #[case(-1)]
    #[case(100)]
    #[case(4)]
    fn test_unknown_weather_codes(#[case] code: i32) {
        assert_eq!(weather_code_to_description(code), "Unknown");
    }
}
