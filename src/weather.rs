//! Weather client for the Open-Meteo forecast API
//!
//! Fetches instantaneous conditions and daily high/low forecasts for a
//! location's coordinates and timezone.

use crate::models::{CurrentConditions, ForecastDay, Location};
use crate::{Result, WeatherdashError};
use chrono::NaiveDateTime;
use reqwest::Client;
use tracing::{debug, info, warn};

/// Number of forecast days requested when the caller does not specify one
pub const DEFAULT_FORECAST_DAYS: u32 = 7;

/// HTTP client for coordinates-to-weather lookups
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
}

impl WeatherClient {
    /// Create a client against the given weather API base URL
    #[must_use]
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch instantaneous weather for the location's coordinates and
    /// timezone, falling back to automatic timezone resolution when unset
    pub async fn fetch_current(&self, location: &Location) -> Result<CurrentConditions> {
        let url = format!(
            "{}/v1/forecast?latitude={}&longitude={}&current_weather=true&timezone={}",
            self.base_url,
            location.latitude,
            location.longitude,
            urlencoding::encode(location.timezone_or_auto())
        );
        debug!("Current weather request URL: {}", url);

        let payload: openmeteo::CurrentResponse = self.get_json(&url).await?;
        let conditions = conditions_from_response(payload, location)?;
        info!(
            "Current weather for {}: {}°C, code {}",
            location.name, conditions.temperature, conditions.weather_code
        );
        Ok(conditions)
    }

    /// Fetch max/min daily temperatures for `days` consecutive days starting
    /// today. The returned sequence is as long as the upstream response.
    pub async fn fetch_forecast(&self, location: &Location, days: u32) -> Result<Vec<ForecastDay>> {
        let url = format!(
            "{}/v1/forecast?latitude={}&longitude={}&daily=temperature_2m_max,temperature_2m_min&forecast_days={}&timezone={}",
            self.base_url,
            location.latitude,
            location.longitude,
            days,
            urlencoding::encode(location.timezone_or_auto())
        );
        debug!("Forecast request URL: {}", url);

        let payload: openmeteo::ForecastResponse = self.get_json(&url).await?;
        let forecast = forecast_from_response(payload)?;
        info!(
            "Forecast for {}: {} day(s) returned",
            location.name,
            forecast.len()
        );
        Ok(forecast)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("Weather request failed with {}", status);
            return Err(WeatherdashError::Http {
                status: status.as_u16(),
            });
        }
        response
            .json()
            .await
            .map_err(|e| WeatherdashError::parse(format!("weather response: {e}")))
    }
}

fn conditions_from_response(
    payload: openmeteo::CurrentResponse,
    location: &Location,
) -> Result<CurrentConditions> {
    let current = payload
        .current_weather
        .ok_or_else(|| WeatherdashError::parse("response is missing current_weather"))?;

    // Open-Meteo reports local time without seconds, e.g. "2024-01-01T15:00"
    let observed_at = NaiveDateTime::parse_from_str(&current.time, "%Y-%m-%dT%H:%M")
        .map_err(|e| WeatherdashError::parse(format!("observation time '{}': {e}", current.time)))?;

    Ok(CurrentConditions {
        temperature: current.temperature,
        wind_speed: current.windspeed,
        weather_code: current.weathercode,
        observed_at,
        timezone: payload
            .timezone
            .unwrap_or_else(|| location.timezone_or_auto().to_string()),
    })
}

fn forecast_from_response(payload: openmeteo::ForecastResponse) -> Result<Vec<ForecastDay>> {
    let daily = payload
        .daily
        .ok_or_else(|| WeatherdashError::parse("response is missing daily data"))?;

    // time, temperature_2m_max and temperature_2m_min are co-indexed; the
    // time axis defines how many days the upstream actually returned.
    daily
        .time
        .iter()
        .enumerate()
        .map(|(i, date)| {
            let high_temp = daily.temperature_2m_max.get(i).copied().ok_or_else(|| {
                WeatherdashError::parse("temperature_2m_max shorter than time axis")
            })?;
            let low_temp = daily.temperature_2m_min.get(i).copied().ok_or_else(|| {
                WeatherdashError::parse("temperature_2m_min shorter than time axis")
            })?;
            Ok(ForecastDay {
                date: *date,
                high_temp,
                low_temp,
            })
        })
        .collect()
}

/// Open-Meteo API response structures
mod openmeteo {
    use chrono::NaiveDate;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct CurrentResponse {
        pub current_weather: Option<CurrentWeather>,
        pub timezone: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct CurrentWeather {
        pub temperature: f64,
        pub windspeed: f64,
        pub weathercode: i32,
        /// Local observation time, "%Y-%m-%dT%H:%M"
        pub time: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub daily: Option<DailyData>,
    }

    #[derive(Debug, Deserialize)]
    pub struct DailyData {
        pub time: Vec<NaiveDate>,
        pub temperature_2m_max: Vec<f64>,
        pub temperature_2m_min: Vec<f64>,
    }
}
