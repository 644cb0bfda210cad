//! Geocoding client for the Open-Meteo geocoding API
//!
//! Resolves free-text place names into candidate locations. An empty result
//! set from the upstream is a valid outcome, distinct from an error.

use crate::models::Location;
use crate::{Result, WeatherdashError};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Maximum number of candidates requested per search
const RESULT_LIMIT: u32 = 5;

/// One geocoding match as returned by the upstream service
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CandidateLocation {
    /// Place name
    pub name: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Country name, when the upstream provides one
    #[serde(default)]
    pub country: Option<String>,
    /// First-level administrative area (state, region)
    #[serde(default)]
    pub admin1: Option<String>,
    /// IANA timezone identifier, when the upstream provides one
    #[serde(default)]
    pub timezone: Option<String>,
}

impl From<CandidateLocation> for Location {
    fn from(candidate: CandidateLocation) -> Self {
        Location::new(
            candidate.name,
            candidate.latitude,
            candidate.longitude,
            candidate.country.unwrap_or_else(|| "Unknown".to_string()),
            candidate.timezone.unwrap_or_else(|| "auto".to_string()),
        )
    }
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    /// Absent or empty when the query has no matches
    results: Option<Vec<CandidateLocation>>,
}

/// HTTP client for name-to-coordinates lookups
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    client: Client,
    base_url: String,
}

impl GeocodingClient {
    /// Create a client against the given geocoding base URL
    #[must_use]
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Search for locations matching a free-text query.
    ///
    /// The query must be non-empty after trimming; an empty query is rejected
    /// with a validation error before any network call. Returns an empty Vec
    /// when the upstream reports no matches.
    pub async fn search(&self, query: &str) -> Result<Vec<CandidateLocation>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(WeatherdashError::validation("Please enter a city name"));
        }

        let url = format!(
            "{}/v1/search?name={}&count={}&language=en&format=json",
            self.base_url,
            urlencoding::encode(query),
            RESULT_LIMIT
        );
        debug!("Geocoding request URL: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("Geocoding request for '{}' failed with {}", query, status);
            return Err(WeatherdashError::Http {
                status: status.as_u16(),
            });
        }

        let payload: GeocodingResponse = response
            .json()
            .await
            .map_err(|e| WeatherdashError::parse(format!("geocoding response: {e}")))?;

        let candidates = payload.results.unwrap_or_default();
        if candidates.is_empty() {
            info!("No geocoding results for '{}'", query);
        } else {
            info!("Found {} geocoding results for '{}'", candidates.len(), query);
        }
        Ok(candidates)
    }
}
