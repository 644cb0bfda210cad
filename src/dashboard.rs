//! Dashboard controller
//!
//! Owns the per-panel state machines and drives the fetch-and-render
//! pipeline. The location store is the single source of truth: every fetch
//! re-reads it and passes the location explicitly into the clients, and a
//! selection refreshes every mounted panel rather than probing for whichever
//! handler happens to exist.

use crate::geocoding::{CandidateLocation, GeocodingClient};
use crate::models::Location;
use crate::render::{
    CurrentView, ForecastDayView, PanelState, SearchView, render_current, render_forecast,
    render_search,
};
use crate::store::LocationStore;
use crate::weather::{DEFAULT_FORECAST_DAYS, WeatherClient};
use crate::Result;
use tracing::{error, info};

/// Which panels are mounted on the page. A location change refreshes all
/// mounted panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelSet {
    pub current: bool,
    pub forecast: bool,
}

impl PanelSet {
    /// Both weather panels mounted
    #[must_use]
    pub fn all() -> Self {
        Self {
            current: true,
            forecast: true,
        }
    }

    /// Only the current-weather panel mounted
    #[must_use]
    pub fn current_only() -> Self {
        Self {
            current: true,
            forecast: false,
        }
    }

    /// Only the forecast panel mounted
    #[must_use]
    pub fn forecast_only() -> Self {
        Self {
            current: false,
            forecast: true,
        }
    }
}

/// State and behavior of one dashboard instance
pub struct Dashboard {
    store: LocationStore,
    geocoding: GeocodingClient,
    weather: WeatherClient,
    panels: PanelSet,
    /// Visible location label, e.g. "New York, United States"
    pub location_label: String,
    pub current: PanelState<CurrentView>,
    pub forecast: PanelState<Vec<ForecastDayView>>,
    pub search: PanelState<SearchView>,
}

impl Dashboard {
    /// Create a dashboard with the given mounted panels. Panels start idle
    /// until [`Dashboard::load`] runs.
    #[must_use]
    pub fn new(
        store: LocationStore,
        geocoding: GeocodingClient,
        weather: WeatherClient,
        panels: PanelSet,
    ) -> Self {
        let location_label = store.get().label();
        Self {
            store,
            geocoding,
            weather,
            panels,
            location_label,
            current: PanelState::Idle,
            forecast: PanelState::Idle,
            search: PanelState::Idle,
        }
    }

    /// Page-load trigger: refresh the location label and every mounted panel
    pub async fn load(&mut self) {
        let location = self.store.get();
        self.location_label = location.label();
        self.refresh_panels(&location).await;
    }

    /// Search-submit trigger. An empty query is rejected with a validation
    /// error before any network call and leaves the search panel untouched;
    /// any other outcome moves the panel through loading into content or
    /// error. Zero matches render the distinct no-results view.
    pub async fn submit_search(&mut self, query: &str) -> Result<()> {
        if query.trim().is_empty() {
            return Err(crate::WeatherdashError::validation(
                "Please enter a city name",
            ));
        }

        self.search = PanelState::Loading;
        match self.geocoding.search(query).await {
            Ok(candidates) => {
                self.search = PanelState::Content(render_search(&candidates));
            }
            Err(e) => {
                error!("Error searching location: {}", e);
                self.search = PanelState::Error("Search failed. Please try again.".to_string());
            }
        }
        Ok(())
    }

    /// Selection trigger: persist the chosen candidate, update the label,
    /// hide the search results and refresh every mounted panel.
    pub async fn select(&mut self, candidate: CandidateLocation) -> Result<()> {
        let location = Location::from(candidate);
        self.store.set(&location)?;
        info!("Selected location: {}", location.label());

        self.location_label = location.label();
        self.search = PanelState::Idle;
        self.refresh_panels(&location).await;
        Ok(())
    }

    async fn refresh_panels(&mut self, location: &Location) {
        if self.panels.current {
            self.current = PanelState::Loading;
            self.current = match self.weather.fetch_current(location).await {
                Ok(conditions) => PanelState::Content(render_current(&conditions)),
                Err(e) => {
                    error!("Error fetching current weather: {}", e);
                    PanelState::Error(format!("Failed to load weather data. {}", e.user_message()))
                }
            };
        }

        if self.panels.forecast {
            self.forecast = PanelState::Loading;
            self.forecast = match self
                .weather
                .fetch_forecast(location, DEFAULT_FORECAST_DAYS)
                .await
            {
                Ok(days) => PanelState::Content(render_forecast(&days)),
                Err(e) => {
                    error!("Error fetching forecast: {}", e);
                    PanelState::Error(format!(
                        "Failed to load forecast data. {}",
                        e.user_message()
                    ))
                }
            };
        }
    }
}
