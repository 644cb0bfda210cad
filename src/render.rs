//! Pure presentation functions
//!
//! Rendering maps (panel state, data) to a description of UI content. No
//! side effects live here; the web layer and tests both consume the same
//! view structs.

use crate::geocoding::CandidateLocation;
use crate::models::{CurrentConditions, ForecastDay, weather_code_to_description};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Message shown when a geocoding search matched nothing. A valid outcome,
/// rendered distinctly from an error.
pub const NO_RESULTS_MESSAGE: &str = "No locations found. Try another city.";

/// Lifecycle of a single dashboard panel. Re-entrant: any trigger moves the
/// panel back to `Loading`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum PanelState<T> {
    Idle,
    Loading,
    Content(T),
    Error(String),
}

impl<T> PanelState<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, PanelState::Loading)
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, PanelState::Error(_))
    }
}

/// Display-ready current conditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentView {
    pub temperature: String,
    pub wind_speed: String,
    pub conditions: String,
    pub observed_at: String,
    pub timezone: String,
}

/// Display-ready forecast day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDayView {
    pub date: String,
    pub high: String,
    pub low: String,
}

/// Display-ready search result entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultView {
    /// Primary line, e.g. "Berlin, Germany"
    pub heading: String,
    /// Secondary line with the administrative area, when known
    pub detail: Option<String>,
}

/// Outcome of a search as shown in the search panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SearchView {
    Results(Vec<SearchResultView>),
    NoResults(String),
}

/// Render current conditions into display strings
#[must_use]
pub fn render_current(conditions: &CurrentConditions) -> CurrentView {
    CurrentView {
        temperature: format!("{}°C", conditions.temperature),
        wind_speed: format!("{} km/h", conditions.wind_speed),
        conditions: weather_code_to_description(conditions.weather_code).to_string(),
        observed_at: format_datetime(conditions.observed_at),
        timezone: conditions.timezone.clone(),
    }
}

/// Render forecast days into display strings, one view entry per day returned
#[must_use]
pub fn render_forecast(days: &[ForecastDay]) -> Vec<ForecastDayView> {
    days.iter()
        .map(|day| ForecastDayView {
            date: format_date(day.date),
            high: format!("High: {}°C", day.high_temp),
            low: format!("Low: {}°C", day.low_temp),
        })
        .collect()
}

/// Render geocoding candidates; an empty slice becomes the distinct
/// no-results view rather than an error
#[must_use]
pub fn render_search(candidates: &[CandidateLocation]) -> SearchView {
    if candidates.is_empty() {
        return SearchView::NoResults(NO_RESULTS_MESSAGE.to_string());
    }
    SearchView::Results(
        candidates
            .iter()
            .map(|candidate| SearchResultView {
                heading: match &candidate.country {
                    Some(country) => format!("{}, {}", candidate.name, country),
                    None => candidate.name.clone(),
                },
                detail: candidate.admin1.clone(),
            })
            .collect(),
    )
}

/// Format a forecast date as abbreviated weekday/month/day, e.g. "Mon, Jan 1"
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// Format an observation timestamp as month/day/year with 12-hour time,
/// e.g. "Jan 1, 2024, 03:05 PM"
#[must_use]
pub fn format_datetime(datetime: NaiveDateTime) -> String {
    datetime.format("%b %-d, %Y, %I:%M %p").to_string()
}
