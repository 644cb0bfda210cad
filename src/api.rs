//! HTTP API for the dashboard frontend
//!
//! Thin handlers over the store, the clients and the pure render functions.
//! Errors are logged and mapped to a status code plus an inline message; a
//! zero-result search is a normal 200 response.

use crate::geocoding::{CandidateLocation, GeocodingClient};
use crate::models::Location;
use crate::render::{
    CurrentView, ForecastDayView, SearchView, render_current, render_forecast, render_search,
};
use crate::store::LocationStore;
use crate::weather::{DEFAULT_FORECAST_DAYS, WeatherClient};
use crate::WeatherdashError;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

/// Shared state for the API handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<LocationStore>,
    pub geocoding: GeocodingClient,
    pub weather: WeatherClient,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/location", get(get_location).put(put_location))
        .route("/search", get(search))
        .route("/current", get(current))
        .route("/forecast", get(forecast))
        .with_state(state)
}

/// JSON error body sent to the frontend
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

struct ApiError(WeatherdashError);

impl From<WeatherdashError> for ApiError {
    fn from(err: WeatherdashError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            WeatherdashError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            WeatherdashError::Network { .. }
            | WeatherdashError::Http { .. }
            | WeatherdashError::Parse { .. } => StatusCode::BAD_GATEWAY,
            WeatherdashError::Config { .. } | WeatherdashError::Store { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        error!("API request failed: {}", self.0);
        let body = ErrorBody {
            error: self.0.user_message(),
        };
        (status, Json(body)).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LocationResponse {
    pub location: Location,
    pub label: String,
}

async fn get_location(State(state): State<AppState>) -> Json<LocationResponse> {
    let location = state.store.get();
    let label = location.label();
    Json(LocationResponse { location, label })
}

async fn put_location(
    State(state): State<AppState>,
    Json(candidate): Json<CandidateLocation>,
) -> Result<Json<LocationResponse>, ApiError> {
    let location = Location::from(candidate);
    state.store.set(&location)?;
    let label = location.label();
    Ok(Json(LocationResponse { location, label }))
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    q: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub candidates: Vec<CandidateLocation>,
    pub view: SearchView,
}

async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let candidates = state.geocoding.search(&params.q).await?;
    let view = render_search(&candidates);
    Ok(Json(SearchResponse { candidates, view }))
}

async fn current(State(state): State<AppState>) -> Result<Json<CurrentView>, ApiError> {
    let location = state.store.get();
    let conditions = state.weather.fetch_current(&location).await?;
    Ok(Json(render_current(&conditions)))
}

#[derive(Debug, Deserialize)]
struct ForecastParams {
    days: Option<u32>,
}

async fn forecast(
    State(state): State<AppState>,
    Query(params): Query<ForecastParams>,
) -> Result<Json<Vec<ForecastDayView>>, ApiError> {
    let location = state.store.get();
    let days = params.days.unwrap_or(DEFAULT_FORECAST_DAYS);
    let forecast = state.weather.fetch_forecast(&location, days).await?;
    Ok(Json(render_forecast(&forecast)))
}
