use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use weatherdash::api::AppState;
use weatherdash::{DashboardConfig, GeocodingClient, LocationStore, WeatherClient, web};

fn init_tracing(config: &DashboardConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.logging.format == "compact" {
        builder.compact().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = std::env::args().nth(1).map(Into::into);
    let config = DashboardConfig::load_from_path(config_path)?;
    init_tracing(&config);

    tracing::info!("weatherdash {} starting", weatherdash::VERSION);

    // No request timeout: a hung upstream call leaves its panel loading
    // until the user re-triggers it.
    let client = reqwest::Client::new();
    let state = AppState {
        store: Arc::new(LocationStore::new(config.location_file())),
        geocoding: GeocodingClient::new(client.clone(), config.weather.geocoding_base_url.clone()),
        weather: WeatherClient::new(client, config.weather.base_url.clone()),
    };

    web::run(config.server.port, state).await
}
