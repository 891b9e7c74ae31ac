//! DataTorque Weather API
//!
//! Entry point. Loads configuration, initialises structured logging and
//! serves the HTTP API until Ctrl+C.

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use datatorque_weather::config::{self, AppConfig};
use datatorque_weather::generator::clock::SystemClock;
use datatorque_weather::generator::WeatherGenerator;
use datatorque_weather::server::{self, routes::ServiceState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    let config_path =
        std::env::var("WEATHER_CONFIG").unwrap_or_else(|_| config::DEFAULT_CONFIG_FILE.to_string());
    let cfg = AppConfig::load_or_default(&config_path)?;

    init_logging();

    let tz = cfg.timezone()?;
    let addr = cfg.listen_addr()?;
    info!(
        config = %config_path,
        timezone = %tz.name(),
        default_forecast_days = cfg.weather.default_forecast_days,
        "Weather API starting up..."
    );

    let generator = WeatherGenerator::new(Arc::new(SystemClock), tz);
    let state = Arc::new(ServiceState::new(generator, cfg.weather.default_forecast_days));

    server::serve(state, addr).await?;

    info!("Weather API shutting down...");
    Ok(())
}

/// Initialise the `tracing` subscriber.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("datatorque_weather=info,tower_http=info"));

    let json_logging = std::env::var("WEATHER_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    }
}
