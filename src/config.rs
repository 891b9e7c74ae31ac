//! Configuration loading from TOML with environment overrides.
//!
//! Reads `config.toml` (or the file named by `WEATHER_CONFIG`) into
//! strongly-typed structs. A missing file is not an error: every field
//! has a default. `PORT` overrides the listen port, as container
//! platforms expect.

use anyhow::{Context, Result};
use chrono_tz::Tz;
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;

/// Default config file path.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub weather: WeatherConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct WeatherConfig {
    /// IANA zone used for hour and date buckets.
    pub timezone: String,
    /// Forecast length when `?days=` is omitted.
    pub default_forecast_days: u32,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            timezone: "Pacific/Auckland".to_string(),
            default_forecast_days: 3,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        Self::parse(&contents).with_context(|| format!("Failed to parse config file: {path}"))
    }

    /// Parse and validate configuration from a TOML string.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, defaults otherwise, then apply
    /// environment overrides.
    pub fn load_or_default(path: &str) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::load(path)?
        } else {
            Self::default()
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply `PORT` from the environment, if set.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(port) = std::env::var("PORT") {
            self.server.port = port
                .parse()
                .with_context(|| format!("Invalid PORT value: {port}"))?;
        }
        Ok(())
    }

    /// Check values that serde alone cannot.
    pub fn validate(&self) -> Result<()> {
        self.timezone()?;
        let days = self.weather.default_forecast_days;
        if !(crate::generator::MIN_FORECAST_DAYS..=crate::generator::MAX_FORECAST_DAYS)
            .contains(&days)
        {
            anyhow::bail!("default_forecast_days must be between 1 and 7, got {days}");
        }
        Ok(())
    }

    /// The configured bucket time zone.
    pub fn timezone(&self) -> Result<Tz> {
        self.weather
            .timezone
            .parse::<Tz>()
            .map_err(|e| anyhow::anyhow!("Invalid timezone '{}': {e}", self.weather.timezone))
    }

    /// Socket address to listen on.
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .with_context(|| format!("Invalid listen address: {addr}"))
    }
}
