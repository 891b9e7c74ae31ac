//! Shared types for the weather service.
//!
//! These types form the data model used by the catalog, the generator
//! and the HTTP layer. Everything here is either static reference data
//! or an ephemeral value computed per request.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Conditions
// ---------------------------------------------------------------------------

/// One of the fixed weather-state tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionCode {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rainy,
    Stormy,
    Windy,
    Foggy,
    Snowy,
}

impl ConditionCode {
    /// All condition codes in declaration order.
    pub const ALL: &'static [ConditionCode] = &[
        ConditionCode::Sunny,
        ConditionCode::PartlyCloudy,
        ConditionCode::Cloudy,
        ConditionCode::Rainy,
        ConditionCode::Stormy,
        ConditionCode::Windy,
        ConditionCode::Foggy,
        ConditionCode::Snowy,
    ];

    /// Wire code, e.g. `partly_cloudy`.
    pub fn code(&self) -> &'static str {
        match self {
            ConditionCode::Sunny => "sunny",
            ConditionCode::PartlyCloudy => "partly_cloudy",
            ConditionCode::Cloudy => "cloudy",
            ConditionCode::Rainy => "rainy",
            ConditionCode::Stormy => "stormy",
            ConditionCode::Windy => "windy",
            ConditionCode::Foggy => "foggy",
            ConditionCode::Snowy => "snowy",
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ConditionCode::Sunny => "Sunny",
            ConditionCode::PartlyCloudy => "Partly Cloudy",
            ConditionCode::Cloudy => "Cloudy",
            ConditionCode::Rainy => "Rainy",
            ConditionCode::Stormy => "Stormy",
            ConditionCode::Windy => "Windy",
            ConditionCode::Foggy => "Foggy",
            ConditionCode::Snowy => "Snowy",
        }
    }

    /// Emoji icon.
    pub fn icon(&self) -> &'static str {
        match self {
            ConditionCode::Sunny => "☀️",
            ConditionCode::PartlyCloudy => "⛅",
            ConditionCode::Cloudy => "☁️",
            ConditionCode::Rainy => "🌧️",
            ConditionCode::Stormy => "⛈️",
            ConditionCode::Windy => "💨",
            ConditionCode::Foggy => "🌫️",
            ConditionCode::Snowy => "❄️",
        }
    }

    /// The full serializable definition of this condition.
    pub fn definition(&self) -> WeatherCondition {
        WeatherCondition {
            code: *self,
            name: self.name().to_string(),
            icon: self.icon().to_string(),
        }
    }
}

/// A condition as it appears in API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherCondition {
    pub code: ConditionCode,
    pub name: String,
    pub icon: String,
}

// ---------------------------------------------------------------------------
// City profiles
// ---------------------------------------------------------------------------

/// Static climate profile for a known city.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CityProfile {
    /// ISO 3166 alpha-2 country code.
    pub country: &'static str,
    pub temp_min: f64,
    pub temp_max: f64,
    pub typical_conditions: &'static [ConditionCode],
}

// ---------------------------------------------------------------------------
// Generated weather
// ---------------------------------------------------------------------------

/// Current conditions for a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub city: String,
    pub country: String,
    pub temperature_celsius: f64,
    pub temperature_fahrenheit: f64,
    /// 0–100
    pub humidity_percent: u8,
    pub wind_speed_kmh: f64,
    pub condition: WeatherCondition,
    pub feels_like_celsius: f64,
}

/// A single forecast day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Weekday name, e.g. "Monday".
    pub day: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub high_celsius: f64,
    pub low_celsius: f64,
    pub condition: WeatherCondition,
    pub chance_of_rain_percent: u8,
}

/// A multi-day forecast, ordered from tomorrow onwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub city: String,
    pub country: String,
    pub days: Vec<ForecastDay>,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Domain errors surfaced by the generator's validating entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WeatherError {
    #[error("City not found: {0}")]
    NotFound(String),

    #[error("Days must be between {min} and {max}")]
    InvalidRange { days: i64, min: u32, max: u32 },
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
