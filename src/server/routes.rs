//! API route handlers.
//!
//! All endpoints return JSON. Errors are rendered as `{"detail": ...}`
//! with the matching status code. State is shared via `Arc<ServiceState>`.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

use crate::catalog;
use crate::generator::WeatherGenerator;
use crate::types::{CurrentWeather, Forecast, WeatherCondition, WeatherError};

/// Display name reported by `/api` and the dashboard.
pub const SERVICE_NAME: &str = "DataTorque Weather API";

// ---------------------------------------------------------------------------
// Shared state
// ---------------------------------------------------------------------------

/// Read-only state shared by all handlers.
pub struct ServiceState {
    pub generator: WeatherGenerator,
    pub default_forecast_days: u32,
}

impl ServiceState {
    pub fn new(generator: WeatherGenerator, default_forecast_days: u32) -> Self {
        Self {
            generator,
            default_forecast_days,
        }
    }
}

pub type AppState = Arc<ServiceState>;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Per-request failures, each mapped to one HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Weather data not found for city: {0}")]
    WeatherNotFound(String),

    #[error("Forecast data not found for city: {0}")]
    ForecastNotFound(String),

    #[error("{0}")]
    InvalidRange(WeatherError),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::WeatherNotFound(_) | ApiError::ForecastNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidRange(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidQuery(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn from_forecast(err: WeatherError, city: &str) -> Self {
        match err {
            WeatherError::InvalidRange { .. } => ApiError::InvalidRange(err),
            WeatherError::NotFound(_) => ApiError::ForecastNotFound(city.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "detail": self.to_string() }));
        (self.status(), body).into_response()
    }
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiInfo {
    pub service: &'static str,
    pub version: &'static str,
    pub health: &'static str,
    pub cities: Vec<&'static str>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastParams {
    /// Kept as text so oversized integers reach the range check.
    pub days: Option<String>,
}

/// Parse a `days` query value.
///
/// Any integer is accepted, saturating at the `i64` bounds; anything else
/// is an invalid query.
pub fn parse_days(raw: &str) -> Result<i64, ApiError> {
    let raw = raw.trim();
    if let Ok(days) = raw.parse::<i64>() {
        return Ok(days);
    }
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::InvalidQuery(format!(
            "days must be an integer, got '{raw}'"
        )));
    }
    Ok(if negative { i64::MIN } else { i64::MAX })
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/weather/{city}
pub async fn get_weather(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Json<CurrentWeather>, ApiError> {
    match state.generator.current_checked(&city) {
        Ok(weather) => Ok(Json(weather)),
        Err(e) => {
            debug!(city = %city, error = %e, "Current weather lookup failed");
            Err(ApiError::WeatherNotFound(city))
        }
    }
}

/// GET /api/v1/weather/{city}/forecast?days=N
pub async fn get_forecast(
    State(state): State<AppState>,
    Path(city): Path<String>,
    params: Result<Query<ForecastParams>, QueryRejection>,
) -> Result<Json<Forecast>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::InvalidQuery(e.body_text()))?;
    let days = match params.days.as_deref() {
        Some(raw) => parse_days(raw)?,
        None => i64::from(state.default_forecast_days),
    };

    state
        .generator
        .forecast_checked(&city, days)
        .map(Json)
        .map_err(|e| {
            debug!(city = %city, days, error = %e, "Forecast request rejected");
            ApiError::from_forecast(e, &city)
        })
}

/// GET /api/v1/conditions
pub async fn list_conditions() -> Json<Vec<WeatherCondition>> {
    Json(catalog::all_conditions())
}

/// GET /api
pub async fn api_info() -> Json<ApiInfo> {
    Json(ApiInfo {
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        health: "/health",
        cities: catalog::city_names(),
    })
}

/// GET /health
pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse { status: "healthy" })
}

/// GET /ready
pub async fn ready() -> Json<StatusResponse> {
    Json(StatusResponse { status: "ready" })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
