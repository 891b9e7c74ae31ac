//! End-to-end tests through the Axum router.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{TimeZone, Utc};
use std::sync::Arc;
use tower::ServiceExt;

use datatorque_weather::generator::clock::FixedClock;
use datatorque_weather::generator::WeatherGenerator;
use datatorque_weather::server::build_router;
use datatorque_weather::server::routes::ServiceState;

fn app() -> Router {
    let now = Utc.with_ymd_and_hms(2026, 2, 21, 3, 0, 0).unwrap();
    let generator = WeatherGenerator::new(Arc::new(FixedClock(now)), chrono_tz::Pacific::Auckland);
    build_router(Arc::new(ServiceState::new(generator, 3)))
}

async fn get(uri: &str) -> (StatusCode, serde_json::Value) {
    let resp = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), 100_000).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn weather_is_stable_between_requests() {
    let (_, a) = get("/api/v1/weather/London").await;
    let (_, b) = get("/api/v1/weather/london").await;
    assert_eq!(a, b);
    assert_eq!(a["city"], "London");
}

#[tokio::test]
async fn weather_payload_shape() {
    let (status, w) = get("/api/v1/weather/christchurch").await;
    assert_eq!(status, StatusCode::OK);
    for field in [
        "city",
        "country",
        "temperature_celsius",
        "temperature_fahrenheit",
        "humidity_percent",
        "wind_speed_kmh",
        "condition",
        "feels_like_celsius",
    ] {
        assert!(w.get(field).is_some(), "missing {field}");
    }
    assert!(w["condition"]["name"].is_string());
    assert!(w["condition"]["icon"].is_string());
}

#[tokio::test]
async fn forecast_boundaries() {
    let (s1, f1) = get("/api/v1/weather/brisbane/forecast?days=1").await;
    assert_eq!(s1, StatusCode::OK);
    assert_eq!(f1["days"].as_array().unwrap().len(), 1);

    let (s7, f7) = get("/api/v1/weather/brisbane/forecast?days=7").await;
    assert_eq!(s7, StatusCode::OK);
    assert_eq!(f7["days"].as_array().unwrap().len(), 7);

    let (s0, _) = get("/api/v1/weather/brisbane/forecast?days=0").await;
    assert_eq!(s0, StatusCode::BAD_REQUEST);

    let (s8, _) = get("/api/v1/weather/brisbane/forecast?days=8").await;
    assert_eq!(s8, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn invalid_days_checked_before_city() {
    let (status, body) = get("/api/v1/weather/atlantis/forecast?days=9").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Days must be between 1 and 7");
}

#[tokio::test]
async fn forecast_first_day_is_tomorrow() {
    let (_, f) = get("/api/v1/weather/auckland/forecast?days=2").await;
    assert_eq!(f["days"][0]["date"], "2026-02-22");
    assert_eq!(f["days"][1]["date"], "2026-02-23");
}

#[tokio::test]
async fn conditions_listing() {
    let (status, list) = get("/api/v1/conditions").await;
    assert_eq!(status, StatusCode::OK);
    let codes: Vec<_> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["code"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        codes,
        ["sunny", "partly_cloudy", "cloudy", "rainy", "stormy", "windy", "foggy", "snowy"]
    );
}

#[tokio::test]
async fn unknown_route_is_404() {
    let resp = app()
        .oneshot(Request::builder().uri("/api/v2/weather/auckland").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
