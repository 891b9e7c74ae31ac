//! Determinism and bucketing behaviour of the weather generator.
//!
//! Time is pinned with `FixedClock` so bucket keys are known.

use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;

use datatorque_weather::catalog;
use datatorque_weather::generator::clock::FixedClock;
use datatorque_weather::generator::{celsius_to_fahrenheit, WeatherGenerator};
use datatorque_weather::types::ConditionCode;

fn at(t: DateTime<Utc>) -> WeatherGenerator {
    WeatherGenerator::new(Arc::new(FixedClock(t)), chrono_tz::Pacific::Auckland)
}

#[test]
fn same_hour_same_weather() {
    let early = Utc.with_ymd_and_hms(2026, 2, 21, 3, 0, 0).unwrap();
    let late = Utc.with_ymd_and_hms(2026, 2, 21, 3, 59, 59).unwrap();
    for city in catalog::city_names() {
        assert_eq!(at(early).current(city), at(late).current(city), "{city}");
    }
}

#[test]
fn every_city_reproducible_in_any_case() {
    let t = Utc.with_ymd_and_hms(2026, 7, 4, 18, 30, 0).unwrap();
    let g = at(t);
    for city in catalog::city_names() {
        let lower = g.current(city).unwrap();
        let upper = g.current(&city.to_uppercase()).unwrap();
        assert_eq!(lower, upper);
    }
}

#[test]
fn hours_vary_over_a_day() {
    // Not every hour must differ, but a whole day of identical samples
    // would mean the bucket is ignored.
    let samples: Vec<_> = (0..24)
        .map(|h| {
            let t = Utc.with_ymd_and_hms(2026, 3, 10, h, 0, 0).unwrap();
            at(t).current("melbourne").unwrap()
        })
        .collect();
    assert!(samples.windows(2).any(|w| w[0] != w[1]));
}

#[test]
fn cities_draw_from_their_own_seeds() {
    // Auckland and Melbourne share a temperature range's lower bound but
    // are seeded independently; across a day they should not track each other.
    let pairs: Vec<_> = (0..24)
        .map(|h| {
            let g = at(Utc.with_ymd_and_hms(2026, 3, 10, h, 0, 0).unwrap());
            (
                g.current("auckland").unwrap().humidity_percent,
                g.current("melbourne").unwrap().humidity_percent,
            )
        })
        .collect();
    assert!(pairs.iter().any(|(a, m)| a != m));
}

#[test]
fn fahrenheit_always_derived() {
    let g = at(Utc.with_ymd_and_hms(2026, 12, 1, 0, 0, 0).unwrap());
    for city in catalog::city_names() {
        let w = g.current(city).unwrap();
        assert_eq!(w.temperature_fahrenheit, celsius_to_fahrenheit(w.temperature_celsius));
    }
}

#[test]
fn forecast_is_consecutive_days_from_tomorrow() {
    // 2026-10-19 20:00 UTC is 2026-10-20 09:00 NZDT.
    let g = at(Utc.with_ymd_and_hms(2026, 10, 19, 20, 0, 0).unwrap());
    let f = g.forecast("Wellington", 3).unwrap();
    let dates: Vec<_> = f.days.iter().map(|d| d.date.clone()).collect();
    assert_eq!(dates, ["2026-10-21", "2026-10-22", "2026-10-23"]);
    let names: Vec<_> = f.days.iter().map(|d| d.day.clone()).collect();
    assert_eq!(names, ["Wednesday", "Thursday", "Friday"]);
}

#[test]
fn forecast_ignores_hour_within_day() {
    // Forecast buckets are dates, so two times on the same Auckland day agree.
    let morning = at(Utc.with_ymd_and_hms(2026, 10, 19, 20, 0, 0).unwrap());
    let evening = at(Utc.with_ymd_and_hms(2026, 10, 20, 8, 0, 0).unwrap());
    assert_eq!(morning.forecast("sydney", 7), evening.forecast("sydney", 7));
}

#[test]
fn sunny_days_have_fixed_rain_chance() {
    let mut saw_sunny = false;
    for d in 1..=28 {
        let g = at(Utc.with_ymd_and_hms(2026, 2, d, 0, 0, 0).unwrap());
        for day in g.forecast("brisbane", 7).unwrap().days {
            if day.condition.code == ConditionCode::Sunny {
                saw_sunny = true;
                assert_eq!(day.chance_of_rain_percent, 10);
            } else {
                assert!((20..=80).contains(&day.chance_of_rain_percent));
            }
        }
    }
    assert!(saw_sunny);
}

#[test]
fn unknown_city_is_absent() {
    let g = at(Utc.with_ymd_and_hms(2026, 2, 21, 3, 0, 0).unwrap());
    assert!(g.current("Atlantis").is_none());
    assert!(g.forecast("Atlantis", 3).is_none());
}
