//! Deterministic weather generator.
//!
//! Turns a city profile plus a time bucket into a reproducible weather
//! sample. Each sample gets its own PRNG seeded from the city and bucket;
//! draws are consumed in a fixed order, so reordering them changes the
//! output even for the same seed.

pub mod clock;
pub mod seed;

use chrono::{Days, NaiveDate};
use chrono_tz::Tz;
use rand::seq::IndexedRandom;
use rand::Rng;
use std::sync::Arc;
use tracing::debug;

use crate::catalog;
use crate::types::{
    CityProfile, ConditionCode, CurrentWeather, Forecast, ForecastDay, WeatherError,
};
use clock::Clock;

/// Shortest forecast we serve.
pub const MIN_FORECAST_DAYS: u32 = 1;
/// Longest forecast we serve.
pub const MAX_FORECAST_DAYS: u32 = 7;

const HUMIDITY_RANGE: (u8, u8) = (40, 85);
const WIND_RANGE: (f64, f64) = (5.0, 35.0);
const HIGH_SPREAD: f64 = 3.0;
const LOW_SPREAD: f64 = 2.0;
const SUNNY_RAIN_CHANCE: u8 = 10;
const RAIN_CHANCE_RANGE: (u8, u8) = (20, 80);

/// Generates current conditions and forecasts for catalog cities.
#[derive(Clone)]
pub struct WeatherGenerator {
    clock: Arc<dyn Clock>,
    tz: Tz,
}

impl WeatherGenerator {
    pub fn new(clock: Arc<dyn Clock>, tz: Tz) -> Self {
        Self { clock, tz }
    }

    /// Today's date in the generator's time zone.
    pub fn today(&self) -> NaiveDate {
        self.clock.now().with_timezone(&self.tz).date_naive()
    }

    /// Current conditions for `city`, or `None` if the city is unknown.
    pub fn current(&self, city: &str) -> Option<CurrentWeather> {
        let profile = catalog::lookup(city)?;
        let local = self.clock.now().with_timezone(&self.tz);
        let seed = seed::seed_string(city, &seed::hour_bucket(&local));
        debug!(%seed, "Generating current weather");
        let mut rng = seed::seeded_rng(&seed);

        let temperature = round1(rng.random_range(profile.temp_min..=profile.temp_max));
        let condition = pick_condition(profile, &mut rng)?;
        let humidity = rng.random_range(HUMIDITY_RANGE.0..=HUMIDITY_RANGE.1);
        let wind = round1(rng.random_range(WIND_RANGE.0..=WIND_RANGE.1));
        let feels_like = round1(temperature - wind / 10.0 + f64::from(humidity) / 50.0);

        Some(CurrentWeather {
            city: title_case(city),
            country: profile.country.to_string(),
            temperature_celsius: temperature,
            temperature_fahrenheit: celsius_to_fahrenheit(temperature),
            humidity_percent: humidity,
            wind_speed_kmh: wind,
            condition: condition.definition(),
            feels_like_celsius: feels_like,
        })
    }

    /// A `days`-long forecast starting tomorrow, or `None` if the city is
    /// unknown. `days` is not range-checked here; see [`Self::forecast_checked`].
    pub fn forecast(&self, city: &str, days: u32) -> Option<Forecast> {
        let profile = catalog::lookup(city)?;
        let today = self.today();

        let days = (1..=u64::from(days))
            .map(|i| {
                let date = today.checked_add_days(Days::new(i))?;
                forecast_day(city, profile, date)
            })
            .collect::<Option<Vec<_>>>()?;

        Some(Forecast {
            city: title_case(city),
            country: profile.country.to_string(),
            days,
        })
    }

    /// Validate `days` and generate a forecast.
    ///
    /// Range is checked before the city, so an out-of-range request for an
    /// unknown city reports `InvalidRange`.
    pub fn forecast_checked(&self, city: &str, days: i64) -> Result<Forecast, WeatherError> {
        let days = validate_days(days)?;
        self.forecast(city, days)
            .ok_or_else(|| WeatherError::NotFound(city.to_string()))
    }

    /// Current conditions, or `NotFound`.
    pub fn current_checked(&self, city: &str) -> Result<CurrentWeather, WeatherError> {
        self.current(city)
            .ok_or_else(|| WeatherError::NotFound(city.to_string()))
    }
}

/// Check a requested forecast length against the served range.
pub fn validate_days(days: i64) -> Result<u32, WeatherError> {
    u32::try_from(days)
        .ok()
        .filter(|d| (MIN_FORECAST_DAYS..=MAX_FORECAST_DAYS).contains(d))
        .ok_or(WeatherError::InvalidRange {
            days,
            min: MIN_FORECAST_DAYS,
            max: MAX_FORECAST_DAYS,
        })
}

fn forecast_day(city: &str, profile: &CityProfile, date: NaiveDate) -> Option<ForecastDay> {
    let bucket = seed::date_bucket(date);
    let seed = seed::seed_string(city, &bucket);
    debug!(%seed, "Generating forecast day");
    let mut rng = seed::seeded_rng(&seed);

    let high = round1(rng.random_range(
        (profile.temp_max - HIGH_SPREAD)..=(profile.temp_max + HIGH_SPREAD),
    ));
    let low = round1(rng.random_range(
        (profile.temp_min - LOW_SPREAD)..=(profile.temp_min + LOW_SPREAD),
    ));
    let condition = pick_condition(profile, &mut rng)?;
    let chance_of_rain = if condition == ConditionCode::Sunny {
        SUNNY_RAIN_CHANCE
    } else {
        rng.random_range(RAIN_CHANCE_RANGE.0..=RAIN_CHANCE_RANGE.1)
    };

    Some(ForecastDay {
        day: date.format("%A").to_string(),
        date: bucket,
        high_celsius: high,
        low_celsius: low,
        condition: condition.definition(),
        chance_of_rain_percent: chance_of_rain,
    })
}

fn pick_condition<R: Rng + ?Sized>(profile: &CityProfile, rng: &mut R) -> Option<ConditionCode> {
    profile.typical_conditions.choose(rng).copied()
}

/// °C → °F, rounded to one decimal.
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    round1(celsius * 9.0 / 5.0 + 32.0)
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Capitalise the first letter of every word, lower-case the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
