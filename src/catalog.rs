//! City catalog.
//!
//! Static climate profiles for the cities we serve, plus the fixed table
//! of condition definitions. Both tables are compiled into the binary and
//! never mutated.

use crate::types::{CityProfile, ConditionCode, WeatherCondition};

use ConditionCode::*;

/// A known city, keyed by its lower-cased name.
struct CityEntry {
    key: &'static str,
    profile: CityProfile,
}

const CITIES: &[CityEntry] = &[
    CityEntry { key: "auckland", profile: CityProfile { country: "NZ", temp_min: 12.0, temp_max: 24.0, typical_conditions: &[Sunny, PartlyCloudy, Cloudy, Rainy] } },
    CityEntry { key: "wellington", profile: CityProfile { country: "NZ", temp_min: 10.0, temp_max: 20.0, typical_conditions: &[Windy, Cloudy, PartlyCloudy, Rainy] } },
    CityEntry { key: "christchurch", profile: CityProfile { country: "NZ", temp_min: 8.0, temp_max: 22.0, typical_conditions: &[Sunny, PartlyCloudy, Cloudy, Foggy] } },
    CityEntry { key: "sydney", profile: CityProfile { country: "AU", temp_min: 15.0, temp_max: 28.0, typical_conditions: &[Sunny, PartlyCloudy, Cloudy] } },
    CityEntry { key: "melbourne", profile: CityProfile { country: "AU", temp_min: 12.0, temp_max: 25.0, typical_conditions: &[Sunny, PartlyCloudy, Cloudy, Rainy, Windy] } },
    CityEntry { key: "brisbane", profile: CityProfile { country: "AU", temp_min: 18.0, temp_max: 32.0, typical_conditions: &[Sunny, PartlyCloudy, Stormy] } },
    CityEntry { key: "london", profile: CityProfile { country: "GB", temp_min: 5.0, temp_max: 18.0, typical_conditions: &[Cloudy, Rainy, Foggy, PartlyCloudy] } },
    CityEntry { key: "new york", profile: CityProfile { country: "US", temp_min: 2.0, temp_max: 28.0, typical_conditions: &[Sunny, PartlyCloudy, Cloudy, Rainy, Snowy] } },
];

/// Look up a city's profile. Matching is case-insensitive.
pub fn lookup(name: &str) -> Option<&'static CityProfile> {
    let key = name.to_lowercase();
    CITIES.iter().find(|c| c.key == key).map(|c| &c.profile)
}

/// Known city keys in declaration order.
pub fn city_names() -> Vec<&'static str> {
    CITIES.iter().map(|c| c.key).collect()
}

/// All condition definitions in declaration order.
pub fn all_conditions() -> Vec<WeatherCondition> {
    ConditionCode::ALL.iter().map(ConditionCode::definition).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
