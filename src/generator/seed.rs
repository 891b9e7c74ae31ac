//! Seed derivation.
//!
//! A generator's random stream is fully determined by its seed string,
//! `lower(city) + "-" + bucket_key`. The bucket key is the local hour for
//! current conditions and the target date for a forecast day, so values
//! stay stable for the lifetime of that bucket.

use chrono::{DateTime, NaiveDate, TimeZone};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sha2::{Digest, Sha256};

/// Bucket key for current conditions: `YYYY-MM-DD-HH` in local time.
pub fn hour_bucket<Tz: TimeZone>(local: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    local.format("%Y-%m-%d-%H").to_string()
}

/// Bucket key for a forecast day: `YYYY-MM-DD`.
pub fn date_bucket(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Compose the seed string for a city and bucket.
pub fn seed_string(city: &str, bucket: &str) -> String {
    format!("{}-{bucket}", city.to_lowercase())
}

/// Hash a seed string to an integer seed.
///
/// First 8 bytes of SHA-256, big-endian. Stable across processes.
pub fn seed_value(seed: &str) -> u64 {
    let digest = Sha256::digest(seed.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

/// A fresh PRNG for one seed string.
pub fn seeded_rng(seed: &str) -> StdRng {
    StdRng::seed_from_u64(seed_value(seed))
}
