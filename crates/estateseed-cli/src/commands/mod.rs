pub mod check;
pub mod generate;
pub mod graph;
pub mod query;

use chrono::NaiveDate;
use estateseed_core::GenerationProfile;

/// Build a profile from CLI knobs: explicit seed or the clock, explicit
/// anchor date or today.
pub(crate) fn profile_from(seed: Option<u64>, as_of: Option<NaiveDate>, scale: f64) -> GenerationProfile {
    let seed = seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });
    let today = as_of.unwrap_or_else(|| chrono::Utc::now().date_naive());
    let profile = GenerationProfile::new(seed, today);
    if (scale - 1.0).abs() > f64::EPSILON {
        profile.scaled(scale)
    } else {
        profile
    }
}
