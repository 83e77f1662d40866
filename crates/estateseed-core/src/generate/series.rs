//! Periodic time series: weekly fund NAV and quarterly market metrics.

use chrono::Duration;
use rand::Rng;

use crate::generate::catalog::{pick, CITIES, PROPERTY_TYPES, STATES};
use crate::generate::entities::{FundPerformance, MarketData};
use crate::generate::profile::GenerationProfile;
use crate::generate::ids::IdSequence;
use crate::generate::{round2, round3, ymd};

/// Weekly NAV samples over a six-year window.
const NAV_WINDOW_DAYS: i64 = 2190;
const NAV_SAMPLE_INTERVAL_DAYS: i64 = 7;
/// Quarterly market samples over a five-year window.
const MARKET_WINDOW_QUARTERS: i64 = 20;
const MARKET_SAMPLE_INTERVAL_DAYS: i64 = 90;

/// One NAV series per fund: a fixed base value perturbed ±10% per sample.
pub(crate) fn fund_performance(
    profile: &GenerationProfile,
    rng: &mut impl Rng,
) -> Vec<FundPerformance> {
    let mut ids = IdSequence::new();
    let origin = ymd(2019, 1, 1);
    let mut rows = Vec::new();
    for fund_id in 1..=profile.funds as i64 {
        let base_nav = rng.random_range(50_000_000.0..2_000_000_000.0);
        let mut day = 0;
        while day < NAV_WINDOW_DAYS {
            rows.push(FundPerformance {
                id: ids.next(),
                fund_id,
                date: origin + Duration::days(day),
                nav: round2(base_nav * (1.0 + rng.random_range(-0.1..0.1))),
            });
            day += NAV_SAMPLE_INTERVAL_DAYS;
        }
    }
    rows
}

/// Quarterly metrics per (city, property type) for the leading cities.
pub(crate) fn market_data(profile: &GenerationProfile, rng: &mut impl Rng) -> Vec<MarketData> {
    let mut ids = IdSequence::new();
    let origin = ymd(2020, 1, 1);
    let mut rows = Vec::new();
    for city in CITIES.iter().take(profile.market_cities) {
        let state = pick(rng, STATES);
        for property_type in PROPERTY_TYPES {
            for quarter in 0..MARKET_WINDOW_QUARTERS {
                rows.push(MarketData {
                    id: ids.next(),
                    city,
                    state,
                    property_type,
                    date: origin + Duration::days(quarter * MARKET_SAMPLE_INTERVAL_DAYS),
                    avg_price_per_sqft: round2(rng.random_range(50.0..800.0)),
                    vacancy_rate: round3(rng.random_range(0.02..0.15)),
                    rental_yield: round3(rng.random_range(0.03..0.12)),
                    appreciation_rate: round3(rng.random_range(-0.05..0.15)),
                });
            }
        }
    }
    rows
}
