//! Leases and the rows derived from them.
//!
//! Payments are a pure derivation of each lease's date span: one row per
//! calendar month boundary crossed, with small probabilistic perturbations
//! (late payments, partial payments). Renewals exist only for leases already
//! expired at generation time.

use chrono::{Datelike, Duration, NaiveDate};
use rand::Rng;

use crate::generate::catalog::{pick, RENEWAL_TERMS};
use crate::generate::entities::{Lease, LeaseRenewal, Payment};
use crate::generate::ids::IdSequence;
use crate::generate::profile::GenerationProfile;
use crate::generate::{date_within, round2, ymd};

/// Probability a payment lands 1–15 days late.
const LATE_PAYMENT_RATE: f64 = 0.05;
/// Probability a payment covers only 30–90% of rent.
const PARTIAL_PAYMENT_RATE: f64 = 0.02;
/// Share of expired leases that get renewed.
const RENEWAL_RATE: f64 = 0.6;

/// Calendar month boundaries crossed between two dates.
///
/// `2023-01-01 → 2023-04-01` spans 3 months and therefore 3 payments.
pub fn months_spanned(start: NaiveDate, end: NaiveDate) -> i32 {
    (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32)
}

/// 1–4 leases per property, tenants drawn uniformly.
pub(crate) fn leases(profile: &GenerationProfile, rng: &mut impl Rng) -> Vec<Lease> {
    let mut ids = IdSequence::new();
    let mut rows = Vec::new();
    for property_id in 1..=profile.properties as i64 {
        for _ in 0..rng.random_range(1..=4) {
            let start_date = date_within(rng, ymd(2020, 1, 1), 0, 1800);
            let end_date = date_within(rng, start_date, 180, 720);
            let rent = round2(rng.random_range(1000.0..25_000.0));
            rows.push(Lease {
                id: ids.next(),
                property_id,
                tenant_id: rng.random_range(1..=profile.tenants as i64),
                start_date,
                end_date,
                rent,
                deposit: round2(rent * rng.random_range(0.5..2.0)),
            });
        }
    }
    rows
}

/// Derive the monthly payment rows for every lease.
pub(crate) fn payments(leases: &[Lease], rng: &mut impl Rng) -> Vec<Payment> {
    let mut ids = IdSequence::new();
    let mut rows = Vec::new();
    for lease in leases {
        schedule_for(lease, rng, &mut ids, &mut rows);
    }
    rows
}

fn schedule_for(lease: &Lease, rng: &mut impl Rng, ids: &mut IdSequence, out: &mut Vec<Payment>) {
    let months = months_spanned(lease.start_date, lease.end_date);
    for m in 0..months {
        let mut payment_date = lease.start_date + Duration::days(30 * i64::from(m));
        if rng.random_bool(LATE_PAYMENT_RATE) {
            payment_date += Duration::days(rng.random_range(1..=15));
        }
        let amount = if rng.random_bool(PARTIAL_PAYMENT_RATE) {
            round2(lease.rent * rng.random_range(0.3..0.9))
        } else {
            lease.rent
        };
        out.push(Payment {
            id: ids.next(),
            lease_id: lease.id,
            payment_date,
            amount,
        });
    }
}

/// Renew 60% of the leases already expired at generation time.
///
/// The renewal date can fall up to 30 days either side of the old end date;
/// new rent never drops below the old rent.
pub(crate) fn renewals(
    leases: &[Lease],
    profile: &GenerationProfile,
    rng: &mut impl Rng,
) -> Vec<LeaseRenewal> {
    let mut ids = IdSequence::new();
    let mut rows = Vec::new();
    for lease in leases {
        if lease.end_date >= profile.today || !rng.random_bool(RENEWAL_RATE) {
            continue;
        }
        let renewal_date = date_within(rng, lease.end_date, -30, 30);
        rows.push(LeaseRenewal {
            id: ids.next(),
            lease_id: lease.id,
            renewal_date,
            new_rent: round2(lease.rent * rng.random_range(1.0..1.15)),
            new_end_date: date_within(rng, renewal_date, 365, 730),
            renewal_terms: pick(rng, RENEWAL_TERMS),
        });
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn lease(start: NaiveDate, end: NaiveDate, rent: f64) -> Lease {
        Lease {
            id: 1,
            property_id: 1,
            tenant_id: 1,
            start_date: start,
            end_date: end,
            rent,
            deposit: rent,
        }
    }

    #[test]
    fn three_month_lease_yields_three_payments() {
        // The example scenario from the design notes: Jan 1 to Apr 1.
        let l = lease(ymd(2023, 1, 1), ymd(2023, 4, 1), 2500.0);
        let mut rng = StdRng::seed_from_u64(0);
        let rows = payments(std::slice::from_ref(&l), &mut rng);
        assert_eq!(rows.len(), 3);
        for (m, p) in rows.iter().enumerate() {
            assert_eq!(p.lease_id, 1);
            let nominal = ymd(2023, 1, 1) + Duration::days(30 * m as i64);
            let delay = (p.payment_date - nominal).num_days();
            assert!((0..=15).contains(&delay), "delay {} out of range", delay);
            assert!(p.amount <= 2500.0 && p.amount >= 2500.0 * 0.3);
        }
    }

    #[test]
    fn sub_month_lease_yields_no_payments() {
        let l = lease(ymd(2023, 1, 5), ymd(2023, 1, 25), 2000.0);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(payments(std::slice::from_ref(&l), &mut rng).is_empty());
    }

    #[test]
    fn months_spanned_counts_boundaries() {
        assert_eq!(months_spanned(ymd(2023, 1, 1), ymd(2023, 4, 1)), 3);
        assert_eq!(months_spanned(ymd(2022, 11, 15), ymd(2023, 2, 15)), 3);
        assert_eq!(months_spanned(ymd(2023, 1, 1), ymd(2023, 1, 31)), 0);
    }

    #[test]
    fn most_payments_are_full_and_on_time() {
        let l = lease(ymd(2020, 1, 1), ymd(2024, 1, 1), 1000.0);
        let leases: Vec<Lease> = (0..50)
            .map(|i| Lease {
                id: i + 1,
                ..l.clone()
            })
            .collect();
        let mut rng = StdRng::seed_from_u64(9);
        let rows = payments(&leases, &mut rng);
        assert_eq!(rows.len(), 50 * 48);
        let partial = rows.iter().filter(|p| p.amount < 1000.0).count();
        let share = partial as f64 / rows.len() as f64;
        assert!(share < 0.05, "partial share {} too high", share);
        assert!(share > 0.001, "partial share {} too low", share);
    }

    #[test]
    fn renewals_only_for_expired_leases() {
        let today = ymd(2025, 6, 1);
        let profile = GenerationProfile::sample(1, today);
        let expired = lease(ymd(2020, 1, 1), ymd(2021, 1, 1), 1000.0);
        let active = Lease {
            id: 2,
            end_date: ymd(2026, 1, 1),
            ..expired.clone()
        };
        let boundary = Lease {
            id: 3,
            end_date: today,
            ..expired.clone()
        };
        let mut rng = StdRng::seed_from_u64(1);
        // Enough trials that the 60% coin certainly lands at least once
        for _ in 0..100 {
            for r in renewals(&[expired.clone(), active.clone(), boundary.clone()], &profile, &mut rng)
            {
                assert_eq!(r.lease_id, 1, "only the expired lease may renew");
                assert!(r.new_rent >= 1000.0);
                let span = (r.new_end_date - r.renewal_date).num_days();
                assert!((365..=730).contains(&span));
            }
        }
    }
}
