//! Independent reference entities: Fund, Tenant, PropertyManager, Vendor,
//! Amenity, plus TenantHistory (keyed only to tenants).

use fake::faker::address::en::StreetName;
use fake::faker::name::en::{FirstName, LastName, Name};
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use rand::Rng;

use crate::generate::catalog::{
    pick, AMENITIES, CITIES, EMPLOYMENT_STATUSES, VENDOR_CATEGORIES, VENDOR_NAMES,
};
use crate::generate::entities::{Amenity, Fund, PropertyManager, Tenant, TenantHistory, Vendor};
use crate::generate::ids::IdSequence;
use crate::generate::profile::GenerationProfile;
use crate::generate::{date_within, round1, round2, ymd};

pub(crate) fn funds(profile: &GenerationProfile, rng: &mut impl Rng) -> Vec<Fund> {
    let mut ids = IdSequence::new();
    (0..profile.funds)
        .map(|_| {
            let id = ids.next();
            Fund {
                id,
                name: format!("Real Estate Fund {}", id),
                inception_date: date_within(rng, ymd(2010, 1, 1), 0, 4000),
                manager: Name().fake_with_rng(rng),
                total_assets: round2(rng.random_range(50_000_000.0..2_000_000_000.0)),
            }
        })
        .collect()
}

pub(crate) fn tenants(profile: &GenerationProfile, rng: &mut impl Rng) -> Vec<Tenant> {
    let mut ids = IdSequence::new();
    (0..profile.tenants)
        .map(|_| {
            let first: String = FirstName().fake_with_rng(rng);
            let last: String = LastName().fake_with_rng(rng);
            Tenant {
                id: ids.next(),
                name: format!("{} {}", first, last),
                phone: PhoneNumber().fake_with_rng(rng),
                email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
            }
        })
        .collect()
}

pub(crate) fn property_managers(
    profile: &GenerationProfile,
    rng: &mut impl Rng,
) -> Vec<PropertyManager> {
    let mut ids = IdSequence::new();
    (0..profile.property_managers)
        .map(|_| {
            let name: String = Name().fake_with_rng(rng);
            PropertyManager {
                id: ids.next(),
                email: format!("{}@company.com", name.to_lowercase().replace(' ', ".")),
                phone: PhoneNumber().fake_with_rng(rng),
                hire_date: date_within(rng, ymd(2015, 1, 1), 0, 3000),
                salary: round2(rng.random_range(45_000.0..120_000.0)),
                // Roughly a quarter of managers have left
                is_active: rng.random_bool(0.75),
                name,
            }
        })
        .collect()
}

pub(crate) fn vendors(profile: &GenerationProfile, rng: &mut impl Rng) -> Vec<Vendor> {
    let mut ids = IdSequence::new();
    VENDOR_NAMES
        .iter()
        .cycle()
        .take(profile.vendors)
        .map(|&name| {
            let slug: String = name
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
                .to_lowercase();
            let street: String = StreetName().fake_with_rng(rng);
            Vendor {
                id: ids.next(),
                name,
                category: pick(rng, VENDOR_CATEGORIES),
                contact_person: Name().fake_with_rng(rng),
                phone: PhoneNumber().fake_with_rng(rng),
                email: format!("contact@{}.com", slug),
                address: format!(
                    "{} {}, {}",
                    rng.random_range(100..10_000),
                    street,
                    pick(rng, CITIES)
                ),
                rating: round1(rng.random_range(2.5..5.0)),
                is_active: rng.random_bool(0.75),
            }
        })
        .collect()
}

/// The amenity table is the fixed roster, one row each.
pub(crate) fn amenities() -> Vec<Amenity> {
    let mut ids = IdSequence::new();
    AMENITIES
        .iter()
        .map(|&(name, category, description)| Amenity {
            id: ids.next(),
            name,
            category,
            description,
        })
        .collect()
}

/// Background records for 80% of tenants.
pub(crate) fn tenant_histories(
    tenants: &[Tenant],
    rng: &mut impl Rng,
) -> Vec<TenantHistory> {
    let mut ids = IdSequence::new();
    let mut rows = Vec::new();
    for tenant in tenants {
        if !rng.random_bool(0.8) {
            continue;
        }
        let street: String = StreetName().fake_with_rng(rng);
        let ref_a: String = Name().fake_with_rng(rng);
        let ref_b: String = Name().fake_with_rng(rng);
        rows.push(TenantHistory {
            id: ids.next(),
            tenant_id: tenant.id,
            previous_address: format!(
                "{} {}, {}",
                rng.random_range(100..10_000),
                street,
                pick(rng, CITIES)
            ),
            employment_status: pick(rng, EMPLOYMENT_STATUSES),
            annual_income: round2(rng.random_range(25_000.0..150_000.0)),
            credit_score: rng.random_range(300..=850),
            reference_contacts: format!("{}, {}", ref_a, ref_b),
            background_check_date: date_within(rng, ymd(2020, 1, 1), 0, 1800),
        });
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn profile() -> GenerationProfile {
        GenerationProfile::sample(11, ymd(2025, 6, 1))
    }

    #[test]
    fn funds_have_positive_assets_and_sequential_ids() {
        let mut rng = StdRng::seed_from_u64(11);
        let funds = funds(&profile(), &mut rng);
        assert_eq!(funds.len(), profile().funds);
        for (i, f) in funds.iter().enumerate() {
            assert_eq!(f.id, i as i64 + 1);
            assert!(f.total_assets > 0.0);
            assert!(f.inception_date >= ymd(2010, 1, 1));
        }
    }

    #[test]
    fn vendor_emails_are_slugged() {
        let mut rng = StdRng::seed_from_u64(11);
        let vendors = vendors(&profile(), &mut rng);
        for v in &vendors {
            assert!(v.email.starts_with("contact@"), "{}", v.email);
            assert!(!v.email.contains(' '));
            assert!(!v.email.contains('\''));
            assert!((2.5..=5.0).contains(&v.rating));
        }
    }

    #[test]
    fn amenity_roster_is_complete() {
        let rows = amenities();
        assert_eq!(rows.len(), AMENITIES.len());
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[0].name, "Swimming Pool");
    }

    #[test]
    fn tenant_history_covers_most_tenants_exactly_once() {
        let mut rng = StdRng::seed_from_u64(11);
        let tenants = tenants(&GenerationProfile::new(11, ymd(2025, 6, 1)), &mut rng);
        let histories = tenant_histories(&tenants, &mut rng);
        // 80% of 2000, loosely
        assert!(histories.len() > 1400 && histories.len() < 1800);
        let mut seen = std::collections::HashSet::new();
        for h in &histories {
            assert!(seen.insert(h.tenant_id), "duplicate history for tenant");
            assert!((300..=850).contains(&h.credit_score));
        }
    }
}
