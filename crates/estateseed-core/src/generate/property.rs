//! Property rows and the entities keyed to them: manager assignments,
//! maintenance requests, expenses, documents, inspections, utilities,
//! amenity links, and insurance policies.
//!
//! Every child row picks its parent key uniformly from the already-issued
//! identity range, so parents must be generated first (the pipeline enforces
//! the order).

use fake::faker::address::en::StreetName;
use fake::faker::name::en::Name;
use fake::Fake;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::generate::catalog::{
    pick, utility_providers, AMENITIES, CITIES, DOCUMENT_TYPES, EXPENSE_CATEGORIES,
    EXPIRING_DOCUMENT_TYPES, INSPECTION_RATINGS, INSPECTION_TYPES, INSURANCE_PROVIDERS,
    INSURANCE_TYPES, MAINTENANCE_CATEGORIES, MAINTENANCE_PRIORITIES, MAINTENANCE_STATUSES,
    PROPERTY_TYPES, STATES, UTILITY_TYPES,
};
use crate::generate::entities::{
    Expense, Inspection, Insurance, MaintenanceRequest, Property, PropertyAmenity,
    PropertyDocument, PropertyManagerAssignment, Utility,
};
use crate::generate::ids::IdSequence;
use crate::generate::profile::GenerationProfile;
use crate::generate::{date_within, round2, ymd};

pub(crate) fn properties(profile: &GenerationProfile, rng: &mut impl Rng) -> Vec<Property> {
    let mut ids = IdSequence::new();
    (0..profile.properties)
        .map(|_| {
            let street: String = StreetName().fake_with_rng(rng);
            Property {
                id: ids.next(),
                address: format!("{} {}", rng.random_range(100..10_000), street),
                city: pick(rng, CITIES),
                state: pick(rng, STATES),
                zip: format!("{}", rng.random_range(10_000..100_000)),
                property_type: pick(rng, PROPERTY_TYPES),
                value: round2(rng.random_range(100_000.0..50_000_000.0)),
                fund_id: rng.random_range(1..=profile.funds as i64),
            }
        })
        .collect()
}

/// One manager assignment per property; a fifth of them have already ended.
pub(crate) fn manager_assignments(
    profile: &GenerationProfile,
    rng: &mut impl Rng,
) -> Vec<PropertyManagerAssignment> {
    let mut ids = IdSequence::new();
    (1..=profile.properties as i64)
        .map(|property_id| {
            let start_date = date_within(rng, ymd(2020, 1, 1), 0, 1500);
            let end_date = rng
                .random_bool(0.2)
                .then(|| date_within(rng, start_date, 180, 1000));
            PropertyManagerAssignment {
                id: ids.next(),
                property_id,
                manager_id: rng.random_range(1..=profile.property_managers as i64),
                start_date,
                end_date,
            }
        })
        .collect()
}

pub(crate) fn maintenance_requests(
    profile: &GenerationProfile,
    rng: &mut impl Rng,
) -> Vec<MaintenanceRequest> {
    let mut ids = IdSequence::new();
    (0..profile.maintenance_requests)
        .map(|_| {
            let category = pick(rng, MAINTENANCE_CATEGORIES);
            let status = pick(rng, MAINTENANCE_STATUSES);
            let created_date = date_within(rng, ymd(2020, 1, 1), 0, 1800);
            let estimated_cost = round2(rng.random_range(50.0..5000.0));

            // completed_date and actual_cost exist only for completed work
            let (completed_date, actual_cost) = if status == "Completed" {
                (
                    Some(date_within(rng, created_date, 1, 30)),
                    Some(round2(estimated_cost * rng.random_range(0.8..1.3))),
                )
            } else {
                (None, None)
            };

            let description = describe_request(rng, category);

            MaintenanceRequest {
                id: ids.next(),
                property_id: rng.random_range(1..=profile.properties as i64),
                // 70% reported by a tenant, 60% already assigned to a vendor
                tenant_id: rng
                    .random_bool(0.7)
                    .then(|| rng.random_range(1..=profile.tenants as i64)),
                vendor_id: rng
                    .random_bool(0.6)
                    .then(|| rng.random_range(1..=profile.vendors as i64)),
                manager_id: rng.random_range(1..=profile.property_managers as i64),
                category,
                description,
                priority: pick(rng, MAINTENANCE_PRIORITIES),
                status,
                created_date,
                completed_date,
                estimated_cost,
                actual_cost,
            }
        })
        .collect()
}

fn describe_request(rng: &mut impl Rng, category: &str) -> String {
    let lower = category.to_lowercase();
    match rng.random_range(0..5) {
        0 => format!("{} issue in unit", category),
        1 => format!("Repair needed for {}", lower),
        2 => format!("Maintenance required - {}", lower),
        3 => format!("Emergency {} problem", lower),
        _ => format!("Routine {} service", lower),
    }
}

pub(crate) fn expenses(profile: &GenerationProfile, rng: &mut impl Rng) -> Vec<Expense> {
    let mut ids = IdSequence::new();
    (0..profile.expenses)
        .map(|_| {
            let category = pick(rng, EXPENSE_CATEGORIES);
            let lower = category.to_lowercase();
            let description = match rng.random_range(0..5) {
                0 => format!("{} expense", category),
                1 => format!("Monthly {}", lower),
                2 => format!("Annual {}", lower),
                3 => format!("Emergency {}", lower),
                _ => format!("Routine {}", lower),
            };
            Expense {
                id: ids.next(),
                property_id: rng.random_range(1..=profile.properties as i64),
                vendor_id: rng
                    .random_bool(0.8)
                    .then(|| rng.random_range(1..=profile.vendors as i64)),
                category,
                description,
                amount: round2(rng.random_range(25.0..10_000.0)),
                expense_date: date_within(rng, ymd(2020, 1, 1), 0, 1800),
                invoice_number: format!("INV-{}", rng.random_range(100_000..1_000_000)),
                is_recurring: rng.random_bool(0.5),
            }
        })
        .collect()
}

/// 2–8 documents per property; some types carry expiry dates.
pub(crate) fn documents(profile: &GenerationProfile, rng: &mut impl Rng) -> Vec<PropertyDocument> {
    let mut ids = IdSequence::new();
    let mut rows = Vec::new();
    for property_id in 1..=profile.properties as i64 {
        for _ in 0..rng.random_range(2..=8) {
            let document_type = pick(rng, DOCUMENT_TYPES);
            let document_name = format!(
                "{}_{}_{}.pdf",
                document_type.replace(' ', "_"),
                property_id,
                rng.random_range(1000..10_000)
            );
            let upload_date = date_within(rng, ymd(2020, 1, 1), 0, 1800);
            let expiry_date = EXPIRING_DOCUMENT_TYPES
                .contains(&document_type)
                .then(|| date_within(rng, upload_date, 365, 1095));
            rows.push(PropertyDocument {
                id: ids.next(),
                property_id,
                document_type,
                file_path: format!("/documents/property_{}/{}", property_id, document_name),
                document_name,
                upload_date,
                expiry_date,
            });
        }
    }
    rows
}

pub(crate) fn inspections(profile: &GenerationProfile, rng: &mut impl Rng) -> Vec<Inspection> {
    let mut ids = IdSequence::new();
    (0..profile.inspections)
        .map(|_| {
            let inspection_type = pick(rng, INSPECTION_TYPES);
            let overall_rating = pick(rng, INSPECTION_RATINGS);
            let inspection_date = date_within(rng, ymd(2020, 1, 1), 0, 1800);
            Inspection {
                id: ids.next(),
                property_id: rng.random_range(1..=profile.properties as i64),
                inspector_name: Name().fake_with_rng(rng),
                inspection_type,
                inspection_date,
                overall_rating,
                notes: format!(
                    "{} inspection completed. Overall condition: {}.",
                    inspection_type,
                    overall_rating.to_lowercase()
                ),
                next_inspection_date: date_within(rng, inspection_date, 180, 365),
            }
        })
        .collect()
}

/// 3–7 distinct utility accounts per property.
pub(crate) fn utilities(profile: &GenerationProfile, rng: &mut impl Rng) -> Vec<Utility> {
    let mut ids = IdSequence::new();
    let mut rows = Vec::new();
    for property_id in 1..=profile.properties as i64 {
        let count = rng.random_range(3..=7);
        let selected: Vec<&'static str> = UTILITY_TYPES.choose_multiple(rng, count).copied().collect();
        for utility_type in selected {
            let providers = utility_providers(utility_type);
            rows.push(Utility {
                id: ids.next(),
                property_id,
                utility_type,
                provider: pick(rng, providers),
                account_number: format!(
                    "{}-{}",
                    utility_type[..3].to_uppercase(),
                    rng.random_range(100_000..1_000_000)
                ),
                monthly_average: round2(rng.random_range(25.0..500.0)),
                is_tenant_responsibility: rng.random_bool(0.5),
            });
        }
    }
    rows
}

/// 2–8 distinct amenity links per property; 30% carry an extra charge.
pub(crate) fn property_amenities(
    profile: &GenerationProfile,
    rng: &mut impl Rng,
) -> Vec<PropertyAmenity> {
    let mut ids = IdSequence::new();
    let mut rows = Vec::new();
    for property_id in 1..=profile.properties as i64 {
        let count = rng.random_range(2..=8);
        for amenity_idx in rand::seq::index::sample(rng, AMENITIES.len(), count) {
            let additional_cost = if rng.random_bool(0.3) {
                round2(rng.random_range(10.0..200.0))
            } else {
                0.0
            };
            rows.push(PropertyAmenity {
                id: ids.next(),
                property_id,
                amenity_id: amenity_idx as i64 + 1,
                is_available: rng.random_bool(0.75),
                additional_cost,
            });
        }
    }
    rows
}

/// 1–3 year-long policies per property.
pub(crate) fn insurance_policies(
    profile: &GenerationProfile,
    rng: &mut impl Rng,
) -> Vec<Insurance> {
    let mut ids = IdSequence::new();
    let mut rows = Vec::new();
    for property_id in 1..=profile.properties as i64 {
        for _ in 0..rng.random_range(1..=3) {
            let start_date = date_within(rng, ymd(2020, 1, 1), 0, 1095);
            rows.push(Insurance {
                id: ids.next(),
                property_id,
                insurance_type: pick(rng, INSURANCE_TYPES),
                provider: pick(rng, INSURANCE_PROVIDERS),
                policy_number: format!("POL-{}", rng.random_range(1_000_000..10_000_000)),
                start_date,
                end_date: start_date + chrono::Duration::days(365),
                premium_amount: round2(rng.random_range(500.0..15_000.0)),
                coverage_amount: round2(rng.random_range(100_000.0..10_000_000.0)),
            });
        }
    }
    rows
}
