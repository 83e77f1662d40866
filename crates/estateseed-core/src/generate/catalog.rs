//! Static categorical domains.
//!
//! Values other entities join on (cities, states, property types) or that are
//! themselves the dataset (the amenity and vendor rosters) live here as
//! `&'static str` catalogs. Free-form field formats (person names, emails,
//! street names) are non-normative and come from `fake` instead.

use rand::Rng;

/// Uniform pick from a non-empty static slice.
pub fn pick<'a, T: ?Sized>(rng: &mut impl Rng, items: &'a [&'a T]) -> &'a T {
    items[rng.random_range(0..items.len())]
}

/// Cities properties can sit in. MarketData series cover the leading
/// `market_cities` entries, so ordering matters.
pub const CITIES: &[&str] = &[
    "New York",
    "Los Angeles",
    "Chicago",
    "Houston",
    "Miami",
    "San Francisco",
    "Boston",
    "Seattle",
    "London",
    "Paris",
    "Berlin",
    "Madrid",
    "Rome",
    "Amsterdam",
    "Brussels",
    "Vienna",
    "Tokyo",
    "Osaka",
    "Seoul",
    "Beijing",
    "Shanghai",
    "Hong Kong",
    "Singapore",
    "Bangkok",
    "Sydney",
    "Melbourne",
    "Toronto",
    "Vancouver",
    "Montreal",
    "Calgary",
    "Ottawa",
    "Dubai",
    "Abu Dhabi",
    "Doha",
    "Kuwait City",
    "Riyadh",
    "Tel Aviv",
    "Istanbul",
    "Cape Town",
    "Johannesburg",
    "Moscow",
    "Saint Petersburg",
    "Warsaw",
    "Prague",
    "Mexico City",
    "São Paulo",
    "Buenos Aires",
    "Lima",
    "Santiago",
    "Bogotá",
    "Delhi",
    "Mumbai",
    "Bangalore",
    "Jakarta",
    "Kuala Lumpur",
    "Manila",
    "Cairo",
    "Atlanta",
    "Phoenix",
    "Dallas",
    "Philadelphia",
    "Washington DC",
    "Las Vegas",
    "Orlando",
];

pub const STATES: &[&str] = &[
    "NY", "CA", "IL", "TX", "FL", "WA", "MA", "GA", "AZ", "PA", "NV", "DC", "CO", "OR", "NC",
];

pub const PROPERTY_TYPES: &[&str] = &[
    "Apartment",
    "Office",
    "Retail",
    "Warehouse",
    "Industrial",
    "Mixed Use",
    "Hotel",
    "Student Housing",
];

pub const MAINTENANCE_CATEGORIES: &[&str] = &[
    "Plumbing",
    "Electrical",
    "HVAC",
    "Roofing",
    "Painting",
    "Flooring",
    "Security",
    "Landscaping",
    "General Repair",
];

pub const MAINTENANCE_PRIORITIES: &[&str] = &["Low", "Medium", "High", "Emergency"];

pub const MAINTENANCE_STATUSES: &[&str] = &["Open", "In Progress", "Completed", "Cancelled"];

pub const VENDOR_CATEGORIES: &[&str] = &[
    "Plumbing",
    "Electrical",
    "HVAC",
    "Construction",
    "Cleaning",
    "Security",
    "Landscaping",
    "Legal",
    "Insurance",
];

/// Fixed vendor roster — the vendor table is this list, one row each.
pub const VENDOR_NAMES: &[&str] = &[
    "ABC Plumbing",
    "Quick Fix Electric",
    "Cool Air HVAC",
    "Builder's Best",
    "Clean Pro Services",
    "Secure Guard Systems",
    "Green Lawn Care",
    "Legal Eagles",
    "Safe Insurance Co",
    "Fast Repair LLC",
    "Elite Contractors",
    "Perfect Paint Co",
    "Floor Masters",
    "Roof Experts",
    "Tech Support Plus",
];

pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Maintenance",
    "Utilities",
    "Insurance",
    "Property Tax",
    "Management Fee",
    "Legal",
    "Marketing",
    "Supplies",
];

pub const DOCUMENT_TYPES: &[&str] = &[
    "Deed",
    "Lease Agreement",
    "Insurance Policy",
    "Inspection Report",
    "Tax Document",
    "Permit",
    "Invoice",
];

/// Document types that carry an expiry date (1–3 years after upload).
pub const EXPIRING_DOCUMENT_TYPES: &[&str] = &["Insurance Policy", "Permit", "Lease Agreement"];

pub const INSPECTION_TYPES: &[&str] = &[
    "Annual",
    "Move-in",
    "Move-out",
    "Maintenance",
    "Safety",
    "Insurance",
];

pub const INSPECTION_RATINGS: &[&str] = &["Excellent", "Good", "Fair", "Poor"];

pub const UTILITY_TYPES: &[&str] = &[
    "Electricity",
    "Gas",
    "Water",
    "Sewer",
    "Internet",
    "Cable",
    "Trash",
];

/// Provider roster per utility type.
pub fn utility_providers(utility_type: &str) -> &'static [&'static str] {
    match utility_type {
        "Electricity" => &["PowerCorp", "ElectricCo", "Energy Plus"],
        "Gas" => &["GasCorp", "Natural Gas Co", "Gas Solutions"],
        "Water" => &["City Water", "Water Works", "Aqua Services"],
        "Sewer" => &["City Sewer", "Waste Management", "Sewer Services"],
        "Internet" => &["FastNet", "WebCorp", "ConnectCo"],
        "Cable" => &["CableCorp", "TV Plus", "MediaCo"],
        "Trash" => &["Waste Corp", "Clean Services", "Garbage Co"],
        _ => &["Generic Provider"],
    }
}

pub const EMPLOYMENT_STATUSES: &[&str] = &[
    "Employed",
    "Self-Employed",
    "Unemployed",
    "Student",
    "Retired",
];

/// The fixed amenity roster: (name, category, description).
pub const AMENITIES: &[(&str, &str, &str)] = &[
    (
        "Swimming Pool",
        "Recreation",
        "Outdoor swimming pool with deck area",
    ),
    (
        "Fitness Center",
        "Fitness",
        "Fully equipped gym with modern equipment",
    ),
    ("Parking Garage", "Parking", "Covered parking spaces"),
    (
        "Security System",
        "Security",
        "24/7 surveillance and access control",
    ),
    ("WiFi", "Technology", "High-speed internet access"),
    (
        "Laundry Facility",
        "Convenience",
        "On-site washing and drying machines",
    ),
    (
        "Rooftop Terrace",
        "Recreation",
        "Common outdoor space with city views",
    ),
    (
        "Conference Room",
        "Convenience",
        "Meeting space for residents/tenants",
    ),
    ("Pet Area", "Recreation", "Designated area for pets"),
    ("Storage Units", "Convenience", "Additional storage space"),
];

pub const INSURANCE_TYPES: &[&str] = &["Property", "Liability", "Flood", "Earthquake", "Umbrella"];

pub const INSURANCE_PROVIDERS: &[&str] = &[
    "SafeGuard Insurance",
    "Reliable Coverage",
    "Premium Protect",
    "SecureShield",
    "TrustCorp Insurance",
];

pub const RENEWAL_TERMS: &[&str] = &[
    "Standard renewal",
    "Early renewal discount",
    "Rent increase applied",
    "Extended term",
];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn market_data_window_of_cities_is_available() {
        assert!(CITIES.len() >= 20);
    }

    #[test]
    fn pick_stays_inside_the_slice() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let city = pick(&mut rng, CITIES);
            assert!(CITIES.contains(&city));
        }
    }

    #[test]
    fn every_utility_type_has_providers() {
        for ut in UTILITY_TYPES {
            assert!(!utility_providers(ut).is_empty());
        }
        assert_eq!(utility_providers("Telegraph"), ["Generic Provider"]);
    }

    #[test]
    fn expiring_document_types_are_document_types() {
        for dt in EXPIRING_DOCUMENT_TYPES {
            assert!(DOCUMENT_TYPES.contains(dt));
        }
    }
}
