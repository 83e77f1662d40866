//! Pipeline orchestration: one seeded RNG, strict dependency order, one pass.

use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::generate::entities::*;
use crate::generate::profile::GenerationProfile;
use crate::generate::value::Value;
use crate::generate::{lease, property, reference, series};
use crate::schema::{self, TableDef};

/// A complete generated dataset: every row for every table, fully
/// cross-consistent and never mutated after the pass completes.
#[derive(Debug, Default)]
pub struct Dataset {
    pub funds: Vec<Fund>,
    pub tenants: Vec<Tenant>,
    pub property_managers: Vec<PropertyManager>,
    pub vendors: Vec<Vendor>,
    pub amenities: Vec<Amenity>,
    pub properties: Vec<Property>,
    pub manager_assignments: Vec<PropertyManagerAssignment>,
    pub maintenance_requests: Vec<MaintenanceRequest>,
    pub expenses: Vec<Expense>,
    pub documents: Vec<PropertyDocument>,
    pub inspections: Vec<Inspection>,
    pub utilities: Vec<Utility>,
    pub tenant_histories: Vec<TenantHistory>,
    pub property_amenities: Vec<PropertyAmenity>,
    pub insurance_policies: Vec<Insurance>,
    pub leases: Vec<Lease>,
    pub payments: Vec<Payment>,
    pub renewals: Vec<LeaseRenewal>,
    pub fund_performance: Vec<FundPerformance>,
    pub market_data: Vec<MarketData>,
}

impl Dataset {
    pub fn total_rows(&self) -> usize {
        self.row_counts().values().sum()
    }

    /// Row count per table, in insertion order.
    pub fn row_counts(&self) -> IndexMap<&'static str, usize> {
        let mut counts = IndexMap::new();
        counts.insert(Fund::TABLE, self.funds.len());
        counts.insert(Tenant::TABLE, self.tenants.len());
        counts.insert(PropertyManager::TABLE, self.property_managers.len());
        counts.insert(Vendor::TABLE, self.vendors.len());
        counts.insert(Amenity::TABLE, self.amenities.len());
        counts.insert(Property::TABLE, self.properties.len());
        counts.insert(
            PropertyManagerAssignment::TABLE,
            self.manager_assignments.len(),
        );
        counts.insert(MaintenanceRequest::TABLE, self.maintenance_requests.len());
        counts.insert(Expense::TABLE, self.expenses.len());
        counts.insert(PropertyDocument::TABLE, self.documents.len());
        counts.insert(Inspection::TABLE, self.inspections.len());
        counts.insert(Utility::TABLE, self.utilities.len());
        counts.insert(TenantHistory::TABLE, self.tenant_histories.len());
        counts.insert(PropertyAmenity::TABLE, self.property_amenities.len());
        counts.insert(Insurance::TABLE, self.insurance_policies.len());
        counts.insert(Lease::TABLE, self.leases.len());
        counts.insert(Payment::TABLE, self.payments.len());
        counts.insert(LeaseRenewal::TABLE, self.renewals.len());
        counts.insert(FundPerformance::TABLE, self.fund_performance.len());
        counts.insert(MarketData::TABLE, self.market_data.len());
        counts
    }

    /// Encode every table into `Value` rows, in insertion order.
    ///
    /// This is the handoff point to the output writers; nothing downstream
    /// needs the typed structs.
    pub fn tables(&self) -> Vec<(&'static TableDef, Vec<Vec<Value>>)> {
        fn encode<R: TableRow>(rows: &[R]) -> (&'static TableDef, Vec<Vec<Value>>) {
            let def = schema::table(R::TABLE).expect("entity tables exist in the catalog");
            (def, rows.iter().map(TableRow::row).collect())
        }

        vec![
            encode(&self.funds),
            encode(&self.tenants),
            encode(&self.property_managers),
            encode(&self.vendors),
            encode(&self.amenities),
            encode(&self.properties),
            encode(&self.manager_assignments),
            encode(&self.maintenance_requests),
            encode(&self.expenses),
            encode(&self.documents),
            encode(&self.inspections),
            encode(&self.utilities),
            encode(&self.tenant_histories),
            encode(&self.property_amenities),
            encode(&self.insurance_policies),
            encode(&self.leases),
            encode(&self.payments),
            encode(&self.renewals),
            encode(&self.fund_performance),
            encode(&self.market_data),
        ]
    }
}

/// Run one full generation pass.
///
/// Steps run in strict dependency order — every child generator draws parent
/// keys from ranges the earlier steps have already materialized. The whole
/// pass is a pure function of the profile: same seed and anchor date, same
/// dataset.
pub fn generate(profile: &GenerationProfile) -> Dataset {
    let mut rng = StdRng::seed_from_u64(profile.seed);

    // 1. Independent reference entities
    let funds = reference::funds(profile, &mut rng);
    let tenants = reference::tenants(profile, &mut rng);
    let property_managers = reference::property_managers(profile, &mut rng);
    let vendors = reference::vendors(profile, &mut rng);
    let amenities = reference::amenities();

    // 2. Properties (reference funds)
    let properties = property::properties(profile, &mut rng);

    // 3. Property- and tenant-keyed children
    let manager_assignments = property::manager_assignments(profile, &mut rng);
    let maintenance_requests = property::maintenance_requests(profile, &mut rng);
    let expenses = property::expenses(profile, &mut rng);
    let documents = property::documents(profile, &mut rng);
    let inspections = property::inspections(profile, &mut rng);
    let utilities = property::utilities(profile, &mut rng);
    let tenant_histories = reference::tenant_histories(&tenants, &mut rng);
    let property_amenities = property::property_amenities(profile, &mut rng);
    let insurance_policies = property::insurance_policies(profile, &mut rng);

    // 4–6. Leases, then the rows derived from them
    let leases = lease::leases(profile, &mut rng);
    let payments = lease::payments(&leases, &mut rng);
    let renewals = lease::renewals(&leases, profile, &mut rng);

    // 7. Periodic series
    let fund_performance = series::fund_performance(profile, &mut rng);
    let market_data = series::market_data(profile, &mut rng);

    let dataset = Dataset {
        funds,
        tenants,
        property_managers,
        vendors,
        amenities,
        properties,
        manager_assignments,
        maintenance_requests,
        expenses,
        documents,
        inspections,
        utilities,
        tenant_histories,
        property_amenities,
        insurance_policies,
        leases,
        payments,
        renewals,
        fund_performance,
        market_data,
    };

    debug!(
        seed = profile.seed,
        rows = dataset.total_rows(),
        "generation pass complete"
    );
    dataset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::ymd;

    fn profile() -> GenerationProfile {
        GenerationProfile::sample(42, ymd(2025, 6, 1))
    }

    #[test]
    fn generation_is_deterministic_for_a_seed() {
        let a = generate(&profile());
        let b = generate(&profile());
        assert_eq!(a.row_counts(), b.row_counts());
        for (lhs, rhs) in a.leases.iter().zip(&b.leases) {
            assert_eq!(lhs.start_date, rhs.start_date);
            assert_eq!(lhs.rent, rhs.rent);
            assert_eq!(lhs.tenant_id, rhs.tenant_id);
        }
        for (lhs, rhs) in a.payments.iter().zip(&b.payments) {
            assert_eq!(lhs.payment_date, rhs.payment_date);
            assert_eq!(lhs.amount, rhs.amount);
        }
    }

    #[test]
    fn different_seeds_differ() {
        let a = generate(&profile());
        let b = generate(&GenerationProfile::sample(43, ymd(2025, 6, 1)));
        let same = a
            .leases
            .iter()
            .zip(&b.leases)
            .all(|(l, r)| l.start_date == r.start_date && l.rent == r.rent);
        assert!(!same, "two seeds should not produce identical leases");
    }

    #[test]
    fn tables_cover_the_whole_catalog() {
        let dataset = generate(&profile());
        let tables = dataset.tables();
        assert_eq!(tables.len(), crate::schema::TABLES.len());
        for (def, rows) in &tables {
            for row in rows {
                assert_eq!(row.len(), def.columns.len(), "{}", def.name);
            }
        }
        // Insertion order must match the catalog's parent-first order
        let order: Vec<&str> = tables.iter().map(|(d, _)| d.name).collect();
        let catalog: Vec<&str> = crate::schema::TABLES.iter().map(|t| t.name).collect();
        assert_eq!(order, catalog);
    }

    #[test]
    fn profile_counts_are_honored() {
        let p = profile();
        let dataset = generate(&p);
        let counts = dataset.row_counts();
        assert_eq!(counts["Fund"], p.funds);
        assert_eq!(counts["Property"], p.properties);
        assert_eq!(counts["Tenant"], p.tenants);
        assert_eq!(counts["MaintenanceRequest"], p.maintenance_requests);
        assert_eq!(counts["Expense"], p.expenses);
        assert_eq!(counts["Amenity"], 10);
        // Leases: 1–4 per property
        assert!(counts["Lease"] >= p.properties && counts["Lease"] <= 4 * p.properties);
    }
}
