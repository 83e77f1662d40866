use chrono::NaiveDate;

/// Everything a generation pass depends on: the RNG seed, the anchor date
/// used for "is this lease expired" decisions, and the per-entity row counts.
///
/// The pass is a pure function of this struct — two runs with the same
/// profile produce byte-identical datasets. `today` is pinned here instead of
/// read from the wall clock inside the pipeline so tests can replay a fixed
/// generation time.
#[derive(Debug, Clone)]
pub struct GenerationProfile {
    pub seed: u64,
    /// Generation-time anchor; renewal eligibility compares lease end dates
    /// against this.
    pub today: NaiveDate,
    pub funds: usize,
    pub properties: usize,
    pub tenants: usize,
    pub property_managers: usize,
    pub vendors: usize,
    pub maintenance_requests: usize,
    pub expenses: usize,
    pub inspections: usize,
    /// Leading cities from the catalog that get MarketData series.
    pub market_cities: usize,
}

impl GenerationProfile {
    /// Full-size profile with the production row counts.
    pub fn new(seed: u64, today: NaiveDate) -> Self {
        GenerationProfile {
            seed,
            today,
            funds: 25,
            properties: 5000,
            tenants: 2000,
            property_managers: 15,
            vendors: 15,
            maintenance_requests: 8000,
            expenses: 15_000,
            inspections: 6000,
            market_cities: 20,
        }
    }

    /// Small profile for tests and benches — same shape, two orders of
    /// magnitude fewer rows.
    pub fn sample(seed: u64, today: NaiveDate) -> Self {
        GenerationProfile {
            seed,
            today,
            funds: 5,
            properties: 40,
            tenants: 30,
            property_managers: 4,
            vendors: 6,
            maintenance_requests: 60,
            expenses: 80,
            inspections: 50,
            market_cities: 3,
        }
    }

    /// Scale the bulk row counts by a factor, keeping every count at least 1.
    pub fn scaled(mut self, factor: f64) -> Self {
        let scale = |n: usize| ((n as f64 * factor).round() as usize).max(1);
        self.funds = scale(self.funds);
        self.properties = scale(self.properties);
        self.tenants = scale(self.tenants);
        self.maintenance_requests = scale(self.maintenance_requests);
        self.expenses = scale(self.expenses);
        self.inspections = scale(self.inspections);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn default_counts_match_production_recipe() {
        let p = GenerationProfile::new(7, today());
        assert_eq!(p.funds, 25);
        assert_eq!(p.properties, 5000);
        assert_eq!(p.tenants, 2000);
        assert_eq!(p.expenses, 15_000);
    }

    #[test]
    fn scaling_never_drops_to_zero() {
        let p = GenerationProfile::new(7, today()).scaled(0.0001);
        assert_eq!(p.funds, 1);
        assert_eq!(p.properties, 1);
    }
}
