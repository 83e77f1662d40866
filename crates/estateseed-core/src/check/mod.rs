//! # Dataset Integrity Checks
//!
//! Validates a generated [`Dataset`] against the structural invariants the
//! schema promises: referential integrity across every FK pair, temporal
//! ordering of related dates, derived-value bounds (deposits, renewal rents,
//! completion costs), payment schedules, and series periodicity.
//!
//! The checker runs in memory before anything touches the store, so a bad
//! dataset aborts the run instead of producing a half-plausible database.

use std::collections::{HashMap, HashSet};

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::generate::lease::months_spanned;
use crate::generate::Dataset;

/// Slack allowed past a lease's end date: the late-payment perturbation can
/// push a payment up to 15 days out, and the 30-day month arithmetic can
/// place the final nominal payment a day past the end date when a short
/// February sits inside the span.
const PAYMENT_SLACK_DAYS: i64 = 17;

/// Tolerance for cent-rounded derived amounts.
const MONEY_EPSILON: f64 = 0.005;

/// One broken invariant.
#[derive(Debug, Clone, Serialize)]
pub struct Violation {
    pub table: &'static str,
    pub row_id: i64,
    pub rule: String,
}

/// Result of validating a dataset.
#[derive(Debug, Default, Serialize)]
pub struct IntegrityReport {
    pub rows_checked: usize,
    pub violations: Vec<Violation>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Human-readable summary for terminal output.
    pub fn summary(&self) -> String {
        if self.is_clean() {
            return format!("{} rows checked, no violations.", self.rows_checked);
        }

        let mut lines = vec![format!(
            "{} rows checked, {} violation(s):",
            self.rows_checked,
            self.violations.len()
        )];
        for v in self.violations.iter().take(20) {
            lines.push(format!("  {} #{}: {}", v.table, v.row_id, v.rule));
        }
        if self.violations.len() > 20 {
            lines.push(format!("  … and {} more", self.violations.len() - 20));
        }
        lines.join("\n")
    }

    fn flag(&mut self, table: &'static str, row_id: i64, rule: impl Into<String>) {
        self.violations.push(Violation {
            table,
            row_id,
            rule: rule.into(),
        });
    }
}

/// Validate every testable property of a generated dataset.
///
/// `today` must be the same anchor date the generation pass used; renewal
/// eligibility is defined against it.
pub fn validate(dataset: &Dataset, today: NaiveDate) -> IntegrityReport {
    let mut report = IntegrityReport {
        rows_checked: dataset.total_rows(),
        ..Default::default()
    };

    check_references(dataset, &mut report);
    check_leases(dataset, &mut report);
    check_payments(dataset, &mut report);
    check_maintenance(dataset, &mut report);
    check_renewals(dataset, today, &mut report);
    check_series(dataset, &mut report);

    report
}

fn id_set(ids: impl Iterator<Item = i64>) -> HashSet<i64> {
    ids.collect()
}

/// Referential integrity over every FK pair in the schema.
fn check_references(dataset: &Dataset, report: &mut IntegrityReport) {
    let funds = id_set(dataset.funds.iter().map(|r| r.id));
    let tenants = id_set(dataset.tenants.iter().map(|r| r.id));
    let managers = id_set(dataset.property_managers.iter().map(|r| r.id));
    let vendors = id_set(dataset.vendors.iter().map(|r| r.id));
    let amenities = id_set(dataset.amenities.iter().map(|r| r.id));
    let properties = id_set(dataset.properties.iter().map(|r| r.id));
    let leases = id_set(dataset.leases.iter().map(|r| r.id));

    let mut require = |table: &'static str, row_id: i64, column: &str, key: i64, parent: &HashSet<i64>| {
        if !parent.contains(&key) {
            report.violations.push(Violation {
                table,
                row_id,
                rule: format!("{} = {} has no parent row", column, key),
            });
        }
    };

    for r in &dataset.properties {
        require("Property", r.id, "fund_id", r.fund_id, &funds);
    }
    for r in &dataset.manager_assignments {
        require("PropertyManagerAssignment", r.id, "property_id", r.property_id, &properties);
        require("PropertyManagerAssignment", r.id, "manager_id", r.manager_id, &managers);
    }
    for r in &dataset.maintenance_requests {
        require("MaintenanceRequest", r.id, "property_id", r.property_id, &properties);
        require("MaintenanceRequest", r.id, "manager_id", r.manager_id, &managers);
        if let Some(tenant_id) = r.tenant_id {
            require("MaintenanceRequest", r.id, "tenant_id", tenant_id, &tenants);
        }
        if let Some(vendor_id) = r.vendor_id {
            require("MaintenanceRequest", r.id, "vendor_id", vendor_id, &vendors);
        }
    }
    for r in &dataset.expenses {
        require("Expense", r.id, "property_id", r.property_id, &properties);
        if let Some(vendor_id) = r.vendor_id {
            require("Expense", r.id, "vendor_id", vendor_id, &vendors);
        }
    }
    for r in &dataset.documents {
        require("PropertyDocument", r.id, "property_id", r.property_id, &properties);
    }
    for r in &dataset.inspections {
        require("Inspection", r.id, "property_id", r.property_id, &properties);
    }
    for r in &dataset.utilities {
        require("Utility", r.id, "property_id", r.property_id, &properties);
    }
    for r in &dataset.tenant_histories {
        require("TenantHistory", r.id, "tenant_id", r.tenant_id, &tenants);
    }
    for r in &dataset.property_amenities {
        require("PropertyAmenity", r.id, "property_id", r.property_id, &properties);
        require("PropertyAmenity", r.id, "amenity_id", r.amenity_id, &amenities);
    }
    for r in &dataset.insurance_policies {
        require("Insurance", r.id, "property_id", r.property_id, &properties);
    }
    for r in &dataset.leases {
        require("Lease", r.id, "property_id", r.property_id, &properties);
        require("Lease", r.id, "tenant_id", r.tenant_id, &tenants);
    }
    for r in &dataset.payments {
        require("Payment", r.id, "lease_id", r.lease_id, &leases);
    }
    for r in &dataset.renewals {
        require("LeaseRenewal", r.id, "lease_id", r.lease_id, &leases);
    }
    for r in &dataset.fund_performance {
        require("FundPerformance", r.id, "fund_id", r.fund_id, &funds);
    }
}

fn check_leases(dataset: &Dataset, report: &mut IntegrityReport) {
    for lease in &dataset.leases {
        if lease.end_date <= lease.start_date {
            report.flag(
                "Lease",
                lease.id,
                format!("end_date {} not after start_date {}", lease.end_date, lease.start_date),
            );
        }
        let lo = lease.rent * 0.5 - MONEY_EPSILON;
        let hi = lease.rent * 2.0 + MONEY_EPSILON;
        if lease.deposit < lo || lease.deposit > hi {
            report.flag(
                "Lease",
                lease.id,
                format!("deposit {} outside [0.5, 2.0] × rent {}", lease.deposit, lease.rent),
            );
        }
    }
}

/// Every payment dated within (or within the slack window after) its lease
/// span, and exactly one payment per month boundary crossed.
fn check_payments(dataset: &Dataset, report: &mut IntegrityReport) {
    let leases: HashMap<i64, _> = dataset.leases.iter().map(|l| (l.id, l)).collect();
    let mut per_lease: HashMap<i64, usize> = HashMap::new();

    for payment in &dataset.payments {
        let Some(lease) = leases.get(&payment.lease_id) else {
            // Orphans are reported by the FK pass
            continue;
        };
        *per_lease.entry(lease.id).or_default() += 1;

        if payment.payment_date < lease.start_date
            || payment.payment_date > lease.end_date + Duration::days(PAYMENT_SLACK_DAYS)
        {
            report.flag(
                "Payment",
                payment.id,
                format!(
                    "payment_date {} outside lease span {}..{}",
                    payment.payment_date, lease.start_date, lease.end_date
                ),
            );
        }
        if payment.amount > lease.rent + MONEY_EPSILON
            || payment.amount < lease.rent * 0.3 - MONEY_EPSILON
        {
            report.flag(
                "Payment",
                payment.id,
                format!("amount {} outside [0.3, 1.0] × rent {}", payment.amount, lease.rent),
            );
        }
    }

    for lease in &dataset.leases {
        let expected = months_spanned(lease.start_date, lease.end_date).max(0) as usize;
        let actual = per_lease.get(&lease.id).copied().unwrap_or(0);
        if actual != expected {
            report.flag(
                "Lease",
                lease.id,
                format!("{} payments for {} month boundaries", actual, expected),
            );
        }
    }
}

fn check_maintenance(dataset: &Dataset, report: &mut IntegrityReport) {
    for r in &dataset.maintenance_requests {
        if r.status == "Completed" {
            match r.completed_date {
                Some(completed) if completed >= r.created_date => {}
                Some(completed) => report.flag(
                    "MaintenanceRequest",
                    r.id,
                    format!("completed_date {} precedes created_date {}", completed, r.created_date),
                ),
                None => report.flag("MaintenanceRequest", r.id, "completed without completed_date"),
            }
            if r.actual_cost.is_none() {
                report.flag("MaintenanceRequest", r.id, "completed without actual_cost");
            }
        } else {
            if r.completed_date.is_some() {
                report.flag(
                    "MaintenanceRequest",
                    r.id,
                    format!("status '{}' must not have completed_date", r.status),
                );
            }
            if r.actual_cost.is_some() {
                report.flag(
                    "MaintenanceRequest",
                    r.id,
                    format!("status '{}' must not have actual_cost", r.status),
                );
            }
        }
    }
}

fn check_renewals(dataset: &Dataset, today: NaiveDate, report: &mut IntegrityReport) {
    let leases: HashMap<i64, _> = dataset.leases.iter().map(|l| (l.id, l)).collect();
    for renewal in &dataset.renewals {
        let Some(lease) = leases.get(&renewal.lease_id) else {
            continue;
        };
        if lease.end_date >= today {
            report.flag(
                "LeaseRenewal",
                renewal.id,
                format!("lease end_date {} is not in the past of {}", lease.end_date, today),
            );
        }
        if renewal.new_rent < lease.rent - MONEY_EPSILON {
            report.flag(
                "LeaseRenewal",
                renewal.id,
                format!("new_rent {} below prior rent {}", renewal.new_rent, lease.rent),
            );
        }
        if renewal.new_end_date <= renewal.renewal_date {
            report.flag(
                "LeaseRenewal",
                renewal.id,
                "new_end_date not after renewal_date",
            );
        }
    }
}

/// Strict periodicity: weekly NAV samples per fund, quarterly market samples
/// per (city, property type).
fn check_series(dataset: &Dataset, report: &mut IntegrityReport) {
    let mut last_nav: HashMap<i64, NaiveDate> = HashMap::new();
    for row in &dataset.fund_performance {
        if let Some(prev) = last_nav.insert(row.fund_id, row.date) {
            if (row.date - prev).num_days() != 7 {
                report.flag(
                    "FundPerformance",
                    row.id,
                    format!("sample gap {} days, expected 7", (row.date - prev).num_days()),
                );
            }
        }
        if row.nav <= 0.0 {
            report.flag("FundPerformance", row.id, format!("nav {} not positive", row.nav));
        }
    }

    let mut last_market: HashMap<(&str, &str), NaiveDate> = HashMap::new();
    for row in &dataset.market_data {
        if let Some(prev) = last_market.insert((row.city, row.property_type), row.date) {
            if (row.date - prev).num_days() != 90 {
                report.flag(
                    "MarketData",
                    row.id,
                    format!("sample gap {} days, expected 90", (row.date - prev).num_days()),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::entities::{Lease, LeaseRenewal, Payment};
    use crate::generate::{generate, ymd, GenerationProfile};

    fn today() -> NaiveDate {
        ymd(2025, 6, 1)
    }

    #[test]
    fn generated_sample_dataset_is_clean() {
        let dataset = generate(&GenerationProfile::sample(42, today()));
        let report = validate(&dataset, today());
        assert!(report.is_clean(), "{}", report.summary());
        assert_eq!(report.rows_checked, dataset.total_rows());
    }

    #[test]
    fn generated_dataset_is_clean_across_seeds() {
        for seed in [0, 1, 7, 1234] {
            let dataset = generate(&GenerationProfile::sample(seed, today()));
            let report = validate(&dataset, today());
            assert!(report.is_clean(), "seed {}: {}", seed, report.summary());
        }
    }

    #[test]
    fn orphan_foreign_key_is_flagged() {
        let mut dataset = generate(&GenerationProfile::sample(1, today()));
        dataset.payments.push(Payment {
            id: 999_999,
            lease_id: 999_999,
            payment_date: ymd(2023, 1, 1),
            amount: 100.0,
        });
        let report = validate(&dataset, today());
        assert!(report
            .violations
            .iter()
            .any(|v| v.table == "Payment" && v.rule.contains("no parent row")));
    }

    #[test]
    fn inverted_lease_dates_are_flagged() {
        let mut dataset = generate(&GenerationProfile::sample(1, today()));
        dataset.leases.push(Lease {
            id: 999_999,
            property_id: 1,
            tenant_id: 1,
            start_date: ymd(2023, 5, 1),
            end_date: ymd(2023, 4, 1),
            rent: 1000.0,
            deposit: 1000.0,
        });
        let report = validate(&dataset, today());
        assert!(report
            .violations
            .iter()
            .any(|v| v.table == "Lease" && v.rule.contains("not after start_date")));
    }

    #[test]
    fn cheap_renewal_is_flagged() {
        let mut dataset = generate(&GenerationProfile::sample(1, today()));
        let expired = dataset
            .leases
            .iter()
            .find(|l| l.end_date < today())
            .expect("sample has expired leases")
            .clone();
        dataset.renewals.push(LeaseRenewal {
            id: 999_999,
            lease_id: expired.id,
            renewal_date: expired.end_date,
            new_rent: expired.rent * 0.5,
            new_end_date: expired.end_date + Duration::days(365),
            renewal_terms: "Standard renewal",
        });
        let report = validate(&dataset, today());
        assert!(report
            .violations
            .iter()
            .any(|v| v.table == "LeaseRenewal" && v.rule.contains("below prior rent")));
    }

    #[test]
    fn summary_truncates_long_violation_lists() {
        let mut report = IntegrityReport::default();
        for i in 0..30 {
            report.flag("Lease", i, "synthetic violation");
        }
        let summary = report.summary();
        assert!(summary.contains("30 violation(s)"));
        assert!(summary.contains("… and 10 more"));
    }

    #[test]
    fn report_serializes_to_json() {
        let dataset = generate(&GenerationProfile::sample(3, today()));
        let report = validate(&dataset, today());
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"rows_checked\""));
        assert!(json.contains("\"violations\""));
    }
}
