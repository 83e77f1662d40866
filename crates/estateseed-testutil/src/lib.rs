//! Shared fixtures for estateseed integration tests.

use chrono::NaiveDate;
use estateseed_core::generate::{generate, Dataset, GenerationProfile};
use sqlx::SqlitePool;

/// Fixed anchor date so renewal eligibility never drifts with the clock.
pub fn anchor_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid calendar date")
}

/// Generate a small deterministic dataset for the given seed.
pub fn sample_dataset(seed: u64) -> Dataset {
    generate(&GenerationProfile::sample(seed, anchor_date()))
}

/// Total rows in a table.
pub async fn row_count(pool: &SqlitePool, table: &str) -> i64 {
    let sql = format!("SELECT COUNT(*) FROM \"{}\"", table);
    sqlx::query_scalar(&sql)
        .fetch_one(pool)
        .await
        .unwrap_or_else(|e| panic!("count on {} failed: {}", table, e))
}

/// Rows in `child_table` whose `fk_column` points at no row in `parent_table`.
pub async fn orphan_count(
    pool: &SqlitePool,
    child_table: &str,
    fk_column: &str,
    parent_table: &str,
) -> i64 {
    let sql = format!(
        "SELECT COUNT(*) FROM \"{child}\" c \
         LEFT JOIN \"{parent}\" p ON c.\"{fk}\" = p.id \
         WHERE c.\"{fk}\" IS NOT NULL AND p.id IS NULL",
        child = child_table,
        parent = parent_table,
        fk = fk_column,
    );
    sqlx::query_scalar(&sql)
        .fetch_one(pool)
        .await
        .unwrap_or_else(|e| panic!("orphan check {}.{} failed: {}", child_table, fk_column, e))
}
