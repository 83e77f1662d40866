//! End-to-end seeding against a real SQLite file.

use estateseed_core::output::direct::seed_database;
use estateseed_core::{check, query, schema};
use estateseed_testutil::{anchor_date, orphan_count, row_count, sample_dataset};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

async fn connect(url: &str) -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect(url)
        .await
        .expect("connect to seeded database")
}

#[tokio::test]
async fn seeded_database_matches_the_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("portfolio.db").display());

    let dataset = sample_dataset(42);
    seed_database(&dataset, &url, None).await.unwrap();

    let pool = connect(&url).await;
    for (table, expected) in dataset.row_counts() {
        assert_eq!(
            row_count(&pool, table).await,
            expected as i64,
            "row count mismatch for {}",
            table
        );
    }
}

#[tokio::test]
async fn every_foreign_key_resolves_after_seeding() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("portfolio.db").display());

    let dataset = sample_dataset(7);
    seed_database(&dataset, &url, None).await.unwrap();

    let pool = connect(&url).await;
    for table in schema::TABLES.iter() {
        for fk in table.foreign_keys {
            assert_eq!(
                orphan_count(&pool, table.name, fk.column, fk.references).await,
                0,
                "orphans in {}.{}",
                table.name,
                fk.column
            );
        }
    }
}

#[tokio::test]
async fn reseeding_replaces_instead_of_appending() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("portfolio.db").display());

    seed_database(&sample_dataset(1), &url, None).await.unwrap();
    let second = sample_dataset(2);
    seed_database(&second, &url, None).await.unwrap();

    let pool = connect(&url).await;
    for (table, expected) in second.row_counts() {
        assert_eq!(
            row_count(&pool, table).await,
            expected as i64,
            "{} should hold only the second dataset",
            table
        );
    }
}

#[tokio::test]
async fn seeded_schema_enforces_foreign_keys() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("portfolio.db").display());

    seed_database(&sample_dataset(11), &url, None).await.unwrap();

    // Default connections keep FK enforcement on; an orphan insert must fail.
    let pool = connect(&url).await;
    let orphan = sqlx::query(
        "INSERT INTO Payment (id, lease_id, payment_date, amount) \
         VALUES (999999, 999999, '2023-01-01', 100.0)",
    )
    .execute(&pool)
    .await;
    assert!(orphan.is_err(), "orphan insert should violate the FK");
}

#[tokio::test]
async fn progress_callback_reaches_the_total() {
    use std::sync::atomic::{AtomicUsize, Ordering};

    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("portfolio.db").display());

    let dataset = sample_dataset(3);
    let last_seen = AtomicUsize::new(0);
    let cb = |current: usize, total: usize| {
        assert!(current <= total);
        last_seen.store(current, Ordering::Relaxed);
    };
    seed_database(&dataset, &url, Some(&cb)).await.unwrap();
    assert_eq!(last_seen.load(Ordering::Relaxed), dataset.total_rows());
}

#[tokio::test]
async fn registered_queries_run_against_a_seeded_database() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("portfolio.db").display());

    let dataset = sample_dataset(42);
    let report = check::validate(&dataset, anchor_date());
    assert!(report.is_clean(), "{}", report.summary());
    seed_database(&dataset, &url, None).await.unwrap();

    let pool = connect(&url).await;
    for named in &query::QUERIES {
        let table = query::run_on(&pool, named)
            .await
            .unwrap_or_else(|e| panic!("query {} failed: {}", named.name, e));
        assert!(!table.rows.is_empty(), "query {} returned nothing", named.name);
        assert_eq!(table.rows[0].len(), table.columns.len());
    }

    let lease_term = query::run_named(&url, "average-lease-term").await.unwrap();
    assert_eq!(lease_term.rows.len(), 1);
    // Lease spans are drawn from 180 to 720 days
    let avg_days: f64 = lease_term.rows[0][0].parse().unwrap();
    assert!((180.0..=720.0).contains(&avg_days), "avg {}", avg_days);
}
