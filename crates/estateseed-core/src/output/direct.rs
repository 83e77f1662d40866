//! # Direct Database Seeding
//!
//! Inserts a generated dataset into a live SQLite database. The whole run is
//! one transaction: drop every table in child-first order, recreate the
//! schema parent-first, then insert batched multi-row statements. If any
//! statement fails the transaction rolls back and the database keeps its
//! prior contents.
//!
//! FK enforcement stays on for the whole run: drops run child-first, DDL and
//! inserts run parent-first, so every statement satisfies the constraints as
//! it executes.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::debug;

use crate::error::{EstateSeedError, Result};
use crate::generate::Dataset;
use crate::output::{build_batched_insert, truncate_sql, INSERT_BATCH_SIZE};
use crate::schema;

/// Progress reporting interval in rows.
const PROGRESS_BATCH_SIZE: usize = 100;

/// Seed a SQLite database with the dataset, replacing any prior contents.
///
/// `db_url` is a `sqlite://` URL; the database file is created if missing.
/// The `progress_callback` receives `(rows_inserted_so_far, total_rows)`
/// every [`PROGRESS_BATCH_SIZE`] rows.
pub async fn seed_database(
    dataset: &Dataset,
    db_url: &str,
    progress_callback: Option<&(dyn Fn(usize, usize) + Send + Sync)>,
) -> Result<()> {
    let options = SqliteConnectOptions::from_str(db_url)
        .map_err(|e| EstateSeedError::Connection {
            message: "Invalid database URL".to_string(),
            connection_hint: db_url.to_string(),
            source: e,
        })?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .map_err(|e| EstateSeedError::Connection {
            message: "Failed to connect for seeding".to_string(),
            connection_hint: db_url.to_string(),
            source: e,
        })?;

    let total_rows = dataset.total_rows();

    let mut tx = pool
        .begin()
        .await
        .map_err(|e| EstateSeedError::InsertFailed {
            table: "(session)".to_string(),
            row_index: 0,
            message: "Failed to begin transaction".to_string(),
            sql_preview: "BEGIN".to_string(),
            source: e,
        })?;

    reset_schema(&mut tx).await?;

    let mut rows_inserted = 0usize;
    for (table, rows) in dataset.tables() {
        for chunk in rows.chunks(INSERT_BATCH_SIZE) {
            let sql = build_batched_insert(table, chunk);
            sqlx::query(&sql)
                .execute(&mut *tx)
                .await
                .map_err(|e| EstateSeedError::InsertFailed {
                    table: table.name.to_string(),
                    row_index: rows_inserted,
                    message: "Batched INSERT failed".to_string(),
                    sql_preview: truncate_sql(&sql, 200),
                    source: e,
                })?;

            rows_inserted += chunk.len();
            report_progress(progress_callback, rows_inserted, total_rows);
        }
    }

    tx.commit().await.map_err(|e| EstateSeedError::InsertFailed {
        table: "(session)".to_string(),
        row_index: rows_inserted,
        message: "Failed to commit transaction".to_string(),
        sql_preview: "COMMIT".to_string(),
        source: e,
    })?;

    debug!(rows = rows_inserted, url = db_url, "seeding committed");
    Ok(())
}

/// Drop every table child-first, then recreate the schema parent-first.
async fn reset_schema(tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>) -> Result<()> {
    for table in schema::drop_order() {
        let sql = format!("DROP TABLE IF EXISTS \"{}\"", table.name);
        sqlx::query(&sql)
            .execute(&mut **tx)
            .await
            .map_err(|e| EstateSeedError::SchemaReset {
                table: table.name.to_string(),
                sql_preview: sql.clone(),
                source: e,
            })?;
    }
    for table in schema::creation_order() {
        sqlx::query(table.create_sql)
            .execute(&mut **tx)
            .await
            .map_err(|e| EstateSeedError::SchemaReset {
                table: table.name.to_string(),
                sql_preview: truncate_sql(table.create_sql, 200),
                source: e,
            })?;
    }
    Ok(())
}

fn report_progress(
    callback: Option<&(dyn Fn(usize, usize) + Send + Sync)>,
    current: usize,
    total: usize,
) {
    if let Some(cb) = callback {
        if current % PROGRESS_BATCH_SIZE == 0 || current == total {
            cb(current, total);
        }
    }
}
