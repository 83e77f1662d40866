//! # Analytical Queries
//!
//! A small registry of named read-only queries over a seeded database, plus
//! an executor that returns stringified result tables ready for terminal
//! rendering. Results are decoded dynamically from SQLite's runtime types, so
//! the registry can grow without touching the executor.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Column, Row, TypeInfo, ValueRef};

use crate::error::{EstateSeedError, Result};

/// One registered query.
#[derive(Debug, Clone, Copy)]
pub struct NamedQuery {
    pub name: &'static str,
    pub description: &'static str,
    pub sql: &'static str,
}

/// Every query the `query` subcommand can run.
pub const QUERIES: [NamedQuery; 6] = [
    NamedQuery {
        name: "average-lease-term",
        description: "Average lease length in days across the portfolio",
        sql: "SELECT ROUND(AVG(julianday(end_date) - julianday(start_date)), 1) AS avg_lease_days, \
              COUNT(*) AS leases \
              FROM Lease",
    },
    NamedQuery {
        name: "portfolio-value-by-fund",
        description: "Property count and total property value per fund",
        sql: "SELECT f.name, COUNT(p.id) AS properties, ROUND(SUM(p.value), 2) AS total_value \
              FROM Fund f JOIN Property p ON p.fund_id = f.id \
              GROUP BY f.id ORDER BY total_value DESC",
    },
    NamedQuery {
        name: "avg-rent-by-city",
        description: "Average monthly rent per city, busiest markets first",
        sql: "SELECT pr.city, COUNT(l.id) AS leases, ROUND(AVG(l.rent), 2) AS avg_rent \
              FROM Lease l JOIN Property pr ON l.property_id = pr.id \
              GROUP BY pr.city ORDER BY avg_rent DESC",
    },
    NamedQuery {
        name: "maintenance-cost-by-category",
        description: "Actual spend on completed maintenance, by category",
        sql: "SELECT category, COUNT(*) AS completed, ROUND(SUM(actual_cost), 2) AS total_cost \
              FROM MaintenanceRequest WHERE status = 'Completed' \
              GROUP BY category ORDER BY total_cost DESC",
    },
    NamedQuery {
        name: "top-vendors-by-spend",
        description: "Vendors ranked by total invoiced expenses",
        sql: "SELECT v.name, v.category, COUNT(e.id) AS invoices, ROUND(SUM(e.amount), 2) AS total \
              FROM Expense e JOIN Vendor v ON e.vendor_id = v.id \
              GROUP BY v.id ORDER BY total DESC LIMIT 10",
    },
    NamedQuery {
        name: "renewal-uplift",
        description: "Average rent increase captured at lease renewal",
        sql: "SELECT COUNT(*) AS renewals, \
              ROUND(AVG(r.new_rent - l.rent), 2) AS avg_increase, \
              ROUND(AVG((r.new_rent - l.rent) / l.rent) * 100, 2) AS avg_increase_pct \
              FROM LeaseRenewal r JOIN Lease l ON r.lease_id = l.id",
    },
];

/// Decoded result set with every value rendered for display.
#[derive(Debug)]
pub struct QueryTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub fn find(name: &str) -> Option<&'static NamedQuery> {
    QUERIES.iter().find(|q| q.name == name)
}

/// Run a registered query against the database at `db_url`.
pub async fn run_named(db_url: &str, name: &str) -> Result<QueryTable> {
    let query = find(name).ok_or_else(|| {
        let known: Vec<&str> = QUERIES.iter().map(|q| q.name).collect();
        EstateSeedError::Other(format!(
            "Unknown query '{}'. Available: {}",
            name,
            known.join(", ")
        ))
    })?;

    let options =
        SqliteConnectOptions::from_str(db_url).map_err(|e| EstateSeedError::Connection {
            message: "Invalid database URL".to_string(),
            connection_hint: db_url.to_string(),
            source: e,
        })?;
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .map_err(|e| EstateSeedError::Connection {
            message: "Failed to connect for query".to_string(),
            connection_hint: db_url.to_string(),
            source: e,
        })?;

    run_on(&pool, query).await
}

/// Run a registered query on an existing pool.
pub async fn run_on(pool: &sqlx::SqlitePool, query: &NamedQuery) -> Result<QueryTable> {
    let rows = sqlx::query(query.sql)
        .fetch_all(pool)
        .await
        .map_err(|e| EstateSeedError::Query {
            name: query.name.to_string(),
            source: e,
        })?;

    let columns = match rows.first() {
        Some(row) => row.columns().iter().map(|c| c.name().to_string()).collect(),
        None => Vec::new(),
    };
    let rows = rows
        .iter()
        .map(|row| (0..row.columns().len()).map(|i| render_cell(row, i)).collect())
        .collect();

    Ok(QueryTable { columns, rows })
}

/// Render one cell from SQLite's runtime type.
fn render_cell(row: &SqliteRow, index: usize) -> String {
    let raw = match row.try_get_raw(index) {
        Ok(raw) => raw,
        Err(_) => return String::new(),
    };
    if raw.is_null() {
        return "NULL".to_string();
    }
    let rendered = match raw.type_info().name() {
        "INTEGER" => row.try_get::<i64, _>(index).map(|v| v.to_string()),
        "REAL" => row.try_get::<f64, _>(index).map(|v| format!("{:.2}", v)),
        _ => row.try_get::<String, _>(index),
    };
    rendered.unwrap_or_else(|_| "?".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn query_names_are_unique_kebab_case() {
        let mut seen = HashSet::new();
        for q in &QUERIES {
            assert!(seen.insert(q.name), "duplicate query name {}", q.name);
            assert!(
                q.name
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c == '-'),
                "{}",
                q.name
            );
            assert!(!q.description.is_empty());
        }
    }

    #[test]
    fn lookup_finds_registered_queries() {
        assert!(find("average-lease-term").is_some());
        assert!(find("no-such-query").is_none());
    }

    #[test]
    fn every_query_targets_catalog_tables() {
        for q in &QUERIES {
            let references_known = crate::schema::TABLES
                .iter()
                .any(|t| q.sql.contains(t.name));
            assert!(references_known, "query {} references no known table", q.name);
        }
    }
}
