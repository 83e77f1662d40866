//! # Output Writers
//!
//! Two ways to materialize a [`Dataset`](crate::generate::Dataset): direct
//! insertion into a live SQLite database ([`direct`]) and a plain-text SQL
//! dump ([`sql`]). Both build the same batched multi-row INSERT statements
//! from the schema catalog and the dataset's encoded rows.

pub mod direct;
pub mod sql;

use crate::generate::value::Value;
use crate::schema::TableDef;

/// Rows per multi-row INSERT statement.
const INSERT_BATCH_SIZE: usize = 100;

/// Build one batched INSERT statement for a chunk of rows.
///
/// Produces: `INSERT INTO "Fund" ("id", "name", ...) VALUES (...), (...)`
fn build_batched_insert(table: &TableDef, rows: &[Vec<Value>]) -> String {
    let col_list = table
        .columns
        .iter()
        .map(|c| format!("\"{}\"", c))
        .collect::<Vec<_>>()
        .join(", ");
    let mut sql = format!("INSERT INTO \"{}\" ({}) VALUES ", table.name, col_list);

    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            sql.push_str(", ");
        }
        sql.push('(');
        for (j, value) in row.iter().enumerate() {
            if j > 0 {
                sql.push_str(", ");
            }
            sql.push_str(&value.to_sql_literal());
        }
        sql.push(')');
    }

    sql
}

/// Truncate a SQL string for error messages.
fn truncate_sql(sql: &str, max_len: usize) -> String {
    if sql.len() <= max_len {
        sql.to_string()
    } else {
        format!("{}...", &sql[..max_len])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;
    use chrono::NaiveDate;
    use std::borrow::Cow;

    #[test]
    fn batched_insert_renders_all_rows() {
        let table = schema::table("Payment").unwrap();
        let d = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let rows = vec![
            vec![
                Value::Int(1),
                Value::Int(10),
                Value::Date(d),
                Value::Float(1500.0),
            ],
            vec![
                Value::Int(2),
                Value::Int(10),
                Value::Date(d),
                Value::Float(1200.5),
            ],
        ];
        let sql = build_batched_insert(table, &rows);
        assert!(sql.starts_with(
            "INSERT INTO \"Payment\" (\"id\", \"lease_id\", \"payment_date\", \"amount\") VALUES "
        ));
        assert!(sql.contains("(1, 10, '2023-01-01', 1500)"));
        assert!(sql.contains("(2, 10, '2023-01-01', 1200.5)"));
    }

    #[test]
    fn batched_insert_escapes_strings() {
        let table = schema::table("Tenant").unwrap();
        let rows = vec![vec![
            Value::Int(1),
            Value::String(Cow::Borrowed("O'Brien")),
            Value::String(Cow::Borrowed("555-0100")),
            Value::String(Cow::Borrowed("o.brien@example.com")),
        ]];
        let sql = build_batched_insert(table, &rows);
        assert!(sql.contains("'O''Brien'"));
    }

    #[test]
    fn truncate_sql_preserves_short_statements() {
        assert_eq!(truncate_sql("SELECT 1", 200), "SELECT 1");
        let long = "A".repeat(300);
        let t = truncate_sql(&long, 200);
        assert_eq!(t.len(), 203);
        assert!(t.ends_with("..."));
    }
}
