//! Plain-text SQL dump of a generated dataset.
//!
//! The dump is self-contained: drops, DDL, and batched inserts wrapped in one
//! transaction, in the same order the direct writer uses. Piping it into
//! `sqlite3` reproduces exactly what [`direct::seed_database`] would build.
//!
//! [`direct::seed_database`]: crate::output::direct::seed_database

use std::io::Write;

use crate::error::{EstateSeedError, Result};
use crate::generate::Dataset;
use crate::output::{build_batched_insert, INSERT_BATCH_SIZE};
use crate::schema;

/// Write the full dump to `out`.
pub fn write_sql_dump<W: Write>(dataset: &Dataset, out: &mut W) -> Result<()> {
    let io_err = |e| EstateSeedError::Output {
        message: "Failed to write SQL dump".to_string(),
        source: e,
    };

    writeln!(out, "-- estateseed dump: {} rows", dataset.total_rows()).map_err(io_err)?;
    writeln!(out, "PRAGMA foreign_keys = OFF;").map_err(io_err)?;
    writeln!(out, "BEGIN TRANSACTION;").map_err(io_err)?;

    for table in schema::drop_order() {
        writeln!(out, "DROP TABLE IF EXISTS \"{}\";", table.name).map_err(io_err)?;
    }
    for table in schema::creation_order() {
        writeln!(out, "{};", table.create_sql).map_err(io_err)?;
    }

    for (table, rows) in dataset.tables() {
        if rows.is_empty() {
            continue;
        }
        writeln!(out, "\n-- {} ({} rows)", table.name, rows.len()).map_err(io_err)?;
        for chunk in rows.chunks(INSERT_BATCH_SIZE) {
            writeln!(out, "{};", build_batched_insert(table, chunk)).map_err(io_err)?;
        }
    }

    writeln!(out, "COMMIT;").map_err(io_err)?;
    writeln!(out, "PRAGMA foreign_keys = ON;").map_err(io_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{generate, GenerationProfile};
    use chrono::NaiveDate;

    #[test]
    fn dump_is_transactional_and_covers_every_table() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let dataset = generate(&GenerationProfile::sample(5, today));
        let mut buf = Vec::new();
        write_sql_dump(&dataset, &mut buf).unwrap();
        let dump = String::from_utf8(buf).unwrap();

        assert!(dump.contains("BEGIN TRANSACTION;"));
        assert!(dump.contains("COMMIT;"));
        for table in crate::schema::TABLES.iter() {
            assert!(
                dump.contains(&format!("DROP TABLE IF EXISTS \"{}\";", table.name)),
                "missing drop for {}",
                table.name
            );
            assert!(
                dump.contains(&format!("INSERT INTO \"{}\"", table.name)),
                "missing inserts for {}",
                table.name
            );
        }
        // Drops precede DDL, DDL precedes inserts
        let first_drop = dump.find("DROP TABLE").unwrap();
        let first_create = dump.find("CREATE TABLE").unwrap();
        let first_insert = dump.find("INSERT INTO").unwrap();
        assert!(first_drop < first_create && first_create < first_insert);
    }
}
