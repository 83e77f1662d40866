//! # Error Types
//!
//! Defines `EstateSeedError`, the unified error enum for every failure mode
//! in the seeding pipeline. Every variant carries enough context (table name,
//! row index, SQL snippet) to debug immediately without digging through logs.

use thiserror::Error;

/// All errors that can occur in estateseed operations.
#[derive(Error, Debug)]
pub enum EstateSeedError {
    #[error("Database connection failed: {message}\n  Connection string: {connection_hint}\n  Cause: {source}")]
    Connection {
        message: String,
        connection_hint: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Schema reset failed on '{table}': {source}\n  SQL: {sql_preview}")]
    SchemaReset {
        table: String,
        sql_preview: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Insert failed on {table} row {row_index}: {message}\n  SQL: {sql_preview}\n  DB error: {source}")]
    InsertFailed {
        table: String,
        row_index: usize,
        message: String,
        sql_preview: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Query '{name}' failed: {source}")]
    Query {
        name: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Generated dataset failed integrity validation: {violations} violation(s)\n{summary}")]
    IntegrityViolations { violations: usize, summary: String },

    #[error("Output error: {message}: {source}")]
    Output {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, EstateSeedError>;
