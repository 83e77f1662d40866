pub mod check;
pub mod error;
pub mod generate;
pub mod output;
pub mod query;
pub mod schema;

// Re-export key types for convenience
pub use error::{EstateSeedError, Result};
pub use generate::{generate, Dataset, GenerationProfile};
