use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

pub const DEFAULT_DB_URL: &str = "sqlite://database/real_estate.db";

#[derive(Parser, Debug)]
#[command(
    name = "estateseed",
    about = "Generate a deterministic synthetic real-estate portfolio database",
    version,
    after_help = "Examples:\n  estateseed generate --seed 42\n  estateseed generate --scale 0.1 --output portfolio.sql\n  estateseed check --seed 42 --format json\n  estateseed graph --format mermaid\n  estateseed query average-lease-term\n  estateseed query --list"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the portfolio dataset and seed a database (or write a SQL dump)
    Generate(GenerateArgs),

    /// Generate a dataset in memory and report integrity violations
    Check(CheckArgs),

    /// Visualize the table dependency graph
    Graph(GraphArgs),

    /// Run a named analytical query against a seeded database
    Query(QueryArgs),
}

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// SQLite database URL to seed (file is created if missing)
    #[arg(long, default_value = DEFAULT_DB_URL)]
    pub db: String,

    /// Random seed for deterministic generation (default: current unix time)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Scale factor applied to the bulk row counts
    #[arg(long, default_value = "1.0")]
    pub scale: f64,

    /// Anchor date for expiry decisions, YYYY-MM-DD (default: today)
    #[arg(long)]
    pub as_of: Option<NaiveDate>,

    /// Write a SQL dump to this path instead of inserting into the database
    #[arg(short, long)]
    pub output: Option<String>,

    /// Skip the in-memory integrity validation pass
    #[arg(long)]
    pub skip_validate: bool,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Random seed for the dataset under test
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Scale factor applied to the bulk row counts
    #[arg(long, default_value = "0.1")]
    pub scale: f64,

    /// Anchor date for expiry decisions, YYYY-MM-DD (default: today)
    #[arg(long)]
    pub as_of: Option<NaiveDate>,

    /// Output format for the integrity report
    #[arg(long, default_value = "text")]
    pub format: CheckFormat,
}

#[derive(Parser, Debug)]
pub struct GraphArgs {
    /// Output format for the dependency graph
    #[arg(long, default_value = "mermaid")]
    pub format: GraphFormat,
}

#[derive(Parser, Debug)]
pub struct QueryArgs {
    /// Name of the registered query to run
    #[arg(required_unless_present = "list")]
    pub name: Option<String>,

    /// SQLite database URL to query
    #[arg(long, default_value = DEFAULT_DB_URL)]
    pub db: String,

    /// List the available queries and exit
    #[arg(long)]
    pub list: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum CheckFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum GraphFormat {
    Mermaid,
    Dot,
}
