//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(
    author,
    version,
    about = "Parse free-form French shopping queries into catalog filters"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a query and show detections, confidence and refinement chips
    Parse(ParseArgs),

    /// Parse a query and list the matching catalog items
    Search(SearchArgs),
}

#[derive(Args)]
pub struct ParseArgs {
    /// Shopping query, e.g. "chemise lin blanche M <60€"
    pub query: Vec<String>,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Shopping query
    pub query: Vec<String>,

    /// Catalog JSON file (defaults to the built-in demo catalog)
    #[arg(short, long, env = "VITRINE_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Maximum number of items to show
    #[arg(short = 'n', long, default_value = "20")]
    pub limit: usize,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output
    Cli,
    /// Pretty-printed JSON
    Json,
}
