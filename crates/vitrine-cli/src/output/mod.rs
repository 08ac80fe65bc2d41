//! Output formatters

pub mod json;
pub mod terminal;

use crate::app::OutputFormat;
use vitrine_core::{CatalogItem, ParseOutcome};

/// Format a parse outcome
pub fn format_outcome(outcome: &ParseOutcome, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_outcome(outcome),
        OutputFormat::Cli => terminal::format_outcome(outcome),
    }
}

/// Format matching catalog items
pub fn format_items(items: &[CatalogItem], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_items(items),
        OutputFormat::Cli => terminal::format_items(items),
    }
}
