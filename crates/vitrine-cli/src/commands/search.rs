//! Search command: parse, then apply to a catalog

use crate::app::{OutputFormat, SearchArgs};
use crate::output::{format_items, format_outcome};
use anyhow::Result;
use vitrine_core::error::exit_codes;
use vitrine_core::{
    apply_parsed, catalog_from_json, load_catalog, parse_query, CatalogItem, ParseOutcome,
};

/// Demo catalog used when no --catalog file is given
const DEMO_CATALOG: &str = include_str!("../../data/catalog.json");

fn resolve_catalog(args: &SearchArgs) -> Result<Vec<CatalogItem>> {
    match &args.catalog {
        Some(path) => Ok(load_catalog(path)?),
        None => Ok(catalog_from_json(DEMO_CATALOG)?),
    }
}

pub fn run(args: SearchArgs, format: OutputFormat) -> Result<i32> {
    let query = args.query.join(" ");
    let catalog = resolve_catalog(&args)?;
    let outcome = parse_query(&query);

    match &outcome {
        ParseOutcome::Parsed(result) => {
            let mut items = apply_parsed(&catalog, result);
            items.truncate(args.limit);

            print!("{}", format_outcome(&outcome, format));
            print!("{}", format_items(&items, format));
            Ok(exit_codes::SUCCESS)
        }
        ParseOutcome::Ambiguous(_) => {
            // Not an error: the caller picks a preset and filters manually
            print!("{}", format_outcome(&outcome, format));
            Ok(exit_codes::SUCCESS)
        }
        ParseOutcome::OffTopic => {
            print!("{}", format_outcome(&outcome, format));
            Ok(exit_codes::OFF_TOPIC)
        }
    }
}
