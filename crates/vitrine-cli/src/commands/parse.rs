//! Parse command

use crate::app::{OutputFormat, ParseArgs};
use crate::output::format_outcome;
use anyhow::Result;
use vitrine_core::error::exit_codes;
use vitrine_core::{parse_query, ParseOutcome};

pub fn run(args: ParseArgs, format: OutputFormat) -> Result<i32> {
    let query = args.query.join(" ");
    let outcome = parse_query(&query);

    print!("{}", format_outcome(&outcome, format));

    // Off-topic gets a distinct exit code so scripts can branch on it
    let code = match outcome {
        ParseOutcome::OffTopic => exit_codes::OFF_TOPIC,
        _ => exit_codes::SUCCESS,
    };
    Ok(code)
}
