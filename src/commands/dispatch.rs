//! Command dispatch logic for podium

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use podium_core::dataset::Dataset;
use podium_core::enrich::enrich;
use podium_core::error::{PodiumError, Result};
use podium_core::rules::ScoreRules;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let dataset = match &cli.data {
        Some(path) => Dataset::load(path)?,
        None => Dataset::builtin(),
    };
    let rules = match &cli.rules {
        Some(path) => ScoreRules::load(path)?,
        None => ScoreRules::default(),
    };

    if cli.verbose {
        eprintln!("load_data: {:?}", start.elapsed());
    }

    // Every view consumes the same enriched sequence; commands never touch
    // the raw records directly.
    let placements = enrich(&dataset, &rules);

    if cli.verbose {
        eprintln!("enrich: {:?}", start.elapsed());
    }

    match &cli.command {
        None => Err(PodiumError::UsageError(
            "missing command (see --help for available commands)".to_string(),
        )),

        Some(Commands::Results { category, search }) => {
            commands::results::execute(cli, &placements, category.as_deref(), search.as_deref())
        }

        Some(Commands::Toppers { limit }) => commands::toppers::execute(cli, &placements, *limit),

        Some(Commands::Teams) => commands::teams::execute(cli, &placements),

        Some(Commands::Champions { category }) => {
            commands::champions::execute(cli, &placements, category.as_deref())
        }

        Some(Commands::Stats) => commands::stats::execute(cli, &dataset),
    }
}
