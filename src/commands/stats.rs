//! `podium stats` command - dataset counts

use crate::cli::Cli;
use podium_core::dataset::{Dataset, DatasetStats};
use podium_core::error::Result;
use podium_core::format::OutputFormat;
use podium_core::records;

/// Execute the stats command
pub fn execute(cli: &Cli, dataset: &Dataset) -> Result<()> {
    let stats = DatasetStats::compute(dataset);

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        OutputFormat::Human => {
            println!("Programs:   {}", stats.programs);
            println!("Students:   {}", stats.students);
            println!("Teams:      {}", stats.teams);
            println!("Results:    {}", stats.results);
            println!("Placements: {}", stats.placements);
        }
        OutputFormat::Records => {
            println!("{}", records::format_header("stats", 1));
            println!(
                "S programs={} students={} teams={} results={} placements={}",
                stats.programs, stats.students, stats.teams, stats.results, stats.placements
            );
        }
    }

    Ok(())
}
