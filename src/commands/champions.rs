//! `podium champions` command - category-wise top teams
//!
//! Teams ranked within each competition band. Grouping uses the category
//! recorded on each placement, which is authoritative over the band derived
//! from a student's class.

use std::collections::BTreeMap;

use crate::cli::Cli;
use podium_core::aggregate::category_team_totals;
use podium_core::enrich::EnrichedPlacement;
use podium_core::error::Result;
use podium_core::format::OutputFormat;
use podium_core::rank::{rank_category_teams, Ranked, TeamTotal};
use podium_core::records;

/// Execute the champions command
pub fn execute(
    cli: &Cli,
    placements: &[EnrichedPlacement],
    category: Option<&str>,
) -> Result<()> {
    let mut boards: BTreeMap<String, Vec<Ranked<TeamTotal>>> =
        rank_category_teams(category_team_totals(placements));

    if let Some(category) = category {
        boards.retain(|name, _| name.as_str() == category);
    }

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&boards)?);
        }
        OutputFormat::Human => {
            if boards.is_empty() {
                if !cli.quiet {
                    match category {
                        Some(category) => println!("No scores recorded for '{}'.", category),
                        None => println!("No category scores recorded yet."),
                    }
                }
                return Ok(());
            }
            for (i, (name, board)) in boards.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!("{}", name);
                for r in board {
                    println!("{:>3}. {}  {} pts", r.rank, r.entry.team, r.entry.total);
                }
            }
        }
        OutputFormat::Records => {
            let rows: usize = boards.values().map(Vec::len).sum();
            println!("{}", records::format_header("champions", rows));
            for (name, board) in &boards {
                for r in board {
                    println!("{}", records::format_champion_record(name, r));
                }
            }
        }
    }

    Ok(())
}
