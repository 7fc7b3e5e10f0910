//! `podium teams` command - team leaderboard
//!
//! Every placement contributes its score to the performing student's team;
//! placements for students missing from the roster pool under the dash
//! sentinel group.

use crate::cli::Cli;
use podium_core::aggregate::team_totals;
use podium_core::enrich::EnrichedPlacement;
use podium_core::error::Result;
use podium_core::format::OutputFormat;
use podium_core::rank::rank_teams;
use podium_core::records;

/// Execute the teams command
pub fn execute(cli: &Cli, placements: &[EnrichedPlacement]) -> Result<()> {
    let board = rank_teams(team_totals(placements));

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&board)?);
        }
        OutputFormat::Human => {
            if board.is_empty() {
                if !cli.quiet {
                    println!("No team scores recorded yet.");
                }
                return Ok(());
            }
            println!("Team Standings");
            for r in &board {
                println!("{:>3}. {}  {} pts", r.rank, r.entry.team, r.entry.total);
            }
        }
        OutputFormat::Records => {
            println!("{}", records::format_header("teams", board.len()));
            for r in &board {
                println!("{}", records::format_team_record(r));
            }
        }
    }

    Ok(())
}
