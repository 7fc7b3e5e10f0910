//! `podium toppers` command - all-round topper leaderboard
//!
//! Students ranked by total score across every program. Ties are broken by
//! name, so the board reads the same on every run.

use crate::cli::Cli;
use crate::commands::ordinal;
use podium_core::aggregate::student_totals;
use podium_core::enrich::EnrichedPlacement;
use podium_core::error::Result;
use podium_core::format::OutputFormat;
use podium_core::rank::{rank_students, top};
use podium_core::records;

/// Execute the toppers command
pub fn execute(cli: &Cli, placements: &[EnrichedPlacement], limit: usize) -> Result<()> {
    let board = top(rank_students(student_totals(placements)), limit);

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&board)?);
        }
        OutputFormat::Human => {
            if board.is_empty() {
                if !cli.quiet {
                    println!("No topper data available yet.");
                }
                return Ok(());
            }
            println!("All-Round Toppers (top {})", board.len());
            for r in &board {
                let class = r
                    .entry
                    .class
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "\u{2014}".to_string());
                println!(
                    "{:>4}  {} (#{})  Team {}  Class {}  {}  {} pts ({} podium {})",
                    ordinal(r.rank),
                    r.entry.name,
                    r.entry.student_id,
                    r.entry.team,
                    class,
                    r.entry.category,
                    r.entry.total,
                    r.entry.achievements,
                    if r.entry.achievements == 1 {
                        "finish"
                    } else {
                        "finishes"
                    }
                );
            }
        }
        OutputFormat::Records => {
            println!("{}", records::format_header("toppers", board.len()));
            for r in &board {
                println!("{}", records::format_topper_record(r));
            }
        }
    }

    Ok(())
}
