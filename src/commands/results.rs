//! `podium results` command - list program results with scored placements
//!
//! Placements are shown in recorded order, grouped by program. `--category`
//! and `--search` narrow the listing; they never affect leaderboards.

use serde_json::json;

use crate::cli::Cli;
use crate::commands::ordinal;
use podium_core::enrich::EnrichedPlacement;
use podium_core::error::Result;
use podium_core::filter::PlacementFilter;
use podium_core::format::OutputFormat;
use podium_core::records;

/// Execute the results command
pub fn execute(
    cli: &Cli,
    placements: &[EnrichedPlacement],
    category: Option<&str>,
    search: Option<&str>,
) -> Result<()> {
    let filter = PlacementFilter::new()
        .with_category(category)
        .with_query(search);

    let rows: Vec<&EnrichedPlacement> =
        placements.iter().filter(|p| filter.matches(p)).collect();

    match cli.format {
        OutputFormat::Json => {
            let output: Vec<_> = group_by_program(&rows)
                .into_iter()
                .map(|(program_id, program_name, group)| {
                    json!({
                        "programId": program_id,
                        "programName": program_name,
                        "placements": group,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if rows.is_empty() {
                if !cli.quiet {
                    println!("No placements match.");
                }
                return Ok(());
            }
            for (i, (_, program_name, group)) in group_by_program(&rows).into_iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!("{}", program_name);
                for p in group {
                    println!(
                        "  {:>4}  {:1}  {} (#{})  Team {}  {}  {} pts",
                        p.position.map(ordinal).unwrap_or_else(|| "-".to_string()),
                        p.grade.as_deref().unwrap_or("-"),
                        p.student_name,
                        p.student_id,
                        p.team,
                        p.category,
                        p.score
                    );
                }
            }
        }
        OutputFormat::Records => {
            println!("{}", records::format_header("results", rows.len()));
            for p in &rows {
                println!("{}", records::format_placement_record(p));
            }
        }
    }

    Ok(())
}

/// Group a filtered row list by program, preserving recorded order.
/// Rows arrive result-major, so one pass over adjacent rows suffices.
fn group_by_program<'a>(
    rows: &[&'a EnrichedPlacement],
) -> Vec<(String, String, Vec<&'a EnrichedPlacement>)> {
    let mut groups: Vec<(String, String, Vec<&EnrichedPlacement>)> = Vec::new();
    for p in rows.iter().copied() {
        match groups.last_mut() {
            Some((program_id, _, group)) if *program_id == p.program_id => group.push(p),
            _ => groups.push((p.program_id.clone(), p.program_name.clone(), vec![p])),
        }
    }
    groups
}
