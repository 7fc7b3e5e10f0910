//! CLI argument parsing for podium
//!
//! Global flags select the dataset, score rules, output format, and log
//! verbosity; each subcommand maps to one leaderboard view.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use podium_core::format::OutputFormat;
use podium_core::rank::DEFAULT_TOPPERS;

/// Podium - festival leaderboard CLI
#[derive(Parser, Debug)]
#[command(name = "podium")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Dataset JSON file (defaults to the built-in festival dataset)
    #[arg(long, global = true, env = "PODIUM_DATA")]
    pub data: Option<PathBuf>,

    /// Score rules TOML file (defaults to the official tables)
    #[arg(long, global = true, env = "PODIUM_RULES")]
    pub rules: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List program results with scored placements
    Results {
        /// Show only placements recorded under this category
        #[arg(long, short)]
        category: Option<String>,

        /// Search by admission number, student name, program, or category
        #[arg(long, short)]
        search: Option<String>,
    },

    /// All-round toppers: students ranked by total score
    Toppers {
        /// Number of entries on the board
        #[arg(long, short, default_value_t = DEFAULT_TOPPERS)]
        limit: usize,
    },

    /// Team leaderboard
    Teams,

    /// Category-wise top teams
    Champions {
        /// Show a single category
        #[arg(long, short)]
        category: Option<String>,
    },

    /// Dataset counts
    Stats,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
