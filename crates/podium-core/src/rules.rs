//! Scoring rules
//!
//! Central place to tweak scoring once and have every view update. Rules
//! default to the official table (5/3/1 for positions, 5/3/1 for grades
//! A/B/C) and can be loaded from a TOML file for events with a different
//! rulebook. Per-program position tables may override the shared one.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PodiumError, Result};
use crate::serde_helpers;

/// Points awarded for first place under the default rules
pub const FIRST_PLACE_POINTS: u32 = 5;

/// Points awarded for second place under the default rules
pub const SECOND_PLACE_POINTS: u32 = 3;

/// Points awarded for third place under the default rules
pub const THIRD_PLACE_POINTS: u32 = 1;

/// Scoring rule tables.
///
/// `score` is a pure, total function: positions past third place,
/// unrecognized grade letters, and absent values all contribute zero
/// rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRules {
    /// Points by position rank (1 = first place)
    #[serde(default = "default_position_points", with = "serde_helpers::position_table")]
    pub position_points: BTreeMap<u32, u32>,

    /// Points by grade letter
    #[serde(default = "default_grade_points")]
    pub grade_points: BTreeMap<String, u32>,

    /// Position tables for programs with custom scoring, keyed by program
    /// id; replaces `position_points` for that program only
    #[serde(default, with = "serde_helpers::program_tables")]
    pub program_points: BTreeMap<String, BTreeMap<u32, u32>>,
}

impl ScoreRules {
    /// Load rules from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PodiumError::RulesNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                PodiumError::Io(e)
            }
        })?;
        let rules: ScoreRules =
            toml::from_str(&content).map_err(|e| PodiumError::InvalidRules {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        Ok(rules)
    }

    /// Points for one placement: position contribution plus grade
    /// contribution.
    pub fn score(&self, program_id: &str, position: Option<u32>, grade: Option<&str>) -> u32 {
        let table = self
            .program_points
            .get(program_id)
            .unwrap_or(&self.position_points);

        let position_points = position
            .and_then(|p| table.get(&p))
            .copied()
            .unwrap_or(0);
        let grade_points = grade
            .and_then(|g| self.grade_points.get(g))
            .copied()
            .unwrap_or(0);

        position_points + grade_points
    }
}

impl Default for ScoreRules {
    fn default() -> Self {
        ScoreRules {
            position_points: default_position_points(),
            grade_points: default_grade_points(),
            program_points: BTreeMap::new(),
        }
    }
}

fn default_position_points() -> BTreeMap<u32, u32> {
    BTreeMap::from([
        (1, FIRST_PLACE_POINTS),
        (2, SECOND_PLACE_POINTS),
        (3, THIRD_PLACE_POINTS),
    ])
}

fn default_grade_points() -> BTreeMap<String, u32> {
    BTreeMap::from([
        ("A".to_string(), 5),
        ("B".to_string(), 3),
        ("C".to_string(), 1),
    ])
}
