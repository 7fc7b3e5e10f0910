//! Leaderboard ordering
//!
//! Orders aggregated totals by descending score with documented,
//! deterministic tie-breaks, then assigns 1-based contiguous rank numbers.
//! Equal scores still get distinct consecutive ranks; the tie-break decides
//! who comes first, not whether ranks collide.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::aggregate::StudentTotal;

/// Number of entries on the all-round toppers board.
pub const DEFAULT_TOPPERS: usize = 5;

/// An entry paired with its 1-based position in the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranked<T> {
    pub rank: u32,
    #[serde(flatten)]
    pub entry: T,
}

/// One team's total on a leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamTotal {
    pub team: String,
    pub total: u32,
}

/// Rank students by descending total. Ties break ascending by name, then
/// by student id so duplicate names cannot reorder between runs.
pub fn rank_students(mut totals: Vec<StudentTotal>) -> Vec<Ranked<StudentTotal>> {
    totals.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.student_id.cmp(&b.student_id))
    });
    assign_ranks(totals)
}

/// Rank teams by descending total; ties break ascending by team name.
pub fn rank_teams(totals: BTreeMap<String, u32>) -> Vec<Ranked<TeamTotal>> {
    let mut rows: Vec<TeamTotal> = totals
        .into_iter()
        .map(|(team, total)| TeamTotal { team, total })
        .collect();
    // Input is name-ordered; a stable sort on total alone preserves the
    // name order within ties.
    rows.sort_by(|a, b| b.total.cmp(&a.total));
    assign_ranks(rows)
}

/// Rank teams within each category, same ordering rule as [`rank_teams`].
pub fn rank_category_teams(
    totals: BTreeMap<String, BTreeMap<String, u32>>,
) -> BTreeMap<String, Vec<Ranked<TeamTotal>>> {
    totals
        .into_iter()
        .map(|(category, teams)| (category, rank_teams(teams)))
        .collect()
}

/// Keep the first `limit` entries of an already-ranked board. Short boards
/// are returned whole; nothing is padded.
pub fn top<T>(mut ranked: Vec<Ranked<T>>, limit: usize) -> Vec<Ranked<T>> {
    ranked.truncate(limit);
    ranked
}

fn assign_ranks<T>(rows: Vec<T>) -> Vec<Ranked<T>> {
    rows.into_iter()
        .enumerate()
        .map(|(i, entry)| Ranked {
            rank: (i + 1) as u32,
            entry,
        })
        .collect()
}
