//! Score aggregation
//!
//! Three independent reductions over the enriched placement sequence:
//! per-student totals, per-team totals, and per-category team totals.
//! Grouping uses ordered maps so iteration order is deterministic, and
//! summation is order-independent: permuting the input never changes a
//! total. Students with no recorded placement do not appear.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::enrich::EnrichedPlacement;

/// Positions that count as an achievement (podium finish).
const ACHIEVEMENT_MAX_POSITION: u32 = 3;

/// One student's accumulated score across all programs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentTotal {
    pub student_id: String,
    pub name: String,
    pub team: String,
    pub class: Option<u32>,
    /// Band derived from the student's class; display-only
    pub category: String,
    pub total: u32,
    /// Placements ranked third or better
    pub achievements: u32,
}

/// Total score per student, keyed and ordered by student id.
///
/// Display fields come from the first placement seen for the student; the
/// join in [`crate::enrich`] makes them identical across a student's rows.
pub fn student_totals(placements: &[EnrichedPlacement]) -> Vec<StudentTotal> {
    let mut totals: BTreeMap<&str, StudentTotal> = BTreeMap::new();

    for p in placements {
        let entry = totals
            .entry(p.student_id.as_str())
            .or_insert_with(|| StudentTotal {
                student_id: p.student_id.clone(),
                name: p.student_name.clone(),
                team: p.team.clone(),
                class: p.class,
                category: p
                    .student_category()
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "\u{2014}".to_string()),
                total: 0,
                achievements: 0,
            });
        entry.total += p.score;
        if is_achievement(p.position) {
            entry.achievements += 1;
        }
    }

    totals.into_values().collect()
}

/// Total score per team, keyed and ordered by team name. The unknown-team
/// sentinel aggregates as its own group when present.
pub fn team_totals(placements: &[EnrichedPlacement]) -> BTreeMap<String, u32> {
    let mut totals: BTreeMap<String, u32> = BTreeMap::new();
    for p in placements {
        *totals.entry(p.team.clone()).or_insert(0) += p.score;
    }
    totals
}

/// Total score per team within each category. Grouping uses the category
/// recorded on the placement, not the student's class-derived band.
pub fn category_team_totals(
    placements: &[EnrichedPlacement],
) -> BTreeMap<String, BTreeMap<String, u32>> {
    let mut totals: BTreeMap<String, BTreeMap<String, u32>> = BTreeMap::new();
    for p in placements {
        *totals
            .entry(p.category.clone())
            .or_default()
            .entry(p.team.clone())
            .or_insert(0) += p.score;
    }
    totals
}

fn is_achievement(position: Option<u32>) -> bool {
    position.is_some_and(|p| (1..=ACHIEVEMENT_MAX_POSITION).contains(&p))
}
