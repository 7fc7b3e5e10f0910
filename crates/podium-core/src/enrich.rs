//! Result normalization
//!
//! Joins each placement with its student's display attributes and computes
//! its score, producing the flat sequence every downstream view consumes.
//! Output preserves input order: result order first, placement order within
//! a result. Filtering and ranking are separate concerns.

use serde::Serialize;

use crate::dataset::Dataset;
use crate::model::Category;
use crate::rules::ScoreRules;

/// Display name attached when a placement references a student missing
/// from the roster.
pub const UNKNOWN_STUDENT_NAME: &str = "Unknown Student";

/// Team attached for an unknown student; its own group in team totals.
pub const UNKNOWN_TEAM: &str = "\u{2014}";

/// A placement joined with its student's display attributes and scored.
///
/// `class` is `None` for unknown students; renderers show a dash. The
/// student's class-derived category is available via [`Self::student_category`]
/// and is display-only; `category` (from the placement itself) is what all
/// aggregation groups by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedPlacement {
    pub program_id: String,
    pub program_name: String,
    pub student_id: String,
    pub student_name: String,
    pub team: String,
    pub class: Option<u32>,
    pub position: Option<u32>,
    pub grade: Option<String>,
    pub category: String,
    pub score: u32,
}

impl EnrichedPlacement {
    /// The band derived from the student's class, for display alongside
    /// the placement's own authoritative `category`. `None` when the
    /// student is unknown.
    pub fn student_category(&self) -> Option<Category> {
        self.class.map(Category::from_class)
    }
}

/// Join every placement in the dataset with its student record and score it.
///
/// Unknown student ids get sentinel display fields instead of failing;
/// nothing is filtered or reordered.
pub fn enrich(dataset: &Dataset, rules: &ScoreRules) -> Vec<EnrichedPlacement> {
    let index = dataset.student_index();

    let mut enriched = Vec::with_capacity(
        dataset.results.iter().map(|r| r.placements.len()).sum(),
    );
    for result in &dataset.results {
        for placement in &result.placements {
            let student = index.get(placement.student_id.as_str());
            enriched.push(EnrichedPlacement {
                program_id: result.program_id.clone(),
                program_name: result.program_name.clone(),
                student_id: placement.student_id.clone(),
                student_name: student
                    .map(|s| s.name.clone())
                    .unwrap_or_else(|| UNKNOWN_STUDENT_NAME.to_string()),
                team: student
                    .map(|s| s.team.clone())
                    .unwrap_or_else(|| UNKNOWN_TEAM.to_string()),
                class: student.map(|s| s.class),
                position: placement.position,
                grade: placement.grade.clone(),
                category: placement.category.clone(),
                score: rules.score(
                    &result.program_id,
                    placement.position,
                    placement.grade.as_deref(),
                ),
            });
        }
    }

    tracing::debug!(placements = enriched.len(), "enrich");
    enriched
}
