//! Utilities for records output format
//!
//! One `H` header line per command, then one line per row: `P` lines for
//! placements, `R` lines for leaderboard entries. Free-text fields are
//! quoted with embedded quotes escaped.

use crate::aggregate::StudentTotal;
use crate::enrich::EnrichedPlacement;
use crate::rank::{Ranked, TeamTotal};

/// Escape double quotes in a string for records format.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Format the header line for a records-format response.
pub fn format_header(mode: &str, rows: usize) -> String {
    format!("H podium=1 records=1 mode={} rows={}", mode, rows)
}

/// Format one enriched placement as a `P` line.
pub fn format_placement_record(p: &EnrichedPlacement) -> String {
    let position = p
        .position
        .map(|n| n.to_string())
        .unwrap_or_else(|| "-".to_string());
    let grade = p.grade.as_deref().unwrap_or("-");
    format!(
        "P {} {} pos={} grade={} cat={} team={} score={} \"{}\"",
        p.program_id,
        p.student_id,
        position,
        grade,
        p.category,
        p.team,
        p.score,
        escape_quotes(&p.student_name)
    )
}

/// Format one ranked team entry as an `R` line.
pub fn format_team_record(r: &Ranked<TeamTotal>) -> String {
    format!("R {} {} {}", r.rank, r.entry.team, r.entry.total)
}

/// Format one ranked topper entry as an `R` line.
pub fn format_topper_record(r: &Ranked<StudentTotal>) -> String {
    format!(
        "R {} {} {} ach={} team={} \"{}\"",
        r.rank,
        r.entry.student_id,
        r.entry.total,
        r.entry.achievements,
        r.entry.team,
        escape_quotes(&r.entry.name)
    )
}

/// Format one ranked team entry within a category as a `C` line.
pub fn format_champion_record(category: &str, r: &Ranked<TeamTotal>) -> String {
    format!(
        "C {} {} {} {}",
        category, r.rank, r.entry.team, r.entry.total
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_quotes("no quotes"), "no quotes");
        assert_eq!(escape_quotes(r#"has "quotes""#), r#"has \"quotes\""#);
        assert_eq!(escape_quotes(""), "");
    }

    #[test]
    fn test_format_header() {
        assert_eq!(
            format_header("toppers", 5),
            "H podium=1 records=1 mode=toppers rows=5"
        );
    }

    #[test]
    fn test_format_placement_record() {
        let p = EnrichedPlacement {
            program_id: "P001".into(),
            program_name: "Solo Recitation".into(),
            student_id: "523".into(),
            student_name: "Ayisha Nasrin".into(),
            team: "Hilal".into(),
            class: Some(5),
            position: Some(1),
            grade: Some("A".into()),
            category: "Thaniyyah".into(),
            score: 10,
        };
        assert_eq!(
            format_placement_record(&p),
            r#"P P001 523 pos=1 grade=A cat=Thaniyyah team=Hilal score=10 "Ayisha Nasrin""#
        );
    }

    #[test]
    fn test_format_placement_record_absent_fields() {
        let p = EnrichedPlacement {
            program_id: "P002".into(),
            program_name: "Malayalam Poem".into(),
            student_id: "999".into(),
            student_name: "Unknown Student".into(),
            team: "\u{2014}".into(),
            class: None,
            position: None,
            grade: None,
            category: "Ula".into(),
            score: 0,
        };
        let line = format_placement_record(&p);
        assert!(line.contains("pos=- grade=-"));
        assert!(line.contains("score=0"));
    }

    #[test]
    fn test_format_team_record() {
        let line = format_team_record(&Ranked {
            rank: 1,
            entry: TeamTotal {
                team: "Hilal".into(),
                total: 34,
            },
        });
        assert_eq!(line, "R 1 Hilal 34");
    }

    #[test]
    fn test_format_topper_record() {
        let line = format_topper_record(&Ranked {
            rank: 1,
            entry: StudentTotal {
                student_id: "544".into(),
                name: "Abdul Hadi".into(),
                team: "Hilal".into(),
                class: Some(4),
                category: "Thaniyyah".into(),
                total: 24,
                achievements: 3,
            },
        });
        assert_eq!(line, r#"R 1 544 24 ach=3 team=Hilal "Abdul Hadi""#);
    }

    #[test]
    fn test_format_champion_record() {
        let line = format_champion_record(
            "Thaniyyah",
            &Ranked {
                rank: 2,
                entry: TeamTotal {
                    team: "Badr".into(),
                    total: 24,
                },
            },
        );
        assert_eq!(line, "C Thaniyyah 2 Badr 24");
    }
}
