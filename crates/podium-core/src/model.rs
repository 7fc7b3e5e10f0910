//! Record types for the festival dataset
//!
//! All records are defined once at load and immutable for the process
//! lifetime. Field names follow the dataset's JSON shape (camelCase).

use std::fmt;

use serde::{Deserialize, Serialize};

/// A registered student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Admission number; unique across the roster, used as the join key
    pub id: String,
    /// Display name
    pub name: String,
    /// Team the student competes for
    pub team: String,
    /// Grade level (1-9 in real data)
    pub class: u32,
}

/// A catalog entry for a competition program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    /// Unique program identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Nominal grade level of the program (catalog only; placements carry
    /// their own authoritative category)
    pub class: u32,
}

/// One student's recorded outcome in one program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    /// Admission number of the performer; may reference a student missing
    /// from the roster
    pub student_id: String,
    /// Rank within the program (1 = first place); absent for participants
    /// with only a grade
    #[serde(default)]
    pub position: Option<u32>,
    /// Letter quality rating (expected A/B/C; anything else is tolerated
    /// and scores zero)
    #[serde(default)]
    pub grade: Option<String>,
    /// Competition band this placement counts under
    pub category: String,
}

/// The recorded results of one program: an ordered set of placements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramResult {
    pub program_id: String,
    pub program_name: String,
    pub placements: Vec<Placement>,
}

/// A named competition band, derived from a student's class.
///
/// The five bands cover classes 1-9. Class 10 has no band, and any class
/// outside the mapped range resolves to [`Category::Unknown`] rather than
/// failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Bidaya,
    Ula,
    Thaniyyah,
    Thanawiyyah,
    Aliyah,
    Unknown,
}

impl Category {
    /// Resolve the band for a grade level. Total over all integers.
    pub fn from_class(class: u32) -> Category {
        match class {
            1 => Category::Bidaya,
            2 | 3 => Category::Ula,
            4 | 5 => Category::Thaniyyah,
            6 | 7 => Category::Thanawiyyah,
            8 | 9 => Category::Aliyah,
            _ => Category::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Bidaya => "Bidaya",
            Category::Ula => "Ula",
            Category::Thaniyyah => "Thaniyyah",
            Category::Thanawiyyah => "Thanawiyyah",
            Category::Aliyah => "Aliyah",
            Category::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_bands() {
        assert_eq!(Category::from_class(1), Category::Bidaya);
        assert_eq!(Category::from_class(2), Category::Ula);
        assert_eq!(Category::from_class(3), Category::Ula);
        assert_eq!(Category::from_class(4), Category::Thaniyyah);
        assert_eq!(Category::from_class(5), Category::Thaniyyah);
        assert_eq!(Category::from_class(6), Category::Thanawiyyah);
        assert_eq!(Category::from_class(7), Category::Thanawiyyah);
        assert_eq!(Category::from_class(8), Category::Aliyah);
        assert_eq!(Category::from_class(9), Category::Aliyah);
    }

    #[test]
    fn test_category_unmapped_classes() {
        // Class 10 is deliberately unmapped, and anything out of range
        // resolves to the sentinel instead of panicking.
        assert_eq!(Category::from_class(10), Category::Unknown);
        assert_eq!(Category::from_class(0), Category::Unknown);
        assert_eq!(Category::from_class(99), Category::Unknown);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Thaniyyah.to_string(), "Thaniyyah");
        assert_eq!(Category::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn test_placement_optional_fields_deserialize() {
        let p: Placement = serde_json::from_str(
            r#"{"studentId": "523", "category": "Thaniyyah"}"#,
        )
        .unwrap();
        assert_eq!(p.student_id, "523");
        assert!(p.position.is_none());
        assert!(p.grade.is_none());
    }
}
