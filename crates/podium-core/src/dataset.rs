//! The festival dataset
//!
//! One document owning the student roster, the program catalog, and the
//! recorded results. The default event ships embedded in the binary;
//! `--data` swaps in another event's JSON file of the same shape. Records
//! are read-only for the process lifetime.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PodiumError, Result};
use crate::model::{Program, ProgramResult, Student};

/// The embedded default event.
const FESTIVAL_FIXTURE: &str = include_str!("../data/festival.json");

/// All records for one festival.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub students: Vec<Student>,
    pub programs: Vec<Program>,
    pub results: Vec<ProgramResult>,
}

impl Dataset {
    /// The dataset compiled into the binary.
    pub fn builtin() -> Dataset {
        // The fixture is a build-time asset; a unit test guards its shape.
        serde_json::from_str(FESTIVAL_FIXTURE).expect("embedded festival dataset is valid JSON")
    }

    /// Load a dataset from a JSON file of the same shape as the embedded
    /// fixture.
    pub fn load(path: &Path) -> Result<Dataset> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PodiumError::DatasetNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                PodiumError::Io(e)
            }
        })?;
        let dataset: Dataset =
            serde_json::from_str(&content).map_err(|e| PodiumError::InvalidDataset {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        Ok(dataset)
    }

    /// Roster lookup by admission number.
    pub fn student_index(&self) -> HashMap<&str, &Student> {
        self.students.iter().map(|s| (s.id.as_str(), s)).collect()
    }

    /// Distinct team names in the roster, sorted.
    pub fn teams(&self) -> BTreeSet<&str> {
        self.students.iter().map(|s| s.team.as_str()).collect()
    }

    /// Distinct category names appearing on placements, sorted.
    pub fn categories(&self) -> BTreeSet<&str> {
        self.results
            .iter()
            .flat_map(|r| r.placements.iter())
            .map(|p| p.category.as_str())
            .collect()
    }
}

/// Descriptive counts for a dataset. Derived values only; no scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatasetStats {
    pub programs: usize,
    pub students: usize,
    pub teams: usize,
    pub results: usize,
    pub placements: usize,
}

impl DatasetStats {
    pub fn compute(dataset: &Dataset) -> DatasetStats {
        DatasetStats {
            programs: dataset.programs.len(),
            students: dataset.students.len(),
            teams: dataset.teams().len(),
            results: dataset.results.len(),
            placements: dataset.results.iter().map(|r| r.placements.len()).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_builtin_fixture_parses() {
        let dataset = Dataset::builtin();
        assert!(!dataset.students.is_empty());
        assert!(!dataset.programs.is_empty());
        assert!(!dataset.results.is_empty());
    }

    #[test]
    fn test_builtin_student_ids_unique() {
        let dataset = Dataset::builtin();
        let ids: BTreeSet<&str> = dataset.students.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), dataset.students.len());
    }

    #[test]
    fn test_builtin_stats() {
        let stats = DatasetStats::compute(&Dataset::builtin());
        assert_eq!(stats.programs, 4);
        assert_eq!(stats.students, 7);
        assert_eq!(stats.teams, 3);
        assert_eq!(stats.results, 4);
        assert_eq!(stats.placements, 12);
    }

    #[test]
    fn test_student_index() {
        let dataset = Dataset::builtin();
        let index = dataset.student_index();
        assert_eq!(index.get("544").map(|s| s.name.as_str()), Some("Abdul Hadi"));
        assert!(index.get("999").is_none());
    }

    #[test]
    fn test_categories_from_placements() {
        let dataset = Dataset::builtin();
        let categories = dataset.categories();
        assert!(categories.contains("Thaniyyah"));
        assert!(categories.contains("Thanawiyyah"));
    }

    #[test]
    fn test_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("event.json");
        let dataset = Dataset::builtin();
        fs::write(&path, serde_json::to_string_pretty(&dataset).unwrap()).unwrap();

        let loaded = Dataset::load(&path).unwrap();
        assert_eq!(loaded, dataset);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = Dataset::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, PodiumError::DatasetNotFound { .. }));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("event.json");
        fs::write(&path, "{\"students\": 7}").unwrap();

        let err = Dataset::load(&path).unwrap_err();
        assert!(matches!(err, PodiumError::InvalidDataset { .. }));
    }

    #[test]
    fn test_empty_dataset_is_valid() {
        let dataset: Dataset =
            serde_json::from_str(r#"{"students": [], "programs": [], "results": []}"#).unwrap();
        let stats = DatasetStats::compute(&dataset);
        assert_eq!(stats.placements, 0);
        assert!(dataset.teams().is_empty());
    }
}
