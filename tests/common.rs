use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;

pub fn podium() -> Command {
    cargo_bin_cmd!("podium")
}

/// Write a two-program, two-student dataset: S1 takes first place (grade A)
/// in both programs, S2 takes second (grade B) in the first one.
#[allow(dead_code)]
pub fn write_scenario_dataset(path: &Path) {
    let dataset = r#"{
  "students": [
    { "id": "S1", "name": "Amina Kareem", "team": "Crescent", "class": 3 },
    { "id": "S2", "name": "Zayd Rahman", "team": "Star", "class": 2 }
  ],
  "programs": [
    { "id": "P1", "name": "Elocution", "class": 3 },
    { "id": "P2", "name": "Qirath", "class": 3 }
  ],
  "results": [
    {
      "programId": "P1",
      "programName": "Elocution",
      "placements": [
        { "studentId": "S1", "position": 1, "grade": "A", "category": "Ula" },
        { "studentId": "S2", "position": 2, "grade": "B", "category": "Ula" }
      ]
    },
    {
      "programId": "P2",
      "programName": "Qirath",
      "placements": [
        { "studentId": "S1", "position": 1, "grade": "A", "category": "Ula" }
      ]
    }
  ]
}"#;
    fs::write(path, dataset).expect("write scenario dataset");
}
