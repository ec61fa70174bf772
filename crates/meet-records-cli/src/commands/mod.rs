//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod attempt;
pub mod example;
pub mod html;
pub mod import;
pub mod list;
pub mod recompute;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use meet_records::{MeetFile, RecordsState, get_updated_record_state, read_records_csv};
use tracing::info;

use crate::config::CliConfig;

/// A meet file with the seed records resolved.
pub struct LoadedMeet {
    pub file: MeetFile,
    pub seed: RecordsState,
}

impl LoadedMeet {
    /// Records after folding in this meet's results.
    pub fn updated_records(&self) -> RecordsState {
        get_updated_record_state(&self.seed, &self.file.meet, &self.file.registration)
    }
}

/// Load the configured meet. A configured records CSV replaces the records
/// stored in the meet file.
pub fn load_meet(config: &CliConfig) -> Result<LoadedMeet> {
    let file = MeetFile::load(&config.meet)
        .with_context(|| format!("Failed to load meet {}", config.meet.display()))?;

    let seed = match &config.records {
        Some(path) => {
            let records = read_records_csv(path, &file.meet, config.language)
                .with_context(|| format!("Failed to import records {}", path.display()))?;
            info!("Seeding from {} ({} records)", path.display(), records.len());
            RecordsState::from_records(records)
        }
        None => file.records.clone(),
    };

    Ok(LoadedMeet { file, seed })
}

/// `output` if given, else `file_name` in the configured output directory.
pub fn output_path(config: &CliConfig, output: Option<&Path>, file_name: &str) -> PathBuf {
    output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.output_dir.join(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use meet_records::{
        Entry, Equipment, Event, LiftStatus, LiftingRecord, MeetState, RecordLift, RecordType,
        RegistrationState, Sex, save_records_csv,
    };
    use tempfile::TempDir;

    pub(crate) fn sample_meet_file() -> MeetFile {
        let mut entry = Entry {
            name: "Jane Doe".to_string(),
            sex: Sex::F,
            equipment: Equipment::Sleeves,
            divisions: vec!["Open".to_string()],
            events: vec![Event::SBD],
            bodyweight_kg: 62.1,
            ..Entry::new(1)
        };
        entry.squat_kg[0] = 140.0;
        entry.squat_status[0] = LiftStatus::Success;
        entry.bench_kg[0] = 80.0;
        entry.bench_status[0] = LiftStatus::Success;
        entry.deadlift_kg[0] = 170.0;
        entry.deadlift_status[0] = LiftStatus::Success;

        MeetFile {
            meet: MeetState {
                name: "Club Champs".to_string(),
                date: "2024-09-14".to_string(),
                divisions: vec!["Open".to_string()],
                weight_classes_kg_women: vec![57.0, 63.0, 69.0],
                ..Default::default()
            },
            registration: RegistrationState {
                entries: vec![entry],
            },
            records: RecordsState::new(),
        }
    }

    #[test]
    fn test_load_meet_uses_records_csv() {
        let dir = TempDir::new().unwrap();
        let meet_path = dir.path().join("meet.json");
        let records_path = dir.path().join("records.csv");
        let file = sample_meet_file();
        file.save(&meet_path).unwrap();

        let seed = RecordsState::from_records(vec![LiftingRecord {
            full_name: "Old Holder".to_string(),
            weight: 150.0,
            date: String::new(),
            location: String::new(),
            division: "Open".to_string(),
            sex: Sex::F,
            weight_class: "63".to_string(),
            equipment: Equipment::Sleeves,
            record_lift: RecordLift::S,
            record_type: RecordType::FullPower,
        }]);
        save_records_csv(&records_path, &seed, Default::default()).unwrap();

        let config = CliConfig::builder()
            .meet(&meet_path)
            .records(&records_path)
            .build();
        let loaded = load_meet(&config).unwrap();
        assert_eq!(loaded.seed, seed);

        let updated = loaded.updated_records();
        assert_eq!(updated.len(), 4);
        let squat = updated.records().find(|r| r.record_lift == RecordLift::S).unwrap();
        assert_eq!(squat.full_name, "Old Holder");
    }

    #[test]
    fn test_load_meet_missing_file() {
        let dir = TempDir::new().unwrap();
        let config = CliConfig::builder().meet(dir.path().join("none.json")).build();
        assert!(load_meet(&config).is_err());
    }

    #[test]
    fn test_output_path() {
        let config = CliConfig::builder().output_dir("out").build();
        assert_eq!(output_path(&config, None, "records.csv"), PathBuf::from("out/records.csv"));
        assert_eq!(
            output_path(&config, Some(Path::new("x.csv")), "records.csv"),
            PathBuf::from("x.csv")
        );
    }
}
