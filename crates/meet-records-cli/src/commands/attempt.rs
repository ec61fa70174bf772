//! Attempt command: would this pending attempt set a record?

use anyhow::{Context, Result};
use meet_records::{RecordLift, is_record_attempt};
use owo_colors::OwoColorize;

use super::load_meet;
use crate::config::CliConfig;

pub fn run(config: &CliConfig, entry_id: u32, lift: RecordLift, attempt: usize) -> Result<()> {
    let record = check(config, entry_id, lift, attempt)?;
    if record {
        println!("{}", "Record attempt".green().bold());
    } else {
        println!("Not a record attempt");
    }
    Ok(())
}

fn check(config: &CliConfig, entry_id: u32, lift: RecordLift, attempt: usize) -> Result<bool> {
    let loaded = load_meet(config)?;
    let entry = loaded
        .file
        .registration
        .get(entry_id)
        .with_context(|| format!("No entry with id {entry_id}"))?;

    let state = loaded.updated_records();
    Ok(is_record_attempt(&state, &loaded.file.meet, entry, lift, attempt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::sample_meet_file;
    use tempfile::TempDir;

    #[test]
    fn test_check_attempt() {
        let dir = TempDir::new().unwrap();
        let meet_path = dir.path().join("meet.json");
        let mut file = sample_meet_file();
        file.registration.entries[0].deadlift_kg[1] = 180.0;
        file.registration.entries[0].deadlift_kg[2] = 165.0;
        file.save(&meet_path).unwrap();
        let config = CliConfig::builder().meet(&meet_path).build();

        assert!(check(&config, 1, RecordLift::D, 2).unwrap());
        assert!(!check(&config, 1, RecordLift::D, 3).unwrap());
        assert!(check(&config, 1, RecordLift::Total, 2).unwrap());
        assert!(check(&config, 2, RecordLift::D, 2).is_err());
    }
}
