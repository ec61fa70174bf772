//! Import command: validate a records CSV against the meet.

use std::path::Path;

use anyhow::{Context, Result, bail};
use meet_records::{Error, MeetFile, read_records_csv};
use owo_colors::OwoColorize;

use crate::config::CliConfig;

pub fn run(config: &CliConfig, file: &Path) -> Result<()> {
    let meet = MeetFile::load(&config.meet)
        .with_context(|| format!("Failed to load meet {}", config.meet.display()))?
        .meet;

    match read_records_csv(file, &meet, config.language) {
        Ok(records) => {
            println!("{} {} records", "OK".green().bold(), records.len());
            Ok(())
        }
        Err(Error::Import(e)) => {
            eprintln!("{} {}", "Rejected:".red().bold(), e.message());
            bail!("{} was not imported", file.display())
        }
        Err(e) => Err(e).with_context(|| format!("Failed to read {}", file.display())),
    }
}
