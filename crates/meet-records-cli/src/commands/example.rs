//! Example command: write a template records CSV.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use meet_records::make_example_records_csv;

use crate::config::CliConfig;

pub fn run(config: &CliConfig, output: Option<&Path>) -> Result<()> {
    let csv = make_example_records_csv(config.language);
    match output {
        Some(path) => {
            fs::write(path, csv).with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Wrote example records to {}", path.display());
        }
        None => print!("{csv}"),
    }
    Ok(())
}
