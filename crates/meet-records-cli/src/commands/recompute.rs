//! Recompute command: write the updated records as CSV.

use std::path::Path;

use anyhow::{Context, Result};
use meet_records::{CsvExport, RecordsExport};

use super::{load_meet, output_path};
use crate::config::CliConfig;

pub fn run(config: &CliConfig, output: Option<&Path>) -> Result<()> {
    let loaded = load_meet(config)?;
    let state = loaded.updated_records();

    let format = CsvExport {
        language: config.language,
    };
    let path = output_path(config, output, &format!("records.{}", format.extension()));
    format
        .save(&path, &state, &loaded.file.meet)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    let new_records = state.len().saturating_sub(loaded.seed.len());
    println!(
        "Wrote {} records ({} new) to {}",
        state.len(),
        new_records,
        path.display()
    );
    Ok(())
}
