//! Html command: write the printable records page.

use std::path::Path;

use anyhow::{Context, Result};
use meet_records::{HtmlExport, RecordsExport};

use super::{load_meet, output_path};
use crate::config::CliConfig;

pub fn run(config: &CliConfig, output: Option<&Path>) -> Result<()> {
    let loaded = load_meet(config)?;
    let state = loaded.updated_records();

    let format = HtmlExport {
        language: config.language,
    };
    let path = output_path(config, output, &format!("records.{}", format.extension()));
    format
        .save(&path, &state, &loaded.file.meet)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Wrote records page to {}", path.display());
    Ok(())
}
