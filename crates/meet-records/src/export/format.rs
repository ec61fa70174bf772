//! Output formats for a records state.

use std::fs;
use std::path::Path;

use tracing::info;

use super::{generate_records_page_html, make_records_csv};
use crate::error::Result;
use crate::i18n::Language;
use crate::meet::MeetState;
use crate::records::RecordsState;

/// Common interface for the records file formats.
pub trait RecordsExport {
    /// File extension without the dot.
    fn extension(&self) -> &'static str;

    fn render(&self, state: &RecordsState, meet: &MeetState) -> String;

    /// Render and write to `path`.
    fn save(&self, path: &Path, state: &RecordsState, meet: &MeetState) -> Result<()> {
        fs::write(path, self.render(state, meet))?;
        info!("Saved {} records to {}", state.len(), path.display());
        Ok(())
    }
}

/// The importable CSV format.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExport {
    pub language: Language,
}

impl RecordsExport for CsvExport {
    fn extension(&self) -> &'static str {
        "csv"
    }

    fn render(&self, state: &RecordsState, _meet: &MeetState) -> String {
        make_records_csv(state, self.language)
    }
}

/// The printable records page.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlExport {
    pub language: Language,
}

impl RecordsExport for HtmlExport {
    fn extension(&self) -> &'static str {
        "html"
    }

    fn render(&self, state: &RecordsState, meet: &MeetState) -> String {
        generate_records_page_html(state, meet, self.language)
    }
}

pub fn save_records_html<P: AsRef<Path>>(
    path: P,
    state: &RecordsState,
    meet: &MeetState,
    language: Language,
) -> Result<()> {
    HtmlExport { language }.save(path.as_ref(), state, meet)
}
