//! Records import and export.
//!
//! - **CSV**: the importable records file, columns and values localized
//! - **HTML**: a standalone printable records page
//!
//! Imports are all-or-nothing. [`load_records_from_csv`] returns every record
//! or the first problem found, and never touches a [`RecordsState`].
//!
//! [`RecordsState`]: crate::records::RecordsState

mod csv;
mod format;
mod html;
mod records_csv;

pub use self::csv::{Csv, CsvError, csv_string};
pub use format::{CsvExport, HtmlExport, RecordsExport, save_records_html};
pub use html::generate_records_page_html;
pub use records_csv::{
    ColumnNames, FieldProblem, ImportError, LEGACY_RECORD_DIVISIONS, RecordsCsvMetadata,
    get_record_csv_metadata, load_records_from_csv, make_example_records_csv, make_records_csv,
    read_records_csv, save_records_csv, validate_csv_columns,
};
