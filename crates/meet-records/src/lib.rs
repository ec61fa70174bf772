//! # meet-records
//!
//! Core library for powerlifting meet records.
//!
//! This crate provides:
//! - Meet, registration and lifter data (Entry, MeetState, etc.)
//! - Record keys and display categories
//! - Record attempt detection for pending attempts
//! - Recomputing confirmed records from the meet's results
//! - Records CSV import/export and a printable HTML records page
//!
//! ## Languages
//!
//! Everything user-facing (CSV column names, enum names, import errors, the
//! records page) is localized. Record keys never are, so a records file
//! exported in one language imports into a meet run in another.

pub mod error;
pub mod export;
pub mod i18n;
pub mod meet;
pub mod records;

pub use error::{Error, Result};
pub use export::{
    Csv, CsvError, CsvExport, HtmlExport, ImportError, RecordsExport, generate_records_page_html,
    load_records_from_csv, make_example_records_csv, make_records_csv, read_records_csv,
    save_records_csv, save_records_html,
};
pub use i18n::Language;
pub use meet::{
    Entry, Equipment, Event, Lift, LiftStatus, MeetFile, MeetState, RegistrationState, Sex,
};
pub use records::{
    LiftingRecord, PotentialLiftingRecord, RecordCategory, RecordCategoryGrouping, RecordLift,
    RecordSlot, RecordType, RecordsState, calculate_record_key, get_updated_record_state,
    group_and_sort_records_into_categories, is_record_attempt, would_break_confirmed_record,
};
