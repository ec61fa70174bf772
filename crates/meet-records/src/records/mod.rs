//! Powerlifting records.
//!
//! - **Key codec**: record slot keys and display categories
//! - **Eligibility**: whether a performance or pending attempt breaks a record
//! - **Projector**: recompute confirmed records from registration state
//! - **Grouping**: categories in display order
//!
//! Confirmed records are derived, not tracked. Every recompute starts from a
//! seed [`RecordsState`] and the current registration state.

mod eligibility;
mod grouping;
mod key;
mod projector;
mod types;

pub use eligibility::{
    get_record_type_for_entry, get_weight_for_unconfirmed_record, is_record_attempt,
    would_break_confirmed_record,
};
pub use grouping::{RecordCategoryGrouping, group_and_sort_records_into_categories};
pub use key::{RecordCategory, calculate_record_key, make_category, make_key};
pub use projector::{candidate_records, get_updated_record_state};
pub use types::*;
