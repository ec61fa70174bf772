//! Record slot keys and display categories.

use serde::{Deserialize, Serialize};

use super::{LiftingRecord, RecordKeyComponents};
use crate::meet::{Equipment, Sex};

/// Canonical key of a record slot: the six components joined by `|`, in the
/// order division, sex, class, equipment, lift, type.
pub fn calculate_record_key(components: &RecordKeyComponents<'_>) -> String {
    format!(
        "{}|{}|{}|{}|{}|{}",
        components.division,
        components.sex.as_str(),
        components.weight_class,
        components.equipment.as_str(),
        components.record_lift.as_str(),
        components.record_type.as_str(),
    )
}

/// The coarse grouping a record is displayed under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordCategory {
    pub sex: Sex,
    pub division: String,
    pub weight_class: String,
    pub equipment: Equipment,
}

pub fn make_category(record: &LiftingRecord) -> RecordCategory {
    RecordCategory {
        sex: record.sex,
        division: record.division.clone(),
        weight_class: record.weight_class.clone(),
        equipment: record.equipment,
    }
}

/// Grouping key for a category. Lift and record type are left out so every
/// record of a category lands in the same bucket.
pub fn make_key(category: &RecordCategory) -> String {
    format!(
        "{}|{}|{}|{}",
        category.sex.as_str(),
        category.division,
        category.weight_class,
        category.equipment.as_str(),
    )
}
