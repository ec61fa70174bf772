use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use super::calculate_record_key;
use crate::meet::{Equipment, Event, Lift, Sex};

/// What a record is set in. Declaration order is the display order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Display,
)]
pub enum RecordLift {
    S,
    B,
    D,
    Total,
}

impl RecordLift {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// The contested lift, or `None` for `Total`.
    pub fn lift(&self) -> Option<Lift> {
        match self {
            Self::S => Some(Lift::S),
            Self::B => Some(Lift::B),
            Self::D => Some(Lift::D),
            Self::Total => None,
        }
    }
}

impl From<Lift> for RecordLift {
    fn from(lift: Lift) -> Self {
        match lift {
            Lift::S => Self::S,
            Lift::B => Self::B,
            Lift::D => Self::D,
        }
    }
}

/// Whether a record was set contesting the full total or a single lift.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Display,
)]
pub enum RecordType {
    FullPower,
    SingleLift,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Record type for an entry's first event. No event counts as single-lift.
    pub fn for_event(event: Option<Event>) -> Self {
        match event {
            Some(Event::SBD) => Self::FullPower,
            _ => Self::SingleLift,
        }
    }

    /// `Total` records only exist for full power.
    pub fn allows(&self, record_lift: RecordLift) -> bool {
        record_lift != RecordLift::Total || *self == Self::FullPower
    }
}

/// The six fields that identify one record slot, borrowed from a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordKeyComponents<'a> {
    pub division: &'a str,
    pub sex: Sex,
    pub weight_class: &'a str,
    pub equipment: Equipment,
    pub record_lift: RecordLift,
    pub record_type: RecordType,
}

/// Anything that occupies a record slot.
pub trait RecordSlot {
    fn key_components(&self) -> RecordKeyComponents<'_>;

    fn record_key(&self) -> String {
        calculate_record_key(&self.key_components())
    }
}

/// A confirmed record. Always replaced wholesale, never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiftingRecord {
    pub full_name: String,
    pub weight: f64,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub location: String,
    pub division: String,
    pub sex: Sex,
    pub weight_class: String,
    pub equipment: Equipment,
    pub record_lift: RecordLift,
    pub record_type: RecordType,
}

impl RecordSlot for LiftingRecord {
    fn key_components(&self) -> RecordKeyComponents<'_> {
        RecordKeyComponents {
            division: &self.division,
            sex: self.sex,
            weight_class: &self.weight_class,
            equipment: self.equipment,
            record_lift: self.record_lift,
            record_type: self.record_type,
        }
    }
}

/// A performance being weighed against the confirmed records.
#[derive(Debug, Clone, PartialEq)]
pub struct PotentialLiftingRecord {
    pub division: String,
    pub sex: Sex,
    pub weight_class: String,
    pub equipment: Equipment,
    pub record_lift: RecordLift,
    pub record_type: RecordType,
    pub weight: f64,
}

impl RecordSlot for PotentialLiftingRecord {
    fn key_components(&self) -> RecordKeyComponents<'_> {
        RecordKeyComponents {
            division: &self.division,
            sex: self.sex,
            weight_class: &self.weight_class,
            equipment: self.equipment,
            record_lift: self.record_lift,
            record_type: self.record_type,
        }
    }
}

impl PotentialLiftingRecord {
    /// Attach the holder and occasion, making this a confirmable record.
    pub fn into_record(self, full_name: &str, date: &str, location: &str) -> LiftingRecord {
        LiftingRecord {
            full_name: full_name.to_string(),
            weight: self.weight,
            date: date.to_string(),
            location: location.to_string(),
            division: self.division,
            sex: self.sex,
            weight_class: self.weight_class,
            equipment: self.equipment,
            record_lift: self.record_lift,
            record_type: self.record_type,
        }
    }
}

/// Confirmed records keyed by [`calculate_record_key`]; at most one per key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordsState {
    #[serde(default)]
    confirmed_records: BTreeMap<String, LiftingRecord>,
}

impl RecordsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state from a bulk import. A later record for the same slot
    /// replaces an earlier one.
    pub fn from_records<I: IntoIterator<Item = LiftingRecord>>(records: I) -> Self {
        let mut state = Self::new();
        for record in records {
            state.upsert(record);
        }
        state
    }

    pub fn get(&self, key: &str) -> Option<&LiftingRecord> {
        self.confirmed_records.get(key)
    }

    /// The confirmed record occupying the same slot as `slot`.
    pub fn get_for<R: RecordSlot + ?Sized>(&self, slot: &R) -> Option<&LiftingRecord> {
        self.get(&slot.record_key())
    }

    /// Insert or replace the record for its slot, returning the one it superseded.
    pub fn upsert(&mut self, record: LiftingRecord) -> Option<LiftingRecord> {
        self.confirmed_records.insert(record.record_key(), record)
    }

    pub fn remove(&mut self, key: &str) -> Option<LiftingRecord> {
        self.confirmed_records.remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &LiftingRecord)> {
        self.confirmed_records.iter()
    }

    pub fn records(&self) -> impl Iterator<Item = &LiftingRecord> {
        self.confirmed_records.values()
    }

    pub fn len(&self) -> usize {
        self.confirmed_records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.confirmed_records.is_empty()
    }
}
