//! Recomputes the confirmed records from registration state.
//!
//! Records are derived on demand rather than tracked as lifts happen: every
//! call starts from the seed state and folds each entry's completed lifts
//! into it. Records only ever go up, so feeding the output back in as the
//! seed yields the same state.

use tracing::{debug, info};

use super::{
    PotentialLiftingRecord, RecordLift, RecordType, RecordsState,
    get_record_type_for_entry, get_weight_for_unconfirmed_record, would_break_confirmed_record,
};
use crate::meet::{Entry, Lift, MeetState, RegistrationState};

/// Fold every entry's completed lifts into `initial_record_state`.
///
/// Entries are applied in registration order and each sees the records set by
/// the ones before it. Equalling a record never takes it, so when two entries
/// tie on a new record the earlier entry holds it.
pub fn get_updated_record_state(
    initial_record_state: &RecordsState,
    meet: &MeetState,
    registration_state: &RegistrationState,
) -> RecordsState {
    let state = registration_state
        .entries
        .iter()
        .fold(initial_record_state.clone(), |state, entry| {
            apply_entry(state, meet, entry)
        });

    info!(
        "Recomputed records: {} confirmed ({} seeded) from {} entries",
        state.len(),
        initial_record_state.len(),
        registration_state.entries.len()
    );

    state
}

/// Performances an entry has a claim to, whether or not they beat anything.
pub fn candidate_records(meet: &MeetState, entry: &Entry) -> Vec<PotentialLiftingRecord> {
    if !entry.can_break_records {
        return Vec::new();
    }

    let record_type = get_record_type_for_entry(entry);

    // A full power lifter only sets records once they have a total.
    if record_type == RecordType::FullPower && entry.final_total_kg() <= 0.0 {
        return Vec::new();
    }

    let Some(division) = entry.primary_division() else {
        return Vec::new();
    };
    let Some(event) = entry.primary_event() else {
        return Vec::new();
    };

    let weight_class = meet.weight_class_for_entry(entry);

    let mut lifts: Vec<RecordLift> = [Lift::S, Lift::B, Lift::D]
        .into_iter()
        .filter(|lift| event.contains(*lift))
        .map(RecordLift::from)
        .collect();
    if record_type == RecordType::FullPower {
        lifts.push(RecordLift::Total);
    }

    lifts
        .into_iter()
        .filter_map(|record_lift| {
            let weight = get_weight_for_unconfirmed_record(record_lift, entry);
            (weight > 0.0).then(|| PotentialLiftingRecord {
                division: division.to_string(),
                sex: entry.sex,
                weight_class: weight_class.clone(),
                equipment: entry.equipment,
                record_lift,
                record_type,
                weight,
            })
        })
        .collect()
}

fn apply_entry(state: RecordsState, meet: &MeetState, entry: &Entry) -> RecordsState {
    candidate_records(meet, entry)
        .into_iter()
        .fold(state, |mut state, potential| {
            if would_break_confirmed_record(&state, &potential) {
                debug!(
                    "Entry {} ({}) sets {} {} record: {}",
                    entry.id, entry.name, potential.record_type, potential.record_lift, potential.weight
                );
                state.upsert(potential.into_record(&entry.name, &meet.date, &meet.name));
            }
            state
        })
}
