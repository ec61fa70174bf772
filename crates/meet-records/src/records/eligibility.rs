//! Deciding whether a performance would set a record.

use super::{PotentialLiftingRecord, RecordLift, RecordSlot, RecordType, RecordsState};
use crate::meet::{Entry, Lift, MeetState};

/// True if there is no confirmed record for the slot, or the potential record
/// is strictly heavier. Equalling a record doesn't break it.
pub fn would_break_confirmed_record(
    state: &RecordsState,
    potential_record: &PotentialLiftingRecord,
) -> bool {
    match state.get_for(potential_record) {
        Some(confirmed) => potential_record.weight > confirmed.weight,
        None => true,
    }
}

/// Record type an entry competes for, decided by its first event only.
pub fn get_record_type_for_entry(entry: &Entry) -> RecordType {
    RecordType::for_event(entry.primary_event())
}

/// The entry's completed weight for a record lift: the best good lift, or the
/// final total for `Total`.
pub fn get_weight_for_unconfirmed_record(record_lift: RecordLift, entry: &Entry) -> f64 {
    match record_lift.lift() {
        Some(lift) => entry.best3_kg(lift),
        None => entry.final_total_kg(),
    }
}

/// Whether an attempt not yet judged would set a record if it were good.
///
/// `updated_record_state` must already include this meet's performances, see
/// [`get_updated_record_state`](super::get_updated_record_state). Record
/// eligibility of the lifter is deliberately not checked, so unofficial record
/// attempts can still be announced.
///
/// `Total` is only evaluated during deadlifts: the best squat and bench plus
/// the deadlift attempt.
pub fn is_record_attempt(
    updated_record_state: &RecordsState,
    meet: &MeetState,
    entry: &Entry,
    record_lift: RecordLift,
    attempt_one_indexed: usize,
) -> bool {
    let Some(division) = entry.primary_division() else {
        return false;
    };

    let record_type = get_record_type_for_entry(entry);

    let weight = match record_lift.lift() {
        Some(lift) => entry.attempt_weight(lift, attempt_one_indexed),
        None => {
            entry.best3_squat_kg()
                + entry.best3_bench_kg()
                + entry.attempt_weight(Lift::D, attempt_one_indexed)
        }
    };

    let potential_record = PotentialLiftingRecord {
        division: division.to_string(),
        sex: entry.sex,
        weight_class: meet.weight_class_for_entry(entry),
        equipment: entry.equipment,
        record_lift,
        record_type,
        weight,
    };

    if !would_break_confirmed_record(updated_record_state, &potential_record) {
        return false;
    }

    // Assumes the usual S, B, D order. A lifter who has bombed out of an
    // earlier lift can't total, so can't set later full power records.
    if record_type == RecordType::FullPower {
        if record_lift != RecordLift::S && entry.best3_squat_kg() == 0.0 {
            return false;
        }
        if matches!(record_lift, RecordLift::D | RecordLift::Total) && entry.best3_bench_kg() == 0.0
        {
            return false;
        }
    }

    true
}
