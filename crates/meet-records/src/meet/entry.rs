use serde::{Deserialize, Serialize};

use super::{Equipment, Event, Lift, LiftStatus, Sex};

/// Number of attempt slots per lift, including fourth-attempt slots.
pub const MAX_ATTEMPTS: usize = 5;

/// Only the first three attempts count toward the total.
const COUNTED_ATTEMPTS: usize = 3;

/// A lifter's registration together with weigh-in and lifting data.
///
/// Field names follow the OpenLifter save format so that `registration.entries`
/// from a saved meet deserializes directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Entry {
    pub id: u32,
    pub name: String,
    pub sex: Sex,
    pub equipment: Equipment,
    /// Only the first division is used for record categorization
    pub divisions: Vec<String>,
    pub events: Vec<Event>,
    pub bodyweight_kg: f64,
    pub squat_kg: Vec<f64>,
    pub bench_kg: Vec<f64>,
    pub deadlift_kg: Vec<f64>,
    pub squat_status: Vec<LiftStatus>,
    pub bench_status: Vec<LiftStatus>,
    pub deadlift_status: Vec<LiftStatus>,
    pub can_break_records: bool,
}

impl Default for Entry {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            sex: Sex::default(),
            equipment: Equipment::default(),
            divisions: Vec::new(),
            events: Vec::new(),
            bodyweight_kg: 0.0,
            squat_kg: vec![0.0; MAX_ATTEMPTS],
            bench_kg: vec![0.0; MAX_ATTEMPTS],
            deadlift_kg: vec![0.0; MAX_ATTEMPTS],
            squat_status: vec![LiftStatus::NotAttempted; MAX_ATTEMPTS],
            bench_status: vec![LiftStatus::NotAttempted; MAX_ATTEMPTS],
            deadlift_status: vec![LiftStatus::NotAttempted; MAX_ATTEMPTS],
            can_break_records: true,
        }
    }
}

impl Entry {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    /// Attempt weights for a lift, indexed from zero.
    pub fn attempts_kg(&self, lift: Lift) -> &[f64] {
        match lift {
            Lift::S => &self.squat_kg,
            Lift::B => &self.bench_kg,
            Lift::D => &self.deadlift_kg,
        }
    }

    /// Attempt outcomes for a lift, indexed from zero.
    pub fn statuses(&self, lift: Lift) -> &[LiftStatus] {
        match lift {
            Lift::S => &self.squat_status,
            Lift::B => &self.bench_status,
            Lift::D => &self.deadlift_status,
        }
    }

    /// The weight entered for an attempt, or 0 if the slot doesn't exist.
    pub fn attempt_weight(&self, lift: Lift, attempt_one_indexed: usize) -> f64 {
        attempt_one_indexed
            .checked_sub(1)
            .and_then(|i| self.attempts_kg(lift).get(i))
            .copied()
            .unwrap_or(0.0)
    }

    /// Heaviest good lift among the first three attempts, or 0.
    pub fn best3_kg(&self, lift: Lift) -> f64 {
        self.attempts_kg(lift)
            .iter()
            .zip(self.statuses(lift))
            .take(COUNTED_ATTEMPTS)
            .filter(|(_, status)| **status == LiftStatus::Success)
            .fold(0.0, |best, (kg, _)| f64::max(best, *kg))
    }

    pub fn best3_squat_kg(&self) -> f64 {
        self.best3_kg(Lift::S)
    }

    pub fn best3_bench_kg(&self) -> f64 {
        self.best3_kg(Lift::B)
    }

    pub fn best3_deadlift_kg(&self) -> f64 {
        self.best3_kg(Lift::D)
    }

    /// Sum of the best three-attempt lifts.
    ///
    /// Returns 0 if the lifter failed the opener of any lift and never made a
    /// good lift in it afterwards.
    pub fn final_total_kg(&self) -> f64 {
        let mut total = 0.0;
        for lift in [Lift::S, Lift::B, Lift::D] {
            let best = self.best3_kg(lift);
            if best == 0.0 && self.statuses(lift).first() == Some(&LiftStatus::Failure) {
                return 0.0;
            }
            total += best;
        }
        total
    }

    /// The first registered event, which decides the record type.
    pub fn primary_event(&self) -> Option<Event> {
        self.events.first().copied()
    }

    /// The first registered division, which decides the record category.
    pub fn primary_division(&self) -> Option<&str> {
        self.divisions.first().map(String::as_str)
    }
}
