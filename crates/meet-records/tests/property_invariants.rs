use proptest::prelude::*;

use meet_records::{
    Csv, Entry, Equipment, Event, Language, LiftStatus, LiftingRecord, MeetState,
    PotentialLiftingRecord, RecordLift, RecordSlot, RecordType, RecordsState, RegistrationState,
    Sex, calculate_record_key, get_updated_record_state, is_record_attempt, load_records_from_csv,
    make_records_csv, would_break_confirmed_record,
};

const DIVISIONS: [&str; 3] = ["Open", "Juniors", "Masters 1"];

fn meet() -> MeetState {
    MeetState {
        name: "State Champs".to_string(),
        date: "2024-08-10".to_string(),
        divisions: DIVISIONS.iter().map(|d| d.to_string()).collect(),
        weight_classes_kg_men: vec![66.0, 74.0, 83.0, 93.0, 105.0, 120.0],
        weight_classes_kg_women: vec![52.0, 57.0, 63.0, 72.0, 84.0],
        weight_classes_kg_mx: vec![],
    }
}

fn status_strategy() -> impl Strategy<Value = LiftStatus> {
    prop_oneof![
        3 => Just(LiftStatus::Success),
        2 => Just(LiftStatus::Failure),
        1 => Just(LiftStatus::NotAttempted),
    ]
}

fn event_strategy() -> impl Strategy<Value = Event> {
    prop_oneof![
        4 => Just(Event::SBD),
        1 => Just(Event::B),
        1 => Just(Event::D),
        1 => Just(Event::BD),
    ]
}

fn sex_strategy() -> impl Strategy<Value = Sex> {
    prop_oneof![Just(Sex::M), Just(Sex::F), Just(Sex::Mx)]
}

fn equipment_strategy() -> impl Strategy<Value = Equipment> {
    prop_oneof![Just(Equipment::Sleeves), Just(Equipment::Wraps), Just(Equipment::SinglePly)]
}

/// Attempt weights in 2.5kg steps, so totals stay exact.
fn attempts_strategy() -> impl Strategy<Value = Vec<(f64, LiftStatus)>> {
    prop::collection::vec(
        (0u16..=120, status_strategy()).prop_map(|(steps, status)| (f64::from(steps) * 2.5, status)),
        3,
    )
}

#[derive(Debug, Clone)]
struct EntrySeed {
    sex: Sex,
    equipment: Equipment,
    division: Option<usize>,
    event: Event,
    bodyweight: u16,
    can_break_records: bool,
    lifts: [Vec<(f64, LiftStatus)>; 3],
}

fn entry_seed_strategy() -> impl Strategy<Value = EntrySeed> {
    (
        sex_strategy(),
        equipment_strategy(),
        prop::option::weighted(0.9, 0usize..DIVISIONS.len()),
        event_strategy(),
        45u16..140,
        prop::bool::weighted(0.9),
        [attempts_strategy(), attempts_strategy(), attempts_strategy()],
    )
        .prop_map(
            |(sex, equipment, division, event, bodyweight, can_break_records, lifts)| EntrySeed {
                sex,
                equipment,
                division,
                event,
                bodyweight,
                can_break_records,
                lifts,
            },
        )
}

fn build_entry(id: u32, seed: &EntrySeed) -> Entry {
    let mut entry = Entry {
        name: format!("Lifter {id}"),
        sex: seed.sex,
        equipment: seed.equipment,
        divisions: seed
            .division
            .map(|i| vec![DIVISIONS[i].to_string()])
            .unwrap_or_default(),
        events: vec![seed.event],
        bodyweight_kg: f64::from(seed.bodyweight),
        can_break_records: seed.can_break_records,
        ..Entry::new(id)
    };

    let slots = [
        (&mut entry.squat_kg, &mut entry.squat_status),
        (&mut entry.bench_kg, &mut entry.bench_status),
        (&mut entry.deadlift_kg, &mut entry.deadlift_status),
    ];
    for ((weights, statuses), attempts) in slots.into_iter().zip(&seed.lifts) {
        for (i, (kg, status)) in attempts.iter().enumerate() {
            weights[i] = *kg;
            statuses[i] = if *kg > 0.0 { *status } else { LiftStatus::NotAttempted };
        }
    }
    entry
}

fn registration(seeds: &[EntrySeed]) -> RegistrationState {
    RegistrationState {
        entries: seeds
            .iter()
            .enumerate()
            .map(|(i, seed)| build_entry(i as u32 + 1, seed))
            .collect(),
    }
}

fn registration_strategy() -> impl Strategy<Value = Vec<EntrySeed>> {
    prop::collection::vec(entry_seed_strategy(), 0..24)
}

fn record_strategy() -> impl Strategy<Value = LiftingRecord> {
    (
        sex_strategy(),
        equipment_strategy(),
        0usize..DIVISIONS.len(),
        prop_oneof![Just("74"), Just("83"), Just("120+"), Just("63")],
        prop_oneof![
            Just(RecordLift::S),
            Just(RecordLift::B),
            Just(RecordLift::D),
            Just(RecordLift::Total)
        ],
        prop::bool::ANY,
        0u16..=400,
    )
        .prop_map(|(sex, equipment, division, class, record_lift, single, steps)| {
            let record_type = if single && record_lift != RecordLift::Total {
                RecordType::SingleLift
            } else {
                RecordType::FullPower
            };
            LiftingRecord {
                full_name: format!("Holder {steps}"),
                weight: f64::from(steps) * 2.5,
                date: "2023-05-01".to_string(),
                location: "Wellington".to_string(),
                division: DIVISIONS[division].to_string(),
                sex,
                weight_class: class.to_string(),
                equipment,
                record_lift,
                record_type,
            }
        })
}

fn seed_state_strategy() -> impl Strategy<Value = RecordsState> {
    prop::collection::vec(record_strategy(), 0..16).prop_map(RecordsState::from_records)
}

/// Any finite weight, including pound conversions like 226.796.
fn unrounded_state_strategy() -> impl Strategy<Value = RecordsState> {
    prop::collection::vec(
        (record_strategy(), 0.0f64..1000.0).prop_map(|(record, weight)| LiftingRecord {
            weight,
            ..record
        }),
        0..16,
    )
    .prop_map(RecordsState::from_records)
}

proptest! {
    #[test]
    fn projector_is_idempotent(seed in seed_state_strategy(), seeds in registration_strategy()) {
        let meet = meet();
        let reg = registration(&seeds);
        let once = get_updated_record_state(&seed, &meet, &reg);
        let twice = get_updated_record_state(&once, &meet, &reg);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn projector_never_lowers_a_record(seed in seed_state_strategy(), seeds in registration_strategy()) {
        let meet = meet();
        let updated = get_updated_record_state(&seed, &meet, &registration(&seeds));

        for (key, record) in seed.iter() {
            let current = updated.get(key);
            prop_assert!(current.is_some());
            prop_assert!(current.map_or(0.0, |r| r.weight) >= record.weight);
        }
    }

    #[test]
    fn more_entries_never_lower_a_record(seeds in registration_strategy(), split in 0usize..24) {
        let meet = meet();
        let split = split.min(seeds.len());
        let partial = get_updated_record_state(&RecordsState::new(), &meet, &registration(&seeds[..split]));
        let full = get_updated_record_state(&RecordsState::new(), &meet, &registration(&seeds));

        for (key, record) in partial.iter() {
            prop_assert!(full.get(key).map_or(0.0, |r| r.weight) >= record.weight);
        }
    }

    #[test]
    fn projector_only_sets_eligible_records(seeds in registration_strategy()) {
        let meet = meet();
        let reg = registration(&seeds);
        let state = get_updated_record_state(&RecordsState::new(), &meet, &reg);

        for record in state.records() {
            prop_assert!(record.weight > 0.0);
            prop_assert!(record.record_type.allows(record.record_lift));
            let holder = reg.entries.iter().find(|e| e.name == record.full_name);
            prop_assert!(holder.is_some_and(|e| e.can_break_records));
            if record.record_type == RecordType::FullPower {
                prop_assert!(holder.is_some_and(|e| e.final_total_kg() > 0.0));
            }
        }
    }

    #[test]
    fn breaking_requires_strictly_more(state in seed_state_strategy(), record in record_strategy(), steps in 0u16..=400) {
        let potential = PotentialLiftingRecord {
            division: record.division.clone(),
            sex: record.sex,
            weight_class: record.weight_class.clone(),
            equipment: record.equipment,
            record_lift: record.record_lift,
            record_type: record.record_type,
            weight: f64::from(steps) * 2.5,
        };
        let expected = state.get_for(&potential).is_none_or(|r| potential.weight > r.weight);
        prop_assert_eq!(would_break_confirmed_record(&state, &potential), expected);
    }

    #[test]
    fn record_key_depends_only_on_slot(record in record_strategy(), name in "[A-Za-z ]{0,20}", steps in 0u16..=400) {
        let other = LiftingRecord {
            full_name: name,
            weight: f64::from(steps),
            date: String::new(),
            location: "Elsewhere".to_string(),
            ..record.clone()
        };
        prop_assert_eq!(record.record_key(), other.record_key());
        prop_assert_eq!(record.record_key(), calculate_record_key(&record.key_components()));
    }

    #[test]
    fn bombed_squat_blocks_later_record_attempts(seed in entry_seed_strategy(), attempt in 1usize..=3) {
        let mut seed = seed;
        seed.event = Event::SBD;
        seed.division = Some(0);
        seed.lifts[0] = vec![(200.0, LiftStatus::Failure); 3];
        let entry = build_entry(1, &seed);

        let state = RecordsState::new();
        for lift in [RecordLift::B, RecordLift::D, RecordLift::Total] {
            prop_assert!(!is_record_attempt(&state, &meet(), &entry, lift, attempt));
        }
    }

    #[test]
    fn csv_round_trip(state in unrounded_state_strategy(), spanish in prop::bool::ANY) {
        let language = if spanish { Language::Es } else { Language::En };
        let csv: Csv = make_records_csv(&state, language).parse().unwrap();
        let records = load_records_from_csv(&csv, &meet(), language).unwrap();
        let back = RecordsState::from_records(records);

        prop_assert_eq!(back.len(), state.len());
        for (key, record) in state.iter() {
            let loaded = back.get(key);
            prop_assert_eq!(loaded.map(|r| r.weight), Some(record.weight));
            prop_assert_eq!(loaded.map(|r| r.full_name.as_str()), Some(record.full_name.as_str()));
        }
    }
}
