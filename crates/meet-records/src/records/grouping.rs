//! Grouping records into display categories, in the order they are shown on
//! screen and in the printable records page.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use super::{LiftingRecord, RecordCategory, make_category, make_key};
use crate::meet::MeetState;

/// One category block: its records, full power before single lift, then S, B,
/// D, Total.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordCategoryGrouping {
    pub category: RecordCategory,
    pub records: Vec<LiftingRecord>,
}

/// Group records by category and sort.
///
/// Categories are ordered by sex, equipment, the meet's division order, then
/// weight class. Divisions the meet doesn't list sort before all others.
pub fn group_and_sort_records_into_categories<'a, I>(
    records: I,
    meet: &MeetState,
) -> Vec<RecordCategoryGrouping>
where
    I: IntoIterator<Item = &'a LiftingRecord>,
{
    let mut bucket_index: HashMap<String, usize> = HashMap::new();
    let mut groupings: Vec<RecordCategoryGrouping> = Vec::new();

    for record in records {
        let category = make_category(record);
        let key = make_key(&category);
        match bucket_index.get(&key) {
            Some(&i) => groupings[i].records.push(record.clone()),
            None => {
                bucket_index.insert(key, groupings.len());
                groupings.push(RecordCategoryGrouping {
                    category,
                    records: vec![record.clone()],
                });
            }
        }
    }

    for grouping in &mut groupings {
        grouping
            .records
            .sort_by(|a, b| (a.record_type, a.record_lift).cmp(&(b.record_type, b.record_lift)));
    }

    groupings.sort_by(|a, b| compare_categories(&a.category, &b.category, meet));
    groupings
}

fn compare_categories(a: &RecordCategory, b: &RecordCategory, meet: &MeetState) -> Ordering {
    a.sex
        .cmp(&b.sex)
        .then(a.equipment.cmp(&b.equipment))
        .then(meet.division_index(&a.division).cmp(&meet.division_index(&b.division)))
        .then(weight_class_order(&a.weight_class).total_cmp(&weight_class_order(&b.weight_class)))
}

/// Numeric sort value of a class label. `"120+"` sorts after every numbered
/// class, as does a label that isn't a number.
fn weight_class_order(weight_class: &str) -> f64 {
    if weight_class.ends_with('+') {
        return f64::INFINITY;
    }
    weight_class.trim().parse().unwrap_or(f64::INFINITY)
}
