//! List command: print records by category.

use anyhow::Result;
use meet_records::i18n::{
    localize_equipment, localize_record_lift, localize_record_type, localize_sex_plural,
};
use meet_records::meet::display_weight;
use meet_records::{Language, RecordCategoryGrouping, group_and_sort_records_into_categories};
use owo_colors::OwoColorize;

use super::load_meet;
use crate::config::CliConfig;

pub fn run(config: &CliConfig) -> Result<()> {
    let loaded = load_meet(config)?;
    let state = loaded.updated_records();
    let groupings = group_and_sort_records_into_categories(state.records(), &loaded.file.meet);

    if groupings.is_empty() {
        println!("No records");
        return Ok(());
    }

    for grouping in &groupings {
        print!("{}", format_grouping(grouping, config.language, &loaded.file.meet.date));
    }
    Ok(())
}

/// A heading line, then one line per record. Records set at this meet are
/// highlighted.
fn format_grouping(
    grouping: &RecordCategoryGrouping,
    language: Language,
    meet_date: &str,
) -> String {
    let category = &grouping.category;
    let heading = format!(
        "{} {} - {} {}",
        localize_sex_plural(category.sex, language),
        localize_equipment(category.equipment, language),
        category.division,
        category.weight_class
    );

    let mut out = format!("{}\n", heading.bold());
    for record in &grouping.records {
        let line = format!(
            "  {:<22} {:<10} {:>8}  {}",
            localize_record_type(record.record_type, language),
            localize_record_lift(record.record_lift, language),
            display_weight(record.weight),
            record.full_name
        );
        if !meet_date.is_empty() && record.date == meet_date {
            out.push_str(&format!("{}\n", line.yellow()));
        } else {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}
