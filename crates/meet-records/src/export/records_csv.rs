//! Reading and writing confirmed records as CSV, with localized column names
//! and values.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info, warn};

use super::csv::{Csv, csv_string};
use crate::error::Result;
use crate::i18n::{
    Language, StringId, delocalize_equipment, delocalize_record_lift, delocalize_record_type,
    delocalize_sex, display_number, get_string, localize_equipment, localize_record_lift,
    localize_record_type, localize_sex,
};
use crate::meet::{Equipment, MeetState, Sex};
use crate::records::{LiftingRecord, RecordLift, RecordType, RecordsState};

/// Divisions accepted on import even when the meet doesn't define them. Some
/// federations keep records for divisions nobody registers in.
pub const LEGACY_RECORD_DIVISIONS: &[&str] = &["Sub Masters"];

/// Localized names of each records CSV column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnNames {
    pub name: &'static str,
    pub weight: &'static str,
    pub date: &'static str,
    pub location: &'static str,
    pub division: &'static str,
    pub sex: &'static str,
    pub weight_class: &'static str,
    pub equipment: &'static str,
    pub record_lift: &'static str,
    pub record_type: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordsCsvMetadata {
    /// Every column, in export order.
    pub all_columns: Vec<&'static str>,
    pub mandatory_columns: Vec<&'static str>,
    pub optional_columns: Vec<&'static str>,
    pub column_names: ColumnNames,
}

pub fn get_record_csv_metadata(language: Language) -> RecordsCsvMetadata {
    let c = ColumnNames {
        name: get_string(StringId::CsvName, language),
        weight: get_string(StringId::CsvWeight, language),
        date: get_string(StringId::CsvDate, language),
        location: get_string(StringId::CsvLocation, language),
        division: get_string(StringId::CsvDivision, language),
        sex: get_string(StringId::CsvSex, language),
        weight_class: get_string(StringId::CsvClass, language),
        equipment: get_string(StringId::CsvEquipment, language),
        record_lift: get_string(StringId::CsvRecordLift, language),
        record_type: get_string(StringId::CsvRecordType, language),
    };

    RecordsCsvMetadata {
        all_columns: vec![
            c.name,
            c.weight,
            c.date,
            c.location,
            c.division,
            c.sex,
            c.weight_class,
            c.equipment,
            c.record_lift,
            c.record_type,
        ],
        mandatory_columns: vec![
            c.name,
            c.weight,
            c.division,
            c.sex,
            c.weight_class,
            c.equipment,
            c.record_lift,
            c.record_type,
        ],
        optional_columns: vec![c.date, c.location],
        column_names: c,
    }
}

/// What was wrong with a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldProblem {
    NotANumber,
    WeightNegative,
    NameMissing,
    DivisionMissing,
    DivisionInvalid,
    SexInvalid,
    EquipmentInvalid,
    RecordLiftInvalid,
    RecordTypeInvalid,
    /// A `Total` record whose type isn't full power.
    TotalSingleLift,
}

/// A rejected records file. `message` is ready to show the user in the
/// import language.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("{message}")]
    Columns { message: String },

    #[error("{message}")]
    Field {
        column: String,
        value: String,
        /// 1-indexed spreadsheet row, counting the header.
        row: usize,
        problem: FieldProblem,
        message: String,
    },
}

impl ImportError {
    pub fn message(&self) -> &str {
        match self {
            Self::Columns { message } | Self::Field { message, .. } => message,
        }
    }
}

/// Check the header row: no duplicated or unknown columns, and every
/// mandatory column present.
pub fn validate_csv_columns(
    csv: &Csv,
    language: Language,
    mandatory: &[&str],
    optional: &[&str],
) -> std::result::Result<(), ImportError> {
    let columns_error = |id: StringId, column: &str| ImportError::Columns {
        message: get_string(id, language)
            .replace("{column}", column)
            .replace(
                "{columns}",
                &mandatory
                    .iter()
                    .chain(optional)
                    .copied()
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
    };

    for (i, fieldname) in csv.fieldnames.iter().enumerate() {
        if csv.fieldnames[..i].contains(fieldname) {
            return Err(columns_error(StringId::ErrorDuplicateColumn, fieldname));
        }
        if !mandatory.contains(&fieldname.as_str()) && !optional.contains(&fieldname.as_str()) {
            return Err(columns_error(StringId::ErrorUnknownColumn, fieldname));
        }
    }

    if let Some(missing) = mandatory.iter().find(|c| csv.index(c).is_none()) {
        return Err(columns_error(StringId::ErrorMissingColumn, missing));
    }

    Ok(())
}

/// One CSV row per confirmed record.
pub fn make_records_csv(state: &RecordsState, language: Language) -> String {
    let metadata = get_record_csv_metadata(language);
    let mut csv = Csv::new();
    csv.append_columns(&metadata.all_columns);

    for record in state.records() {
        write_record_row(&mut csv, &metadata.column_names, record, language);
    }

    csv.to_string()
}

fn write_record_row(csv: &mut Csv, c: &ColumnNames, record: &LiftingRecord, language: Language) {
    let cells = [
        (c.name, csv_string(&record.full_name)),
        (c.weight, record.weight.to_string()),
        (c.date, csv_string(&record.date)),
        (c.location, csv_string(&record.location)),
        (c.division, csv_string(&record.division)),
        (c.sex, localize_sex(record.sex, language).to_string()),
        (c.weight_class, csv_string(&record.weight_class)),
        (c.equipment, localize_equipment(record.equipment, language).to_string()),
        (c.record_lift, localize_record_lift(record.record_lift, language).to_string()),
        (c.record_type, localize_record_type(record.record_type, language).to_string()),
    ];

    let indices: Vec<Option<usize>> = cells.iter().map(|(column, _)| csv.index(column)).collect();
    let row = csv.push_empty_row();
    for (index, (_, value)) in indices.into_iter().zip(cells) {
        if let Some(index) = index {
            row[index] = value;
        }
    }
}

/// A filled-in template showing users what an importable file looks like.
pub fn make_example_records_csv(language: Language) -> String {
    let metadata = get_record_csv_metadata(language);
    let date = get_string(StringId::ExampleDate, language);
    let location = get_string(StringId::ExampleLocation, language);
    let division = get_string(StringId::ExampleDivision, language);

    let examples = [
        LiftingRecord {
            full_name: get_string(StringId::ExampleName1, language).to_string(),
            weight: 350.0,
            date: date.to_string(),
            location: location.to_string(),
            division: division.to_string(),
            sex: Sex::M,
            weight_class: "120+".to_string(),
            equipment: Equipment::Sleeves,
            record_lift: RecordLift::D,
            record_type: RecordType::FullPower,
        },
        LiftingRecord {
            full_name: get_string(StringId::ExampleName2, language).to_string(),
            weight: 125.0,
            date: date.to_string(),
            location: location.to_string(),
            division: division.to_string(),
            sex: Sex::F,
            weight_class: "63".to_string(),
            equipment: Equipment::Sleeves,
            record_lift: RecordLift::B,
            record_type: RecordType::SingleLift,
        },
    ];

    let mut csv = Csv::new();
    csv.append_columns(&metadata.all_columns);
    for record in &examples {
        write_record_row(&mut csv, &metadata.column_names, record, language);
    }
    csv.to_string()
}

/// Parse every row into a record, or reject the whole file at the first bad
/// cell. Nothing is applied to any state here.
pub fn load_records_from_csv(
    csv: &Csv,
    meet: &MeetState,
    language: Language,
) -> std::result::Result<Vec<LiftingRecord>, ImportError> {
    let result = parse_records(csv, meet, language);
    match &result {
        Ok(records) => info!("Loaded {} records from CSV", records.len()),
        Err(e) => warn!("Rejected records CSV: {}", e),
    }
    result
}

fn parse_records(
    csv: &Csv,
    meet: &MeetState,
    language: Language,
) -> std::result::Result<Vec<LiftingRecord>, ImportError> {
    let metadata = get_record_csv_metadata(language);
    validate_csv_columns(
        csv,
        language,
        &metadata.mandatory_columns,
        &metadata.optional_columns,
    )?;

    let c = metadata.column_names;
    let mut records = Vec::with_capacity(csv.rows.len());

    for (i, row) in csv.rows.iter().enumerate() {
        let row_number = i + 2;
        let reject = |column: &str, value: &str, problem: FieldProblem| {
            field_error(column, value, row_number, problem, meet, language)
        };

        let mut record = LiftingRecord {
            full_name: String::new(),
            weight: 0.0,
            date: String::new(),
            location: String::new(),
            division: String::new(),
            sex: Sex::F,
            weight_class: String::new(),
            equipment: Equipment::Sleeves,
            record_lift: RecordLift::Total,
            record_type: RecordType::FullPower,
        };
        let mut record_type_cell = "";

        for (fieldname, cell) in csv.fieldnames.iter().zip(row) {
            let column = fieldname.as_str();
            let cell = cell.as_str();
            let value = cell.trim();

            if column == c.name {
                if value.is_empty() {
                    return Err(reject(column, cell, FieldProblem::NameMissing));
                }
                record.full_name = value.to_string();
            } else if column == c.weight {
                record.weight = parse_weight(value)
                    .map_err(|problem| reject(column, cell, problem))?;
            } else if column == c.date {
                record.date = value.to_string();
            } else if column == c.location {
                record.location = value.to_string();
            } else if column == c.division {
                if value.is_empty() {
                    return Err(reject(column, cell, FieldProblem::DivisionMissing));
                }
                if meet.division_index(value).is_none() && !LEGACY_RECORD_DIVISIONS.contains(&value)
                {
                    return Err(reject(column, cell, FieldProblem::DivisionInvalid));
                }
                record.division = value.to_string();
            } else if column == c.sex {
                record.sex = delocalize_sex(value, language)
                    .map_err(|_| reject(column, cell, FieldProblem::SexInvalid))?;
            } else if column == c.weight_class {
                record.weight_class = value.to_string();
            } else if column == c.equipment {
                record.equipment = delocalize_equipment(value, language)
                    .map_err(|_| reject(column, cell, FieldProblem::EquipmentInvalid))?;
            } else if column == c.record_lift {
                record.record_lift = delocalize_record_lift(value, language)
                    .map_err(|_| reject(column, cell, FieldProblem::RecordLiftInvalid))?;
            } else if column == c.record_type {
                record.record_type = delocalize_record_type(value, language)
                    .map_err(|_| reject(column, cell, FieldProblem::RecordTypeInvalid))?;
                record_type_cell = cell;
            }
        }

        if !record.record_type.allows(record.record_lift) {
            return Err(reject(c.record_type, record_type_cell, FieldProblem::TotalSingleLift));
        }

        debug!(
            "Row {}: {} {} {}",
            row_number, record.full_name, record.record_lift, record.weight
        );
        records.push(record);
    }

    Ok(records)
}

/// Blank is zero, for a record slot that exists but hasn't been set yet.
fn parse_weight(value: &str) -> std::result::Result<f64, FieldProblem> {
    if value.is_empty() {
        return Ok(0.0);
    }
    let weight: f64 = value.parse().map_err(|_| FieldProblem::NotANumber)?;
    if !weight.is_finite() {
        return Err(FieldProblem::NotANumber);
    }
    if weight < 0.0 {
        return Err(FieldProblem::WeightNegative);
    }
    Ok(weight)
}

fn field_error(
    column: &str,
    value: &str,
    row: usize,
    problem: FieldProblem,
    meet: &MeetState,
    language: Language,
) -> ImportError {
    let prefix = get_string(StringId::ErrorCsvFieldPrefix, language)
        .replace("{cellType}", column)
        .replace("{cellValue}", value)
        .replace("{rowNumber}", &display_number(row, language));

    ImportError::Field {
        column: column.to_string(),
        value: value.to_string(),
        row,
        problem,
        message: prefix + &problem_message(problem, meet, language),
    }
}

fn problem_message(problem: FieldProblem, meet: &MeetState, language: Language) -> String {
    let s = |id| get_string(id, language);
    match problem {
        FieldProblem::NotANumber => s(StringId::ErrorNotANumber).to_string(),
        FieldProblem::WeightNegative => s(StringId::ErrorWeightNegative).to_string(),
        FieldProblem::NameMissing => s(StringId::ErrorNameMissing).to_string(),
        FieldProblem::DivisionMissing => s(StringId::ErrorDivisionMissing).to_string(),
        FieldProblem::DivisionInvalid => {
            s(StringId::ErrorDivisionInvalid).replace("{Divisions}", &meet.divisions.join(", "))
        }
        FieldProblem::SexInvalid => s(StringId::ErrorSexInvalid)
            .replace("{Mx}", localize_sex(Sex::Mx, language))
            .replace("{M}", localize_sex(Sex::M, language))
            .replace("{F}", localize_sex(Sex::F, language)),
        FieldProblem::EquipmentInvalid => s(StringId::ErrorEquipmentInvalid)
            .replace("{bare}", localize_equipment(Equipment::Bare, language))
            .replace("{sleeves}", localize_equipment(Equipment::Sleeves, language))
            .replace("{wraps}", localize_equipment(Equipment::Wraps, language))
            .replace("{single}", localize_equipment(Equipment::SinglePly, language))
            .replace("{multi}", localize_equipment(Equipment::MultiPly, language))
            .replace("{unlimited}", localize_equipment(Equipment::Unlimited, language)),
        FieldProblem::RecordLiftInvalid => s(StringId::ErrorRecordLiftInvalid)
            .replace("{S}", localize_record_lift(RecordLift::S, language))
            .replace("{B}", localize_record_lift(RecordLift::B, language))
            .replace("{D}", localize_record_lift(RecordLift::D, language))
            .replace("{Total}", localize_record_lift(RecordLift::Total, language)),
        FieldProblem::RecordTypeInvalid => s(StringId::ErrorRecordTypeInvalid)
            .replace("{FullPower}", localize_record_type(RecordType::FullPower, language))
            .replace("{SingleLift}", localize_record_type(RecordType::SingleLift, language)),
        FieldProblem::TotalSingleLift => s(StringId::ErrorTotalSingleLift)
            .replace("{Total}", localize_record_lift(RecordLift::Total, language))
            .replace("{FullPower}", localize_record_type(RecordType::FullPower, language)),
    }
}

pub fn save_records_csv<P: AsRef<Path>>(
    path: P,
    state: &RecordsState,
    language: Language,
) -> Result<()> {
    fs::write(path.as_ref(), make_records_csv(state, language))?;
    debug!("Wrote {} records to {}", state.len(), path.as_ref().display());
    Ok(())
}

/// Read and validate a records file. Any parse or validation failure rejects
/// the whole file.
pub fn read_records_csv<P: AsRef<Path>>(
    path: P,
    meet: &MeetState,
    language: Language,
) -> Result<Vec<LiftingRecord>> {
    let content = fs::read_to_string(path.as_ref())?;
    let csv: Csv = content.parse()?;
    Ok(load_records_from_csv(&csv, meet, language)?)
}
