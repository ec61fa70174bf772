//! Translation table for every user-visible string the records code emits.
//!
//! Templates use `{Name}` placeholders that callers fill with `str::replace`.

use strum::EnumIter;

use super::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum StringId {
    // Records CSV columns
    CsvName,
    CsvWeight,
    CsvDate,
    CsvLocation,
    CsvDivision,
    CsvSex,
    CsvClass,
    CsvEquipment,
    CsvRecordLift,
    CsvRecordType,

    SexM,
    SexF,
    SexMx,
    SexMPlural,
    SexFPlural,
    SexMxPlural,

    EquipmentBare,
    EquipmentSleeves,
    EquipmentWraps,
    EquipmentSinglePly,
    EquipmentMultiPly,
    EquipmentUnlimited,

    RecordLiftS,
    RecordLiftB,
    RecordLiftD,
    RecordLiftTotal,

    RecordTypeFullPower,
    RecordTypeSingleLift,

    // Import errors
    ErrorCsvFieldPrefix,
    ErrorNotANumber,
    ErrorWeightNegative,
    ErrorNameMissing,
    ErrorDivisionMissing,
    ErrorDivisionInvalid,
    ErrorSexInvalid,
    ErrorEquipmentInvalid,
    ErrorRecordLiftInvalid,
    ErrorRecordTypeInvalid,
    ErrorTotalSingleLift,
    ErrorMissingColumn,
    ErrorUnknownColumn,
    ErrorDuplicateColumn,

    // Example records file
    ExampleName1,
    ExampleName2,
    ExampleDate,
    ExampleLocation,
    ExampleDivision,

    // Printable records page
    PageTitle,
    PageColumnRecordType,
    PageColumnWeight,
    PageColumnRecordLift,
    PageColumnName,
    PageColumnDate,
    PageColumnLocation,
}

/// Look up the translation of `id`.
pub fn get_string(id: StringId, language: Language) -> &'static str {
    match language {
        Language::En => en(id),
        Language::Es => es(id),
    }
}

fn en(id: StringId) -> &'static str {
    use StringId::*;
    match id {
        CsvName => "Name",
        CsvWeight => "Weight",
        CsvDate => "Date",
        CsvLocation => "Location",
        CsvDivision => "Division",
        CsvSex => "Sex",
        CsvClass => "Class",
        CsvEquipment => "Equipment",
        CsvRecordLift => "Record Lift",
        CsvRecordType => "Record Type",

        SexM => "M",
        SexF => "F",
        SexMx => "Mx",
        SexMPlural => "Men",
        SexFPlural => "Women",
        SexMxPlural => "Mx",

        EquipmentBare => "Bare",
        EquipmentSleeves => "Sleeves",
        EquipmentWraps => "Wraps",
        EquipmentSinglePly => "Single-ply",
        EquipmentMultiPly => "Multi-ply",
        EquipmentUnlimited => "Unlimited",

        RecordLiftS => "Squat",
        RecordLiftB => "Bench",
        RecordLiftD => "Deadlift",
        RecordLiftTotal => "Total",

        RecordTypeFullPower => "Full Power",
        RecordTypeSingleLift => "Single Lift",

        ErrorCsvFieldPrefix => "Problem with {cellType} '{cellValue}' on row {rowNumber}: ",
        ErrorNotANumber => "expected a number.",
        ErrorWeightNegative => "the weight can't be negative.",
        ErrorNameMissing => "the lifter's name is missing.",
        ErrorDivisionMissing => "the division is missing.",
        ErrorDivisionInvalid => "the division must be one of: {Divisions}.",
        ErrorSexInvalid => "the sex must be one of {M}, {F}, or {Mx}.",
        ErrorEquipmentInvalid => {
            "the equipment must be one of {bare}, {sleeves}, {wraps}, {single}, {multi}, or {unlimited}."
        }
        ErrorRecordLiftInvalid => "the record lift must be one of {S}, {B}, {D}, or {Total}.",
        ErrorRecordTypeInvalid => "the record type must be one of {FullPower} or {SingleLift}.",
        ErrorTotalSingleLift => "a {Total} record must be {FullPower}.",
        ErrorMissingColumn => "The records file is missing the column '{column}'.",
        ErrorUnknownColumn => "Unknown column '{column}'. Valid columns are: {columns}.",
        ErrorDuplicateColumn => "The column '{column}' appears more than once.",

        ExampleName1 => "John Doe",
        ExampleName2 => "Jane Doe",
        ExampleDate => "2019-10-26",
        ExampleLocation => "Auckland",
        ExampleDivision => "Open",

        PageTitle => "Powerlifting Records",
        PageColumnRecordType => "Record Type",
        PageColumnWeight => "Weight",
        PageColumnRecordLift => "Lift",
        PageColumnName => "Name",
        PageColumnDate => "Date",
        PageColumnLocation => "Location",
    }
}

fn es(id: StringId) -> &'static str {
    use StringId::*;
    match id {
        CsvName => "Nombre",
        CsvWeight => "Peso",
        CsvDate => "Fecha",
        CsvLocation => "Lugar",
        CsvDivision => "División",
        CsvSex => "Sexo",
        CsvClass => "Categoría",
        CsvEquipment => "Equipo",
        CsvRecordLift => "Movimiento",
        CsvRecordType => "Tipo de récord",

        SexM => "H",
        SexF => "M",
        SexMx => "Mx",
        SexMPlural => "Hombres",
        SexFPlural => "Mujeres",
        SexMxPlural => "Mx",

        EquipmentBare => "Sin equipo",
        EquipmentSleeves => "Rodilleras",
        EquipmentWraps => "Vendas",
        EquipmentSinglePly => "Monocapa",
        EquipmentMultiPly => "Multicapa",
        EquipmentUnlimited => "Ilimitado",

        RecordLiftS => "Sentadilla",
        RecordLiftB => "Press de banca",
        RecordLiftD => "Peso muerto",
        RecordLiftTotal => "Total",

        RecordTypeFullPower => "Powerlifting completo",
        RecordTypeSingleLift => "Movimiento individual",

        ErrorCsvFieldPrefix => "Problema con {cellType} '{cellValue}' en la fila {rowNumber}: ",
        ErrorNotANumber => "se esperaba un número.",
        ErrorWeightNegative => "el peso no puede ser negativo.",
        ErrorNameMissing => "falta el nombre del levantador.",
        ErrorDivisionMissing => "falta la división.",
        ErrorDivisionInvalid => "la división debe ser una de: {Divisions}.",
        ErrorSexInvalid => "el sexo debe ser {M}, {F} o {Mx}.",
        ErrorEquipmentInvalid => {
            "el equipo debe ser {bare}, {sleeves}, {wraps}, {single}, {multi} o {unlimited}."
        }
        ErrorRecordLiftInvalid => "el movimiento debe ser {S}, {B}, {D} o {Total}.",
        ErrorRecordTypeInvalid => "el tipo de récord debe ser {FullPower} o {SingleLift}.",
        ErrorTotalSingleLift => "un récord de {Total} debe ser {FullPower}.",
        ErrorMissingColumn => "Al archivo de récords le falta la columna '{column}'.",
        ErrorUnknownColumn => "Columna desconocida '{column}'. Las columnas válidas son: {columns}.",
        ErrorDuplicateColumn => "La columna '{column}' aparece más de una vez.",

        ExampleName1 => "Juan Pérez",
        ExampleName2 => "María López",
        ExampleDate => "2019-10-26",
        ExampleLocation => "Madrid",
        ExampleDivision => "Open",

        PageTitle => "Récords de powerlifting",
        PageColumnRecordType => "Tipo de récord",
        PageColumnWeight => "Peso",
        PageColumnRecordLift => "Movimiento",
        PageColumnName => "Nombre",
        PageColumnDate => "Fecha",
        PageColumnLocation => "Lugar",
    }
}
