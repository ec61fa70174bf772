//! Localized names for the closed enums, and the reverse lookup used by the
//! CSV importer.

use strum::IntoEnumIterator;
use thiserror::Error;

use super::{Language, StringId, get_string};
use crate::meet::{Equipment, Sex};
use crate::records::{RecordLift, RecordType};

/// A localized name that matches no variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to delocalize {kind}: {text}")]
pub struct UnknownValue {
    pub kind: &'static str,
    pub text: String,
}

pub fn localize_sex(sex: Sex, language: Language) -> &'static str {
    let id = match sex {
        Sex::M => StringId::SexM,
        Sex::F => StringId::SexF,
        Sex::Mx => StringId::SexMx,
    };
    get_string(id, language)
}

/// Plural form for headings, e.g. "Women".
pub fn localize_sex_plural(sex: Sex, language: Language) -> &'static str {
    let id = match sex {
        Sex::M => StringId::SexMPlural,
        Sex::F => StringId::SexFPlural,
        Sex::Mx => StringId::SexMxPlural,
    };
    get_string(id, language)
}

pub fn localize_equipment(equipment: Equipment, language: Language) -> &'static str {
    let id = match equipment {
        Equipment::Bare => StringId::EquipmentBare,
        Equipment::Sleeves => StringId::EquipmentSleeves,
        Equipment::Wraps => StringId::EquipmentWraps,
        Equipment::SinglePly => StringId::EquipmentSinglePly,
        Equipment::MultiPly => StringId::EquipmentMultiPly,
        Equipment::Unlimited => StringId::EquipmentUnlimited,
    };
    get_string(id, language)
}

pub fn localize_record_lift(record_lift: RecordLift, language: Language) -> &'static str {
    let id = match record_lift {
        RecordLift::S => StringId::RecordLiftS,
        RecordLift::B => StringId::RecordLiftB,
        RecordLift::D => StringId::RecordLiftD,
        RecordLift::Total => StringId::RecordLiftTotal,
    };
    get_string(id, language)
}

pub fn localize_record_type(record_type: RecordType, language: Language) -> &'static str {
    let id = match record_type {
        RecordType::FullPower => StringId::RecordTypeFullPower,
        RecordType::SingleLift => StringId::RecordTypeSingleLift,
    };
    get_string(id, language)
}

fn delocalize<T, F>(kind: &'static str, text: &str, localize: F) -> Result<T, UnknownValue>
where
    T: IntoEnumIterator,
    F: Fn(&T) -> &'static str,
{
    T::iter()
        .find(|value| localize(value) == text)
        .ok_or_else(|| UnknownValue {
            kind,
            text: text.to_string(),
        })
}

pub fn delocalize_sex(text: &str, language: Language) -> Result<Sex, UnknownValue> {
    delocalize("sex", text, |sex| localize_sex(*sex, language))
}

pub fn delocalize_equipment(text: &str, language: Language) -> Result<Equipment, UnknownValue> {
    delocalize("equipment", text, |equipment| {
        localize_equipment(*equipment, language)
    })
}

pub fn delocalize_record_lift(text: &str, language: Language) -> Result<RecordLift, UnknownValue> {
    delocalize("record lift", text, |lift| {
        localize_record_lift(*lift, language)
    })
}

pub fn delocalize_record_type(text: &str, language: Language) -> Result<RecordType, UnknownValue> {
    delocalize("record type", text, |record_type| {
        localize_record_type(*record_type, language)
    })
}
