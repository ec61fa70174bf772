use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Entry, Sex, display_weight};
use crate::error::Result;
use crate::records::RecordsState;

/// Meet configuration relevant to records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MeetState {
    pub name: String,
    /// Meet date as entered by the director (YYYY-MM-DD)
    pub date: String,
    /// Divisions in the order the director configured them
    pub divisions: Vec<String>,
    pub weight_classes_kg_men: Vec<f64>,
    pub weight_classes_kg_women: Vec<f64>,
    pub weight_classes_kg_mx: Vec<f64>,
}

impl MeetState {
    pub fn weight_classes_for(&self, sex: Sex) -> &[f64] {
        match sex {
            Sex::M => &self.weight_classes_kg_men,
            Sex::F => &self.weight_classes_kg_women,
            Sex::Mx => &self.weight_classes_kg_mx,
        }
    }

    /// Weight class label for an entry's bodyweight, e.g. `"83"` or `"120+"`.
    pub fn weight_class_for_entry(&self, entry: &Entry) -> String {
        weight_class_str(self.weight_classes_for(entry.sex), entry.bodyweight_kg)
    }

    /// Position of a division in the configured order.
    pub fn division_index(&self, division: &str) -> Option<usize> {
        self.divisions.iter().position(|d| d == division)
    }
}

/// Lifter registrations for the meet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationState {
    pub entries: Vec<Entry>,
}

impl RegistrationState {
    pub fn get(&self, id: u32) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

/// Pick the class an entry falls into.
///
/// Empty when the lifter hasn't weighed in or no classes are configured.
/// A lifter heavier than every class gets the largest class with a `+`.
pub fn weight_class_str(classes: &[f64], bodyweight_kg: f64) -> String {
    if bodyweight_kg == 0.0 || classes.is_empty() {
        return String::new();
    }

    match classes.iter().find(|class| bodyweight_kg <= **class) {
        Some(class) => display_weight(*class),
        None => {
            let heaviest = classes.iter().copied().fold(f64::MIN, f64::max);
            format!("{}+", display_weight(heaviest))
        }
    }
}

/// A saved meet document: configuration, registrations, and the records
/// baseline carried with it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeetFile {
    pub meet: MeetState,
    pub registration: RegistrationState,
    pub records: RecordsState,
}

impl MeetFile {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let file: MeetFile = serde_json::from_str(&content)?;
        debug!(
            "Loaded meet {:?}: {} entries, {} seeded records",
            file.meet.name,
            file.registration.entries.len(),
            file.records.len()
        );
        Ok(file)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
