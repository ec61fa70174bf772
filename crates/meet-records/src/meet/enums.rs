use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;

/// Error for invalid enum value conversion
#[derive(Debug, Error)]
#[error("Invalid {type_name} value: {value}")]
pub struct InvalidEnumValueError {
    type_name: &'static str,
    value: i32,
}

impl InvalidEnumValueError {
    pub fn new(type_name: &'static str, value: i32) -> Self {
        Self { type_name, value }
    }
}

/// Competition sex category. Declaration order is the display order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Display,
)]
pub enum Sex {
    #[default]
    M,
    F,
    Mx,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Equipment category, ordered from least to most supportive.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Display,
)]
pub enum Equipment {
    Bare,
    #[default]
    Sleeves,
    Wraps,
    #[serde(rename = "Single-ply")]
    #[strum(serialize = "Single-ply")]
    SinglePly,
    #[serde(rename = "Multi-ply")]
    #[strum(serialize = "Multi-ply")]
    MultiPly,
    Unlimited,
}

impl Equipment {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// One of the three contested lifts.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Display,
)]
pub enum Lift {
    S,
    B,
    D,
}

/// Event code an entry is registered for.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Display,
)]
pub enum Event {
    S,
    B,
    D,
    SB,
    SD,
    BD,
    SBD,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Whether the event code includes the given lift.
    pub fn contains(&self, lift: Lift) -> bool {
        let code: &'static str = self.into();
        let letter: &'static str = lift.into();
        code.contains(letter)
    }
}

/// Outcome of a single attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum LiftStatus {
    Failure,
    #[default]
    NotAttempted,
    Success,
}

impl TryFrom<i8> for LiftStatus {
    type Error = InvalidEnumValueError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::Failure),
            0 => Ok(Self::NotAttempted),
            1 => Ok(Self::Success),
            _ => Err(InvalidEnumValueError::new("LiftStatus", value.into())),
        }
    }
}

impl From<LiftStatus> for i8 {
    fn from(status: LiftStatus) -> Self {
        match status {
            LiftStatus::Failure => -1,
            LiftStatus::NotAttempted => 0,
            LiftStatus::Success => 1,
        }
    }
}
