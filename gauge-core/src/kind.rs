//! Quantity kinds and measurement scales

use std::fmt;
use serde::{Serialize, Deserialize};

/// The physical kind a unit or quantity belongs to.
///
/// Conversions and additive arithmetic are only defined between units and
/// quantities of the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Dimensionless,
    Length,
    Time,
    Temperature,
    Information,
    InformationRate,
    ShirtSize,
}

impl Kind {
    /// All kinds, in declaration order
    pub const ALL: [Kind; 7] = [
        Kind::Dimensionless,
        Kind::Length,
        Kind::Time,
        Kind::Temperature,
        Kind::Information,
        Kind::InformationRate,
        Kind::ShirtSize,
    ];

    /// Lowercase display name
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Dimensionless => "dimensionless",
            Kind::Length => "length",
            Kind::Time => "time",
            Kind::Temperature => "temperature",
            Kind::Information => "information",
            Kind::InformationRate => "information_rate",
            Kind::ShirtSize => "shirt_size",
        }
    }

    /// Look up a kind by its display name
    pub fn from_name(name: &str) -> Option<Kind> {
        let name = name.trim().to_lowercase();
        Kind::ALL.iter().copied().find(|k| k.name() == name)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Where a value is measured from.
///
/// `Absolute` values are measured from the kind's true zero: every linear
/// kind, kelvin readings, and any temperature difference. `Relative` values
/// are measured from the unit's conventional zero (a Celsius or Fahrenheit
/// reading), so converting them must apply the unit's offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    Absolute,
    Relative,
}

impl Scale {
    pub fn is_relative(&self) -> bool {
        matches!(self, Scale::Relative)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scale::Absolute => write!(f, "ABSOLUTE"),
            Scale::Relative => write!(f, "RELATIVE"),
        }
    }
}
