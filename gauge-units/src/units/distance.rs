//! Length units, referenced to the metre

use serde::{Serialize, Deserialize};
use gauge_core::Kind;
use crate::unit::UnitDef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceUnit {
    Metre,
    Kilometre,
}

static TABLE: [UnitDef; 2] = [
    UnitDef::linear("m", "METRE", "Metre", 1.0),
    UnitDef::linear("km", "KILOMETRE", "Kilometre", 1.0e3),
];

impl DistanceUnit {
    pub const ALL: [DistanceUnit; 2] = [DistanceUnit::Metre, DistanceUnit::Kilometre];
}

unit_enum!(DistanceUnit, Kind::Length, TABLE, Length, reference = Metre, case_sensitive = true);
