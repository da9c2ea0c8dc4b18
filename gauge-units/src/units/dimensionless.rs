//! The unit of pure numbers

use serde::{Serialize, Deserialize};
use gauge_core::Kind;
use crate::unit::UnitDef;

/// Unit for ratios and counts. Its symbol is empty, so a dimensionless
/// quantity renders as a bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DimensionlessUnit {
    One,
}

static TABLE: [UnitDef; 1] = [UnitDef::linear("", "ONE", "One", 1.0)];

impl DimensionlessUnit {
    pub const ALL: [DimensionlessUnit; 1] = [DimensionlessUnit::One];
}

unit_enum!(DimensionlessUnit, Kind::Dimensionless, TABLE, Dimensionless, reference = One, case_sensitive = true);
