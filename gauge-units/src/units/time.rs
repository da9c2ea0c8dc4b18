//! Time units, referenced to the second

use serde::{Serialize, Deserialize};
use gauge_core::Kind;
use crate::unit::UnitDef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Millisecond,
}

static TABLE: [UnitDef; 4] = [
    UnitDef::linear("s", "SECOND", "Second", 1.0),
    UnitDef::linear("m", "MINUTE", "Minute", 60.0),
    UnitDef::linear("h", "HOUR", "Hour", 3600.0),
    UnitDef::linear("ms", "MILLISECOND", "Millisecond", 0.001),
];

impl TimeUnit {
    pub const ALL: [TimeUnit; 4] = [
        TimeUnit::Second,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Millisecond,
    ];
}

unit_enum!(TimeUnit, Kind::Time, TABLE, Time, reference = Second, case_sensitive = true);
