//! Information units, referenced to the bit
//!
//! Symbols are the constant names and are case sensitive: `kb` is a
//! kilobit, `KB` a kilobyte.

use std::collections::HashMap;
use serde::{Serialize, Deserialize};
use gauge_core::Kind;
use crate::unit::UnitDef;

const BYTE: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BitUnit {
    Bit,
    Byte,
    Kb,
    Mb,
    Gb,
    Tb,
    Pb,
    Eb,
    KByte,
    MByte,
    GByte,
    TByte,
    PByte,
    EByte,
}

static TABLE: [UnitDef; 14] = [
    UnitDef::linear("BIT", "BIT", "Bit", 1.0),
    UnitDef::linear("Byte", "Byte", "Byte", BYTE),
    UnitDef::linear("kb", "kb", "Kilobit", 1.0e3),
    UnitDef::linear("Mb", "Mb", "Megabit", 1.0e6),
    UnitDef::linear("Gb", "Gb", "Gigabit", 1.0e9),
    UnitDef::linear("Tb", "Tb", "Terabit", 1.0e12),
    UnitDef::linear("Pb", "Pb", "Petabit", 1.0e15),
    UnitDef::linear("Eb", "Eb", "Exabit", 1.0e18),
    UnitDef::linear("KB", "KB", "Kilobyte", BYTE * 1.0e3),
    UnitDef::linear("MB", "MB", "Megabyte", BYTE * 1.0e6),
    UnitDef::linear("GB", "GB", "Gigabyte", BYTE * 1.0e9),
    UnitDef::linear("TB", "TB", "Terabyte", BYTE * 1.0e12),
    UnitDef::linear("PB", "PB", "Petabyte", BYTE * 1.0e15),
    UnitDef::linear("EB", "EB", "Exabyte", BYTE * 1.0e18),
];

impl BitUnit {
    pub const ALL: [BitUnit; 14] = [
        BitUnit::Bit,
        BitUnit::Byte,
        BitUnit::Kb,
        BitUnit::Mb,
        BitUnit::Gb,
        BitUnit::Tb,
        BitUnit::Pb,
        BitUnit::Eb,
        BitUnit::KByte,
        BitUnit::MByte,
        BitUnit::GByte,
        BitUnit::TByte,
        BitUnit::PByte,
        BitUnit::EByte,
    ];

    /// Decimal prefix exponent of each prefixed unit (`Mb` and `MB` are 6)
    pub fn product_units() -> HashMap<BitUnit, i32> {
        HashMap::from([
            (BitUnit::Kb, 3),
            (BitUnit::Mb, 6),
            (BitUnit::Gb, 9),
            (BitUnit::Tb, 12),
            (BitUnit::Pb, 15),
            (BitUnit::Eb, 18),
            (BitUnit::KByte, 3),
            (BitUnit::MByte, 6),
            (BitUnit::GByte, 9),
            (BitUnit::TByte, 12),
            (BitUnit::PByte, 15),
            (BitUnit::EByte, 18),
        ])
    }

    pub fn is_byte_unit(&self) -> bool {
        matches!(
            self,
            BitUnit::Byte
                | BitUnit::KByte
                | BitUnit::MByte
                | BitUnit::GByte
                | BitUnit::TByte
                | BitUnit::PByte
                | BitUnit::EByte
        )
    }
}

unit_enum!(BitUnit, Kind::Information, TABLE, Information, reference = Bit, case_sensitive = true);
