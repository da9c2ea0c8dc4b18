//! Data rate units, referenced to bits per second
//!
//! Single-letter aliases (`K`, `M`, ...) share factors with their `Kbps`
//! forms. `None` is a placeholder with factor zero; nothing converts to or
//! from it. Lookup ignores case.

use std::collections::HashMap;
use serde::{Serialize, Deserialize};
use gauge_core::Kind;
use crate::unit::UnitDef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BitRateUnit {
    Bps,
    Kbps,
    Mbps,
    Gbps,
    Tbps,
    Pbps,
    Ebps,
    K,
    M,
    G,
    T,
    P,
    E,
    None,
}

static TABLE: [UnitDef; 14] = [
    UnitDef::linear("bps", "bps", "Bit per second", 1.0),
    UnitDef::linear("Kbps", "Kbps", "Kilobit per second", 1.0e3),
    UnitDef::linear("Mbps", "Mbps", "Megabit per second", 1.0e6),
    UnitDef::linear("Gbps", "Gbps", "Gigabit per second", 1.0e9),
    UnitDef::linear("Tbps", "Tbps", "Terabit per second", 1.0e12),
    UnitDef::linear("Pbps", "Pbps", "Petabit per second", 1.0e15),
    UnitDef::linear("Ebps", "Ebps", "Exabit per second", 1.0e18),
    UnitDef::linear("K", "K", "Kilobit per second", 1.0e3),
    UnitDef::linear("M", "M", "Megabit per second", 1.0e6),
    UnitDef::linear("G", "G", "Gigabit per second", 1.0e9),
    UnitDef::linear("T", "T", "Terabit per second", 1.0e12),
    UnitDef::linear("P", "P", "Petabit per second", 1.0e15),
    UnitDef::linear("E", "E", "Exabit per second", 1.0e18),
    UnitDef::linear("", "NONE", "", 0.0),
];

impl BitRateUnit {
    pub const ALL: [BitRateUnit; 14] = [
        BitRateUnit::Bps,
        BitRateUnit::Kbps,
        BitRateUnit::Mbps,
        BitRateUnit::Gbps,
        BitRateUnit::Tbps,
        BitRateUnit::Pbps,
        BitRateUnit::Ebps,
        BitRateUnit::K,
        BitRateUnit::M,
        BitRateUnit::G,
        BitRateUnit::T,
        BitRateUnit::P,
        BitRateUnit::E,
        BitRateUnit::None,
    ];

    /// Decimal prefix exponent of each prefixed unit
    pub fn product_units() -> HashMap<BitRateUnit, i32> {
        HashMap::from([
            (BitRateUnit::Kbps, 3),
            (BitRateUnit::Mbps, 6),
            (BitRateUnit::Gbps, 9),
            (BitRateUnit::Tbps, 12),
            (BitRateUnit::Pbps, 15),
            (BitRateUnit::Ebps, 18),
        ])
    }

    /// The other spelling of a prefixed rate (`Kbps` and `K`), if any
    pub fn alternate(&self) -> Option<BitRateUnit> {
        match self {
            BitRateUnit::Kbps => Some(BitRateUnit::K),
            BitRateUnit::Mbps => Some(BitRateUnit::M),
            BitRateUnit::Gbps => Some(BitRateUnit::G),
            BitRateUnit::Tbps => Some(BitRateUnit::T),
            BitRateUnit::Pbps => Some(BitRateUnit::P),
            BitRateUnit::Ebps => Some(BitRateUnit::E),
            BitRateUnit::K => Some(BitRateUnit::Kbps),
            BitRateUnit::M => Some(BitRateUnit::Mbps),
            BitRateUnit::G => Some(BitRateUnit::Gbps),
            BitRateUnit::T => Some(BitRateUnit::Tbps),
            BitRateUnit::P => Some(BitRateUnit::Pbps),
            BitRateUnit::E => Some(BitRateUnit::Ebps),
            BitRateUnit::Bps | BitRateUnit::None => Option::None,
        }
    }
}

unit_enum!(BitRateUnit, Kind::InformationRate, TABLE, InformationRate, reference = Bps, case_sensitive = false);
