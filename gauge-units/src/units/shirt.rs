//! Shirt sizes: an ordinal scale with a single unit

use std::fmt;
use serde::{Serialize, Deserialize};
use gauge_core::{Kind, UnitError};
use crate::unit::UnitDef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShirtSizeUnit {
    Sml,
}

static TABLE: [UnitDef; 1] = [UnitDef::linear("S-M-L", "SML", "Small to Large", 1.0)];

impl ShirtSizeUnit {
    pub const ALL: [ShirtSizeUnit; 1] = [ShirtSizeUnit::Sml];
}

unit_enum!(ShirtSizeUnit, Kind::ShirtSize, TABLE, ShirtSize, reference = Sml, case_sensitive = true);

/// A shirt size, ordered smallest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShirtSize {
    XS,
    S,
    M,
    L,
    XL,
    XXL,
}

impl ShirtSize {
    pub const ALL: [ShirtSize; 6] = [
        ShirtSize::XS,
        ShirtSize::S,
        ShirtSize::M,
        ShirtSize::L,
        ShirtSize::XL,
        ShirtSize::XXL,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            ShirtSize::XS => "X-Small",
            ShirtSize::S => "Small",
            ShirtSize::M => "Medium",
            ShirtSize::L => "Large",
            ShirtSize::XL => "X-Large",
            ShirtSize::XXL => "XX-Large",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShirtSize::XS => "XS",
            ShirtSize::S => "S",
            ShirtSize::M => "M",
            ShirtSize::L => "L",
            ShirtSize::XL => "XL",
            ShirtSize::XXL => "XXL",
        }
    }

    /// Position in the size order, XS first
    pub fn ordinal(&self) -> usize {
        *self as usize
    }

    pub fn unit(&self) -> ShirtSizeUnit {
        ShirtSizeUnit::Sml
    }

    /// Sizes have a single unit, so this is the identity
    pub fn to(&self, _unit: ShirtSizeUnit) -> ShirtSize {
        *self
    }

    pub fn from_name(name: &str) -> Result<ShirtSize, UnitError> {
        let name = name.trim();
        ShirtSize::ALL
            .iter()
            .copied()
            .find(|s| s.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnitError::parse_error(format!("unknown shirt size '{}'", name)))
    }
}

impl fmt::Display for ShirtSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
