//! Gauge Units - Quantities, Units and Conversion
//!
//! Closed per-kind unit tables with factors (and offsets, for temperature)
//! relative to a reference unit, composable converters, and a generic
//! `Quantity<U>` carrying value, unit and scale.
//!
//! Kinds:
//! - Dimensionless (ONE)
//! - Length (m, km)
//! - Time (s, m, h, ms)
//! - Temperature (K, °C, °F, °R)
//! - Information (BIT, Byte, kb..Eb, KB..EB)
//! - InformationRate (bps, Kbps..Ebps, K..E)
//! - ShirtSize (S-M-L)

#[macro_use]
mod unit;
mod converter;
mod mixed;
mod quantity;
mod registry;
mod format;
pub mod units;

pub use unit::{AnyUnit, Unit, UnitDef, UnitEnum};
pub use converter::UnitConverter;
pub use mixed::MixedUnit;
pub use quantity::{AnyQuantity, Quantity};
pub use registry::QuantityRegistry;
pub use format::QuantityFormat;

pub use gauge_core::{Kind, Scale, UnitError, UnitsConfig, LookupPolicy, UnitStyle};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{AnyQuantity, AnyUnit, MixedUnit, Quantity, QuantityFormat, QuantityRegistry};
    pub use crate::{Unit, UnitConverter, UnitEnum};
    pub use crate::units::*;
    pub use gauge_core::prelude::*;
}
