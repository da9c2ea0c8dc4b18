//! Gauge Core - Fundamental types
//!
//! This crate provides the vocabulary shared by the Gauge crates:
//! - `Kind`: the physical kind a unit or quantity belongs to
//! - `Scale`: whether a value is measured from true zero or from a unit's own zero
//! - `UnitError`: the error taxonomy for conversions and arithmetic
//! - `UnitsConfig`: lookup and formatting configuration

mod kind;
mod error;
mod config;

pub use kind::{Kind, Scale};
pub use error::{UnitError, codes};
pub use config::{UnitsConfig, LookupPolicy, UnitStyle};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Kind, Scale, UnitError, UnitsConfig, LookupPolicy, UnitStyle};
    pub use crate::error::codes;
}
