//! Composable unit converters
//!
//! A converter is a pure `f64 -> f64` function with a known inverse.
//! Converters compose into pairs (`[pair] = [left] x [right]`): the right
//! converter is applied first, then the left one.

use std::fmt;
use serde::{Serialize, Deserialize};
use gauge_core::UnitError;
use crate::Unit;

/// A converter between two units of the same kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UnitConverter {
    /// No-op
    Identity,
    /// `x * factor`
    Multiply(f64),
    /// `x + offset`
    Add(f64),
    /// `left(right(x))`
    Pair(Box<UnitConverter>, Box<UnitConverter>),
}

impl UnitConverter {
    // ========== Construction ==========

    /// Scaling converter; a factor of one collapses to `Identity`
    pub fn multiply(factor: f64) -> Self {
        if factor == 1.0 {
            UnitConverter::Identity
        } else {
            UnitConverter::Multiply(factor)
        }
    }

    /// Offset converter; a zero offset collapses to `Identity`
    pub fn add(offset: f64) -> Self {
        if offset == 0.0 {
            UnitConverter::Identity
        } else {
            UnitConverter::Add(offset)
        }
    }

    /// Converter from `unit` to its kind's reference unit.
    ///
    /// With `apply_offset` the unit's zero offset is added before scaling,
    /// which is what an absolute reading on a shifted scale needs. Without
    /// it only the scale factor is applied (temperature differences).
    pub fn to_reference<U: Unit>(unit: &U, apply_offset: bool) -> Result<Self, UnitError> {
        let factor = unit.factor();
        if factor == 0.0 || !factor.is_finite() {
            return Err(UnitError::unconvertible(
                unit.symbol(),
                unit.system_unit().symbol(),
            ));
        }
        let scale = UnitConverter::multiply(factor);
        if apply_offset {
            Ok(scale.concatenate(UnitConverter::add(unit.offset())))
        } else {
            Ok(scale)
        }
    }

    /// Fail unless `unit` can be taken to and from its reference unit
    pub fn ensure_convertible<U: Unit>(unit: &U) -> Result<(), UnitError> {
        UnitConverter::to_reference(unit, false).map(|_| ())
    }

    /// Converter from `from` to `to` through their reference unit
    pub fn between<U: Unit>(from: &U, to: &U, apply_offset: bool) -> Result<Self, UnitError> {
        if from.kind() != to.kind() {
            return Err(UnitError::kind_mismatch(from.kind(), to.kind()));
        }
        if from == to {
            return Ok(UnitConverter::Identity);
        }
        let into_reference = UnitConverter::to_reference(from, apply_offset)?;
        let out_of_reference = UnitConverter::to_reference(to, apply_offset)?.inverse();
        let converter = out_of_reference.concatenate(into_reference);
        tracing::trace!(from = from.symbol(), to = to.symbol(), ?converter, "resolved converter");
        Ok(converter)
    }

    // ========== Algebra ==========

    /// Apply this converter
    pub fn convert(&self, value: f64) -> f64 {
        match self {
            UnitConverter::Identity => value,
            UnitConverter::Multiply(factor) => value * factor,
            UnitConverter::Add(offset) => value + offset,
            UnitConverter::Pair(left, right) => left.convert(right.convert(value)),
        }
    }

    /// The converter undoing this one
    pub fn inverse(&self) -> Self {
        match self {
            UnitConverter::Identity => UnitConverter::Identity,
            UnitConverter::Multiply(factor) => UnitConverter::Multiply(1.0 / factor),
            UnitConverter::Add(offset) => UnitConverter::Add(-offset),
            UnitConverter::Pair(left, right) => {
                UnitConverter::Pair(Box::new(right.inverse()), Box::new(left.inverse()))
            }
        }
    }

    /// Converter equivalent to applying `that` first, then `self`
    pub fn concatenate(self, that: UnitConverter) -> Self {
        match (self, that) {
            (UnitConverter::Identity, that) => that,
            (this, UnitConverter::Identity) => this,
            (this, that) => UnitConverter::Pair(Box::new(this), Box::new(that)),
        }
    }

    /// True when the converter has no offset anywhere in its chain
    pub fn is_linear(&self) -> bool {
        match self {
            UnitConverter::Identity | UnitConverter::Multiply(_) => true,
            UnitConverter::Add(_) => false,
            UnitConverter::Pair(left, right) => left.is_linear() && right.is_linear(),
        }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, UnitConverter::Identity)
    }

    /// The non-compound converters making up this one, leftmost first
    pub fn compound_converters(&self) -> Vec<&UnitConverter> {
        match self {
            UnitConverter::Pair(left, right) => {
                let mut converters = left.compound_converters();
                converters.extend(right.compound_converters());
                converters
            }
            other => vec![other],
        }
    }
}

impl Default for UnitConverter {
    fn default() -> Self {
        UnitConverter::Identity
    }
}

impl fmt::Display for UnitConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitConverter::Identity => write!(f, "x"),
            UnitConverter::Multiply(factor) => write!(f, "x * {}", factor),
            UnitConverter::Add(offset) => write!(f, "x + {}", offset),
            UnitConverter::Pair(left, right) => write!(f, "({}) o ({})", left, right),
        }
    }
}
