//! Quantities: a value, a unit and a scale
//!
//! A single generic `Quantity<U>` serves every kind. `AnyQuantity` is the
//! runtime-tagged form produced by parsing and by the registry.
//!
//! Arithmetic is carried out on the scalar (the value in the kind's
//! reference unit) and the result is expressed in the left operand's unit.

use std::cmp::Ordering;
use std::fmt;
use serde::{Serialize, Deserialize};
use gauge_core::{Kind, Scale, UnitError, UnitStyle};
use crate::units::DimensionlessUnit;
use crate::{AnyUnit, Unit, UnitConverter, UnitEnum};

/// Relative tolerance used by `is_equivalent`
const EPSILON: f64 = 1e-9;

/// An immutable amount of some unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity<U: Unit> {
    value: f64,
    unit: U,
    scale: Scale,
}

/// A quantity whose kind is only known at runtime
pub type AnyQuantity = Quantity<AnyUnit>;

impl<U: Unit> Quantity<U> {
    // ========== Construction ==========

    /// Quantity on the unit's default scale (relative for Celsius and
    /// Fahrenheit, absolute otherwise)
    pub fn new(value: f64, unit: U) -> Self {
        Quantity { value, unit, scale: unit.default_scale() }
    }

    pub fn with_scale(value: f64, unit: U, scale: Scale) -> Self {
        Quantity { value, unit, scale }
    }

    /// A difference between two readings, never offset during conversion
    pub fn interval(value: f64, unit: U) -> Self {
        Quantity { value, unit, scale: Scale::Absolute }
    }

    // Value in `unit` whose reference-unit scalar is `scalar`
    fn from_scalar(scalar: f64, unit: U, scale: Scale) -> Self {
        let value = if scale.is_relative() {
            scalar / unit.factor() - unit.offset()
        } else {
            scalar / unit.factor()
        };
        Quantity { value, unit, scale }
    }

    // ========== Accessors ==========

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> U {
        self.unit
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    pub fn kind(&self) -> Kind {
        self.unit.kind()
    }

    /// The value expressed in the kind's reference unit
    pub fn scalar(&self) -> f64 {
        if self.scale.is_relative() {
            (self.value + self.unit.offset()) * self.unit.factor()
        } else {
            self.value * self.unit.factor()
        }
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }

    pub fn as_type(&self, kind: Kind) -> Result<Self, UnitError> {
        self.unit.as_type(kind)?;
        Ok(*self)
    }

    pub fn to_any(&self) -> AnyQuantity {
        Quantity { value: self.value, unit: self.unit.to_any(), scale: self.scale }
    }

    // ========== Conversion ==========

    /// Express this quantity in another unit of the same kind.
    ///
    /// A relative reading goes through the full affine transform and lands
    /// on the target unit's default scale (`0 °C` becomes `273.15 K`).
    /// An absolute quantity is scaled only and stays absolute.
    pub fn to(&self, unit: U) -> Result<Self, UnitError> {
        self.check_kind(unit.kind())?;
        if unit == self.unit {
            return Ok(*self);
        }
        if self.scale.is_relative() {
            let converter = UnitConverter::between(&self.unit, &unit, true)?;
            Ok(Quantity { value: converter.convert(self.value), unit, scale: unit.default_scale() })
        } else {
            let converter = UnitConverter::between(&self.unit, &unit, false)?;
            Ok(Quantity { value: converter.convert(self.value), unit, scale: Scale::Absolute })
        }
    }

    /// Express this quantity as a reading from `unit`'s conventional zero
    /// (`273.15 K` becomes `0 °C`)
    pub fn to_relative(&self, unit: U) -> Result<Self, UnitError> {
        self.check_kind(unit.kind())?;
        UnitConverter::ensure_convertible(&unit)?;
        Ok(Quantity::from_scalar(self.scalar(), unit, unit.default_scale()))
    }

    // ========== Arithmetic ==========

    /// Sum in the left operand's unit.
    ///
    /// A relative reading plus an absolute interval is a relative reading.
    /// Two relative readings cannot be added.
    pub fn add(&self, other: &Self) -> Result<Self, UnitError> {
        self.check_kind(other.kind())?;
        let scale = match (self.scale, other.scale) {
            (Scale::Relative, Scale::Relative) => {
                return Err(UnitError::unsupported(format!(
                    "cannot add two relative readings ({} + {})",
                    self, other
                )));
            }
            (Scale::Absolute, Scale::Absolute) => Scale::Absolute,
            _ => self.unit.default_scale(),
        };
        if self.unit == other.unit {
            return Ok(Quantity { value: self.value + other.value, unit: self.unit, scale });
        }
        Ok(Quantity::from_scalar(self.scalar() + other.scalar(), self.unit, scale))
    }

    /// Difference in the left operand's unit.
    ///
    /// Two relative readings give an absolute interval; a reading minus an
    /// interval is a reading. An absolute value in a unit without an offset
    /// (`300 K`) is a reading from true zero, so against a relative reading
    /// it also gives an interval. Any other interval minus a reading is
    /// rejected.
    pub fn subtract(&self, other: &Self) -> Result<Self, UnitError> {
        self.check_kind(other.kind())?;
        let scale = match (self.scale, other.scale) {
            (Scale::Relative, Scale::Relative) | (Scale::Absolute, Scale::Absolute) => Scale::Absolute,
            (Scale::Absolute, Scale::Relative) if self.is_zero_based_reading() => Scale::Absolute,
            (Scale::Absolute, Scale::Relative) => {
                return Err(UnitError::unsupported(format!(
                    "cannot subtract a relative reading from an interval ({} - {})",
                    self, other
                )));
            }
            (Scale::Relative, Scale::Absolute) if other.is_zero_based_reading() => Scale::Absolute,
            (Scale::Relative, Scale::Absolute) => self.unit.default_scale(),
        };
        if self.unit == other.unit {
            return Ok(Quantity { value: self.value - other.value, unit: self.unit, scale });
        }
        Ok(Quantity::from_scalar(self.scalar() - other.scalar(), self.unit, scale))
    }

    // Absolute value in a unit whose zero is true zero
    fn is_zero_based_reading(&self) -> bool {
        self.scale == Scale::Absolute && self.unit.offset() == 0.0
    }

    pub fn multiply(&self, factor: f64) -> Self {
        Quantity { value: self.value * factor, ..*self }
    }

    pub fn divide(&self, divisor: f64) -> Result<Self, UnitError> {
        if divisor == 0.0 {
            return Err(UnitError::DivisionByZero);
        }
        Ok(Quantity { value: self.value / divisor, ..*self })
    }

    /// Multiply by a dimensionless quantity. Products that would create a
    /// new dimension are not supported.
    pub fn multiply_quantity<V: Unit>(&self, other: &Quantity<V>) -> Result<Self, UnitError> {
        if other.kind() != Kind::Dimensionless {
            return Err(UnitError::unsupported(format!(
                "multiplying {} by {} would create a new dimension",
                self.kind(),
                other.kind()
            )));
        }
        Ok(self.multiply(other.scalar()))
    }

    /// Divide by a dimensionless quantity (same kind as `self`) or by a
    /// quantity of the same kind (a dimensionless ratio)
    pub fn divide_quantity<V: Unit>(&self, other: &Quantity<V>) -> Result<AnyQuantity, UnitError> {
        if other.kind() == Kind::Dimensionless {
            return Ok(self.divide(other.scalar())?.to_any());
        }
        if other.kind() == self.kind() {
            if other.scalar() == 0.0 {
                return Err(UnitError::DivisionByZero);
            }
            let ratio = self.scalar() / other.scalar();
            return Ok(Quantity::new(ratio, DimensionlessUnit::One).to_any());
        }
        Err(UnitError::unsupported(format!(
            "dividing {} by {} would create a new dimension",
            self.kind(),
            other.kind()
        )))
    }

    /// Ratio of two quantities of the same kind
    pub fn ratio(&self, other: &Self) -> Result<Quantity<DimensionlessUnit>, UnitError> {
        self.check_kind(other.kind())?;
        if other.scalar() == 0.0 {
            return Err(UnitError::DivisionByZero);
        }
        Ok(Quantity::new(self.scalar() / other.scalar(), DimensionlessUnit::One))
    }

    pub fn negate(&self) -> Self {
        Quantity { value: -self.value, ..*self }
    }

    /// Reciprocal units are not modelled
    pub fn inverse(&self) -> Result<Self, UnitError> {
        Err(UnitError::unsupported(format!("inverse of {}", self.kind())))
    }

    // ========== Comparison ==========

    /// Order by scalar
    pub fn compare(&self, other: &Self) -> Result<Ordering, UnitError> {
        self.check_kind(other.kind())?;
        self.scalar()
            .partial_cmp(&other.scalar())
            .ok_or_else(|| UnitError::unsupported("comparison with NaN"))
    }

    /// Same kind and the same scalar within a relative tolerance
    pub fn is_equivalent(&self, other: &Self) -> bool {
        if self.kind() != other.kind() {
            return false;
        }
        let (a, b) = (self.scalar(), other.scalar());
        (a - b).abs() <= EPSILON * a.abs().max(b.abs()).max(1.0)
    }

    fn check_kind(&self, found: Kind) -> Result<(), UnitError> {
        if self.kind() == found {
            Ok(())
        } else {
            Err(UnitError::kind_mismatch(self.kind(), found))
        }
    }

    // ========== Formatting ==========

    /// Render the value, optionally followed by the unit symbol
    pub fn to_string_with(&self, with_unit: bool, with_space: bool, precision: Option<usize>) -> String {
        let value = format_value(self.value, precision);
        let symbol = self.unit.symbol();
        if !with_unit || symbol.is_empty() {
            value
        } else if with_space {
            format!("{} {}", value, symbol)
        } else {
            format!("{}{}", value, symbol)
        }
    }

    /// Convert to `unit` and render it by symbol or by name
    pub fn show_in_unit(&self, unit: U, precision: Option<usize>, style: UnitStyle) -> Result<String, UnitError> {
        let converted = self.to(unit)?;
        let label = match style {
            UnitStyle::Symbol => unit.symbol(),
            UnitStyle::Name => unit.name(),
        };
        let value = format_value(converted.value, precision);
        if label.is_empty() {
            Ok(value)
        } else {
            Ok(format!("{} {}", value, label))
        }
    }
}

impl AnyQuantity {
    /// The statically typed quantity, if this is of `U`'s kind
    pub fn downcast<U: UnitEnum>(&self) -> Result<Quantity<U>, UnitError> {
        let unit = self.unit.downcast::<U>()?;
        Ok(Quantity { value: self.value, unit, scale: self.scale })
    }
}

/// Shortest round-trip form ("23.0") unless a precision is given
pub(crate) fn format_value(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{:.*}", p, value),
        None => format!("{:?}", value),
    }
}

impl<U: Unit> fmt::Display for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with(true, true, None))
    }
}
