//! Mixed-radix units such as `h:m:s` or `km:m`

use std::fmt;
use serde::{Serialize, Deserialize};
use gauge_core::{Scale, UnitError};
use crate::{Quantity, Unit, UnitConverter};

const SEPARATOR: &str = ":";

/// Two or more units of the same kind sharing one reference unit, largest first.
///
/// Serialized as the list of components; deserializing runs the same checks
/// as `new` and `mix`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<U>", into = "Vec<U>")]
pub struct MixedUnit<U: Unit> {
    units: Vec<U>,
}

impl<U: Unit> MixedUnit<U> {
    pub fn new(upper: U, lower: U) -> Result<Self, UnitError> {
        check_same_system(&upper, &lower)?;
        Ok(MixedUnit { units: vec![upper, lower] })
    }

    /// Append a further lower component
    pub fn mix(mut self, lower: U) -> Result<Self, UnitError> {
        if let Some(last) = self.units.last() {
            check_same_system(last, &lower)?;
        }
        self.units.push(lower);
        Ok(self)
    }

    pub fn units(&self) -> &[U] {
        &self.units
    }

    pub fn upper(&self) -> U {
        self.units[0]
    }

    pub fn lowest(&self) -> U {
        self.units[self.units.len() - 1]
    }

    pub fn symbol(&self) -> String {
        self.units.iter().map(|u| u.symbol()).collect::<Vec<_>>().join(SEPARATOR)
    }

    pub fn name(&self) -> String {
        self.units.iter().map(|u| u.name()).collect::<Vec<_>>().join(SEPARATOR)
    }

    pub fn system_unit(&self) -> U {
        self.lowest().system_unit()
    }

    /// Split a quantity across the components.
    ///
    /// Every component but the last receives a whole number; the last one
    /// takes the remainder. `3725 s` in `h:m:s` is `1 h, 2 m, 5.0 s`.
    /// Parts are absolute amounts, so their scalars sum to the input's.
    pub fn decompose(&self, quantity: &Quantity<U>) -> Result<Vec<Quantity<U>>, UnitError> {
        let kind = self.upper().kind();
        if quantity.kind() != kind {
            return Err(UnitError::kind_mismatch(kind, quantity.kind()));
        }
        if quantity.scale() == Scale::Relative {
            return Err(UnitError::unsupported(format!(
                "cannot decompose a relative {} reading into {}",
                quantity.unit().symbol(),
                self.symbol()
            )));
        }

        let mut remaining = quantity.scalar();
        let mut parts = Vec::with_capacity(self.units.len());
        let (last, leading) = match self.units.split_last() {
            Some(split) => split,
            None => return Ok(parts),
        };
        for unit in leading {
            let whole = whole_part(remaining / unit.factor());
            remaining -= whole * unit.factor();
            parts.push(Quantity::interval(whole, *unit));
        }
        parts.push(Quantity::interval(remaining / last.factor(), *last));
        Ok(parts)
    }
}

fn check_same_system<U: Unit>(upper: &U, lower: &U) -> Result<(), UnitError> {
    UnitConverter::ensure_convertible(upper)?;
    UnitConverter::ensure_convertible(lower)?;
    if upper.kind() != lower.kind() {
        return Err(UnitError::kind_mismatch(upper.kind(), lower.kind()));
    }
    if upper.system_unit() != lower.system_unit() {
        return Err(UnitError::InvalidMixedUnit(format!(
            "{} and {} do not share a system unit",
            upper.symbol(),
            lower.symbol()
        )));
    }
    Ok(())
}

// Truncate toward zero, treating values a hair under an integer as that integer
fn whole_part(value: f64) -> f64 {
    let rounded = value.round();
    if (value - rounded).abs() < 1e-9 {
        rounded
    } else {
        value.trunc()
    }
}

impl<U: Unit> TryFrom<Vec<U>> for MixedUnit<U> {
    type Error = UnitError;

    fn try_from(units: Vec<U>) -> Result<Self, UnitError> {
        let mut units = units.into_iter();
        match (units.next(), units.next()) {
            (Some(upper), Some(lower)) => units.try_fold(MixedUnit::new(upper, lower)?, MixedUnit::mix),
            _ => Err(UnitError::InvalidMixedUnit("a mixed unit needs at least two units".to_string())),
        }
    }
}

impl<U: Unit> From<MixedUnit<U>> for Vec<U> {
    fn from(mixed: MixedUnit<U>) -> Self {
        mixed.units
    }
}

impl<U: Unit> fmt::Display for MixedUnit<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
