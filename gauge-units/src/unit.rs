//! Unit traits and the runtime-tagged `AnyUnit`
//!
//! Every kind has a closed enum of units backed by a static table of
//! `UnitDef` rows. `AnyUnit` wraps any of them when the kind is only known
//! at runtime (parsing, registry lookups).

use std::fmt;
use serde::{Serialize, Deserialize};
use gauge_core::{Kind, LookupPolicy, Scale, UnitError};
use crate::{MixedUnit, UnitConverter};
use crate::units::{
    BitRateUnit, BitUnit, DimensionlessUnit, DistanceUnit, ShirtSizeUnit, TemperatureUnit, TimeUnit,
};

/// One row of a unit table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDef {
    pub symbol: &'static str,
    /// Constant name, e.g. "MINUTE"
    pub name: &'static str,
    pub description: &'static str,
    /// Multiplier to the kind's reference unit
    pub factor: f64,
    /// Added to a reading before scaling (affine units only)
    pub offset: f64,
}

impl UnitDef {
    pub const fn linear(symbol: &'static str, name: &'static str, description: &'static str, factor: f64) -> Self {
        UnitDef { symbol, name, description, factor, offset: 0.0 }
    }

    pub const fn affine(
        symbol: &'static str,
        name: &'static str,
        description: &'static str,
        factor: f64,
        offset: f64,
    ) -> Self {
        UnitDef { symbol, name, description, factor, offset }
    }
}

/// A unit of measurement belonging to exactly one kind
pub trait Unit: Copy + PartialEq + fmt::Debug + fmt::Display + Send + Sync + 'static {
    fn kind(&self) -> Kind;
    fn symbol(&self) -> &'static str;
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    /// Multiplicative ratio to the reference unit (MINUTE is 60 when SECOND is the reference)
    fn factor(&self) -> f64;
    fn offset(&self) -> f64 {
        0.0
    }
    /// The kind's reference unit
    fn system_unit(&self) -> Self;
    fn to_any(&self) -> AnyUnit;

    fn is_system_unit(&self) -> bool {
        *self == self.system_unit()
    }

    /// Scale a freshly constructed quantity gets in this unit
    fn default_scale(&self) -> Scale {
        if self.offset() == 0.0 {
            Scale::Absolute
        } else {
            Scale::Relative
        }
    }

    fn is_compatible<V: Unit>(&self, that: &V) -> bool {
        self.kind() == that.kind()
    }

    /// Check this unit is of the given kind
    fn as_type(&self, kind: Kind) -> Result<Self, UnitError> {
        if self.kind() == kind {
            Ok(*self)
        } else {
            Err(UnitError::kind_mismatch(kind, self.kind()))
        }
    }

    /// Converter for absolute readings from this unit to `that`
    fn converter_to(&self, that: &Self) -> Result<UnitConverter, UnitError> {
        UnitConverter::between(self, that, true)
    }

    /// Mixed unit with `self` as the upper and `lower` as the lower component
    fn mix(&self, lower: Self) -> Result<MixedUnit<Self>, UnitError> {
        MixedUnit::new(*self, lower)
    }
}

/// A closed, statically known set of units of one kind
pub trait UnitEnum: Unit {
    const KIND: Kind;
    const CASE_SENSITIVE: bool;

    /// All units, in declaration order
    fn values() -> &'static [Self];

    fn reference() -> Self;

    fn from_any(any: AnyUnit) -> Option<Self>;

    /// Find a unit by symbol or constant name.
    ///
    /// With `LookupPolicy::Fallback` an unknown symbol resolves to the
    /// reference unit instead of failing.
    fn by_symbol(symbol: &str, policy: LookupPolicy) -> Result<Self, UnitError> {
        let symbol = symbol.trim();
        let matches = |candidate: &str| {
            if Self::CASE_SENSITIVE {
                candidate == symbol
            } else {
                candidate.eq_ignore_ascii_case(symbol)
            }
        };

        if let Some(unit) = Self::values().iter().find(|u| matches(u.symbol())) {
            return Ok(*unit);
        }
        if let Some(unit) = Self::values().iter().find(|u| matches(u.name())) {
            return Ok(*unit);
        }

        match policy {
            LookupPolicy::Strict => Err(UnitError::unknown_symbol(symbol, Some(Self::KIND))),
            LookupPolicy::Fallback => {
                let reference = Self::reference();
                tracing::debug!(symbol, kind = %Self::KIND, fallback = reference.symbol(), "unknown symbol, using reference unit");
                Ok(reference)
            }
        }
    }
}

/// Implements `Unit`, `UnitEnum`, `Display` and `From<_> for AnyUnit` for a
/// unit enum whose discriminants index `$table`.
macro_rules! unit_enum {
    ($enum:ident, $kind:expr, $table:ident, $any:ident, reference = $reference:ident, case_sensitive = $cs:expr) => {
        impl $enum {
            fn def(&self) -> &'static $crate::unit::UnitDef {
                &$table[*self as usize]
            }
        }

        impl $crate::Unit for $enum {
            fn kind(&self) -> gauge_core::Kind {
                $kind
            }

            fn symbol(&self) -> &'static str {
                self.def().symbol
            }

            fn name(&self) -> &'static str {
                self.def().name
            }

            fn description(&self) -> &'static str {
                self.def().description
            }

            fn factor(&self) -> f64 {
                self.def().factor
            }

            fn offset(&self) -> f64 {
                self.def().offset
            }

            fn system_unit(&self) -> Self {
                $enum::$reference
            }

            fn to_any(&self) -> $crate::AnyUnit {
                $crate::AnyUnit::$any(*self)
            }
        }

        impl $crate::UnitEnum for $enum {
            const KIND: gauge_core::Kind = $kind;
            const CASE_SENSITIVE: bool = $cs;

            fn values() -> &'static [Self] {
                const VALUES: &[$enum] = &$enum::ALL;
                VALUES
            }

            fn reference() -> Self {
                $enum::$reference
            }

            fn from_any(any: $crate::AnyUnit) -> Option<Self> {
                match any {
                    $crate::AnyUnit::$any(unit) => Some(unit),
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $enum {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.def().symbol)
            }
        }

        impl From<$enum> for $crate::AnyUnit {
            fn from(unit: $enum) -> Self {
                $crate::AnyUnit::$any(unit)
            }
        }
    };
}

/// A unit of any kind, tagged at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnyUnit {
    Dimensionless(DimensionlessUnit),
    Length(DistanceUnit),
    Time(TimeUnit),
    Temperature(TemperatureUnit),
    Information(BitUnit),
    InformationRate(BitRateUnit),
    ShirtSize(ShirtSizeUnit),
}

macro_rules! delegate {
    ($self:ident, $unit:ident => $body:expr) => {
        match $self {
            AnyUnit::Dimensionless($unit) => $body,
            AnyUnit::Length($unit) => $body,
            AnyUnit::Time($unit) => $body,
            AnyUnit::Temperature($unit) => $body,
            AnyUnit::Information($unit) => $body,
            AnyUnit::InformationRate($unit) => $body,
            AnyUnit::ShirtSize($unit) => $body,
        }
    };
}

impl AnyUnit {
    /// Every known unit, kinds in `Kind::ALL` order, units in declaration order
    pub fn all() -> Vec<AnyUnit> {
        Kind::ALL.iter().flat_map(|kind| AnyUnit::units_of(*kind)).collect()
    }

    /// Units of one kind, in declaration order
    pub fn units_of(kind: Kind) -> Vec<AnyUnit> {
        fn collect<U: UnitEnum>() -> Vec<AnyUnit> {
            U::values().iter().map(|u| u.to_any()).collect()
        }
        match kind {
            Kind::Dimensionless => collect::<DimensionlessUnit>(),
            Kind::Length => collect::<DistanceUnit>(),
            Kind::Time => collect::<TimeUnit>(),
            Kind::Temperature => collect::<TemperatureUnit>(),
            Kind::Information => collect::<BitUnit>(),
            Kind::InformationRate => collect::<BitRateUnit>(),
            Kind::ShirtSize => collect::<ShirtSizeUnit>(),
        }
    }

    /// Reference unit of a kind
    pub fn system_unit_of(kind: Kind) -> AnyUnit {
        match kind {
            Kind::Dimensionless => DimensionlessUnit::reference().to_any(),
            Kind::Length => DistanceUnit::reference().to_any(),
            Kind::Time => TimeUnit::reference().to_any(),
            Kind::Temperature => TemperatureUnit::reference().to_any(),
            Kind::Information => BitUnit::reference().to_any(),
            Kind::InformationRate => BitRateUnit::reference().to_any(),
            Kind::ShirtSize => ShirtSizeUnit::reference().to_any(),
        }
    }

    /// Find a unit by symbol within one kind
    pub fn by_symbol_in(kind: Kind, symbol: &str, policy: LookupPolicy) -> Result<AnyUnit, UnitError> {
        match kind {
            Kind::Dimensionless => DimensionlessUnit::by_symbol(symbol, policy).map(AnyUnit::from),
            Kind::Length => DistanceUnit::by_symbol(symbol, policy).map(AnyUnit::from),
            Kind::Time => TimeUnit::by_symbol(symbol, policy).map(AnyUnit::from),
            Kind::Temperature => TemperatureUnit::by_symbol(symbol, policy).map(AnyUnit::from),
            Kind::Information => BitUnit::by_symbol(symbol, policy).map(AnyUnit::from),
            Kind::InformationRate => BitRateUnit::by_symbol(symbol, policy).map(AnyUnit::from),
            Kind::ShirtSize => ShirtSizeUnit::by_symbol(symbol, policy).map(AnyUnit::from),
        }
    }

    /// Find a unit by symbol across all kinds.
    ///
    /// Exact symbol matches win over constant-name matches. A symbol shared
    /// by several kinds ("m" is both MINUTE and METRE) fails with
    /// `AmbiguousSymbol` rather than picking one.
    pub fn by_symbol(symbol: &str) -> Result<AnyUnit, UnitError> {
        let symbol = symbol.trim();
        let by_symbol: Vec<AnyUnit> = Kind::ALL
            .iter()
            .filter_map(|kind| AnyUnit::by_symbol_in(*kind, symbol, LookupPolicy::Strict).ok())
            .collect();

        let exact: Vec<AnyUnit> = by_symbol.iter().copied().filter(|u| u.symbol() == symbol).collect();
        let candidates = if exact.is_empty() { by_symbol } else { exact };

        match candidates.as_slice() {
            [] => Err(UnitError::unknown_symbol(symbol, None)),
            [unit] => Ok(*unit),
            many => Err(UnitError::AmbiguousSymbol {
                symbol: symbol.to_string(),
                kinds: many.iter().map(|u| u.kind()).collect(),
            }),
        }
    }

    /// The concrete unit, if this is of `U`'s kind
    pub fn downcast<U: UnitEnum>(&self) -> Result<U, UnitError> {
        U::from_any(*self).ok_or_else(|| UnitError::kind_mismatch(U::KIND, self.kind()))
    }
}

impl Unit for AnyUnit {
    fn kind(&self) -> Kind {
        delegate!(self, unit => unit.kind())
    }

    fn symbol(&self) -> &'static str {
        delegate!(self, unit => unit.symbol())
    }

    fn name(&self) -> &'static str {
        delegate!(self, unit => unit.name())
    }

    fn description(&self) -> &'static str {
        delegate!(self, unit => unit.description())
    }

    fn factor(&self) -> f64 {
        delegate!(self, unit => unit.factor())
    }

    fn offset(&self) -> f64 {
        delegate!(self, unit => unit.offset())
    }

    fn system_unit(&self) -> Self {
        delegate!(self, unit => unit.system_unit().to_any())
    }

    fn to_any(&self) -> AnyUnit {
        *self
    }
}

impl fmt::Display for AnyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_and_symbol() {
        assert_eq!(TimeUnit::Minute.factor(), 60.0);
        assert_eq!(TimeUnit::Hour.symbol(), "h");
        assert_eq!(TimeUnit::Minute.name(), "MINUTE");
        assert_eq!(format!("{}", TimeUnit::Minute), "m");
    }

    #[test]
    fn test_system_unit() {
        assert_eq!(TimeUnit::Hour.system_unit(), TimeUnit::Second);
        assert!(TimeUnit::Second.is_system_unit());
        assert!(!TimeUnit::Hour.is_system_unit());
        assert_eq!(AnyUnit::from(TemperatureUnit::Celsius).system_unit(), AnyUnit::Temperature(TemperatureUnit::Kelvin));
    }

    #[test]
    fn test_every_kind_has_one_reference_unit() {
        for kind in Kind::ALL {
            let references: Vec<AnyUnit> = AnyUnit::units_of(kind)
                .into_iter()
                .filter(|u| u.is_system_unit())
                .collect();
            assert_eq!(references.len(), 1, "{}", kind);
            assert_eq!(references[0].factor(), 1.0);
            assert_eq!(references[0].offset(), 0.0);
            assert_eq!(references[0], AnyUnit::system_unit_of(kind));
        }
    }

    #[test]
    fn test_as_type() {
        assert_eq!(TimeUnit::Hour.as_type(Kind::Time).unwrap(), TimeUnit::Hour);
        let err = DistanceUnit::Metre.as_type(Kind::Time).unwrap_err();
        assert_eq!(err, UnitError::kind_mismatch(Kind::Time, Kind::Length));
    }

    #[test]
    fn test_is_compatible() {
        assert!(TimeUnit::Hour.is_compatible(&TimeUnit::Second));
        assert!(!TimeUnit::Hour.is_compatible(&DistanceUnit::Metre));
        assert!(TimeUnit::Hour.is_compatible(&AnyUnit::Time(TimeUnit::Minute)));
    }

    #[test]
    fn test_default_scale() {
        assert_eq!(TemperatureUnit::Kelvin.default_scale(), Scale::Absolute);
        assert_eq!(TemperatureUnit::Celsius.default_scale(), Scale::Relative);
        assert_eq!(TimeUnit::Minute.default_scale(), Scale::Absolute);
    }

    #[test]
    fn test_by_symbol_strict() {
        assert_eq!(TimeUnit::by_symbol("h", LookupPolicy::Strict).unwrap(), TimeUnit::Hour);
        assert_eq!(TimeUnit::by_symbol("MINUTE", LookupPolicy::Strict).unwrap(), TimeUnit::Minute);
        let err = TimeUnit::by_symbol("hr", LookupPolicy::Strict).unwrap_err();
        assert_eq!(err, UnitError::unknown_symbol("hr", Some(Kind::Time)));
    }

    #[test]
    fn test_by_symbol_fallback() {
        assert_eq!(TimeUnit::by_symbol("hr", LookupPolicy::Fallback).unwrap(), TimeUnit::Second);
    }

    #[test]
    fn test_by_symbol_case_sensitivity() {
        // Information symbols distinguish bits from bytes by case
        assert_eq!(BitUnit::by_symbol("kb", LookupPolicy::Strict).unwrap(), BitUnit::Kb);
        assert_eq!(BitUnit::by_symbol("KB", LookupPolicy::Strict).unwrap(), BitUnit::KByte);
        // Rates do not
        assert_eq!(BitRateUnit::by_symbol("mbps", LookupPolicy::Strict).unwrap(), BitRateUnit::Mbps);
    }

    #[test]
    fn test_any_by_symbol_ambiguous() {
        let err = AnyUnit::by_symbol("m").unwrap_err();
        match err {
            UnitError::AmbiguousSymbol { symbol, kinds } => {
                assert_eq!(symbol, "m");
                assert_eq!(kinds, vec![Kind::Length, Kind::Time]);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_any_by_symbol() {
        assert_eq!(AnyUnit::by_symbol("km").unwrap(), AnyUnit::Length(DistanceUnit::Kilometre));
        assert_eq!(AnyUnit::by_symbol("°C").unwrap(), AnyUnit::Temperature(TemperatureUnit::Celsius));
        assert!(AnyUnit::by_symbol("furlong").is_err());
        assert_eq!(
            AnyUnit::by_symbol_in(Kind::Time, "m", LookupPolicy::Strict).unwrap(),
            AnyUnit::Time(TimeUnit::Minute)
        );
    }

    #[test]
    fn test_downcast() {
        let any = AnyUnit::Time(TimeUnit::Hour);
        assert_eq!(any.downcast::<TimeUnit>().unwrap(), TimeUnit::Hour);
        assert_eq!(
            any.downcast::<TemperatureUnit>().unwrap_err(),
            UnitError::kind_mismatch(Kind::Temperature, Kind::Time)
        );
    }

    #[test]
    fn test_all_units_listed() {
        let all = AnyUnit::all();
        assert!(all.contains(&AnyUnit::Information(BitUnit::GByte)));
        assert!(all.contains(&AnyUnit::ShirtSize(ShirtSizeUnit::Sml)));
        assert_eq!(all.len(), Kind::ALL.iter().map(|k| AnyUnit::units_of(*k).len()).sum::<usize>());
    }
}
