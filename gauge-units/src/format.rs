//! Plain-text formatting and parsing of units and quantities
//!
//! The text form is `<number><space><symbol>`, for example `23.0 m` or
//! `0 °C`. A dimensionless quantity is just the number.

use gauge_core::{Kind, UnitError, UnitStyle, UnitsConfig};
use crate::quantity::format_value;
use crate::{AnyQuantity, AnyUnit, MixedUnit, Quantity, Unit, UnitEnum};

#[derive(Debug, Clone, Default)]
pub struct QuantityFormat {
    config: UnitsConfig,
}

impl QuantityFormat {
    pub fn new(config: UnitsConfig) -> Self {
        QuantityFormat { config }
    }

    pub fn config(&self) -> &UnitsConfig {
        &self.config
    }

    // ============ Formatting ============

    pub fn format_unit<U: Unit>(&self, unit: &U) -> String {
        match self.config.style {
            UnitStyle::Symbol => unit.symbol().to_string(),
            UnitStyle::Name => unit.name().to_string(),
        }
    }

    pub fn format_mixed<U: Unit>(&self, unit: &MixedUnit<U>) -> String {
        match self.config.style {
            UnitStyle::Symbol => unit.symbol(),
            UnitStyle::Name => unit.name(),
        }
    }

    pub fn format<U: Unit>(&self, quantity: &Quantity<U>) -> String {
        let value = format_value(quantity.value(), self.config.precision);
        if quantity.unit().symbol().is_empty() {
            return value;
        }
        let unit = self.format_unit(&quantity.unit());
        if self.config.with_space {
            format!("{} {}", value, unit)
        } else {
            format!("{}{}", value, unit)
        }
    }

    // ============ Parsing ============

    /// Resolve a symbol across every kind. Symbols shared by several kinds
    /// are rejected.
    pub fn parse_unit(&self, text: &str) -> Result<AnyUnit, UnitError> {
        AnyUnit::by_symbol(text)
    }

    /// Resolve a symbol within one kind, honouring the lookup policy
    pub fn parse_unit_as<U: UnitEnum>(&self, text: &str) -> Result<U, UnitError> {
        U::by_symbol(text, self.config.lookup)
    }

    pub fn parse_quantity(&self, text: &str) -> Result<AnyQuantity, UnitError> {
        let (value, symbol) = split_quantity(text)?;
        match symbol {
            Some(symbol) => Ok(Quantity::new(value, self.parse_unit(symbol)?)),
            None => Ok(Quantity::new(value, AnyUnit::system_unit_of(Kind::Dimensionless))),
        }
    }

    pub fn parse_quantity_as<U: UnitEnum>(&self, text: &str) -> Result<Quantity<U>, UnitError> {
        let (value, symbol) = split_quantity(text)?;
        match symbol {
            Some(symbol) => Ok(Quantity::new(value, self.parse_unit_as::<U>(symbol)?)),
            None => Err(UnitError::parse_error(format!("missing {} unit in '{}'", U::KIND, text.trim()))),
        }
    }
}

fn split_quantity(text: &str) -> Result<(f64, Option<&str>), UnitError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(UnitError::parse_error("empty quantity"));
    }
    let (number, symbol) = match text.split_once(char::is_whitespace) {
        Some((number, symbol)) => (number, Some(symbol.trim())),
        None => (text, None),
    };
    let value: f64 = number
        .parse()
        .map_err(|_| UnitError::parse_error(format!("invalid number '{}' in '{}'", number, text)))?;
    Ok((value, symbol.filter(|s| !s.is_empty())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauge_core::{LookupPolicy, Scale};
    use crate::units::{BitUnit, DimensionlessUnit, TemperatureUnit, TimeUnit};

    #[test]
    fn test_format_defaults() {
        let fmt = QuantityFormat::default();
        assert_eq!(fmt.format(&Quantity::new(23.0, TimeUnit::Minute)), "23.0 m");
        assert_eq!(fmt.format(&Quantity::new(25.0, TemperatureUnit::Kelvin)), "25.0 K");
        assert_eq!(fmt.format(&Quantity::new(3.0, DimensionlessUnit::One)), "3.0");
    }

    #[test]
    fn test_format_with_config() {
        let fmt = QuantityFormat::new(
            UnitsConfig::new().with_style(UnitStyle::Name).with_space(false).with_precision(2),
        );
        assert_eq!(fmt.format(&Quantity::new(1.5, TimeUnit::Hour)), "1.50HOUR");
        assert_eq!(fmt.format_unit(&BitUnit::GByte), "GB");
    }

    #[test]
    fn test_format_mixed() {
        let hms = TimeUnit::Hour.mix(TimeUnit::Minute).unwrap().mix(TimeUnit::Second).unwrap();
        assert_eq!(QuantityFormat::default().format_mixed(&hms), "h:m:s");
        let by_name = QuantityFormat::new(UnitsConfig::new().with_style(UnitStyle::Name));
        assert_eq!(by_name.format_mixed(&hms), "HOUR:MINUTE:SECOND");
    }

    #[test]
    fn test_parse_quantity() {
        let fmt = QuantityFormat::default();
        let q = fmt.parse_quantity("0 °C").unwrap();
        assert_eq!(q.unit(), AnyUnit::Temperature(TemperatureUnit::Celsius));
        assert_eq!(q.scale(), Scale::Relative);

        let q = fmt.parse_quantity("  2.5   km ").unwrap();
        assert_eq!(q.value(), 2.5);
        assert_eq!(q.kind(), Kind::Length);

        let q = fmt.parse_quantity("42").unwrap();
        assert_eq!(q.kind(), Kind::Dimensionless);
    }

    #[test]
    fn test_parse_quantity_errors() {
        let fmt = QuantityFormat::default();
        assert_eq!(fmt.parse_quantity("23 m").unwrap_err().code(), gauge_core::codes::AMBIGUOUS_SYMBOL);
        assert_eq!(fmt.parse_quantity("abc s").unwrap_err().code(), gauge_core::codes::PARSE_ERROR);
        assert_eq!(fmt.parse_quantity("").unwrap_err().code(), gauge_core::codes::PARSE_ERROR);
        assert_eq!(fmt.parse_quantity("1 parsec").unwrap_err().code(), gauge_core::codes::UNKNOWN_SYMBOL);
    }

    #[test]
    fn test_parse_quantity_as() {
        let fmt = QuantityFormat::default();
        let q: Quantity<TimeUnit> = fmt.parse_quantity_as("23 m").unwrap();
        assert_eq!(q.unit(), TimeUnit::Minute);
        assert_eq!(format!("{}", q), "23.0 m");
        assert!(fmt.parse_quantity_as::<TimeUnit>("23").is_err());
        assert!(fmt.parse_quantity_as::<TimeUnit>("23 fortnight").is_err());
    }

    #[test]
    fn test_parse_unit_fallback() {
        let fmt = QuantityFormat::new(UnitsConfig::new().with_lookup(LookupPolicy::Fallback));
        assert_eq!(fmt.parse_unit_as::<TimeUnit>("fortnight").unwrap(), TimeUnit::Second);
        let strict = QuantityFormat::default();
        assert!(strict.parse_unit_as::<TimeUnit>("fortnight").is_err());
    }

    #[test]
    fn test_format_parse_agree() {
        let fmt = QuantityFormat::default();
        let q = Quantity::new(12.0, BitUnit::KByte);
        let back: Quantity<BitUnit> = fmt.parse_quantity_as(&fmt.format(&q)).unwrap();
        assert_eq!(back, q);
    }
}
