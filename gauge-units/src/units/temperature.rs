//! Temperature units, referenced to the kelvin
//!
//! Celsius and Fahrenheit are affine: a reading converts to kelvin as
//! `(value + offset) * factor`.

use serde::{Serialize, Deserialize};
use gauge_core::Kind;
use crate::unit::UnitDef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
    Rankine,
}

static TABLE: [UnitDef; 4] = [
    UnitDef::linear("K", "KELVIN", "Kelvin", 1.0),
    UnitDef::affine("°C", "CELSIUS", "Celsius", 1.0, 273.15),
    UnitDef::affine("°F", "FAHRENHEIT", "Fahrenheit", 5.0 / 9.0, 459.67),
    UnitDef::linear("°R", "RANKINE", "Rankine", 5.0 / 9.0),
];

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 4] = [
        TemperatureUnit::Kelvin,
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Rankine,
    ];
}

unit_enum!(TemperatureUnit, Kind::Temperature, TABLE, Temperature, reference = Kelvin, case_sensitive = true);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Unit, UnitConverter};
    use gauge_core::Scale;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_offsets() {
        assert_eq!(TemperatureUnit::Kelvin.offset(), 0.0);
        assert_eq!(TemperatureUnit::Celsius.offset(), 273.15);
        assert_eq!(TemperatureUnit::Rankine.default_scale(), Scale::Absolute);
        assert_eq!(TemperatureUnit::Fahrenheit.default_scale(), Scale::Relative);
    }

    #[test]
    fn test_freezing_point() {
        let f = UnitConverter::between(&TemperatureUnit::Fahrenheit, &TemperatureUnit::Kelvin, true).unwrap();
        assert!(close(f.convert(32.0), 273.15));
        let r = UnitConverter::between(&TemperatureUnit::Rankine, &TemperatureUnit::Kelvin, true).unwrap();
        assert!(close(r.convert(491.67), 273.15));
    }

    #[test]
    fn test_symbol_display() {
        assert_eq!(format!("{}", TemperatureUnit::Celsius), "°C");
        assert_eq!(format!("{}", TemperatureUnit::Kelvin), "K");
    }
}
