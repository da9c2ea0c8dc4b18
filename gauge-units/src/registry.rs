//! Default unit per kind
//!
//! `QuantityRegistry` is an ordinary value: build one at startup and pass it
//! to whatever creates quantities. Entries are filled in lazily from each
//! kind's reference unit unless a default was set explicitly.

use std::collections::HashMap;
use std::sync::RwLock;
use gauge_core::{Kind, UnitError};
use crate::{AnyQuantity, AnyUnit, Quantity, Unit, UnitEnum};

#[derive(Debug, Default)]
pub struct QuantityRegistry {
    defaults: RwLock<HashMap<Kind, AnyUnit>>,
}

impl QuantityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `unit` as the default for `kind` instead of the reference unit
    pub fn with_default(self, kind: Kind, unit: AnyUnit) -> Result<Self, UnitError> {
        unit.as_type(kind)?;
        {
            let mut defaults = self.defaults.write().unwrap_or_else(|e| e.into_inner());
            defaults.insert(kind, unit);
        }
        Ok(self)
    }

    /// Default ("metric") unit for a kind
    pub fn metric_unit(&self, kind: Kind) -> AnyUnit {
        // Try read lock first
        if let Ok(defaults) = self.defaults.read() {
            if let Some(unit) = defaults.get(&kind) {
                return *unit;
            }
        }

        let unit = AnyUnit::system_unit_of(kind);
        tracing::debug!(%kind, unit = unit.symbol(), "populating default unit");

        // Racing writers all insert the same reference unit; keep whichever landed first
        match self.defaults.write() {
            Ok(mut defaults) => *defaults.entry(kind).or_insert(unit),
            Err(_) => unit,
        }
    }

    pub fn create(&self, value: f64, unit: AnyUnit) -> AnyQuantity {
        Quantity::new(value, unit)
    }

    /// Quantity of `kind` in its default unit
    pub fn create_default(&self, kind: Kind, value: f64) -> AnyQuantity {
        Quantity::new(value, self.metric_unit(kind))
    }

    /// Statically typed quantity in `U`'s default unit
    pub fn create_typed<U: UnitEnum>(&self, value: f64) -> Result<Quantity<U>, UnitError> {
        let unit = self.metric_unit(U::KIND).downcast::<U>()?;
        Ok(Quantity::new(value, unit))
    }

    /// Kinds with a default unit resolved so far, in `Kind` order
    pub fn kinds(&self) -> Vec<Kind> {
        let mut kinds: Vec<Kind> = match self.defaults.read() {
            Ok(defaults) => defaults.keys().copied().collect(),
            Err(_) => Vec::new(),
        };
        kinds.sort();
        kinds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use crate::units::{DistanceUnit, TemperatureUnit, TimeUnit};

    #[test]
    fn test_lazy_population() {
        let registry = QuantityRegistry::new();
        assert!(registry.kinds().is_empty());
        assert_eq!(registry.metric_unit(Kind::Time), AnyUnit::Time(TimeUnit::Second));
        assert_eq!(registry.kinds(), vec![Kind::Time]);
        registry.metric_unit(Kind::Length);
        assert_eq!(registry.kinds(), vec![Kind::Length, Kind::Time]);
    }

    #[test]
    fn test_with_default() {
        let registry = QuantityRegistry::new()
            .with_default(Kind::Temperature, AnyUnit::Temperature(TemperatureUnit::Celsius))
            .unwrap();
        assert_eq!(registry.metric_unit(Kind::Temperature), AnyUnit::Temperature(TemperatureUnit::Celsius));

        let q = registry.create_default(Kind::Temperature, 21.0);
        assert_eq!(format!("{}", q), "21.0 °C");
    }

    #[test]
    fn test_with_default_wrong_kind() {
        let err = QuantityRegistry::new()
            .with_default(Kind::Time, AnyUnit::Length(DistanceUnit::Metre))
            .unwrap_err();
        assert_eq!(err, UnitError::kind_mismatch(Kind::Time, Kind::Length));
    }

    #[test]
    fn test_create() {
        let registry = QuantityRegistry::new();
        let q = registry.create(2.0, AnyUnit::Length(DistanceUnit::Kilometre));
        assert_eq!(q.kind(), Kind::Length);
        let typed: Quantity<DistanceUnit> = registry.create_typed(5.0).unwrap();
        assert_eq!(typed.unit(), DistanceUnit::Metre);
    }

    #[test]
    fn test_concurrent_first_access() {
        let registry = Arc::new(QuantityRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || Kind::ALL.iter().map(|k| registry.metric_unit(*k)).collect::<Vec<_>>())
            })
            .collect();
        let results: Vec<Vec<AnyUnit>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for units in &results {
            assert_eq!(units, &results[0]);
        }
        assert_eq!(registry.kinds().len(), Kind::ALL.len());
    }
}
