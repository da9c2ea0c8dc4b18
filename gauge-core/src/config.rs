//! Lookup and formatting configuration

use serde::{Deserialize, Serialize};
use crate::UnitError;

/// What to do when a unit symbol is not recognised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupPolicy {
    /// Fail with `UnitError::UnknownSymbol`
    #[default]
    Strict,
    /// Return the kind's reference unit. Masks typos.
    Fallback,
}

impl LookupPolicy {
    pub fn from_name(name: &str) -> Result<Self, UnitError> {
        match name.trim().to_lowercase().as_str() {
            "strict" => Ok(LookupPolicy::Strict),
            "fallback" => Ok(LookupPolicy::Fallback),
            other => Err(UnitError::Config(format!(
                "unknown lookup policy '{}', expected 'strict' or 'fallback'", other
            ))),
        }
    }
}

/// Whether units are rendered by symbol or by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitStyle {
    #[default]
    Symbol,
    Name,
}

/// Configuration for symbol lookup and quantity formatting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitsConfig {
    pub lookup: LookupPolicy,
    pub style: UnitStyle,
    /// Put a space between the value and the unit
    pub with_space: bool,
    /// Decimal places; `None` renders the shortest round-trip form ("23.0")
    pub precision: Option<usize>,
}

impl Default for UnitsConfig {
    fn default() -> Self {
        Self {
            lookup: LookupPolicy::Strict,
            style: UnitStyle::Symbol,
            with_space: true,
            precision: None,
        }
    }
}

impl UnitsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a JSON document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, UnitError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_lookup(mut self, lookup: LookupPolicy) -> Self {
        self.lookup = lookup;
        self
    }

    pub fn with_style(mut self, style: UnitStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_space(mut self, with_space: bool) -> Self {
        self.with_space = with_space;
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }
}
