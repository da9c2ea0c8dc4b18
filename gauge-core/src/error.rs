//! Structured errors for conversion and quantity arithmetic
//!
//! Every failure is reported to the caller as a value. Nothing in Gauge
//! returns a placeholder result in place of an error.

use crate::Kind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const KIND_MISMATCH: &str = "KIND_MISMATCH";
    pub const UNCONVERTIBLE: &str = "UNCONVERTIBLE";
    pub const UNKNOWN_SYMBOL: &str = "UNKNOWN_SYMBOL";
    pub const AMBIGUOUS_SYMBOL: &str = "AMBIGUOUS_SYMBOL";
    pub const UNSUPPORTED: &str = "UNSUPPORTED";
    pub const DIVISION_BY_ZERO: &str = "DIVISION_BY_ZERO";
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const INVALID_MIXED_UNIT: &str = "INVALID_MIXED_UNIT";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
}

/// Error type for unit lookup, conversion and quantity arithmetic
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum UnitError {
    /// Units or quantities of different kinds were combined
    #[error("kind mismatch: expected {expected}, found {found}")]
    KindMismatch { expected: Kind, found: Kind },

    /// No conversion path exists between two units
    #[error("cannot convert {from} to {to}")]
    Unconvertible { from: String, to: String },

    /// A symbol did not match any unit
    #[error("unknown unit symbol '{symbol}'{}", .kind.map(|k| format!(" for {}", k)).unwrap_or_default())]
    UnknownSymbol { symbol: String, kind: Option<Kind> },

    /// A symbol matched units of more than one kind
    #[error("ambiguous unit symbol '{symbol}': matches {}", join_kinds(.kinds))]
    AmbiguousSymbol { symbol: String, kinds: Vec<Kind> },

    /// The operation is deliberately not implemented
    #[error("unsupported operation: {0}")]
    Unsupported(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid mixed unit: {0}")]
    InvalidMixedUnit(String),

    #[error("configuration error: {0}")]
    Config(String),
}

fn join_kinds(kinds: &[Kind]) -> String {
    kinds.iter().map(|k| k.name()).collect::<Vec<_>>().join(", ")
}

impl UnitError {
    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            UnitError::KindMismatch { .. } => codes::KIND_MISMATCH,
            UnitError::Unconvertible { .. } => codes::UNCONVERTIBLE,
            UnitError::UnknownSymbol { .. } => codes::UNKNOWN_SYMBOL,
            UnitError::AmbiguousSymbol { .. } => codes::AMBIGUOUS_SYMBOL,
            UnitError::Unsupported(_) => codes::UNSUPPORTED,
            UnitError::DivisionByZero => codes::DIVISION_BY_ZERO,
            UnitError::Parse(_) => codes::PARSE_ERROR,
            UnitError::InvalidMixedUnit(_) => codes::INVALID_MIXED_UNIT,
            UnitError::Config(_) => codes::CONFIG_ERROR,
        }
    }

    // ========== Common Error Constructors ==========

    pub fn kind_mismatch(expected: Kind, found: Kind) -> Self {
        UnitError::KindMismatch { expected, found }
    }

    pub fn unconvertible(from: impl Into<String>, to: impl Into<String>) -> Self {
        UnitError::Unconvertible { from: from.into(), to: to.into() }
    }

    pub fn unknown_symbol(symbol: &str, kind: Option<Kind>) -> Self {
        UnitError::UnknownSymbol { symbol: symbol.to_string(), kind }
    }

    pub fn unsupported(details: impl Into<String>) -> Self {
        UnitError::Unsupported(details.into())
    }

    pub fn parse_error(details: impl Into<String>) -> Self {
        UnitError::Parse(details.into())
    }
}

impl From<serde_json::Error> for UnitError {
    fn from(err: serde_json::Error) -> Self {
        UnitError::Config(err.to_string())
    }
}
