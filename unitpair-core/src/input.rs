//! Numeric field input
//!
//! A field either holds a finite number or something the user typed that is
//! not one (including nothing at all).

use crate::ConvertError;
use serde::{Deserialize, Serialize};

/// Value delivered by a numeric input field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum NumericInput {
    Number(f64),
    Invalid,
}

impl NumericInput {
    /// Parse raw field text
    /// Accepts: "5", "-2.5", "1e3", ".5", " 42 "
    /// Rejects: "", "   ", "abc", "NaN", "inf"
    pub fn parse(raw: &str) -> Self {
        match Self::try_parse(raw) {
            Ok(n) => NumericInput::Number(n),
            Err(_) => NumericInput::Invalid,
        }
    }

    /// Parse raw field text, keeping the rejected text in the error
    pub fn try_parse(raw: &str) -> Result<f64, ConvertError> {
        let s = raw.trim();
        if s.is_empty() {
            return Err(ConvertError::invalid_input(raw));
        }
        match s.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(n),
            _ => Err(ConvertError::invalid_input(raw)),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            NumericInput::Number(n) => Some(*n),
            NumericInput::Invalid => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, NumericInput::Number(_))
    }
}

impl From<f64> for NumericInput {
    fn from(n: f64) -> Self {
        if n.is_finite() {
            NumericInput::Number(n)
        } else {
            NumericInput::Invalid
        }
    }
}

impl From<Option<f64>> for NumericInput {
    fn from(n: Option<f64>) -> Self {
        n.map_or(NumericInput::Invalid, NumericInput::from)
    }
}

impl From<&str> for NumericInput {
    fn from(raw: &str) -> Self {
        NumericInput::parse(raw)
    }
}
