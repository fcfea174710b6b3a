//! Conversion errors
//!
//! Selection errors are expected and swallowed by the controller, numeric
//! input errors clear the dependent field, and a missing rule is a table
//! defect that must reach the caller.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const RULE_NOT_FOUND: &str = "RULE_NOT_FOUND";
    pub const INVALID_NUMERIC_INPUT: &str = "INVALID_NUMERIC_INPUT";
}

/// How the widget reacts to an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The event is dropped or the dependent field is cleared
    Recoverable,
    /// The conversion table is broken
    Fatal,
}

/// Error type for registry lookups and controller transitions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown unit '{unit}' in category '{category}'")]
    UnknownUnit { category: String, unit: String },

    #[error("No conversion rule from '{from}' to '{to}' in category '{category}'")]
    RuleNotFound {
        category: String,
        from: String,
        to: String,
    },

    #[error("Invalid numeric input: '{0}'")]
    InvalidNumericInput(String),
}

impl ConvertError {
    pub fn unknown_category(id: impl Into<String>) -> Self {
        Self::UnknownCategory(id.into())
    }

    pub fn unknown_unit(category: impl Into<String>, unit: impl Into<String>) -> Self {
        Self::UnknownUnit {
            category: category.into(),
            unit: unit.into(),
        }
    }

    pub fn rule_not_found(
        category: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self::RuleNotFound {
            category: category.into(),
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn invalid_input(raw: impl Into<String>) -> Self {
        Self::InvalidNumericInput(raw.into())
    }

    /// Machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownCategory(_) => codes::UNKNOWN_CATEGORY,
            Self::UnknownUnit { .. } => codes::UNKNOWN_UNIT,
            Self::RuleNotFound { .. } => codes::RULE_NOT_FOUND,
            Self::InvalidNumericInput(_) => codes::INVALID_NUMERIC_INPUT,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::RuleNotFound { .. } => Severity::Fatal,
            _ => Severity::Recoverable,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }

    /// Suggestion for fixing the error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::UnknownCategory(_) => Some("Offer only ids returned by list_categories()"),
            Self::UnknownUnit { .. } => Some("Offer only ids returned by list_units()"),
            Self::RuleNotFound { .. } => {
                Some("Add the missing pair to the conversion table; this is a bug")
            }
            Self::InvalidNumericInput(_) => None,
        }
    }

    /// Structured form for presentation layers
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code().to_string(),
            message: self.to_string(),
            suggestion: self.suggestion().map(str::to_string),
            severity: self.severity(),
        }
    }
}

/// Serializable view of a [`ConvertError`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    pub severity: Severity,
}
