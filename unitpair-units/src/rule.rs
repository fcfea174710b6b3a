//! Directed conversion rules

use serde::{Deserialize, Serialize};
use unitpair_core::format_magnitude;

const APPROXIMATE_PREFIX: &str = "for an approximate result, ";

/// Arithmetic applied to the input magnitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "factor", rename_all = "lowercase")]
pub enum Operation {
    Identity,
    Multiply(f64),
    Divide(f64),
}

impl Operation {
    pub fn apply(&self, n: f64) -> f64 {
        match self {
            Operation::Identity => n,
            Operation::Multiply(factor) => n * factor,
            Operation::Divide(factor) => n / factor,
        }
    }

    /// The operation for the opposite direction
    pub fn inverse(&self) -> Operation {
        match self {
            Operation::Identity => Operation::Identity,
            Operation::Multiply(factor) => Operation::Divide(*factor),
            Operation::Divide(factor) => Operation::Multiply(*factor),
        }
    }
}

/// A directed conversion with its human-readable description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRule {
    /// Display text, e.g. "multiply the length value by 1000"
    pub formula: String,
    pub operation: Operation,
    /// Calibration-approximate formula; not expected to round-trip
    pub approximate: bool,
}

impl ConversionRule {
    /// Build a rule, generating the formula text from the operation.
    /// `quantity` is the word used in the text ("length", "area", ...).
    pub fn new(quantity: &str, operation: Operation, approximate: bool) -> Self {
        let body = match operation {
            Operation::Identity => format!("the {} value is unchanged", quantity),
            Operation::Multiply(factor) => format!(
                "multiply the {} value by {}",
                quantity,
                format_magnitude(factor)
            ),
            Operation::Divide(factor) => format!(
                "divide the {} value by {}",
                quantity,
                format_magnitude(factor)
            ),
        };
        let formula = if approximate {
            format!("{}{}", APPROXIMATE_PREFIX, body)
        } else {
            body
        };
        ConversionRule {
            formula,
            operation,
            approximate,
        }
    }

    pub fn identity(quantity: &str) -> Self {
        Self::new(quantity, Operation::Identity, false)
    }

    pub fn calculate(&self, n: f64) -> f64 {
        self.operation.apply(n)
    }

    /// The rule for the opposite direction
    pub fn inverse(&self, quantity: &str) -> Self {
        Self::new(quantity, self.operation.inverse(), self.approximate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formula_text() {
        let rule = ConversionRule::new("length", Operation::Multiply(1000.0), false);
        assert_eq!(rule.formula, "multiply the length value by 1000");

        let rule = ConversionRule::new("area", Operation::Divide(2.59), true);
        assert_eq!(
            rule.formula,
            "for an approximate result, divide the area value by 2.59"
        );
    }

    #[test]
    fn test_calculate() {
        let rule = ConversionRule::new("length", Operation::Multiply(1000.0), false);
        assert_eq!(rule.calculate(5.0), 5000.0);

        let rule = ConversionRule::new("time", Operation::Divide(3600.0), false);
        assert_eq!(rule.calculate(7200.0), 2.0);

        assert_eq!(ConversionRule::identity("mass").calculate(3.5), 3.5);
    }

    #[test]
    fn test_inverse() {
        let rule = ConversionRule::new("mass", Operation::Multiply(1_000_000.0), false);
        let back = rule.inverse("mass");
        assert_eq!(back.operation, Operation::Divide(1_000_000.0));
        assert_eq!(back.formula, "divide the mass value by 1000000");
        assert_eq!(back.calculate(2_000_000.0), 2.0);
    }

    #[test]
    fn test_inverse_keeps_approximate_flag() {
        let rule = ConversionRule::new("length", Operation::Divide(20.0), true);
        let back = rule.inverse("length");
        assert!(back.approximate);
        assert_eq!(
            back.formula,
            "for an approximate result, multiply the length value by 20"
        );
    }

    #[test]
    fn test_identity_text() {
        assert_eq!(
            ConversionRule::identity("time").formula,
            "the time value is unchanged"
        );
    }
}
