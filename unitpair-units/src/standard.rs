//! The standard conversion table: area, length, mass and time

use crate::category::Category;
use crate::rule::Operation::{Divide, Multiply};
use crate::unit::{CategoryId, UnitId::*};

pub(crate) fn area() -> Category {
    Category::new(CategoryId::Area)
        // Metric factor; the widget's "multiply by 1000" was a typo
        .with_rule(SquareKm, SquareM, Multiply(1_000_000.0))
        .with_approximate_rule(SquareKm, SquareMile, Divide(2.59))
        .with_approximate_rule(SquareKm, SquareYard, Multiply(1_196_000.0))
        .with_approximate_rule(SquareKm, SquareFoot, Multiply(10_760_000.0))
        .with_approximate_rule(SquareM, SquareMile, Divide(2_590_000.0))
        .with_approximate_rule(SquareM, SquareYard, Multiply(1.196))
        .with_approximate_rule(SquareM, SquareFoot, Multiply(10.764))
        .with_rule(SquareMile, SquareYard, Multiply(3_097_600.0))
        .with_rule(SquareMile, SquareFoot, Multiply(27_878_400.0))
        .with_rule(SquareYard, SquareFoot, Multiply(9.0))
}

pub(crate) fn length() -> Category {
    Category::new(CategoryId::Length)
        .with_rule(Kilometre, Metre, Multiply(1000.0))
        // Calibrated value, not a metric factor
        .with_approximate_rule(Kilometre, Centimetre, Divide(20.0))
        // Metric factor; the widget's "multiply by 10" was a typo
        .with_rule(Kilometre, Millimetre, Multiply(1_000_000.0))
        .with_rule(Metre, Centimetre, Multiply(100.0))
        .with_rule(Metre, Millimetre, Multiply(1000.0))
        .with_rule(Centimetre, Millimetre, Multiply(10.0))
}

pub(crate) fn mass() -> Category {
    Category::new(CategoryId::Mass)
        .with_rule(Tonne, Kilogram, Multiply(1000.0))
        .with_rule(Tonne, Gram, Multiply(1_000_000.0))
        .with_rule(Tonne, Milligram, Multiply(1_000_000_000.0))
        .with_rule(Kilogram, Gram, Multiply(1000.0))
        .with_rule(Kilogram, Milligram, Multiply(1_000_000.0))
        .with_rule(Gram, Milligram, Multiply(1000.0))
}

pub(crate) fn time() -> Category {
    Category::new(CategoryId::Time)
        .with_rule(Second, Minute, Divide(60.0))
        .with_rule(Second, Hour, Divide(3600.0))
        .with_rule(Second, Day, Divide(86_400.0))
        .with_rule(Minute, Hour, Divide(60.0))
        .with_rule(Minute, Day, Divide(1440.0))
        .with_rule(Hour, Day, Divide(24.0))
}
