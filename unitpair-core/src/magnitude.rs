//! Magnitude helpers shared by the registry and the controller

/// Relative tolerance used for round-trip checks
pub const ROUND_TRIP_TOLERANCE: f64 = 1e-9;

/// Compare two magnitudes within a relative tolerance.
/// Falls back to an absolute comparison near zero.
pub fn relative_eq(a: f64, b: f64, tolerance: f64) -> bool {
    if a == b {
        return true;
    }
    let scale = a.abs().max(b.abs());
    if scale < f64::MIN_POSITIVE {
        return (a - b).abs() <= tolerance;
    }
    (a - b).abs() / scale <= tolerance
}

/// Render a magnitude for a text field or formula ("5000", "2.59", "0.001")
pub fn format_magnitude(value: f64) -> String {
    if value == 0.0 {
        // Avoid "-0"
        return "0".to_string();
    }
    format!("{}", value)
}

/// Render an optional field value; `None` renders as an empty field
pub fn format_field(value: Option<f64>) -> String {
    value.map(format_magnitude).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_eq() {
        assert!(relative_eq(1.0, 1.0, ROUND_TRIP_TOLERANCE));
        assert!(relative_eq(1.0, 1.0 + 1e-12, ROUND_TRIP_TOLERANCE));
        assert!(!relative_eq(1.0, 1.001, ROUND_TRIP_TOLERANCE));
        assert!(relative_eq(1e12, 1e12 + 1.0, ROUND_TRIP_TOLERANCE));
        assert!(relative_eq(0.0, -0.0, ROUND_TRIP_TOLERANCE));
    }

    #[test]
    fn test_format_magnitude() {
        assert_eq!(format_magnitude(5000.0), "5000");
        assert_eq!(format_magnitude(2.59), "2.59");
        assert_eq!(format_magnitude(0.001), "0.001");
        assert_eq!(format_magnitude(-0.0), "0");
        assert_eq!(format_magnitude(1e9), "1000000000");
    }

    #[test]
    fn test_format_field() {
        assert_eq!(format_field(Some(2.0)), "2");
        assert_eq!(format_field(None), "");
    }
}
