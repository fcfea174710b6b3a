//! Unitpair Core - Fundamental types
//!
//! This crate provides the core types used throughout Unitpair:
//! - `ConvertError`: Error taxonomy with codes and severity
//! - `NumericInput`: A numeric field value or an invalid-input signal
//! - Magnitude formatting and tolerance helpers

mod error;
mod input;
mod magnitude;

pub use error::{codes, ConvertError, ErrorReport, Severity};
pub use input::NumericInput;
pub use magnitude::{format_field, format_magnitude, relative_eq, ROUND_TRIP_TOLERANCE};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::codes;
    pub use crate::{ConvertError, NumericInput, Severity};
}
