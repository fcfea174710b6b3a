//! Unitpair Units - Conversion Registry
//!
//! In-memory table of measurement categories, their units, and the
//! directed conversion rules between units of the same category.
//!
//! Categories:
//! - Area (km², m², mi², yd², ft²)
//! - Length (km, m, cm, mm)
//! - Mass (t, kg, g, mg)
//! - Time (s, min, h, d)
//!
//! Rules are directional. A few area and length formulas are calibrated
//! approximations and are flagged `approximate`.

mod category;
mod registry;
mod rule;
mod standard;
mod unit;

pub use category::Category;
pub use registry::ConversionRegistry;
pub use rule::{ConversionRule, Operation};
pub use unit::{CategoryId, UnitId};
