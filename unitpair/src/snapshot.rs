//! Published widget outputs

use serde::{Deserialize, Serialize};
use unitpair_core::format_field;
use unitpair_units::{CategoryId, UnitId};

/// Everything the presentation layer renders after an event.
/// `None` values render as empty fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub category: Option<CategoryId>,
    pub left_unit: Option<UnitId>,
    pub right_unit: Option<UnitId>,
    pub left_value: Option<f64>,
    pub right_value: Option<f64>,
    pub formula: Option<String>,
}

impl Snapshot {
    pub fn left_text(&self) -> String {
        format_field(self.left_value)
    }

    pub fn right_text(&self) -> String {
        format_field(self.right_value)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_text() {
        let snapshot = Snapshot {
            left_value: Some(5.0),
            right_value: None,
            ..Snapshot::default()
        };
        assert_eq!(snapshot.left_text(), "5");
        assert_eq!(snapshot.right_text(), "");
    }

    #[test]
    fn test_to_json() {
        let snapshot = Snapshot {
            category: Some(CategoryId::Length),
            left_unit: Some(UnitId::Kilometre),
            right_unit: Some(UnitId::Metre),
            left_value: Some(5.0),
            right_value: Some(5000.0),
            formula: Some("multiply the length value by 1000".to_string()),
        };
        let json: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(json["category"], "length");
        assert_eq!(json["left_unit"], "kilometre");
        assert_eq!(json["right_value"], 5000.0);
        assert_eq!(json["formula"], "multiply the length value by 1000");
    }
}
