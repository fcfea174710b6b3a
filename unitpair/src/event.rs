//! Events delivered by the presentation layer

use serde::{Deserialize, Serialize};

/// Raw user input, one variant per widget control.
/// Values are the selector option ids or the numeric field text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "value", rename_all = "snake_case")]
pub enum Event {
    CategoryChanged(String),
    LeftUnitChanged(String),
    RightUnitChanged(String),
    LeftValueChanged(String),
    RightValueChanged(String),
}

impl Event {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Event::CategoryChanged(_) => "category_changed",
            Event::LeftUnitChanged(_) => "left_unit_changed",
            Event::RightUnitChanged(_) => "right_unit_changed",
            Event::LeftValueChanged(_) => "left_value_changed",
            Event::RightValueChanged(_) => "right_value_changed",
        }
    }
}

/// Whether an event changed the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    Applied,
    /// Unknown id, or no category selected yet
    Ignored,
}

impl Transition {
    pub fn is_applied(&self) -> bool {
        *self == Transition::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let event = Event::from_json(r#"{"event": "left_value_changed", "value": "5"}"#).unwrap();
        assert_eq!(event, Event::LeftValueChanged("5".to_string()));
        assert_eq!(event.name(), "left_value_changed");

        let event = Event::from_json(r#"{"event": "category_changed", "value": "mass"}"#).unwrap();
        assert_eq!(event, Event::CategoryChanged("mass".to_string()));
    }

    #[test]
    fn test_from_json_unknown_event() {
        assert!(Event::from_json(r#"{"event": "clicked", "value": "x"}"#).is_err());
    }

    #[test]
    fn test_name_matches_serde_tag() {
        let event = Event::RightUnitChanged("hour".to_string());
        let json: serde_json::Value = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], event.name());
    }
}
