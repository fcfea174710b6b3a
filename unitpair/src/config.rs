//! Controller configuration

use serde::{Deserialize, Serialize};
use std::env;
use unitpair_core::{ConvertError, NumericInput};
use unitpair_units::CategoryId;

pub const ENV_INITIAL_CATEGORY: &str = "UNITPAIR_INITIAL_CATEGORY";
pub const ENV_DEFAULT_INPUT: &str = "UNITPAIR_DEFAULT_INPUT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Left value used when a category is selected or the left field is empty
    pub default_input: f64,
    /// Category selected at startup; the lexically first one when unset
    pub initial_category: Option<CategoryId>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            default_input: 1.0,
            initial_category: None,
        }
    }
}

impl ControllerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_input(mut self, value: f64) -> Self {
        self.default_input = value;
        self
    }

    pub fn with_initial_category(mut self, category: CategoryId) -> Self {
        self.initial_category = Some(category);
        self
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read `UNITPAIR_INITIAL_CATEGORY` and `UNITPAIR_DEFAULT_INPUT`
    pub fn from_env() -> Result<Self, ConvertError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConvertError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(ENV_INITIAL_CATEGORY) {
            config.initial_category = Some(raw.trim().parse()?);
        }
        if let Some(raw) = lookup(ENV_DEFAULT_INPUT) {
            config.default_input = NumericInput::try_parse(&raw)?;
        }
        Ok(config)
    }
}
