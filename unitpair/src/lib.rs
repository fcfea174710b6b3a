//! Unitpair - Two-sided unit conversion widget
//!
//! Given a category (area, length, mass, time), the user picks a unit on
//! each side and types a value into either field; the other field and the
//! formula text follow.
//!
//! The presentation layer renders selectors from [`Converter::list_categories`]
//! and [`Converter::list_units`], forwards raw control input to the `on_*`
//! handlers (or [`Converter::dispatch`]), and renders [`Converter::snapshot`]
//! afterwards.

mod config;
mod controller;
mod event;
mod snapshot;
mod state;

pub use config::{ControllerConfig, ENV_DEFAULT_INPUT, ENV_INITIAL_CATEGORY};
pub use controller::SyncController;
pub use event::{Event, Transition};
pub use snapshot::Snapshot;
pub use state::{ControllerState, SelectionState};

pub use unitpair_core::{ConvertError, NumericInput, Severity};
pub use unitpair_units::{CategoryId, ConversionRegistry, ConversionRule, UnitId};

use std::sync::Arc;
use tracing::debug;

/// Widget core facing the presentation layer
pub struct Converter {
    controller: SyncController,
}

impl Converter {
    /// Idle converter over `registry`
    pub fn new(registry: ConversionRegistry, config: ControllerConfig) -> Self {
        Self {
            controller: SyncController::new(Arc::new(registry), config),
        }
    }

    /// Standard table, started on its first category
    pub fn with_standard_registry() -> Result<Self, ConvertError> {
        Self::started(ConversionRegistry::standard(), ControllerConfig::default())
    }

    /// Standard table configured from `UNITPAIR_INITIAL_CATEGORY` and
    /// `UNITPAIR_DEFAULT_INPUT`, started on the initial category
    pub fn from_env() -> Result<Self, ConvertError> {
        let config = ControllerConfig::from_env()?;
        Self::started(ConversionRegistry::standard(), config)
    }

    /// Converter over `registry`, started on its initial category
    pub fn started(
        registry: ConversionRegistry,
        config: ControllerConfig,
    ) -> Result<Self, ConvertError> {
        let mut converter = Self::new(registry, config);
        converter.controller.start()?;
        Ok(converter)
    }

    /// Select the initial category
    pub fn start(&mut self) -> Result<Transition, ConvertError> {
        self.controller.start()
    }

    pub fn controller(&self) -> &SyncController {
        &self.controller
    }

    /// `(id, display name)` for the category selector, sorted by id
    pub fn list_categories(&self) -> Vec<(&'static str, &'static str)> {
        self.controller
            .registry()
            .category_options()
            .into_iter()
            .map(|(id, name)| (id.as_str(), name))
            .collect()
    }

    /// `(id, label)` for a unit selector; empty for an unknown category
    pub fn list_units(&self, category: &str) -> Vec<(&'static str, &'static str)> {
        let registry = self.controller.registry();
        registry
            .resolve_category(category)
            .and_then(|id| registry.units(id))
            .map(|units| units.into_iter().map(|(u, label)| (u.as_str(), label)).collect())
            .unwrap_or_default()
    }

    // ========== Event handlers ==========

    pub fn on_category_changed(&mut self, id: &str) -> Result<Transition, ConvertError> {
        match self.controller.registry().resolve_category(id) {
            Ok(category) => self.controller.select_category(category),
            Err(e) => Ok(ignored(&e)),
        }
    }

    pub fn on_left_unit_changed(&mut self, id: &str) -> Result<Transition, ConvertError> {
        match self.resolve_unit(id) {
            Some(Ok(unit)) => self.controller.select_left_unit(unit),
            Some(Err(e)) => Ok(ignored(&e)),
            None => Ok(idle(id)),
        }
    }

    pub fn on_right_unit_changed(&mut self, id: &str) -> Result<Transition, ConvertError> {
        match self.resolve_unit(id) {
            Some(Ok(unit)) => self.controller.select_right_unit(unit),
            Some(Err(e)) => Ok(ignored(&e)),
            None => Ok(idle(id)),
        }
    }

    /// Raw left field text; empty or non-numeric text clears the right field
    pub fn on_left_value_changed(&mut self, raw: &str) -> Result<Transition, ConvertError> {
        self.controller.set_left_value(NumericInput::parse(raw))
    }

    /// Raw right field text; empty or non-numeric text clears the left field
    pub fn on_right_value_changed(&mut self, raw: &str) -> Result<Transition, ConvertError> {
        self.controller.set_right_value(NumericInput::parse(raw))
    }

    pub fn dispatch(&mut self, event: &Event) -> Result<Transition, ConvertError> {
        debug!(event = event.name(), "dispatch");
        match event {
            Event::CategoryChanged(id) => self.on_category_changed(id),
            Event::LeftUnitChanged(id) => self.on_left_unit_changed(id),
            Event::RightUnitChanged(id) => self.on_right_unit_changed(id),
            Event::LeftValueChanged(raw) => self.on_left_value_changed(raw),
            Event::RightValueChanged(raw) => self.on_right_value_changed(raw),
        }
    }

    // ========== Outputs ==========

    pub fn current_left_value(&self) -> Option<f64> {
        self.controller.current_left_value()
    }

    pub fn current_right_value(&self) -> Option<f64> {
        self.controller.current_right_value()
    }

    pub fn current_formula_text(&self) -> Option<&str> {
        self.controller.current_formula_text()
    }

    pub fn current_left_unit(&self) -> Option<&'static str> {
        self.controller.current_left_unit().map(|u| u.as_str())
    }

    pub fn current_right_unit(&self) -> Option<&'static str> {
        self.controller.current_right_unit().map(|u| u.as_str())
    }

    pub fn snapshot(&self) -> Snapshot {
        self.controller.snapshot()
    }

    /// `None` while no category is selected
    fn resolve_unit(&self, id: &str) -> Option<Result<UnitId, ConvertError>> {
        self.controller
            .current_category()
            .map(|category| self.controller.registry().resolve_unit(category, id))
    }
}

fn idle(unit: &str) -> Transition {
    debug!(unit, "unit selection ignored while idle");
    Transition::Ignored
}

fn ignored(e: &ConvertError) -> Transition {
    debug!(code = e.code(), error = %e, "event ignored");
    Transition::Ignored
}
