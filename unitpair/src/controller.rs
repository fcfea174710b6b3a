//! Synchronization controller
//!
//! Owns the selection state and the two field values. Every transition
//! either completes (state, values and formula updated together) or leaves
//! everything untouched.

use crate::config::ControllerConfig;
use crate::event::Transition;
use crate::snapshot::Snapshot;
use crate::state::{ControllerState, SelectionState};
use std::sync::Arc;
use tracing::{debug, error};
use unitpair_core::{ConvertError, NumericInput};
use unitpair_units::{CategoryId, ConversionRegistry, UnitId};

pub struct SyncController {
    registry: Arc<ConversionRegistry>,
    config: ControllerConfig,
    state: ControllerState,
    left_value: Option<f64>,
    right_value: Option<f64>,
    /// False while the left field holds text that is not a number
    left_valid: bool,
    formula: Option<String>,
}

impl SyncController {
    pub fn new(registry: Arc<ConversionRegistry>, config: ControllerConfig) -> Self {
        Self {
            registry,
            config,
            state: ControllerState::Idle,
            left_value: None,
            right_value: None,
            left_valid: false,
            formula: None,
        }
    }

    /// Select the configured initial category, or the lexically first one
    pub fn start(&mut self) -> Result<Transition, ConvertError> {
        let initial = self
            .config
            .initial_category
            .or_else(|| self.registry.categories().first().copied());
        match initial {
            Some(category) => self.select_category(category),
            None => {
                debug!("no categories registered, staying idle");
                Ok(Transition::Ignored)
            }
        }
    }

    pub fn registry(&self) -> &ConversionRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    // ========== Transitions ==========

    /// Reset both selectors to the category's first two units and
    /// recompute from the default input
    pub fn select_category(&mut self, category: CategoryId) -> Result<Transition, ConvertError> {
        if let Err(e) = self.registry.category(category) {
            debug!(category = %category, code = e.code(), "category selection ignored");
            return Ok(Transition::Ignored);
        }
        let Some(selection) = SelectionState::for_category(category) else {
            debug!(category = %category, "category has fewer than two units");
            return Ok(Transition::Ignored);
        };
        let input = self.config.default_input;
        let (output, formula) = self.convert(category, selection.left, selection.right, input)?;

        self.state = ControllerState::Active(selection);
        self.left_value = Some(input);
        self.left_valid = true;
        self.right_value = Some(output);
        self.formula = Some(formula);
        debug!(category = %category, left = %selection.left, right = %selection.right, "category selected");
        Ok(Transition::Applied)
    }

    pub fn select_left_unit(&mut self, unit: UnitId) -> Result<Transition, ConvertError> {
        let Some(current) = self.selection_for(unit, "left") else {
            return Ok(Transition::Ignored);
        };
        self.apply_selection(current.with_left(unit))
    }

    pub fn select_right_unit(&mut self, unit: UnitId) -> Result<Transition, ConvertError> {
        let Some(current) = self.selection_for(unit, "right") else {
            return Ok(Transition::Ignored);
        };
        self.apply_selection(current.with_right(unit))
    }

    /// Left field edited: a number drives the right field, anything else
    /// clears it. The left value is left as it was.
    pub fn set_left_value(&mut self, input: NumericInput) -> Result<Transition, ConvertError> {
        let Some(selection) = self.state.selection() else {
            debug!("left value ignored while idle");
            return Ok(Transition::Ignored);
        };
        match input {
            NumericInput::Number(n) => {
                let (output, formula) =
                    self.convert(selection.category, selection.left, selection.right, n)?;
                self.left_value = Some(n);
                self.left_valid = true;
                self.right_value = Some(output);
                self.formula = Some(formula);
            }
            NumericInput::Invalid => {
                self.left_valid = false;
                self.right_value = None;
            }
        }
        Ok(Transition::Applied)
    }

    /// Right field edited: a number drives the left field through the
    /// right-to-left rule, anything else clears it. The right value is left
    /// as it was.
    pub fn set_right_value(&mut self, input: NumericInput) -> Result<Transition, ConvertError> {
        let Some(selection) = self.state.selection() else {
            debug!("right value ignored while idle");
            return Ok(Transition::Ignored);
        };
        match input {
            NumericInput::Number(n) => {
                let (output, formula) =
                    self.convert(selection.category, selection.right, selection.left, n)?;
                self.right_value = Some(n);
                self.left_value = Some(output);
                self.left_valid = true;
                self.formula = Some(formula);
            }
            NumericInput::Invalid => {
                self.left_value = None;
                self.left_valid = false;
            }
        }
        Ok(Transition::Applied)
    }

    // ========== Outputs ==========

    pub fn current_category(&self) -> Option<CategoryId> {
        self.state.selection().map(|s| s.category)
    }

    pub fn current_left_unit(&self) -> Option<UnitId> {
        self.state.selection().map(|s| s.left)
    }

    pub fn current_right_unit(&self) -> Option<UnitId> {
        self.state.selection().map(|s| s.right)
    }

    pub fn current_left_value(&self) -> Option<f64> {
        self.left_value
    }

    pub fn current_right_value(&self) -> Option<f64> {
        self.right_value
    }

    pub fn current_formula_text(&self) -> Option<&str> {
        self.formula.as_deref()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            category: self.current_category(),
            left_unit: self.current_left_unit(),
            right_unit: self.current_right_unit(),
            left_value: self.left_value,
            right_value: self.right_value,
            formula: self.formula.clone(),
        }
    }

    // ========== Internals ==========

    /// Active selection, provided `unit` belongs to its category
    fn selection_for(&self, unit: UnitId, side: &str) -> Option<SelectionState> {
        let Some(selection) = self.state.selection() else {
            debug!(unit = %unit, side, "unit selection ignored while idle");
            return None;
        };
        if !selection.category.contains(unit) {
            debug!(unit = %unit, side, category = %selection.category, "unit not in category");
            return None;
        }
        Some(selection)
    }

    /// Commit a new unit pair, recomputing right from the left input
    fn apply_selection(&mut self, selection: SelectionState) -> Result<Transition, ConvertError> {
        let input = self
            .left_value
            .filter(|_| self.left_valid)
            .unwrap_or(self.config.default_input);
        let (output, formula) =
            self.convert(selection.category, selection.left, selection.right, input)?;

        self.state = ControllerState::Active(selection);
        self.left_value = Some(input);
        self.left_valid = true;
        self.right_value = Some(output);
        self.formula = Some(formula);
        debug!(left = %selection.left, right = %selection.right, "units selected");
        Ok(Transition::Applied)
    }

    fn convert(
        &self,
        category: CategoryId,
        from: UnitId,
        to: UnitId,
        n: f64,
    ) -> Result<(f64, String), ConvertError> {
        match self.registry.rule(category, from, to) {
            Ok(rule) => Ok((rule.calculate(n), rule.formula.clone())),
            Err(e) => {
                error!(code = e.code(), error = %e, "conversion table defect");
                Err(e)
            }
        }
    }
}
