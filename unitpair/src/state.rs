//! Selection state

use serde::{Deserialize, Serialize};
use unitpair_units::{CategoryId, UnitId};

/// Current category, the unit on each side, and the last unit each side held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub category: CategoryId,
    pub left: UnitId,
    pub right: UnitId,
    pub previous_left: UnitId,
    pub previous_right: UnitId,
}

impl SelectionState {
    /// Fresh selection for a category: first unit left, second unit right
    pub fn for_category(category: CategoryId) -> Option<Self> {
        match *category.units() {
            [left, right, ..] => Some(SelectionState {
                category,
                left,
                right,
                previous_left: left,
                previous_right: right,
            }),
            _ => None,
        }
    }

    /// Selection after the left selector moves to `unit`.
    /// If `unit` is the right side's unit, the right side takes the
    /// left side's previous unit.
    pub fn with_left(self, unit: UnitId) -> Self {
        let mut next = self;
        if unit == self.right {
            next.right = self.previous_left;
            next.previous_right = self.previous_left;
        }
        next.left = unit;
        next.previous_left = unit;
        if next.right == next.left {
            next.right = next.first_other_than(unit);
            next.previous_right = next.right;
        }
        next
    }

    /// Selection after the right selector moves to `unit`
    pub fn with_right(self, unit: UnitId) -> Self {
        let mut next = self;
        if unit == self.left {
            next.left = self.previous_right;
            next.previous_left = self.previous_right;
        }
        next.right = unit;
        next.previous_right = unit;
        if next.left == next.right {
            next.left = next.first_other_than(unit);
            next.previous_left = next.left;
        }
        next
    }

    pub fn is_distinct(&self) -> bool {
        self.left != self.right
    }

    fn first_other_than(&self, unit: UnitId) -> UnitId {
        self.category
            .units()
            .iter()
            .copied()
            .find(|u| *u != unit)
            .unwrap_or(unit)
    }
}

/// Controller lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerState {
    /// Cold start, no category chosen yet
    #[default]
    Idle,
    Active(SelectionState),
}

impl ControllerState {
    pub fn selection(&self) -> Option<SelectionState> {
        match self {
            ControllerState::Idle => None,
            ControllerState::Active(selection) => Some(*selection),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ControllerState::Active(_))
    }
}
