//! A category's unit set and its directed rule table

use crate::rule::{ConversionRule, Operation};
use crate::unit::{CategoryId, UnitId};
use std::collections::HashMap;

/// Units and rules of one measurement domain.
///
/// Every unit converts to itself through an identity rule. Defining a rule
/// for one direction also defines the opposite direction by inverting the
/// operation, so a table only lists each unordered pair once.
#[derive(Debug, Clone)]
pub struct Category {
    id: CategoryId,
    rules: HashMap<(UnitId, UnitId), ConversionRule>,
}

impl Category {
    pub fn new(id: CategoryId) -> Self {
        let quantity = id.as_str();
        let rules = id
            .units()
            .iter()
            .map(|u| ((*u, *u), ConversionRule::identity(quantity)))
            .collect();
        Category { id, rules }
    }

    /// Builder: add an exact rule and its inverse
    pub fn with_rule(mut self, from: UnitId, to: UnitId, operation: Operation) -> Self {
        self.define(from, to, operation, false);
        self
    }

    /// Builder: add a calibration-approximate rule and its inverse
    pub fn with_approximate_rule(mut self, from: UnitId, to: UnitId, operation: Operation) -> Self {
        self.define(from, to, operation, true);
        self
    }

    fn define(&mut self, from: UnitId, to: UnitId, operation: Operation, approximate: bool) {
        debug_assert!(
            self.id.contains(from) && self.id.contains(to),
            "rule {}:{} outside category {}",
            from,
            to,
            self.id
        );
        let quantity = self.id.as_str();
        let rule = ConversionRule::new(quantity, operation, approximate);
        let inverse = rule.inverse(quantity);
        self.rules.insert((from, to), rule);
        self.rules.insert((to, from), inverse);
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    /// `(unit, label)` pairs in selector order
    pub fn units(&self) -> Vec<(UnitId, &'static str)> {
        self.id.units().iter().map(|u| (*u, u.label())).collect()
    }

    pub fn rule(&self, from: UnitId, to: UnitId) -> Option<&ConversionRule> {
        self.rules.get(&(from, to))
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Ordered unit pairs with no rule
    pub fn missing_pairs(&self) -> Vec<(UnitId, UnitId)> {
        let units = self.id.units();
        units
            .iter()
            .flat_map(|from| units.iter().map(move |to| (*from, *to)))
            .filter(|pair| !self.rules.contains_key(pair))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_pairs().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category_has_identity_rules() {
        let time = Category::new(CategoryId::Time);
        assert_eq!(time.rule_count(), 4);
        let rule = time.rule(UnitId::Hour, UnitId::Hour).unwrap();
        assert_eq!(rule.operation, Operation::Identity);
        assert!(time.rule(UnitId::Second, UnitId::Hour).is_none());
    }

    #[test]
    fn test_rule_defines_both_directions() {
        let time = Category::new(CategoryId::Time)
            .with_rule(UnitId::Second, UnitId::Minute, Operation::Divide(60.0));
        assert_eq!(
            time.rule(UnitId::Second, UnitId::Minute).unwrap().formula,
            "divide the time value by 60"
        );
        assert_eq!(
            time.rule(UnitId::Minute, UnitId::Second).unwrap().formula,
            "multiply the time value by 60"
        );
    }

    #[test]
    fn test_missing_pairs() {
        let mass = Category::new(CategoryId::Mass)
            .with_rule(UnitId::Tonne, UnitId::Kilogram, Operation::Multiply(1000.0));
        let missing = mass.missing_pairs();
        // 4 units -> 12 ordered distinct pairs, 2 defined
        assert_eq!(missing.len(), 10);
        assert!(missing.contains(&(UnitId::Gram, UnitId::Milligram)));
        assert!(!mass.is_complete());
    }

    #[test]
    fn test_units_in_selector_order() {
        let length = Category::new(CategoryId::Length);
        assert_eq!(
            length.units(),
            vec![
                (UnitId::Kilometre, "Kilometre"),
                (UnitId::Metre, "Metre"),
                (UnitId::Centimetre, "Centimetre"),
                (UnitId::Millimetre, "Millimetre"),
            ]
        );
        assert_eq!(length.name(), "Length");
    }
}
