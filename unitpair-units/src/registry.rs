//! Conversion registry

use crate::category::Category;
use crate::rule::ConversionRule;
use crate::standard;
use crate::unit::{CategoryId, UnitId};
use std::collections::BTreeMap;
use unitpair_core::ConvertError;

/// Registry of categories and their directed conversion rules
#[derive(Debug, Clone, Default)]
pub struct ConversionRegistry {
    categories: BTreeMap<CategoryId, Category>,
}

impl ConversionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Area, length, mass and time with complete rule tables
    pub fn standard() -> Self {
        Self::new()
            .with_category(standard::area())
            .with_category(standard::length())
            .with_category(standard::mass())
            .with_category(standard::time())
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.insert(category.id(), category);
        self
    }

    /// Registered category ids, sorted lexically
    pub fn categories(&self) -> Vec<CategoryId> {
        let mut ids: Vec<CategoryId> = self.categories.keys().copied().collect();
        ids.sort_by_key(|c| c.as_str());
        ids
    }

    /// `(id, display name)` pairs for the category selector
    pub fn category_options(&self) -> Vec<(CategoryId, &'static str)> {
        self.categories().into_iter().map(|c| (c, c.name())).collect()
    }

    pub fn category(&self, id: CategoryId) -> Result<&Category, ConvertError> {
        self.categories
            .get(&id)
            .ok_or_else(|| ConvertError::unknown_category(id.as_str()))
    }

    /// Resolve a raw category id to a registered category
    pub fn resolve_category(&self, id: &str) -> Result<CategoryId, ConvertError> {
        let category: CategoryId = id.parse()?;
        self.category(category)?;
        Ok(category)
    }

    /// Resolve a raw unit id within a registered category
    pub fn resolve_unit(&self, category: CategoryId, id: &str) -> Result<UnitId, ConvertError> {
        self.category(category)?;
        category.unit(id)
    }

    /// `(unit, label)` pairs for a category, in selector order
    pub fn units(&self, id: CategoryId) -> Result<Vec<(UnitId, &'static str)>, ConvertError> {
        Ok(self.category(id)?.units())
    }

    /// Directed rule `from -> to`. `from == to` yields the identity rule.
    pub fn rule(
        &self,
        id: CategoryId,
        from: UnitId,
        to: UnitId,
    ) -> Result<&ConversionRule, ConvertError> {
        let category = self.category(id)?;
        for unit in [from, to] {
            if !id.contains(unit) {
                return Err(ConvertError::unknown_unit(id.as_str(), unit.as_str()));
            }
        }
        category
            .rule(from, to)
            .ok_or_else(|| ConvertError::rule_not_found(id.as_str(), from.as_str(), to.as_str()))
    }

    /// Check that every category has a rule for every ordered unit pair.
    /// Reports the first gap found.
    pub fn validate(&self) -> Result<(), ConvertError> {
        for category in self.categories.values() {
            if let Some((from, to)) = category.missing_pairs().first() {
                return Err(ConvertError::rule_not_found(
                    category.id().as_str(),
                    from.as_str(),
                    to.as_str(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Operation;
    use unitpair_core::{relative_eq, ROUND_TRIP_TOLERANCE};

    #[test]
    fn test_categories_sorted() {
        let registry = ConversionRegistry::standard();
        let ids: Vec<&str> = registry.categories().iter().map(|c| c.as_str()).collect();
        assert_eq!(ids, vec!["area", "length", "mass", "time"]);
    }

    #[test]
    fn test_category_options() {
        let registry = ConversionRegistry::standard();
        let options = registry.category_options();
        assert_eq!(options[0], (CategoryId::Area, "Area"));
        assert_eq!(options[3], (CategoryId::Time, "Time"));
    }

    #[test]
    fn test_standard_registry_is_valid() {
        assert!(ConversionRegistry::standard().validate().is_ok());
    }

    #[test]
    fn test_units() {
        let registry = ConversionRegistry::standard();
        let units = registry.units(CategoryId::Mass).unwrap();
        assert_eq!(units.len(), 4);
        assert_eq!(units[0], (UnitId::Tonne, "Tonne"));
        assert_eq!(units[1], (UnitId::Kilogram, "Kilogram"));
    }

    #[test]
    fn test_unregistered_category() {
        let registry = ConversionRegistry::new()
            .with_category(Category::new(CategoryId::Time));
        assert_eq!(
            registry.units(CategoryId::Area).unwrap_err(),
            ConvertError::unknown_category("area")
        );
        assert!(registry.resolve_category("area").is_err());
        assert_eq!(registry.resolve_category("time").unwrap(), CategoryId::Time);
    }

    #[test]
    fn test_resolve_unit() {
        let registry = ConversionRegistry::standard();
        assert_eq!(
            registry.resolve_unit(CategoryId::Area, "squareMile").unwrap(),
            UnitId::SquareMile
        );
        assert_eq!(
            registry.resolve_unit(CategoryId::Area, "metre").unwrap_err(),
            ConvertError::unknown_unit("area", "metre")
        );
    }

    #[test]
    fn test_rule_lookup() {
        let registry = ConversionRegistry::standard();
        let rule = registry
            .rule(CategoryId::Length, UnitId::Kilometre, UnitId::Metre)
            .unwrap();
        assert_eq!(rule.formula, "multiply the length value by 1000");
        assert_eq!(rule.calculate(5.0), 5000.0);
    }

    #[test]
    fn test_same_unit_is_identity() {
        let registry = ConversionRegistry::standard();
        let rule = registry.rule(CategoryId::Mass, UnitId::Gram, UnitId::Gram).unwrap();
        assert_eq!(rule.operation, Operation::Identity);
        assert_eq!(rule.calculate(12.5), 12.5);
    }

    #[test]
    fn test_rule_across_categories() {
        let registry = ConversionRegistry::standard();
        let err = registry
            .rule(CategoryId::Mass, UnitId::Gram, UnitId::Metre)
            .unwrap_err();
        assert_eq!(err, ConvertError::unknown_unit("mass", "metre"));
    }

    #[test]
    fn test_rule_not_found() {
        let registry = ConversionRegistry::new().with_category(
            Category::new(CategoryId::Time)
                .with_rule(UnitId::Second, UnitId::Minute, Operation::Divide(60.0)),
        );
        let err = registry
            .rule(CategoryId::Time, UnitId::Hour, UnitId::Day)
            .unwrap_err();
        assert_eq!(err, ConvertError::rule_not_found("time", "hour", "day"));
        assert!(err.is_fatal());
        assert!(registry.validate().is_err());
    }

    #[test]
    fn test_round_trip_for_exact_rules() {
        let registry = ConversionRegistry::standard();
        for id in registry.categories() {
            for from in id.units() {
                for to in id.units() {
                    let there = registry.rule(id, *from, *to).unwrap();
                    let back = registry.rule(id, *to, *from).unwrap();
                    if there.approximate || back.approximate {
                        continue;
                    }
                    let result = back.calculate(there.calculate(1.0));
                    assert!(
                        relative_eq(result, 1.0, ROUND_TRIP_TOLERANCE),
                        "{}: {} -> {} -> {} gave {}",
                        id,
                        from,
                        to,
                        from,
                        result
                    );
                }
            }
        }
    }
}
