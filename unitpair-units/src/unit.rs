//! Category and unit identifiers
//!
//! Both are closed enums. The string ids are the ones offered to the
//! presentation layer as selector option values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unitpair_core::ConvertError;

/// A measurement domain with its own unit set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    Area,
    Length,
    Mass,
    Time,
}

impl CategoryId {
    pub const ALL: [CategoryId; 4] = [
        CategoryId::Area,
        CategoryId::Length,
        CategoryId::Mass,
        CategoryId::Time,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::Area => "area",
            CategoryId::Length => "length",
            CategoryId::Mass => "mass",
            CategoryId::Time => "time",
        }
    }

    /// Display name for the category selector
    pub fn name(&self) -> &'static str {
        match self {
            CategoryId::Area => "Area",
            CategoryId::Length => "Length",
            CategoryId::Mass => "Mass",
            CategoryId::Time => "Time",
        }
    }

    /// Units of this category in selector order
    pub fn units(&self) -> &'static [UnitId] {
        use UnitId::*;
        match self {
            CategoryId::Area => &[SquareKm, SquareM, SquareMile, SquareYard, SquareFoot],
            CategoryId::Length => &[Kilometre, Metre, Centimetre, Millimetre],
            CategoryId::Mass => &[Tonne, Kilogram, Gram, Milligram],
            CategoryId::Time => &[Second, Minute, Hour, Day],
        }
    }

    pub fn contains(&self, unit: UnitId) -> bool {
        unit.category() == *self
    }

    /// Resolve a unit id, requiring it to belong to this category
    pub fn unit(&self, id: &str) -> Result<UnitId, ConvertError> {
        UnitId::from_id(id)
            .filter(|u| self.contains(*u))
            .ok_or_else(|| ConvertError::unknown_unit(self.as_str(), id))
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CategoryId {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryId::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ConvertError::unknown_category(s))
    }
}

/// A named magnitude within one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnitId {
    // Area
    SquareKm,
    SquareM,
    SquareMile,
    SquareYard,
    SquareFoot,
    // Length
    Kilometre,
    Metre,
    Centimetre,
    Millimetre,
    // Mass
    Tonne,
    Kilogram,
    Gram,
    Milligram,
    // Time
    Second,
    Minute,
    Hour,
    Day,
}

impl UnitId {
    pub const ALL: [UnitId; 17] = [
        UnitId::SquareKm,
        UnitId::SquareM,
        UnitId::SquareMile,
        UnitId::SquareYard,
        UnitId::SquareFoot,
        UnitId::Kilometre,
        UnitId::Metre,
        UnitId::Centimetre,
        UnitId::Millimetre,
        UnitId::Tonne,
        UnitId::Kilogram,
        UnitId::Gram,
        UnitId::Milligram,
        UnitId::Second,
        UnitId::Minute,
        UnitId::Hour,
        UnitId::Day,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitId::SquareKm => "squareKm",
            UnitId::SquareM => "squareM",
            UnitId::SquareMile => "squareMile",
            UnitId::SquareYard => "squareYard",
            UnitId::SquareFoot => "squareFoot",
            UnitId::Kilometre => "kilometre",
            UnitId::Metre => "metre",
            UnitId::Centimetre => "centimetre",
            UnitId::Millimetre => "millimetre",
            UnitId::Tonne => "tonne",
            UnitId::Kilogram => "kilogram",
            UnitId::Gram => "gram",
            UnitId::Milligram => "milligram",
            UnitId::Second => "second",
            UnitId::Minute => "minute",
            UnitId::Hour => "hour",
            UnitId::Day => "day",
        }
    }

    /// Display label for unit selectors
    pub fn label(&self) -> &'static str {
        match self {
            UnitId::SquareKm => "Square kilometre",
            UnitId::SquareM => "Square metre",
            UnitId::SquareMile => "Square mile",
            UnitId::SquareYard => "Square yard",
            UnitId::SquareFoot => "Square foot",
            UnitId::Kilometre => "Kilometre",
            UnitId::Metre => "Metre",
            UnitId::Centimetre => "Centimetre",
            UnitId::Millimetre => "Millimetre",
            UnitId::Tonne => "Tonne",
            UnitId::Kilogram => "Kilogram",
            UnitId::Gram => "Gram",
            UnitId::Milligram => "Milligram",
            UnitId::Second => "Second",
            UnitId::Minute => "Minute",
            UnitId::Hour => "Hour",
            UnitId::Day => "Day",
        }
    }

    pub fn category(&self) -> CategoryId {
        use UnitId::*;
        match self {
            SquareKm | SquareM | SquareMile | SquareYard | SquareFoot => CategoryId::Area,
            Kilometre | Metre | Centimetre | Millimetre => CategoryId::Length,
            Tonne | Kilogram | Gram | Milligram => CategoryId::Mass,
            Second | Minute | Hour | Day => CategoryId::Time,
        }
    }

    /// Look up a unit by its string id in any category
    pub fn from_id(id: &str) -> Option<UnitId> {
        UnitId::ALL.iter().copied().find(|u| u.as_str() == id)
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip_ids() {
        for c in CategoryId::ALL {
            assert_eq!(c.as_str().parse::<CategoryId>().unwrap(), c);
        }
    }

    #[test]
    fn test_unknown_category() {
        let err = "volume".parse::<CategoryId>().unwrap_err();
        assert_eq!(err, ConvertError::unknown_category("volume"));
    }

    #[test]
    fn test_every_category_has_two_units() {
        for c in CategoryId::ALL {
            assert!(c.units().len() >= 2, "{} has fewer than two units", c);
        }
    }

    #[test]
    fn test_units_belong_to_their_category() {
        for c in CategoryId::ALL {
            for u in c.units() {
                assert_eq!(u.category(), c);
            }
        }
        let listed: usize = CategoryId::ALL.iter().map(|c| c.units().len()).sum();
        assert_eq!(listed, UnitId::ALL.len());
    }

    #[test]
    fn test_unit_lookup_within_category() {
        assert_eq!(CategoryId::Length.unit("metre").unwrap(), UnitId::Metre);
        assert_eq!(
            CategoryId::Length.unit("gram").unwrap_err(),
            ConvertError::unknown_unit("length", "gram")
        );
        assert!(CategoryId::Mass.unit("stone").is_err());
    }

    #[test]
    fn test_serde_ids_match_string_ids() {
        for u in UnitId::ALL {
            let json = serde_json::to_string(&u).unwrap();
            assert_eq!(json, format!("\"{}\"", u.as_str()));
        }
        for c in CategoryId::ALL {
            let json = serde_json::to_string(&c).unwrap();
            assert_eq!(json, format!("\"{}\"", c.as_str()));
        }
    }
}
