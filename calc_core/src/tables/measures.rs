//! Unit categories and conversion rates.
//!
//! Length and weight units carry a linear rate relative to the category's
//! base unit (metre, kilogram): `value_in_unit = value_in_base * rate`.
//! Temperature units are affine and have no rate; see
//! [`crate::formulas::conversion`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

/// Physical quantity measured by a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    Length,
    Weight,
    Temperature,
}

impl UnitCategory {
    /// All categories in display order
    pub const ALL: [UnitCategory; 3] = [
        UnitCategory::Length,
        UnitCategory::Weight,
        UnitCategory::Temperature,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            UnitCategory::Length => "Length",
            UnitCategory::Weight => "Weight",
            UnitCategory::Temperature => "Temperature",
        }
    }

    /// Units belonging to this category, base unit first
    pub fn units(&self) -> &'static [Unit] {
        match self {
            UnitCategory::Length => &Unit::LENGTH,
            UnitCategory::Weight => &Unit::WEIGHT,
            UnitCategory::Temperature => &Unit::TEMPERATURE,
        }
    }

    /// The (from, to) pair selected when switching to this category
    pub fn default_pair(&self) -> (Unit, Unit) {
        match self {
            UnitCategory::Length => (Unit::Meters, Unit::Feet),
            UnitCategory::Weight => (Unit::Kilograms, Unit::Pounds),
            UnitCategory::Temperature => (Unit::Celsius, Unit::Fahrenheit),
        }
    }

    /// Decimal places used when displaying a converted value
    pub fn display_precision(&self) -> usize {
        match self {
            UnitCategory::Temperature => 2,
            UnitCategory::Length | UnitCategory::Weight => 4,
        }
    }
}

impl std::fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A unit of measure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Meters,
    Feet,
    Inches,
    Kilometers,
    Miles,
    Kilograms,
    Pounds,
    Ounces,
    Grams,
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Unit {
    pub const LENGTH: [Unit; 5] = [
        Unit::Meters,
        Unit::Feet,
        Unit::Inches,
        Unit::Kilometers,
        Unit::Miles,
    ];

    pub const WEIGHT: [Unit; 4] = [Unit::Kilograms, Unit::Pounds, Unit::Ounces, Unit::Grams];

    pub const TEMPERATURE: [Unit; 3] = [Unit::Celsius, Unit::Fahrenheit, Unit::Kelvin];

    pub fn category(&self) -> UnitCategory {
        match self {
            Unit::Meters | Unit::Feet | Unit::Inches | Unit::Kilometers | Unit::Miles => {
                UnitCategory::Length
            }
            Unit::Kilograms | Unit::Pounds | Unit::Ounces | Unit::Grams => UnitCategory::Weight,
            Unit::Celsius | Unit::Fahrenheit | Unit::Kelvin => UnitCategory::Temperature,
        }
    }

    /// Units per base unit of the category. `None` for temperature.
    pub fn rate(&self) -> Option<f64> {
        match self {
            Unit::Meters => Some(1.0),
            Unit::Feet => Some(3.28084),
            Unit::Inches => Some(39.3701),
            Unit::Kilometers => Some(0.001),
            Unit::Miles => Some(0.000621371),
            Unit::Kilograms => Some(1.0),
            Unit::Pounds => Some(2.20462),
            Unit::Ounces => Some(35.274),
            Unit::Grams => Some(1000.0),
            Unit::Celsius | Unit::Fahrenheit | Unit::Kelvin => None,
        }
    }

    /// Identifier used in JSON and on the command line
    pub fn code(&self) -> &'static str {
        match self {
            Unit::Meters => "meters",
            Unit::Feet => "feet",
            Unit::Inches => "inches",
            Unit::Kilometers => "kilometers",
            Unit::Miles => "miles",
            Unit::Kilograms => "kilograms",
            Unit::Pounds => "pounds",
            Unit::Ounces => "ounces",
            Unit::Grams => "grams",
            Unit::Celsius => "celsius",
            Unit::Fahrenheit => "fahrenheit",
            Unit::Kelvin => "kelvin",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Meters => "m",
            Unit::Feet => "ft",
            Unit::Inches => "in",
            Unit::Kilometers => "km",
            Unit::Miles => "mi",
            Unit::Kilograms => "kg",
            Unit::Pounds => "lb",
            Unit::Ounces => "oz",
            Unit::Grams => "g",
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
            Unit::Kelvin => "K",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Unit::Meters => "Meters",
            Unit::Feet => "Feet",
            Unit::Inches => "Inches",
            Unit::Kilometers => "Kilometers",
            Unit::Miles => "Miles",
            Unit::Kilograms => "Kilograms",
            Unit::Pounds => "Pounds",
            Unit::Ounces => "Ounces",
            Unit::Grams => "Grams",
            Unit::Celsius => "Celsius",
            Unit::Fahrenheit => "Fahrenheit",
            Unit::Kelvin => "Kelvin",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Unit {
    type Err = CalcError;

    /// Accepts the code (`"meters"`) or the ASCII symbol (`"m"`, `"c"`), case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        let all = Unit::LENGTH
            .iter()
            .chain(Unit::WEIGHT.iter())
            .chain(Unit::TEMPERATURE.iter());
        for unit in all {
            let symbol = unit.symbol().trim_start_matches('°').to_ascii_lowercase();
            if unit.code() == wanted || symbol == wanted {
                return Ok(*unit);
            }
        }
        Err(CalcError::unknown_code("unit", s.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_unit_in_its_category() {
        for category in UnitCategory::ALL {
            for unit in category.units() {
                assert_eq!(unit.category(), category);
            }
            let (from, to) = category.default_pair();
            assert_eq!(from.category(), category);
            assert_eq!(to.category(), category);
        }
    }

    #[test]
    fn test_base_units_have_rate_one() {
        assert_eq!(Unit::Meters.rate(), Some(1.0));
        assert_eq!(Unit::Kilograms.rate(), Some(1.0));
        assert_eq!(Unit::Kelvin.rate(), None);
    }

    #[test]
    fn test_parse_unit() {
        assert_eq!("feet".parse::<Unit>().unwrap(), Unit::Feet);
        assert_eq!("KM".parse::<Unit>().unwrap(), Unit::Kilometers);
        assert_eq!("c".parse::<Unit>().unwrap(), Unit::Celsius);
        assert_eq!("k".parse::<Unit>().unwrap(), Unit::Kelvin);
        assert!("furlongs".parse::<Unit>().is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Unit::Ounces).unwrap();
        assert_eq!(json, "\"ounces\"");
        let category: UnitCategory = serde_json::from_str("\"temperature\"").unwrap();
        assert_eq!(category, UnitCategory::Temperature);
    }
}
