//! # Unit Conversion
//!
//! Length and weight convert linearly through the category's base unit
//! (metre, kilogram). Temperature converts through Celsius.
//!
//! Converting a unit to itself returns the value unchanged; converting
//! across categories is an error.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::formulas::{self, Formula, FormulaTracker};
use crate::tables::{Unit, UnitCategory};

/// Value and unit pair.
///
/// ## JSON Example
///
/// ```json
/// { "value": 100, "from": "meters", "to": "feet" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionInput {
    pub value: f64,
    pub from: Unit,
    pub to: Unit,
}

impl ConversionInput {
    /// Zero is a valid value; only non-finite values and mixed categories are rejected.
    pub fn validate(&self) -> CalcResult<()> {
        super::require_finite("value", self.value)?;
        if self.from.category() != self.to.category() {
            return Err(CalcError::incompatible_units(self.from.code(), self.to.code()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionResult {
    pub value: f64,
    pub from: Unit,
    pub to: Unit,
    pub category: UnitCategory,
    pub converted: f64,
    pub formulas: Vec<Formula>,
}

impl ConversionResult {
    /// Converted value with the category's display precision and the unit symbol
    pub fn display(&self) -> String {
        format!(
            "{} {}",
            crate::format::fixed(self.converted, self.category.display_precision()),
            self.to.symbol()
        )
    }
}

/// Convert `input.value` from one unit to another.
///
/// ```rust
/// use calc_core::calculations::conversion::{calculate, ConversionInput};
/// use calc_core::tables::Unit;
///
/// let result = calculate(&ConversionInput { value: 0.0, from: Unit::Celsius, to: Unit::Fahrenheit }).unwrap();
/// assert_eq!(result.converted, 32.0);
/// assert_eq!(result.display(), "32.00 °F");
/// ```
pub fn calculate(input: &ConversionInput) -> CalcResult<ConversionResult> {
    input.validate()?;

    let category = input.from.category();
    let mut tracker = FormulaTracker::new();

    let converted = if input.from == input.to {
        input.value
    } else if category == UnitCategory::Temperature {
        let celsius = to_celsius(input.value, input.from, &mut tracker);
        from_celsius(celsius, input.to, &mut tracker)
    } else {
        let (Some(rate_from), Some(rate_to)) = (input.from.rate(), input.to.rate()) else {
            return Err(CalcError::Internal {
                message: format!("No linear rate for {} or {}", input.from.code(), input.to.code()),
            });
        };
        tracker.record(Formula::LinearUnitConversion, "Unit conversion");
        formulas::pivot_convert(input.value, rate_from, rate_to)
    };

    tracing::debug!(from = input.from.code(), to = input.to.code(), converted, "unit converted");

    Ok(ConversionResult {
        value: input.value,
        from: input.from,
        to: input.to,
        category,
        converted: super::ensure_finite("Conversion", "Converted value", converted)?,
        formulas: tracker.into_formulas(),
    })
}

fn to_celsius(value: f64, unit: Unit, tracker: &mut FormulaTracker) -> f64 {
    match unit {
        Unit::Fahrenheit => {
            tracker.record(Formula::FahrenheitToCelsius, "To Celsius");
            formulas::fahrenheit_to_celsius(value)
        }
        Unit::Kelvin => {
            tracker.record(Formula::KelvinToCelsius, "To Celsius");
            formulas::kelvin_to_celsius(value)
        }
        _ => value,
    }
}

fn from_celsius(celsius: f64, unit: Unit, tracker: &mut FormulaTracker) -> f64 {
    match unit {
        Unit::Fahrenheit => {
            tracker.record(Formula::CelsiusToFahrenheit, "From Celsius");
            formulas::celsius_to_fahrenheit(celsius)
        }
        Unit::Kelvin => {
            tracker.record(Formula::CelsiusToKelvin, "From Celsius");
            formulas::celsius_to_kelvin(celsius)
        }
        _ => celsius,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(value: f64, from: Unit, to: Unit) -> CalcResult<ConversionResult> {
        calculate(&ConversionInput { value, from, to })
    }

    #[test]
    fn test_length() {
        let result = convert(100.0, Unit::Meters, Unit::Feet).unwrap();
        assert!((result.converted - 328.084).abs() < 1e-9);
        assert_eq!(result.display(), "328.0840 ft");

        let result = convert(1.0, Unit::Miles, Unit::Kilometers).unwrap();
        assert!((result.converted - 1.609345).abs() < 1e-6);
    }

    #[test]
    fn test_weight() {
        let result = convert(1.0, Unit::Kilograms, Unit::Grams).unwrap();
        assert_eq!(result.converted, 1000.0);
        let result = convert(16.0, Unit::Ounces, Unit::Pounds).unwrap();
        assert!((result.converted - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_temperature_pairs() {
        assert_eq!(convert(100.0, Unit::Celsius, Unit::Fahrenheit).unwrap().converted, 212.0);
        assert_eq!(convert(-40.0, Unit::Fahrenheit, Unit::Celsius).unwrap().converted, -40.0);
        assert!((convert(0.0, Unit::Kelvin, Unit::Celsius).unwrap().converted + 273.15).abs() < 1e-9);

        // F -> K goes through Celsius
        let result = convert(32.0, Unit::Fahrenheit, Unit::Kelvin).unwrap();
        assert!((result.converted - 273.15).abs() < 1e-9);
        assert_eq!(
            result.formulas,
            vec![Formula::FahrenheitToCelsius, Formula::CelsiusToKelvin]
        );
    }

    #[test]
    fn test_identity() {
        let result = convert(21.5, Unit::Kelvin, Unit::Kelvin).unwrap();
        assert_eq!(result.converted, 21.5);
        assert!(result.formulas.is_empty());
    }

    #[test]
    fn test_incompatible_units() {
        let err = convert(1.0, Unit::Meters, Unit::Kilograms).unwrap_err();
        assert_eq!(err.error_code(), "INCOMPATIBLE_UNITS");
    }
}
