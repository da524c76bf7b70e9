//! # Calculations
//!
//! This module contains every calculator. The stateless ones follow the
//! pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable), including the
//!   formulas that were applied
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! The basic calculator is the exception: it is a small state machine
//! ([`basic::Keypad`]) driven by key presses, with [`basic::apply`] as its
//! pure core.
//!
//! ## Available Calculations
//!
//! - [`basic`] - Four-function keypad with a bounded history
//! - [`construction`] - Floor/wall quantities and material cost of a box building
//! - [`loan`] - Annuity loan payment and amortization schedule
//! - [`currency`] - Conversion through a USD-quoted rate table
//! - [`calories`] - BMR, TDEE, calorie targets and macros
//! - [`conversion`] - Length, weight and temperature unit conversion
//!
//! ## JSON Requests
//!
//! [`CalculationRequest`] wraps the input of every stateless calculation in a
//! tagged enum so a single JSON document can name what to compute:
//!
//! ```rust
//! use calc_core::calculations::{CalculationOutcome, CalculationRequest};
//!
//! let request: CalculationRequest = serde_json::from_str(
//!     r#"{"type": "Conversion", "value": 100, "from": "celsius", "to": "fahrenheit"}"#,
//! ).unwrap();
//!
//! match request.evaluate().unwrap() {
//!     CalculationOutcome::Conversion(result) => assert_eq!(result.converted, 212.0),
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```

pub mod basic;
pub mod calories;
pub mod construction;
pub mod conversion;
pub mod currency;
pub mod loan;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::settings::Settings;

// Re-export commonly used types
pub use basic::{ArithmeticInput, ArithmeticResult, HistoryEntry, Key, Keypad, Operator};
pub use calories::{CalorieInput, CalorieResult, NutritionParams};
pub use construction::{ConstructionInput, ConstructionResult};
pub use conversion::{ConversionInput, ConversionResult};
pub use currency::{CurrencyInput, CurrencyResult};
pub use loan::{AmortizationRow, AmortizationSchedule, LoanInput, LoanResult};

/// The calculator tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorTab {
    #[default]
    Basic,
    Construction,
    /// Loan and currency
    Finance,
    Calories,
    Converter,
}

impl CalculatorTab {
    pub const ALL: [CalculatorTab; 5] = [
        CalculatorTab::Basic,
        CalculatorTab::Construction,
        CalculatorTab::Finance,
        CalculatorTab::Calories,
        CalculatorTab::Converter,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            CalculatorTab::Basic => "Basic",
            CalculatorTab::Construction => "Construction",
            CalculatorTab::Finance => "Finance",
            CalculatorTab::Calories => "Calories",
            CalculatorTab::Converter => "Converter",
        }
    }
}

impl std::fmt::Display for CalculatorTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Any stateless calculation, tagged by `"type"`.
///
/// ## JSON Example
///
/// ```json
/// {
///   "type": "Loan",
///   "principal": 1000000,
///   "annual_rate_percent": 12.5,
///   "term_years": 10
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationRequest {
    /// One binary arithmetic operation
    Arithmetic(ArithmeticInput),
    /// Construction material estimate
    Construction(ConstructionInput),
    /// Loan payment summary
    Loan(LoanInput),
    /// Month-by-month amortization table for a loan
    Schedule(LoanInput),
    /// Currency conversion
    Currency(CurrencyInput),
    /// Calorie and macro targets
    Calories(CalorieInput),
    /// Unit conversion
    Conversion(ConversionInput),
}

impl CalculationRequest {
    /// The calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationRequest::Arithmetic(_) => "Arithmetic",
            CalculationRequest::Construction(_) => "Construction",
            CalculationRequest::Loan(_) => "Loan",
            CalculationRequest::Schedule(_) => "Schedule",
            CalculationRequest::Currency(_) => "Currency",
            CalculationRequest::Calories(_) => "Calories",
            CalculationRequest::Conversion(_) => "Conversion",
        }
    }

    /// Evaluate with built-in defaults (rates, nutrition parameters)
    pub fn evaluate(&self) -> CalcResult<CalculationOutcome> {
        self.evaluate_with(&Settings::default())
    }

    /// Evaluate with user settings applied
    pub fn evaluate_with(&self, settings: &Settings) -> CalcResult<CalculationOutcome> {
        tracing::debug!(calc_type = self.calc_type(), "evaluating request");
        let outcome = match self {
            CalculationRequest::Arithmetic(input) => {
                CalculationOutcome::Arithmetic(basic::calculate(input)?)
            }
            CalculationRequest::Construction(input) => {
                let input = input.clone().with_default_thickness(settings.default_wall_thickness_m);
                CalculationOutcome::Construction(construction::calculate(&input)?)
            }
            CalculationRequest::Loan(input) => CalculationOutcome::Loan(loan::calculate(input)?),
            CalculationRequest::Schedule(input) => {
                CalculationOutcome::Schedule(loan::schedule(input)?)
            }
            CalculationRequest::Currency(input) => {
                CalculationOutcome::Currency(currency::calculate(input, &settings.currency_rates()?)?)
            }
            CalculationRequest::Calories(input) => {
                CalculationOutcome::Calories(calories::calculate(input, &settings.nutrition_params())?)
            }
            CalculationRequest::Conversion(input) => {
                CalculationOutcome::Conversion(conversion::calculate(input)?)
            }
        };
        Ok(outcome)
    }
}

/// Result of a [`CalculationRequest`], tagged by `"type"` with the result
/// under `"result"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "result")]
pub enum CalculationOutcome {
    Arithmetic(ArithmeticResult),
    Construction(ConstructionResult),
    Loan(LoanResult),
    Schedule(AmortizationSchedule),
    Currency(CurrencyResult),
    Calories(CalorieResult),
    Conversion(ConversionResult),
}

// ============================================================================
// Shared validation
// ============================================================================

/// Reject NaN and infinities
pub(crate) fn require_finite(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be a finite number"));
    }
    Ok(())
}

/// Reject non-finite values and zero
pub(crate) fn require_nonzero(field: &str, value: f64) -> CalcResult<()> {
    require_finite(field, value)?;
    if value == 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be non-zero"));
    }
    Ok(())
}

/// Fail a calculation whose output overflowed
pub(crate) fn ensure_finite(calculation_type: &str, quantity: &str, value: f64) -> CalcResult<f64> {
    if !value.is_finite() {
        return Err(CalcError::calculation_failed(
            calculation_type,
            format!("{} is not a finite number", quantity),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_nonzero() {
        assert!(require_nonzero("width_m", 3.0).is_ok());
        assert!(require_nonzero("width_m", -3.0).is_ok());
        assert!(require_nonzero("width_m", 0.0).is_err());
        assert!(require_nonzero("width_m", f64::NAN).is_err());
    }

    #[test]
    fn test_ensure_finite() {
        let err = ensure_finite("Loan", "monthly payment", f64::INFINITY).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }

    #[test]
    fn test_tabs_in_order() {
        let names: Vec<_> = CalculatorTab::ALL.iter().map(|t| t.display_name()).collect();
        assert_eq!(names, vec!["Basic", "Construction", "Finance", "Calories", "Converter"]);
    }

    #[test]
    fn test_request_round_trip_tag() {
        let request = CalculationRequest::Conversion(ConversionInput {
            value: 1.0,
            from: crate::tables::Unit::Kilometers,
            to: crate::tables::Unit::Meters,
        });
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["type"], "Conversion");
        assert_eq!(json["from"], "kilometers");
    }
}
