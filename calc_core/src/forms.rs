//! # Forms
//!
//! Text-backed input forms, one per calculator tab. Front ends store exactly
//! what the user typed and call `evaluate()` after every edit.
//!
//! A form evaluates to one of three states:
//! - [`FormOutcome::Incomplete`] - a required field is still blank
//! - [`FormOutcome::Invalid`] - a field does not parse, or the calculator
//!   rejected the values
//! - [`FormOutcome::Ready`] - the calculation result
//!
//! ## Example
//!
//! ```rust
//! use calc_core::forms::{FormOutcome, LoanForm};
//!
//! let mut form = LoanForm::default();
//! assert!(matches!(form.evaluate(), FormOutcome::Incomplete));
//!
//! form.principal = "1 000 000".into();
//! assert!(matches!(form.evaluate(), FormOutcome::Invalid(_)));
//!
//! form.principal = "1000000".into();
//! form.annual_rate_percent = "12,5".into();
//! form.term_years = "10".into();
//! let result = form.evaluate().ready().unwrap();
//! assert!((result.monthly_payment - 14637.62).abs() < 0.01);
//! ```

use crate::calculations::calories::{self, CalorieInput, CalorieResult, NutritionParams};
use crate::calculations::construction::{self, ConstructionInput, ConstructionResult, DEFAULT_WALL_THICKNESS_M};
use crate::calculations::conversion::{self, ConversionInput, ConversionResult};
use crate::calculations::currency::{self, CurrencyInput, CurrencyResult};
use crate::calculations::loan::{self, AmortizationSchedule, LoanInput, LoanResult};
use crate::errors::{CalcError, CalcResult};
use crate::format::number_text;
use crate::settings::Settings;
use crate::tables::{ActivityLevel, Currency, CurrencyRates, Sex, Unit, UnitCategory};

/// State of a form after evaluation
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome<T> {
    /// A required field is blank
    Incomplete,
    Ready(T),
    Invalid(CalcError),
}

impl<T> FormOutcome<T> {
    /// The result, if the form is ready
    pub fn ready(self) -> Option<T> {
        match self {
            FormOutcome::Ready(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&CalcError> {
        match self {
            FormOutcome::Invalid(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_incomplete(&self) -> bool {
        matches!(self, FormOutcome::Incomplete)
    }

    pub fn as_ref(&self) -> FormOutcome<&T> {
        match self {
            FormOutcome::Incomplete => FormOutcome::Incomplete,
            FormOutcome::Ready(result) => FormOutcome::Ready(result),
            FormOutcome::Invalid(err) => FormOutcome::Invalid(err.clone()),
        }
    }
}

impl<T> From<CalcResult<T>> for FormOutcome<T> {
    fn from(result: CalcResult<T>) -> Self {
        match result {
            Ok(value) => FormOutcome::Ready(value),
            Err(err) => FormOutcome::Invalid(err),
        }
    }
}

/// Parse one field.
///
/// Blank text is `Ok(None)`. Whitespace is trimmed and `,` is accepted as
/// the decimal separator. Non-finite values are rejected.
///
/// ```rust
/// use calc_core::forms::parse_number;
///
/// assert_eq!(parse_number("weight", " 72,5 ").unwrap(), Some(72.5));
/// assert_eq!(parse_number("weight", "").unwrap(), None);
/// assert!(parse_number("weight", "heavy").is_err());
/// ```
pub fn parse_number(field: &str, text: &str) -> CalcResult<Option<f64>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let normalized = trimmed.replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(CalcError::invalid_input(field, trimmed, "Not a number")),
    }
}

/// Evaluate a builder that yields `None` while fields are blank
fn outcome<I, T>(input: CalcResult<Option<I>>, run: impl FnOnce(&I) -> CalcResult<T>) -> FormOutcome<T> {
    match input {
        Ok(Some(input)) => run(&input).into(),
        Ok(None) => FormOutcome::Incomplete,
        Err(err) => FormOutcome::Invalid(err),
    }
}

// ============================================================================
// Construction
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ConstructionForm {
    pub width_m: String,
    pub length_m: String,
    pub height_m: String,
    pub wall_thickness_m: String,
    /// Optional; blank means no cost line
    pub material_cost_per_m3: String,
}

impl Default for ConstructionForm {
    fn default() -> Self {
        Self {
            width_m: String::new(),
            length_m: String::new(),
            height_m: String::new(),
            wall_thickness_m: number_text(DEFAULT_WALL_THICKNESS_M),
            material_cost_per_m3: String::new(),
        }
    }
}

impl ConstructionForm {
    /// Blank form with the configured wall thickness
    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            wall_thickness_m: number_text(settings.default_wall_thickness_m),
            ..Self::default()
        }
    }

    pub fn input(&self) -> CalcResult<Option<ConstructionInput>> {
        let width = parse_number("width_m", &self.width_m)?;
        let length = parse_number("length_m", &self.length_m)?;
        let height = parse_number("height_m", &self.height_m)?;
        let thickness = parse_number("wall_thickness_m", &self.wall_thickness_m)?;
        let cost = parse_number("material_cost_per_m3", &self.material_cost_per_m3)?;

        let (Some(width_m), Some(length_m), Some(height_m), Some(wall_thickness_m)) =
            (width, length, height, thickness)
        else {
            return Ok(None);
        };
        Ok(Some(ConstructionInput {
            width_m,
            length_m,
            height_m,
            wall_thickness_m: Some(wall_thickness_m),
            material_cost_per_m3: cost,
        }))
    }

    pub fn evaluate(&self) -> FormOutcome<ConstructionResult> {
        outcome(self.input(), construction::calculate)
    }
}

// ============================================================================
// Loan
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoanForm {
    pub principal: String,
    pub annual_rate_percent: String,
    pub term_years: String,
}

impl LoanForm {
    pub fn input(&self) -> CalcResult<Option<LoanInput>> {
        let principal = parse_number("principal", &self.principal)?;
        let rate = parse_number("annual_rate_percent", &self.annual_rate_percent)?;
        let years = parse_number("term_years", &self.term_years)?;

        let (Some(principal), Some(annual_rate_percent), Some(term_years)) = (principal, rate, years) else {
            return Ok(None);
        };
        Ok(Some(LoanInput {
            principal,
            annual_rate_percent,
            term_years,
        }))
    }

    pub fn evaluate(&self) -> FormOutcome<LoanResult> {
        outcome(self.input(), loan::calculate)
    }

    pub fn schedule(&self) -> FormOutcome<AmortizationSchedule> {
        outcome(self.input(), loan::schedule)
    }
}

// ============================================================================
// Currency
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyForm {
    pub amount: String,
    pub from: Currency,
    pub to: Currency,
}

impl Default for CurrencyForm {
    fn default() -> Self {
        Self {
            amount: String::new(),
            from: Currency::Usd,
            to: Currency::Rub,
        }
    }
}

impl CurrencyForm {
    pub fn input(&self) -> CalcResult<Option<CurrencyInput>> {
        Ok(parse_number("amount", &self.amount)?.map(|amount| CurrencyInput {
            amount,
            from: self.from,
            to: self.to,
        }))
    }

    pub fn evaluate(&self, rates: &CurrencyRates) -> FormOutcome<CurrencyResult> {
        outcome(self.input(), |input| currency::calculate(input, rates))
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }
}

// ============================================================================
// Calories
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalorieForm {
    pub weight_kg: String,
    pub height_cm: String,
    pub age_years: String,
    pub sex: Sex,
    pub activity: ActivityLevel,
}

impl CalorieForm {
    pub fn input(&self) -> CalcResult<Option<CalorieInput>> {
        let weight = parse_number("weight_kg", &self.weight_kg)?;
        let height = parse_number("height_cm", &self.height_cm)?;
        let age = parse_number("age_years", &self.age_years)?;

        let (Some(weight_kg), Some(height_cm), Some(age_years)) = (weight, height, age) else {
            return Ok(None);
        };
        Ok(Some(CalorieInput {
            weight_kg,
            height_cm,
            age_years,
            sex: self.sex,
            activity: self.activity,
        }))
    }

    pub fn evaluate(&self, params: &NutritionParams) -> FormOutcome<CalorieResult> {
        outcome(self.input(), |input| calories::calculate(input, params))
    }
}

// ============================================================================
// Unit conversion
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionForm {
    pub category: UnitCategory,
    pub value: String,
    pub from: Unit,
    pub to: Unit,
}

impl Default for ConversionForm {
    fn default() -> Self {
        let category = UnitCategory::Length;
        let (from, to) = category.default_pair();
        Self {
            category,
            value: String::new(),
            from,
            to,
        }
    }
}

impl ConversionForm {
    /// Switch category and reset the pair to its default; the value is kept
    pub fn set_category(&mut self, category: UnitCategory) {
        let (from, to) = category.default_pair();
        self.category = category;
        self.from = from;
        self.to = to;
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }

    pub fn input(&self) -> CalcResult<Option<ConversionInput>> {
        Ok(parse_number("value", &self.value)?.map(|value| ConversionInput {
            value,
            from: self.from,
            to: self.to,
        }))
    }

    pub fn evaluate(&self) -> FormOutcome<ConversionResult> {
        outcome(self.input(), conversion::calculate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_rejects_non_finite() {
        assert!(parse_number("x", "inf").is_err());
        assert!(parse_number("x", "NaN").is_err());
        assert_eq!(parse_number("x", "-3").unwrap(), Some(-3.0));
        assert_eq!(parse_number("x", "   ").unwrap(), None);
    }

    #[test]
    fn test_construction_form() {
        let mut form = ConstructionForm::default();
        assert_eq!(form.wall_thickness_m, "0.4");
        form.width_m = "6".into();
        form.length_m = "8".into();
        assert!(form.evaluate().is_incomplete());

        form.height_m = "3".into();
        let result = form.evaluate().ready().unwrap();
        assert_eq!(result.wall_area_m2, 84.0);
        assert!(result.total_cost.is_none());

        form.material_cost_per_m3 = "abc".into();
        assert!(form.evaluate().error().is_some());
    }

    #[test]
    fn test_construction_zero_is_invalid() {
        let form = ConstructionForm {
            width_m: "0".into(),
            length_m: "8".into(),
            height_m: "3".into(),
            ..ConstructionForm::default()
        };
        let outcome = form.evaluate();
        assert_eq!(outcome.error().map(|e| e.error_code()), Some("INVALID_INPUT"));
    }

    #[test]
    fn test_thickness_from_settings() {
        let settings = Settings {
            default_wall_thickness_m: 0.25,
            ..Settings::default()
        };
        assert_eq!(ConstructionForm::with_settings(&settings).wall_thickness_m, "0.25");
    }

    #[test]
    fn test_currency_form_defaults_to_usd_rub() {
        let form = CurrencyForm::default();
        assert_eq!((form.from, form.to), (Currency::Usd, Currency::Rub));
    }

    #[test]
    fn test_currency_form_swap() {
        let mut form = CurrencyForm {
            amount: "925".into(),
            ..CurrencyForm::default()
        };
        form.swap();
        assert_eq!((form.from, form.to), (Currency::Rub, Currency::Usd));
        let result = form.evaluate(&CurrencyRates::default()).ready().unwrap();
        assert!((result.converted - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_calorie_form() {
        let form = CalorieForm {
            weight_kg: "70".into(),
            height_cm: "170".into(),
            age_years: "".into(),
            ..CalorieForm::default()
        };
        assert!(form.evaluate(&NutritionParams::default()).is_incomplete());
    }

    #[test]
    fn test_conversion_category_reset() {
        let mut form = ConversionForm {
            value: "0".into(),
            ..ConversionForm::default()
        };
        form.set_category(UnitCategory::Temperature);
        assert_eq!((form.from, form.to), (Unit::Celsius, Unit::Fahrenheit));
        assert_eq!(form.value, "0");
        assert_eq!(form.evaluate().ready().unwrap().converted, 32.0);

        form.swap();
        form.value = "212".into();
        assert_eq!(form.evaluate().ready().unwrap().converted, 100.0);
    }
}
