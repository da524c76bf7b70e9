//! # Calorie and Macro Estimation
//!
//! Daily energy needs from body measurements, using the revised
//! Harris-Benedict BMR scaled by an activity multiplier, plus simple
//! per-kilogram protein and fat targets with carbohydrate filling the rest.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::calories::{calculate, CalorieInput, NutritionParams};
//! use calc_core::tables::{ActivityLevel, Sex};
//!
//! let input = CalorieInput {
//!     weight_kg: 70.0,
//!     height_cm: 170.0,
//!     age_years: 30.0,
//!     sex: Sex::Male,
//!     activity: ActivityLevel::Sedentary,
//! };
//!
//! let result = calculate(&input, &NutritionParams::default()).unwrap();
//! assert_eq!(result.maintenance_kcal.round(), 2006.0);
//! assert_eq!(result.protein_g, 140.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::formulas::{self, Formula, FormulaTracker};
use crate::tables::{ActivityLevel, Sex};
use crate::units::{Centimeters, Kilograms};

/// Adjustable targets applied on top of TDEE.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionParams {
    /// Daily deficit/surplus for the loss and gain targets (kcal)
    pub adjustment_kcal: f64,
    /// Protein per kilogram of body weight (g)
    pub protein_g_per_kg: f64,
    /// Fat per kilogram of body weight (g)
    pub fat_g_per_kg: f64,
}

impl Default for NutritionParams {
    fn default() -> Self {
        Self {
            adjustment_kcal: 500.0,
            protein_g_per_kg: 2.0,
            fat_g_per_kg: 1.0,
        }
    }
}

/// Body measurements and activity.
///
/// ## JSON Example
///
/// ```json
/// {
///   "weight_kg": 60,
///   "height_cm": 165,
///   "age_years": 25,
///   "sex": "female",
///   "activity": "moderately_active"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieInput {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: f64,
    #[serde(default)]
    pub sex: Sex,
    #[serde(default)]
    pub activity: ActivityLevel,
}

impl CalorieInput {
    pub fn validate(&self) -> CalcResult<()> {
        super::require_nonzero("weight_kg", self.weight_kg)?;
        super::require_nonzero("height_cm", self.height_cm)?;
        super::require_nonzero("age_years", self.age_years)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieResult {
    /// Basal metabolic rate (kcal/day)
    pub bmr_kcal: f64,
    /// Activity multiplier applied
    pub activity_multiplier: f64,
    /// TDEE, the intake that keeps weight stable (kcal/day)
    pub maintenance_kcal: f64,
    pub weight_loss_kcal: f64,
    pub weight_gain_kcal: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    /// Carbohydrate that fills maintenance after protein and fat
    pub carbs_g: f64,
    pub formulas: Vec<Formula>,
}

/// Compute BMR, targets and macros.
pub fn calculate(input: &CalorieInput, params: &NutritionParams) -> CalcResult<CalorieResult> {
    input.validate()?;
    validate_params(params)?;

    let weight = Kilograms(input.weight_kg);
    let mut tracker = FormulaTracker::new();

    let bmr = formulas::bmr_harris_benedict(weight, Centimeters(input.height_cm), input.age_years, input.sex);
    tracker.record(
        match input.sex {
            Sex::Male => Formula::HarrisBenedictMale,
            Sex::Female => Formula::HarrisBenedictFemale,
        },
        "BMR",
    );

    let multiplier = input.activity.multiplier();
    let maintenance = formulas::tdee(bmr, multiplier);
    tracker.record(Formula::Tdee, "Maintenance");

    let loss = formulas::calorie_target(maintenance, -params.adjustment_kcal);
    let gain = formulas::calorie_target(maintenance, params.adjustment_kcal);
    tracker.record(Formula::CalorieTargets, "Loss and gain targets");

    let protein = formulas::protein_target(weight, params.protein_g_per_kg);
    tracker.record(Formula::ProteinTarget, "Protein");

    let fat = formulas::fat_target(weight, params.fat_g_per_kg);
    tracker.record(Formula::FatTarget, "Fat");

    let carbs = formulas::carb_remainder(maintenance, protein, fat);
    tracker.record(Formula::CarbRemainder, "Carbohydrate");

    tracing::debug!(bmr = bmr.0, tdee = maintenance.0, "calorie targets calculated");

    Ok(CalorieResult {
        bmr_kcal: bmr.value(),
        activity_multiplier: multiplier,
        maintenance_kcal: maintenance.value(),
        weight_loss_kcal: loss.value(),
        weight_gain_kcal: gain.value(),
        protein_g: protein.value(),
        fat_g: fat.value(),
        carbs_g: carbs.value(),
        formulas: tracker.into_formulas(),
    })
}

fn validate_params(params: &NutritionParams) -> CalcResult<()> {
    let checks = [
        ("adjustment_kcal", params.adjustment_kcal),
        ("protein_g_per_kg", params.protein_g_per_kg),
        ("fat_g_per_kg", params.fat_g_per_kg),
    ];
    for (field, value) in checks {
        if !value.is_finite() || value < 0.0 {
            return Err(CalcError::invalid_input(field, value.to_string(), "Must be a non-negative number"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(sex: Sex, activity: ActivityLevel) -> CalorieInput {
        CalorieInput {
            weight_kg: 60.0,
            height_cm: 165.0,
            age_years: 25.0,
            sex,
            activity,
        }
    }

    #[test]
    fn test_female_moderate() {
        let result = calculate(&person(Sex::Female, ActivityLevel::ModeratelyActive), &NutritionParams::default()).unwrap();
        assert!((result.bmr_kcal - 1405.333).abs() < 1e-3);
        assert!((result.maintenance_kcal - 1405.333 * 1.55).abs() < 1e-2);
        assert!((result.weight_loss_kcal - (result.maintenance_kcal - 500.0)).abs() < 1e-9);
        assert!((result.weight_gain_kcal - (result.maintenance_kcal + 500.0)).abs() < 1e-9);
        assert_eq!(result.protein_g, 120.0);
        assert_eq!(result.fat_g, 60.0);
        assert!(result.formulas.contains(&Formula::HarrisBenedictFemale));
        assert!(!result.formulas.contains(&Formula::HarrisBenedictMale));
    }

    #[test]
    fn test_carbs_fill_maintenance() {
        let result = calculate(&person(Sex::Male, ActivityLevel::VeryActive), &NutritionParams::default()).unwrap();
        let energy = 4.0 * result.protein_g + 9.0 * result.fat_g + 4.0 * result.carbs_g;
        assert!((energy - result.maintenance_kcal).abs() < 1e-6);
    }

    #[test]
    fn test_custom_params() {
        let params = NutritionParams {
            adjustment_kcal: 300.0,
            protein_g_per_kg: 1.6,
            fat_g_per_kg: 0.8,
        };
        let result = calculate(&person(Sex::Male, ActivityLevel::Sedentary), &params).unwrap();
        assert!((result.maintenance_kcal - result.weight_loss_kcal - 300.0).abs() < 1e-9);
        assert!((result.protein_g - 96.0).abs() < 1e-9);
        assert!((result.fat_g - 48.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_age_rejected() {
        let mut input = person(Sex::Male, ActivityLevel::Sedentary);
        input.age_years = 0.0;
        let err = calculate(&input, &NutritionParams::default()).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "age_years"));
    }

    #[test]
    fn test_defaults_in_json() {
        let input: CalorieInput =
            serde_json::from_str(r#"{"weight_kg": 80, "height_cm": 180, "age_years": 40}"#).unwrap();
        assert_eq!(input.sex, Sex::Male);
        assert_eq!(input.activity, ActivityLevel::Sedentary);
    }
}
