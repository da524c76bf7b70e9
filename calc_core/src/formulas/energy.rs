//! # Energy Expenditure Formulas
//!
//! Basal metabolic rate by the revised Harris-Benedict equations
//! (Roza & Shizgal, 1984), activity scaling to TDEE, and simple
//! per-kilogram macro targets.

use crate::tables::Sex;
use crate::units::{Centimeters, Grams, Kilocalories, Kilograms};

/// Energy per gram of protein or carbohydrate (kcal)
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// Energy per gram of carbohydrate (kcal)
pub const KCAL_PER_G_CARBS: f64 = 4.0;
/// Energy per gram of fat (kcal)
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Basal metabolic rate, revised Harris-Benedict
///
/// Men: BMR = 88.362 + 13.397 × weight(kg) + 4.799 × height(cm) − 5.677 × age(y)
/// Women: BMR = 447.593 + 9.247 × weight(kg) + 3.098 × height(cm) − 4.330 × age(y)
///
/// # Example
/// ```rust
/// use calc_core::formulas::energy::bmr_harris_benedict;
/// use calc_core::tables::Sex;
/// use calc_core::units::{Centimeters, Kilograms};
///
/// let bmr = bmr_harris_benedict(Kilograms(70.0), Centimeters(170.0), 30.0, Sex::Male);
/// assert!((bmr.0 - 1671.672).abs() < 1e-3);
/// ```
pub fn bmr_harris_benedict(weight: Kilograms, height: Centimeters, age_years: f64, sex: Sex) -> Kilocalories {
    let kcal = match sex {
        Sex::Male => 88.362 + 13.397 * weight.0 + 4.799 * height.0 - 5.677 * age_years,
        Sex::Female => 447.593 + 9.247 * weight.0 + 3.098 * height.0 - 4.330 * age_years,
    };
    Kilocalories(kcal)
}

/// Total daily energy expenditure
///
/// TDEE = BMR × activity multiplier
#[inline]
pub fn tdee(bmr: Kilocalories, activity_multiplier: f64) -> Kilocalories {
    bmr * activity_multiplier
}

/// Daily intake target offset from maintenance (negative to lose weight)
#[inline]
pub fn calorie_target(tdee: Kilocalories, adjustment_kcal: f64) -> Kilocalories {
    Kilocalories(tdee.0 + adjustment_kcal)
}

/// Daily protein target
///
/// protein = weight(kg) × g/kg
#[inline]
pub fn protein_target(weight: Kilograms, grams_per_kg: f64) -> Grams {
    Grams(weight.0 * grams_per_kg)
}

/// Daily fat target
///
/// fat = weight(kg) × g/kg
#[inline]
pub fn fat_target(weight: Kilograms, grams_per_kg: f64) -> Grams {
    Grams(weight.0 * grams_per_kg)
}

/// Carbohydrate that fills the rest of the energy budget
///
/// carbs = max(0, (TDEE − 4·protein − 9·fat) / 4)
pub fn carb_remainder(tdee: Kilocalories, protein: Grams, fat: Grams) -> Grams {
    let remaining = tdee.0 - KCAL_PER_G_PROTEIN * protein.0 - KCAL_PER_G_FAT * fat.0;
    Grams((remaining / KCAL_PER_G_CARBS).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmr_female() {
        // 447.593 + 9.247*60 + 3.098*165 - 4.330*25
        // = 447.593 + 554.82 + 511.17 - 108.25 = 1405.333
        let bmr = bmr_harris_benedict(Kilograms(60.0), Centimeters(165.0), 25.0, Sex::Female);
        assert!((bmr.0 - 1405.333).abs() < 1e-3);
    }

    #[test]
    fn test_tdee_and_targets() {
        let maintenance = tdee(Kilocalories(1500.0), 1.55);
        assert!((maintenance.0 - 2325.0).abs() < 1e-9);
        assert!((calorie_target(maintenance, -500.0).0 - 1825.0).abs() < 1e-9);
        assert!((calorie_target(maintenance, 500.0).0 - 2825.0).abs() < 1e-9);
    }

    #[test]
    fn test_macros() {
        let protein = protein_target(Kilograms(70.0), 2.0);
        let fat = fat_target(Kilograms(70.0), 1.0);
        assert_eq!(protein, Grams(140.0));
        assert_eq!(fat, Grams(70.0));
        // (2000 - 560 - 630) / 4 = 202.5
        assert_eq!(carb_remainder(Kilocalories(2000.0), protein, fat), Grams(202.5));
    }

    #[test]
    fn test_carb_remainder_never_negative() {
        let carbs = carb_remainder(Kilocalories(500.0), Grams(200.0), Grams(100.0));
        assert_eq!(carbs, Grams(0.0));
    }
}
