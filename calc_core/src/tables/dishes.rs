//! Reference dish catalogue shown alongside the calorie calculator.

use serde::Serialize;

/// A dish with nutrition facts per portion
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dish {
    pub name: &'static str,
    /// Energy per portion (kcal)
    pub calories_kcal: f64,
    /// Protein per portion (g)
    pub protein_g: f64,
    /// Fat per portion (g)
    pub fat_g: f64,
    /// Carbohydrate per portion (g)
    pub carbs_g: f64,
    /// Portion size (g)
    pub portion_g: f64,
}

impl Dish {
    /// Energy implied by the macros with 4/9/4 kcal per gram
    pub fn macro_energy_kcal(&self) -> f64 {
        4.0 * self.protein_g + 9.0 * self.fat_g + 4.0 * self.carbs_g
    }
}

pub const DISHES: [Dish; 6] = [
    Dish {
        name: "Beef steak",
        calories_kcal: 250.0,
        protein_g: 26.0,
        fat_g: 15.0,
        carbs_g: 0.0,
        portion_g: 100.0,
    },
    Dish {
        name: "Greek salad",
        calories_kcal: 180.0,
        protein_g: 6.0,
        fat_g: 14.0,
        carbs_g: 8.0,
        portion_g: 200.0,
    },
    Dish {
        name: "Pasta carbonara",
        calories_kcal: 420.0,
        protein_g: 18.0,
        fat_g: 22.0,
        carbs_g: 38.0,
        portion_g: 300.0,
    },
    Dish {
        name: "Grilled salmon",
        calories_kcal: 206.0,
        protein_g: 22.0,
        fat_g: 13.0,
        carbs_g: 0.0,
        portion_g: 100.0,
    },
    Dish {
        name: "Chicken Caesar salad",
        calories_kcal: 320.0,
        protein_g: 28.0,
        fat_g: 18.0,
        carbs_g: 15.0,
        portion_g: 250.0,
    },
    Dish {
        name: "French fries",
        calories_kcal: 312.0,
        protein_g: 4.0,
        fat_g: 15.0,
        carbs_g: 41.0,
        portion_g: 100.0,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue() {
        assert_eq!(DISHES.len(), 6);
        assert!(DISHES.iter().all(|d| d.portion_g > 0.0 && d.calories_kcal > 0.0));
    }

    #[test]
    fn test_macro_energy() {
        // 4*18 + 9*22 + 4*38 = 72 + 198 + 152
        assert_eq!(DISHES[2].macro_energy_kcal(), 422.0);
    }
}
