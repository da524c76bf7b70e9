//! Profile enums for energy expenditure estimates.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

/// Sex used by the BMR equations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn display_name(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Sex {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            _ => Err(CalcError::unknown_code("sex", s.trim())),
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Desk job, little or no exercise
    #[default]
    Sedentary,
    /// Light exercise 1-3 times/week
    LightlyActive,
    /// Moderate exercise 3-5 times/week
    ModeratelyActive,
    /// Hard exercise 6-7 times/week
    VeryActive,
    /// Training twice a day or physical job
    ExtraActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Minimal (sedentary)",
            ActivityLevel::LightlyActive => "Low (1-3 times/week)",
            ActivityLevel::ModeratelyActive => "Medium (3-5 times/week)",
            ActivityLevel::VeryActive => "High (6-7 times/week)",
            ActivityLevel::ExtraActive => "Very high (twice a day)",
        }
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x{}", self.description(), self.multiplier())
    }
}

impl FromStr for ActivityLevel {
    type Err = CalcError;

    /// Accepts a level name (`"moderate"`) or its multiplier (`"1.55"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        let by_name = match wanted.as_str() {
            "sedentary" | "minimal" => Some(ActivityLevel::Sedentary),
            "light" | "lightly_active" | "low" => Some(ActivityLevel::LightlyActive),
            "moderate" | "moderately_active" | "medium" => Some(ActivityLevel::ModeratelyActive),
            "active" | "very_active" | "high" => Some(ActivityLevel::VeryActive),
            "extra" | "extra_active" | "very_high" => Some(ActivityLevel::ExtraActive),
            _ => None,
        };
        if let Some(level) = by_name {
            return Ok(level);
        }
        wanted
            .parse::<f64>()
            .ok()
            .and_then(|m| {
                ActivityLevel::ALL
                    .iter()
                    .copied()
                    .find(|level| (level.multiplier() - m).abs() < 1e-9)
            })
            .ok_or_else(|| CalcError::unknown_code("activity level", s.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipliers() {
        let multipliers: Vec<f64> = ActivityLevel::ALL.iter().map(|a| a.multiplier()).collect();
        assert_eq!(multipliers, vec![1.2, 1.375, 1.55, 1.725, 1.9]);
        assert_eq!(ActivityLevel::default(), ActivityLevel::Sedentary);
    }

    #[test]
    fn test_parse_activity() {
        assert_eq!("moderate".parse::<ActivityLevel>().unwrap(), ActivityLevel::ModeratelyActive);
        assert_eq!("1.725".parse::<ActivityLevel>().unwrap(), ActivityLevel::VeryActive);
        assert!("1.3".parse::<ActivityLevel>().is_err());
    }

    #[test]
    fn test_parse_sex() {
        assert_eq!("F".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!("male".parse::<Sex>().unwrap(), Sex::Male);
        assert!("x".parse::<Sex>().is_err());
    }
}
