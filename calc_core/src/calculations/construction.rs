//! # Construction Estimate
//!
//! Floor and wall quantities for a rectangular single-storey building, and
//! the cost of the wall material.
//!
//! ## Assumptions
//!
//! - Rectangular plan, outside dimensions
//! - Four walls of uniform height and thickness
//! - No deduction for doors, windows or corner overlap
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::construction::{calculate, ConstructionInput};
//!
//! let input = ConstructionInput {
//!     width_m: 6.0,
//!     length_m: 8.0,
//!     height_m: 3.0,
//!     wall_thickness_m: Some(0.4),
//!     material_cost_per_m3: Some(5000.0),
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.floor_area_m2, 48.0);
//! assert_eq!(result.wall_area_m2, 84.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::formulas::{self, Formula, FormulaTracker};
use crate::units::Meters;

/// Wall thickness used when none is given (m)
pub const DEFAULT_WALL_THICKNESS_M: f64 = 0.4;

/// Building dimensions and material price.
///
/// ## JSON Example
///
/// ```json
/// {
///   "width_m": 6.0,
///   "length_m": 8.0,
///   "height_m": 3.0,
///   "wall_thickness_m": 0.4,
///   "material_cost_per_m3": 5000.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstructionInput {
    /// Plan width in metres
    pub width_m: f64,

    /// Plan length in metres
    pub length_m: f64,

    /// Wall height in metres
    pub height_m: f64,

    /// Wall thickness in metres. Left out, the configured default applies
    /// (see [`ConstructionInput::with_default_thickness`]), else 0.4.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall_thickness_m: Option<f64>,

    /// Material price per cubic metre. The cost is only computed when this
    /// is present and positive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_cost_per_m3: Option<f64>,
}

impl ConstructionInput {
    /// Thickness used by the estimate (m)
    pub fn thickness_m(&self) -> f64 {
        self.wall_thickness_m.unwrap_or(DEFAULT_WALL_THICKNESS_M)
    }

    /// Fill in a missing thickness
    pub fn with_default_thickness(mut self, thickness_m: f64) -> Self {
        self.wall_thickness_m.get_or_insert(thickness_m);
        self
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        super::require_nonzero("width_m", self.width_m)?;
        super::require_nonzero("length_m", self.length_m)?;
        super::require_nonzero("height_m", self.height_m)?;
        super::require_finite("wall_thickness_m", self.thickness_m())?;
        if let Some(cost) = self.material_cost_per_m3 {
            super::require_finite("material_cost_per_m3", cost)?;
        }
        Ok(())
    }
}

/// Construction quantities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstructionResult {
    /// Plan perimeter (m)
    pub perimeter_m: f64,

    /// Floor area w × l (m²)
    pub floor_area_m2: f64,

    /// Face area of the four walls 2h(w + l) (m²)
    pub wall_area_m2: f64,

    /// Wall material volume (m³)
    pub wall_volume_m3: f64,

    /// Material cost, when a positive price was given
    pub total_cost: Option<f64>,

    /// Formulas applied, in order of use
    pub formulas: Vec<Formula>,
}

/// Compute the construction estimate.
pub fn calculate(input: &ConstructionInput) -> CalcResult<ConstructionResult> {
    input.validate()?;

    let width = Meters(input.width_m);
    let length = Meters(input.length_m);
    let height = Meters(input.height_m);
    let thickness = Meters(input.thickness_m());

    let mut tracker = FormulaTracker::new();

    let perimeter = formulas::perimeter(width, length);
    tracker.record(Formula::Perimeter, "Plan perimeter");

    let floor = formulas::floor_area(width, length);
    tracker.record(Formula::FloorArea, "Floor area");

    let walls = formulas::wall_area(height, width, length);
    tracker.record(Formula::WallArea, "Wall area");

    let volume = formulas::wall_volume(walls, thickness);
    tracker.record(Formula::WallVolume, "Wall volume");

    let total_cost = match input.material_cost_per_m3 {
        Some(price) if price > 0.0 => {
            tracker.record(Formula::MaterialCost, "Material cost");
            Some(formulas::material_cost(volume, price))
        }
        _ => None,
    };

    tracing::debug!(
        floor_m2 = floor.0,
        wall_m2 = walls.0,
        volume_m3 = volume.0,
        "construction estimate"
    );

    Ok(ConstructionResult {
        perimeter_m: super::ensure_finite("Construction", "Perimeter", perimeter.0)?,
        floor_area_m2: super::ensure_finite("Construction", "Floor area", floor.0)?,
        wall_area_m2: super::ensure_finite("Construction", "Wall area", walls.0)?,
        wall_volume_m3: super::ensure_finite("Construction", "Wall volume", volume.0)?,
        total_cost: total_cost
            .map(|c| super::ensure_finite("Construction", "Material cost", c))
            .transpose()?,
        formulas: tracker.into_formulas(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn house() -> ConstructionInput {
        ConstructionInput {
            width_m: 10.0,
            length_m: 12.0,
            height_m: 3.0,
            wall_thickness_m: Some(0.4),
            material_cost_per_m3: None,
        }
    }

    #[test]
    fn test_quantities() {
        let result = calculate(&house()).unwrap();
        assert_eq!(result.perimeter_m, 44.0);
        assert_eq!(result.floor_area_m2, 120.0);
        assert_eq!(result.wall_area_m2, 132.0);
        assert!((result.wall_volume_m3 - 52.8).abs() < 1e-9);
        assert!(result.total_cost.is_none());
        assert!(!result.formulas.contains(&Formula::MaterialCost));
    }

    #[test]
    fn test_cost_only_when_positive() {
        let mut input = house();
        input.material_cost_per_m3 = Some(0.0);
        assert!(calculate(&input).unwrap().total_cost.is_none());

        input.material_cost_per_m3 = Some(4500.0);
        let result = calculate(&input).unwrap();
        assert!((result.total_cost.unwrap() - 237_600.0).abs() < 1e-6);
        assert_eq!(result.formulas.last(), Some(&Formula::MaterialCost));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let mut input = house();
        input.height_m = 0.0;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_zero_thickness_allowed() {
        let mut input = house();
        input.wall_thickness_m = Some(0.0);
        assert_eq!(calculate(&input).unwrap().wall_volume_m3, 0.0);
    }

    #[test]
    fn test_thickness_defaults_in_json() {
        let input: ConstructionInput =
            serde_json::from_str(r#"{"width_m": 5, "length_m": 5, "height_m": 2.5}"#).unwrap();
        assert_eq!(input.wall_thickness_m, None);
        assert_eq!(input.thickness_m(), DEFAULT_WALL_THICKNESS_M);
        assert_eq!(input.material_cost_per_m3, None);
    }

    #[test]
    fn test_default_thickness_only_fills_gaps() {
        let mut input = house();
        input.wall_thickness_m = None;
        assert_eq!(input.clone().with_default_thickness(0.3).thickness_m(), 0.3);

        input.wall_thickness_m = Some(0.5);
        assert_eq!(input.with_default_thickness(0.3).thickness_m(), 0.5);
    }
}
