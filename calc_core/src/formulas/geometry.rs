//! # Building Geometry Formulas
//!
//! Plan and wall quantities for a rectangular single-storey box.
//!
//! ```text
//!            l
//!     ┌─────────────┐
//!     │             │
//!   w │    floor    │      walls: height h, thickness t
//!     │             │
//!     └─────────────┘
//! ```
//!
//! Wall area is the full outside face of all four walls; openings and corner
//! overlap are not deducted.

use crate::units::{CubicMeters, Meters, SquareMeters};

/// Perimeter of the plan
///
/// # Formula
/// P = 2(w + l)
///
/// # Example
/// ```rust
/// use calc_core::formulas::geometry::perimeter;
/// use calc_core::units::Meters;
///
/// assert_eq!(perimeter(Meters(6.0), Meters(8.0)), Meters(28.0));
/// ```
#[inline]
pub fn perimeter(width: Meters, length: Meters) -> Meters {
    (width + length) * 2.0
}

/// Floor area
///
/// # Formula
/// A_floor = w × l
#[inline]
pub fn floor_area(width: Meters, length: Meters) -> SquareMeters {
    width * length
}

/// Total wall area of the four walls
///
/// # Formula
/// A_wall = 2h(w + l)
///
/// # Example
/// ```rust
/// use calc_core::formulas::geometry::wall_area;
/// use calc_core::units::{Meters, SquareMeters};
///
/// // 6 x 8 m plan, 3 m walls: 2 * 3 * 14 = 84 m²
/// assert_eq!(wall_area(Meters(3.0), Meters(6.0), Meters(8.0)), SquareMeters(84.0));
/// ```
#[inline]
pub fn wall_area(height: Meters, width: Meters, length: Meters) -> SquareMeters {
    height * (width + length) * 2.0
}

/// Material volume of the walls
///
/// # Formula
/// V = A_wall × t
#[inline]
pub fn wall_volume(wall_area: SquareMeters, thickness: Meters) -> CubicMeters {
    wall_area * thickness
}

/// Material cost for a volume at a price per cubic metre
///
/// # Formula
/// C = V × price
#[inline]
pub fn material_cost(volume: CubicMeters, price_per_m3: f64) -> f64 {
    volume.0 * price_per_m3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_area() {
        assert_eq!(floor_area(Meters(10.0), Meters(12.0)), SquareMeters(120.0));
    }

    #[test]
    fn test_wall_volume() {
        // 84 m² of wall at 0.4 m thick
        let volume = wall_volume(SquareMeters(84.0), Meters(0.4));
        assert!((volume.0 - 33.6).abs() < 1e-9);
    }

    #[test]
    fn test_material_cost() {
        assert!((material_cost(CubicMeters(33.6), 5000.0) - 168_000.0).abs() < 1e-6);
    }
}
