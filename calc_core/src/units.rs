//! # Unit Types
//!
//! Type-safe wrappers for the metric quantities the calculators work in.
//! These provide compile-time safety against unit confusion while remaining
//! lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Every calculator works in a small, fixed set of metric units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! Imperial units only appear in the unit converter, which works from rate
//! tables (see [`crate::tables::measures`]) rather than types.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{CubicMeters, Meters, SquareMeters};
//!
//! let floor: SquareMeters = Meters(6.0) * Meters(8.0);
//! assert_eq!(floor.0, 48.0);
//!
//! let volume: CubicMeters = SquareMeters(50.0) * Meters(0.4);
//! assert!((volume.0 - 20.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length, Area, Volume
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in centimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Area in square metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

/// Volume in cubic metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMeters(pub f64);

impl From<Meters> for Centimeters {
    fn from(m: Meters) -> Self {
        Centimeters(m.0 * 100.0)
    }
}

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / 100.0)
    }
}

impl Mul for Meters {
    type Output = SquareMeters;
    fn mul(self, rhs: Meters) -> SquareMeters {
        SquareMeters(self.0 * rhs.0)
    }
}

impl Mul<Meters> for SquareMeters {
    type Output = CubicMeters;
    fn mul(self, rhs: Meters) -> CubicMeters {
        CubicMeters(self.0 * rhs.0)
    }
}

// ============================================================================
// Mass and Energy
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Mass in grams
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grams(pub f64);

/// Food energy in kilocalories
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilocalories(pub f64);

impl From<Kilograms> for Grams {
    fn from(kg: Kilograms) -> Self {
        Grams(kg.0 * 1000.0)
    }
}

impl From<Grams> for Kilograms {
    fn from(g: Grams) -> Self {
        Kilograms(g.0 / 1000.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Centimeters);
impl_arithmetic!(SquareMeters);
impl_arithmetic!(CubicMeters);
impl_arithmetic!(Kilograms);
impl_arithmetic!(Grams);
impl_arithmetic!(Kilocalories);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_to_centimeters() {
        let cm: Centimeters = Meters(1.75).into();
        assert!((cm.0 - 175.0).abs() < 1e-9);
    }

    #[test]
    fn test_dimensional_products() {
        let area = Meters(10.0) * Meters(12.0);
        assert_eq!(area, SquareMeters(120.0));
        let volume = area * Meters(0.5);
        assert_eq!(volume, CubicMeters(60.0));
    }

    #[test]
    fn test_arithmetic() {
        let a = Kilocalories(2000.0);
        let b = Kilocalories(500.0);
        assert_eq!((a + b).0, 2500.0);
        assert_eq!((a - b).0, 1500.0);
        assert_eq!((a * 1.2).0, 2400.0);
        assert_eq!((a / 2.0).0, 1000.0);
    }

    #[test]
    fn test_serialization() {
        let m = Meters(12.5);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "12.5");

        let roundtrip: Meters = serde_json::from_str(&json).unwrap();
        assert_eq!(m, roundtrip);
    }
}
