//! # Conversion Formulas
//!
//! Rate-table conversion through a common base, and the affine temperature
//! scales. Temperature conversions always pass through Celsius.

/// Convert between two units quoted against the same base
///
/// # Formula
/// y = x / rate_from × rate_to
///
/// Used both for currencies (rates per 1 USD) and for length/weight units
/// (rates per metre / kilogram).
///
/// # Example
/// ```rust
/// use calc_core::formulas::conversion::pivot_convert;
///
/// // 100 m to feet (3.28084 ft per m)
/// let feet = pivot_convert(100.0, 1.0, 3.28084);
/// assert!((feet - 328.084).abs() < 1e-9);
/// ```
#[inline]
pub fn pivot_convert(value: f64, rate_from: f64, rate_to: f64) -> f64 {
    value / rate_from * rate_to
}

/// Offset between the Kelvin and Celsius scales
pub const KELVIN_OFFSET: f64 = 273.15;

/// F = C × 9/5 + 32
#[inline]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// C = (F − 32) × 5/9
#[inline]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// K = C + 273.15
#[inline]
pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + KELVIN_OFFSET
}

/// C = K − 273.15
#[inline]
pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_points() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert_eq!(fahrenheit_to_celsius(-40.0), -40.0);
        assert_eq!(celsius_to_kelvin(0.0), 273.15);
        assert_eq!(kelvin_to_celsius(273.15), 0.0);
    }

    #[test]
    fn test_pivot_convert() {
        // 5 lb to kg
        let kg = pivot_convert(5.0, 2.20462, 1.0);
        assert!((kg - 2.26796).abs() < 1e-5);
    }
}
