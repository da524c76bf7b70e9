//! # Number Formatting
//!
//! Display helpers shared by the GUI and the CLI.
//!
//! - [`fixed`] renders a value with a fixed number of decimals, the way result
//!   panels show money, areas and conversions.
//! - [`number_text`] renders a value the way the keypad display and the
//!   history list show it: integers without a trailing `.0`, everything else
//!   in shortest round-trip form, with exponent notation for very large or
//!   very small magnitudes.

/// Magnitude at and above which [`number_text`] switches to exponent form
const EXPONENT_ABOVE: f64 = 1e21;
/// Magnitude below which [`number_text`] switches to exponent form
const EXPONENT_BELOW: f64 = 1e-6;

/// Format with exactly `places` decimals.
///
/// Exact halves round away from zero, like a calculator does; everything
/// else rounds to the nearest decimal.
///
/// ```rust
/// use calc_core::format::fixed;
///
/// assert_eq!(fixed(14637.6213, 2), "14637.62");
/// assert_eq!(fixed(32.0, 2), "32.00");
/// assert_eq!(fixed(-0.001, 2), "0.00");
/// assert_eq!(fixed(70.5, 0), "71");
/// ```
pub fn fixed(value: f64, places: usize) -> String {
    let value = if is_exact_half(value, places) {
        // one step further from zero, past the tie
        f64::from_bits(value.to_bits() + 1)
    } else {
        value
    };
    let text = format!("{:.*}", places, value);
    // "-0.00" reads as a sign error in a result panel
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text[1..].to_string()
    } else {
        text
    }
}

/// Whether `value` lies exactly halfway between two `places`-decimal numbers.
///
/// A tie has exactly `places + 1` decimals, so it is a multiple of
/// 2^-(places + 1) and its expansion at that width is exact.
fn is_exact_half(value: f64, places: usize) -> bool {
    if !value.is_finite() || value == 0.0 {
        return false;
    }
    let Ok(width) = i32::try_from(places + 1) else {
        return false;
    };
    if (value * 2f64.powi(width)).fract() != 0.0 {
        return false;
    }
    format!("{:.*}", places + 1, value).ends_with('5')
}

/// Format like a calculator display.
///
/// ```rust
/// use calc_core::format::number_text;
///
/// assert_eq!(number_text(15.0), "15");
/// assert_eq!(number_text(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(number_text(2.5), "2.5");
/// assert_eq!(number_text(1e21), "1e+21");
/// ```
pub fn number_text(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_ABOVE || magnitude < EXPONENT_BELOW {
        let text = format!("{:e}", value);
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => text,
        };
    }

    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_rounding() {
        assert_eq!(fixed(328.084, 4), "328.0840");
        assert_eq!(fixed(1671.672, 0), "1672");
        assert_eq!(fixed(-12.5, 1), "-12.5");
    }

    #[test]
    fn test_fixed_halves_round_away_from_zero() {
        assert_eq!(fixed(70.5, 0), "71");
        assert_eq!(fixed(2.5, 0), "3");
        assert_eq!(fixed(0.125, 2), "0.13");
        assert_eq!(fixed(-2.5, 0), "-3");
        assert_eq!(fixed(0.5, 0), "1");
    }

    #[test]
    fn test_fixed_near_halves_keep_nearest() {
        // 1.005 is stored just below the half
        assert_eq!(fixed(1.005, 2), "1.00");
        // and so is 0.15
        assert_eq!(fixed(0.15, 1), "0.1");
        assert_eq!(fixed(3.5, 1), "3.5");
        assert_eq!(fixed(3.25, 3), "3.250");
    }

    #[test]
    fn test_number_text_integers() {
        assert_eq!(number_text(0.0), "0");
        assert_eq!(number_text(-0.0), "0");
        assert_eq!(number_text(-7.0), "-7");
        assert_eq!(number_text(1_000_000.0), "1000000");
    }

    #[test]
    fn test_number_text_fractions() {
        assert_eq!(number_text(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(number_text(0.000001), "0.000001");
        assert_eq!(number_text(0.0000001), "1e-7");
    }

    #[test]
    fn test_number_text_non_finite() {
        assert_eq!(number_text(f64::INFINITY), "Infinity");
        assert_eq!(number_text(f64::NAN), "NaN");
    }
}
