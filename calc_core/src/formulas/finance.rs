//! # Finance Formulas
//!
//! Fixed-rate loan amortization and cross-currency rates.
//!
//! ## Notation
//!
//! - `P` = principal
//! - `r` = periodic (monthly) interest rate as a fraction
//! - `n` = number of monthly payments
//! - `M` = fixed monthly payment

/// Monthly rate from an annual percentage rate
///
/// # Formula
/// r = APR / 100 / 12
#[inline]
pub fn periodic_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / 12.0
}

/// Number of monthly payments in a term given in years
///
/// # Formula
/// n = years × 12
#[inline]
pub fn payment_count(term_years: f64) -> f64 {
    term_years * 12.0
}

/// Fixed periodic payment that retires `principal` in `n` payments
///
/// # Formula
/// M = P·r·(1+r)^n / ((1+r)^n − 1)
///
/// The growth term g = (1+r)^n − 1 is evaluated as `exp_m1(n·ln_1p(r))` so
/// small positive rates keep their precision. With r = 0 the limit
/// M = P / n is used, and no rate yields a payment below it.
///
/// # Example
/// ```rust
/// use calc_core::formulas::finance::annuity_payment;
///
/// // 100 000 over 12 months at 1 %/month
/// let m = annuity_payment(100_000.0, 0.01, 12.0);
/// assert!((m - 8884.88).abs() < 0.01);
/// ```
pub fn annuity_payment(principal: f64, rate: f64, n: f64) -> f64 {
    let zero_rate = principal / n;
    if rate == 0.0 {
        return zero_rate;
    }
    let growth = (n * rate.ln_1p()).exp_m1();
    let payment = principal * (1.0 + growth) / (growth / rate);
    payment.max(zero_rate)
}

/// Total of all payments
///
/// # Formula
/// T = M × n
#[inline]
pub fn total_paid(payment: f64, n: f64) -> f64 {
    payment * n
}

/// Interest paid over the life of the loan
///
/// # Formula
/// I = T − P
#[inline]
pub fn total_interest(total_paid: f64, principal: f64) -> f64 {
    total_paid - principal
}

/// Units of `to` per one unit of `from`, both quoted per a common base
///
/// # Formula
/// x = rate_to / rate_from
#[inline]
pub fn cross_rate(rate_from: f64, rate_to: f64) -> f64 {
    rate_to / rate_from
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periodic_rate() {
        assert!((periodic_rate(12.0) - 0.01).abs() < 1e-12);
        assert_eq!(payment_count(10.0), 120.0);
    }

    #[test]
    fn test_annuity_payment() {
        // 1 000 000 at 12.5 % for 10 years
        let m = annuity_payment(1_000_000.0, periodic_rate(12.5), 120.0);
        assert!((m - 14637.62).abs() < 0.01);
    }

    #[test]
    fn test_zero_rate_payment() {
        assert_eq!(annuity_payment(12_000.0, 0.0, 24.0), 500.0);
    }

    #[test]
    fn test_tiny_rates_never_undercut_zero_rate_payment() {
        let principal = 120_000.0;
        let n = 120.0;
        for annual_percent in [1e-14, 1e-9, 1e-6, 1e-3] {
            let m = annuity_payment(principal, periodic_rate(annual_percent), n);
            assert!(m.is_finite(), "rate {} gave {}", annual_percent, m);
            assert!(m >= principal / n, "rate {} gave {}", annual_percent, m);
            assert!(m - principal / n < 0.01, "rate {} gave {}", annual_percent, m);
        }
    }

    #[test]
    fn test_totals() {
        let total = total_paid(500.0, 24.0);
        assert_eq!(total, 12_000.0);
        assert_eq!(total_interest(total, 10_000.0), 2_000.0);
    }

    #[test]
    fn test_cross_rate() {
        // USD -> RUB at 92.5 per USD
        assert_eq!(cross_rate(1.0, 92.5), 92.5);
        // EUR -> USD
        assert!((cross_rate(0.92, 1.0) - 1.0869565).abs() < 1e-6);
    }
}
