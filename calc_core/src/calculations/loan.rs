//! # Loan Amortization
//!
//! Fixed-rate annuity loan with monthly payments.
//!
//! ## Method
//!
//! ```text
//! r = APR / 100 / 12          n = years × 12
//! M = P·r·(1+r)^n / ((1+r)^n − 1)       (M = P / n when r = 0)
//! T = M·n                     I = T − P
//! ```
//!
//! [`schedule`] splits every payment into interest and principal. The table
//! has `ceil(n)` rows; the last payment is adjusted so the balance ends at
//! exactly zero.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::loan::{calculate, LoanInput};
//!
//! let input = LoanInput {
//!     principal: 1_000_000.0,
//!     annual_rate_percent: 12.5,
//!     term_years: 10.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.monthly_payment - 14637.62).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::formulas::{self, Formula, FormulaTracker};

/// Longest schedule that will be generated (100 years of monthly payments)
pub const MAX_SCHEDULE_ROWS: usize = 1200;

/// Loan terms.
///
/// ## JSON Example
///
/// ```json
/// { "principal": 250000, "annual_rate_percent": 6.5, "term_years": 30 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanInput {
    /// Amount borrowed
    pub principal: f64,

    /// Nominal annual interest rate in percent (e.g., 12.5)
    pub annual_rate_percent: f64,

    /// Term in years; fractional terms are allowed
    pub term_years: f64,
}

impl LoanInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        super::require_nonzero("principal", self.principal)?;
        super::require_nonzero("term_years", self.term_years)?;
        super::require_finite("annual_rate_percent", self.annual_rate_percent)?;
        if self.annual_rate_percent < 0.0 {
            return Err(CalcError::invalid_input(
                "annual_rate_percent",
                self.annual_rate_percent.to_string(),
                "Rate cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Loan payment summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanResult {
    /// Monthly rate as a fraction
    pub monthly_rate: f64,

    /// Number of monthly payments (may be fractional)
    pub payment_count: f64,

    pub monthly_payment: f64,

    /// Sum of all payments
    pub total_paid: f64,

    /// Total paid above the principal
    pub total_interest: f64,

    pub formulas: Vec<Formula>,
}

/// One month of the amortization table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// 1-based month number
    pub month: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    /// Balance remaining after this payment
    pub balance: f64,
}

/// Month-by-month amortization table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub monthly_payment: f64,
    pub rows: Vec<AmortizationRow>,
    pub formulas: Vec<Formula>,
}

impl AmortizationSchedule {
    pub fn total_interest(&self) -> f64 {
        self.rows.iter().map(|r| r.interest).sum()
    }
}

fn summarize(input: &LoanInput, tracker: &mut FormulaTracker) -> CalcResult<(f64, f64, f64)> {
    input.validate()?;

    let rate = formulas::periodic_rate(input.annual_rate_percent);
    tracker.record(Formula::PeriodicRate, "Monthly rate");

    let n = formulas::payment_count(input.term_years);
    tracker.record(Formula::PaymentCount, "Number of payments");

    let payment = formulas::annuity_payment(input.principal, rate, n);
    if rate == 0.0 {
        tracker.record(Formula::ZeroRatePayment, "Monthly payment");
    } else {
        tracker.record(Formula::AnnuityPayment, "Monthly payment");
    }

    Ok((rate, n, super::ensure_finite("Loan", "Monthly payment", payment)?))
}

/// Compute the payment summary.
pub fn calculate(input: &LoanInput) -> CalcResult<LoanResult> {
    let mut tracker = FormulaTracker::new();
    let (rate, n, payment) = summarize(input, &mut tracker)?;

    let total = formulas::total_paid(payment, n);
    tracker.record(Formula::TotalPaid, "Total paid");

    let interest = formulas::total_interest(total, input.principal);
    tracker.record(Formula::TotalInterest, "Total interest");

    tracing::debug!(payment, total, interest, "loan calculated");

    Ok(LoanResult {
        monthly_rate: rate,
        payment_count: n,
        monthly_payment: payment,
        total_paid: super::ensure_finite("Loan", "Total paid", total)?,
        total_interest: super::ensure_finite("Loan", "Total interest", interest)?,
        formulas: tracker.into_formulas(),
    })
}

/// Build the amortization table.
///
/// Fails for terms longer than [`MAX_SCHEDULE_ROWS`] payments and for
/// negative terms, which have no schedule.
pub fn schedule(input: &LoanInput) -> CalcResult<AmortizationSchedule> {
    let mut tracker = FormulaTracker::new();
    let (rate, n, payment) = summarize(input, &mut tracker)?;

    if n < 0.0 {
        return Err(CalcError::calculation_failed("Schedule", "Term must be positive for a schedule"));
    }
    let count = n.ceil();
    if count > MAX_SCHEDULE_ROWS as f64 {
        return Err(CalcError::calculation_failed(
            "Schedule",
            format!("Schedule is limited to {} payments", MAX_SCHEDULE_ROWS),
        ));
    }
    let count = count as u32;
    tracker.record(Formula::AmortizationSplit, "Interest/principal split");

    let mut balance = input.principal;
    let mut rows = Vec::with_capacity(count as usize);
    for month in 1..=count {
        let interest = balance * rate;
        let (paid, principal) = if month == count {
            // Final payment retires whatever is left
            (balance + interest, balance)
        } else {
            (payment, payment - interest)
        };
        balance -= principal;
        if month == count {
            balance = 0.0;
        }
        rows.push(AmortizationRow {
            month,
            payment: paid,
            interest,
            principal,
            balance,
        });
    }

    tracing::debug!(rows = rows.len(), "amortization schedule built");

    Ok(AmortizationSchedule {
        monthly_payment: payment,
        rows,
        formulas: tracker.into_formulas(),
    })
}
