//! # Currency Conversion
//!
//! Converts through a rate table quoted per 1 USD. Rates are a fixed
//! snapshot (see [`crate::tables::currencies`]) optionally overridden by
//! settings; nothing is fetched.

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::formulas::{self, Formula, FormulaTracker};
use crate::tables::{Currency, CurrencyRates};

/// Amount and currency pair.
///
/// ## JSON Example
///
/// ```json
/// { "amount": 100, "from": "USD", "to": "EUR" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyInput {
    pub amount: f64,
    pub from: Currency,
    pub to: Currency,
}

impl CurrencyInput {
    pub fn validate(&self) -> CalcResult<()> {
        super::require_nonzero("amount", self.amount)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyResult {
    pub amount: f64,
    pub from: Currency,
    pub to: Currency,
    /// Amount expressed in `to`
    pub converted: f64,
    /// Units of `to` per 1 unit of `from`
    pub rate: f64,
    pub formulas: Vec<Formula>,
}

/// Convert `input.amount` using `rates`.
///
/// ```rust
/// use calc_core::calculations::currency::{calculate, CurrencyInput};
/// use calc_core::tables::{Currency, CurrencyRates};
///
/// let input = CurrencyInput { amount: 100.0, from: Currency::Usd, to: Currency::Rub };
/// let result = calculate(&input, &CurrencyRates::default()).unwrap();
/// assert_eq!(result.converted, 9250.0);
/// ```
pub fn calculate(input: &CurrencyInput, rates: &CurrencyRates) -> CalcResult<CurrencyResult> {
    input.validate()?;

    let rate_from = rates.rate(input.from);
    let rate_to = rates.rate(input.to);
    let mut tracker = FormulaTracker::new();

    let converted = formulas::pivot_convert(input.amount, rate_from, rate_to);
    tracker.record(Formula::CurrencyConversion, "Converted amount");

    let rate = formulas::cross_rate(rate_from, rate_to);
    tracker.record(Formula::CurrencyCrossRate, "Cross rate");

    tracing::debug!(from = input.from.code(), to = input.to.code(), converted, "currency converted");

    Ok(CurrencyResult {
        amount: input.amount,
        from: input.from,
        to: input.to,
        converted: super::ensure_finite("Currency", "Converted amount", converted)?,
        rate,
        formulas: tracker.into_formulas(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_cross_currency() {
        let input = CurrencyInput {
            amount: 92.0,
            from: Currency::Eur,
            to: Currency::Gbp,
        };
        let result = calculate(&input, &CurrencyRates::default()).unwrap();
        // 92 / 0.92 * 0.79
        assert!((result.converted - 79.0).abs() < 1e-9);
        assert!((result.rate - 0.79 / 0.92).abs() < 1e-12);
    }

    #[test]
    fn test_same_currency() {
        let input = CurrencyInput {
            amount: 450.0,
            from: Currency::Kzt,
            to: Currency::Kzt,
        };
        let result = calculate(&input, &CurrencyRates::default()).unwrap();
        assert!((result.converted - 450.0).abs() < 1e-9);
        assert_eq!(result.rate, 1.0);
    }

    #[test]
    fn test_zero_amount_rejected() {
        let input = CurrencyInput {
            amount: 0.0,
            from: Currency::Usd,
            to: Currency::Eur,
        };
        assert!(calculate(&input, &CurrencyRates::default()).is_err());
    }

    #[test]
    fn test_overridden_rate() {
        let mut overrides = BTreeMap::new();
        overrides.insert(Currency::Eur, 0.5);
        let rates = CurrencyRates::with_overrides(&overrides).unwrap();
        let input = CurrencyInput {
            amount: 10.0,
            from: Currency::Usd,
            to: Currency::Eur,
        };
        assert_eq!(calculate(&input, &rates).unwrap().converted, 5.0);
    }
}
