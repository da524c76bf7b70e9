//! Currencies and exchange rates.
//!
//! All rates are expressed as units of the currency per 1 US dollar, so any
//! pair converts through USD. The built-in table is a fixed snapshot; the
//! settings file may override individual rates.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Supported currencies.
///
/// Serializes as the ISO 4217 code (`"USD"`, `"EUR"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Rub,
    Gbp,
    Cny,
    Jpy,
    Kzt,
    Byn,
}

impl Currency {
    /// All currencies in display order
    pub const ALL: [Currency; 8] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Rub,
        Currency::Gbp,
        Currency::Cny,
        Currency::Jpy,
        Currency::Kzt,
        Currency::Byn,
    ];

    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Rub => "RUB",
            Currency::Gbp => "GBP",
            Currency::Cny => "CNY",
            Currency::Jpy => "JPY",
            Currency::Kzt => "KZT",
            Currency::Byn => "BYN",
        }
    }

    /// Currency sign
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Rub => "₽",
            Currency::Gbp => "£",
            Currency::Cny | Currency::Jpy => "¥",
            Currency::Kzt => "₸",
            Currency::Byn => "Br",
        }
    }

    /// Full name
    pub fn name(&self) -> &'static str {
        match self {
            Currency::Usd => "US Dollar",
            Currency::Eur => "Euro",
            Currency::Rub => "Russian Ruble",
            Currency::Gbp => "British Pound",
            Currency::Cny => "Chinese Yuan",
            Currency::Jpy => "Japanese Yen",
            Currency::Kzt => "Kazakhstani Tenge",
            Currency::Byn => "Belarusian Ruble",
        }
    }

    /// Built-in rate: units of this currency per 1 USD
    pub fn default_rate(&self) -> f64 {
        match self {
            Currency::Usd => 1.0,
            Currency::Eur => 0.92,
            Currency::Rub => 92.5,
            Currency::Gbp => 0.79,
            Currency::Cny => 7.24,
            Currency::Jpy => 149.5,
            Currency::Kzt => 450.0,
            Currency::Byn => 3.28,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code(), self.symbol())
    }
}

impl FromStr for Currency {
    type Err = CalcError;

    /// Parse an ISO code, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        Currency::ALL
            .iter()
            .copied()
            .find(|c| c.code() == code)
            .ok_or_else(|| CalcError::unknown_code("currency", s.trim()))
    }
}

/// Exchange rate table (units per 1 USD).
///
/// Starts from the built-in snapshot; [`CurrencyRates::with_overrides`]
/// replaces individual entries after checking them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyRates {
    rates: BTreeMap<Currency, f64>,
}

impl Default for CurrencyRates {
    fn default() -> Self {
        CurrencyRates {
            rates: Currency::ALL.iter().map(|c| (*c, c.default_rate())).collect(),
        }
    }
}

impl CurrencyRates {
    /// Build the default table with the given entries replaced.
    ///
    /// Every override must be a finite, positive number.
    pub fn with_overrides(overrides: &BTreeMap<Currency, f64>) -> CalcResult<Self> {
        let mut table = CurrencyRates::default();
        for (currency, rate) in overrides {
            if !rate.is_finite() || *rate <= 0.0 {
                return Err(CalcError::invalid_input(
                    format!("currency_rates.{}", currency.code()),
                    rate.to_string(),
                    "Rate must be a positive number",
                ));
            }
            table.rates.insert(*currency, *rate);
        }
        Ok(table)
    }

    /// Units of `currency` per 1 USD
    pub fn rate(&self, currency: Currency) -> f64 {
        self.rates
            .get(&currency)
            .copied()
            .unwrap_or_else(|| currency.default_rate())
    }

    /// Iterate over all (currency, rate) pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (Currency, f64)> + '_ {
        Currency::ALL.iter().map(move |c| (*c, self.rate(*c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rates() {
        let rates = CurrencyRates::default();
        assert_eq!(rates.rate(Currency::Usd), 1.0);
        assert_eq!(rates.rate(Currency::Rub), 92.5);
        assert_eq!(rates.rate(Currency::Kzt), 450.0);
        assert_eq!(rates.iter().count(), 8);
    }

    #[test]
    fn test_parse_code() {
        assert_eq!("eur".parse::<Currency>().unwrap(), Currency::Eur);
        assert_eq!(" BYN ".parse::<Currency>().unwrap(), Currency::Byn);
        assert!("XYZ".parse::<Currency>().is_err());
    }

    #[test]
    fn test_overrides() {
        let mut overrides = BTreeMap::new();
        overrides.insert(Currency::Eur, 0.95);
        let rates = CurrencyRates::with_overrides(&overrides).unwrap();
        assert_eq!(rates.rate(Currency::Eur), 0.95);
        assert_eq!(rates.rate(Currency::Gbp), 0.79);
    }

    #[test]
    fn test_rejects_bad_override() {
        let mut overrides = BTreeMap::new();
        overrides.insert(Currency::Jpy, 0.0);
        assert!(CurrencyRates::with_overrides(&overrides).is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Currency::Cny).unwrap();
        assert_eq!(json, "\"CNY\"");
        let parsed: Currency = serde_json::from_str("\"GBP\"").unwrap();
        assert_eq!(parsed, Currency::Gbp);
    }
}
