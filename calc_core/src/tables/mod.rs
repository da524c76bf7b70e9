//! # Reference Tables
//!
//! Static lookup data the calculators read from: exchange rates, unit
//! conversion rates, activity multipliers and the dish catalogue.
//!
//! ## Tables
//!
//! - [`currencies`] - Currencies and their rate per 1 USD
//! - [`measures`] - Unit categories and linear conversion rates
//! - [`activity`] - Sex and activity level multipliers for TDEE
//! - [`dishes`] - Reference dishes with calories and macros
//!
//! ## Example
//!
//! ```rust
//! use calc_core::tables::{Currency, CurrencyRates, Unit, UnitCategory};
//!
//! let rates = CurrencyRates::default();
//! assert_eq!(rates.rate(Currency::Usd), 1.0);
//!
//! assert_eq!(Unit::Feet.category(), UnitCategory::Length);
//! ```

pub mod activity;
pub mod currencies;
pub mod dishes;
pub mod measures;

pub use activity::{ActivityLevel, Sex};
pub use currencies::{Currency, CurrencyRates};
pub use dishes::{Dish, DISHES};
pub use measures::{Unit, UnitCategory};
