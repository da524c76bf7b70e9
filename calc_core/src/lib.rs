//! # calc_core - Multicalc Calculation Engine
//!
//! `calc_core` is the computational heart of Multicalc: a basic keypad
//! calculator, a construction material estimate, loan amortization, currency
//! conversion, calorie/macro estimation and unit conversion. All inputs and
//! outputs are JSON-serializable, so the same engine serves the desktop GUI,
//! the terminal CLI and scripted JSON requests.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//!   (the keypad is the one small state machine)
//! - **JSON-First**: All inputs and results implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Traceable**: Every result lists the formulas it applied
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::calculations::loan::{calculate, LoanInput};
//! use calc_core::format::fixed;
//!
//! let input = LoanInput {
//!     principal: 250_000.0,
//!     annual_rate_percent: 6.0,
//!     term_years: 30.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(fixed(result.monthly_payment, 2), "1498.88");
//!
//! // Serialize to JSON for scripts
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("monthly_payment"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The calculators and the JSON request envelope
//! - [`forms`] - Text-backed forms for interactive front ends
//! - [`formulas`] - Formula functions and the formula registry
//! - [`tables`] - Currency rates, unit rates, activity levels, dishes
//! - [`settings`] - Read-only TOML configuration
//! - [`format`] - Display formatting for numbers
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod format;
pub mod forms;
pub mod formulas;
pub mod settings;
pub mod tables;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationOutcome, CalculationRequest, CalculatorTab};
pub use errors::{CalcError, CalcResult};
pub use forms::FormOutcome;
pub use settings::Settings;
