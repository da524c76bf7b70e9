//! UI module for the Multicalc GUI
//!
//! # Panel Structure
//! - `toolbar` - Title header, calculator tabs, theme toggle
//! - `input_panel` - Left panel: dispatches to input_* child modules
//! - `results_panel` - Right panel: dispatches to result_* child modules
//! - `status_bar` - Bottom status messages
//!
//! # Input Panel Children
//! - `input_basic` - Display and keypad
//! - `input_construction` - Building dimensions and material price
//! - `input_finance` - Loan terms and currency amount/pair
//! - `input_calories` - Body measurements, sex, activity
//! - `input_converter` - Category, value and unit pair
//!
//! # Results Panel Children
//! - `result_basic` - Calculation history
//! - `result_construction` - Areas, volume, cost
//! - `result_finance` - Payment summary, schedule, converted amount
//! - `result_calories` - Targets, macros, dish catalogue
//! - `result_converter` - Converted value
//!
//! # Shared Components
//! - `shared` - Labeled inputs, outcome placeholders, formula lists

// Top-level panels
pub mod toolbar;
pub mod input_panel;
pub mod results_panel;
pub mod status_bar;

// Input panel children
pub mod input_basic;
pub mod input_construction;
pub mod input_finance;
pub mod input_calories;
pub mod input_converter;

// Results panel children
pub mod result_basic;
pub mod result_construction;
pub mod result_finance;
pub mod result_calories;
pub mod result_converter;

// Shared components
pub mod shared;
