//! # Formulas
//!
//! Every closed-form expression used by the calculators lives here, as a small
//! pure function. Having the formulas in one place enables:
//! - Easy verification against published sources (Roza & Shizgal, NIST SP 811)
//! - A single list of constants (activity multipliers live in `tables`)
//! - Consistent implementation between the GUI, the CLI and the JSON API
//!
//! ## Modules
//!
//! - [`geometry`] - Floor/wall areas and material volume
//! - [`finance`] - Annuity payment and currency cross rates
//! - [`energy`] - BMR, TDEE and macro targets
//! - [`conversion`] - Rate-table and temperature conversions
//! - [`registry`] - Formula metadata and usage tracking
//!
//! ## Conventions
//!
//! - **Lengths**: metres; **areas**: m²; **volumes**: m³
//! - **Rates**: periodic rates are fractions (0.01 = 1 %), annual input is a percentage
//! - **Energy**: kilocalories per day

pub mod conversion;
pub mod energy;
pub mod finance;
pub mod geometry;
pub mod registry;

pub use conversion::{
    celsius_to_fahrenheit,
    celsius_to_kelvin,
    fahrenheit_to_celsius,
    kelvin_to_celsius,
    pivot_convert,
};

pub use energy::{
    bmr_harris_benedict,
    calorie_target,
    carb_remainder,
    fat_target,
    protein_target,
    tdee,
};

pub use finance::{
    annuity_payment,
    cross_rate,
    payment_count,
    periodic_rate,
    total_interest,
    total_paid,
};

pub use geometry::{
    floor_area,
    material_cost,
    perimeter,
    wall_area,
    wall_volume,
};

pub use registry::{
    generate_formulas_markdown,
    Formula,
    FormulaCategory,
    FormulaMetadata,
    FormulaTracker,
    FormulaUsage,
    SourceReference,
    Variable,
    ALL_FORMULAS,
};
