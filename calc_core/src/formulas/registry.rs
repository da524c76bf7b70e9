//! # Formula Registry
//!
//! Central registry of every formula the calculators apply. Each formula has
//! metadata including its source, plain-text expression and variable
//! definitions.
//!
//! ## Architecture
//!
//! The registry provides:
//! - Type-safe formula identification via the `Formula` enum
//! - Full metadata for the "formulas used" lists in the GUI and CLI
//! - Serialization support for JSON export
//!
//! ## Usage
//!
//! ```rust
//! use calc_core::formulas::registry::{Formula, FormulaTracker};
//!
//! // Track formula usage during a calculation
//! let mut tracker = FormulaTracker::new();
//! tracker.record(Formula::AnnuityPayment, "Monthly payment");
//!
//! // Get metadata for display
//! let meta = Formula::AnnuityPayment.metadata();
//! println!("Formula: {}", meta.formula_plain);
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

// ============================================================================
// Source References
// ============================================================================

/// Where a formula or constant comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceReference {
    /// Roza & Shizgal (1984), revised Harris-Benedict equations
    RozaShizgal1984,
    /// Standard activity factors applied to BMR
    ActivityFactors,
    /// Present value of an ordinary annuity
    AnnuityPresentValue,
    /// NIST SP 811 unit definitions and conversion factors
    Nist811 { appendix: &'static str },
    /// Elementary plane geometry
    Geometry,
    /// Elementary arithmetic
    Arithmetic,
    /// A working convention of this application rather than a published source
    Convention { note: &'static str },
}

impl SourceReference {
    /// Format the reference for display
    pub fn citation(&self) -> String {
        match self {
            SourceReference::RozaShizgal1984 => {
                "Roza & Shizgal (1984), Am J Clin Nutr 40(1):168-182".to_string()
            }
            SourceReference::ActivityFactors => "Standard BMR activity factors".to_string(),
            SourceReference::AnnuityPresentValue => "Present value of an ordinary annuity".to_string(),
            SourceReference::Nist811 { appendix } => format!("NIST SP 811, Appendix {}", appendix),
            SourceReference::Geometry => "Plane geometry".to_string(),
            SourceReference::Arithmetic => "Arithmetic".to_string(),
            SourceReference::Convention { note } => format!("Convention: {}", note),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            SourceReference::RozaShizgal1984 => "Harris-Benedict (rev.)",
            SourceReference::ActivityFactors => "Activity factors",
            SourceReference::AnnuityPresentValue => "Annuity",
            SourceReference::Nist811 { .. } => "NIST SP 811",
            SourceReference::Geometry => "Geometry",
            SourceReference::Arithmetic => "Arithmetic",
            SourceReference::Convention { .. } => "Convention",
        }
    }
}

// ============================================================================
// Formula Categories
// ============================================================================

/// Categories for grouping formulas, one per calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormulaCategory {
    Arithmetic,
    Construction,
    Loan,
    Currency,
    Nutrition,
    UnitConversion,
}

impl FormulaCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            FormulaCategory::Arithmetic => "Arithmetic",
            FormulaCategory::Construction => "Construction",
            FormulaCategory::Loan => "Loan",
            FormulaCategory::Currency => "Currency",
            FormulaCategory::Nutrition => "Nutrition",
            FormulaCategory::UnitConversion => "Unit Conversion",
        }
    }

    /// Sort order for listings (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            FormulaCategory::Arithmetic => 1,
            FormulaCategory::Construction => 2,
            FormulaCategory::Loan => 3,
            FormulaCategory::Currency => 4,
            FormulaCategory::Nutrition => 5,
            FormulaCategory::UnitConversion => 6,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in a formula.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "P", "r", "w")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "m", "kg", "kcal/day")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Formula Metadata
// ============================================================================

/// Complete metadata for a formula.
#[derive(Debug, Clone)]
pub struct FormulaMetadata {
    /// Human-readable name (e.g., "Annuity Payment")
    pub name: &'static str,
    /// Brief description of what this formula calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Source reference
    pub reference: SourceReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: FormulaCategory,
    /// Source module where the formula implementation lives
    pub source_module: &'static str,
    /// Function name implementing the formula
    pub source_function: &'static str,
}

// ============================================================================
// Formula Enum
// ============================================================================

/// All formulas used by the calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Formula {
    // -------------------------------------------------------------------------
    // Arithmetic
    // -------------------------------------------------------------------------
    /// a + b, a - b, a × b, a ÷ b
    BasicArithmetic,

    // -------------------------------------------------------------------------
    // Construction
    // -------------------------------------------------------------------------
    /// P = 2(w + l)
    Perimeter,
    /// A = w × l
    FloorArea,
    /// A_wall = 2h(w + l)
    WallArea,
    /// V = A_wall × t
    WallVolume,
    /// C = V × price
    MaterialCost,

    // -------------------------------------------------------------------------
    // Loan
    // -------------------------------------------------------------------------
    /// r = APR / 100 / 12
    PeriodicRate,
    /// n = years × 12
    PaymentCount,
    /// M = P r (1+r)^n / ((1+r)^n - 1)
    AnnuityPayment,
    /// M = P / n when r = 0
    ZeroRatePayment,
    /// T = M × n
    TotalPaid,
    /// I = T - P
    TotalInterest,
    /// interest_k = balance_(k-1) × r
    AmortizationSplit,

    // -------------------------------------------------------------------------
    // Currency
    // -------------------------------------------------------------------------
    /// x = rate_to / rate_from
    CurrencyCrossRate,
    /// y = amount / rate_from × rate_to
    CurrencyConversion,

    // -------------------------------------------------------------------------
    // Nutrition
    // -------------------------------------------------------------------------
    /// Revised Harris-Benedict, men
    HarrisBenedictMale,
    /// Revised Harris-Benedict, women
    HarrisBenedictFemale,
    /// TDEE = BMR × activity multiplier
    Tdee,
    /// TDEE ± adjustment
    CalorieTargets,
    /// protein = weight × g/kg
    ProteinTarget,
    /// fat = weight × g/kg
    FatTarget,
    /// carbs = (TDEE - 4 protein - 9 fat) / 4
    CarbRemainder,

    // -------------------------------------------------------------------------
    // Unit Conversion
    // -------------------------------------------------------------------------
    /// y = x / rate_from × rate_to
    LinearUnitConversion,
    /// F = C × 9/5 + 32
    CelsiusToFahrenheit,
    /// C = (F - 32) × 5/9
    FahrenheitToCelsius,
    /// K = C + 273.15
    CelsiusToKelvin,
    /// C = K - 273.15
    KelvinToCelsius,
}

impl Formula {
    /// Get the full metadata for this formula
    pub fn metadata(&self) -> FormulaMetadata {
        match self {
            Formula::BasicArithmetic => FormulaMetadata {
                name: "Basic Arithmetic",
                description: "One binary operation on the pending operand and the displayed number",
                formula_plain: "result = a (+ | - | × | ÷) b",
                reference: SourceReference::Arithmetic,
                variables: vec![
                    Variable::new("a", "Pending (left) operand", "-"),
                    Variable::new("b", "Displayed (right) operand", "-"),
                ],
                assumptions: vec!["IEEE 754 double precision", "Division by zero is rejected"],
                category: FormulaCategory::Arithmetic,
                source_module: "calculations/basic.rs",
                source_function: "apply",
            },

            // Construction
            Formula::Perimeter => FormulaMetadata {
                name: "Plan Perimeter",
                description: "Perimeter of a rectangular building plan",
                formula_plain: "P = 2(w + l)",
                reference: SourceReference::Geometry,
                variables: vec![
                    Variable::new("w", "Building width", "m"),
                    Variable::new("l", "Building length", "m"),
                ],
                assumptions: vec!["Rectangular plan"],
                category: FormulaCategory::Construction,
                source_module: "formulas/geometry.rs",
                source_function: "perimeter",
            },

            Formula::FloorArea => FormulaMetadata {
                name: "Floor Area",
                description: "Area of a rectangular floor",
                formula_plain: "A = w × l",
                reference: SourceReference::Geometry,
                variables: vec![
                    Variable::new("A", "Floor area", "m²"),
                    Variable::new("w", "Building width", "m"),
                    Variable::new("l", "Building length", "m"),
                ],
                assumptions: vec!["Rectangular plan", "Outside dimensions"],
                category: FormulaCategory::Construction,
                source_module: "formulas/geometry.rs",
                source_function: "floor_area",
            },

            Formula::WallArea => FormulaMetadata {
                name: "Wall Area",
                description: "Total face area of the four exterior walls",
                formula_plain: "A_wall = 2h(w + l)",
                reference: SourceReference::Geometry,
                variables: vec![
                    Variable::new("A_wall", "Wall area", "m²"),
                    Variable::new("h", "Wall height", "m"),
                    Variable::new("w", "Building width", "m"),
                    Variable::new("l", "Building length", "m"),
                ],
                assumptions: vec!["No deduction for openings", "Corner overlap ignored"],
                category: FormulaCategory::Construction,
                source_module: "formulas/geometry.rs",
                source_function: "wall_area",
            },

            Formula::WallVolume => FormulaMetadata {
                name: "Wall Material Volume",
                description: "Volume of wall material",
                formula_plain: "V = A_wall × t",
                reference: SourceReference::Geometry,
                variables: vec![
                    Variable::new("V", "Material volume", "m³"),
                    Variable::new("t", "Wall thickness", "m"),
                ],
                assumptions: vec!["Uniform wall thickness"],
                category: FormulaCategory::Construction,
                source_module: "formulas/geometry.rs",
                source_function: "wall_volume",
            },

            Formula::MaterialCost => FormulaMetadata {
                name: "Material Cost",
                description: "Cost of the wall material at a unit price",
                formula_plain: "C = V × price",
                reference: SourceReference::Arithmetic,
                variables: vec![
                    Variable::new("C", "Material cost", "currency"),
                    Variable::new("price", "Price per cubic metre", "currency/m³"),
                ],
                assumptions: vec!["Only shown when a positive price is given"],
                category: FormulaCategory::Construction,
                source_module: "formulas/geometry.rs",
                source_function: "material_cost",
            },

            // Loan
            Formula::PeriodicRate => FormulaMetadata {
                name: "Monthly Rate",
                description: "Monthly interest rate from the annual percentage rate",
                formula_plain: "r = APR / 100 / 12",
                reference: SourceReference::Convention { note: "nominal APR compounded monthly" },
                variables: vec![
                    Variable::new("r", "Monthly rate", "fraction"),
                    Variable::new("APR", "Annual rate", "%"),
                ],
                assumptions: vec!["Monthly compounding"],
                category: FormulaCategory::Loan,
                source_module: "formulas/finance.rs",
                source_function: "periodic_rate",
            },

            Formula::PaymentCount => FormulaMetadata {
                name: "Number of Payments",
                description: "Monthly payments in the loan term",
                formula_plain: "n = years × 12",
                reference: SourceReference::Arithmetic,
                variables: vec![
                    Variable::new("n", "Number of payments", "-"),
                    Variable::new("years", "Loan term", "years"),
                ],
                assumptions: vec!["One payment per month"],
                category: FormulaCategory::Loan,
                source_module: "formulas/finance.rs",
                source_function: "payment_count",
            },

            Formula::AnnuityPayment => FormulaMetadata {
                name: "Annuity Payment",
                description: "Fixed monthly payment that fully amortizes the principal",
                formula_plain: "M = P·r·(1+r)^n / ((1+r)^n − 1)",
                reference: SourceReference::AnnuityPresentValue,
                variables: vec![
                    Variable::new("M", "Monthly payment", "currency"),
                    Variable::new("P", "Principal", "currency"),
                    Variable::new("r", "Monthly rate", "fraction"),
                    Variable::new("n", "Number of payments", "-"),
                ],
                assumptions: vec!["Fixed rate", "Payments at the end of each period"],
                category: FormulaCategory::Loan,
                source_module: "formulas/finance.rs",
                source_function: "annuity_payment",
            },

            Formula::ZeroRatePayment => FormulaMetadata {
                name: "Interest-Free Payment",
                description: "Limit of the annuity payment as the rate goes to zero",
                formula_plain: "M = P / n",
                reference: SourceReference::AnnuityPresentValue,
                variables: vec![
                    Variable::new("M", "Monthly payment", "currency"),
                    Variable::new("P", "Principal", "currency"),
                    Variable::new("n", "Number of payments", "-"),
                ],
                assumptions: vec!["r = 0"],
                category: FormulaCategory::Loan,
                source_module: "formulas/finance.rs",
                source_function: "annuity_payment",
            },

            Formula::TotalPaid => FormulaMetadata {
                name: "Total Paid",
                description: "Sum of all payments over the term",
                formula_plain: "T = M × n",
                reference: SourceReference::Arithmetic,
                variables: vec![
                    Variable::new("T", "Total paid", "currency"),
                ],
                assumptions: vec![],
                category: FormulaCategory::Loan,
                source_module: "formulas/finance.rs",
                source_function: "total_paid",
            },

            Formula::TotalInterest => FormulaMetadata {
                name: "Total Interest",
                description: "Amount paid above the principal (overpayment)",
                formula_plain: "I = T − P",
                reference: SourceReference::Arithmetic,
                variables: vec![
                    Variable::new("I", "Total interest", "currency"),
                ],
                assumptions: vec![],
                category: FormulaCategory::Loan,
                source_module: "formulas/finance.rs",
                source_function: "total_interest",
            },

            Formula::AmortizationSplit => FormulaMetadata {
                name: "Amortization Split",
                description: "Division of each payment into interest and principal",
                formula_plain: "interest_k = B_(k−1) × r, principal_k = M − interest_k, B_k = B_(k−1) − principal_k",
                reference: SourceReference::AnnuityPresentValue,
                variables: vec![
                    Variable::new("B_k", "Balance after payment k", "currency"),
                ],
                assumptions: vec!["The final payment retires the remaining balance"],
                category: FormulaCategory::Loan,
                source_module: "calculations/loan.rs",
                source_function: "schedule",
            },

            // Currency
            Formula::CurrencyCrossRate => FormulaMetadata {
                name: "Cross Rate",
                description: "Units of the target currency per one unit of the source",
                formula_plain: "x = rate_to / rate_from",
                reference: SourceReference::Convention { note: "all rates quoted per 1 USD" },
                variables: vec![
                    Variable::new("rate_from", "Source currency per 1 USD", "-"),
                    Variable::new("rate_to", "Target currency per 1 USD", "-"),
                ],
                assumptions: vec!["Fixed rate snapshot, no spread or fees"],
                category: FormulaCategory::Currency,
                source_module: "formulas/finance.rs",
                source_function: "cross_rate",
            },

            Formula::CurrencyConversion => FormulaMetadata {
                name: "Currency Conversion",
                description: "Convert an amount through USD",
                formula_plain: "y = amount / rate_from × rate_to",
                reference: SourceReference::Convention { note: "all rates quoted per 1 USD" },
                variables: vec![
                    Variable::new("amount", "Amount in the source currency", "-"),
                    Variable::new("y", "Amount in the target currency", "-"),
                ],
                assumptions: vec!["Fixed rate snapshot, no spread or fees"],
                category: FormulaCategory::Currency,
                source_module: "formulas/conversion.rs",
                source_function: "pivot_convert",
            },

            // Nutrition
            Formula::HarrisBenedictMale => FormulaMetadata {
                name: "BMR (Harris-Benedict, men)",
                description: "Basal metabolic rate for men, revised equation",
                formula_plain: "BMR = 88.362 + 13.397·W + 4.799·H − 5.677·A",
                reference: SourceReference::RozaShizgal1984,
                variables: vec![
                    Variable::new("W", "Body weight", "kg"),
                    Variable::new("H", "Height", "cm"),
                    Variable::new("A", "Age", "years"),
                ],
                assumptions: vec!["Healthy adult"],
                category: FormulaCategory::Nutrition,
                source_module: "formulas/energy.rs",
                source_function: "bmr_harris_benedict",
            },

            Formula::HarrisBenedictFemale => FormulaMetadata {
                name: "BMR (Harris-Benedict, women)",
                description: "Basal metabolic rate for women, revised equation",
                formula_plain: "BMR = 447.593 + 9.247·W + 3.098·H − 4.330·A",
                reference: SourceReference::RozaShizgal1984,
                variables: vec![
                    Variable::new("W", "Body weight", "kg"),
                    Variable::new("H", "Height", "cm"),
                    Variable::new("A", "Age", "years"),
                ],
                assumptions: vec!["Healthy adult"],
                category: FormulaCategory::Nutrition,
                source_module: "formulas/energy.rs",
                source_function: "bmr_harris_benedict",
            },

            Formula::Tdee => FormulaMetadata {
                name: "Total Daily Energy Expenditure",
                description: "BMR scaled by the activity multiplier",
                formula_plain: "TDEE = BMR × k",
                reference: SourceReference::ActivityFactors,
                variables: vec![
                    Variable::new("k", "Activity multiplier (1.2 - 1.9)", "-"),
                    Variable::new("TDEE", "Maintenance intake", "kcal/day"),
                ],
                assumptions: vec![],
                category: FormulaCategory::Nutrition,
                source_module: "formulas/energy.rs",
                source_function: "tdee",
            },

            Formula::CalorieTargets => FormulaMetadata {
                name: "Calorie Targets",
                description: "Intake for weight loss and weight gain around maintenance",
                formula_plain: "loss = TDEE − Δ, gain = TDEE + Δ",
                reference: SourceReference::Convention { note: "Δ = 500 kcal/day by default" },
                variables: vec![
                    Variable::new("Δ", "Daily adjustment", "kcal/day"),
                ],
                assumptions: vec!["No lower floor on the loss target"],
                category: FormulaCategory::Nutrition,
                source_module: "formulas/energy.rs",
                source_function: "calorie_target",
            },

            Formula::ProteinTarget => FormulaMetadata {
                name: "Protein Target",
                description: "Daily protein from body weight",
                formula_plain: "protein = W × 2 g/kg",
                reference: SourceReference::Convention { note: "2 g/kg by default" },
                variables: vec![
                    Variable::new("W", "Body weight", "kg"),
                ],
                assumptions: vec![],
                category: FormulaCategory::Nutrition,
                source_module: "formulas/energy.rs",
                source_function: "protein_target",
            },

            Formula::FatTarget => FormulaMetadata {
                name: "Fat Target",
                description: "Daily fat from body weight",
                formula_plain: "fat = W × 1 g/kg",
                reference: SourceReference::Convention { note: "1 g/kg by default" },
                variables: vec![
                    Variable::new("W", "Body weight", "kg"),
                ],
                assumptions: vec![],
                category: FormulaCategory::Nutrition,
                source_module: "formulas/energy.rs",
                source_function: "fat_target",
            },

            Formula::CarbRemainder => FormulaMetadata {
                name: "Carbohydrate Remainder",
                description: "Carbohydrate that fills the maintenance budget after protein and fat",
                formula_plain: "carbs = max(0, (TDEE − 4·protein − 9·fat) / 4)",
                reference: SourceReference::Convention { note: "Atwater factors 4/9/4 kcal per gram" },
                variables: vec![
                    Variable::new("carbs", "Carbohydrate", "g/day"),
                ],
                assumptions: vec!["Computed against maintenance intake"],
                category: FormulaCategory::Nutrition,
                source_module: "formulas/energy.rs",
                source_function: "carb_remainder",
            },

            // Unit conversion
            Formula::LinearUnitConversion => FormulaMetadata {
                name: "Linear Unit Conversion",
                description: "Convert between units quoted against the same base unit",
                formula_plain: "y = x / rate_from × rate_to",
                reference: SourceReference::Nist811 { appendix: "B" },
                variables: vec![
                    Variable::new("rate", "Units per metre or per kilogram", "-"),
                ],
                assumptions: vec!["Rates rounded to about six significant figures"],
                category: FormulaCategory::UnitConversion,
                source_module: "formulas/conversion.rs",
                source_function: "pivot_convert",
            },

            Formula::CelsiusToFahrenheit => FormulaMetadata {
                name: "Celsius to Fahrenheit",
                description: "Temperature scale conversion",
                formula_plain: "F = C × 9/5 + 32",
                reference: SourceReference::Nist811 { appendix: "B.9" },
                variables: vec![
                    Variable::new("C", "Temperature", "°C"),
                    Variable::new("F", "Temperature", "°F"),
                ],
                assumptions: vec![],
                category: FormulaCategory::UnitConversion,
                source_module: "formulas/conversion.rs",
                source_function: "celsius_to_fahrenheit",
            },

            Formula::FahrenheitToCelsius => FormulaMetadata {
                name: "Fahrenheit to Celsius",
                description: "Temperature scale conversion",
                formula_plain: "C = (F − 32) × 5/9",
                reference: SourceReference::Nist811 { appendix: "B.9" },
                variables: vec![
                    Variable::new("F", "Temperature", "°F"),
                    Variable::new("C", "Temperature", "°C"),
                ],
                assumptions: vec![],
                category: FormulaCategory::UnitConversion,
                source_module: "formulas/conversion.rs",
                source_function: "fahrenheit_to_celsius",
            },

            Formula::CelsiusToKelvin => FormulaMetadata {
                name: "Celsius to Kelvin",
                description: "Temperature scale conversion",
                formula_plain: "K = C + 273.15",
                reference: SourceReference::Nist811 { appendix: "B.9" },
                variables: vec![
                    Variable::new("K", "Thermodynamic temperature", "K"),
                ],
                assumptions: vec![],
                category: FormulaCategory::UnitConversion,
                source_module: "formulas/conversion.rs",
                source_function: "celsius_to_kelvin",
            },

            Formula::KelvinToCelsius => FormulaMetadata {
                name: "Kelvin to Celsius",
                description: "Temperature scale conversion",
                formula_plain: "C = K − 273.15",
                reference: SourceReference::Nist811 { appendix: "B.9" },
                variables: vec![
                    Variable::new("C", "Temperature", "°C"),
                ],
                assumptions: vec![],
                category: FormulaCategory::UnitConversion,
                source_module: "formulas/conversion.rs",
                source_function: "kelvin_to_celsius",
            },
        }
    }

    /// All categories that have at least one formula, in display order
    pub fn all_categories() -> Vec<FormulaCategory> {
        let mut categories: Vec<FormulaCategory> = ALL_FORMULAS
            .iter()
            .map(|f| f.metadata().category)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        categories.sort_by_key(|c| c.sort_order());
        categories
    }

    /// All formulas in a category, in registry order
    pub fn in_category(category: FormulaCategory) -> Vec<Formula> {
        ALL_FORMULAS
            .iter()
            .copied()
            .filter(|f| f.metadata().category == category)
            .collect()
    }
}

/// Every registered formula, in display order
pub const ALL_FORMULAS: &[Formula] = &[
    Formula::BasicArithmetic,
    // Construction
    Formula::Perimeter,
    Formula::FloorArea,
    Formula::WallArea,
    Formula::WallVolume,
    Formula::MaterialCost,
    // Loan
    Formula::PeriodicRate,
    Formula::PaymentCount,
    Formula::AnnuityPayment,
    Formula::ZeroRatePayment,
    Formula::TotalPaid,
    Formula::TotalInterest,
    Formula::AmortizationSplit,
    // Currency
    Formula::CurrencyCrossRate,
    Formula::CurrencyConversion,
    // Nutrition
    Formula::HarrisBenedictMale,
    Formula::HarrisBenedictFemale,
    Formula::Tdee,
    Formula::CalorieTargets,
    Formula::ProteinTarget,
    Formula::FatTarget,
    Formula::CarbRemainder,
    // Unit conversion
    Formula::LinearUnitConversion,
    Formula::CelsiusToFahrenheit,
    Formula::FahrenheitToCelsius,
    Formula::CelsiusToKelvin,
    Formula::KelvinToCelsius,
];

// ============================================================================
// Formula Usage Tracking
// ============================================================================

/// Record of a formula being applied during a calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormulaUsage {
    /// The formula that was used
    pub formula: Formula,
    /// Context describing where/why it was used (e.g., "Monthly payment")
    pub context: String,
}

impl FormulaUsage {
    pub fn new(formula: Formula, context: impl Into<String>) -> Self {
        Self {
            formula,
            context: context.into(),
        }
    }
}

/// Collector for formula usage during a calculation.
///
/// Calculations record into a tracker and report the deduplicated list in
/// their result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormulaTracker {
    usages: Vec<FormulaUsage>,
}

impl FormulaTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a formula was used
    pub fn record(&mut self, formula: Formula, context: impl Into<String>) {
        self.usages.push(FormulaUsage::new(formula, context));
    }

    /// Get all recorded usages
    pub fn usages(&self) -> &[FormulaUsage] {
        &self.usages
    }

    /// Get unique formulas used (deduplicated, first-use order)
    pub fn unique_formulas(&self) -> Vec<Formula> {
        let mut seen = HashSet::new();
        self.usages
            .iter()
            .filter(|u| seen.insert(u.formula))
            .map(|u| u.formula)
            .collect()
    }

    /// Group unique formulas by category
    pub fn by_category(&self) -> Vec<(FormulaCategory, Vec<Formula>)> {
        let mut by_cat: HashMap<FormulaCategory, Vec<Formula>> = HashMap::new();
        for formula in self.unique_formulas() {
            by_cat.entry(formula.metadata().category).or_default().push(formula);
        }

        let mut result: Vec<_> = by_cat.into_iter().collect();
        result.sort_by_key(|(cat, _)| cat.sort_order());
        result
    }

    /// Merge another tracker into this one
    pub fn merge(&mut self, other: FormulaTracker) {
        self.usages.extend(other.usages);
    }

    /// Consume the tracker, returning the unique formulas
    pub fn into_formulas(self) -> Vec<Formula> {
        self.unique_formulas()
    }
}

// ============================================================================
// Markdown Generation for FORMULAS.md
// ============================================================================

/// Generate a complete FORMULAS.md file for documentation.
///
/// Lists all formulas in the registry, organized by category, with
/// expressions, sources and source code links.
///
/// # Example
///
/// ```rust
/// use calc_core::formulas::registry::generate_formulas_markdown;
///
/// let markdown = generate_formulas_markdown();
/// assert!(markdown.contains("Multicalc Formula Reference"));
/// assert!(markdown.contains("## Loan"));
/// ```
pub fn generate_formulas_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(
        r#"# Multicalc Formula Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-formulas`

Every formula applied by the Multicalc calculators, with its source and the
function that implements it.

---

"#,
    );

    let categories = Formula::all_categories();

    for category in &categories {
        output.push_str(&format!("## {}\n\n", category.display_name()));

        for formula in Formula::in_category(*category) {
            let meta = formula.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!(
                        "| {} | {} | {} |\n",
                        var.symbol, var.description, var.units
                    ));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Formulas:** {}\n- **Categories:** {}\n",
        ALL_FORMULAS.len(),
        categories.len()
    ));

    output
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_formulas_have_metadata() {
        assert_eq!(ALL_FORMULAS.len(), 27);

        for formula in ALL_FORMULAS {
            let meta = formula.metadata();
            assert!(!meta.name.is_empty(), "Formula {:?} has no name", formula);
            assert!(!meta.formula_plain.is_empty(), "Formula {:?} has no expression", formula);
            assert!(!meta.source_function.is_empty(), "Formula {:?} has no source", formula);
        }
    }

    #[test]
    fn test_citation() {
        assert_eq!(
            SourceReference::Nist811 { appendix: "B.9" }.citation(),
            "NIST SP 811, Appendix B.9"
        );
        assert!(SourceReference::RozaShizgal1984.citation().contains("1984"));
    }

    #[test]
    fn test_tracker_dedup() {
        let mut tracker = FormulaTracker::new();
        tracker.record(Formula::FloorArea, "Floor");
        tracker.record(Formula::WallArea, "Walls");
        tracker.record(Formula::FloorArea, "Floor again");

        assert_eq!(tracker.usages().len(), 3);
        assert_eq!(tracker.unique_formulas(), vec![Formula::FloorArea, Formula::WallArea]);
    }

    #[test]
    fn test_by_category_sorted() {
        let mut tracker = FormulaTracker::new();
        tracker.record(Formula::CelsiusToKelvin, "Temp");
        tracker.record(Formula::AnnuityPayment, "Payment");
        tracker.record(Formula::FloorArea, "Floor");

        let groups = tracker.by_category();
        let order: Vec<_> = groups.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            order,
            vec![
                FormulaCategory::Construction,
                FormulaCategory::Loan,
                FormulaCategory::UnitConversion
            ]
        );
    }

    #[test]
    fn test_merge() {
        let mut a = FormulaTracker::new();
        a.record(Formula::Tdee, "TDEE");
        let mut b = FormulaTracker::new();
        b.record(Formula::ProteinTarget, "Protein");
        a.merge(b);
        assert_eq!(a.into_formulas(), vec![Formula::Tdee, Formula::ProteinTarget]);
    }

    #[test]
    fn test_every_category_listed() {
        assert_eq!(Formula::all_categories().len(), 6);
        assert_eq!(Formula::in_category(FormulaCategory::Currency).len(), 2);
    }

    #[test]
    fn test_generate_markdown() {
        let markdown = generate_formulas_markdown();
        for formula in ALL_FORMULAS {
            assert!(markdown.contains(formula.metadata().name));
        }
        assert!(markdown.contains("**Total Formulas:** 27"));
    }
}
