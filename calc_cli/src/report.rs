//! Plain-text rendering of results and reference tables.

use std::fmt::Write;

use calc_core::calculations::{
    AmortizationSchedule, CalorieResult, ConstructionResult, ConversionResult, CurrencyResult, LoanResult,
};
use calc_core::format::{fixed, number_text};
use calc_core::formulas::{Formula, FormulaCategory};
use calc_core::tables::DISHES;
use calc_core::CalculationOutcome;

const RULE: &str = "═══════════════════════════════════════";

fn banner(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "  {}", title);
    let _ = writeln!(out, "{}", RULE);
}

fn formulas(out: &mut String, list: &[Formula]) {
    if list.is_empty() {
        return;
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Formulas:");
    for formula in list {
        let meta = formula.metadata();
        let _ = writeln!(out, "  {}: {}", meta.name, meta.formula_plain);
    }
}

pub fn outcome(outcome: &CalculationOutcome) -> String {
    match outcome {
        CalculationOutcome::Arithmetic(r) => {
            let mut out = String::new();
            let _ = writeln!(out, "{}", r.expression);
            out
        }
        CalculationOutcome::Construction(r) => construction(r),
        CalculationOutcome::Loan(r) => loan(r),
        CalculationOutcome::Schedule(s) => schedule(s, None),
        CalculationOutcome::Currency(r) => currency(r),
        CalculationOutcome::Calories(r) => calories(r),
        CalculationOutcome::Conversion(r) => conversion(r),
    }
}

pub fn construction(r: &ConstructionResult) -> String {
    let mut out = String::new();
    banner(&mut out, "CONSTRUCTION ESTIMATE");
    let _ = writeln!(out, "  Perimeter:   {} m", fixed(r.perimeter_m, 2));
    let _ = writeln!(out, "  Floor area:  {} m²", fixed(r.floor_area_m2, 2));
    let _ = writeln!(out, "  Wall area:   {} m²", fixed(r.wall_area_m2, 2));
    let _ = writeln!(out, "  Wall volume: {} m³", fixed(r.wall_volume_m3, 2));
    if let Some(cost) = r.total_cost {
        let _ = writeln!(out, "  Cost:        {}", fixed(cost, 2));
    }
    formulas(&mut out, &r.formulas);
    out
}

pub fn loan(r: &LoanResult) -> String {
    let mut out = String::new();
    banner(&mut out, "LOAN");
    let _ = writeln!(out, "  Monthly payment: {}", fixed(r.monthly_payment, 2));
    let _ = writeln!(out, "  Total paid:      {}", fixed(r.total_paid, 2));
    let _ = writeln!(out, "  Overpayment:     {}", fixed(r.total_interest, 2));
    let _ = writeln!(out, "  Payments:        {}", fixed(r.payment_count, 0));
    formulas(&mut out, &r.formulas);
    out
}

/// Amortization table, optionally limited to the first `limit` rows
pub fn schedule(s: &AmortizationSchedule, limit: Option<usize>) -> String {
    let mut out = String::new();
    banner(&mut out, "AMORTIZATION SCHEDULE");
    let _ = writeln!(
        out,
        "{:>6} {:>14} {:>14} {:>14} {:>16}",
        "Month", "Payment", "Interest", "Principal", "Balance"
    );
    let shown = limit.unwrap_or(s.rows.len());
    for row in s.rows.iter().take(shown) {
        let _ = writeln!(
            out,
            "{:>6} {:>14} {:>14} {:>14} {:>16}",
            row.month,
            fixed(row.payment, 2),
            fixed(row.interest, 2),
            fixed(row.principal, 2),
            fixed(row.balance, 2)
        );
    }
    if s.rows.len() > shown {
        let _ = writeln!(out, "  ... {} more payments", s.rows.len() - shown);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "  Total interest: {}", fixed(s.total_interest(), 2));
    out
}

pub fn currency(r: &CurrencyResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {} = {} {}",
        fixed(r.amount, 2),
        r.from.code(),
        fixed(r.converted, 2),
        r.to.code()
    );
    let _ = writeln!(out, "1 {} = {} {}", r.from.code(), fixed(r.rate, 4), r.to.code());
    out
}

pub fn calories(r: &CalorieResult) -> String {
    let mut out = String::new();
    banner(&mut out, "DAILY TARGETS");
    let _ = writeln!(out, "  BMR:          {} kcal", fixed(r.bmr_kcal, 0));
    let _ = writeln!(out, "  Maintenance:  {} kcal", fixed(r.maintenance_kcal, 0));
    let _ = writeln!(out, "  Weight loss:  {} kcal", fixed(r.weight_loss_kcal, 0));
    let _ = writeln!(out, "  Weight gain:  {} kcal", fixed(r.weight_gain_kcal, 0));
    let _ = writeln!(out);
    let _ = writeln!(out, "  Protein:      {} g", fixed(r.protein_g, 0));
    let _ = writeln!(out, "  Fat:          {} g", fixed(r.fat_g, 0));
    let _ = writeln!(out, "  Carbohydrate: {} g", fixed(r.carbs_g, 0));
    formulas(&mut out, &r.formulas);
    out
}

pub fn conversion(r: &ConversionResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {} = {}", number_text(r.value), r.from.symbol(), r.display());
    out
}

pub fn dishes() -> String {
    let mut out = String::new();
    banner(&mut out, "REFERENCE DISHES (per portion)");
    let _ = writeln!(
        out,
        "{:<20} {:>8} {:>6} {:>8} {:>6} {:>6}",
        "Dish", "Portion", "kcal", "Protein", "Fat", "Carbs"
    );
    for dish in DISHES.iter() {
        let _ = writeln!(
            out,
            "{:<20} {:>8} {:>6} {:>8} {:>6} {:>6}",
            dish.name,
            format!("{} g", fixed(dish.portion_g, 0)),
            fixed(dish.calories_kcal, 0),
            fixed(dish.protein_g, 0),
            fixed(dish.fat_g, 0),
            fixed(dish.carbs_g, 0)
        );
    }
    out
}

pub fn formula_index() -> String {
    let mut out = String::new();
    for category in Formula::all_categories() {
        category_section(&mut out, category);
    }
    out
}

fn category_section(out: &mut String, category: FormulaCategory) {
    let _ = writeln!(out, "{}", category.display_name());
    for formula in Formula::in_category(category) {
        let meta = formula.metadata();
        let _ = writeln!(out, "  {:<28} {}", meta.name, meta.formula_plain);
        let _ = writeln!(out, "  {:<28} [{}]", "", meta.reference.short_form());
    }
    let _ = writeln!(out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::calculations::{currency, loan, CurrencyInput, LoanInput};
    use calc_core::tables::{Currency, CurrencyRates};

    #[test]
    fn test_currency_rate_line() {
        let input = CurrencyInput {
            amount: 100.0,
            from: Currency::Usd,
            to: Currency::Eur,
        };
        let result = currency::calculate(&input, &CurrencyRates::default()).unwrap();
        let text = currency(&result);
        assert!(text.contains("100.00 USD = 92.00 EUR"));
        assert!(text.contains("1 USD = 0.9200 EUR"));
    }

    #[test]
    fn test_schedule_limit() {
        let input = LoanInput {
            principal: 12000.0,
            annual_rate_percent: 0.0,
            term_years: 2.0,
        };
        let s = loan::schedule(&input).unwrap();
        let text = schedule(&s, Some(12));
        assert!(text.contains("12 more payments"));
        assert!(text.contains("Total interest: 0.00"));
    }

    #[test]
    fn test_formula_index_lists_categories() {
        let text = formula_index();
        assert!(text.contains("Loan"));
        assert!(text.contains("Unit Conversion"));
    }

    #[test]
    fn test_dishes_table() {
        assert!(dishes().contains("Beef steak"));
    }
}
