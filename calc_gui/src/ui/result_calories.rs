//! Results view for calorie targets
//!
//! Calorie targets and macros, then the reference dish catalogue.

use iced::widget::{column, text, Column, Row, Space};
use iced::Length;

use calc_core::calculations::CalorieResult;
use calc_core::forms::FormOutcome;
use calc_core::format::fixed;
use calc_core::tables::DISHES;

use crate::ui::shared::{labeled_value, view_formulas, view_outcome, HINT_COLOR};
use crate::Message;

pub fn view(outcome: &FormOutcome<CalorieResult>) -> Column<'_, Message> {
    let targets = view_outcome(outcome, "Enter weight, height and age", view_targets);

    column![targets, Space::new().height(16), view_dishes()]
}

fn view_targets(result: &CalorieResult) -> Column<'_, Message> {
    let kcal = |v: f64| format!("{} kcal", fixed(v, 0));
    let grams = |v: f64| format!("{} g", fixed(v, 0));

    column![
        text("Daily Targets").size(14),
        Space::new().height(8),
        labeled_value("BMR:", kcal(result.bmr_kcal)),
        labeled_value("Maintenance:", kcal(result.maintenance_kcal)),
        labeled_value("Weight loss:", kcal(result.weight_loss_kcal)),
        labeled_value("Weight gain:", kcal(result.weight_gain_kcal)),
        Space::new().height(8),
        text("Macros").size(12),
        labeled_value("Protein:", grams(result.protein_g)),
        labeled_value("Fat:", grams(result.fat_g)),
        labeled_value("Carbohydrate:", grams(result.carbs_g)),
        Space::new().height(12),
        view_formulas(&result.formulas),
    ]
    .spacing(4)
}

fn view_dishes() -> Column<'static, Message> {
    let cell = |s: String| text(s).size(10).width(Length::FillPortion(1));

    let header = ["Dish", "Portion", "kcal", "Protein", "Fat", "Carbs"]
        .into_iter()
        .fold(Row::new(), |r, h| r.push(cell(h.to_string())));

    let mut table = column![text("Reference Dishes").size(14), Space::new().height(8), header].spacing(2);
    for dish in DISHES.iter() {
        table = table.push(
            Row::new()
                .push(cell(dish.name.to_string()))
                .push(cell(format!("{} g", fixed(dish.portion_g, 0))))
                .push(cell(fixed(dish.calories_kcal, 0)))
                .push(cell(format!("{} g", fixed(dish.protein_g, 0))))
                .push(cell(format!("{} g", fixed(dish.fat_g, 0))))
                .push(cell(format!("{} g", fixed(dish.carbs_g, 0)))),
        );
    }
    table.push(text("Values per portion").size(10).color(HINT_COLOR))
}
