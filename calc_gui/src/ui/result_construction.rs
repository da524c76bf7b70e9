//! Results view for the construction estimate

use iced::widget::{column, text, Column, Space};

use calc_core::calculations::ConstructionResult;
use calc_core::forms::FormOutcome;
use calc_core::format::fixed;

use crate::ui::shared::{labeled_value, view_formulas, view_outcome};
use crate::Message;

pub fn view(outcome: &FormOutcome<ConstructionResult>) -> Column<'_, Message> {
    view_outcome(outcome, "Enter width, length and wall height", view_result)
}

fn view_result(result: &ConstructionResult) -> Column<'_, Message> {
    let mut quantities = column![
        labeled_value("Perimeter:", format!("{} m", fixed(result.perimeter_m, 2))),
        labeled_value("Floor area:", format!("{} m²", fixed(result.floor_area_m2, 2))),
        labeled_value("Wall area:", format!("{} m²", fixed(result.wall_area_m2, 2))),
        labeled_value("Wall volume:", format!("{} m³", fixed(result.wall_volume_m3, 2))),
    ]
    .spacing(4);

    if let Some(cost) = result.total_cost {
        quantities = quantities.push(labeled_value("Material cost:", fixed(cost, 2)));
    }

    column![
        text("Estimate").size(14),
        Space::new().height(8),
        quantities,
        Space::new().height(12),
        view_formulas(&result.formulas),
    ]
}
