//! Input view for the construction estimate

use iced::widget::{column, text, Column, Space};

use calc_core::forms::ConstructionForm;

use crate::ui::shared::{labeled_input, HINT_COLOR};
use crate::Message;

pub fn view(form: &ConstructionForm) -> Column<'_, Message> {
    column![
        text("Building").size(14),
        Space::new().height(8),
        labeled_input("Width (m):", &form.width_m, Message::WidthChanged),
        labeled_input("Length (m):", &form.length_m, Message::LengthChanged),
        labeled_input("Wall height (m):", &form.height_m, Message::WallHeightChanged),
        labeled_input("Wall thickness (m):", &form.wall_thickness_m, Message::ThicknessChanged),
        Space::new().height(10),
        text("Material").size(14),
        Space::new().height(8),
        labeled_input("Price per m³:", &form.material_cost_per_m3, Message::CostChanged),
        text("Leave blank to skip the cost estimate").size(10).color(HINT_COLOR),
    ]
    .spacing(6)
}
