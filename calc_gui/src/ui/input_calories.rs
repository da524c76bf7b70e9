//! Input view for calorie targets

use iced::widget::{column, pick_list, row, text, Column, Space};
use iced::{Alignment, Length};

use calc_core::forms::CalorieForm;
use calc_core::tables::{ActivityLevel, Sex};

use crate::ui::shared::labeled_input;
use crate::Message;

pub fn view(form: &CalorieForm) -> Column<'_, Message> {
    column![
        text("Body").size(14),
        Space::new().height(8),
        labeled_input("Weight (kg):", &form.weight_kg, Message::WeightChanged),
        labeled_input("Height (cm):", &form.height_cm, Message::BodyHeightChanged),
        labeled_input("Age (years):", &form.age_years, Message::AgeChanged),
        row![
            text("Sex:").size(11).width(Length::Fixed(150.0)),
            pick_list(Sex::ALL, Some(form.sex), Message::SexSelected)
                .width(Length::Fill)
                .text_size(11),
        ]
        .align_y(Alignment::Center),
        row![
            text("Activity:").size(11).width(Length::Fixed(150.0)),
            pick_list(ActivityLevel::ALL, Some(form.activity), Message::ActivitySelected)
                .width(Length::Fill)
                .text_size(11),
        ]
        .align_y(Alignment::Center),
    ]
    .spacing(6)
}
