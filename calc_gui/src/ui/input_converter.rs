//! Input view for the unit converter
//!
//! Changing the category resets the unit pair to that category's default.

use iced::widget::{button, column, pick_list, row, text, Column, Space};
use iced::{Alignment, Length, Padding};

use calc_core::forms::ConversionForm;
use calc_core::tables::UnitCategory;

use crate::ui::shared::labeled_input;
use crate::Message;

pub fn view(form: &ConversionForm) -> Column<'_, Message> {
    let units = form.category.units();

    column![
        text("Unit Converter").size(14),
        Space::new().height(8),
        row![
            text("Category:").size(11).width(Length::Fixed(150.0)),
            pick_list(UnitCategory::ALL, Some(form.category), Message::CategorySelected)
                .width(Length::Fill)
                .text_size(11),
        ]
        .align_y(Alignment::Center),
        labeled_input("Value:", &form.value, Message::ValueChanged),
        row![
            pick_list(units, Some(form.from), Message::FromUnitSelected)
                .width(Length::Fill)
                .text_size(11),
            button(text("⇄").size(12))
                .on_press(Message::SwapUnits)
                .padding(Padding::from([4, 8]))
                .style(button::secondary),
            pick_list(units, Some(form.to), Message::ToUnitSelected)
                .width(Length::Fill)
                .text_size(11),
        ]
        .spacing(6)
        .align_y(Alignment::Center),
    ]
    .spacing(6)
}
