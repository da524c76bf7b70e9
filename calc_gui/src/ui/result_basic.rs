//! Results view for the basic calculator: the history list, newest first.

use iced::widget::{button, column, row, text, Column, Space};
use iced::{Alignment, Length, Padding};

use calc_core::calculations::{Key, Keypad};

use crate::ui::shared::HINT_COLOR;
use crate::Message;

pub fn view(keypad: &Keypad) -> Column<'_, Message> {
    let header = row![
        text("History").size(14),
        Space::new().width(Length::Fill),
        button(text("Clear history").size(11))
            .on_press_maybe((keypad.history_len() > 0).then_some(Message::KeyPressed(Key::ClearHistory)))
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
    ]
    .align_y(Alignment::Center);

    let mut list = Column::new().spacing(4);
    if keypad.history_len() == 0 {
        list = list.push(text("No calculations yet").size(12).color(HINT_COLOR));
    }
    for entry in keypad.history() {
        list = list.push(
            row![
                text(entry.to_string()).size(13),
                Space::new().width(Length::Fill),
                text(entry.at.format("%H:%M:%S").to_string()).size(10).color(HINT_COLOR),
            ]
            .align_y(Alignment::Center),
        );
    }

    column![
        header,
        Space::new().height(8),
        list,
        Space::new().height(8),
        text(format!("Keeps the last {} results", keypad.capacity())).size(10).color(HINT_COLOR),
    ]
}
