//! Input view for the basic calculator
//!
//! Displays the current number, the pending operation and the keypad.

use iced::widget::{button, column, container, row, text, Column, Row, Space};
use iced::{Alignment, Element, Length};

use calc_core::calculations::{Key, Operator};
use calc_core::format::number_text;

use crate::ui::shared::ERROR_COLOR;
use crate::{App, Message};

/// Keypad rows, top to bottom
const KEY_ROWS: [[Key; 4]; 4] = [
    [Key::Digit(7), Key::Digit(8), Key::Digit(9), Key::Operator(Operator::Divide)],
    [Key::Digit(4), Key::Digit(5), Key::Digit(6), Key::Operator(Operator::Multiply)],
    [Key::Digit(1), Key::Digit(2), Key::Digit(3), Key::Operator(Operator::Subtract)],
    [Key::Digit(0), Key::Decimal, Key::Equals, Key::Operator(Operator::Add)],
];

pub fn view(app: &App) -> Column<'_, Message> {
    let pending = match app.keypad.pending() {
        Some((lhs, op)) => format!("{} {}", number_text(lhs), op),
        None => String::new(),
    };

    let display = container(
        column![
            text(pending).size(14),
            text(app.keypad.display()).size(36),
        ]
        .align_x(Alignment::End),
    )
    .width(Length::Fill)
    .align_x(Alignment::End)
    .padding(10)
    .style(container::bordered_box);

    let mut keypad = Column::new().spacing(6);
    for key_row in KEY_ROWS {
        let buttons = key_row
            .iter()
            .fold(Row::new().spacing(6), |r, key| r.push(key_button(*key)));
        keypad = keypad.push(buttons);
    }
    keypad = keypad.push(key_button(Key::Clear));

    let error: Element<'_, Message> = match &app.keypad_error {
        Some(message) => text(message).size(11).color(ERROR_COLOR).into(),
        None => Space::new().height(0).into(),
    };

    column![
        text("Basic Calculator").size(14),
        Space::new().height(8),
        display,
        error,
        Space::new().height(8),
        keypad,
    ]
    .spacing(4)
}

fn key_label(key: Key) -> String {
    match key {
        Key::Digit(d) => d.to_string(),
        Key::Decimal => ".".to_string(),
        Key::Operator(op) => op.symbol().to_string(),
        Key::Equals => "=".to_string(),
        Key::Clear => "C".to_string(),
        Key::ClearHistory => "Clear history".to_string(),
    }
}

fn key_button(key: Key) -> Element<'static, Message> {
    let style = match key {
        Key::Digit(_) | Key::Decimal => button::secondary,
        Key::Equals => button::success,
        Key::Clear | Key::ClearHistory => button::danger,
        Key::Operator(_) => button::primary,
    };

    button(
        container(text(key_label(key)).size(18))
            .width(Length::Fill)
            .align_x(Alignment::Center),
    )
    .on_press(Message::KeyPressed(key))
    .width(Length::Fill)
    .height(Length::Fixed(48.0))
    .style(style)
    .into()
}
