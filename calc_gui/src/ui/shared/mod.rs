//! Shared UI components reusable across input/result modules
//!
//! Contains:
//! - `labeled_input` - Label + text input row
//! - `labeled_value` - Label + value text row
//! - `view_outcome` - Placeholder, error or result for a form outcome
//! - `view_formulas` - "Formulas used" list under a result

use iced::widget::{column, row, text, text_input, Column, Space};
use iced::{Alignment, Element, Length};

use calc_core::forms::FormOutcome;
use calc_core::formulas::Formula;

use crate::Message;

/// Muted text color for hints
pub const HINT_COLOR: [f32; 3] = [0.5, 0.5, 0.5];
/// Error text color
pub const ERROR_COLOR: [f32; 3] = [0.8, 0.2, 0.2];

pub fn labeled_input<'a>(
    label: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(150.0)),
        text_input("", value)
            .on_input(on_change)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}

pub fn labeled_value<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(170.0)),
        text(value).size(11),
    ]
    .into()
}

/// Render a form outcome: a hint while incomplete, the error when invalid,
/// otherwise whatever `ready` builds from the result
pub fn view_outcome<'a, T>(
    outcome: &'a FormOutcome<T>,
    hint: &'a str,
    ready: impl FnOnce(&'a T) -> Column<'a, Message>,
) -> Column<'a, Message> {
    match outcome {
        FormOutcome::Incomplete => column![text(hint).size(12).color(HINT_COLOR)],
        FormOutcome::Invalid(err) => column![
            text("Error").size(14),
            Space::new().height(8),
            text(err.to_string()).size(12).color(ERROR_COLOR),
        ],
        FormOutcome::Ready(result) => ready(result),
    }
}

/// List the formulas a result applied
pub fn view_formulas(formulas: &[Formula]) -> Column<'static, Message> {
    let mut list = column![text("Formulas Used").size(12)].spacing(2);
    for formula in formulas {
        let meta = formula.metadata();
        list = list.push(
            text(format!("{}: {}", meta.name, meta.formula_plain))
                .size(10)
                .color(HINT_COLOR),
        );
    }
    list
}
