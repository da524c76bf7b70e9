//! Toolbar component
//!
//! Application header and the row of calculator tabs with the theme toggle.

use iced::widget::{button, row, text, Row, Space};
use iced::{Alignment, Element, Length, Padding};

use calc_core::CalculatorTab;

use crate::Message;

/// Render the application header
pub fn view_header() -> Element<'static, Message> {
    row![
        text("Multicalc").size(28),
        Space::new().width(Length::Fill),
        text("Everyday calculators").size(14),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Render one button per calculator, the active one highlighted
pub fn view_tab_bar(active: CalculatorTab, dark_mode: bool) -> Element<'static, Message> {
    let tabs = CalculatorTab::ALL.iter().fold(Row::new().spacing(4), |tabs, tab| {
        tabs.push(
            button(text(tab.display_name()).size(12))
                .on_press(Message::TabSelected(*tab))
                .padding(Padding::from([4, 12]))
                .style(if *tab == active { button::primary } else { button::secondary }),
        )
    });

    let theme_label = if dark_mode { "Light Mode" } else { "Dark Mode" };

    row![
        tabs,
        Space::new().width(Length::Fill),
        button(text(theme_label).size(11))
            .on_press(Message::ToggleDarkMode)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
    ]
    .padding(Padding::from([4, 0]))
    .align_y(Alignment::Center)
    .into()
}
