//! Status Bar (Bottom)
//!
//! Displays the active calculator and the latest status message.

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use calc_core::CalculatorTab;

use crate::Message;

/// Render the status bar
pub fn view_status_bar(tab: CalculatorTab, status: &str) -> Element<'_, Message> {
    row![
        text(tab.display_name()).size(10),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
