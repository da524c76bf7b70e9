//! Input Panel (Left)
//!
//! Dispatches to the input editor of the active calculator tab.

use iced::widget::{container, scrollable, Column};
use iced::{Element, Length};

use calc_core::CalculatorTab;

use crate::{App, Message};
use super::{input_basic, input_calories, input_construction, input_converter, input_finance};

/// Render the input panel for the active tab
///
/// The `ratio` parameter determines the relative size of this panel vs results panel.
pub fn view_input_panel(app: &App, ratio: f32) -> Element<'_, Message> {
    let panel: Column<'_, Message> = match app.tab {
        CalculatorTab::Basic => input_basic::view(app),
        CalculatorTab::Construction => input_construction::view(&app.construction),
        CalculatorTab::Finance => input_finance::view(app),
        CalculatorTab::Calories => input_calories::view(&app.calories),
        CalculatorTab::Converter => input_converter::view(&app.conversion),
    };

    // Convert ratio to fill portion (scale to 0-100 for better precision)
    let portion = (ratio * 100.0) as u16;

    container(scrollable(panel.padding(8)))
        .width(Length::FillPortion(portion))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}
