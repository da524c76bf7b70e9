//! Results Panel (Right)
//!
//! Dispatches to the results view of the active calculator tab.

use iced::widget::{container, scrollable, Column};
use iced::{Element, Length};

use calc_core::CalculatorTab;

use crate::{App, Message};
use super::{result_basic, result_calories, result_construction, result_converter, result_finance};

/// Render the results panel for the active tab
///
/// Uses the complementary share of `input_ratio`.
pub fn view_results_panel(app: &App, input_ratio: f32) -> Element<'_, Message> {
    let content: Column<'_, Message> = match app.tab {
        CalculatorTab::Basic => result_basic::view(&app.keypad),
        CalculatorTab::Construction => result_construction::view(&app.construction_result),
        CalculatorTab::Finance => result_finance::view(app),
        CalculatorTab::Calories => result_calories::view(&app.calorie_result),
        CalculatorTab::Converter => result_converter::view(&app.conversion_result),
    };

    let portion = ((1.0 - input_ratio) * 100.0) as u16;

    container(scrollable(content.padding(8)))
        .width(Length::FillPortion(portion))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}
