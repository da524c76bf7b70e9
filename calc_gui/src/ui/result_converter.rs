//! Results view for the unit converter

use iced::widget::{column, text, Column, Space};

use calc_core::calculations::ConversionResult;
use calc_core::forms::FormOutcome;
use calc_core::format::number_text;

use crate::ui::shared::{view_formulas, view_outcome};
use crate::Message;

pub fn view(outcome: &FormOutcome<ConversionResult>) -> Column<'_, Message> {
    view_outcome(outcome, "Enter a value to convert", |result| {
        column![
            text("Result").size(14),
            Space::new().height(8),
            text(format!("{} {} =", number_text(result.value), result.from.symbol())).size(12),
            text(result.display()).size(24),
            Space::new().height(12),
            view_formulas(&result.formulas),
        ]
    })
}
