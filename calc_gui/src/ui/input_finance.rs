//! Input view for the finance tab
//!
//! Loan terms on top, the currency converter below.

use iced::widget::{button, column, pick_list, row, text, Column, Space};
use iced::{Alignment, Length, Padding};

use calc_core::tables::Currency;

use crate::ui::shared::labeled_input;
use crate::{App, Message};

pub fn view(app: &App) -> Column<'_, Message> {
    let loan = column![
        text("Loan").size(14),
        Space::new().height(8),
        labeled_input("Loan amount:", &app.loan.principal, Message::PrincipalChanged),
        labeled_input("Annual rate (%):", &app.loan.annual_rate_percent, Message::RateChanged),
        labeled_input("Term (years):", &app.loan.term_years, Message::TermChanged),
    ]
    .spacing(6);

    let pair = row![
        pick_list(Currency::ALL, Some(app.currency.from), Message::FromCurrencySelected)
            .width(Length::Fill)
            .text_size(11),
        button(text("⇄").size(12))
            .on_press(Message::SwapCurrencies)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
        pick_list(Currency::ALL, Some(app.currency.to), Message::ToCurrencySelected)
            .width(Length::Fill)
            .text_size(11),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    let currency = column![
        text("Currency").size(14),
        Space::new().height(8),
        labeled_input("Amount:", &app.currency.amount, Message::AmountChanged),
        pair,
    ]
    .spacing(6);

    column![loan, Space::new().height(16), currency]
}
