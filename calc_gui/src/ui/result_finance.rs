//! Results view for the finance tab
//!
//! Shows:
//! - Loan payment summary
//! - First year of the amortization schedule
//! - Converted currency amount and the cross rate

use iced::widget::{column, row, text, Column, Row, Space};
use iced::Length;

use calc_core::calculations::{AmortizationSchedule, CurrencyResult, LoanResult};
use calc_core::format::fixed;

use crate::ui::shared::{labeled_value, view_formulas, view_outcome, HINT_COLOR};
use crate::{App, Message};

/// Schedule rows shown in the panel
const SCHEDULE_PREVIEW_ROWS: usize = 12;

pub fn view(app: &App) -> Column<'_, Message> {
    let loan = view_outcome(&app.loan_result, "Enter loan amount, rate and term", |result| {
        view_loan(result, app.schedule.as_ref())
    });

    let currency = view_outcome(&app.currency_result, "Enter an amount to convert", view_currency);

    column![
        text("Loan").size(14),
        Space::new().height(8),
        loan,
        Space::new().height(16),
        text("Currency").size(14),
        Space::new().height(8),
        currency,
    ]
}

fn view_loan<'a>(result: &'a LoanResult, schedule: Option<&'a AmortizationSchedule>) -> Column<'a, Message> {
    let summary = column![
        labeled_value("Monthly payment:", fixed(result.monthly_payment, 2)),
        labeled_value("Total paid:", fixed(result.total_paid, 2)),
        labeled_value("Overpayment (interest):", fixed(result.total_interest, 2)),
        labeled_value("Payments:", fixed(result.payment_count, 0)),
    ]
    .spacing(4);

    let mut content = column![summary];
    if let Some(schedule) = schedule {
        content = content
            .push(Space::new().height(12))
            .push(view_schedule(schedule));
    }
    content
        .push(Space::new().height(12))
        .push(view_formulas(&result.formulas))
}

fn schedule_row(cells: [String; 5]) -> Row<'static, Message> {
    cells.into_iter().fold(Row::new(), |r, cell| {
        r.push(text(cell).size(10).width(Length::FillPortion(1)))
    })
}

fn view_schedule(schedule: &AmortizationSchedule) -> Column<'static, Message> {
    let mut table = column![
        text("Schedule").size(12),
        schedule_row([
            "Month".into(),
            "Payment".into(),
            "Interest".into(),
            "Principal".into(),
            "Balance".into(),
        ]),
    ]
    .spacing(2);

    for r in schedule.rows.iter().take(SCHEDULE_PREVIEW_ROWS) {
        table = table.push(schedule_row([
            r.month.to_string(),
            fixed(r.payment, 2),
            fixed(r.interest, 2),
            fixed(r.principal, 2),
            fixed(r.balance, 2),
        ]));
    }

    if schedule.rows.len() > SCHEDULE_PREVIEW_ROWS {
        table = table.push(
            text(format!("... {} more payments", schedule.rows.len() - SCHEDULE_PREVIEW_ROWS))
                .size(10)
                .color(HINT_COLOR),
        );
    }
    table
}

fn view_currency(result: &CurrencyResult) -> Column<'_, Message> {
    column![
        text(format!(
            "{} {} = {} {}",
            fixed(result.amount, 2),
            result.from.code(),
            fixed(result.converted, 2),
            result.to.code()
        ))
        .size(20),
        row![text(format!(
            "1 {} = {} {}",
            result.from.code(),
            fixed(result.rate, 4),
            result.to.code()
        ))
        .size(11)
        .color(HINT_COLOR)],
        Space::new().height(12),
        view_formulas(&result.formulas),
    ]
}
