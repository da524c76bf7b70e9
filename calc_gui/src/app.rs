//! Application state, messages and update logic.
//!
//! Forms hold the raw text the user typed; every edit re-evaluates the form
//! of the active calculator so results always match the inputs.

use iced::widget::{column, row, Space};
use iced::{Element, Length, Task, Theme};

use calc_core::calculations::{
    AmortizationSchedule, CalculatorTab, CalorieResult, ConstructionResult, ConversionResult,
    CurrencyResult, Key, Keypad, LoanResult, NutritionParams,
};
use calc_core::forms::{CalorieForm, ConstructionForm, ConversionForm, CurrencyForm, FormOutcome, LoanForm};
use calc_core::tables::{ActivityLevel, Currency, CurrencyRates, Sex, Unit, UnitCategory};
use calc_core::Settings;

use crate::ui::{input_panel, results_panel, status_bar, toolbar};

/// Share of the width given to the input panel
const INPUT_RATIO: f32 = 0.45;

#[derive(Debug, Clone)]
pub enum Message {
    // Chrome
    TabSelected(CalculatorTab),
    ToggleDarkMode,

    // Basic
    KeyPressed(Key),

    // Construction
    WidthChanged(String),
    LengthChanged(String),
    WallHeightChanged(String),
    ThicknessChanged(String),
    CostChanged(String),

    // Loan
    PrincipalChanged(String),
    RateChanged(String),
    TermChanged(String),

    // Currency
    AmountChanged(String),
    FromCurrencySelected(Currency),
    ToCurrencySelected(Currency),
    SwapCurrencies,

    // Calories
    WeightChanged(String),
    BodyHeightChanged(String),
    AgeChanged(String),
    SexSelected(Sex),
    ActivitySelected(ActivityLevel),

    // Converter
    CategorySelected(UnitCategory),
    ValueChanged(String),
    FromUnitSelected(Unit),
    ToUnitSelected(Unit),
    SwapUnits,
}

pub struct App {
    pub tab: CalculatorTab,
    pub dark_mode: bool,
    pub status: String,

    pub rates: CurrencyRates,
    pub nutrition: NutritionParams,

    pub keypad: Keypad,
    pub keypad_error: Option<String>,

    pub construction: ConstructionForm,
    pub construction_result: FormOutcome<ConstructionResult>,

    pub loan: LoanForm,
    pub loan_result: FormOutcome<LoanResult>,
    pub schedule: Option<AmortizationSchedule>,

    pub currency: CurrencyForm,
    pub currency_result: FormOutcome<CurrencyResult>,

    pub calories: CalorieForm,
    pub calorie_result: FormOutcome<CalorieResult>,

    pub conversion: ConversionForm,
    pub conversion_result: FormOutcome<ConversionResult>,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let rates = settings.currency_rates().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "currency overrides rejected");
            CurrencyRates::default()
        });

        Self {
            tab: CalculatorTab::default(),
            dark_mode: true,
            status: "Ready".to_string(),
            rates,
            nutrition: settings.nutrition_params(),
            keypad: Keypad::with_capacity(settings.history_capacity),
            keypad_error: None,
            construction: ConstructionForm::with_settings(&settings),
            construction_result: FormOutcome::Incomplete,
            loan: LoanForm::default(),
            loan_result: FormOutcome::Incomplete,
            schedule: None,
            currency: CurrencyForm::default(),
            currency_result: FormOutcome::Incomplete,
            calories: CalorieForm::default(),
            calorie_result: FormOutcome::Incomplete,
            conversion: ConversionForm::default(),
            conversion_result: FormOutcome::Incomplete,
        }
    }

    /// Replace the initial status line
    pub fn with_status(mut self, status: Option<String>) -> Self {
        if let Some(status) = status {
            self.status = status;
        }
        self
    }

    pub fn title(&self) -> String {
        format!("Multicalc - {}", self.tab.display_name())
    }

    pub fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(tab) => {
                self.tab = tab;
                self.status = format!("{} calculator", tab.display_name());
            }
            Message::ToggleDarkMode => self.dark_mode = !self.dark_mode,

            Message::KeyPressed(key) => self.press_key(key),

            Message::WidthChanged(v) => self.edit_construction(|f| f.width_m = v),
            Message::LengthChanged(v) => self.edit_construction(|f| f.length_m = v),
            Message::WallHeightChanged(v) => self.edit_construction(|f| f.height_m = v),
            Message::ThicknessChanged(v) => self.edit_construction(|f| f.wall_thickness_m = v),
            Message::CostChanged(v) => self.edit_construction(|f| f.material_cost_per_m3 = v),

            Message::PrincipalChanged(v) => self.edit_loan(|f| f.principal = v),
            Message::RateChanged(v) => self.edit_loan(|f| f.annual_rate_percent = v),
            Message::TermChanged(v) => self.edit_loan(|f| f.term_years = v),

            Message::AmountChanged(v) => self.edit_currency(|f| f.amount = v),
            Message::FromCurrencySelected(c) => self.edit_currency(|f| f.from = c),
            Message::ToCurrencySelected(c) => self.edit_currency(|f| f.to = c),
            Message::SwapCurrencies => self.edit_currency(CurrencyForm::swap),

            Message::WeightChanged(v) => self.edit_calories(|f| f.weight_kg = v),
            Message::BodyHeightChanged(v) => self.edit_calories(|f| f.height_cm = v),
            Message::AgeChanged(v) => self.edit_calories(|f| f.age_years = v),
            Message::SexSelected(s) => self.edit_calories(|f| f.sex = s),
            Message::ActivitySelected(a) => self.edit_calories(|f| f.activity = a),

            Message::CategorySelected(c) => self.edit_conversion(|f| f.set_category(c)),
            Message::ValueChanged(v) => self.edit_conversion(|f| f.value = v),
            Message::FromUnitSelected(u) => self.edit_conversion(|f| f.from = u),
            Message::ToUnitSelected(u) => self.edit_conversion(|f| f.to = u),
            Message::SwapUnits => self.edit_conversion(ConversionForm::swap),
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let main_content = row![
            input_panel::view_input_panel(self, INPUT_RATIO),
            Space::new().width(10),
            results_panel::view_results_panel(self, INPUT_RATIO),
        ]
        .height(Length::Fill);

        column![
            toolbar::view_header(),
            toolbar::view_tab_bar(self.tab, self.dark_mode),
            main_content,
            status_bar::view_status_bar(self.tab, &self.status),
        ]
        .spacing(6)
        .padding(10)
        .into()
    }

    // ------------------------------------------------------------------
    // Per-calculator edits
    // ------------------------------------------------------------------

    fn press_key(&mut self, key: Key) {
        match self.keypad.press(key) {
            Ok(()) => self.keypad_error = None,
            Err(e) => {
                tracing::debug!(error = %e, "keypad error");
                self.keypad_error = Some(e.to_string());
            }
        }
    }

    fn edit_construction(&mut self, edit: impl FnOnce(&mut ConstructionForm)) {
        edit(&mut self.construction);
        self.construction_result = self.construction.evaluate();
    }

    fn edit_loan(&mut self, edit: impl FnOnce(&mut LoanForm)) {
        edit(&mut self.loan);
        self.loan_result = self.loan.evaluate();
        self.schedule = self.loan.schedule().ready();
    }

    fn edit_currency(&mut self, edit: impl FnOnce(&mut CurrencyForm)) {
        edit(&mut self.currency);
        self.currency_result = self.currency.evaluate(&self.rates);
    }

    fn edit_calories(&mut self, edit: impl FnOnce(&mut CalorieForm)) {
        edit(&mut self.calories);
        self.calorie_result = self.calories.evaluate(&self.nutrition);
    }

    fn edit_conversion(&mut self, edit: impl FnOnce(&mut ConversionForm)) {
        edit(&mut self.conversion);
        self.conversion_result = self.conversion.evaluate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::calculations::Operator;

    fn app() -> App {
        App::new(Settings::default())
    }

    #[test]
    fn test_keypad_messages() {
        let mut app = app();
        for key in [Key::Digit(9), Key::Operator(Operator::Divide), Key::Digit(0), Key::Equals] {
            let _ = app.update(Message::KeyPressed(key));
        }
        assert_eq!(app.keypad.display(), "Error");
        assert!(app.keypad_error.is_some());

        let _ = app.update(Message::KeyPressed(Key::Digit(4)));
        assert_eq!(app.keypad.display(), "4");
        assert!(app.keypad_error.is_none());
    }

    #[test]
    fn test_construction_recomputes_on_edit() {
        let mut app = app();
        let _ = app.update(Message::WidthChanged("6".into()));
        let _ = app.update(Message::LengthChanged("8".into()));
        assert!(app.construction_result.is_incomplete());

        let _ = app.update(Message::WallHeightChanged("3".into()));
        let result = app.construction_result.clone().ready().unwrap();
        assert_eq!(result.floor_area_m2, 48.0);
    }

    #[test]
    fn test_loan_fills_schedule() {
        let mut app = app();
        let _ = app.update(Message::PrincipalChanged("12000".into()));
        let _ = app.update(Message::RateChanged("0".into()));
        assert!(app.schedule.is_none());
        let _ = app.update(Message::TermChanged("1".into()));
        assert_eq!(app.schedule.as_ref().map(|s| s.rows.len()), Some(12));

        let _ = app.update(Message::TermChanged("x".into()));
        assert!(app.loan_result.error().is_some());
        assert!(app.schedule.is_none());
    }

    #[test]
    fn test_currency_swap() {
        let mut app = app();
        let _ = app.update(Message::AmountChanged("925".into()));
        let _ = app.update(Message::SwapCurrencies);
        let result = app.currency_result.clone().ready().unwrap();
        assert_eq!(result.from, Currency::Rub);
        assert_eq!(result.to, Currency::Usd);
        assert!((result.converted - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_category_resets_pair() {
        let mut app = app();
        let _ = app.update(Message::ValueChanged("1".into()));
        let _ = app.update(Message::CategorySelected(UnitCategory::Weight));
        assert_eq!(app.conversion.from, Unit::Kilograms);
        assert_eq!(app.conversion.to, Unit::Pounds);
        let result = app.conversion_result.clone().ready().unwrap();
        assert!((result.converted - 2.20462).abs() < 1e-9);
    }

    #[test]
    fn test_settings_applied() {
        let settings = Settings {
            history_capacity: 3,
            default_wall_thickness_m: 0.3,
            ..Settings::default()
        };
        let app = App::new(settings);
        assert_eq!(app.keypad.capacity(), 3);
        assert_eq!(app.construction.wall_thickness_m, "0.3");
    }

    #[test]
    fn test_title_and_theme() {
        let mut app = app();
        let _ = app.update(Message::TabSelected(CalculatorTab::Finance));
        assert_eq!(app.title(), "Multicalc - Finance");
        let _ = app.update(Message::ToggleDarkMode);
        assert_eq!(app.theme(), Theme::Light);
    }
}
