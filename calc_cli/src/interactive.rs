//! Interactive front ends: the numbered menu and the line keypad.

use std::io::{BufRead, Write};

use anyhow::Result;

use calc_core::calculations::{
    CalorieInput, ConstructionInput, ConversionInput, CurrencyInput, Keypad, LoanInput, Operator,
};
use calc_core::forms::parse_number;
use calc_core::tables::{ActivityLevel, Currency, Sex, Unit};
use calc_core::{CalcError, CalculationOutcome, CalculationRequest, Settings};

use crate::prompt::{prompt_f64, prompt_line, prompt_parse};
use crate::report;

const MENU: &[&str] = &[
    "Basic keypad",
    "Construction estimate",
    "Loan",
    "Loan schedule",
    "Currency",
    "Calories",
    "Unit conversion",
    "Reference dishes",
    "Formula index",
];

/// Numbered menu until `q` or end of input
pub fn run_menu(settings: &Settings) -> Result<()> {
    println!("Multicalc CLI");
    println!("=============");

    loop {
        println!();
        for (i, item) in MENU.iter().enumerate() {
            println!("  {}. {}", i + 1, item);
        }
        println!("  q. Quit");

        let Some(choice) = prompt_line("> ") else {
            return Ok(());
        };
        println!();

        let request = match choice.as_str() {
            "1" => {
                let stdin = std::io::stdin();
                run_keypad(settings, stdin.lock(), std::io::stdout())?;
                continue;
            }
            "2" => CalculationRequest::Construction(prompt_construction(settings)),
            "3" => CalculationRequest::Loan(prompt_loan()),
            "4" => CalculationRequest::Schedule(prompt_loan()),
            "5" => CalculationRequest::Currency(prompt_currency()),
            "6" => CalculationRequest::Calories(prompt_calories()),
            "7" => CalculationRequest::Conversion(prompt_conversion()),
            "8" => {
                print!("{}", report::dishes());
                continue;
            }
            "9" => {
                print!("{}", report::formula_index());
                continue;
            }
            "q" | "Q" | "quit" | "exit" => return Ok(()),
            other => {
                println!("Unknown choice '{}'", other);
                continue;
            }
        };

        match request.evaluate_with(settings) {
            Ok(CalculationOutcome::Schedule(s)) => print!("{}", report::schedule(&s, None)),
            Ok(outcome) => print!("{}", report::outcome(&outcome)),
            Err(e) => println!("Error: {}", e),
        }
    }
}

fn prompt_construction(settings: &Settings) -> ConstructionInput {
    let thickness = settings.default_wall_thickness_m;
    let width_m = prompt_f64("Width (m) [6.0]: ", 6.0);
    let length_m = prompt_f64("Length (m) [8.0]: ", 8.0);
    let height_m = prompt_f64("Wall height (m) [3.0]: ", 3.0);
    let wall_thickness_m = prompt_f64(&format!("Wall thickness (m) [{}]: ", thickness), thickness);
    let price = prompt_f64("Material price per m³ (0 to skip) [0]: ", 0.0);
    ConstructionInput {
        width_m,
        length_m,
        height_m,
        wall_thickness_m: Some(wall_thickness_m),
        material_cost_per_m3: Some(price),
    }
}

fn prompt_loan() -> LoanInput {
    LoanInput {
        principal: prompt_f64("Loan amount [1000000]: ", 1_000_000.0),
        annual_rate_percent: prompt_f64("Annual rate (%) [12.5]: ", 12.5),
        term_years: prompt_f64("Term (years) [10]: ", 10.0),
    }
}

fn prompt_currency() -> CurrencyInput {
    let codes: Vec<_> = Currency::ALL.iter().map(|c| c.code()).collect();
    println!("Currencies: {}", codes.join(", "));
    CurrencyInput {
        amount: prompt_f64("Amount [100]: ", 100.0),
        from: prompt_parse("From [USD]: ", Currency::Usd),
        to: prompt_parse("To [RUB]: ", Currency::Rub),
    }
}

fn prompt_calories() -> CalorieInput {
    println!("Activity: sedentary, light, moderate, active, extra");
    CalorieInput {
        weight_kg: prompt_f64("Weight (kg) [70]: ", 70.0),
        height_cm: prompt_f64("Height (cm) [170]: ", 170.0),
        age_years: prompt_f64("Age [30]: ", 30.0),
        sex: prompt_parse("Sex (male/female) [male]: ", Sex::Male),
        activity: prompt_parse("Activity [sedentary]: ", ActivityLevel::Sedentary),
    }
}

fn prompt_conversion() -> ConversionInput {
    println!("Units: m, ft, in, km, mi, kg, lb, oz, g, C, F, K");
    ConversionInput {
        value: prompt_f64("Value [1]: ", 1.0),
        from: prompt_parse("From [m]: ", Unit::Meters),
        to: prompt_parse("To [ft]: ", Unit::Feet),
    }
}

/// Line-oriented keypad.
///
/// Each line holds at most one operation. A line starting with a number
/// begins a new calculation; a line starting with an operator continues from
/// the displayed value. `history`, `clear` and `quit` are commands.
pub fn run_keypad<R: BufRead, W: Write>(settings: &Settings, input: R, mut out: W) -> Result<()> {
    let mut keypad = Keypad::with_capacity(settings.history_capacity);
    writeln!(out, "Keypad: type an operation like `12 + 3`; history, clear, quit")?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        match line {
            "" => continue,
            "quit" | "q" | "exit" => break,
            "history" => {
                if keypad.history_len() == 0 {
                    writeln!(out, "No calculations yet")?;
                }
                for entry in keypad.history() {
                    writeln!(out, "{}  {}", entry.at.format("%H:%M:%S"), entry)?;
                }
                continue;
            }
            "clear" => {
                keypad.clear_history();
                keypad.clear();
                writeln!(out, "History cleared")?;
                continue;
            }
            _ => {}
        }

        match type_line(&mut keypad, line) {
            Ok(()) => writeln!(out, "{}", keypad.display())?,
            Err(e) => {
                tracing::debug!(error = %e, "keypad line rejected");
                writeln!(out, "{} ({})", keypad.display(), e)?;
            }
        }
    }
    Ok(())
}

fn type_line(keypad: &mut Keypad, line: &str) -> Result<(), CalcError> {
    let (lhs, operation) = parse_line(line)?;

    if let Some(value) = lhs {
        keypad.clear();
        keypad.enter_number(value)?;
    }
    if let Some((op, rhs)) = operation {
        keypad.press_operator(op);
        if keypad.pending().is_none() {
            return Err(CalcError::invalid_input(
                "display",
                keypad.display(),
                "Start with a number after an error",
            ));
        }
        keypad.enter_number(rhs)?;
        keypad.press_equals()?;
    }
    Ok(())
}

/// Split a line into an optional left operand and at most one operation.
///
/// A `-` directly before a digit is a sign, so `-5 + 3` starts from -5 and
/// `- 5` subtracts from the display.
fn parse_line(line: &str) -> Result<(Option<f64>, Option<(Operator, f64)>), CalcError> {
    let mut rest = line.trim();
    let lhs = take_number(&mut rest)?;

    rest = rest.trim_start();
    let Some(c) = rest.chars().next() else {
        return Ok((lhs, None));
    };
    let op = Operator::from_char(c).ok_or_else(|| unknown_key(c))?;
    rest = rest[c.len_utf8()..].trim_start();

    let rhs = take_number(&mut rest)?
        .ok_or_else(|| CalcError::invalid_input("line", line, "Expected a number after the operator"))?;

    if let Some(c) = rest.trim_start().chars().next() {
        if Operator::from_char(c).is_some() {
            return Err(CalcError::invalid_input("line", line, "Only one operation per line"));
        }
        return Err(unknown_key(c));
    }
    Ok((lhs, Some((op, rhs))))
}

/// Consume a leading number (with optional sign) from `rest`
fn take_number(rest: &mut &str) -> Result<Option<f64>, CalcError> {
    let is_number_char = |c: char| c.is_ascii_digit() || c == '.' || c == ',';
    let text = *rest;
    let sign_len = match text.strip_prefix('-') {
        Some(after) if after.starts_with(is_number_char) => 1,
        _ => 0,
    };
    let end = text[sign_len..]
        .find(|c: char| !is_number_char(c))
        .map_or(text.len(), |i| sign_len + i);
    if end == sign_len {
        return Ok(None);
    }
    *rest = &text[end..];
    parse_number("number", &text[..end])
}

fn unknown_key(c: char) -> CalcError {
    CalcError::invalid_input("key", c.to_string(), "Unknown key")
}
