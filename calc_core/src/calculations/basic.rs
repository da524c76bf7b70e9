//! # Basic Calculator
//!
//! A four-function keypad with a bounded, newest-first history.
//!
//! ## Behavior
//!
//! - A digit replaces a display of `"0"` and is appended otherwise.
//! - The decimal point is accepted once per number; on `"0"` it gives `"0."`.
//! - An operator stores the displayed number as the left operand and resets
//!   the display. Pressing another operator before `=` replaces the pending
//!   operand and operator (there is no chaining).
//! - `=` evaluates the pending operation, pushes a history entry and shows
//!   the result. With nothing pending it does nothing.
//! - Division by zero shows `"Error"`; the next digit starts a new number.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::basic::{Key, Keypad, Operator};
//!
//! let mut keypad = Keypad::new();
//! for key in [Key::Digit(1), Key::Digit(2), Key::Operator(Operator::Add), Key::Digit(3)] {
//!     keypad.press(key).unwrap();
//! }
//! keypad.press(Key::Equals).unwrap();
//!
//! assert_eq!(keypad.display(), "15");
//! assert_eq!(keypad.history().next().unwrap().to_string(), "12 + 3 = 15");
//! ```

use std::collections::VecDeque;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::format::number_text;
use crate::formulas::Formula;

/// Number of history entries kept unless configured otherwise
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Text shown after a failed operation
pub const ERROR_DISPLAY: &str = "Error";

/// Binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    #[serde(alias = "+")]
    Add,
    #[serde(alias = "-")]
    Subtract,
    #[serde(alias = "*", alias = "×", alias = "x")]
    Multiply,
    #[serde(alias = "/", alias = "÷")]
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Symbol shown on the key and in history
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// Map a typed character to an operator (`*`/`x` and `/` accepted)
    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' | '×' | 'x' | 'X' => Some(Operator::Multiply),
            '/' | '÷' => Some(Operator::Divide),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Apply `op` to two operands.
///
/// Fails on division by zero and on results that overflow to infinity.
///
/// ```rust
/// use calc_core::calculations::basic::{apply, Operator};
///
/// assert_eq!(apply(Operator::Multiply, 6.0, 7.0).unwrap(), 42.0);
/// assert!(apply(Operator::Divide, 1.0, 0.0).is_err());
/// ```
pub fn apply(op: Operator, lhs: f64, rhs: f64) -> CalcResult<f64> {
    let result = match op {
        Operator::Add => lhs + rhs,
        Operator::Subtract => lhs - rhs,
        Operator::Multiply => lhs * rhs,
        Operator::Divide => {
            if rhs == 0.0 {
                return Err(CalcError::calculation_failed("Arithmetic", "Division by zero"));
            }
            lhs / rhs
        }
    };
    super::ensure_finite("Arithmetic", "Result", result)
}

// ============================================================================
// Stateless request
// ============================================================================

/// One arithmetic operation, for JSON requests.
///
/// ## JSON Example
///
/// ```json
/// { "lhs": 12, "operator": "+", "rhs": 3 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArithmeticInput {
    pub lhs: f64,
    pub operator: Operator,
    pub rhs: f64,
}

/// Result of [`calculate`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArithmeticResult {
    pub lhs: f64,
    pub operator: Operator,
    pub rhs: f64,
    pub result: f64,
    /// History-style text, e.g. `"12 + 3 = 15"`
    pub expression: String,
    pub formulas: Vec<Formula>,
}

/// Evaluate a single operation
pub fn calculate(input: &ArithmeticInput) -> CalcResult<ArithmeticResult> {
    super::require_finite("lhs", input.lhs)?;
    super::require_finite("rhs", input.rhs)?;
    let result = apply(input.operator, input.lhs, input.rhs)?;
    let entry = HistoryEntry::new(input.lhs, input.operator, input.rhs, result);
    Ok(ArithmeticResult {
        lhs: input.lhs,
        operator: input.operator,
        rhs: input.rhs,
        result,
        expression: entry.to_string(),
        formulas: vec![Formula::BasicArithmetic],
    })
}

// ============================================================================
// History
// ============================================================================

/// One completed operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub lhs: f64,
    pub operator: Operator,
    pub rhs: f64,
    pub result: f64,
    /// When `=` was pressed
    pub at: DateTime<Local>,
}

impl HistoryEntry {
    pub fn new(lhs: f64, operator: Operator, rhs: f64, result: f64) -> Self {
        Self {
            lhs,
            operator,
            rhs,
            result,
            at: Local::now(),
        }
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            number_text(self.lhs),
            self.operator,
            number_text(self.rhs),
            number_text(self.result)
        )
    }
}

// ============================================================================
// Keypad
// ============================================================================

/// A key on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// 0-9
    Digit(u8),
    Decimal,
    Operator(Operator),
    Equals,
    /// Reset the display and pending operation, keeping history
    Clear,
    ClearHistory,
}

impl Key {
    /// Map a typed character to a key.
    ///
    /// Accepts digits, `.` or `,`, the operator characters, `=` and `c`.
    pub fn from_char(c: char) -> Option<Key> {
        if let Some(d) = c.to_digit(10) {
            return Some(Key::Digit(d as u8));
        }
        match c {
            '.' | ',' => Some(Key::Decimal),
            '=' => Some(Key::Equals),
            'c' | 'C' => Some(Key::Clear),
            _ => Operator::from_char(c).map(Key::Operator),
        }
    }
}

/// Keypad state machine
#[derive(Debug, Clone)]
pub struct Keypad {
    display: String,
    pending: Option<(f64, Operator)>,
    history: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keypad keeping at most `capacity` history entries (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            display: "0".to_string(),
            pending: None,
            history: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Current display text
    pub fn display(&self) -> &str {
        &self.display
    }

    /// True while the display shows a failed operation
    pub fn is_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }

    /// Whether typed digits extend the display. `Error` and results shown in
    /// exponent form are replaced instead.
    fn is_editable(&self) -> bool {
        self.display
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == '-')
    }

    /// Replace the display with a number typed elsewhere, such as a
    /// line of text. The pending operation is kept.
    pub fn enter_number(&mut self, value: f64) -> CalcResult<()> {
        super::require_finite("value", value)?;
        self.display = number_text(value);
        Ok(())
    }

    /// Pending left operand and operator, if an operator has been pressed
    pub fn pending(&self) -> Option<(f64, Operator)> {
        self.pending
    }

    /// History, newest first
    pub fn history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Dispatch one key press.
    ///
    /// Only [`Key::Digit`] with a value above 9 and a failing `=` return an
    /// error; the keypad stays usable either way.
    pub fn press(&mut self, key: Key) -> CalcResult<()> {
        match key {
            Key::Digit(d) => self.press_digit(d),
            Key::Decimal => {
                self.press_decimal();
                Ok(())
            }
            Key::Operator(op) => {
                self.press_operator(op);
                Ok(())
            }
            Key::Equals => self.press_equals().map(|_| ()),
            Key::Clear => {
                self.clear();
                Ok(())
            }
            Key::ClearHistory => {
                self.clear_history();
                Ok(())
            }
        }
    }

    pub fn press_digit(&mut self, digit: u8) -> CalcResult<()> {
        if digit > 9 {
            return Err(CalcError::invalid_input("digit", digit.to_string(), "Digit must be 0-9"));
        }
        let c = char::from(b'0' + digit);
        if self.display == "0" || !self.is_editable() {
            self.display = c.to_string();
        } else {
            self.display.push(c);
        }
        Ok(())
    }

    pub fn press_decimal(&mut self) {
        if !self.is_editable() {
            self.display = "0.".to_string();
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Store the displayed number and `op`. Ignored while the display shows an error.
    pub fn press_operator(&mut self, op: Operator) {
        let Ok(lhs) = self.display.parse::<f64>() else {
            return;
        };
        self.pending = Some((lhs, op));
        self.display = "0".to_string();
    }

    /// Evaluate the pending operation.
    ///
    /// Returns the result, or `None` when no operation was pending.
    pub fn press_equals(&mut self) -> CalcResult<Option<f64>> {
        let Some((lhs, op)) = self.pending.take() else {
            return Ok(None);
        };
        let rhs = match self.display.parse::<f64>() {
            Ok(rhs) => rhs,
            Err(_) => {
                let err = CalcError::invalid_input("display", self.display.clone(), "Not a number");
                self.display = ERROR_DISPLAY.to_string();
                return Err(err);
            }
        };

        match apply(op, lhs, rhs) {
            Ok(result) => {
                let entry = HistoryEntry::new(lhs, op, rhs, result);
                tracing::debug!(entry = %entry, "keypad evaluated");
                self.history.push_front(entry);
                self.history.truncate(self.capacity);
                self.display = number_text(result);
                Ok(Some(result))
            }
            Err(err) => {
                tracing::debug!(error = %err, "keypad operation failed");
                self.display = ERROR_DISPLAY.to_string();
                Err(err)
            }
        }
    }

    /// Reset display and pending operation; history is kept
    pub fn clear(&mut self) {
        self.display = "0".to_string();
        self.pending = None;
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_keys(keypad: &mut Keypad, keys: &str) -> CalcResult<()> {
        for c in keys.chars() {
            keypad.press(Key::from_char(c).unwrap())?;
        }
        Ok(())
    }

    #[test]
    fn test_digits_replace_leading_zero() {
        let mut keypad = Keypad::new();
        type_keys(&mut keypad, "007").unwrap();
        assert_eq!(keypad.display(), "7");
        type_keys(&mut keypad, "42").unwrap();
        assert_eq!(keypad.display(), "742");
    }

    #[test]
    fn test_single_decimal_point() {
        let mut keypad = Keypad::new();
        type_keys(&mut keypad, ".5.2").unwrap();
        assert_eq!(keypad.display(), "0.52");
    }

    #[test]
    fn test_basic_operations() {
        let cases = [("12+3=", "15"), ("7-10=", "-3"), ("2.5*4=", "10"), ("1/4=", "0.25")];
        for (keys, expected) in cases {
            let mut keypad = Keypad::new();
            type_keys(&mut keypad, keys).unwrap();
            assert_eq!(keypad.display(), expected, "keys {}", keys);
        }
    }

    #[test]
    fn test_operator_replaces_pending() {
        let mut keypad = Keypad::new();
        type_keys(&mut keypad, "5+6*2=").unwrap();
        // 6 * 2, the earlier "5 +" is dropped
        assert_eq!(keypad.display(), "12");
        assert_eq!(keypad.history().next().unwrap().to_string(), "6 × 2 = 12");
    }

    #[test]
    fn test_equals_without_pending_is_noop() {
        let mut keypad = Keypad::new();
        type_keys(&mut keypad, "9").unwrap();
        assert_eq!(keypad.press_equals().unwrap(), None);
        assert_eq!(keypad.display(), "9");
        assert_eq!(keypad.history_len(), 0);
    }

    #[test]
    fn test_division_by_zero() {
        let mut keypad = Keypad::new();
        let err = type_keys(&mut keypad, "8/0=").unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
        assert_eq!(keypad.display(), ERROR_DISPLAY);
        assert_eq!(keypad.history_len(), 0);

        // Next digit starts fresh
        type_keys(&mut keypad, "3").unwrap();
        assert_eq!(keypad.display(), "3");
    }

    #[test]
    fn test_exponent_result_starts_fresh_number() {
        let mut keypad = Keypad::new();
        keypad.enter_number(1e20).unwrap();
        type_keys(&mut keypad, "*10=").unwrap();
        assert_eq!(keypad.display(), "1e+21");

        type_keys(&mut keypad, ".").unwrap();
        assert_eq!(keypad.display(), "0.");
        type_keys(&mut keypad, "5+").unwrap();
        assert_eq!(keypad.pending(), Some((0.5, Operator::Add)));

        keypad.enter_number(1e-7).unwrap();
        type_keys(&mut keypad, "4").unwrap();
        assert_eq!(keypad.display(), "4");
    }

    #[test]
    fn test_enter_number() {
        let mut keypad = Keypad::new();
        keypad.enter_number(-5.0).unwrap();
        type_keys(&mut keypad, "+3=").unwrap();
        assert_eq!(keypad.display(), "-2");
        assert!(keypad.enter_number(f64::NAN).is_err());
    }

    #[test]
    fn test_history_bounded_newest_first() {
        let mut keypad = Keypad::with_capacity(10);
        for i in 1..=12 {
            keypad.clear();
            type_keys(&mut keypad, &format!("{}+0=", i)).unwrap();
        }
        assert_eq!(keypad.history_len(), 10);
        let first: Vec<String> = keypad.history().take(2).map(|e| e.to_string()).collect();
        assert_eq!(first, vec!["12 + 0 = 12", "11 + 0 = 11"]);
        assert_eq!(keypad.history().last().unwrap().lhs, 3.0);
    }

    #[test]
    fn test_clear_keeps_history() {
        let mut keypad = Keypad::new();
        type_keys(&mut keypad, "1+1=").unwrap();
        type_keys(&mut keypad, "C").unwrap();
        assert_eq!(keypad.display(), "0");
        assert!(keypad.pending().is_none());
        assert_eq!(keypad.history_len(), 1);

        keypad.press(Key::ClearHistory).unwrap();
        assert_eq!(keypad.history_len(), 0);
    }

    #[test]
    fn test_floating_point_text() {
        let mut keypad = Keypad::new();
        type_keys(&mut keypad, "0.1+0.2=").unwrap();
        assert_eq!(keypad.display(), "0.30000000000000004");
    }

    #[test]
    fn test_stateless_calculate() {
        let result = calculate(&ArithmeticInput {
            lhs: 12.0,
            operator: Operator::Add,
            rhs: 3.0,
        })
        .unwrap();
        assert_eq!(result.result, 15.0);
        assert_eq!(result.expression, "12 + 3 = 15");
    }

    #[test]
    fn test_operator_aliases() {
        let input: ArithmeticInput = serde_json::from_str(r#"{"lhs": 1, "operator": "÷", "rhs": 4}"#).unwrap();
        assert_eq!(input.operator, Operator::Divide);
        let input: ArithmeticInput = serde_json::from_str(r#"{"lhs": 1, "operator": "multiply", "rhs": 4}"#).unwrap();
        assert_eq!(input.operator, Operator::Multiply);
    }
}
