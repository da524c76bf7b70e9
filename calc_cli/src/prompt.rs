//! Line prompts with defaults.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Read one line after printing `prompt`. `None` on end of input.
pub fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

/// Prompt for a number; blank or unparseable input keeps `default`.
pub fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt)
        .and_then(|text| parse_or_default(&text))
        .unwrap_or(default)
}

/// Prompt for any `FromStr` value; blank or unparseable input keeps `default`.
pub fn prompt_parse<T: FromStr>(prompt: &str, default: T) -> T {
    match prompt_line(prompt) {
        Some(text) if !text.is_empty() => text.parse().unwrap_or(default),
        _ => default,
    }
}

fn parse_or_default(text: &str) -> Option<f64> {
    text.replace(',', ".").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_default() {
        assert_eq!(parse_or_default("12,5"), Some(12.5));
        assert_eq!(parse_or_default(""), None);
        assert_eq!(parse_or_default("abc"), None);
    }
}
