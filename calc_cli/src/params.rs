//! `key=value` arguments for one-shot commands.
//!
//! Each command turns its parameters into a [`CalculationRequest`], so the
//! one-shot commands and `eval` share a single evaluation path.

use std::collections::BTreeMap;
use std::str::FromStr;

use calc_core::calculations::{
    CalorieInput, ConstructionInput, ConversionInput, CurrencyInput, LoanInput,
};
use calc_core::forms::parse_number;
use calc_core::{CalcError, CalcResult, CalculationRequest, Settings};

/// Parsed `key=value` pairs
#[derive(Debug, Default)]
pub struct Params {
    values: BTreeMap<String, String>,
}

impl Params {
    /// Parse `key=value` words. Keys are case-insensitive.
    pub fn parse<S: AsRef<str>>(words: &[S]) -> CalcResult<Self> {
        let mut values = BTreeMap::new();
        for word in words {
            let word = word.as_ref();
            let Some((key, value)) = word.split_once('=') else {
                return Err(CalcError::invalid_input("argument", word, "Expected key=value"));
            };
            let key = key.trim().to_ascii_lowercase();
            if key.is_empty() {
                return Err(CalcError::invalid_input("argument", word, "Empty key"));
            }
            values.insert(key, value.trim().to_string());
        }
        Ok(Self { values })
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str).filter(|v| !v.is_empty())
    }

    /// A required number
    pub fn number(&self, key: &str) -> CalcResult<f64> {
        self.optional_number(key)?
            .ok_or_else(|| CalcError::missing_field(key))
    }

    pub fn optional_number(&self, key: &str) -> CalcResult<Option<f64>> {
        match self.text(key) {
            Some(text) => parse_number(key, text),
            None => Ok(None),
        }
    }

    /// A value parsed with `FromStr`, or `default` when absent
    pub fn choice<T>(&self, key: &str, default: T) -> CalcResult<T>
    where
        T: FromStr<Err = CalcError>,
    {
        self.text(key).map_or(Ok(default), str::parse)
    }

    /// A required value parsed with `FromStr`
    pub fn required<T>(&self, key: &str) -> CalcResult<T>
    where
        T: FromStr<Err = CalcError>,
    {
        self.text(key)
            .ok_or_else(|| CalcError::missing_field(key))?
            .parse()
    }
}

/// Build the request for a one-shot command, or `None` for an unknown command
pub fn request_for(command: &str, params: &Params, settings: &Settings) -> CalcResult<Option<CalculationRequest>> {
    let request = match command {
        "construction" => CalculationRequest::Construction(ConstructionInput {
            width_m: params.number("width")?,
            length_m: params.number("length")?,
            height_m: params.number("height")?,
            wall_thickness_m: params.optional_number("thickness")?.or(Some(settings.default_wall_thickness_m)),
            material_cost_per_m3: params.optional_number("price")?,
        }),
        "loan" => CalculationRequest::Loan(loan_input(params)?),
        "schedule" => CalculationRequest::Schedule(loan_input(params)?),
        "currency" => CalculationRequest::Currency(CurrencyInput {
            amount: params.number("amount")?,
            from: params.required("from")?,
            to: params.required("to")?,
        }),
        "calories" => CalculationRequest::Calories(CalorieInput {
            weight_kg: params.number("weight")?,
            height_cm: params.number("height")?,
            age_years: params.number("age")?,
            sex: params.choice("sex", Default::default())?,
            activity: params.choice("activity", Default::default())?,
        }),
        "convert" => CalculationRequest::Conversion(ConversionInput {
            value: params.number("value")?,
            from: params.required("from")?,
            to: params.required("to")?,
        }),
        _ => return Ok(None),
    };
    Ok(Some(request))
}

fn loan_input(params: &Params) -> CalcResult<LoanInput> {
    Ok(LoanInput {
        principal: params.number("principal")?,
        annual_rate_percent: params.number("rate")?,
        term_years: params.number("years")?,
    })
}

/// Usage line for each one-shot command
pub const COMMAND_USAGE: &[(&str, &str)] = &[
    ("construction", "width=6 length=8 height=3 [thickness=0.4] [price=5000]"),
    ("loan", "principal=1000000 rate=12.5 years=10"),
    ("schedule", "principal=1000000 rate=12.5 years=10"),
    ("currency", "amount=100 from=USD to=EUR"),
    ("calories", "weight=70 height=170 age=30 [sex=male] [activity=sedentary]"),
    ("convert", "value=5 from=km to=mi"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::tables::{ActivityLevel, Currency, Sex, Unit};

    #[test]
    fn test_parse_pairs() {
        let params = Params::parse(&["Width=6", "length = 8", "price="]).unwrap();
        assert_eq!(params.number("width").unwrap(), 6.0);
        assert_eq!(params.number("length").unwrap(), 8.0);
        assert_eq!(params.optional_number("price").unwrap(), None);
    }

    #[test]
    fn test_parse_rejects_bare_words() {
        let err = Params::parse(&["width"]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(Params::parse(&["=5"]).is_err());
    }

    #[test]
    fn test_missing_and_bad_numbers() {
        let params = Params::parse(&["amount=abc"]).unwrap();
        assert_eq!(params.number("width").unwrap_err().error_code(), "MISSING_FIELD");
        assert_eq!(params.number("amount").unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_decimal_comma() {
        let params = Params::parse(&["rate=12,5"]).unwrap();
        assert_eq!(params.number("rate").unwrap(), 12.5);
    }

    #[test]
    fn test_construction_uses_settings_thickness() {
        let settings = Settings {
            default_wall_thickness_m: 0.3,
            ..Settings::default()
        };
        let params = Params::parse(&["width=6", "length=8", "height=3"]).unwrap();
        let Some(CalculationRequest::Construction(input)) = request_for("construction", &params, &settings).unwrap()
        else {
            panic!("expected a construction request");
        };
        assert_eq!(input.wall_thickness_m, Some(0.3));
        assert_eq!(input.material_cost_per_m3, None);
    }

    #[test]
    fn test_choices() {
        let params = Params::parse(&["weight=60", "height=165", "age=25", "sex=f", "activity=very_active"]).unwrap();
        let Some(CalculationRequest::Calories(input)) =
            request_for("calories", &params, &Settings::default()).unwrap()
        else {
            panic!("expected a calories request");
        };
        assert_eq!(input.sex, Sex::Female);
        assert_eq!(input.activity, ActivityLevel::VeryActive);

        let params = Params::parse(&["amount=1", "from=usd", "to=EUR"]).unwrap();
        let Some(CalculationRequest::Currency(input)) =
            request_for("currency", &params, &Settings::default()).unwrap()
        else {
            panic!("expected a currency request");
        };
        assert_eq!(input.from, Currency::Usd);
        assert_eq!(input.to, Currency::Eur);

        let params = Params::parse(&["value=1", "from=km", "to=mi"]).unwrap();
        let Some(CalculationRequest::Conversion(input)) =
            request_for("convert", &params, &Settings::default()).unwrap()
        else {
            panic!("expected a conversion request");
        };
        assert_eq!(input.from, Unit::Kilometers);
    }

    #[test]
    fn test_unknown_command() {
        let params = Params::default();
        assert!(request_for("teleport", &params, &Settings::default()).unwrap().is_none());
    }
}
