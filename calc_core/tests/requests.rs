//! JSON request surface: documents in, tagged outcomes out.

use calc_core::calculations::{CalculationOutcome, CalculationRequest};
use calc_core::{CalcError, Settings};
use serde_json::json;

fn evaluate(document: serde_json::Value) -> Result<serde_json::Value, CalcError> {
    let request: CalculationRequest = serde_json::from_value(document)?;
    let outcome = request.evaluate()?;
    Ok(serde_json::to_value(outcome)?)
}

#[test]
fn arithmetic_request() {
    let out = evaluate(json!({"type": "Arithmetic", "lhs": 7, "operator": "×", "rhs": 6})).unwrap();
    assert_eq!(out["type"], "Arithmetic");
    assert_eq!(out["result"]["result"], 42.0);
    assert_eq!(out["result"]["expression"], "7 × 6 = 42");
}

#[test]
fn construction_request_uses_default_thickness() {
    let out = evaluate(json!({
        "type": "Construction",
        "width_m": 6,
        "length_m": 8,
        "height_m": 3,
        "material_cost_per_m3": 5000
    }))
    .unwrap();
    let result = &out["result"];
    assert_eq!(result["floor_area_m2"], 48.0);
    let volume = result["wall_volume_m3"].as_f64().unwrap();
    assert!((volume - 33.6).abs() < 1e-9);
    let cost = result["total_cost"].as_f64().unwrap();
    assert!((cost - 168_000.0).abs() < 1e-6);
    assert!(result["formulas"].as_array().unwrap().contains(&json!("MaterialCost")));
}

#[test]
fn loan_and_schedule_requests() {
    let loan = json!({"principal": 12000, "annual_rate_percent": 0, "term_years": 1});

    let mut summary = loan.clone();
    summary["type"] = json!("Loan");
    let out = evaluate(summary).unwrap();
    assert_eq!(out["result"]["monthly_payment"], 1000.0);

    let mut schedule = loan;
    schedule["type"] = json!("Schedule");
    let out = evaluate(schedule).unwrap();
    assert_eq!(out["type"], "Schedule");
    assert_eq!(out["result"]["rows"].as_array().unwrap().len(), 12);
}

#[test]
fn currency_request_with_settings() {
    let request: CalculationRequest =
        serde_json::from_value(json!({"type": "Currency", "amount": 100, "from": "USD", "to": "EUR"})).unwrap();

    let default_rates = request.evaluate().unwrap();
    let CalculationOutcome::Currency(result) = default_rates else {
        panic!("expected a currency outcome");
    };
    assert!((result.converted - 92.0).abs() < 1e-9);

    let settings = Settings::from_toml_str("[currency_rates]\nEUR = 0.9").unwrap();
    let CalculationOutcome::Currency(result) = request.evaluate_with(&settings).unwrap() else {
        panic!("expected a currency outcome");
    };
    assert!((result.converted - 90.0).abs() < 1e-9);
}

#[test]
fn construction_request_with_settings_thickness() {
    let settings = Settings::from_toml_str("default_wall_thickness_m = 0.3").unwrap();
    let bare = json!({"type": "Construction", "width_m": 6, "length_m": 8, "height_m": 3});

    let request: CalculationRequest = serde_json::from_value(bare.clone()).unwrap();
    let CalculationOutcome::Construction(result) = request.evaluate_with(&settings).unwrap() else {
        panic!("expected a construction outcome");
    };
    assert!((result.wall_volume_m3 - 25.2).abs() < 1e-9);

    let mut explicit = bare;
    explicit["wall_thickness_m"] = json!(0.5);
    let request: CalculationRequest = serde_json::from_value(explicit).unwrap();
    let CalculationOutcome::Construction(result) = request.evaluate_with(&settings).unwrap() else {
        panic!("expected a construction outcome");
    };
    assert!((result.wall_volume_m3 - 42.0).abs() < 1e-9);
}

#[test]
fn calories_request() {
    let out = evaluate(json!({
        "type": "Calories",
        "weight_kg": 70,
        "height_cm": 170,
        "age_years": 30,
        "sex": "male",
        "activity": "sedentary"
    }))
    .unwrap();
    let maintenance = out["result"]["maintenance_kcal"].as_f64().unwrap();
    assert_eq!(maintenance.round(), 2006.0);
    assert_eq!(out["result"]["protein_g"], 140.0);
}

#[test]
fn conversion_request_across_categories_fails() {
    let err = evaluate(json!({"type": "Conversion", "value": 1, "from": "meters", "to": "pounds"})).unwrap_err();
    assert_eq!(err.error_code(), "INCOMPATIBLE_UNITS");

    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["type"], "IncompatibleUnits");
    assert_eq!(json["details"]["from"], "meters");
}

#[test]
fn validation_errors_are_structured() {
    let err = evaluate(json!({"type": "Loan", "principal": 0, "annual_rate_percent": 5, "term_years": 10})).unwrap_err();
    assert!(err.is_recoverable());
    assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "principal"));
}

#[test]
fn malformed_request_is_serialization_error() {
    let err = evaluate(json!({"type": "Teleport", "distance": 5})).unwrap_err();
    assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
}
