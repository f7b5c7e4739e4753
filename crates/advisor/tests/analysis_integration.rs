//! End-to-end checks of the analyzer through its JSON request/result shapes.

use advisor::{DEFICIT_MESSAGE, FinanceRequest, FinanceResult};
use serde_json::json;

fn run(body: serde_json::Value) -> serde_json::Value {
    let request: FinanceRequest = serde_json::from_value(body).unwrap();
    serde_json::to_value(request.analyze()).unwrap()
}

#[test]
fn low_risk_scenario() {
    let result = run(json!({"income": 5000, "expenses": 3000, "risk_level": "low"}));
    assert_eq!(result["savings"].as_f64(), Some(2000.0));
    assert_eq!(
        result["advice"],
        "You have $2000 left after expenses. Consider a high-yield savings account or government bonds."
    );
}

#[test]
fn deficit_scenario() {
    let result = run(json!({"income": 1000, "expenses": 1500, "risk_level": "high"}));
    assert_eq!(result, json!({ "message": DEFICIT_MESSAGE }));
}

#[test]
fn break_even_scenario() {
    let result = run(json!({"income": 2000, "expenses": 2000, "risk_level": "medium"}));
    assert_eq!(result["savings"].as_f64(), Some(0.0));
    assert_eq!(
        result["advice"],
        "You have $0 left after expenses. Look into index funds or diversified ETFs."
    );
}

#[test]
fn unknown_risk_level_scenario() {
    let result = run(json!({"income": 3000, "expenses": 1000, "risk_level": "unknown"}));
    assert_eq!(result["savings"].as_f64(), Some(2000.0));
    assert_eq!(result["advice"], "You have $2000 left after expenses. ");
}

#[test]
fn savings_equal_income_minus_expenses() {
    let cases = [(0.0, 0.0), (100.25, 0.25), (1e6, 999_999.0), (42.0, 41.5)];

    for (income, expenses) in cases {
        let result = FinanceRequest::new(income, expenses, "low").analyze();
        match result {
            FinanceResult::Surplus { savings, advice } => {
                assert_eq!(savings, income - expenses);
                assert!(advice.starts_with(&format!("You have ${savings} left after expenses. ")));
            }
            FinanceResult::Deficit { .. } => panic!("unexpected deficit for {income}/{expenses}"),
        }
    }
}

#[test]
fn missing_field_is_rejected() {
    let err = serde_json::from_value::<FinanceRequest>(json!({"income": 1, "risk_level": "low"}))
        .unwrap_err();
    assert!(err.to_string().contains("expenses"));
}

#[test]
fn non_numeric_income_is_rejected() {
    let body = json!({"income": "lots", "expenses": 1, "risk_level": "low"});
    assert!(serde_json::from_value::<FinanceRequest>(body).is_err());
}
