//! Prakriti WASM Module
//!
//! Runs the assessment engine in the browser. Every binding takes and
//! returns JSON strings; failures surface as a thrown JS string holding the
//! JSON error body `{ "error": { "code", "message", "field" } }`.

use prakriti_shared::types::{LifestyleRiskRequest, RiskPredictionRequest};
use prakriti_shared::{
    assess, compute_profile, health_metrics, predict_risks, score_lifestyle_risk,
    validation::{validate_height_cm, validate_weight},
    AssessmentError, AssessmentRequest, HealthAttributes,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::json;
use wasm_bindgen::prelude::*;

fn error_body(code: &str, message: &str, field: Option<&str>) -> String {
    json!({ "error": { "code": code, "message": message, "field": field } }).to_string()
}

fn parse<T: DeserializeOwned>(input: &str) -> Result<T, String> {
    serde_json::from_str(input).map_err(|e| error_body("BAD_REQUEST", &e.to_string(), None))
}

fn render<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| error_body("INTERNAL_ERROR", &e.to_string(), None))
}

fn invalid(err: AssessmentError) -> String {
    error_body("VALIDATION_ERROR", &err.to_string(), Some(err.field()))
}

/// Native entry points, testable without a JS host
pub mod json_api {
    use super::*;

    /// `HealthAttributes` JSON to `ConstitutionProfile` JSON
    pub fn compute_profile(attributes: &str) -> Result<String, String> {
        let attrs: HealthAttributes = parse(attributes)?;
        render(&super::compute_profile(&attrs).map_err(invalid)?)
    }

    /// `{ profile, lifestyle, attributes }` JSON to a findings array
    pub fn predict_risks(request: &str) -> Result<String, String> {
        let req: RiskPredictionRequest = parse(request)?;
        let findings =
            super::predict_risks(&req.profile, &req.lifestyle, &req.attributes).map_err(invalid)?;
        render(&findings)
    }

    /// `{ lifestyle, attributes }` JSON to a lifestyle risk report
    pub fn score_lifestyle_risk(request: &str) -> Result<String, String> {
        let req: LifestyleRiskRequest = parse(request)?;
        render(&super::score_lifestyle_risk(&req.lifestyle, &req.attributes).map_err(invalid)?)
    }

    /// `{ attributes, lifestyle }` JSON to a full assessment report
    pub fn assess(request: &str) -> Result<String, String> {
        let req: AssessmentRequest = parse(request)?;
        render(&super::assess(&req.attributes, &req.lifestyle).map_err(invalid)?)
    }

    /// BMI summary for a weight/height pair
    pub fn bmi_summary(weight_kg: f64, height_cm: f64) -> Result<String, String> {
        validate_weight(weight_kg)
            .map_err(|msg| error_body("VALIDATION_ERROR", &msg, Some("weight_kg")))?;
        validate_height_cm(height_cm)
            .map_err(|msg| error_body("VALIDATION_ERROR", &msg, Some("height_cm")))?;
        render(&health_metrics::bmi_summary(weight_kg, height_cm))
    }
}

#[wasm_bindgen(js_name = computeProfile)]
pub fn compute_profile_js(attributes: &str) -> Result<String, JsValue> {
    json_api::compute_profile(attributes).map_err(JsValue::from)
}

#[wasm_bindgen(js_name = predictRisks)]
pub fn predict_risks_js(request: &str) -> Result<String, JsValue> {
    json_api::predict_risks(request).map_err(JsValue::from)
}

#[wasm_bindgen(js_name = scoreLifestyleRisk)]
pub fn score_lifestyle_risk_js(request: &str) -> Result<String, JsValue> {
    json_api::score_lifestyle_risk(request).map_err(JsValue::from)
}

#[wasm_bindgen(js_name = assess)]
pub fn assess_js(request: &str) -> Result<String, JsValue> {
    json_api::assess(request).map_err(JsValue::from)
}

/// Calculate BMI from weight (kg) and height (cm); 0 when either is out of range
#[wasm_bindgen(js_name = calculateBmi)]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if validate_weight(weight_kg).is_err() || validate_height_cm(height_cm).is_err() {
        return 0.0;
    }
    health_metrics::calculate_bmi(weight_kg, height_cm)
}

#[wasm_bindgen(js_name = bmiSummary)]
pub fn bmi_summary_js(weight_kg: f64, height_cm: f64) -> Result<String, JsValue> {
    json_api::bmi_summary(weight_kg, height_cm).map_err(JsValue::from)
}

#[cfg(test)]
mod tests {
    use super::json_api;
    use super::*;
    use serde_json::Value;

    const ATTRIBUTES: &str = r#"{
        "age": 30, "weight_kg": 70.0, "height_cm": 170.0,
        "body_temperature": "cold", "digestion": "irregular",
        "sleep_pattern": "light", "energy_level": "variable",
        "skin_type": "dry", "stress_level": "high", "exercise_frequency": "rarely"
    }"#;

    const LIFESTYLE: &str = r#"{
        "diet": "vegetarian", "meal_timing": "regular", "water_intake": "moderate",
        "sleep_hours": 7.5, "exercise_minutes": 40,
        "stress_management": "yoga", "screen_time_hours": 3.0
    }"#;

    #[test]
    fn test_compute_profile_json() {
        let out: Value = serde_json::from_str(&json_api::compute_profile(ATTRIBUTES).unwrap()).unwrap();
        assert_eq!(out, json!({ "vata": 100, "pitta": 0, "kapha": 0 }));
    }

    #[test]
    fn test_invalid_input_reports_field() {
        let bad = ATTRIBUTES.replace("\"age\": 30", "\"age\": 0");
        let err: Value = serde_json::from_str(&json_api::compute_profile(&bad).unwrap_err()).unwrap();
        assert_eq!(err["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(err["error"]["field"], "age");
    }

    #[test]
    fn test_malformed_json_is_bad_request() {
        let err: Value = serde_json::from_str(&json_api::compute_profile("{").unwrap_err()).unwrap();
        assert_eq!(err["error"]["code"], "BAD_REQUEST");
    }

    #[test]
    fn test_assess_json() {
        let request = format!(r#"{{ "attributes": {}, "lifestyle": {} }}"#, ATTRIBUTES, LIFESTYLE);
        let report: Value = serde_json::from_str(&json_api::assess(&request).unwrap()).unwrap();
        assert_eq!(report["dominant_dosha"], "vata");
        assert!(report["risks"].is_array());
    }

    #[test]
    fn test_lifestyle_risk_json() {
        let request = format!(r#"{{ "lifestyle": {}, "attributes": {} }}"#, LIFESTYLE, ATTRIBUTES);
        let report: Value =
            serde_json::from_str(&json_api::score_lifestyle_risk(&request).unwrap()).unwrap();
        assert!(report["overall_risk"].as_f64().unwrap() <= 100.0);
    }

    #[test]
    fn test_bmi() {
        let bmi = calculate_bmi(70.0, 175.0);
        assert!((bmi - 22.86).abs() < 0.1);
        assert_eq!(calculate_bmi(70.0, 0.0), 0.0);
    }

    #[test]
    fn test_bmi_rejects_out_of_range_weight() {
        assert_eq!(calculate_bmi(-70.0, 175.0), 0.0);
        assert_eq!(calculate_bmi(0.0, 175.0), 0.0);
        assert_eq!(calculate_bmi(f64::NAN, 175.0), 0.0);
        assert_eq!(calculate_bmi(70.0, 1e-160), 0.0);
    }

    #[test]
    fn test_bmi_summary_rejects_zero_weight() {
        assert!(json_api::bmi_summary(0.0, 170.0).is_err());
        assert!(json_api::bmi_summary(70.0, 170.0).is_ok());
    }
}
