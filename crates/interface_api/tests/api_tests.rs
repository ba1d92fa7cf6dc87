//! HTTP tests for the claim form and JSON API

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use core_kernel::Currency;
use domain_claims::RiskLevel;
use interface_api::{config::ApiConfig, create_router};
use test_utils::{assert_report_json, ClaimFixtures, ClaimInputBuilder};

fn server() -> TestServer {
    TestServer::new(create_router(ApiConfig::default())).unwrap()
}

// ============================================================================
// JSON API Tests
// ============================================================================

mod json_api {
    use super::*;

    #[tokio::test]
    async fn test_health() {
        let response = server().get("/health").await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["status"], "healthy");
    }

    #[tokio::test]
    async fn test_evaluate_low_risk() {
        let body = ClaimFixtures::request_body(&ClaimFixtures::clean());
        let response = server().post("/api/v1/risk/evaluate").json(&body).await;

        response.assert_status_ok();
        let report = response.json::<Value>();
        assert_report_json(&report, RiskLevel::Low, 0);
        assert_eq!(report["banner"]["style"], "success");
    }

    #[tokio::test]
    async fn test_evaluate_medium_risk() {
        let body = ClaimFixtures::request_body(&ClaimFixtures::medium_risk());
        let response = server().post("/api/v1/risk/evaluate").json(&body).await;

        response.assert_status_ok();
        let report = response.json::<Value>();
        assert_report_json(&report, RiskLevel::Medium, 3);
        assert_eq!(report["result"]["component_scores"]["Recent Claim"], 2);
        assert_eq!(report["result"]["component_scores"]["Short Policy"], 1);
    }

    #[tokio::test]
    async fn test_evaluate_high_risk_report() {
        let body = ClaimFixtures::request_body(&ClaimFixtures::high_risk());
        let response = server().post("/api/v1/risk/evaluate").json(&body).await;

        response.assert_status_ok();
        let report = response.json::<Value>();
        assert_report_json(&report, RiskLevel::High, 8);

        assert_eq!(report["summary"][0]["value"], "HIGH RISK");
        assert_eq!(report["summary"][0]["delta"], "85%");
        assert_eq!(report["summary"][1]["value"], "8");
        assert_eq!(report["summary"][2]["value"], "₹90,000");

        assert_eq!(report["gauge"]["min"], 0);
        assert_eq!(report["gauge"]["max"], 100);
        assert_eq!(report["banner"]["icon"], "🚨");
        assert_eq!(report["analysis_row"]["claim_type"], 1);
        assert_eq!(report["input"]["claim_type"], "vehicle");
    }

    #[tokio::test]
    async fn test_breakdown_has_all_five_slices() {
        let body = ClaimFixtures::request_body(&ClaimFixtures::medium_risk());
        let report = server()
            .post("/api/v1/risk/evaluate")
            .json(&body)
            .await
            .json::<Value>();

        let slices = report["breakdown"]["slices"].as_array().unwrap();
        let names: Vec<&str> = slices.iter().map(|s| s["component"].as_str().unwrap()).collect();
        assert_eq!(
            names,
            vec!["High Amount", "Previous Claims", "Recent Claim", "Short Policy", "Young Customer"]
        );

        let share_sum: f64 = slices.iter().map(|s| s["share"].as_f64().unwrap()).sum();
        assert!((share_sum - 1.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_configured_currency_formats_amount() {
        let config = ApiConfig {
            currency: Currency::USD,
            ..ApiConfig::default()
        };
        let server = TestServer::new(create_router(config)).unwrap();
        let input = ClaimInputBuilder::new().with_claim_amount(1_234_567).build();

        let report = server
            .post("/api/v1/risk/evaluate")
            .json(&ClaimFixtures::request_body(&input))
            .await
            .json::<Value>();

        assert_eq!(report["summary"][2]["value"], "$1,234,567");
    }

    #[tokio::test]
    async fn test_age_out_of_range_is_422() {
        let mut body = ClaimFixtures::request_body(&ClaimFixtures::clean());
        body["customer_age"] = json!(101);

        let response = server().post("/api/v1/risk/evaluate").json(&body).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let error = response.json::<Value>();
        assert_eq!(error["error"], "validation_error");
        assert_eq!(error["details"], json!(["customer_age"]));
    }

    #[tokio::test]
    async fn test_negative_amount_is_422() {
        let mut body = ClaimFixtures::request_body(&ClaimFixtures::clean());
        body["claim_amount"] = json!(-5);

        let response = server().post("/api/v1/risk/evaluate").json(&body).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.json::<Value>()["details"], json!(["claim_amount"]));
    }

    #[tokio::test]
    async fn test_unknown_claim_type_is_422() {
        let mut body = ClaimFixtures::request_body(&ClaimFixtures::clean());
        body["claim_type"] = json!("bike");

        let response = server().post("/api/v1/risk/evaluate").json(&body).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let error = response.json::<Value>();
        assert_eq!(error["error"], "validation_error");
        assert!(error["message"].as_str().unwrap().contains("claim_type"));
    }

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let response = server()
            .post("/api/v1/risk/evaluate")
            .text("{\"claim_amount\": ")
            .content_type("application/json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let error = response.json::<Value>();
        assert_eq!(error["error"], "bad_request");
        assert!(!error["message"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_field_is_400() {
        let mut body = ClaimFixtures::request_body(&ClaimFixtures::clean());
        body.as_object_mut().unwrap().remove("policy_duration");

        let response = server().post("/api/v1/risk/evaluate").json(&body).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let error = response.json::<Value>();
        assert_eq!(error["error"], "bad_request");
        assert!(error["message"].as_str().unwrap().contains("policy_duration"));
    }

    #[tokio::test]
    async fn test_factor_table() {
        let response = server().get("/api/v1/risk/factors").await;

        response.assert_status_ok();
        let rules = response.json::<Value>();
        assert_eq!(rules["max_score"], 8);
        assert_eq!(rules["factors"].as_array().unwrap().len(), 5);
        assert_eq!(rules["factors"][0]["condition"], "claim_amount > 80000");
        assert_eq!(rules["buckets"][1]["min_score"], 3);
        assert_eq!(rules["buckets"][1]["max_score"], 5);
        assert!(rules["buckets"][2].get("max_score").is_none());
        assert_eq!(rules["buckets"][2]["probability"], 85);
    }
}

// ============================================================================
// HTML Form Tests
// ============================================================================

mod html_form {
    use super::*;

    #[tokio::test]
    async fn test_form_prefilled_with_defaults() {
        let response = server().get("/").await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains(r#"name="claim_amount" value="50000""#));
        assert!(html.contains(r#"name="days_since_last_claim" value="365""#));
        assert!(html.contains("Predict Fraud Risk"));
        assert!(!html.contains(r#"class="risk-card"#));
    }

    #[tokio::test]
    async fn test_submission_renders_report() {
        let fields = ClaimFixtures::form_fields(&ClaimFixtures::high_risk());
        let response = server().post("/").form(&fields).await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("🚨 HIGH RISK"));
        assert!(html.contains("Fraud Probability: 85%"));
        assert!(html.contains("banner-error"));
        assert!(html.contains("<svg"));
        assert!(html.contains("Claim Data Used for Analysis"));
        assert!(html.contains(r#"<option value="vehicle" selected>"#));
    }

    #[tokio::test]
    async fn test_invalid_submission_keeps_values() {
        let mut fields = ClaimFixtures::form_fields(&ClaimFixtures::clean());
        fields[1].1 = "12".to_string();

        let response = server().post("/").form(&fields).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let html = response.text();
        assert!(html.contains(r#"class="error""#));
        assert!(html.contains("customer_age"));
        assert!(html.contains(r#"name="customer_age" value="12""#));
        assert!(!html.contains(r#"class="risk-card"#));
    }

    #[tokio::test]
    async fn test_non_numeric_submission_is_rejected() {
        let mut fields = ClaimFixtures::form_fields(&ClaimFixtures::clean());
        fields[0].1 = "lots".to_string();

        let response = server().post("/").form(&fields).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert!(response.text().contains("claim_amount must be a whole number"));
    }
}
