//! Integration tests for the government fee engine.
//!
//! Drives the `/calculate` endpoint end to end for:
//! - Foreign and Saudi employees across every fee category
//! - Every billing period
//! - Display rounding and the multiple-fees label
//! - Fee records and due dates
//! - Error cases

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::str::FromStr;
use tower::ServiceExt;

use gov_fee_engine::api::{create_router, AppState};
use gov_fee_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/ksa").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn normalize_decimal(s: &str) -> String {
    Decimal::from_str(s).unwrap().normalize().to_string()
}

async fn post_calculate(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn create_request(
    contract_type: &str,
    basic_salary: &str,
    has_national_balance: bool,
    period: &str,
    categories: Vec<&str>,
) -> Value {
    json!({
        "employee": {
            "id": "EMP001",
            "name": "Test Employee",
            "contract_type": contract_type,
            "basic_salary": basic_salary,
            "has_national_balance": has_national_balance
        },
        "period": period,
        "categories": categories,
        "fee_date": "2025-06-15"
    })
}

fn assert_decimal_eq(actual: &Value, expected: &str) {
    let actual = actual.as_str().expect("decimal serialized as string");
    assert_eq!(
        normalize_decimal(actual),
        normalize_decimal(expected),
        "Expected {}, got {}",
        expected,
        actual
    );
}

fn line_item<'a>(result: &'a Value, category: &str) -> &'a Value {
    result["breakdown"]["line_items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|item| item["category"] == category)
        .unwrap_or_else(|| panic!("no line item for {}", category))
}

// =============================================================================
// Social insurance
// =============================================================================

#[tokio::test]
async fn test_saudi_social_insurance_monthly() {
    let body = create_request("saudi", "10000", true, "monthly", vec!["social_insurance"]);
    let (status, result) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_eq(&result["breakdown"]["total_amount"], "2200");
    assert_eq!(result["display"]["total"], "2200.00");
    assert_eq!(result["display"]["label"], "Social insurance");
    assert_eq!(
        line_item(&result, "social_insurance")["display_note"],
        "Social insurance: 2200.00 SAR (22% of basic salary)"
    );
}

#[tokio::test]
async fn test_foreign_social_insurance_monthly() {
    let body = create_request("foreign", "5000", false, "monthly", vec!["social_insurance"]);
    let (status, result) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_eq(&result["breakdown"]["total_amount"], "100");
}

// =============================================================================
// Labor office and residency
// =============================================================================

#[tokio::test]
async fn test_labor_office_annual_by_national_balance() {
    let without = create_request("foreign", "4500", false, "annual", vec!["labor_office"]);
    let (_, result) = post_calculate(create_router_for_test(), without).await;
    assert_decimal_eq(&result["breakdown"]["total_amount"], "9600");

    let with = create_request("foreign", "4500", true, "annual", vec!["labor_office"]);
    let (_, result) = post_calculate(create_router_for_test(), with).await;
    assert_decimal_eq(&result["breakdown"]["total_amount"], "8400");
}

#[tokio::test]
async fn test_residency_monthly_rounds_for_display() {
    let body = create_request("foreign", "4500", false, "monthly", vec!["residency"]);
    let (status, result) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["display"]["total"], "54.17");
    assert_ne!(
        normalize_decimal(result["breakdown"]["total_amount"].as_str().unwrap()),
        "54.17"
    );
}

#[tokio::test]
async fn test_saudi_exempt_categories_are_informational() {
    let body = create_request(
        "saudi",
        "9000",
        false,
        "annual",
        vec!["labor_office", "residency"],
    );
    let (status, result) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);
    for category in ["labor_office", "residency"] {
        let item = line_item(&result, category);
        assert_eq!(item["informational"], true);
        assert_decimal_eq(&item["computed_amount"], "0");
    }
    assert_decimal_eq(&result["breakdown"]["total_amount"], "0");
}

// =============================================================================
// Medical insurance
// =============================================================================

#[tokio::test]
async fn test_medical_insurance_levels_quarterly() {
    let cases = [("basic", "100"), ("medium", "225"), ("high", "375")];
    for (level, expected) in cases {
        let mut body = create_request("foreign", "5000", false, "quarterly", vec!["medical_insurance"]);
        body["insurance_level"] = json!(level);
        let (status, result) = post_calculate(create_router_for_test(), body).await;

        assert_eq!(status, StatusCode::OK);
        assert_decimal_eq(&result["breakdown"]["total_amount"], expected);
    }
}

#[tokio::test]
async fn test_medical_insurance_saudi_may_differ() {
    let mut body = create_request("saudi", "5000", false, "annual", vec!["medical_insurance"]);
    body["insurance_level"] = json!("high");
    let (_, result) = post_calculate(create_router_for_test(), body).await;

    let item = line_item(&result, "medical_insurance");
    assert_eq!(item["informational"], true);
    assert!(item["display_note"].as_str().unwrap().contains("may differ"));
}

// =============================================================================
// Other fees and combined breakdowns
// =============================================================================

#[tokio::test]
async fn test_other_fee_ignores_period() {
    for period in ["monthly", "annual"] {
        let mut body = create_request("foreign", "5000", false, period, vec!["other"]);
        body["other_fee"] = json!({"amount": "345.678", "description": "Work permit transfer"});
        let (_, result) = post_calculate(create_router_for_test(), body).await;

        assert_decimal_eq(&result["breakdown"]["total_amount"], "345.678");
        assert_eq!(result["display"]["total"], "345.68");
        assert_eq!(result["display"]["label"], "Other fees");
    }
}

#[tokio::test]
async fn test_all_categories_canonical_order_and_label() {
    let mut body = create_request(
        "foreign",
        "6000",
        true,
        "semiannual",
        vec!["other", "social_insurance", "medical_insurance", "residency", "labor_office"],
    );
    body["insurance_level"] = json!("basic");
    body["other_fee"] = json!({"amount": "150", "description": ""});
    let (status, result) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::OK);

    let order: Vec<&str> = result["breakdown"]["line_items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["category"].as_str().unwrap())
        .collect();
    assert_eq!(
        order,
        vec!["labor_office", "residency", "medical_insurance", "social_insurance", "other"]
    );

    // 700 x 6 + 650 / 2 + 400 / 2 + 6000 x 2% x 6 + 150
    assert_decimal_eq(&result["breakdown"]["total_amount"], "5595");
    assert_eq!(result["breakdown"]["primary_category"], "labor_office");
    assert_eq!(result["display"]["label"], "Multiple fees");
    assert_eq!(result["breakdown"]["audit_trace"].as_array().unwrap().len(), 5);
    assert_eq!(line_item(&result, "other")["display_note"], "Other fees: 150.00 SAR");
}

// =============================================================================
// Fee records
// =============================================================================

#[tokio::test]
async fn test_record_is_pending_and_due_in_thirty_days() {
    let body = create_request("foreign", "5000", false, "monthly", vec!["labor_office"]);
    let (_, result) = post_calculate(create_router_for_test(), body).await;

    let record = &result["record"];
    assert_eq!(record["employee_id"], "EMP001");
    assert_eq!(record["fee_type"], "labor_office");
    assert_eq!(record["fee_date"], "2025-06-15");
    assert_eq!(record["due_date"], "2025-07-15");
    assert_eq!(record["payment_status"], "pending");
    assert_decimal_eq(&record["amount"], "800");
}

#[tokio::test]
async fn test_response_metadata_present() {
    let body = create_request("saudi", "7000", false, "monthly", vec!["social_insurance"]);
    let (_, result) = post_calculate(create_router_for_test(), body).await;

    assert!(result["calculation_id"].as_str().is_some());
    assert!(result["timestamp"].as_str().is_some());
    assert_eq!(result["engine_version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(result["fee_date"], "2025-06-15");
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_empty_categories_rejected() {
    let body = create_request("foreign", "5000", false, "monthly", vec![]);
    let (status, result) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
    assert_eq!(result["details"], "categories");
}

#[tokio::test]
async fn test_other_without_amount_rejected() {
    let body = create_request("foreign", "5000", false, "monthly", vec!["other"]);
    let (status, result) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["details"], "other_fee");
}

#[tokio::test]
async fn test_non_positive_other_amount_rejected() {
    let mut body = create_request("foreign", "5000", false, "monthly", vec!["other"]);
    body["other_fee"] = json!({"amount": "0"});
    let (status, result) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["details"], "other_fee.amount");
}

#[tokio::test]
async fn test_negative_salary_rejected() {
    let body = create_request("foreign", "-1", false, "monthly", vec!["social_insurance"]);
    let (status, result) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["details"], "basic_salary");
}

#[tokio::test]
async fn test_unrepresentable_annual_salary_rejected() {
    let body = create_request(
        "saudi",
        "79228162514264337593543950335",
        true,
        "annual",
        vec!["social_insurance"],
    );
    let (status, result) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
    assert_eq!(result["details"], "basic_salary");
}

#[tokio::test]
async fn test_unrepresentable_other_fee_with_labor_office_rejected() {
    let mut body = create_request("foreign", "5000", false, "monthly", vec!["labor_office", "other"]);
    body["other_fee"] = json!({"amount": "79228162514264337593543950335"});
    let (status, result) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
    assert_eq!(result["details"], "other_fee.amount");
}

#[tokio::test]
async fn test_unknown_period_rejected() {
    let body = create_request("foreign", "5000", false, "weekly", vec!["labor_office"]);
    let (status, result) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from("{\"employee\": "))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let result: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(result["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_fee_date_before_first_schedule_rejected() {
    let mut body = create_request("foreign", "5000", false, "monthly", vec!["labor_office"]);
    body["fee_date"] = json!("2024-12-31");
    let (status, result) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "SCHEDULE_NOT_FOUND");
}

#[test]
fn test_missing_schedule_directory_fails_to_load() {
    assert!(ConfigLoader::load("./config/does-not-exist").is_err());
}
