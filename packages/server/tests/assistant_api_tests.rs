//! Assistant route tests: FAQ answers and listing copy through the mock AI.
//!
//! Both routes answer HTTP 200 with a uniform `{success, ...}` shape; every
//! failure subtype collapses into one user-facing message.

mod common;

use axum::http::StatusCode;
use roomverse_core::kernel::MockGenerativeAi;
use serde_json::json;

use crate::common::TestHarness;

// ============================================================================
// FAQ assistant
// ============================================================================

#[tokio::test]
async fn faq_answers_from_queued_model_response() {
    let harness = TestHarness::new().with_ai(
        MockGenerativeAi::new()
            .with_response(r#"{"answer":"Yes, deposits are refundable at move-out."}"#),
    );
    let api = harness.api();

    let response = api
        .post(
            "/api/assistant/faq",
            json!({"question": "Is the deposit refundable?"}),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.get("success"), true);
    assert_eq!(
        response.get("answer"),
        "Yes, deposits are refundable at move-out."
    );
    assert!(response.get("error").is_null());
}

#[tokio::test]
async fn faq_prompt_is_grounded_in_site_faqs() {
    let harness = TestHarness::new();
    let api = harness.api();

    api.post(
        "/api/assistant/faq",
        json!({"question": "Is the deposit refundable?"}),
    )
    .await;

    assert_eq!(harness.ai.call_count(), 1);
    assert!(harness.ai.was_called_with("Is the deposit refundable?"));
    assert!(harness.ai.was_called_with("Q: What is the booking process?"));
    assert!(harness
        .ai
        .was_called_with("based *only* on the provided FAQ context"));
}

#[tokio::test]
async fn faq_rejects_empty_question_without_calling_model() {
    let harness = TestHarness::new();
    let api = harness.api();

    let response = api.post("/api/assistant/faq", json!({"question": ""})).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.get("success"), false);
    assert_eq!(
        response.get("error"),
        "Invalid input. Please provide a question."
    );
    assert_eq!(harness.ai.call_count(), 0);
}

#[tokio::test]
async fn faq_treats_malformed_body_as_invalid_input() {
    let harness = TestHarness::new();
    let api = harness.api();

    let response = api.post_raw("/api/assistant/faq", "{not json").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.get("success"), false);
    assert_eq!(
        response.get("error"),
        "Invalid input. Please provide a question."
    );
}

#[tokio::test]
async fn faq_collapses_model_failure_into_generic_message() {
    let harness =
        TestHarness::new().with_ai(MockGenerativeAi::new().with_error("model overloaded"));
    let api = harness.api();

    let response = api
        .post("/api/assistant/faq", json!({"question": "Anything?"}))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.get("success"), false);
    assert_eq!(
        response.get("error"),
        "Failed to get an answer. Please try again."
    );
}

#[tokio::test]
async fn faq_collapses_schema_mismatch_into_generic_message() {
    let harness = TestHarness::new().with_ai(MockGenerativeAi::new().with_response("not json"));
    let api = harness.api();

    let response = api
        .post("/api/assistant/faq", json!({"question": "Anything?"}))
        .await;

    assert_eq!(response.get("success"), false);
    assert_eq!(
        response.get("error"),
        "Failed to get an answer. Please try again."
    );
}

// ============================================================================
// Listing copy
// ============================================================================

#[tokio::test]
async fn describe_generates_listing_copy() {
    let harness = TestHarness::new().with_ai(
        MockGenerativeAi::new()
            .with_response(r#"{"description":"A sunlit co-living home in Koramangala."}"#),
    );
    let api = harness.api();

    let response = api
        .post(
            "/api/assistant/describe",
            json!({
                "propertyType": "PG",
                "location": "Koramangala, Bangalore",
                "amenities": "Wifi, AC, Meals"
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.get("success"), true);
    assert_eq!(
        response.get("description"),
        "A sunlit co-living home in Koramangala."
    );

    assert!(harness.ai.was_called_with("Property Type: PG"));
    assert!(harness.ai.was_called_with("Location: Koramangala, Bangalore"));
    assert!(harness.ai.was_called_with("Amenities: Wifi, AC, Meals"));
}

#[tokio::test]
async fn describe_rejects_missing_fields_without_calling_model() {
    let harness = TestHarness::new();
    let api = harness.api();

    let response = api
        .post(
            "/api/assistant/describe",
            json!({"propertyType": "PG", "location": "", "amenities": "Wifi"}),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.get("success"), false);
    assert_eq!(
        response.get("error"),
        "Invalid input. Please provide property type, location, and amenities."
    );
    assert_eq!(harness.ai.call_count(), 0);
}

#[tokio::test]
async fn describe_collapses_model_failure_into_generic_message() {
    let harness = TestHarness::new().with_ai(MockGenerativeAi::new().with_error("quota"));
    let api = harness.api();

    let response = api
        .post(
            "/api/assistant/describe",
            json!({
                "propertyType": "Hostel",
                "location": "Noida",
                "amenities": "Meals, Laundry"
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.get("success"), false);
    assert_eq!(
        response.get("error"),
        "Failed to generate description. Please try again."
    );
}
