//! Catalog route tests: browsing, filtering, property detail, reviews,
//! and booking quotes against the seeded snapshot.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{ApiResponse, TestHarness};

fn listing_ids(response: &ApiResponse) -> Vec<String> {
    response
        .body
        .as_array()
        .expect("array body")
        .iter()
        .map(|p| p["id"].as_str().expect("string id").to_string())
        .collect()
}

// ============================================================================
// Listing and filtering
// ============================================================================

#[tokio::test]
async fn list_returns_whole_catalog_in_order() {
    let api = TestHarness::new().api();

    let response = api.get("/api/properties").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        listing_ids(&response),
        vec!["p1", "p2", "p3", "p4", "p5", "p6"]
    );
}

#[tokio::test]
async fn city_filter_narrows_to_matching_listings() {
    let api = TestHarness::new().api();

    let response = api.get("/api/properties?city=Chennai").await;

    assert_eq!(listing_ids(&response), vec!["p1", "p3"]);
}

#[tokio::test]
async fn city_all_matches_everything() {
    let api = TestHarness::new().api();

    let response = api.get("/api/properties?city=all").await;

    assert_eq!(listing_ids(&response).len(), 6);
}

#[tokio::test]
async fn cities_without_listings_filter_to_nothing() {
    let api = TestHarness::new().api();

    for city in ["Pune", "Mumbai", "Bangalore"] {
        let response = api.get(&format!("/api/properties?city={city}")).await;

        assert_eq!(response.status, StatusCode::OK);
        assert!(
            response.body.as_array().unwrap().is_empty(),
            "expected no listings in {city}"
        );
    }
}

#[tokio::test]
async fn price_window_matches_on_starting_price() {
    let api = TestHarness::new().api();

    let response = api
        .get("/api/properties?price_min=10500&price_max=12500")
        .await;

    assert_eq!(listing_ids(&response), vec!["p1", "p3"]);
}

#[tokio::test]
async fn amenity_filter_is_exact_and_conjunctive() {
    let api = TestHarness::new().api();

    // "Wifi" and "Wi-Fi" are distinct labels
    let wifi = api.get("/api/properties?amenities=Wifi").await;
    assert_eq!(listing_ids(&wifi), vec!["p5", "p6"]);

    // Every requested amenity must be present
    let both = api.get("/api/properties?amenities=Wi-Fi,Food").await;
    assert_eq!(listing_ids(&both), vec!["p1", "p2", "p3"]);
}

#[tokio::test]
async fn combined_criteria_intersect() {
    let api = TestHarness::new().api();

    let response = api
        .get("/api/properties?city=Chennai&amenities=Housekeeping")
        .await;

    assert_eq!(listing_ids(&response), vec!["p1"]);
}

#[tokio::test]
async fn featured_returns_first_four() {
    let api = TestHarness::new().api();

    let response = api.get("/api/properties/featured").await;

    assert_eq!(listing_ids(&response), vec!["p1", "p2", "p3", "p4"]);
}

// ============================================================================
// Property detail
// ============================================================================

#[tokio::test]
async fn detail_carries_frontend_field_names_and_rating_summary() {
    let api = TestHarness::new().api();

    let response = api.get("/api/properties/p1").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.get("title"), "Ganesh PG");
    assert_eq!(response.get("type"), "PG");
    assert_eq!(response.get("priceRange.min"), 12000);
    assert_eq!(response.get("mainImageId"), "property-1-1");
    assert_eq!(response.get("rooms.0.type"), "Private");
    assert_eq!(response.get("rooms.1.isAvailable"), false);
    assert_eq!(response.get("ratingSummary.average"), 4.5);
    assert_eq!(response.get("ratingSummary.count"), 2);
}

#[tokio::test]
async fn unknown_property_is_not_found() {
    let api = TestHarness::new().api();

    let response = api.get("/api/properties/p99").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.get("error"), "Property not found");
}

// ============================================================================
// Reviews
// ============================================================================

#[tokio::test]
async fn review_listing_includes_star_distribution() {
    let api = TestHarness::new().api();

    let response = api.get("/api/properties/p1/reviews").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.get("reviews").as_array().unwrap().len(), 2);
    assert_eq!(response.get("summary.average"), 4.5);
    assert_eq!(response.get("summary.distribution.0.star"), 5);
    assert_eq!(response.get("summary.distribution.0.percentage"), 50.0);
    assert_eq!(response.get("summary.distribution.2.count"), 0);
}

#[tokio::test]
async fn review_submission_echoes_composed_review() {
    let api = TestHarness::new().api();

    let response = api
        .post(
            "/api/properties/p1/reviews",
            json!({"author": "Asha", "rating": 5, "comment": "Lovely stay."}),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.get("review.author"), "Asha");
    assert_eq!(response.get("review.rating"), 5);
    assert_eq!(response.get("review.comment"), "Lovely stay.");
    assert!(!response.get("review.id").as_str().unwrap().is_empty());
    assert!(response.get("review.date").is_string());
}

#[tokio::test]
async fn review_without_star_rating_is_rejected() {
    let api = TestHarness::new().api();

    let response = api
        .post(
            "/api/properties/p1/reviews",
            json!({"author": "Asha", "rating": 0, "comment": "Nice."}),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.get("error"), "Please select a star rating.");
}

#[tokio::test]
async fn review_with_blank_comment_is_rejected() {
    let api = TestHarness::new().api();

    let response = api
        .post(
            "/api/properties/p1/reviews",
            json!({"author": "Asha", "rating": 4, "comment": "   "}),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.get("error"), "Please write a comment for your review.");
}

#[tokio::test]
async fn review_on_unknown_property_is_not_found() {
    let api = TestHarness::new().api();

    let response = api
        .post(
            "/api/properties/p99/reviews",
            json!({"author": "Asha", "rating": 4, "comment": "Nice."}),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_review_body_is_rejected() {
    let api = TestHarness::new().api();

    let response = api.post_raw("/api/properties/p1/reviews", "{not json").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.get("error"), "Invalid JSON");
}

// ============================================================================
// Booking quotes
// ============================================================================

#[tokio::test]
async fn quote_prices_room_with_two_month_deposit() {
    let api = TestHarness::new().api();

    let response = api.get("/api/properties/p1/quote?room_id=r1").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.get("propertyTitle"), "Ganesh PG");
    assert_eq!(response.get("roomType"), "Private");
    assert_eq!(response.get("monthlyRent"), 18000);
    assert_eq!(response.get("securityDeposit"), 36000);
    assert_eq!(response.get("totalPayable"), 54000);
    assert_eq!(
        response.get("paymentMethods.0"),
        "Pay with Card / UPI"
    );
}

#[tokio::test]
async fn quote_requires_room_id() {
    let api = TestHarness::new().api();

    let response = api.get("/api/properties/p1/quote").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.get("error"), "room_id query parameter is required");
}

#[tokio::test]
async fn quote_for_room_of_another_property_is_not_found() {
    let api = TestHarness::new().api();

    // r6 exists, but belongs to p3
    let response = api.get("/api/properties/p1/quote?room_id=r6").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.get("error"), "Room not found");
}

#[tokio::test]
async fn quote_for_occupied_room_conflicts() {
    let api = TestHarness::new().api();

    let response = api.get("/api/properties/p1/quote?room_id=r2").await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.get("error"), "Room is not available");
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn health_reports_seeded_snapshot() {
    let api = TestHarness::new().api();

    let response = api.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.get("status"), "healthy");
    assert_eq!(response.get("environment"), "development");
    assert_eq!(response.get("catalog.properties"), 6);
    assert_eq!(response.get("content.faqs"), 5);
}
