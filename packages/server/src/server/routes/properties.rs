use axum::{
    extract::{rejection::JsonRejection, Extension, Path, Query},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::common::{PropertyId, RoomId};
use crate::domains::booking::{BookingQuote, QuoteError};
use crate::domains::catalog::{
    filter_properties, FilterCriteria, NewReview, Property, RatingSummary, Review,
};
use crate::server::app::AppState;
use crate::server::routes::error::ApiError;

/// Query parameters accepted by the catalog listing route
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    pub city: Option<String>,
    pub price_min: Option<u32>,
    pub price_max: Option<u32>,
    /// Comma-separated amenity labels
    pub amenities: Option<String>,
}

impl FilterParams {
    fn into_criteria(self) -> FilterCriteria {
        let defaults = FilterCriteria::default();
        FilterCriteria {
            city: self.city,
            price_min: self.price_min.unwrap_or(defaults.price_min),
            price_max: self.price_max.unwrap_or(defaults.price_max),
            amenities: self
                .amenities
                .map(|list| {
                    list.split(',')
                        .map(str::trim)
                        .filter(|amenity| !amenity.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDetailResponse {
    #[serde(flatten)]
    property: Property,
    rating_summary: RatingSummary,
}

#[derive(Serialize)]
pub struct ReviewsResponse {
    reviews: Vec<Review>,
    summary: RatingSummary,
}

#[derive(Serialize)]
pub struct SubmittedReview {
    review: Review,
}

#[derive(Debug, Deserialize)]
pub struct QuoteParams {
    pub room_id: Option<String>,
}

fn lookup_property<'a>(state: &'a AppState, id: &str) -> Result<&'a Property, ApiError> {
    state
        .deps
        .catalog
        .get(&PropertyId::new(id))
        .ok_or_else(|| ApiError::NotFound("Property not found".to_string()))
}

/// GET /api/properties
pub async fn list_properties_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<FilterParams>,
) -> Json<Vec<Property>> {
    let criteria = params.into_criteria();
    let matches = filter_properties(state.deps.catalog.properties(), &criteria);
    tracing::debug!(matches = matches.len(), "Catalog filtered");

    Json(matches)
}

/// GET /api/properties/featured
pub async fn featured_properties_handler(
    Extension(state): Extension<AppState>,
) -> Json<Vec<Property>> {
    Json(state.deps.catalog.featured().to_vec())
}

/// GET /api/properties/:id
pub async fn property_detail_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PropertyDetailResponse>, ApiError> {
    let property = lookup_property(&state, &id)?.clone();
    let rating_summary = RatingSummary::for_reviews(&property.reviews);

    Ok(Json(PropertyDetailResponse {
        property,
        rating_summary,
    }))
}

/// GET /api/properties/:id/reviews
pub async fn list_reviews_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ReviewsResponse>, ApiError> {
    let property = lookup_property(&state, &id)?;

    Ok(Json(ReviewsResponse {
        reviews: property.reviews.clone(),
        summary: RatingSummary::for_reviews(&property.reviews),
    }))
}

/// POST /api/properties/:id/reviews
///
/// Validates and acknowledges the review. The catalog snapshot is read-only,
/// so the composed review is echoed back rather than stored.
pub async fn submit_review_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
    body: Result<Json<NewReview>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmittedReview>), ApiError> {
    let Json(new_review) = body.map_err(|_| ApiError::BadRequest("Invalid JSON".to_string()))?;
    lookup_property(&state, &id)?;

    new_review
        .validate()
        .map_err(|err| ApiError::BadRequest(err.to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(SubmittedReview {
            review: new_review.into_review(),
        }),
    ))
}

/// GET /api/properties/:id/quote
pub async fn quote_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
    Query(params): Query<QuoteParams>,
) -> Result<Json<BookingQuote>, ApiError> {
    let room_id = params
        .room_id
        .ok_or_else(|| ApiError::BadRequest("room_id query parameter is required".to_string()))?;
    let property = lookup_property(&state, &id)?;

    BookingQuote::for_room(property, &RoomId::new(room_id))
        .map(Json)
        .map_err(|err| match err {
            QuoteError::RoomNotFound => ApiError::NotFound(err.to_string()),
            QuoteError::RoomUnavailable => ApiError::Conflict(err.to_string()),
        })
}
