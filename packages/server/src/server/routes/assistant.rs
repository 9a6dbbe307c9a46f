use axum::{
    extract::{rejection::JsonRejection, Extension},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domains::assistant::{
    answer_faq_question, build_faq_context, generate_property_description, DescriptionInput,
    FaqQuestionInput,
};
use crate::server::app::AppState;

/// Body for the FAQ assistant route
#[derive(Debug, Deserialize)]
pub struct FaqRequest {
    #[serde(default)]
    pub question: String,
}

/// Body for the listing copy route
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeRequest {
    #[serde(default)]
    pub property_type: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub amenities: String,
}

/// Uniform response shape of the FAQ assistant route
///
/// The route always answers HTTP 200; `success` decides whether the client
/// reads `answer` or `error`. Every failure subtype collapses into one
/// user-facing message.
#[derive(Debug, Serialize)]
pub struct FaqActionResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FaqActionResponse {
    fn answered(answer: String) -> Self {
        Self {
            success: true,
            answer: Some(answer),
            error: None,
        }
    }

    fn failed(message: &str) -> Self {
        Self {
            success: false,
            answer: None,
            error: Some(message.to_string()),
        }
    }
}

/// Uniform response shape of the listing copy route
#[derive(Debug, Serialize)]
pub struct DescribeActionResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DescribeActionResponse {
    fn generated(description: String) -> Self {
        Self {
            success: true,
            description: Some(description),
            error: None,
        }
    }

    fn failed(message: &str) -> Self {
        Self {
            success: false,
            description: None,
            error: Some(message.to_string()),
        }
    }
}

/// POST /api/assistant/faq
pub async fn faq_handler(
    Extension(state): Extension<AppState>,
    body: Result<Json<FaqRequest>, JsonRejection>,
) -> Json<FaqActionResponse> {
    // A malformed body counts as invalid input, same as an empty question
    let question = match body {
        Ok(Json(request)) => request.question,
        Err(_) => String::new(),
    };

    if question.is_empty() {
        return Json(FaqActionResponse::failed(
            "Invalid input. Please provide a question.",
        ));
    }

    let input = FaqQuestionInput {
        question,
        context: build_faq_context(state.deps.site_content.faqs()),
    };

    match answer_faq_question(&input, state.deps.ai.as_ref()).await {
        Ok(answer) => Json(FaqActionResponse::answered(answer.answer)),
        Err(err) => {
            tracing::error!(error = %err, "FAQ assistant failed");
            Json(FaqActionResponse::failed(
                "Failed to get an answer. Please try again.",
            ))
        }
    }
}

/// POST /api/assistant/describe
pub async fn describe_handler(
    Extension(state): Extension<AppState>,
    body: Result<Json<DescribeRequest>, JsonRejection>,
) -> Json<DescribeActionResponse> {
    let request = match body {
        Ok(Json(request)) => request,
        Err(_) => {
            return Json(DescribeActionResponse::failed(
                "Invalid input. Please provide property type, location, and amenities.",
            ))
        }
    };

    if request.property_type.is_empty() || request.location.is_empty() || request.amenities.is_empty()
    {
        return Json(DescribeActionResponse::failed(
            "Invalid input. Please provide property type, location, and amenities.",
        ));
    }

    let input = DescriptionInput {
        property_type: request.property_type,
        location: request.location,
        amenities: request.amenities,
    };

    match generate_property_description(&input, state.deps.ai.as_ref()).await {
        Ok(generated) => Json(DescribeActionResponse::generated(generated.description)),
        Err(err) => {
            tracing::error!(error = %err, "Description generation failed");
            Json(DescribeActionResponse::failed(
                "Failed to generate description. Please try again.",
            ))
        }
    }
}
