use axum::{extract::Extension, Json};

use crate::domains::content::{BlogPost, Faq, FilterOptions, Testimonial, WhyChooseUsItem};
use crate::server::app::AppState;

/// GET /api/content/faqs
pub async fn faqs_handler(Extension(state): Extension<AppState>) -> Json<Vec<Faq>> {
    Json(state.deps.site_content.faqs().to_vec())
}

/// GET /api/content/testimonials
pub async fn testimonials_handler(
    Extension(state): Extension<AppState>,
) -> Json<Vec<Testimonial>> {
    Json(state.deps.site_content.testimonials().to_vec())
}

/// GET /api/content/why-choose-us
pub async fn why_choose_us_handler(
    Extension(state): Extension<AppState>,
) -> Json<Vec<WhyChooseUsItem>> {
    Json(state.deps.site_content.why_choose_us().to_vec())
}

/// GET /api/content/blog-posts
pub async fn blog_posts_handler(Extension(state): Extension<AppState>) -> Json<Vec<BlogPost>> {
    Json(state.deps.site_content.blog_posts().to_vec())
}

/// GET /api/content/filter-options
pub async fn filter_options_handler(
    Extension(state): Extension<AppState>,
) -> Json<FilterOptions> {
    Json(state.deps.site_content.filter_options().clone())
}
