//! Review aggregation and submission.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::models::Review;
use crate::common::ReviewId;

/// Validation failures for a submitted review.
///
/// Messages are user-facing; the HTTP layer passes them through verbatim.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReviewError {
    #[error("Please select a star rating.")]
    RatingRequired,

    #[error("Rating must be between 1 and 5.")]
    RatingOutOfRange,

    #[error("Please write a comment for your review.")]
    CommentRequired,

    #[error("Please provide your name.")]
    AuthorRequired,
}

/// A review submission before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct NewReview {
    pub author: String,
    pub rating: u8,
    pub comment: String,
}

impl NewReview {
    pub fn validate(&self) -> Result<(), ReviewError> {
        if self.rating == 0 {
            return Err(ReviewError::RatingRequired);
        }
        if self.rating > 5 {
            return Err(ReviewError::RatingOutOfRange);
        }
        if self.comment.trim().is_empty() {
            return Err(ReviewError::CommentRequired);
        }
        if self.author.trim().is_empty() {
            return Err(ReviewError::AuthorRequired);
        }
        Ok(())
    }

    /// Turn a validated submission into a review dated today.
    ///
    /// The catalog snapshot is immutable, so the composed review is echoed
    /// to the caller rather than stored.
    pub fn into_review(self) -> Review {
        Review {
            id: ReviewId::generate(),
            author: self.author,
            avatar_image_id: None,
            rating: self.rating,
            comment: self.comment,
            date: chrono::Utc::now().date_naive(),
        }
    }
}

/// Aggregated ratings for a property, shaped for the review panel:
/// an average, a total, and whole-star buckets from five down to one.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    pub average: f64,
    pub count: usize,
    pub distribution: Vec<StarBucket>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StarBucket {
    pub star: u8,
    pub count: usize,
    pub percentage: f64,
}

impl RatingSummary {
    pub fn for_reviews(reviews: &[Review]) -> Self {
        let count = reviews.len();
        let average = if count > 0 {
            reviews.iter().map(|r| r.rating as f64).sum::<f64>() / count as f64
        } else {
            0.0
        };

        let distribution = (1u8..=5)
            .rev()
            .map(|star| {
                let star_count = reviews.iter().filter(|r| r.rating == star).count();
                let percentage = if count > 0 {
                    star_count as f64 / count as f64 * 100.0
                } else {
                    0.0
                };
                StarBucket {
                    star,
                    count: star_count,
                    percentage,
                }
            })
            .collect();

        Self {
            average,
            count,
            distribution,
        }
    }
}
