//! Catalog domain - properties, rooms, reviews, and filtering.

pub mod filter;
pub mod models;
pub mod reviews;
pub mod seed;

pub use filter::filter_properties;
pub use models::{
    Coordinates, FilterCriteria, PriceRange, Property, PropertyType, Review, Room, RoomType,
};
pub use reviews::{NewReview, RatingSummary, ReviewError, StarBucket};
pub use seed::Catalog;
