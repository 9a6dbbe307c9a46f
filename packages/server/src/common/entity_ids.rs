//! Typed ID definitions for all domain entities.
//!
//! This module defines type aliases for each domain entity, providing
//! compile-time type safety for ID usage throughout the application.
//!
//! # Example
//!
//! ```rust
//! use roomverse_core::common::{PropertyId, RoomId};
//!
//! // These are incompatible types - compiler prevents mixing them up
//! let property_id: PropertyId = PropertyId::new("p1");
//! let room_id: RoomId = RoomId::new("r1");
//!
//! // This would be a compile error:
//! // let wrong: RoomId = property_id;
//! ```

// Re-export the core Id type
pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Property entities (catalog listings).
pub struct Property;

/// Marker type for Room entities (bookable units within a property).
pub struct Room;

/// Marker type for Review entities (tenant reviews on a property).
pub struct Review;

/// Marker type for BlogPost entities (editorial content).
pub struct BlogPost;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for Property entities.
pub type PropertyId = Id<Property>;

/// Typed ID for Room entities.
pub type RoomId = Id<Room>;

/// Typed ID for Review entities.
pub type ReviewId = Id<Review>;

/// Typed ID for BlogPost entities.
pub type BlogPostId = Id<BlogPost>;
