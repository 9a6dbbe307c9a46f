//! Catalog domain models.
//!
//! Wire field names stay camelCase to match the data contract the web
//! frontend was built against (`priceRange`, `isAvailable`, `mainImageId`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::common::{PropertyId, ReviewId, RoomId};

/// Kind of property on offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    #[serde(rename = "PG")]
    Pg,
    Hostel,
    #[serde(rename = "Shared Flat")]
    SharedFlat,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyType::Pg => write!(f, "PG"),
            PropertyType::Hostel => write!(f, "Hostel"),
            PropertyType::SharedFlat => write!(f, "Shared Flat"),
        }
    }
}

impl FromStr for PropertyType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PG" => Ok(PropertyType::Pg),
            "Hostel" => Ok(PropertyType::Hostel),
            "Shared Flat" => Ok(PropertyType::SharedFlat),
            _ => Err(anyhow::anyhow!("Unknown property type: {}", s)),
        }
    }
}

/// Kind of room within a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomType {
    Private,
    #[serde(rename = "Shared (2 beds)")]
    SharedTwo,
    #[serde(rename = "Shared (3+ beds)")]
    SharedThreePlus,
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomType::Private => write!(f, "Private"),
            RoomType::SharedTwo => write!(f, "Shared (2 beds)"),
            RoomType::SharedThreePlus => write!(f, "Shared (3+ beds)"),
        }
    }
}

impl FromStr for RoomType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Private" => Ok(RoomType::Private),
            "Shared (2 beds)" => Ok(RoomType::SharedTwo),
            "Shared (3+ beds)" => Ok(RoomType::SharedThreePlus),
            _ => Err(anyhow::anyhow!("Unknown room type: {}", s)),
        }
    }
}

/// Monthly rent window across a property's rooms, in whole rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

/// Map position of a property.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A bookable unit within a property.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: RoomId,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    /// Monthly rent in whole rupees
    pub price: u32,
    pub is_available: bool,
}

/// A tenant review left on a property.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_image_id: Option<String>,
    /// Whole stars, 1 through 5
    pub rating: u8,
    pub comment: String,
    pub date: NaiveDate,
}

/// A property listing in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: PropertyId,
    pub title: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    /// Street-level address line shown on cards and detail pages
    pub location: String,
    pub city: String,
    pub coordinates: Coordinates,
    pub price_range: PriceRange,
    pub amenities: Vec<String>,
    pub main_image_id: String,
    pub gallery_image_ids: Vec<String>,
    pub rooms: Vec<Room>,
    pub reviews: Vec<Review>,
}

impl Property {
    /// Look up a room by ID.
    pub fn room(&self, room_id: &RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| &r.id == room_id)
    }

    /// Rooms currently open for booking.
    pub fn available_rooms(&self) -> Vec<&Room> {
        self.rooms.iter().filter(|r| r.is_available).collect()
    }
}

/// Criteria for narrowing the catalog.
///
/// The default criteria match everything: no city, the widest possible
/// price window, and no required amenities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Exact city name; `None`, empty, or `"all"` match any city
    pub city: Option<String>,
    /// Inclusive lower bound on a listing's starting price
    pub price_min: u32,
    /// Inclusive upper bound on a listing's starting price
    pub price_max: u32,
    /// Amenities that must all be present on a matching listing
    pub amenities: Vec<String>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            city: None,
            price_min: 0,
            price_max: u32::MAX,
            amenities: Vec::new(),
        }
    }
}
