//! Seeded property catalog.
//!
//! The catalog is an immutable in-memory snapshot built at startup. Listing
//! management lives on the landlord side and is out of scope here, so every
//! request reads the same data.

use std::collections::HashSet;

use chrono::NaiveDate;

use super::models::{
    Coordinates, PriceRange, Property, PropertyType, Review, Room, RoomType,
};
use crate::common::PropertyId;

/// Number of listings surfaced on the landing page.
const FEATURED_COUNT: usize = 4;

/// The in-memory property catalog.
pub struct Catalog {
    properties: Vec<Property>,
}

impl Catalog {
    /// Build the seeded catalog and check its invariants.
    ///
    /// Panics when the seed data is malformed; that is a programming error,
    /// not a runtime condition.
    pub fn seed() -> Self {
        let catalog = Self {
            properties: seed_properties(),
        };
        catalog.assert_invariants();
        catalog
    }

    /// All properties, in catalog order.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Look up a property by ID.
    pub fn get(&self, id: &PropertyId) -> Option<&Property> {
        self.properties.iter().find(|p| &p.id == id)
    }

    /// Listings surfaced on the landing page: the first few catalog entries.
    pub fn featured(&self) -> &[Property] {
        let end = FEATURED_COUNT.min(self.properties.len());
        &self.properties[..end]
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    fn assert_invariants(&self) {
        let mut property_ids = HashSet::new();
        let mut room_ids = HashSet::new();

        for property in &self.properties {
            assert!(
                property_ids.insert(property.id.clone()),
                "duplicate property id {}",
                property.id
            );
            assert!(
                property.price_range.min <= property.price_range.max,
                "inverted price range on {}",
                property.id
            );
            assert!(
                !property.rooms.is_empty(),
                "property {} has no rooms",
                property.id
            );
            for room in &property.rooms {
                assert!(
                    room_ids.insert(room.id.clone()),
                    "duplicate room id {}",
                    room.id
                );
            }
        }
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid")
}

fn room(id: &str, room_type: RoomType, price: u32, is_available: bool) -> Room {
    Room {
        id: id.into(),
        room_type,
        price,
        is_available,
    }
}

fn review(
    id: &str,
    author: &str,
    rating: u8,
    comment: &str,
    review_date: NaiveDate,
    avatar_image_id: &str,
) -> Review {
    Review {
        id: id.into(),
        author: author.to_string(),
        avatar_image_id: Some(avatar_image_id.to_string()),
        rating,
        comment: comment.to_string(),
        date: review_date,
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn seed_properties() -> Vec<Property> {
    vec![
        Property {
            id: "p1".into(),
            title: "Ganesh PG".to_string(),
            property_type: PropertyType::Pg,
            location: "45, College Road, Nungambakkam, Chennai".to_string(),
            city: "Chennai".to_string(),
            coordinates: Coordinates { lat: 13.06, lng: 80.24 },
            price_range: PriceRange { min: 12000, max: 18000 },
            amenities: strings(&["Wi-Fi", "Food", "Housekeeping"]),
            main_image_id: "property-1-1".to_string(),
            gallery_image_ids: strings(&["property-1-1", "property-1-2", "property-1-3"]),
            rooms: vec![
                room("r1", RoomType::Private, 18000, true),
                room("r2", RoomType::SharedTwo, 12000, false),
            ],
            reviews: vec![
                review(
                    "rev1",
                    "Rahul",
                    5,
                    "Amazing place, great community!",
                    date(2024, 7, 20),
                    "testimonial-2",
                ),
                review(
                    "rev2",
                    "Sneha",
                    4,
                    "Very clean and well maintained. The food could be better.",
                    date(2024, 7, 18),
                    "testimonial-1",
                ),
            ],
        },
        Property {
            id: "p2".into(),
            title: "Luxury PG".to_string(),
            property_type: PropertyType::Pg,
            location: "90, Vidya Vihar, Pilani".to_string(),
            city: "Pilani".to_string(),
            coordinates: Coordinates { lat: 28.37, lng: 75.60 },
            price_range: PriceRange { min: 10000, max: 15000 },
            amenities: strings(&["Wi-Fi", "Cooler", "Food"]),
            main_image_id: "property-2-1".to_string(),
            gallery_image_ids: strings(&["property-2-1", "property-2-2", "property-2-3"]),
            rooms: vec![
                room("r3", RoomType::Private, 15000, false),
                room("r4", RoomType::SharedTwo, 11000, true),
                room("r5", RoomType::SharedThreePlus, 10000, true),
            ],
            reviews: vec![],
        },
        Property {
            id: "p3".into(),
            title: "Atlantis PG".to_string(),
            property_type: PropertyType::Pg,
            location: "56, Adyar, Chennai".to_string(),
            city: "Chennai".to_string(),
            coordinates: Coordinates { lat: 13.00, lng: 80.25 },
            price_range: PriceRange { min: 11000, max: 25000 },
            amenities: strings(&["Wi-Fi", "Food"]),
            main_image_id: "property-3-1".to_string(),
            gallery_image_ids: strings(&["property-3-1", "property-3-2", "property-3-3"]),
            rooms: vec![room("r6", RoomType::Private, 25000, true)],
            reviews: vec![review(
                "rev3",
                "Vikram",
                5,
                "Top-notch facilities and a great location.",
                date(2024, 6, 25),
                "testimonial-2",
            )],
        },
        Property {
            id: "p4".into(),
            title: "Homies Living PG".to_string(),
            property_type: PropertyType::Pg,
            location: "15, Hauz Khas Village, Delhi".to_string(),
            city: "Delhi".to_string(),
            coordinates: Coordinates { lat: 28.55, lng: 77.20 },
            price_range: PriceRange { min: 16000, max: 22000 },
            amenities: strings(&["Wi-Fi", "AC", "Housekeeping"]),
            main_image_id: "property-4-1".to_string(),
            gallery_image_ids: strings(&["property-4-1", "property-2-2", "property-1-2"]),
            rooms: vec![
                room("r7", RoomType::SharedTwo, 18000, true),
                room("r8", RoomType::SharedThreePlus, 16000, true),
            ],
            reviews: vec![],
        },
        Property {
            id: "p5".into(),
            title: "Executive Co-living Space".to_string(),
            property_type: PropertyType::SharedFlat,
            location: "Hitech City, Hyderabad".to_string(),
            city: "Hyderabad".to_string(),
            coordinates: Coordinates { lat: 17.44, lng: 78.37 },
            price_range: PriceRange { min: 18000, max: 30000 },
            amenities: strings(&["Wifi", "AC", "Power Backup", "Housekeeping", "Gym", "Parking"]),
            main_image_id: "property-5-1".to_string(),
            gallery_image_ids: strings(&["property-5-1", "property-3-2", "property-1-3"]),
            rooms: vec![
                room("r9", RoomType::Private, 30000, true),
                room("r10", RoomType::SharedTwo, 18000, true),
            ],
            reviews: vec![],
        },
        Property {
            id: "p6".into(),
            title: "Girls Hostel \"The Nest\"".to_string(),
            property_type: PropertyType::Hostel,
            location: "Sector 15, Noida".to_string(),
            city: "Noida".to_string(),
            coordinates: Coordinates { lat: 28.586, lng: 77.32 },
            price_range: PriceRange { min: 10000, max: 14000 },
            amenities: strings(&["Wifi", "AC", "Meals", "Laundry", "Security"]),
            main_image_id: "property-6-1".to_string(),
            gallery_image_ids: strings(&["property-6-1", "property-2-2", "property-1-2"]),
            rooms: vec![
                room("r11", RoomType::Private, 14000, false),
                room("r12", RoomType::SharedTwo, 10000, true),
            ],
            reviews: vec![],
        },
    ]
}
