//! Landlord dashboard.
//!
//! Portfolio figures are computed from live room state so the cards always
//! agree with the table below them.

use serde::Serialize;

use crate::common::PropertyId;
use crate::domains::catalog::Property;

/// Portfolio roll-up for the landlord dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandlordSummary {
    pub total_properties: usize,
    pub total_rooms: usize,
    pub occupied_rooms: usize,
    /// Share of rooms occupied, as a percentage
    pub occupancy_rate: f64,
    /// Sum of monthly rents across occupied rooms, in whole rupees
    pub monthly_revenue: u32,
    pub properties: Vec<PropertyRow>,
}

/// One row in the dashboard's property table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRow {
    pub id: PropertyId,
    pub title: String,
    pub location: String,
    pub status: String,
    pub occupied_rooms: usize,
    pub total_rooms: usize,
}

impl LandlordSummary {
    /// Aggregate occupancy and revenue across a portfolio.
    ///
    /// A room counts as occupied when it is not available for booking, and
    /// contributes its monthly rent to revenue.
    pub fn for_properties(properties: &[Property]) -> Self {
        let mut total_rooms = 0;
        let mut occupied_rooms = 0;
        let mut monthly_revenue = 0u32;
        let mut rows = Vec::with_capacity(properties.len());

        for property in properties {
            let property_total = property.rooms.len();
            let property_occupied = property.rooms.iter().filter(|r| !r.is_available).count();

            total_rooms += property_total;
            occupied_rooms += property_occupied;
            monthly_revenue += property
                .rooms
                .iter()
                .filter(|r| !r.is_available)
                .map(|r| r.price)
                .sum::<u32>();

            rows.push(PropertyRow {
                id: property.id.clone(),
                title: property.title.clone(),
                location: property.location.clone(),
                status: "Active".to_string(),
                occupied_rooms: property_occupied,
                total_rooms: property_total,
            });
        }

        let occupancy_rate = if total_rooms > 0 {
            occupied_rooms as f64 / total_rooms as f64 * 100.0
        } else {
            0.0
        };

        Self {
            total_properties: properties.len(),
            total_rooms,
            occupied_rooms,
            occupancy_rate,
            monthly_revenue,
            properties: rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::Catalog;

    #[test]
    fn summary_over_whole_catalog() {
        let catalog = Catalog::seed();
        let summary = LandlordSummary::for_properties(catalog.properties());

        // Occupied: r2 (12000), r3 (15000), r11 (14000)
        assert_eq!(summary.total_properties, 6);
        assert_eq!(summary.total_rooms, 12);
        assert_eq!(summary.occupied_rooms, 3);
        assert_eq!(summary.monthly_revenue, 41000);
        assert!((summary.occupancy_rate - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn summary_over_selected_properties() {
        let catalog = Catalog::seed();
        let selected: Vec<_> = catalog
            .properties()
            .iter()
            .filter(|p| matches!(p.id.as_str(), "p1" | "p2"))
            .cloned()
            .collect();

        let summary = LandlordSummary::for_properties(&selected);
        assert_eq!(summary.total_properties, 2);
        assert_eq!(summary.total_rooms, 5);
        assert_eq!(summary.occupied_rooms, 2);
        assert_eq!(summary.monthly_revenue, 27000);
        assert!((summary.occupancy_rate - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rows_carry_per_property_occupancy() {
        let catalog = Catalog::seed();
        let summary = LandlordSummary::for_properties(catalog.properties());

        let p2_row = summary
            .properties
            .iter()
            .find(|row| row.id.as_str() == "p2")
            .unwrap();
        assert_eq!(p2_row.occupied_rooms, 1);
        assert_eq!(p2_row.total_rooms, 3);
        assert_eq!(p2_row.status, "Active");
    }

    #[test]
    fn empty_portfolio_is_all_zero() {
        let summary = LandlordSummary::for_properties(&[]);
        assert_eq!(summary.total_rooms, 0);
        assert_eq!(summary.occupancy_rate, 0.0);
        assert_eq!(summary.monthly_revenue, 0);
        assert!(summary.properties.is_empty());
    }
}
