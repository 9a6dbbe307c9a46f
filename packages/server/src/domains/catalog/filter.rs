//! Catalog filtering.

use super::models::{FilterCriteria, Property};

/// Narrow a property snapshot to the listings matching every active criterion.
///
/// City comparison is exact and case-sensitive, with `None`, the empty
/// string, and `"all"` matching any city. The price window applies to the
/// listing's starting price, with inclusive bounds. Selected amenities must
/// all be present on a matching listing; the listing may offer more.
/// Matches come back in catalog order.
pub fn filter_properties(properties: &[Property], criteria: &FilterCriteria) -> Vec<Property> {
    properties
        .iter()
        .filter(|p| matches_city(p, criteria))
        .filter(|p| matches_price(p, criteria))
        .filter(|p| matches_amenities(p, criteria))
        .cloned()
        .collect()
}

fn matches_city(property: &Property, criteria: &FilterCriteria) -> bool {
    match criteria.city.as_deref() {
        None | Some("") | Some("all") => true,
        Some(city) => property.city == city,
    }
}

fn matches_price(property: &Property, criteria: &FilterCriteria) -> bool {
    property.price_range.min >= criteria.price_min
        && property.price_range.min <= criteria.price_max
}

fn matches_amenities(property: &Property, criteria: &FilterCriteria) -> bool {
    criteria
        .amenities
        .iter()
        .all(|wanted| property.amenities.iter().any(|have| have == wanted))
}
