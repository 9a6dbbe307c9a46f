//! Tenant dashboard.

use serde::Serialize;

use crate::domains::catalog::{Catalog, Property};

/// The tenant's saved-properties view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantDashboard {
    pub favorites: Vec<Property>,
}

impl TenantDashboard {
    /// Build the tenant view from the catalog snapshot.
    ///
    /// Favorites are a fixed catalog slice until per-user favorites exist
    /// on the hosted backend.
    // TODO: read favorites from the user's profile once the profile store carries them
    pub fn for_catalog(catalog: &Catalog) -> Self {
        let favorites = catalog
            .properties()
            .iter()
            .skip(1)
            .take(2)
            .cloned()
            .collect();
        Self { favorites }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn favorites_are_second_and_third_listings() {
        let catalog = Catalog::seed();
        let dashboard = TenantDashboard::for_catalog(&catalog);

        let ids: Vec<&str> = dashboard.favorites.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p2", "p3"]);
    }
}
