//! Map statistics over located journal entries

use super::engine::ClusterEngine;
use crate::models::{LocatedItem, MapStatistics};
use std::collections::HashSet;
use tracing::debug;

impl ClusterEngine {
    /// Count located entries and the distinct cities and countries among them.
    ///
    /// Entries without a coordinate are ignored entirely, including their
    /// place names. Independent of zoom level.
    #[must_use]
    pub fn compute_statistics(items: &[LocatedItem]) -> MapStatistics {
        let located: Vec<&LocatedItem> = items.iter().filter(|item| item.is_located()).collect();

        let cities: HashSet<&str> = located
            .iter()
            .filter_map(|item| item.city.as_deref())
            .collect();
        let countries: HashSet<&str> = located
            .iter()
            .filter_map(|item| item.country.as_deref())
            .collect();

        let stats = MapStatistics {
            total_located: located.len(),
            unique_cities: cities.len(),
            unique_countries: countries.len(),
        };
        debug!("Computed map statistics: {:?}", stats);
        stats
    }
}
