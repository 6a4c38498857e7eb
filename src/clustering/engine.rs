//! Greedy seed-based clustering of journal entries
//!
//! Each unassigned entry, in input order, seeds a new cluster and pulls in
//! every other unassigned entry strictly closer to the seed than the radius
//! for the current zoom. Distances are always measured from the seed, never
//! from a running centroid, so a chain of entries that are each close to
//! their neighbour does not collapse into one cluster unless every link is
//! within range of the seed itself.

use super::identity::{by_recency, centroid, stable_cluster_id};
use super::radius::ClusterRadius;
use crate::models::{Cluster, Coordinate, LocatedItem};
use tracing::debug;

/// Stateless clustering entry points
pub struct ClusterEngine;

impl ClusterEngine {
    /// Group located entries into map clusters for a zoom level.
    ///
    /// Entries without a coordinate are skipped. Clusters come out in the
    /// order their seed entry was first seen.
    #[must_use]
    #[tracing::instrument(name = "compute_clusters", level = "debug", skip(items), fields(items = items.len()))]
    pub fn compute_clusters(items: &[LocatedItem], zoom_level: f64) -> Vec<Cluster> {
        let located: Vec<(&LocatedItem, Coordinate)> = items
            .iter()
            .filter_map(|item| item.coordinate.map(|c| (item, c)))
            .collect();

        if located.is_empty() {
            debug!("No located entries, nothing to cluster");
            return Vec::new();
        }

        let radius_km = ClusterRadius::for_zoom(zoom_level);
        let mut assigned = vec![false; located.len()];
        let mut clusters = Vec::new();

        for seed_index in 0..located.len() {
            if assigned[seed_index] {
                continue;
            }
            assigned[seed_index] = true;

            let (seed, seed_coordinate) = located[seed_index];
            let mut group = vec![seed];

            for (index, (candidate, coordinate)) in located.iter().enumerate() {
                if assigned[index] {
                    continue;
                }
                if seed_coordinate.distance_km(coordinate) < radius_km {
                    assigned[index] = true;
                    group.push(*candidate);
                }
            }

            clusters.push(Self::build_cluster(&group));
        }

        debug!(
            "Clustered {} located entries into {} clusters (radius {}km)",
            located.len(),
            clusters.len(),
            radius_km
        );

        clusters
    }

    fn build_cluster(group: &[&LocatedItem]) -> Cluster {
        let id = stable_cluster_id(group.iter().map(|item| item.id.as_str()));
        // groups always hold at least the located seed
        let centroid = centroid(group.iter().filter_map(|item| item.coordinate.as_ref()))
            .unwrap_or(Coordinate::new(0.0, 0.0));

        let mut members: Vec<LocatedItem> = group.iter().map(|&item| item.clone()).collect();
        members.sort_by(by_recency);

        Cluster {
            id,
            centroid,
            is_multiple: members.len() > 1,
            members,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn entry(id: &str, hour: u32, lat: f64, lon: f64) -> LocatedItem {
        LocatedItem::new(id, Utc.with_ymd_and_hms(2024, 6, 1, hour, 0, 0).unwrap())
            .with_coordinate(lat, lon)
    }

    #[test]
    fn test_empty_input() {
        assert!(ClusterEngine::compute_clusters(&[], 3.0).is_empty());
    }

    #[test]
    fn test_unlocated_entries_are_skipped() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let items = vec![LocatedItem::new("a", ts), LocatedItem::new("b", ts)];
        assert!(ClusterEngine::compute_clusters(&items, 20.0).is_empty());

        let items = vec![
            LocatedItem::new("a", ts),
            entry("b", 1, 10.0, 10.0),
            LocatedItem::new("c", ts),
        ];
        let clusters = ClusterEngine::compute_clusters(&items, 20.0);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].member_ids(), vec!["b"]);
    }

    #[test]
    fn test_single_entry() {
        let clusters = ClusterEngine::compute_clusters(&[entry("solo", 8, 35.6762, 139.6503)], 1.0);

        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].id, "solo");
        assert_eq!(clusters[0].centroid, Coordinate::new(35.6762, 139.6503));
        assert!(!clusters[0].is_multiple());
    }

    #[test]
    fn test_members_sorted_most_recent_first() {
        let items = vec![
            entry("morning", 8, 48.8566, 2.3522),
            entry("evening", 20, 48.8570, 2.3530),
            entry("noon", 12, 48.8560, 2.3510),
        ];
        let clusters = ClusterEngine::compute_clusters(&items, 1.0);

        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].member_ids(), vec!["evening", "noon", "morning"]);
        assert_eq!(clusters[0].id, "evening-morning-noon");
        assert!(clusters[0].is_multiple());
    }

    #[test]
    fn test_distance_is_measured_from_seed() {
        // Along the equator: one degree of longitude is about 111.2 km.
        // a-b and b-c are each ~111 km apart, a-c ~222 km. At radius 200
        // the seed a picks up b but not c, even though c is near b.
        let items = vec![
            entry("a", 1, 0.0, 0.0),
            entry("b", 2, 0.0, 1.0),
            entry("c", 3, 0.0, 2.0),
        ];
        let clusters = ClusterEngine::compute_clusters(&items, 12.0);

        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].id, "a-b");
        assert_eq!(clusters[1].id, "c");
    }

    #[test]
    fn test_radius_is_exclusive() {
        // Same coordinates are distance 0, which is below even the smallest radius.
        let items = vec![entry("a", 1, 10.0, 10.0), entry("b", 2, 10.0, 10.0)];
        assert_eq!(ClusterEngine::compute_clusters(&items, 0.0).len(), 1);

        // ~1.11 km apart does not fit under the 1 km street-level radius.
        let items = vec![entry("a", 1, 0.0, 0.0), entry("b", 2, 0.0, 0.01)];
        assert_eq!(ClusterEngine::compute_clusters(&items, 0.0).len(), 2);
        assert_eq!(ClusterEngine::compute_clusters(&items, 0.3).len(), 1);
    }

    #[test]
    fn test_clusters_follow_seed_order() {
        let items = vec![
            entry("nyc", 1, 40.7128, -74.0060),
            entry("paris", 2, 48.8566, 2.3522),
            entry("brooklyn", 3, 40.6782, -73.9442),
        ];
        let clusters = ClusterEngine::compute_clusters(&items, 3.0);

        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].id, "brooklyn-nyc");
        assert_eq!(clusters[1].id, "paris");
    }
}
