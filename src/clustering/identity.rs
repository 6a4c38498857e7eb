//! Stable cluster identity, centroid and member ordering

use crate::models::{Coordinate, LocatedItem};
use std::cmp::Ordering;

/// Separator between sorted member ids in a cluster id
pub const CLUSTER_ID_SEPARATOR: &str = "-";

/// Cluster id from member ids. Ids are sorted first, so the result depends
/// only on the multiset of ids and never on the order they were grouped in.
#[must_use]
pub fn stable_cluster_id<'a, I>(member_ids: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut ids: Vec<&str> = member_ids.into_iter().collect();
    ids.sort_unstable();
    ids.join(CLUSTER_ID_SEPARATOR)
}

/// Arithmetic mean of latitudes and longitudes, `None` for no coordinates.
///
/// Plain mean, not a geodesic midpoint.
#[must_use]
pub fn centroid<'a, I>(coordinates: I) -> Option<Coordinate>
where
    I: IntoIterator<Item = &'a Coordinate>,
{
    let (count, lat_sum, lon_sum) = coordinates
        .into_iter()
        .fold((0_usize, 0.0, 0.0), |(n, lat, lon), c| {
            (n + 1, lat + c.latitude, lon + c.longitude)
        });

    if count == 0 {
        return None;
    }

    #[allow(clippy::cast_precision_loss)]
    let n = count as f64;
    Some(Coordinate::new(lat_sum / n, lon_sum / n))
}

/// Most recent event first, ties broken by id
pub fn by_recency(a: &LocatedItem, b: &LocatedItem) -> Ordering {
    b.event_timestamp
        .cmp(&a.event_timestamp)
        .then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_stable_id_ignores_order() {
        let forward = stable_cluster_id(["c", "a", "b"]);
        let backward = stable_cluster_id(["b", "a", "c"]);
        assert_eq!(forward, "a-b-c");
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_stable_id_single_member() {
        assert_eq!(stable_cluster_id(["entry-42"]), "entry-42");
    }

    #[test]
    fn test_centroid_is_plain_mean() {
        let coordinates = [
            Coordinate::new(48.8566, 2.3522),
            Coordinate::new(48.8606, 2.3376),
        ];
        let center = centroid(&coordinates).unwrap();
        assert!((center.latitude - 48.8586).abs() < 1e-9);
        assert!((center.longitude - 2.3449).abs() < 1e-9);
    }

    #[test]
    fn test_centroid_of_nothing() {
        assert!(centroid(std::iter::empty()).is_none());
    }

    #[test]
    fn test_recency_order() {
        let older = LocatedItem::new("z", Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap());
        let newer = LocatedItem::new("y", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let newer_tie = LocatedItem::new("x", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());

        let mut items = vec![older, newer, newer_tie];
        items.sort_by(by_recency);
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["x", "y", "z"]);
    }
}
