//! Map annotation output: clusters, bounds and statistics

use super::{Coordinate, LocatedItem};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A group of one or more journal entries rendered as a single map annotation
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    /// Identifier derived from the set of member ids, independent of order
    pub id: String,
    /// Arithmetic mean of member coordinates
    pub centroid: Coordinate,
    /// Members, most recent event first
    pub members: Vec<LocatedItem>,
    /// More than one member (grouped pin rather than a single pin)
    pub is_multiple: bool,
}

impl Cluster {
    /// Number of entries in the cluster
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[must_use]
    pub fn is_multiple(&self) -> bool {
        self.is_multiple
    }

    /// Most recent entry, used as the annotation's cover
    #[must_use]
    pub fn latest(&self) -> Option<&LocatedItem> {
        self.members.first()
    }

    /// Member ids in member order
    #[must_use]
    pub fn member_ids(&self) -> Vec<&str> {
        self.members.iter().map(|m| m.id.as_str()).collect()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.members.iter().any(|m| m.id == id)
    }

    /// Oldest and newest event timestamps among the members
    #[must_use]
    pub fn date_span(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let newest = self.members.first()?.event_timestamp;
        let oldest = self.members.last()?.event_timestamp;
        Some((oldest, newest))
    }

    /// Box covering every member coordinate, for zooming into a tapped cluster
    #[must_use]
    pub fn bounds(&self) -> Option<MapBounds> {
        MapBounds::covering(self.members.iter().filter_map(|m| m.coordinate))
    }
}

/// A geographic bounding box in WGS84 coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapBounds {
    /// Western longitude boundary.
    pub west: f64,
    /// Southern latitude boundary.
    pub south: f64,
    /// Eastern longitude boundary.
    pub east: f64,
    /// Northern latitude boundary.
    pub north: f64,
}

impl MapBounds {
    /// Smallest box containing all coordinates, `None` when there are none.
    ///
    /// Does not wrap across the antimeridian.
    #[must_use]
    pub fn covering<I: IntoIterator<Item = Coordinate>>(coordinates: I) -> Option<Self> {
        let mut iter = coordinates.into_iter();
        let first = iter.next()?;
        let start = Self {
            west: first.longitude,
            south: first.latitude,
            east: first.longitude,
            north: first.latitude,
        };

        Some(iter.fold(start, |b, c| Self {
            west: b.west.min(c.longitude),
            south: b.south.min(c.latitude),
            east: b.east.max(c.longitude),
            north: b.north.max(c.latitude),
        }))
    }

    #[must_use]
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        (self.south..=self.north).contains(&coordinate.latitude)
            && (self.west..=self.east).contains(&coordinate.longitude)
    }

    #[must_use]
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }
}

/// Aggregate counts over the located journal entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapStatistics {
    /// Entries with a coordinate
    pub total_located: usize,
    /// Distinct city names among located entries
    pub unique_cities: usize,
    /// Distinct country names among located entries
    pub unique_countries: usize,
}
