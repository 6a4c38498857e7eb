//! Journal entry as seen by the map

use super::Coordinate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One journal entry eligible for placement on the map.
///
/// Entries are owned by the journal repository; the map only borrows them.
/// `city` and `country` come from reverse geocoding done upstream.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocatedItem {
    /// Opaque identifier, stable for the entry's lifetime
    pub id: String,
    /// Where the entry was made, if known
    #[serde(default)]
    pub coordinate: Option<Coordinate>,
    /// City name from reverse geocoding
    #[serde(default)]
    pub city: Option<String>,
    /// Country name from reverse geocoding
    #[serde(default)]
    pub country: Option<String>,
    /// When the journaled event happened
    pub event_timestamp: DateTime<Utc>,
}

impl LocatedItem {
    /// Create an entry without location or place names
    #[must_use]
    pub fn new<S: Into<String>>(id: S, event_timestamp: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            coordinate: None,
            city: None,
            country: None,
            event_timestamp,
        }
    }

    /// Attach a coordinate
    #[must_use]
    pub fn with_coordinate(mut self, latitude: f64, longitude: f64) -> Self {
        self.coordinate = Some(Coordinate::new(latitude, longitude));
        self
    }

    /// Attach reverse-geocoded place names
    #[must_use]
    pub fn with_place<C: Into<String>, K: Into<String>>(mut self, city: C, country: K) -> Self {
        self.city = Some(city.into());
        self.country = Some(country.into());
        self
    }

    /// Whether the entry can be placed on the map
    #[must_use]
    pub fn is_located(&self) -> bool {
        self.coordinate.is_some()
    }
}
