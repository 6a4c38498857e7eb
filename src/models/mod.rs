//! Data models for journal entries and map annotations

pub mod cluster;
pub mod journal;
pub mod location;

pub use cluster::{Cluster, MapBounds, MapStatistics};
pub use journal::LocatedItem;
pub use location::Coordinate;
