//! `JournalMap` - Adaptive geographic clustering for a shared journal
//!
//! This library groups geotagged journal entries into map annotations that
//! re-cluster with the map's zoom level while keeping stable cluster ids,
//! and computes aggregate statistics over the located entries.

pub mod clustering;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod snapshot;

// Re-export core types for public API
pub use clustering::{ClusterEngine, ClusterRadius};
pub use config::JournalMapConfig;
pub use error::JournalMapError;
pub use models::{Cluster, Coordinate, LocatedItem, MapBounds, MapStatistics};
pub use snapshot::SnapshotLoader;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, JournalMapError>;
