//! Clustering module
//!
//! This module groups geotagged journal entries into map annotations:
//! - Zoom-dependent clustering radius policy
//! - Greedy seed-based grouping with haversine distances
//! - Order-independent cluster identity and centroids
//! - Aggregate statistics over located entries

pub mod engine;
pub mod identity;
pub mod radius;
pub mod statistics;

pub use engine::ClusterEngine;
pub use identity::{CLUSTER_ID_SEPARATOR, centroid, stable_cluster_id};
pub use radius::{ClusterRadius, MIN_RADIUS_KM, RADIUS_BREAKPOINTS};
