//! Zoom-to-radius policy
//!
//! Zoom levels follow the host map control: larger values are more zoomed
//! out. Breakpoints are exclusive lower bounds checked from the top; anything
//! at or below the last one falls back to [`MIN_RADIUS_KM`].

/// `(zoom lower bound, radius km)`, widest first
pub const RADIUS_BREAKPOINTS: [(f64, f64); 7] = [
    (15.0, 500.0),
    (10.0, 200.0),
    (5.0, 100.0),
    (2.0, 50.0),
    (1.0, 25.0),
    (0.5, 15.0),
    (0.2, 5.0),
];

/// Radius used at street-level zoom
pub const MIN_RADIUS_KM: f64 = 1.0;

/// Clustering radius lookup
pub struct ClusterRadius;

impl ClusterRadius {
    /// Radius in kilometers for a zoom level.
    ///
    /// NaN matches no breakpoint and gets the minimum radius.
    #[must_use]
    pub fn for_zoom(zoom_level: f64) -> f64 {
        RADIUS_BREAKPOINTS
            .iter()
            .find(|(lower_bound, _)| zoom_level > *lower_bound)
            .map_or(MIN_RADIUS_KM, |&(_, radius)| radius)
    }
}
