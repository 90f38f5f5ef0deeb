//! Geographic points used as routing endpoints.

use serde::{Deserialize, Serialize};

/// A geographic point in WGS84 degrees.
///
/// Callers hand these in as origin and destination. Note the field order:
/// wire formats in this crate use `[longitude, latitude]` pairs, so use
/// [`LatLng::to_lon_lat`] rather than building arrays by hand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLng {
    /// Create a new point.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns the point as a `[longitude, latitude]` pair.
    pub fn to_lon_lat(self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}
