//! Backend-agnostic route model.
//!
//! A `RouteResult` is built fresh for every routing call and never mutated
//! afterwards. All numeric fields are always populated: data the backend
//! left out becomes `0.0`, never a missing value.

use serde::Serialize;

use super::DistanceUnits;

/// GeoJSON geometry type of every route geometry.
pub const LINE_STRING: &str = "LineString";

/// A computed route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    /// Total length, in `units`.
    pub distance: f64,
    /// Total time in seconds.
    pub duration: f64,
    pub legs: Vec<RouteLeg>,
    pub geometry: RouteGeometry,
    pub units: DistanceUnits,
}

impl RouteResult {
    /// The all-zero result every failed routing call degrades to.
    pub fn empty() -> Self {
        Self {
            distance: 0.0,
            duration: 0.0,
            legs: Vec::new(),
            geometry: RouteGeometry::default(),
            units: DistanceUnits::default(),
        }
    }

    /// True for the degenerate all-zero result.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty() && self.distance == 0.0 && self.duration == 0.0
    }

    /// Iterate over every step of every leg, in order.
    pub fn steps(&self) -> impl Iterator<Item = &RouteStep> {
        self.legs.iter().flat_map(|leg| leg.steps.iter())
    }
}

/// The part of a route between two consecutive waypoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteLeg {
    /// Free-text summary; may be empty.
    pub summary: String,
    pub distance: f64,
    pub duration: f64,
    pub steps: Vec<RouteStep>,
}

/// A single instruction unit within a leg.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteStep {
    pub distance: f64,
    pub duration: f64,
    pub instruction: String,
    /// Road or way name; may be empty.
    pub name: String,
    pub geometry: Option<RouteGeometry>,
    pub maneuver: Maneuver,
}

/// A line geometry as `[longitude, latitude]` pairs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteGeometry {
    #[serde(rename = "type")]
    pub geometry_type: String,
    pub coordinates: Vec<[f64; 2]>,
}

impl RouteGeometry {
    /// A line string over the given `[lon, lat]` pairs.
    pub fn line_string(coordinates: Vec<[f64; 2]>) -> Self {
        Self {
            geometry_type: LINE_STRING.to_string(),
            coordinates,
        }
    }
}

impl Default for RouteGeometry {
    fn default() -> Self {
        Self::line_string(Vec::new())
    }
}

/// The maneuver that starts a step.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Maneuver {
    /// `[longitude, latitude]`.
    pub location: [f64; 2],
    pub bearing_before: f64,
    pub bearing_after: f64,
    #[serde(rename = "type")]
    pub maneuver_type: String,
    pub modifier: Option<String>,
    pub instruction: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_is_fully_populated() {
        let r = RouteResult::empty();
        assert_eq!(r.distance, 0.0);
        assert_eq!(r.duration, 0.0);
        assert!(r.legs.is_empty());
        assert_eq!(r.geometry.geometry_type, LINE_STRING);
        assert!(r.geometry.coordinates.is_empty());
        assert_eq!(r.units, DistanceUnits::Kilometers);
        assert!(r.is_empty());
    }

    #[test]
    fn geometry_serializes_as_geojson() {
        let g = RouteGeometry::line_string(vec![[-75.0, 40.0]]);
        let json = serde_json::to_value(&g).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "LineString", "coordinates": [[-75.0, 40.0]]})
        );
    }
}
