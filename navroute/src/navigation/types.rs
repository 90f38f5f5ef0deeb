//! Route types consumed by the navigation engine.
//!
//! The navigation engine works in `(lat, lng)` coordinates. Route geometry
//! arrives as `[lon, lat]` pairs and is swapped exactly once, in
//! [`GeographicCoordinate::from_lon_lat`].

use serde::Serialize;

/// A point in navigation-engine order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct GeographicCoordinate {
    pub lat: f64,
    pub lng: f64,
}

impl GeographicCoordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Convert a `[longitude, latitude]` pair.
    pub fn from_lon_lat([lon, lat]: [f64; 2]) -> Self {
        Self { lat, lng: lon }
    }
}

/// Axis-aligned box around a route.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BoundingBox {
    /// Minimum latitude and minimum longitude.
    pub sw: GeographicCoordinate,
    /// Maximum latitude and maximum longitude.
    pub ne: GeographicCoordinate,
}

impl BoundingBox {
    /// The smallest box containing every coordinate.
    ///
    /// An empty slice gives a box with both corners at `(0.0, 0.0)`.
    pub fn from_coordinates(coordinates: &[GeographicCoordinate]) -> Self {
        let Some(first) = coordinates.first() else {
            return Self::default();
        };

        coordinates.iter().skip(1).fold(
            Self {
                sw: *first,
                ne: *first,
            },
            |bbox, c| Self {
                sw: GeographicCoordinate::new(bbox.sw.lat.min(c.lat), bbox.sw.lng.min(c.lng)),
                ne: GeographicCoordinate::new(bbox.ne.lat.max(c.lat), bbox.ne.lng.max(c.lng)),
            },
        )
    }
}

/// How the navigation engine treats a waypoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WaypointKind {
    /// A stop that splits the route into legs.
    Break,
}

/// A waypoint on a navigation route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Waypoint {
    pub coordinate: GeographicCoordinate,
    pub kind: WaypointKind,
}

impl Waypoint {
    pub fn break_at(coordinate: GeographicCoordinate) -> Self {
        Self {
            coordinate,
            kind: WaypointKind::Break,
        }
    }
}

/// A navigation step.
///
/// `geometry`, `visual_instructions` and `spoken_instructions` are emitted
/// empty; instruction enrichment is not implemented.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavStep {
    pub geometry: Vec<GeographicCoordinate>,
    pub distance: f64,
    pub duration: f64,
    pub road_name: Option<String>,
    pub instruction: String,
    pub visual_instructions: Vec<String>,
    pub spoken_instructions: Vec<String>,
}

/// A route ready for the navigation engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavRoute {
    pub geometry: Vec<GeographicCoordinate>,
    pub bbox: BoundingBox,
    pub distance: f64,
    pub duration: f64,
    pub waypoints: Vec<Waypoint>,
    pub steps: Vec<NavStep>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_happens_once() {
        let c = GeographicCoordinate::from_lon_lat([-75.0, 40.0]);
        assert_eq!(c.lat, 40.0);
        assert_eq!(c.lng, -75.0);
    }

    #[test]
    fn empty_bbox_is_zero() {
        let bbox = BoundingBox::from_coordinates(&[]);
        assert_eq!(bbox.sw, GeographicCoordinate::new(0.0, 0.0));
        assert_eq!(bbox.ne, GeographicCoordinate::new(0.0, 0.0));
    }

    #[test]
    fn bbox_spans_coordinates() {
        let coords = [
            GeographicCoordinate::new(40.0, -75.0),
            GeographicCoordinate::new(40.2, -75.3),
            GeographicCoordinate::new(39.9, -74.8),
        ];
        let bbox = BoundingBox::from_coordinates(&coords);
        assert_eq!(bbox.sw, GeographicCoordinate::new(39.9, -75.3));
        assert_eq!(bbox.ne, GeographicCoordinate::new(40.2, -74.8));
    }

    #[test]
    fn single_point_bbox_is_degenerate() {
        let p = GeographicCoordinate::new(51.5, -0.1);
        let bbox = BoundingBox::from_coordinates(&[p]);
        assert_eq!(bbox.sw, p);
        assert_eq!(bbox.ne, p);
    }

    #[test]
    fn waypoint_serializes_kind() {
        let w = Waypoint::break_at(GeographicCoordinate::new(1.0, 2.0));
        let json = serde_json::to_value(w).unwrap();
        assert_eq!(json["kind"], "break");
        assert_eq!(json["coordinate"]["lat"], 1.0);
        assert_eq!(json["coordinate"]["lng"], 2.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn coordinate() -> impl Strategy<Value = GeographicCoordinate> {
        (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lng)| GeographicCoordinate::new(lat, lng))
    }

    proptest! {
        #[test]
        fn bbox_corners_are_extremes(coords in prop::collection::vec(coordinate(), 1..50)) {
            let bbox = BoundingBox::from_coordinates(&coords);

            let min_lat = coords.iter().map(|c| c.lat).fold(f64::INFINITY, f64::min);
            let min_lng = coords.iter().map(|c| c.lng).fold(f64::INFINITY, f64::min);
            let max_lat = coords.iter().map(|c| c.lat).fold(f64::NEG_INFINITY, f64::max);
            let max_lng = coords.iter().map(|c| c.lng).fold(f64::NEG_INFINITY, f64::max);

            prop_assert_eq!(bbox.sw, GeographicCoordinate::new(min_lat, min_lng));
            prop_assert_eq!(bbox.ne, GeographicCoordinate::new(max_lat, max_lng));
        }

        #[test]
        fn every_coordinate_is_inside_bbox(coords in prop::collection::vec(coordinate(), 1..50)) {
            let bbox = BoundingBox::from_coordinates(&coords);
            for c in &coords {
                prop_assert!(bbox.sw.lat <= c.lat && c.lat <= bbox.ne.lat);
                prop_assert!(bbox.sw.lng <= c.lng && c.lng <= bbox.ne.lng);
            }
        }

        #[test]
        fn lon_lat_swap_round_trips(lon in -180.0f64..=180.0, lat in -90.0f64..=90.0) {
            let c = GeographicCoordinate::from_lon_lat([lon, lat]);
            prop_assert_eq!([c.lng, c.lat], [lon, lat]);
        }
    }
}
