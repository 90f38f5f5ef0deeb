//! Routing backend wire DTOs.
//!
//! Request types serialize to the body posted to the backend. Response
//! types are deliberately loose: every field is optional, because the
//! parser has to degrade per element instead of rejecting a whole trip.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{DistanceUnits, LatLng, RoutingMode};
use crate::routing::RouteOptions;

/// Body of a route request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteRequest {
    pub locations: Vec<RequestLocation>,
    /// Costing profile name.
    pub costing: String,
    pub units: DistanceUnits,
    /// `{ "<costing type>": { ... } }`; left out when no options are set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub costing_options: Option<Value>,
}

impl RouteRequest {
    /// Build a two-point request.
    pub fn new(
        origin: LatLng,
        destination: LatLng,
        mode: RoutingMode,
        options: &RouteOptions,
    ) -> Result<Self, serde_json::Error> {
        // Options with every field unset are left out entirely.
        let mut costing_options = None;
        if let Some(costing) = &options.costing {
            if !is_empty_object(&costing.fields()?) {
                costing_options = Some(costing.keyed_fields()?);
            }
        }

        Ok(Self {
            locations: vec![
                RequestLocation::break_at(origin),
                RequestLocation::break_at(destination),
            ],
            costing: mode.as_str().to_string(),
            units: options.units(),
            costing_options,
        })
    }
}

fn is_empty_object(value: &Value) -> bool {
    value.as_object().is_some_and(|fields| fields.is_empty())
}

/// A waypoint in a request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestLocation {
    pub lon: f64,
    pub lat: f64,
    #[serde(rename = "type")]
    pub location_type: LocationType,
}

impl RequestLocation {
    /// A stopping waypoint at `point`.
    pub fn break_at(point: LatLng) -> Self {
        Self {
            lon: point.longitude,
            lat: point.latitude,
            location_type: LocationType::Break,
        }
    }
}

/// Waypoint type. Legs split at `break` locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    Break,
}

/// `summary` object of a trip or leg.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Summary {
    pub length: Option<f64>,
    pub time: Option<f64>,
}

/// A leg of a trip.
///
/// `maneuvers` stays untyped so that a malformed list only empties this
/// leg's steps.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LegDto {
    pub summary: Option<Summary>,
    pub maneuvers: Option<Value>,
    /// Encoded polyline, precision 6.
    pub shape: Option<String>,
}

/// A maneuver within a leg.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ManeuverDto {
    pub length: Option<f64>,
    pub time: Option<f64>,
    pub instruction: Option<String>,
    pub street_names: Option<Vec<String>>,
    /// `[longitude, latitude]`, when the backend provides one.
    pub location: Option<[f64; 2]>,
    pub begin_shape_index: Option<usize>,
    pub end_shape_index: Option<usize>,
    pub bearing_before: Option<f64>,
    pub bearing_after: Option<f64>,
    /// A type name or a numeric type code.
    #[serde(rename = "type")]
    pub maneuver_type: Option<Value>,
    pub modifier: Option<String>,
}
