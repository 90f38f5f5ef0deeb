//! Conversion from backend trip responses to the route model.
//!
//! Parsing degrades at two levels. A response without a `trip` object is
//! rejected outright, and the caller falls back to the all-zero result.
//! Below that, each leg and each maneuver is decoded on its own: one that
//! fails is dropped and its siblings still parse. Missing numbers become
//! `0.0` and missing strings become empty.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::domain::{DistanceUnits, Maneuver, RouteGeometry, RouteLeg, RouteResult, RouteStep};

use super::polyline::{self, SHAPE_PRECISION};
use super::types::{LegDto, ManeuverDto, Summary};

/// Error converting a whole response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Response has no `trip`
    #[error("response has no trip")]
    MissingTrip,

    /// `trip` is present but unusable
    #[error("invalid trip: {0}")]
    InvalidTrip(&'static str),
}

/// Convert a parsed trip response into a route.
pub fn convert_trip_response(response: &Value) -> Result<RouteResult, ConversionError> {
    let trip = match response.get("trip") {
        None | Some(Value::Null) => return Err(ConversionError::MissingTrip),
        Some(Value::Object(trip)) => trip,
        Some(_) => return Err(ConversionError::InvalidTrip("trip is not an object")),
    };

    let summary: Summary = trip
        .get("summary")
        .and_then(|s| decode_element(s, "trip summary"))
        .unwrap_or_default();

    let units = trip
        .get("units")
        .and_then(Value::as_str)
        .map(DistanceUnits::parse_or_default)
        .unwrap_or_default();

    let (legs, shapes): (Vec<RouteLeg>, Vec<Vec<[f64; 2]>>) = elements(trip.get("legs"), "legs")
        .iter()
        .filter_map(|leg| decode_element::<LegDto>(leg, "leg"))
        .map(|leg| convert_leg(&leg))
        .unzip();

    Ok(RouteResult {
        distance: summary.length.unwrap_or(0.0),
        duration: summary.time.unwrap_or(0.0),
        legs,
        geometry: RouteGeometry::line_string(join_shapes(shapes)),
        units,
    })
}

/// Convert one leg, returning it with its decoded shape.
fn convert_leg(leg: &LegDto) -> (RouteLeg, Vec<[f64; 2]>) {
    let shape = decode_shape(leg.shape.as_deref());
    let summary = leg.summary.clone().unwrap_or_default();

    let steps = elements(leg.maneuvers.as_ref(), "maneuvers")
        .iter()
        .filter_map(|m| decode_element::<ManeuverDto>(m, "maneuver"))
        .map(|m| convert_maneuver(&m, &shape))
        .collect();

    let leg = RouteLeg {
        summary: String::new(),
        distance: summary.length.unwrap_or(0.0),
        duration: summary.time.unwrap_or(0.0),
        steps,
    };

    (leg, shape)
}

/// Convert one maneuver into a step.
fn convert_maneuver(m: &ManeuverDto, shape: &[[f64; 2]]) -> RouteStep {
    let instruction = m.instruction.clone().unwrap_or_default();
    let name = m
        .street_names
        .as_ref()
        .and_then(|names| names.first().cloned())
        .unwrap_or_default();

    let location = m
        .location
        .or_else(|| m.begin_shape_index.and_then(|i| shape.get(i).copied()))
        .unwrap_or([0.0, 0.0]);

    // Bearings fall back to the shape indices when the backend omits them.
    let bearing_before = m
        .bearing_before
        .or(m.begin_shape_index.map(|i| i as f64))
        .unwrap_or(0.0);
    let bearing_after = m
        .bearing_after
        .or(m.end_shape_index.map(|i| i as f64))
        .unwrap_or(0.0);

    let maneuver_type = match &m.maneuver_type {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    };

    let geometry = match (m.begin_shape_index, m.end_shape_index) {
        (Some(begin), Some(end)) if begin <= end && end < shape.len() => {
            Some(RouteGeometry::line_string(shape[begin..=end].to_vec()))
        }
        _ => None,
    };

    RouteStep {
        distance: m.length.unwrap_or(0.0),
        duration: m.time.unwrap_or(0.0),
        instruction: instruction.clone(),
        name,
        geometry,
        maneuver: Maneuver {
            location,
            bearing_before,
            bearing_after,
            maneuver_type,
            modifier: m.modifier.clone(),
            instruction,
        },
    }
}

/// Decode a leg shape. A bad shape costs the leg its geometry, not the leg.
fn decode_shape(shape: Option<&str>) -> Vec<[f64; 2]> {
    let Some(shape) = shape else {
        return Vec::new();
    };
    polyline::decode(shape, SHAPE_PRECISION).unwrap_or_else(|e| {
        warn!(error = %e, "dropping malformed leg shape");
        Vec::new()
    })
}

/// Concatenate leg shapes, emitting the point shared by consecutive legs once.
fn join_shapes(shapes: Vec<Vec<[f64; 2]>>) -> Vec<[f64; 2]> {
    let mut joined: Vec<[f64; 2]> = Vec::new();
    for shape in shapes {
        let skip = match (joined.last(), shape.first()) {
            (Some(last), Some(first)) if last == first => 1,
            _ => 0,
        };
        joined.extend(shape.into_iter().skip(skip));
    }
    joined
}

/// The items of an array field, or nothing if absent or not an array.
fn elements<'a>(value: Option<&'a Value>, what: &'static str) -> &'a [Value] {
    match value {
        Some(Value::Array(items)) => items.as_slice(),
        None | Some(Value::Null) => &[],
        Some(_) => {
            warn!(field = what, "expected an array; treating as empty");
            &[]
        }
    }
}

/// Decode one element, logging and skipping it on failure.
fn decode_element<T: DeserializeOwned>(value: &Value, what: &'static str) -> Option<T> {
    match T::deserialize(value) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            warn!(element = what, error = %e, "skipping malformed element");
            None
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    proptest! {
        /// N legs with M_i maneuvers each parse to N legs with M_i steps.
        #[test]
        fn leg_and_step_counts_preserved(counts in proptest::collection::vec(0usize..6, 0..5)) {
            let legs: Vec<Value> = counts
                .iter()
                .map(|&n| {
                    let maneuvers: Vec<Value> = (0..n)
                        .map(|i| json!({"length": i as f64, "time": 1.0, "instruction": "Go"}))
                        .collect();
                    json!({"summary": {"length": 1.0, "time": 1.0}, "maneuvers": maneuvers})
                })
                .collect();
            let response = json!({"trip": {"summary": {"length": 1.0, "time": 1.0}, "legs": legs}});

            let route = convert_trip_response(&response).unwrap();
            prop_assert_eq!(route.legs.len(), counts.len());
            for (leg, &n) in route.legs.iter().zip(&counts) {
                prop_assert_eq!(leg.steps.len(), n);
            }
        }
    }
}
