//! Data transfer objects for the HTTP API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{DistanceUnits, LatLng, RoutingMode};
use crate::navigation::{NavRoute, NavigationConfig};

/// Request to compute and store a route.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRouteRequest {
    pub origin: LatLng,
    pub destination: LatLng,
    pub mode: RoutingMode,

    /// Defaults to kilometers
    #[serde(default)]
    pub units: Option<DistanceUnits>,

    /// Costing fields for `mode`; overrides the mode's stored profile
    #[serde(default)]
    pub options: Option<Value>,
}

/// Summary of a stored route.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRouteResponse {
    /// Identifier to fetch the full route with
    pub route_id: String,
    pub distance: f64,
    pub duration: f64,
    pub units: DistanceUnits,

    /// Number of legs
    pub legs: usize,

    /// Number of steps across all legs
    pub steps: usize,
}

/// A stored route with the configuration to navigate it.
#[derive(Debug, Clone, Serialize)]
pub struct RouteResponse {
    pub route_id: String,
    pub route: NavRoute,
    pub config: NavigationConfig,
}

/// Request to toggle offline routing.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OfflineModeRequest {
    pub offline: bool,
}

/// A mode's costing profile.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub mode: RoutingMode,

    /// Whether the profile was set explicitly rather than defaulted
    pub customized: bool,

    /// The `{"costing_options": {...}}` document the profile produces
    pub costing: Value,
}

/// Error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
