//! Navigation adaptation.
//!
//! Turns a [`RouteResult`](crate::domain::RouteResult) into the route and
//! configuration a turn-by-turn navigation engine consumes.

mod adapter;
mod adapters;
mod config;
mod types;

pub use adapter::NavigationAdapter;
pub use adapters::NavigationAdapters;
pub use config::{
    ARRIVAL_STEP_ADVANCE_DISTANCE_METERS, CourseFiltering, DEVIATION_MAX_ACCEPTABLE_METERS,
    DEVIATION_MIN_HORIZONTAL_ACCURACY_METERS, NavigationConfig, RouteDeviationTracking,
    STEP_ADVANCE_DISTANCE_AFTER_END_METERS, STEP_ADVANCE_DISTANCE_TO_END_METERS,
    STEP_ADVANCE_MIN_HORIZONTAL_ACCURACY_METERS, StepAdvanceCondition,
    WAYPOINT_ARRIVAL_RADIUS_METERS, WaypointAdvanceMode,
};
pub use types::{BoundingBox, GeographicCoordinate, NavRoute, NavStep, Waypoint, WaypointKind};
