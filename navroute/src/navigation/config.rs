//! Fixed navigation configuration.
//!
//! These thresholds are process-wide constants handed to the navigation
//! engine with every route. They are not derived from the route.

use serde::Serialize;

/// Radius in meters within which a waypoint counts as reached.
pub const WAYPOINT_ARRIVAL_RADIUS_METERS: f64 = 100.0;

/// Distance to the end of an ordinary step at which it may advance.
pub const STEP_ADVANCE_DISTANCE_TO_END_METERS: u16 = 30;

/// Distance past the end of an ordinary step that forces an advance.
pub const STEP_ADVANCE_DISTANCE_AFTER_END_METERS: u16 = 5;

/// Distance to the end of the final step at which arrival is signalled.
pub const ARRIVAL_STEP_ADVANCE_DISTANCE_METERS: u16 = 30;

/// Location fixes less accurate than this never advance a step.
pub const STEP_ADVANCE_MIN_HORIZONTAL_ACCURACY_METERS: u16 = 32;

/// Location fixes less accurate than this never trigger a deviation.
pub const DEVIATION_MIN_HORIZONTAL_ACCURACY_METERS: u16 = 15;

/// Distance from the route at which the traveller counts as off-route.
pub const DEVIATION_MAX_ACCEPTABLE_METERS: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WaypointAdvanceMode {
    WaypointWithinRange { range_meters: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepAdvanceCondition {
    /// Advance once the user has come within `distance_to_end` of the end
    /// of the step and then moved `distance_after_end` past it.
    DistanceEntryAndExit {
        distance_to_end: u16,
        distance_after_end: u16,
        minimum_horizontal_accuracy: u16,
    },
    /// Advance once the user is within `distance` of the end of the step.
    DistanceToEndOfStep {
        distance: u16,
        minimum_horizontal_accuracy: u16,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RouteDeviationTracking {
    StaticThreshold {
        minimum_horizontal_accuracy: u16,
        max_acceptable_deviation: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseFiltering {
    SnapToRoute,
    Raw,
}

/// Configuration for the navigation engine's controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NavigationConfig {
    pub waypoint_advance: WaypointAdvanceMode,
    pub step_advance_condition: StepAdvanceCondition,
    /// Condition for the last step of the route.
    pub arrival_step_advance_condition: StepAdvanceCondition,
    pub route_deviation_tracking: RouteDeviationTracking,
    pub snapped_location_course_filtering: CourseFiltering,
}

impl NavigationConfig {
    /// The configuration every route is navigated with.
    pub const DEFAULT: Self = Self {
        waypoint_advance: WaypointAdvanceMode::WaypointWithinRange {
            range_meters: WAYPOINT_ARRIVAL_RADIUS_METERS,
        },
        step_advance_condition: StepAdvanceCondition::DistanceEntryAndExit {
            distance_to_end: STEP_ADVANCE_DISTANCE_TO_END_METERS,
            distance_after_end: STEP_ADVANCE_DISTANCE_AFTER_END_METERS,
            minimum_horizontal_accuracy: STEP_ADVANCE_MIN_HORIZONTAL_ACCURACY_METERS,
        },
        arrival_step_advance_condition: StepAdvanceCondition::DistanceToEndOfStep {
            distance: ARRIVAL_STEP_ADVANCE_DISTANCE_METERS,
            minimum_horizontal_accuracy: STEP_ADVANCE_MIN_HORIZONTAL_ACCURACY_METERS,
        },
        route_deviation_tracking: RouteDeviationTracking::StaticThreshold {
            minimum_horizontal_accuracy: DEVIATION_MIN_HORIZONTAL_ACCURACY_METERS,
            max_acceptable_deviation: DEVIATION_MAX_ACCEPTABLE_METERS,
        },
        snapped_location_course_filtering: CourseFiltering::SnapToRoute,
    };
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
