//! Route to navigation-route adaptation.

use tracing::debug;

use crate::costing::CostingOptions;
use crate::domain::{RouteResult, RoutingMode};

use super::config::NavigationConfig;
use super::types::{BoundingBox, GeographicCoordinate, NavRoute, NavStep, Waypoint};

/// Adapts routes for one routing mode.
///
/// Holds the costing options the navigation engine uses when it has to
/// re-route mid-journey.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationAdapter {
    mode: RoutingMode,
    options: Option<CostingOptions>,
}

impl NavigationAdapter {
    pub fn new(mode: RoutingMode) -> Self {
        Self {
            mode,
            options: None,
        }
    }

    pub fn with_options(mut self, options: CostingOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn mode(&self) -> RoutingMode {
        self.mode
    }

    /// The configured options, if any were set.
    pub fn options(&self) -> Option<&CostingOptions> {
        self.options.as_ref()
    }

    /// Replace the options. `None` keeps the current ones.
    pub fn set_options(&mut self, options: Option<CostingOptions>) {
        if let Some(options) = options {
            self.options = Some(options);
        }
    }

    /// Drop the configured options in favour of the mode default.
    pub fn reset_options(&mut self) {
        self.options = None;
    }

    /// The options in effect: the configured ones, else the mode default.
    pub fn effective_options(&self) -> CostingOptions {
        self.options
            .clone()
            .unwrap_or_else(|| CostingOptions::default_for_mode(self.mode))
    }

    /// Costing document the navigation engine sends when re-routing.
    pub fn options_json(&self) -> Result<String, serde_json::Error> {
        self.effective_options().to_costing_json_string()
    }

    pub fn config(&self) -> NavigationConfig {
        NavigationConfig::DEFAULT
    }

    /// Convert a route into the navigation engine's route type.
    pub fn adapt(&self, route: &RouteResult) -> NavRoute {
        let geometry: Vec<GeographicCoordinate> = route
            .geometry
            .coordinates
            .iter()
            .copied()
            .map(GeographicCoordinate::from_lon_lat)
            .collect();

        let bbox = BoundingBox::from_coordinates(&geometry);

        let waypoints = match (geometry.first(), geometry.last()) {
            (Some(first), Some(last)) => vec![Waypoint::break_at(*first), Waypoint::break_at(*last)],
            _ => Vec::new(),
        };

        let steps: Vec<NavStep> = route
            .steps()
            .map(|step| NavStep {
                geometry: Vec::new(),
                distance: step.distance,
                duration: step.duration,
                road_name: Some(step.name.clone()).filter(|n| !n.is_empty()),
                instruction: step.instruction.clone(),
                visual_instructions: Vec::new(),
                spoken_instructions: Vec::new(),
            })
            .collect();

        debug!(
            mode = %self.mode,
            points = geometry.len(),
            steps = steps.len(),
            "adapted route for navigation"
        );

        NavRoute {
            geometry,
            bbox,
            distance: route.distance,
            duration: route.duration,
            waypoints,
            steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::costing::AutoOptions;
    use crate::domain::{DistanceUnits, Maneuver, RouteGeometry, RouteLeg, RouteStep};

    fn step(instruction: &str, name: &str) -> RouteStep {
        RouteStep {
            distance: 100.0,
            duration: 10.0,
            instruction: instruction.to_string(),
            name: name.to_string(),
            geometry: None,
            maneuver: Maneuver {
                location: [0.0, 0.0],
                bearing_before: 0.0,
                bearing_after: 0.0,
                maneuver_type: "1".to_string(),
                modifier: None,
                instruction: instruction.to_string(),
            },
        }
    }

    fn route() -> RouteResult {
        RouteResult {
            distance: 3.5,
            duration: 420.0,
            legs: vec![
                RouteLeg {
                    summary: String::new(),
                    distance: 1.0,
                    duration: 120.0,
                    steps: vec![step("Head north", "Main Street"), step("Turn left", "")],
                },
                RouteLeg {
                    summary: String::new(),
                    distance: 2.5,
                    duration: 300.0,
                    steps: vec![step("Arrive", "Oak Avenue")],
                },
            ],
            geometry: RouteGeometry::line_string(vec![
                [-75.0, 40.0],
                [-75.05, 40.05],
                [-75.1, 40.1],
            ]),
            units: DistanceUnits::Kilometers,
        }
    }

    #[test]
    fn adapt_swaps_coordinates() {
        let nav = NavigationAdapter::new(RoutingMode::Auto).adapt(&route());
        assert_eq!(nav.geometry[0], GeographicCoordinate::new(40.0, -75.0));
        assert_eq!(nav.geometry[2], GeographicCoordinate::new(40.1, -75.1));
    }

    #[test]
    fn adapt_computes_bbox() {
        let nav = NavigationAdapter::new(RoutingMode::Auto).adapt(&route());
        assert_eq!(nav.bbox.sw, GeographicCoordinate::new(40.0, -75.1));
        assert_eq!(nav.bbox.ne, GeographicCoordinate::new(40.1, -75.0));
    }

    #[test]
    fn adapt_flattens_steps_across_legs() {
        let nav = NavigationAdapter::new(RoutingMode::Auto).adapt(&route());
        let instructions: Vec<_> = nav.steps.iter().map(|s| s.instruction.as_str()).collect();
        assert_eq!(instructions, ["Head north", "Turn left", "Arrive"]);
        assert_eq!(nav.steps[0].road_name.as_deref(), Some("Main Street"));
        assert_eq!(nav.steps[1].road_name, None);
        assert!(nav.steps.iter().all(|s| s.geometry.is_empty()));
    }

    #[test]
    fn adapt_places_waypoints_at_ends() {
        let nav = NavigationAdapter::new(RoutingMode::Auto).adapt(&route());
        assert_eq!(nav.waypoints.len(), 2);
        assert_eq!(nav.waypoints[0].coordinate, nav.geometry[0]);
        assert_eq!(nav.waypoints[1].coordinate, nav.geometry[2]);
    }

    #[test]
    fn adapt_empty_route() {
        let nav = NavigationAdapter::new(RoutingMode::Pedestrian).adapt(&RouteResult::empty());
        assert!(nav.geometry.is_empty());
        assert!(nav.steps.is_empty());
        assert!(nav.waypoints.is_empty());
        assert_eq!(nav.bbox, BoundingBox::default());
        assert_eq!(nav.distance, 0.0);
    }

    #[test]
    fn config_is_fixed() {
        let auto = NavigationAdapter::new(RoutingMode::Auto);
        let walk = NavigationAdapter::new(RoutingMode::Pedestrian);
        assert_eq!(auto.config(), walk.config());
        assert_eq!(auto.config(), NavigationConfig::default());
    }

    #[test]
    fn options_json_falls_back_to_mode_default() {
        let adapter = NavigationAdapter::new(RoutingMode::Bicycle);
        assert_eq!(
            adapter.options_json().unwrap(),
            r#"{"costing_options":{"bicycle":{}}}"#
        );
    }

    #[test]
    fn set_options_none_keeps_previous() {
        let options = CostingOptions::Auto(AutoOptions {
            use_tolls: Some(0.0),
            ..Default::default()
        });
        let mut adapter = NavigationAdapter::new(RoutingMode::Auto).with_options(options.clone());

        adapter.set_options(None);
        assert_eq!(adapter.options(), Some(&options));
        assert_eq!(
            adapter.options_json().unwrap(),
            r#"{"costing_options":{"auto":{"use_tolls":0.0}}}"#
        );

        adapter.reset_options();
        assert_eq!(adapter.options(), None);
    }
}
