//! Routing modes and distance units.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Travel mode for a route request.
///
/// The mode picks the costing profile sent to the routing backend and the
/// navigation adapter a caller uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingMode {
    Auto,
    Truck,
    MotorScooter,
    Motorcycle,
    Bicycle,
    Pedestrian,
}

impl RoutingMode {
    /// All modes, in display order.
    pub const ALL: [RoutingMode; 6] = [
        RoutingMode::Auto,
        RoutingMode::Truck,
        RoutingMode::MotorScooter,
        RoutingMode::Motorcycle,
        RoutingMode::Bicycle,
        RoutingMode::Pedestrian,
    ];

    /// The costing profile name understood by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoutingMode::Auto => "auto",
            RoutingMode::Truck => "truck",
            RoutingMode::MotorScooter => "motor_scooter",
            RoutingMode::Motorcycle => "motorcycle",
            RoutingMode::Bicycle => "bicycle",
            RoutingMode::Pedestrian => "pedestrian",
        }
    }

    /// Parse a costing profile name.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == s)
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            RoutingMode::Auto => "Driving",
            RoutingMode::Truck => "Truck",
            RoutingMode::MotorScooter => "Motor Scooter",
            RoutingMode::Motorcycle => "Motorcycle",
            RoutingMode::Bicycle => "Cycling",
            RoutingMode::Pedestrian => "Walking",
        }
    }
}

impl fmt::Display for RoutingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Distance units used by the backend for lengths in a trip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnits {
    #[default]
    Kilometers,
    Miles,
}

impl DistanceUnits {
    /// Wire name of the unit.
    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceUnits::Kilometers => "kilometers",
            DistanceUnits::Miles => "miles",
        }
    }

    /// Parse a wire name. Unknown names fall back to kilometers.
    pub fn parse_or_default(s: &str) -> Self {
        match s {
            "miles" => DistanceUnits::Miles,
            _ => DistanceUnits::Kilometers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_names_round_trip() {
        for mode in RoutingMode::ALL {
            assert_eq!(RoutingMode::parse(mode.as_str()), Some(mode));
        }
        assert_eq!(RoutingMode::parse("transit"), None);
    }

    #[test]
    fn mode_serde_matches_profile_name() {
        let json = serde_json::to_string(&RoutingMode::MotorScooter).unwrap();
        assert_eq!(json, "\"motor_scooter\"");
    }

    #[test]
    fn units_fallback() {
        assert_eq!(DistanceUnits::parse_or_default("miles"), DistanceUnits::Miles);
        assert_eq!(
            DistanceUnits::parse_or_default("furlongs"),
            DistanceUnits::Kilometers
        );
        assert_eq!(DistanceUnits::default().as_str(), "kilometers");
    }
}
