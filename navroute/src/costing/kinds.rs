//! Enumerated costing parameters.

use serde::{Deserialize, Serialize};

/// Bicycle type, as understood by the `bicycle` costing model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BicycleType {
    #[default]
    Road,
    Hybrid,
    Cross,
    Mountain,
}

impl BicycleType {
    pub const ALL: [BicycleType; 4] = [
        BicycleType::Road,
        BicycleType::Hybrid,
        BicycleType::Cross,
        BicycleType::Mountain,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            BicycleType::Road => "road",
            BicycleType::Hybrid => "hybrid",
            BicycleType::Cross => "cross",
            BicycleType::Mountain => "mountain",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BicycleType::Road => "Road",
            BicycleType::Hybrid => "Hybrid",
            BicycleType::Cross => "Cross",
            BicycleType::Mountain => "Mountain",
        }
    }

    /// Look up by wire value, falling back to `Road`.
    pub fn from_value(value: Option<&str>) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| Some(t.value()) == value)
            .unwrap_or_default()
    }
}

/// Pedestrian type, as understood by the `pedestrian` costing model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PedestrianType {
    #[default]
    Foot,
    Wheelchair,
    Blind,
}

impl PedestrianType {
    pub const ALL: [PedestrianType; 3] = [
        PedestrianType::Foot,
        PedestrianType::Wheelchair,
        PedestrianType::Blind,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            PedestrianType::Foot => "foot",
            PedestrianType::Wheelchair => "wheelchair",
            PedestrianType::Blind => "blind",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PedestrianType::Foot => "Foot",
            PedestrianType::Wheelchair => "Wheelchair",
            PedestrianType::Blind => "Blind",
        }
    }

    /// Look up by wire value, falling back to `Foot`.
    pub fn from_value(value: Option<&str>) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| Some(t.value()) == value)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bicycle_from_value() {
        assert_eq!(BicycleType::from_value(Some("cross")), BicycleType::Cross);
        assert_eq!(BicycleType::from_value(Some("tandem")), BicycleType::Road);
        assert_eq!(BicycleType::from_value(None), BicycleType::Road);
    }

    #[test]
    fn pedestrian_from_value() {
        assert_eq!(
            PedestrianType::from_value(Some("wheelchair")),
            PedestrianType::Wheelchair
        );
        assert_eq!(PedestrianType::from_value(Some("")), PedestrianType::Foot);
    }

    #[test]
    fn serde_uses_wire_values() {
        for t in BicycleType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.value()));
        }
        for t in PedestrianType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.value()));
        }
    }
}
