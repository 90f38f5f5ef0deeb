//! Mode-specific costing options.
//!
//! Each variant serializes to the document the backend expects under
//! `costing_options`:
//!
//! ```text
//! { "costing_options": { "<costing type>": { "<field>": <value>, ... } } }
//! ```
//!
//! Unset fields are omitted entirely. The backend treats an explicit `null`
//! differently from an absent key, so no field here ever serializes as null.
//! Values are not range-checked locally; the backend validates them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::RoutingMode;

use super::error::CostingError;
use super::kinds::{BicycleType, PedestrianType};

/// Options shared by the automobile family (auto, truck, motorcycle,
/// motor scooter).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoOptions {
    // Maneuver and access penalties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maneuver_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gate_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gate_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_access_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_only_penalty: Option<f64>,

    // Tolls and ferries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toll_booth_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toll_booth_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ferry_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_ferry: Option<f64>,

    // Road type preferences, 0..=1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_highways: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_tolls: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_living_streets: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_tracks: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_factor: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_crossing_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_crossing_penalty: Option<f64>,

    // Algorithm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortest: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_hierarchy_pruning: Option<bool>,

    // Speed, km/h
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_speed: Option<f64>,

    // Restrictions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_closures: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closure_factor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_restrictions: Option<bool>,
    /// The backend spells this `ignore_oneways`, not `ignore_one_ways`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_oneways: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_non_vehicular_restrictions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_construction: Option<bool>,

    // Vehicle dimensions, metres
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_unpaved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_cash_only_tolls: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_hov2: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_hov3: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_hot: Option<bool>,
}

/// Truck options: the auto set plus vehicle-specific limits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TruckOptions {
    #[serde(flatten)]
    pub auto: AutoOptions,

    /// Metres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    /// Metric tons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Metric tons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axle_load: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axle_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hazmat: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hgv_no_access_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_class_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_truck_route: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotorScooterOptions {
    #[serde(flatten)]
    pub auto: AutoOptions,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_primary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_hills: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotorcycleOptions {
    #[serde(flatten)]
    pub auto: AutoOptions,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_trails: Option<f64>,
}

/// Cycling options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BicycleOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bicycle_type: Option<BicycleType>,
    /// km/h.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycling_speed: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_roads: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_hills: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_ferry: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_living_streets: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid_bad_surfaces: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maneuver_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gate_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gate_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_only_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_crossing_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_crossing_penalty: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortest: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_hierarchy_pruning: Option<bool>,
}

/// Walking options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PedestrianOptions {
    /// km/h.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub walking_speed: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub walkway_factor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidewalk_factor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alley_factor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driveway_factor: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevator_penalty: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_ferry: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_living_streets: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_tracks: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_hills: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_lit: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_factor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_only_penalty: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_hiking_difficulty: Option<u32>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub pedestrian_type: Option<PedestrianType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transit_start_end_max_distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transit_transfer_max_distance: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortest: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode_factor: Option<f64>,
}

/// Costing options for one routing request.
///
/// A closed set of variants, one per costing type. The automobile family
/// shares [`AutoOptions`], reachable through [`CostingOptions::auto`].
#[derive(Debug, Clone, PartialEq)]
pub enum CostingOptions {
    Auto(AutoOptions),
    Truck(TruckOptions),
    Motorcycle(MotorcycleOptions),
    MotorScooter(MotorScooterOptions),
    Bicycle(BicycleOptions),
    Pedestrian(PedestrianOptions),
}

impl CostingOptions {
    /// Options with every field unset for the given mode.
    pub fn default_for_mode(mode: RoutingMode) -> Self {
        match mode {
            RoutingMode::Auto => CostingOptions::Auto(AutoOptions::default()),
            RoutingMode::Truck => CostingOptions::Truck(TruckOptions::default()),
            RoutingMode::MotorScooter => {
                CostingOptions::MotorScooter(MotorScooterOptions::default())
            }
            RoutingMode::Motorcycle => CostingOptions::Motorcycle(MotorcycleOptions::default()),
            RoutingMode::Bicycle => CostingOptions::Bicycle(BicycleOptions::default()),
            RoutingMode::Pedestrian => CostingOptions::Pedestrian(PedestrianOptions::default()),
        }
    }

    /// Parse a stored field object (the innermost `{...}`) for a mode.
    pub fn from_stored_json(mode: &str, json: &str) -> Result<Self, CostingError> {
        let mode = RoutingMode::parse(mode).ok_or_else(|| CostingError::UnknownMode(mode.into()))?;
        let options = match mode {
            RoutingMode::Auto => CostingOptions::Auto(serde_json::from_str(json)?),
            RoutingMode::Truck => CostingOptions::Truck(serde_json::from_str(json)?),
            RoutingMode::MotorScooter => CostingOptions::MotorScooter(serde_json::from_str(json)?),
            RoutingMode::Motorcycle => CostingOptions::Motorcycle(serde_json::from_str(json)?),
            RoutingMode::Bicycle => CostingOptions::Bicycle(serde_json::from_str(json)?),
            RoutingMode::Pedestrian => CostingOptions::Pedestrian(serde_json::from_str(json)?),
        };
        Ok(options)
    }

    /// The costing type this variant is keyed under.
    pub fn costing_type(&self) -> RoutingMode {
        match self {
            CostingOptions::Auto(_) => RoutingMode::Auto,
            CostingOptions::Truck(_) => RoutingMode::Truck,
            CostingOptions::Motorcycle(_) => RoutingMode::Motorcycle,
            CostingOptions::MotorScooter(_) => RoutingMode::MotorScooter,
            CostingOptions::Bicycle(_) => RoutingMode::Bicycle,
            CostingOptions::Pedestrian(_) => RoutingMode::Pedestrian,
        }
    }

    /// Shared automobile options, for the variants that have them.
    pub fn auto(&self) -> Option<&AutoOptions> {
        match self {
            CostingOptions::Auto(o) => Some(o),
            CostingOptions::Truck(o) => Some(&o.auto),
            CostingOptions::Motorcycle(o) => Some(&o.auto),
            CostingOptions::MotorScooter(o) => Some(&o.auto),
            CostingOptions::Bicycle(_) | CostingOptions::Pedestrian(_) => None,
        }
    }

    /// Mutable access to the shared automobile options.
    pub fn auto_mut(&mut self) -> Option<&mut AutoOptions> {
        match self {
            CostingOptions::Auto(o) => Some(o),
            CostingOptions::Truck(o) => Some(&mut o.auto),
            CostingOptions::Motorcycle(o) => Some(&mut o.auto),
            CostingOptions::MotorScooter(o) => Some(&mut o.auto),
            CostingOptions::Bicycle(_) | CostingOptions::Pedestrian(_) => None,
        }
    }

    /// The variant's populated fields as a JSON object.
    pub fn fields(&self) -> Result<Value, serde_json::Error> {
        match self {
            CostingOptions::Auto(o) => serde_json::to_value(o),
            CostingOptions::Truck(o) => serde_json::to_value(o),
            CostingOptions::Motorcycle(o) => serde_json::to_value(o),
            CostingOptions::MotorScooter(o) => serde_json::to_value(o),
            CostingOptions::Bicycle(o) => serde_json::to_value(o),
            CostingOptions::Pedestrian(o) => serde_json::to_value(o),
        }
    }

    /// `{ "<costing type>": { ...fields } }`, the value of a request's
    /// `costing_options` key.
    pub fn keyed_fields(&self) -> Result<Value, serde_json::Error> {
        let mut keyed = Map::new();
        keyed.insert(self.costing_type().as_str().to_string(), self.fields()?);
        Ok(Value::Object(keyed))
    }

    /// The full `{ "costing_options": { ... } }` document.
    pub fn to_costing_json(&self) -> Result<Value, serde_json::Error> {
        let mut doc = Map::new();
        doc.insert("costing_options".to_string(), self.keyed_fields()?);
        Ok(Value::Object(doc))
    }

    /// [`CostingOptions::to_costing_json`] rendered as a string.
    pub fn to_costing_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.to_costing_json()?)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn opt_f64() -> impl Strategy<Value = Option<f64>> {
        proptest::option::of(0.0f64..1000.0)
    }

    fn opt_bool() -> impl Strategy<Value = Option<bool>> {
        proptest::option::of(any::<bool>())
    }

    fn contains_null(value: &Value) -> bool {
        match value {
            Value::Null => true,
            Value::Array(items) => items.iter().any(contains_null),
            Value::Object(map) => map.values().any(contains_null),
            _ => false,
        }
    }

    proptest! {
        /// Only populated fields appear, and never as null.
        #[test]
        fn auto_emits_exactly_populated_fields(
            use_highways in opt_f64(),
            use_tolls in opt_f64(),
            maneuver_penalty in opt_f64(),
            top_speed in opt_f64(),
            shortest in opt_bool(),
            ignore_closures in opt_bool(),
            exclude_unpaved in opt_bool(),
        ) {
            let options = CostingOptions::Auto(AutoOptions {
                use_highways,
                use_tolls,
                maneuver_penalty,
                top_speed,
                shortest,
                ignore_closures,
                exclude_unpaved,
                ..Default::default()
            });

            let doc = options.to_costing_json().unwrap();
            prop_assert!(!contains_null(&doc));

            let fields = doc["costing_options"]["auto"].as_object().unwrap();
            let expected = [
                use_highways.is_some(),
                use_tolls.is_some(),
                maneuver_penalty.is_some(),
                top_speed.is_some(),
                shortest.is_some(),
                ignore_closures.is_some(),
                exclude_unpaved.is_some(),
            ]
            .iter()
            .filter(|set| **set)
            .count();
            prop_assert_eq!(fields.len(), expected);
            prop_assert_eq!(fields.contains_key("use_highways"), use_highways.is_some());
            prop_assert_eq!(fields.contains_key("shortest"), shortest.is_some());
        }

        /// The document always has exactly one costing type key.
        #[test]
        fn single_costing_type_key(idx in 0usize..6, walking_speed in opt_f64()) {
            let mode = RoutingMode::ALL[idx];
            let mut options = CostingOptions::default_for_mode(mode);
            if let CostingOptions::Pedestrian(p) = &mut options {
                p.walking_speed = walking_speed;
            }

            let doc = options.to_costing_json().unwrap();
            let keyed = doc["costing_options"].as_object().unwrap();
            prop_assert_eq!(keyed.len(), 1);
            prop_assert!(keyed.contains_key(mode.as_str()));
        }
    }
}
