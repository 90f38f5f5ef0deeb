//! Costing option model.
//!
//! Typed, mode-specific parameters for a route request, serialized into
//! the backend's `costing_options` document.

mod error;
mod kinds;
mod options;

pub use error::CostingError;
pub use kinds::{BicycleType, PedestrianType};
pub use options::{
    AutoOptions, BicycleOptions, CostingOptions, MotorScooterOptions, MotorcycleOptions,
    PedestrianOptions, TruckOptions,
};
