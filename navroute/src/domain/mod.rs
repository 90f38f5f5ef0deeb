//! Domain types for route computation.
//!
//! These types are the stable, backend-agnostic representation of a
//! computed route. Coordinates inside route geometry are always
//! `[longitude, latitude]`; the swap to `(lat, lng)` happens once, in the
//! navigation adapter.

mod coord;
mod mode;
mod route;

pub use coord::LatLng;
pub use mode::{DistanceUnits, RoutingMode};
pub use route::{LINE_STRING, Maneuver, RouteGeometry, RouteLeg, RouteResult, RouteStep};
