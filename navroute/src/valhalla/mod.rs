//! Online routing backend (Valhalla-style HTTP API).
//!
//! The backend takes a JSON body with `locations`, `costing`, `units` and
//! optional `costing_options`, and answers with a `trip` whose legs carry
//! maneuvers and an encoded shape. Lengths come back in the requested
//! units and are passed through unchanged.

mod client;
mod convert;
mod error;
pub mod polyline;
mod types;

pub use client::{ValhallaClient, ValhallaClientConfig};
pub use convert::{ConversionError, convert_trip_response};
pub use error::ValhallaError;
pub use types::{LegDto, LocationType, ManeuverDto, RequestLocation, RouteRequest, Summary};
