//! Route computation.
//!
//! [`RoutingBackend`] is the single capability callers use. The online
//! backend lives in [`crate::valhalla`], the offline one in
//! [`crate::offline`]; [`RoutingMultiplexer`] picks between them per call.

mod backend;
mod multiplexer;
mod preferences;


pub use backend::{RouteOptions, RoutingBackend};
pub use multiplexer::RoutingMultiplexer;
pub use preferences::{ApiConfiguration, DEFAULT_VALHALLA_BASE_URL, RoutingPreferences};
