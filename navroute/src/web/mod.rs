//! Web layer for the routing pipeline.
//!
//! Computes routes, adapts them for navigation and hands out cache
//! identifiers for them.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::{AppRouting, AppState};
