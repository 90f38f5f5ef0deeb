//! Offline routing.
//!
//! Mirrors the online backend's contract with a local engine. The route
//! graph search itself is not part of this crate; engines plug in through
//! [`OfflineEngine`].

mod backend;
mod engine;
mod error;

pub use backend::OfflineRoutingBackend;
pub use engine::{OfflineEngine, StaticResponseEngine};
pub use error::OfflineError;
