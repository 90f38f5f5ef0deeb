//! Route computation and navigation adaptation.
//!
//! Computes a route between two points with an online or offline routing
//! backend, normalizes the backend's trip response into a stable route
//! model, and adapts that model into what a turn-by-turn navigation
//! engine consumes. Adapted routes can be parked in a cache and referred
//! to by identifier.

pub mod cache;
pub mod costing;
pub mod domain;
pub mod navigation;
pub mod offline;
pub mod routing;
pub mod valhalla;
pub mod web;
