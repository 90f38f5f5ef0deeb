//! The routing backend capability.

use std::future::Future;

use futures::Stream;

use crate::costing::CostingOptions;
use crate::domain::{DistanceUnits, LatLng, RouteResult, RoutingMode};

/// Per-request options passed alongside the routing mode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteOptions {
    /// Units for lengths in the response (defaults to kilometers).
    pub units: Option<DistanceUnits>,
    /// Costing options; omitted from the request when `None`.
    pub costing: Option<CostingOptions>,
}

impl RouteOptions {
    /// Options with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the response units.
    pub fn with_units(mut self, units: DistanceUnits) -> Self {
        self.units = Some(units);
        self
    }

    /// Set the costing options.
    pub fn with_costing(mut self, costing: CostingOptions) -> Self {
        self.costing = Some(costing);
        self
    }

    /// The effective response units.
    pub fn units(&self) -> DistanceUnits {
        self.units.unwrap_or_default()
    }
}

/// Something that can compute a route between two points.
///
/// Implementations never fail: any transport, engine or parse failure
/// degrades to [`RouteResult::empty`], so callers see exactly one result
/// per call and never an error. There are no retries at this layer.
pub trait RoutingBackend: Send + Sync {
    /// Compute a route from `origin` to `destination`.
    fn compute_route(
        &self,
        origin: LatLng,
        destination: LatLng,
        mode: RoutingMode,
        options: &RouteOptions,
    ) -> impl Future<Output = RouteResult> + Send;

    /// The same computation as a single-value stream: exactly one item,
    /// then completion.
    fn route_stream(
        &self,
        origin: LatLng,
        destination: LatLng,
        mode: RoutingMode,
        options: &RouteOptions,
    ) -> impl Stream<Item = RouteResult> + Send {
        futures::stream::once(self.compute_route(origin, destination, mode, options))
    }
}
