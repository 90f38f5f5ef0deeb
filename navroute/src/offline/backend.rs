//! Offline routing backend.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{LatLng, RouteResult, RoutingMode};
use crate::routing::{RouteOptions, RoutingBackend};
use crate::valhalla::{RouteRequest, convert_trip_response};

use super::engine::OfflineEngine;
use super::error::OfflineError;

/// Routing backend backed by an optional local engine.
///
/// Without an engine this is a placeholder that always yields the all-zero
/// route. With one, requests are built and responses parsed exactly as for
/// the online backend.
#[derive(Clone, Default)]
pub struct OfflineRoutingBackend {
    engine: Option<Arc<dyn OfflineEngine>>,
}

impl OfflineRoutingBackend {
    /// A backend with no engine.
    pub fn placeholder() -> Self {
        Self::default()
    }

    /// A backend that routes with `engine`.
    pub fn with_engine(engine: impl OfflineEngine) -> Self {
        Self {
            engine: Some(Arc::new(engine)),
        }
    }

    /// Whether a local engine is installed.
    pub fn has_engine(&self) -> bool {
        self.engine.is_some()
    }

    /// Route with the local engine, returning failures.
    pub async fn try_route(&self, request: &RouteRequest) -> Result<RouteResult, OfflineError> {
        let engine = self.engine.clone().ok_or(OfflineError::Unavailable)?;
        let body = serde_json::to_string(request)?;

        let response = tokio::task::spawn_blocking(move || engine.route(&body))
            .await
            .map_err(|e| OfflineError::Join(e.to_string()))??;

        let json: Value = serde_json::from_str(&response)?;
        Ok(convert_trip_response(&json)?)
    }
}

impl fmt::Debug for OfflineRoutingBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OfflineRoutingBackend")
            .field("has_engine", &self.has_engine())
            .finish()
    }
}

impl RoutingBackend for OfflineRoutingBackend {
    async fn compute_route(
        &self,
        origin: LatLng,
        destination: LatLng,
        mode: RoutingMode,
        options: &RouteOptions,
    ) -> RouteResult {
        if !self.has_engine() {
            debug!(%mode, "no offline engine; returning placeholder route");
            return RouteResult::empty();
        }

        let request = match RouteRequest::new(origin, destination, mode, options) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "could not build route request; returning empty route");
                return RouteResult::empty();
            }
        };

        match self.try_route(&request).await {
            Ok(route) => route,
            Err(e) => {
                warn!(%mode, error = %e, "offline routing failed; returning empty route");
                RouteResult::empty()
            }
        }
    }
}
