//! Online/offline backend selection.

use std::future::Future;

use futures::future::Either;
use tracing::debug;

use crate::domain::{LatLng, RouteResult, RoutingMode};

use super::backend::{RouteOptions, RoutingBackend};
use super::preferences::RoutingPreferences;

/// Routes each request to the offline or online backend.
///
/// The offline-mode flag is read once, when `compute_route` is called. The
/// whole request goes to the selected backend; results are never merged.
#[derive(Debug, Clone)]
pub struct RoutingMultiplexer<On, Off> {
    preferences: RoutingPreferences,
    online: On,
    offline: Off,
}

impl<On, Off> RoutingMultiplexer<On, Off>
where
    On: RoutingBackend,
    Off: RoutingBackend,
{
    /// Create a multiplexer over the two backends.
    pub fn new(preferences: RoutingPreferences, online: On, offline: Off) -> Self {
        Self {
            preferences,
            online,
            offline,
        }
    }

    /// The online backend.
    pub fn online(&self) -> &On {
        &self.online
    }

    /// The offline backend.
    pub fn offline(&self) -> &Off {
        &self.offline
    }

    /// The preferences this multiplexer reads.
    pub fn preferences(&self) -> &RoutingPreferences {
        &self.preferences
    }
}

impl<On, Off> RoutingBackend for RoutingMultiplexer<On, Off>
where
    On: RoutingBackend,
    Off: RoutingBackend,
{
    fn compute_route(
        &self,
        origin: LatLng,
        destination: LatLng,
        mode: RoutingMode,
        options: &RouteOptions,
    ) -> impl Future<Output = RouteResult> + Send {
        if self.preferences.offline_mode() {
            debug!(%mode, "routing with offline backend");
            Either::Left(self.offline.compute_route(origin, destination, mode, options))
        } else {
            debug!(%mode, "routing with online backend");
            Either::Right(self.online.compute_route(origin, destination, mode, options))
        }
    }
}
