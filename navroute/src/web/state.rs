//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::cache::RouteCache;
use crate::navigation::NavigationAdapters;
use crate::offline::OfflineRoutingBackend;
use crate::routing::{RoutingMultiplexer, RoutingPreferences};
use crate::valhalla::ValhallaClient;

/// The routing stack the server runs.
pub type AppRouting = RoutingMultiplexer<ValhallaClient, OfflineRoutingBackend>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Online/offline routing
    pub routing: Arc<AppRouting>,

    /// Per-mode navigation adapters and their costing options
    pub adapters: Arc<RwLock<NavigationAdapters>>,

    /// Adapted routes, by identifier
    pub routes: RouteCache,
}

impl AppState {
    /// Create a new app state with default adapters and an empty cache.
    pub fn new(routing: AppRouting) -> Self {
        Self {
            routing: Arc::new(routing),
            adapters: Arc::new(RwLock::new(NavigationAdapters::new())),
            routes: RouteCache::new(),
        }
    }

    pub fn preferences(&self) -> &RoutingPreferences {
        self.routing.preferences()
    }
}
