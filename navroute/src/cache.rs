//! In-memory registry of navigation routes.
//!
//! Routes are large, so callers pass an opaque identifier around instead of
//! the route itself. Entries live until removed or cleared: the cache has
//! no capacity bound and no TTL.

use std::sync::Arc;

use moka::future::Cache as MokaCache;
use tracing::debug;
use uuid::Uuid;

use crate::navigation::NavRoute;

/// Thread-safe route registry keyed by generated identifiers.
///
/// Clones share the same entries.
#[derive(Clone)]
pub struct RouteCache {
    routes: MokaCache<String, Arc<NavRoute>>,
}

impl RouteCache {
    pub fn new() -> Self {
        Self {
            routes: MokaCache::builder().build(),
        }
    }

    /// Insert a route under a freshly generated identifier.
    ///
    /// Never returns an identifier already in the cache.
    pub async fn store(&self, route: NavRoute) -> String {
        let route = Arc::new(route);
        loop {
            let id = Uuid::new_v4().to_string();
            let entry = self
                .routes
                .entry_by_ref(&id)
                .or_insert(Arc::clone(&route))
                .await;
            if entry.is_fresh() {
                debug!(route_id = %id, "stored route");
                return id;
            }
        }
    }

    pub async fn get(&self, id: &str) -> Option<Arc<NavRoute>> {
        self.routes.get(id).await
    }

    /// Remove a route. Unknown identifiers are ignored.
    pub async fn remove(&self, id: &str) {
        self.routes.invalidate(id).await;
        debug!(route_id = %id, "removed route");
    }

    /// Remove every route.
    pub fn clear(&self) {
        self.routes.invalidate_all();
        debug!("cleared route cache");
    }

    /// Approximate number of entries (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }
}

impl Default for RouteCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RoutingMode;
    use crate::domain::{RouteGeometry, RouteResult};
    use crate::navigation::NavigationAdapter;

    fn nav_route(distance: f64) -> NavRoute {
        let route = RouteResult {
            distance,
            geometry: RouteGeometry::line_string(vec![[-75.0, 40.0], [-75.1, 40.1]]),
            ..RouteResult::empty()
        };
        NavigationAdapter::new(RoutingMode::Auto).adapt(&route)
    }

    #[tokio::test]
    async fn store_then_get() {
        let cache = RouteCache::new();
        let route = nav_route(1.5);
        let id = cache.store(route.clone()).await;
        assert_eq!(cache.get(&id).await.as_deref(), Some(&route));
    }

    #[tokio::test]
    async fn ids_are_unique() {
        let cache = RouteCache::new();
        let a = cache.store(nav_route(1.0)).await;
        let b = cache.store(nav_route(1.0)).await;
        assert_ne!(a, b);
        assert_eq!(cache.get(&a).await.unwrap().distance, 1.0);
        assert_eq!(cache.get(&b).await.unwrap().distance, 1.0);
    }

    #[tokio::test]
    async fn remove_then_get_is_absent() {
        let cache = RouteCache::new();
        let id = cache.store(nav_route(2.0)).await;
        cache.remove(&id).await;
        assert!(cache.get(&id).await.is_none());

        // Removing again is a no-op.
        cache.remove(&id).await;
        cache.remove("no-such-route").await;
    }

    #[tokio::test]
    async fn clear_empties_cache() {
        let cache = RouteCache::new();
        let a = cache.store(nav_route(1.0)).await;
        let b = cache.store(nav_route(2.0)).await;
        cache.clear();
        assert!(cache.get(&a).await.is_none());
        assert!(cache.get(&b).await.is_none());
    }

    #[tokio::test]
    async fn clones_share_entries() {
        let cache = RouteCache::new();
        let other = cache.clone();
        let id = cache.store(nav_route(3.0)).await;
        assert!(other.get(&id).await.is_some());
    }
}
