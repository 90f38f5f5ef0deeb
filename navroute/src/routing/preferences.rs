//! Routing preferences read by the backends.
//!
//! The preference store is owned elsewhere; this is the view the routing
//! core needs: an offline-mode flag and the online backend's endpoint.
//! Values live in `watch` channels so reads are point-in-time snapshots
//! and other components can subscribe to changes.

use std::sync::Arc;

use tokio::sync::watch;

/// Default endpoint of the online routing backend.
pub const DEFAULT_VALHALLA_BASE_URL: &str = "https://maps.earth/valhalla/route";

/// Endpoint configuration for an HTTP API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfiguration {
    /// Full URL requests are posted to.
    pub base_url: String,
    /// Sent as the `api_key` query parameter when present.
    pub api_key: Option<String>,
}

impl ApiConfiguration {
    /// Create a configuration without an API key.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
        }
    }

    /// Set the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Read `VALHALLA_BASE_URL` and `VALHALLA_API_KEY`, with defaults.
    pub fn from_env() -> Self {
        let base_url = std::env::var("VALHALLA_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_VALHALLA_BASE_URL.to_string());
        let api_key = std::env::var("VALHALLA_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());
        Self { base_url, api_key }
    }
}

impl Default for ApiConfiguration {
    fn default() -> Self {
        Self::new(DEFAULT_VALHALLA_BASE_URL)
    }
}

/// Shared, observable routing preferences.
///
/// Cloning is cheap and all clones see the same values.
#[derive(Debug, Clone)]
pub struct RoutingPreferences {
    offline_mode: Arc<watch::Sender<bool>>,
    valhalla: Arc<watch::Sender<ApiConfiguration>>,
}

impl RoutingPreferences {
    /// Create preferences with the given initial values.
    pub fn new(offline_mode: bool, valhalla: ApiConfiguration) -> Self {
        Self {
            offline_mode: Arc::new(watch::channel(offline_mode).0),
            valhalla: Arc::new(watch::channel(valhalla).0),
        }
    }

    /// Load from the environment. `NAVROUTE_OFFLINE` set to `1` or `true`
    /// starts in offline mode.
    pub fn from_env() -> Self {
        let offline = std::env::var("NAVROUTE_OFFLINE")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);
        Self::new(offline, ApiConfiguration::from_env())
    }

    /// Current offline-mode flag.
    pub fn offline_mode(&self) -> bool {
        *self.offline_mode.borrow()
    }

    /// Change the offline-mode flag. In-flight requests are unaffected.
    pub fn set_offline_mode(&self, offline: bool) {
        self.offline_mode.send_replace(offline);
    }

    /// Observe offline-mode changes.
    pub fn subscribe_offline_mode(&self) -> watch::Receiver<bool> {
        self.offline_mode.subscribe()
    }

    /// Snapshot of the online backend configuration.
    pub fn valhalla_config(&self) -> ApiConfiguration {
        self.valhalla.borrow().clone()
    }

    /// Replace the online backend configuration.
    pub fn set_valhalla_config(&self, config: ApiConfiguration) {
        self.valhalla.send_replace(config);
    }
}

impl Default for RoutingPreferences {
    fn default() -> Self {
        Self::new(false, ApiConfiguration::default())
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let prefs = RoutingPreferences::default();
        assert!(!prefs.offline_mode());
        assert_eq!(prefs.valhalla_config().base_url, DEFAULT_VALHALLA_BASE_URL);
        assert_eq!(prefs.valhalla_config().api_key, None);
    }

    #[test]
    fn clones_share_state() {
        let prefs = RoutingPreferences::default();
        let other = prefs.clone();

        other.set_offline_mode(true);
        assert!(prefs.offline_mode());

        other.set_valhalla_config(
            ApiConfiguration::new("http://localhost:8002/route").with_api_key("k"),
        );
        let config = prefs.valhalla_config();
        assert_eq!(config.base_url, "http://localhost:8002/route");
        assert_eq!(config.api_key.as_deref(), Some("k"));
    }

    #[tokio::test]
    async fn subscribers_see_changes() {
        let prefs = RoutingPreferences::default();
        let mut rx = prefs.subscribe_offline_mode();

        prefs.set_offline_mode(true);
        rx.changed().await.unwrap();
        assert!(*rx.borrow());
    }

    #[test]
    fn flag_parsing() {
        assert!(parse_flag("1"));
        assert!(parse_flag("TRUE"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(""));
    }
}
