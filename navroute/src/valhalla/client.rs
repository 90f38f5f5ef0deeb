//! Online routing backend client.
//!
//! Posts route requests to the configured HTTP endpoint and converts the
//! trip response into a [`RouteResult`]. The endpoint and API key are read
//! from [`RoutingPreferences`] on every request.

use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{LatLng, RouteResult, RoutingMode};
use crate::routing::{RouteOptions, RoutingBackend, RoutingPreferences};

use super::convert::convert_trip_response;
use super::error::ValhallaError;
use super::types::RouteRequest;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the HTTP client itself.
#[derive(Debug, Clone)]
pub struct ValhallaClientConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ValhallaClientConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for ValhallaClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP routing backend.
#[derive(Debug, Clone)]
pub struct ValhallaClient {
    http: reqwest::Client,
    preferences: RoutingPreferences,
}

impl ValhallaClient {
    /// Create a new client.
    pub fn new(
        config: ValhallaClientConfig,
        preferences: RoutingPreferences,
    ) -> Result<Self, ValhallaError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, preferences })
    }

    /// Send a route request and convert the response.
    ///
    /// Unlike [`RoutingBackend::compute_route`], failures are returned, so
    /// callers that care can tell an unreachable backend from an empty route.
    pub async fn try_route(&self, request: &RouteRequest) -> Result<RouteResult, ValhallaError> {
        let api = self.preferences.valhalla_config();

        let mut builder = self.http.post(&api.base_url).json(request);
        if let Some(api_key) = &api.api_key {
            builder = builder.query(&[("api_key", api_key)]);
        }

        let response = builder.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(ValhallaError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ValhallaError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let json: Value = serde_json::from_str(&body).map_err(|e| ValhallaError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })?;

        Ok(convert_trip_response(&json)?)
    }
}

impl RoutingBackend for ValhallaClient {
    async fn compute_route(
        &self,
        origin: LatLng,
        destination: LatLng,
        mode: RoutingMode,
        options: &RouteOptions,
    ) -> RouteResult {
        let request = match RouteRequest::new(origin, destination, mode, options) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "could not build route request; returning empty route");
                return RouteResult::empty();
            }
        };

        match self.try_route(&request).await {
            Ok(route) => {
                debug!(%mode, legs = route.legs.len(), "online route computed");
                route
            }
            Err(e) => {
                warn!(%mode, error = %e, "online routing failed; returning empty route");
                RouteResult::empty()
            }
        }
    }
}
