//! Pluggable local routing engines.

use std::path::Path;

use super::error::OfflineError;

/// An on-device routing engine.
///
/// Takes the same JSON request document the online backend receives and
/// returns the raw response body. Calls may block; the backend runs them
/// on a blocking thread.
pub trait OfflineEngine: Send + Sync + 'static {
    fn route(&self, request: &str) -> Result<String, OfflineError>;
}

/// Engine that answers every request with the same response body.
///
/// Useful for development and tests without routing tiles on disk.
#[derive(Debug, Clone)]
pub struct StaticResponseEngine {
    body: String,
}

impl StaticResponseEngine {
    /// Serve `body` for every request.
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// Serve the contents of a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, OfflineError> {
        let path = path.as_ref();
        let body = std::fs::read_to_string(path)
            .map_err(|e| OfflineError::Engine(format!("failed to read {path:?}: {e}")))?;
        Ok(Self::new(body))
    }
}

impl OfflineEngine for StaticResponseEngine {
    fn route(&self, _request: &str) -> Result<String, OfflineError> {
        Ok(self.body.clone())
    }
}
