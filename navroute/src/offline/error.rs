//! Offline routing error types.

use crate::valhalla::ConversionError;

/// Errors from the offline routing path.
#[derive(Debug, thiserror::Error)]
pub enum OfflineError {
    /// No local engine is installed
    #[error("no offline routing engine available")]
    Unavailable,

    /// The engine reported a failure
    #[error("engine error: {0}")]
    Engine(String),

    /// The engine task panicked or was cancelled
    #[error("engine task failed: {0}")]
    Join(String),

    /// Request or response is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Engine response has no usable trip
    #[error("conversion error: {0}")]
    Conversion(#[from] ConversionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            OfflineError::Unavailable.to_string(),
            "no offline routing engine available"
        );
        assert_eq!(
            OfflineError::Engine("no tiles".into()).to_string(),
            "engine error: no tiles"
        );
    }
}
