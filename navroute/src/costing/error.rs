//! Costing option error types.

/// Errors reading stored costing options.
#[derive(Debug, thiserror::Error)]
pub enum CostingError {
    /// Profile name has no costing model
    #[error("unknown routing mode: {0}")]
    UnknownMode(String),

    /// Stored options are not valid for the mode
    #[error("invalid costing options: {0}")]
    Json(#[from] serde_json::Error),
}
