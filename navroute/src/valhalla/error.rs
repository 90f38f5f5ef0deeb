//! Routing backend client error types.

use super::convert::ConversionError;

/// Errors from the online routing backend.
///
/// These never cross the [`RoutingBackend`](crate::routing::RoutingBackend)
/// boundary; they are available through `ValhallaClient::try_route`.
#[derive(Debug, thiserror::Error)]
pub enum ValhallaError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid API key or unauthorized
    #[error("unauthorized (invalid API key)")]
    Unauthorized,

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Request or response body is not valid JSON
    #[error("JSON error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Response JSON has no usable trip
    #[error("conversion error: {0}")]
    Conversion(#[from] ConversionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValhallaError::Api {
            status: 400,
            message: "No path could be found for input".into(),
        };
        assert_eq!(
            err.to_string(),
            "API error 400: No path could be found for input"
        );

        let err = ValhallaError::Conversion(ConversionError::MissingTrip);
        assert_eq!(err.to_string(), "conversion error: response has no trip");

        let err = ValhallaError::Json {
            message: "expected value".into(),
            body: Some("<html>".into()),
        };
        assert!(err.to_string().contains("expected value"));
    }
}
