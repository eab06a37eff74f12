//! Network error taxonomy shared by the API client and the domain services
//!
//! Storage-side failures never surface through these types; the cache layer
//! logs and swallows them, so callers only ever see network, decoding, and
//! auth failures.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by the API client and propagated unchanged to callers
#[derive(Debug, Error)]
pub enum NetworkError {
    /// The endpoint path could not be joined onto the configured base URL.
    /// Programmer error; should not occur with a valid configuration.
    #[error("The request URL is invalid.")]
    InvalidUrl,

    /// Non-2xx response, or no HTTP response at all.
    ///
    /// `status` is `None` when the transport failed before any HTTP response
    /// was obtained (connection refused, DNS failure, TLS error).
    #[error("Invalid response from the server (status: {status:?}).")]
    InvalidResponse { status: Option<u16> },

    /// A 2xx response body did not match the expected typed shape
    #[error("Failed to decode the server response: {0}")]
    DecodingFailed(String),

    /// No valid session token is available
    #[error("Unauthorized. Please log in again.")]
    Unauthorized,

    /// Explicit server-side failure (5xx)
    #[error("Server returned an error (code {0}).")]
    ServerError(u16),

    /// Any other underlying transport or runtime failure
    #[error("Request failed: {0}")]
    Unknown(String),
}

impl NetworkError {
    /// Maps a non-2xx HTTP status onto the taxonomy: 5xx is a server error,
    /// anything else an invalid response carrying its status.
    pub fn from_status(status: u16) -> Self {
        if (500..600).contains(&status) {
            NetworkError::ServerError(status)
        } else {
            NetworkError::InvalidResponse {
                status: Some(status),
            }
        }
    }
}

/// Placeholder for response bodies the caller ignores (deletes, updates)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmptyResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_maps_server_range() {
        assert!(matches!(
            NetworkError::from_status(500),
            NetworkError::ServerError(500)
        ));
        assert!(matches!(
            NetworkError::from_status(503),
            NetworkError::ServerError(503)
        ));
    }

    #[test]
    fn test_from_status_maps_client_errors_to_invalid_response() {
        assert!(matches!(
            NetworkError::from_status(404),
            NetworkError::InvalidResponse { status: Some(404) }
        ));
        assert!(matches!(
            NetworkError::from_status(401),
            NetworkError::InvalidResponse { status: Some(401) }
        ));
    }

    #[test]
    fn test_empty_response_decodes_from_empty_object() {
        let decoded: EmptyResponse = serde_json::from_str("{}").expect("Should decode");
        let _ = decoded;
    }
}
