// ⚠️ External Service Errors - Failures of the review service client

use thiserror::Error;

/// Errors that can occur when calling the external review service
#[derive(Debug, Error)]
pub enum ExternalServiceError {
    /// No API key configured; raised before any network call
    #[error("review service API key not configured")]
    NotConfigured,

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-success status code
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service
        status: u16,
        /// Error message or response body
        message: String,
    },

    /// Failed to parse a service response
    #[error("parse error: {0}")]
    Parse(String),
}
