// ⚠️ Error Model - Typed failures for the directory core
// Every failure a caller can observe maps onto one of four kinds.

use crate::external::ExternalServiceError;
use thiserror::Error;

/// Result type alias using DirectoryError
pub type Result<T> = std::result::Result<T, DirectoryError>;

// ============================================================================
// ERROR KIND
// ============================================================================

/// Stable classification of directory errors
///
/// Each kind maps to a stable code used in API responses and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unknown business or review identifier
    NotFound,
    /// Malformed input (non-numeric id, missing field, blank query)
    Validation,
    /// External service credential missing
    Configuration,
    /// Network failure or non-success response from the external service
    ExternalService,
}

impl ErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "ERR_NOT_FOUND",
            ErrorKind::Validation => "ERR_VALIDATION",
            ErrorKind::Configuration => "ERR_CONFIGURATION",
            ErrorKind::ExternalService => "ERR_EXTERNAL_SERVICE",
        }
    }
}

// ============================================================================
// DIRECTORY ERROR
// ============================================================================

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Business not found: {id}")]
    BusinessNotFound { id: u32 },

    /// Sync target exists but carries no external-service identifier
    #[error("Business {id} has no external service identifier")]
    NoExternalId { id: u32 },

    #[error("Invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("External service error: {0}")]
    ExternalService(#[source] ExternalServiceError),
}

impl DirectoryError {
    /// Shorthand for a validation failure on a named field
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        DirectoryError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DirectoryError::BusinessNotFound { .. } | DirectoryError::NoExternalId { .. } => {
                ErrorKind::NotFound
            }
            DirectoryError::Validation { .. } => ErrorKind::Validation,
            DirectoryError::Configuration(_) => ErrorKind::Configuration,
            DirectoryError::ExternalService(_) => ErrorKind::ExternalService,
        }
    }
}

impl From<ExternalServiceError> for DirectoryError {
    fn from(err: ExternalServiceError) -> Self {
        match err {
            not_configured @ ExternalServiceError::NotConfigured => {
                DirectoryError::Configuration(not_configured.to_string())
            }
            other => DirectoryError::ExternalService(other),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_kinds() {
        assert_eq!(
            DirectoryError::BusinessNotFound { id: 7 }.kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            DirectoryError::NoExternalId { id: 7 }.kind(),
            ErrorKind::NotFound
        );
        assert_eq!(ErrorKind::NotFound.code(), "ERR_NOT_FOUND");
    }

    #[test]
    fn test_not_configured_becomes_configuration_error() {
        let err: DirectoryError = ExternalServiceError::NotConfigured.into();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(err.kind().code(), "ERR_CONFIGURATION");
    }

    #[test]
    fn test_api_failure_becomes_external_service_error() {
        let err: DirectoryError = ExternalServiceError::Api {
            status: 503,
            message: "unavailable".to_string(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::ExternalService);
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_validation_message() {
        let err = DirectoryError::validation("business id", "must be a positive integer");
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(
            err.to_string(),
            "Invalid business id: must be a positive integer"
        );
    }
}
