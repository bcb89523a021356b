//! Error types

use thiserror::Error;

/// Reasons a submit attempt stops before navigation.
///
/// The `Display` text is exactly what the user sees in the alert.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Please enter a URL")]
    MissingUrl,

    #[error("Please enter a valid URL")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceWorkerError {
    #[error("ServiceWorker registration failed: {0}")]
    RegistrationFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(FormError::MissingUrl.to_string(), "Please enter a URL");

        let invalid = FormError::InvalidUrl {
            input: "https://".to_string(),
            source: url::ParseError::EmptyHost,
        };
        assert_eq!(invalid.to_string(), "Please enter a valid URL");
        assert!(invalid.source().is_some());
    }

    #[test]
    fn test_service_worker_message() {
        let err = ServiceWorkerError::RegistrationFailed("SecurityError".to_string());
        assert_eq!(err.to_string(), "ServiceWorker registration failed: SecurityError");
    }
}
