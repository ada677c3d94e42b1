//! Error types for the QuickBooks API SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use quickbooks_api::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid QuickBooks OAuth access token.")]
    EmptyAccessToken,

    /// Realm ID is invalid.
    #[error("Invalid realm ID '{realm_id}'. Expected the numeric company ID (e.g., '4620816365037572').")]
    InvalidRealmId {
        /// The invalid realm ID that was provided.
        realm_id: String,
    },

    /// Environment name is invalid.
    #[error("Invalid environment '{environment}'. Expected 'sandbox' or 'production'.")]
    InvalidEnvironment {
        /// The invalid environment name that was provided.
        environment: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://quickbooks.api.intuit.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_access_token_error_message() {
        let error = ConfigError::EmptyAccessToken;
        let message = error.to_string();
        assert!(message.contains("Access token cannot be empty"));
        assert!(message.contains("OAuth access token"));
    }

    #[test]
    fn test_invalid_realm_id_error_message() {
        let error = ConfigError::InvalidRealmId {
            realm_id: "abc".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("'abc'"));
        assert!(message.contains("numeric company ID"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "realm_id" };
        let message = error.to_string();
        assert!(message.contains("realm_id"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyAccessToken;
        let _: &dyn std::error::Error = &error;
    }
}
