//! HTTP-specific error types for the QuickBooks API SDK.
//!
//! This module contains error types for HTTP operations: non-2xx responses,
//! request validation failures, and network errors.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use quickbooks_api::clients::HttpError;
//!
//! match client.get("invoice/130").await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {}: {}", e.code, e.message);
//!     }
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//!     Err(HttpError::InvalidBody { code, .. }) => println!("Unreadable {code} body"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// # JSON Message Format
///
/// The message field contains JSON with the `Fault` object QuickBooks
/// returned, if any, plus an `error_reference` built from the `intuit_tid`
/// header.
///
/// # Example
///
/// ```rust
/// use quickbooks_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 400,
///     message: r#"{"Fault":{"type":"ValidationFault"}}"#.to_string(),
///     error_reference: Some("1-5f0e-abc".to_string()),
///     fault_code: Some("6000".to_string()),
/// };
///
/// println!("Status {}: {}", error.code, error.message);
/// ```
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Intuit transaction ID for error reporting (from the `intuit_tid` header).
    pub error_reference: Option<String>,
    /// The first error code inside the response `Fault`, if present.
    pub fault_code: Option<String>,
}

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent if it fails validation
/// checks, such as:
/// - Missing body for POST requests
/// - Body provided without `body_type`
/// - Empty request path
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The request path is empty after normalization.
    #[error("Request path cannot be empty.")]
    EmptyPath,
}

/// Unified error type for all HTTP-related errors.
///
/// This is the transport error every service operation propagates
/// unchanged when it has no more specific meaning for it.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error, including a failure to read the body.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A successful response whose body is not valid JSON.
    #[error("Response with status {code} has a malformed body: {source}")]
    InvalidBody {
        /// The HTTP status code of the response.
        code: u16,
        /// The JSON parse failure.
        #[source]
        source: serde_json::Error,
    },
}

impl HttpError {
    /// Returns the HTTP status code when the error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::InvalidBody { code, .. } => Some(*code),
            _ => None,
        }
    }
}
