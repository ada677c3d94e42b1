//! Error types for service operations.
//!
//! [`ServiceError`] refines the transport's [`HttpError`] with the meanings a
//! service can attach to a failure:
//!
//! - **404 on load**: [`ServiceError::NotFound`]
//! - **409 or fault `5010` on update/delete**: [`ServiceError::Conflict`]
//!   (stale `SyncToken`)
//! - **Missing envelope key**: [`ServiceError::Decode`]
//! - **Everything else**: [`ServiceError::Transport`], propagated unchanged
//!
//! # Example
//!
//! ```rust,ignore
//! use quickbooks_api::ServiceError;
//!
//! match invoices.update(payload).await {
//!     Ok(invoice) => println!("Updated to SyncToken {}", invoice["SyncToken"]),
//!     Err(ServiceError::Conflict { entity, .. }) => {
//!         println!("{entity} changed remotely; reload and retry");
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::{HttpError, HttpResponseError};

/// QuickBooks fault code for "Stale Object Error".
pub const STALE_OBJECT_FAULT_CODE: &str = "5010";

/// Error type for service and query operations.
///
/// # Example
///
/// ```rust
/// use quickbooks_api::ServiceError;
///
/// let error = ServiceError::NotFound {
///     entity: "Invoice",
///     id: "130".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invoice with id 130 not found");
/// assert_eq!(error.status(), Some(404));
/// ```
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The entity does not exist (HTTP 404 on load).
    #[error("{entity} with id {id} not found")]
    NotFound {
        /// The entity name (e.g., "Invoice").
        entity: &'static str,
        /// The ID that was requested.
        id: String,
    },

    /// An update or delete carried a stale `SyncToken`.
    #[error("{entity} was modified remotely: {source}")]
    Conflict {
        /// The entity name.
        entity: &'static str,
        /// The response that reported the conflict.
        #[source]
        source: HttpResponseError,
    },

    /// The response lacked the expected envelope key.
    #[error("Response is missing the expected `{key}` key")]
    Decode {
        /// The key that was expected.
        key: String,
    },

    /// No builder is registered under the entity's class name.
    #[error("No builder registered for `{name}`")]
    BuilderNotFound {
        /// The name that was looked up.
        name: String,
    },

    /// A query could not be turned into a statement.
    #[error("Invalid query: {reason}")]
    InvalidQuery {
        /// Why the query is invalid.
        reason: String,
    },

    /// Any other transport failure.
    #[error(transparent)]
    Transport(#[from] HttpError),
}

impl ServiceError {
    /// Returns the HTTP status code when the error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Conflict { source, .. } => Some(source.code),
            Self::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// Returns `true` for [`ServiceError::Conflict`].
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}

/// Returns `true` if the response reports a stale `SyncToken`.
pub(crate) fn is_stale_object(error: &HttpResponseError) -> bool {
    error.code == 409 || error.fault_code.as_deref() == Some(STALE_OBJECT_FAULT_CODE)
}
