//! Configuration types for the QuickBooks API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with QuickBooks Online.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`QuickbooksConfig`]: The main configuration struct holding all SDK settings
//! - [`QuickbooksConfigBuilder`]: A builder for constructing [`QuickbooksConfig`] instances
//! - [`RealmId`]: A validated company ID newtype
//! - [`AccessToken`]: A validated OAuth access token with masked debug output
//! - [`BaseUrl`]: A validated API host override
//! - [`Environment`]: Sandbox or production
//!
//! # Example
//!
//! ```rust
//! use quickbooks_api::{AccessToken, Environment, QuickbooksConfig, RealmId};
//!
//! let config = QuickbooksConfig::builder()
//!     .realm_id(RealmId::new("4620816365037572").unwrap())
//!     .access_token(AccessToken::new("access-token").unwrap())
//!     .environment(Environment::Production)
//!     .build()
//!     .unwrap();
//! ```

mod environment;
mod newtypes;

pub use environment::Environment;
pub use newtypes::{AccessToken, BaseUrl, RealmId};

use crate::error::ConfigError;

/// The `minorversion` sent with every request unless configured otherwise.
pub const DEFAULT_MINOR_VERSION: u32 = 75;

/// Configuration for the QuickBooks API SDK.
///
/// Holds the company the client talks to, the credentials it presents and
/// the host it sends requests to.
///
/// # Thread Safety
///
/// `QuickbooksConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use quickbooks_api::{AccessToken, QuickbooksConfig, RealmId};
///
/// let config = QuickbooksConfig::builder()
///     .realm_id(RealmId::new("123").unwrap())
///     .access_token(AccessToken::new("token").unwrap())
///     .minor_version(None)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.minor_version(), None);
/// assert_eq!(config.api_base_url(), "https://sandbox-quickbooks.api.intuit.com");
/// ```
#[derive(Clone, Debug)]
pub struct QuickbooksConfig {
    realm_id: RealmId,
    access_token: AccessToken,
    environment: Environment,
    base_url: Option<BaseUrl>,
    minor_version: Option<u32>,
    user_agent_prefix: Option<String>,
}

impl QuickbooksConfig {
    /// Creates a new builder for constructing a `QuickbooksConfig`.
    #[must_use]
    pub fn builder() -> QuickbooksConfigBuilder {
        QuickbooksConfigBuilder::new()
    }

    /// Returns the company ID.
    #[must_use]
    pub const fn realm_id(&self) -> &RealmId {
        &self.realm_id
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the environment.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// Returns the base URL override, if configured.
    #[must_use]
    pub const fn base_url(&self) -> Option<&BaseUrl> {
        self.base_url.as_ref()
    }

    /// Returns the URL requests are sent to: the override if set, otherwise
    /// the environment host.
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        self.base_url
            .as_ref()
            .map_or_else(|| self.environment.base_url(), AsRef::as_ref)
    }

    /// Returns the `minorversion` query parameter, if enabled.
    #[must_use]
    pub const fn minor_version(&self) -> Option<u32> {
        self.minor_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify QuickbooksConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<QuickbooksConfig>();
};

/// Builder for constructing [`QuickbooksConfig`] instances.
///
/// Required fields are `realm_id` and `access_token`.
///
/// # Defaults
///
/// - `environment`: [`Environment::Sandbox`]
/// - `base_url`: `None` (use the environment host)
/// - `minor_version`: [`DEFAULT_MINOR_VERSION`]
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct QuickbooksConfigBuilder {
    realm_id: Option<RealmId>,
    access_token: Option<AccessToken>,
    environment: Option<Environment>,
    base_url: Option<BaseUrl>,
    minor_version: Option<Option<u32>>,
    user_agent_prefix: Option<String>,
}

impl QuickbooksConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the company ID (required).
    #[must_use]
    pub fn realm_id(mut self, realm_id: RealmId) -> Self {
        self.realm_id = Some(realm_id);
        self
    }

    /// Sets the OAuth access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the environment.
    #[must_use]
    pub const fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Overrides the API host.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the `minorversion` query parameter. `None` stops sending it.
    #[must_use]
    pub const fn minor_version(mut self, version: Option<u32>) -> Self {
        self.minor_version = Some(version);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`QuickbooksConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `realm_id` or
    /// `access_token` are not set.
    pub fn build(self) -> Result<QuickbooksConfig, ConfigError> {
        let realm_id = self
            .realm_id
            .ok_or(ConfigError::MissingRequiredField { field: "realm_id" })?;
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;

        Ok(QuickbooksConfig {
            realm_id,
            access_token,
            environment: self.environment.unwrap_or_default(),
            base_url: self.base_url,
            minor_version: self.minor_version.unwrap_or(Some(DEFAULT_MINOR_VERSION)),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn realm() -> RealmId {
        RealmId::new("123").unwrap()
    }

    fn token() -> AccessToken {
        AccessToken::new("token").unwrap()
    }

    #[test]
    fn test_builder_requires_realm_id() {
        let result = QuickbooksConfigBuilder::new().access_token(token()).build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "realm_id" })
        ));
    }

    #[test]
    fn test_builder_requires_access_token() {
        let result = QuickbooksConfigBuilder::new().realm_id(realm()).build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "access_token"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = QuickbooksConfig::builder()
            .realm_id(realm())
            .access_token(token())
            .build()
            .unwrap();

        assert_eq!(config.environment(), Environment::Sandbox);
        assert_eq!(config.minor_version(), Some(DEFAULT_MINOR_VERSION));
        assert!(config.base_url().is_none());
        assert!(config.user_agent_prefix().is_none());
        assert_eq!(
            config.api_base_url(),
            "https://sandbox-quickbooks.api.intuit.com"
        );
    }

    #[test]
    fn test_base_url_override_wins_over_environment() {
        let config = QuickbooksConfig::builder()
            .realm_id(realm())
            .access_token(token())
            .environment(Environment::Production)
            .base_url(BaseUrl::new("http://localhost:9000").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.api_base_url(), "http://localhost:9000");
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = QuickbooksConfig::builder()
            .realm_id(realm())
            .access_token(token())
            .environment(Environment::Production)
            .minor_version(Some(65))
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.environment(), Environment::Production);
        assert_eq!(config.minor_version(), Some(65));
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
        assert_eq!(config.api_base_url(), "https://quickbooks.api.intuit.com");
    }

    #[test]
    fn test_config_debug_masks_token() {
        let config = QuickbooksConfig::builder()
            .realm_id(realm())
            .access_token(AccessToken::new("very-secret").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("QuickbooksConfig"));
        assert!(!debug_str.contains("very-secret"));
    }
}
