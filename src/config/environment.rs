//! QuickBooks Online environment definitions.
//!
//! This module provides the [`Environment`] enum for selecting between the
//! sandbox and production API hosts.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// QuickBooks Online API environment.
///
/// Intuit serves sandbox companies and real companies from different hosts.
/// Tokens issued for one environment are rejected by the other.
///
/// # Example
///
/// ```rust
/// use quickbooks_api::Environment;
///
/// let env: Environment = "production".parse().unwrap();
/// assert_eq!(env, Environment::Production);
/// assert_eq!(env.base_url(), "https://quickbooks.api.intuit.com");
/// assert_eq!(Environment::default(), Environment::Sandbox);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    /// Development companies at `sandbox-quickbooks.api.intuit.com`.
    #[default]
    Sandbox,
    /// Live companies at `quickbooks.api.intuit.com`.
    Production,
}

impl Environment {
    /// Returns the API base URL for this environment.
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Sandbox => "https://sandbox-quickbooks.api.intuit.com",
            Self::Production => "https://quickbooks.api.intuit.com",
        }
    }

    /// Returns `true` for the production environment.
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sandbox => f.write_str("sandbox"),
            Self::Production => f.write_str("production"),
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sandbox" | "development" => Ok(Self::Sandbox),
            "production" => Ok(Self::Production),
            _ => Err(ConfigError::InvalidEnvironment {
                environment: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parses_known_names() {
        assert_eq!("sandbox".parse::<Environment>(), Ok(Environment::Sandbox));
        assert_eq!(
            " Production ".parse::<Environment>(),
            Ok(Environment::Production)
        );
        assert_eq!(
            "development".parse::<Environment>(),
            Ok(Environment::Sandbox)
        );
    }

    #[test]
    fn test_environment_rejects_unknown_names() {
        let result = "staging".parse::<Environment>();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvironment { environment }) if environment == "staging"
        ));
    }

    #[test]
    fn test_environment_display_round_trips() {
        for env in [Environment::Sandbox, Environment::Production] {
            assert_eq!(env.to_string().parse::<Environment>(), Ok(env));
        }
    }

    #[test]
    fn test_environment_base_urls() {
        assert_eq!(
            Environment::Sandbox.base_url(),
            "https://sandbox-quickbooks.api.intuit.com"
        );
        assert!(Environment::Production.is_production());
        assert!(!Environment::Sandbox.is_production());
    }
}
