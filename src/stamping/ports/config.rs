//! Process-wide configuration consumed by the stamping layer.

use crate::stamping::domain::{StampDomainError, UserModel};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Configuration for user stamping.
///
/// Mirrors the host's `auth.providers.users.model` key, which names the
/// entity type that stamp relations point at.
///
/// # Examples
///
/// ```
/// use userstamps::stamping::ports::config::StampingConfig;
///
/// let config = StampingConfig::from_json_str(
///     r#"{"auth":{"providers":{"users":{"model":"accounts"}}}}"#,
/// )
/// .expect("valid configuration");
/// assert_eq!(config.user_model().as_str(), "accounts");
///
/// assert_eq!(StampingConfig::default().user_model().as_str(), "users");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StampingConfig {
    #[serde(default)]
    auth: AuthSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
struct AuthSection {
    #[serde(default)]
    providers: ProvidersSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
struct ProvidersSection {
    #[serde(default)]
    users: UsersProvider,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
struct UsersProvider {
    #[serde(default)]
    model: UserModel,
}

/// Errors returned while loading stamping configuration.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// The configuration document could not be parsed.
    #[error("invalid stamping configuration: {0}")]
    Parse(Arc<serde_json::Error>),

    /// A configured value failed domain validation.
    #[error(transparent)]
    Domain(#[from] StampDomainError),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(Arc::new(err))
    }
}

impl StampingConfig {
    /// Creates a configuration pointing relations at `user_model`.
    #[must_use]
    pub fn new(user_model: UserModel) -> Self {
        Self {
            auth: AuthSection {
                providers: ProvidersSection {
                    users: UsersProvider { model: user_model },
                },
            },
        }
    }

    /// Creates a configuration from a raw user model name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Domain`] when the name is blank.
    pub fn for_user_model(name: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self::new(UserModel::new(name)?))
    }

    /// Parses configuration from a JSON document.
    ///
    /// Missing sections fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is malformed or the
    /// user model is blank.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds configuration from an already parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the value does not have the
    /// expected shape or the user model is blank.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Returns the entity type stamp relations point at.
    #[must_use]
    pub const fn user_model(&self) -> &UserModel {
        &self.auth.providers.users.model
    }
}
