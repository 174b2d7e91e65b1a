//! Configuration types for the ShipStation API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with ShipStation.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ShipStationConfig`]: The main configuration struct holding all SDK settings
//! - [`ShipStationConfigBuilder`]: A builder for constructing [`ShipStationConfig`] instances
//! - [`ApiKey`]: A validated API key newtype
//! - [`ApiSecret`]: A validated API secret newtype with masked debug output
//! - [`BaseUrl`]: A validated API base URL, defaulting to the production endpoint
//!
//! # Example
//!
//! ```rust
//! use shipstation_api::{ShipStationConfig, ApiKey, ApiSecret};
//!
//! let config = ShipStationConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .api_secret(ApiSecret::new("my-secret").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiKey, ApiSecret, BaseUrl};

use crate::error::ConfigError;

/// Configuration for the ShipStation API SDK.
///
/// This struct holds all configuration needed for SDK operations: API
/// credentials, the API base URL, and the optional partner key.
///
/// Configuration is instance-scoped — multiple configurations (and the
/// clients built from them) are fully independent.
///
/// # Thread Safety
///
/// `ShipStationConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use shipstation_api::{ShipStationConfig, ApiKey, ApiSecret, BaseUrl};
///
/// let config = ShipStationConfig::builder()
///     .api_key(ApiKey::new("your-api-key").unwrap())
///     .api_secret(ApiSecret::new("your-secret").unwrap())
///     .partner_key("your-partner-key")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_url().as_ref(), BaseUrl::PRODUCTION);
/// ```
#[derive(Clone, Debug)]
pub struct ShipStationConfig {
    api_key: ApiKey,
    api_secret: ApiSecret,
    base_url: BaseUrl,
    partner_key: Option<String>,
}

impl ShipStationConfig {
    /// Creates a new builder for constructing a `ShipStationConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shipstation_api::{ShipStationConfig, ApiKey, ApiSecret};
    ///
    /// let config = ShipStationConfig::builder()
    ///     .api_key(ApiKey::new("key").unwrap())
    ///     .api_secret(ApiSecret::new("secret").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> ShipStationConfigBuilder {
        ShipStationConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API secret.
    #[must_use]
    pub const fn api_secret(&self) -> &ApiSecret {
        &self.api_secret
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the partner key, if configured.
    ///
    /// When present, it is sent on every request under the `x-partner`
    /// header.
    #[must_use]
    pub fn partner_key(&self) -> Option<&str> {
        self.partner_key.as_deref()
    }
}

// Verify ShipStationConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShipStationConfig>();
};

/// Builder for constructing [`ShipStationConfig`] instances.
///
/// This builder provides a fluent API for configuring the SDK. Required fields
/// are `api_key` and `api_secret`. All other fields have sensible defaults.
///
/// # Defaults
///
/// - `base_url`: the production endpoint (`https://ssapi.shipstation.com`)
/// - `partner_key`: `None`
///
/// # Example
///
/// ```rust
/// use shipstation_api::{ShipStationConfig, ApiKey, ApiSecret, BaseUrl};
///
/// let config = ShipStationConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .api_secret(ApiSecret::new("secret").unwrap())
///     .base_url(BaseUrl::new("https://ssapi.example.com").unwrap())
///     .partner_key("partner-123")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ShipStationConfigBuilder {
    api_key: Option<ApiKey>,
    api_secret: Option<ApiSecret>,
    base_url: Option<BaseUrl>,
    partner_key: Option<String>,
}

impl ShipStationConfigBuilder {
    /// Creates a new builder with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Sets the API secret (required).
    #[must_use]
    pub fn api_secret(mut self, api_secret: ApiSecret) -> Self {
        self.api_secret = Some(api_secret);
        self
    }

    /// Sets the API base URL. Defaults to the production endpoint.
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the partner key, sent as the `x-partner` header on every request.
    #[must_use]
    pub fn partner_key(mut self, partner_key: impl Into<String>) -> Self {
        self.partner_key = Some(partner_key.into());
        self
    }

    /// Builds the [`ShipStationConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` or
    /// `api_secret` was not set.
    pub fn build(self) -> Result<ShipStationConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;
        let api_secret = self.api_secret.ok_or(ConfigError::MissingRequiredField {
            field: "api_secret",
        })?;

        Ok(ShipStationConfig {
            api_key,
            api_secret,
            base_url: self.base_url.unwrap_or_default(),
            partner_key: self.partner_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_with_required_fields_only() {
        let config = ShipStationConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .api_secret(ApiSecret::new("secret").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.api_key().as_ref(), "key");
        assert_eq!(config.api_secret().as_ref(), "secret");
        assert_eq!(config.base_url().as_ref(), BaseUrl::PRODUCTION);
        assert!(config.partner_key().is_none());
    }

    #[test]
    fn test_builder_with_all_fields() {
        let config = ShipStationConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .api_secret(ApiSecret::new("secret").unwrap())
            .base_url(BaseUrl::new("https://ssapi.example.com").unwrap())
            .partner_key("partner-123")
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), "https://ssapi.example.com");
        assert_eq!(config.partner_key(), Some("partner-123"));
    }

    #[test]
    fn test_builder_fails_without_api_key() {
        let result = ShipStationConfig::builder()
            .api_secret(ApiSecret::new("secret").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_fails_without_api_secret() {
        let result = ShipStationConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "api_secret"
            })
        ));
    }

    #[test]
    fn test_configs_are_independent() {
        let config_a = ShipStationConfig::builder()
            .api_key(ApiKey::new("key-a").unwrap())
            .api_secret(ApiSecret::new("secret-a").unwrap())
            .build()
            .unwrap();

        let config_b = ShipStationConfig::builder()
            .api_key(ApiKey::new("key-b").unwrap())
            .api_secret(ApiSecret::new("secret-b").unwrap())
            .partner_key("partner-b")
            .build()
            .unwrap();

        assert_eq!(config_a.api_key().as_ref(), "key-a");
        assert_eq!(config_b.api_key().as_ref(), "key-b");
        assert!(config_a.partner_key().is_none());
        assert_eq!(config_b.partner_key(), Some("partner-b"));
    }
}
