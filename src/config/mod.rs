//! Configuration types for the Etsy API SDK.
//!
//! This module provides the configuration used to construct a client:
//!
//! - [`EtsyConfig`]: The configuration struct holding all SDK settings
//! - [`EtsyConfigBuilder`]: A builder for constructing [`EtsyConfig`] instances
//! - [`ApiKey`]: A validated API key newtype
//! - [`ApiUrl`]: A validated endpoint URL
//!
//! # Example
//!
//! ```rust
//! use etsy_api::{ApiKey, EtsyConfig};
//!
//! let config = EtsyConfig::builder()
//!     .api_key(ApiKey::new("my-keystring").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.etsy.com/v3/application");
//! ```

mod newtypes;

pub use newtypes::{ApiKey, ApiUrl};

use crate::error::ConfigError;

/// Base URL of the Etsy Open API v3 application endpoints.
pub const ETSY_API_BASE_URL: &str = "https://api.etsy.com/v3/application";

/// OAuth token endpoint used for the refresh grant.
pub const ETSY_TOKEN_URL: &str = "https://api.etsy.com/v3/public/oauth/token";

/// Configuration for the Etsy API SDK.
///
/// # Thread Safety
///
/// `EtsyConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct EtsyConfig {
    api_key: ApiKey,
    base_url: ApiUrl,
    token_url: ApiUrl,
    user_agent_prefix: Option<String>,
}

impl EtsyConfig {
    /// Creates a new builder for constructing an `EtsyConfig`.
    #[must_use]
    pub fn builder() -> EtsyConfigBuilder {
        EtsyConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the base URL that endpoint paths are appended to.
    #[must_use]
    pub const fn base_url(&self) -> &ApiUrl {
        &self.base_url
    }

    /// Returns the OAuth token endpoint.
    #[must_use]
    pub const fn token_url(&self) -> &ApiUrl {
        &self.token_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify EtsyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EtsyConfig>();
};

/// Builder for constructing [`EtsyConfig`] instances.
///
/// `api_key` is required. The URLs default to the production Etsy endpoints;
/// override them to point the client at a proxy or a mock server.
///
/// # Example
///
/// ```rust
/// use etsy_api::{ApiKey, ApiUrl, EtsyConfig};
///
/// let config = EtsyConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .base_url(ApiUrl::new("http://localhost:8080/v3/application").unwrap())
///     .token_url(ApiUrl::new("http://localhost:8080/v3/public/oauth/token").unwrap())
///     .user_agent_prefix("MyShopTool/1.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.user_agent_prefix(), Some("MyShopTool/1.0"));
/// ```
#[derive(Debug, Default)]
pub struct EtsyConfigBuilder {
    api_key: Option<ApiKey>,
    base_url: Option<ApiUrl>,
    token_url: Option<ApiUrl>,
    user_agent_prefix: Option<String>,
}

impl EtsyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: ApiUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Overrides the OAuth token endpoint.
    #[must_use]
    pub fn token_url(mut self, url: ApiUrl) -> Self {
        self.token_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`EtsyConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set.
    pub fn build(self) -> Result<EtsyConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => ApiUrl::new(ETSY_API_BASE_URL)?,
        };
        let token_url = match self.token_url {
            Some(url) => url,
            None => ApiUrl::new(ETSY_TOKEN_URL)?,
        };

        Ok(EtsyConfig {
            api_key,
            base_url,
            token_url,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
