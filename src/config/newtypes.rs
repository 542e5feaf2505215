//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Etsy API key (the app "keystring").
///
/// The key identifies the client application. It is sent as the `x-api-key`
/// header on every call and as `client_id` when refreshing tokens.
///
/// # Example
///
/// ```rust
/// use etsy_api::ApiKey;
///
/// let key = ApiKey::new("my-keystring").unwrap();
/// assert_eq!(key.as_ref(), "my-keystring");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated absolute URL used as an API or token endpoint.
///
/// Trailing slashes are trimmed so paths can be appended with a single `/`.
///
/// # Example
///
/// ```rust
/// use etsy_api::ApiUrl;
///
/// let url = ApiUrl::new("https://api.etsy.com/v3/application/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.etsy.com/v3/application");
///
/// assert!(ApiUrl::new("api.etsy.com").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiUrl(String);

impl ApiUrl {
    /// Creates a new validated URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the URL has no `http(s)://`
    /// scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');

        let rest = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));

        match rest {
            Some(host) if !host.is_empty() && !host.starts_with('/') => {
                Ok(Self(trimmed.to_string()))
            }
            _ => Err(ConfigError::InvalidUrl { url }),
        }
    }

    /// Joins a path onto this URL.
    ///
    /// ```rust
    /// use etsy_api::ApiUrl;
    ///
    /// let base = ApiUrl::new("https://api.etsy.com/v3/application").unwrap();
    /// assert_eq!(base.join("/shops/1"), "https://api.etsy.com/v3/application/shops/1");
    /// assert_eq!(base.join("shops/1"), "https://api.etsy.com/v3/application/shops/1");
    /// ```
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
