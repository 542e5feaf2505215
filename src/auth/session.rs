//! Session management for Etsy API authentication.
//!
//! This module provides the [`Session`] type holding the credential bundle
//! threaded through every authenticated call.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

use crate::error::ConfigError;

/// Response body of the OAuth token endpoint.
///
/// `expires_in` is a delta in seconds from the response time, not an
/// absolute timestamp.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct AccessTokenResponse {
    /// The new access token.
    pub access_token: String,
    /// The new refresh token.
    pub refresh_token: String,
    /// Seconds until the access token expires.
    pub expires_in: i64,
}

impl fmt::Debug for AccessTokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessTokenResponse")
            .field("access_token", &"*****")
            .field("refresh_token", &"*****")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

/// The credentials of an authenticated Etsy user.
///
/// A session is created with caller-supplied credentials and is only ever
/// mutated by a token refresh, which replaces all three values together.
///
/// # Security
///
/// The `Debug` implementation masks both tokens.
///
/// # Example
///
/// ```rust
/// use chrono::{Duration, Utc};
/// use etsy_api::Session;
///
/// let session = Session::new(
///     "12345678.access-token-body",
///     "12345678.refresh-token-body",
///     Utc::now() + Duration::hours(1),
/// )
/// .unwrap();
///
/// assert!(!session.expired());
/// assert_eq!(session.user_id(), "12345678");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    /// The OAuth access token sent as the bearer credential.
    pub access_token: String,

    /// The refresh token used to obtain a new access token.
    pub refresh_token: String,

    /// When the access token expires (UTC).
    pub expires: DateTime<Utc>,
}

impl Session {
    /// Creates a new session.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the access token is empty.
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        expires: DateTime<Utc>,
    ) -> Result<Self, ConfigError> {
        let access_token = access_token.into();
        if access_token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }

        Ok(Self {
            access_token,
            refresh_token: refresh_token.into(),
            expires,
        })
    }

    /// Returns `true` once the current time has reached the expiry.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.expired_at(Utc::now())
    }

    /// Returns `true` if the session is expired at the given instant.
    #[must_use]
    pub fn expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires
    }

    /// Returns the numeric user id embedded in the access token.
    ///
    /// Etsy access tokens are prefixed with the user id followed by a `.`.
    #[must_use]
    pub fn user_id(&self) -> &str {
        self.access_token
            .split('.')
            .next()
            .unwrap_or(&self.access_token)
    }

    /// Replaces the credentials with a refreshed token set.
    ///
    /// The new expiry is `now + expires_in` seconds.
    pub fn apply_refresh(&mut self, response: &AccessTokenResponse, now: DateTime<Utc>) {
        self.access_token.clone_from(&response.access_token);
        self.refresh_token.clone_from(&response.refresh_token);
        self.expires = now + Duration::seconds(response.expires_in);
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id())
            .field("access_token", &"*****")
            .field("refresh_token", &"*****")
            .field("expires", &self.expires)
            .finish()
    }
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};

#[cfg(test)]
mod tests {
    use super::*;

    fn session_expiring_at(expires: DateTime<Utc>) -> Session {
        Session::new("987654.abcdef", "987654.refresh", expires).unwrap()
    }

    #[test]
    fn test_session_expired() {
        assert!(session_expiring_at(Utc::now() - Duration::hours(1)).expired());
        assert!(!session_expiring_at(Utc::now() + Duration::hours(1)).expired());
    }

    #[test]
    fn test_session_is_expired_exactly_at_expiry() {
        let now = Utc::now();
        let session = session_expiring_at(now);
        assert!(session.expired_at(now));
        assert!(!session.expired_at(now - Duration::seconds(1)));
    }

    #[test]
    fn test_session_rejects_empty_access_token() {
        let result = Session::new("", "refresh", Utc::now());
        assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
    }

    #[test]
    fn test_user_id_is_token_prefix() {
        let session = session_expiring_at(Utc::now());
        assert_eq!(session.user_id(), "987654");
    }

    #[test]
    fn test_user_id_without_separator_is_whole_token() {
        let session = Session::new("opaque", "refresh", Utc::now()).unwrap();
        assert_eq!(session.user_id(), "opaque");
    }

    #[test]
    fn test_apply_refresh_replaces_all_credentials() {
        let mut session = session_expiring_at(Utc::now() - Duration::hours(1));
        let now = Utc::now();
        let response = AccessTokenResponse {
            access_token: "987654.new".to_string(),
            refresh_token: "987654.new-refresh".to_string(),
            expires_in: 3600,
        };

        session.apply_refresh(&response, now);

        assert_eq!(session.access_token, "987654.new");
        assert_eq!(session.refresh_token, "987654.new-refresh");
        assert_eq!(session.expires, now + Duration::seconds(3600));
        assert!(!session.expired_at(now));
    }

    #[test]
    fn test_debug_masks_tokens() {
        let session = session_expiring_at(Utc::now());
        let debug = format!("{session:?}");
        assert!(!debug.contains("abcdef"));
        assert!(!debug.contains("987654.refresh"));
        assert!(debug.contains("\"987654\""));
    }

    #[test]
    fn test_access_token_response_deserializes() {
        let json = r#"{"access_token":"1.at","token_type":"Bearer","expires_in":3600,"refresh_token":"1.rt"}"#;
        let response: AccessTokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.access_token, "1.at");
        assert_eq!(response.refresh_token, "1.rt");
        assert_eq!(response.expires_in, 3600);
    }
}
