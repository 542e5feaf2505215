//! Persistence hook for refreshed credentials.

use chrono::{DateTime, Utc};

/// Receives the new credentials after every successful token refresh.
///
/// Implement this to write refreshed tokens somewhere durable (a credential
/// file, a database row). The call is a notification: it is made once,
/// synchronously, and its outcome is not observed by the client.
///
/// Closures with the matching signature implement this trait:
///
/// ```rust
/// use chrono::{DateTime, Utc};
/// use etsy_api::RefreshSave;
///
/// let save = |access: &str, refresh: &str, expires: DateTime<Utc>| {
///     println!("store {access} / {refresh} until {expires}");
/// };
/// fn takes_hook(_: impl RefreshSave) {}
/// takes_hook(save);
/// ```
pub trait RefreshSave: Send + Sync {
    /// Called with the refreshed access token, refresh token, and expiry.
    fn save(&self, access_token: &str, refresh_token: &str, expires: DateTime<Utc>);
}

impl<F> RefreshSave for F
where
    F: Fn(&str, &str, DateTime<Utc>) + Send + Sync,
{
    fn save(&self, access_token: &str, refresh_token: &str, expires: DateTime<Utc>) {
        self(access_token, refresh_token, expires);
    }
}

/// A [`RefreshSave`] that discards the refreshed credentials.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopRefreshSave;

impl RefreshSave for NoopRefreshSave {
    fn save(&self, _access_token: &str, _refresh_token: &str, _expires: DateTime<Utc>) {}
}
