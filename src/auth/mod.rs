//! Authentication types for the Etsy API SDK.
//!
//! Etsy v3 calls carry two credentials: the app keystring (`x-api-key`) and
//! a per-user OAuth bearer token. This module holds the user side:
//!
//! - [`Session`]: The access token, refresh token, and expiry of a user
//! - [`AccessTokenResponse`]: The token set returned by the token endpoint
//! - [`RefreshSave`]: A hook notified with every refreshed token set
//! - [`token_refresh`]: The refresh-token grant
//!
//! Obtaining the first token set (the authorization code flow with PKCE)
//! happens outside this crate; a [`Session`] is built from its result.
//!
//! # Example
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use etsy_api::Session;
//!
//! let session = Session::new(
//!     "12345678.access",
//!     "12345678.refresh",
//!     Utc::now() + Duration::hours(1),
//! )
//! .unwrap();
//!
//! assert!(!session.expired());
//! ```

mod refresh_save;
pub mod session;
pub mod token_refresh;

pub use refresh_save::{NoopRefreshSave, RefreshSave};
pub use session::{AccessTokenResponse, Session};
