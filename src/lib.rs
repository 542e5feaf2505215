//! # Etsy API Rust SDK
//!
//! A typed Rust client for the Etsy Open API v3. Inputs are checked before a
//! request is built, expired access tokens are refreshed transparently, and
//! HTTP error statuses come back as typed errors.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`EtsyConfig`] and [`EtsyConfigBuilder`]
//! - A [`Session`] credential bundle with automatic refresh on expiry
//! - A [`RefreshSave`] hook to persist refreshed credentials
//! - Request payload types in [`models`] with mandatory-field validation
//! - Closed code sets in [`enums`] for every enumerated parameter
//! - One async method per endpoint on [`EtsyApi`]
//! - Status-mapped errors via [`ApiError`] and [`HttpError`]
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use etsy_api::{ApiKey, EtsyConfig, Session};
//!
//! let config = EtsyConfig::builder()
//!     .api_key(ApiKey::new("your-keystring").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let session = Session::new(
//!     "12345678.access-token",
//!     "12345678.refresh-token",
//!     Utc::now() + Duration::hours(1),
//! )
//! .unwrap();
//!
//! assert_eq!(session.user_id(), "12345678");
//! ```
//!
//! ## Building Requests
//!
//! Payloads are plain structs with optional fields. [`models::Request::validate`]
//! checks the mandatory fields and yields the value the endpoints accept:
//!
//! ```rust
//! use etsy_api::enums::{WhenMade, WhoMade};
//! use etsy_api::models::{CreateDraftListingRequest, Request};
//!
//! let listing = CreateDraftListingRequest {
//!     quantity: Some(3),
//!     title: Some("Stoneware mug".to_string()),
//!     description: Some("Wheel thrown".to_string()),
//!     price: Some(24.0),
//!     who_made: Some(WhoMade::IDid),
//!     when_made: Some(WhenMade::MadeToOrder),
//!     taxonomy_id: Some(1633),
//!     ..Default::default()
//! }
//! .validate()
//! .unwrap();
//!
//! assert_eq!(listing.to_map()["who_made"], "i_did");
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use etsy_api::{EtsyApi, EtsyConfig, Session};
//! use etsy_api::api::ShopReceiptsParams;
//!
//! let api = EtsyApi::new(config, session)?.with_refresh_save(
//!     |access: &str, refresh: &str, expires| store.save(access, refresh, expires),
//! );
//!
//! let open_orders = api
//!     .get_shop_receipts(12345, &ShopReceiptsParams::default())
//!     .await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and payloads validate before any I/O
//! - **Thread-safe**: All types are `Send + Sync`; refresh is serialized by a lock
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod api;
pub mod auth;
pub mod clients;
pub mod config;
pub mod enums;
pub mod error;
pub mod models;

// Re-export public types at crate root for convenience
pub use api::EtsyApi;
pub use auth::{AccessTokenResponse, NoopRefreshSave, RefreshSave, Session};
pub use config::{ApiKey, ApiUrl, EtsyConfig, EtsyConfigBuilder};
pub use error::{ConfigError, ValidationError};

// Re-export HTTP client types
pub use clients::{
    ApiError, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
};
