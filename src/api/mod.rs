//! Typed Etsy Open API v3 endpoints.
//!
//! [`EtsyApi`] exposes one async method per endpoint. Each method formats
//! the endpoint path, hands the payload or query to the [`HttpClient`], and
//! returns the decoded JSON response.
//!
//! # Example
//!
//! ```rust,ignore
//! use etsy_api::{ApiKey, EtsyApi, EtsyConfig, Session};
//! use etsy_api::api::ListingsByShopParams;
//! use etsy_api::enums::{Includes, ListingState};
//!
//! let config = EtsyConfig::builder()
//!     .api_key(ApiKey::new("keystring")?)
//!     .build()?;
//! let session = Session::new(access_token, refresh_token, expires)?;
//!
//! let api = EtsyApi::new(config, session)?.with_refresh_save(
//!     |access: &str, refresh: &str, expires| store.save(access, refresh, expires),
//! );
//!
//! let drafts = api
//!     .get_listings_by_shop(
//!         12345,
//!         &ListingsByShopParams {
//!             state: Some(ListingState::Draft),
//!             includes: Some(vec![Includes::Images]),
//!             ..Default::default()
//!         },
//!     )
//!     .await?;
//! ```

mod listings;
mod media;
mod params;
mod payments;
mod receipts;
mod shipping;
mod shops;
mod taxonomy;
mod users;

pub use params::{
    ActiveListingsByShopParams, ActiveListingsParams, ListingsByShopParams, Pagination,
    ShopReceiptsParams, ShopSectionListingsParams,
};

use serde_json::Value;

use crate::auth::{RefreshSave, Session};
use crate::clients::{HttpClient, HttpError, HttpMethod, QueryParams, RequestBody};
use crate::config::EtsyConfig;

/// Client for the Etsy Open API v3.
///
/// # Thread Safety
///
/// `EtsyApi` is `Send + Sync`; share it behind an `Arc` to call it from
/// several tasks.
#[derive(Debug)]
pub struct EtsyApi {
    client: HttpClient,
}

// Verify EtsyApi is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EtsyApi>();
};

impl EtsyApi {
    /// Creates a client for the user owning `session`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be created.
    pub fn new(config: EtsyConfig, session: Session) -> Result<Self, HttpError> {
        Ok(Self::from_client(HttpClient::new(config, session)?))
    }

    /// Wraps an existing [`HttpClient`].
    #[must_use]
    pub const fn from_client(client: HttpClient) -> Self {
        Self { client }
    }

    /// Sets the hook notified with refreshed credentials.
    #[must_use]
    pub fn with_refresh_save(self, refresh_save: impl RefreshSave + 'static) -> Self {
        Self::from_client(self.client.with_refresh_save(refresh_save))
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn client(&self) -> &HttpClient {
        &self.client
    }

    /// Refreshes the access token now, regardless of its expiry.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the token endpoint call fails.
    pub async fn refresh(&self) -> Result<Session, HttpError> {
        self.client.refresh().await
    }

    /// Checks that the API key is valid.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn ping(&self) -> Result<Value, HttpError> {
        self.get("openapi-ping".to_string(), QueryParams::new()).await
    }

    /// Returns the scopes granted to the current access token.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn token_scopes(&self) -> Result<Value, HttpError> {
        self.get("scopes".to_string(), QueryParams::new()).await
    }

    async fn get(&self, path: String, query: QueryParams) -> Result<Value, HttpError> {
        self.client.issue(HttpMethod::Get, path, None, query).await
    }

    async fn delete(&self, path: String) -> Result<Value, HttpError> {
        self.client
            .issue(HttpMethod::Delete, path, None, QueryParams::new())
            .await
    }

    async fn send(
        &self,
        method: HttpMethod,
        path: String,
        body: impl Into<RequestBody> + Send,
    ) -> Result<Value, HttpError> {
        self.client
            .issue(method, path, Some(body.into()), QueryParams::new())
            .await
    }

    fn unsupported(operation: &'static str) -> Result<Value, HttpError> {
        tracing::warn!(operation, "Called an Etsy endpoint this client does not support");
        Err(HttpError::Unsupported { operation })
    }
}
