//! Users and their addresses.

use serde_json::Value;

use crate::api::params::Pagination;
use crate::api::EtsyApi;
use crate::clients::{HttpError, QueryParams};

impl EtsyApi {
    /// Returns a user.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_user(&self, user_id: u64) -> Result<Value, HttpError> {
        self.get(format!("users/{user_id}"), QueryParams::new())
            .await
    }

    /// Returns the user that owns the current access token.
    ///
    /// The user id is the numeric prefix of the access token, so no extra
    /// lookup is made.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_authenticated_user(&self) -> Result<Value, HttpError> {
        let user_id = self.client.user_id().await;
        self.get(
            format!("users/{}", urlencoding::encode(&user_id)),
            QueryParams::new(),
        )
        .await
    }

    /// Returns the addresses of the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_user_addresses(&self, page: Pagination) -> Result<Value, HttpError> {
        self.get("user/addresses".to_string(), page.to_query())
            .await
    }

    /// Not supported.
    ///
    /// # Errors
    ///
    /// Always returns [`HttpError::Unsupported`].
    pub fn delete_user_address(&self, _user_address_id: u64) -> Result<Value, HttpError> {
        Self::unsupported("delete_user_address")
    }

    /// Not supported.
    ///
    /// # Errors
    ///
    /// Always returns [`HttpError::Unsupported`].
    pub fn get_user_address(&self, _user_address_id: u64) -> Result<Value, HttpError> {
        Self::unsupported("get_user_address")
    }
}
