//! Shipping carriers and shop shipping profiles.
//!
//! Profiles, destinations and upgrades can be read and deleted; creating and
//! updating them is not supported by this client.

use serde_json::Value;

use crate::api::params::Pagination;
use crate::api::EtsyApi;
use crate::clients::{HttpError, QueryParams};

impl EtsyApi {
    /// Returns the shipping carriers available from a country.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_shipping_carriers(
        &self,
        origin_country_iso: &str,
    ) -> Result<Value, HttpError> {
        self.get(
            "shipping-carriers".to_string(),
            QueryParams::new().param("origin_country_iso", Some(origin_country_iso)),
        )
        .await
    }

    /// Returns a shipping profile.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_shop_shipping_profile(
        &self,
        shop_id: u64,
        shipping_profile_id: u64,
    ) -> Result<Value, HttpError> {
        self.get(
            format!("shops/{shop_id}/shipping-profiles/{shipping_profile_id}"),
            QueryParams::new(),
        )
        .await
    }

    /// Returns the shipping profiles of a shop.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_shop_shipping_profiles(&self, shop_id: u64) -> Result<Value, HttpError> {
        self.get(
            format!("shops/{shop_id}/shipping-profiles"),
            QueryParams::new(),
        )
        .await
    }

    /// Deletes a shipping profile.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete_shop_shipping_profile(
        &self,
        shop_id: u64,
        shipping_profile_id: u64,
    ) -> Result<Value, HttpError> {
        self.delete(format!(
            "shops/{shop_id}/shipping-profiles/{shipping_profile_id}"
        ))
        .await
    }

    /// Returns the destinations of a shipping profile.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_shop_shipping_profile_destinations_by_shipping_profile(
        &self,
        shop_id: u64,
        shipping_profile_id: u64,
        page: Pagination,
    ) -> Result<Value, HttpError> {
        self.get(
            format!("shops/{shop_id}/shipping-profiles/{shipping_profile_id}/destinations"),
            page.to_query(),
        )
        .await
    }

    /// Deletes a destination from a shipping profile.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete_shop_shipping_profile_destination(
        &self,
        shop_id: u64,
        shipping_profile_id: u64,
        shipping_profile_destination_id: u64,
    ) -> Result<Value, HttpError> {
        self.delete(format!(
            "shops/{shop_id}/shipping-profiles/{shipping_profile_id}/destinations/{shipping_profile_destination_id}"
        ))
        .await
    }

    /// Returns the upgrades of a shipping profile.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_shop_shipping_profile_upgrades(
        &self,
        shop_id: u64,
        shipping_profile_id: u64,
    ) -> Result<Value, HttpError> {
        self.get(
            format!("shops/{shop_id}/shipping-profiles/{shipping_profile_id}/upgrades"),
            QueryParams::new(),
        )
        .await
    }

    /// Deletes an upgrade from a shipping profile.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete_shop_shipping_profile_upgrade(
        &self,
        shop_id: u64,
        shipping_profile_id: u64,
        upgrade_id: u64,
    ) -> Result<Value, HttpError> {
        self.delete(format!(
            "shops/{shop_id}/shipping-profiles/{shipping_profile_id}/upgrades/{upgrade_id}"
        ))
        .await
    }

    /// Not supported.
    ///
    /// # Errors
    ///
    /// Always returns [`HttpError::Unsupported`].
    pub fn create_shop_shipping_profile(&self, _shop_id: u64) -> Result<Value, HttpError> {
        Self::unsupported("create_shop_shipping_profile")
    }

    /// Not supported.
    ///
    /// # Errors
    ///
    /// Always returns [`HttpError::Unsupported`].
    pub fn update_shop_shipping_profile(
        &self,
        _shop_id: u64,
        _shipping_profile_id: u64,
    ) -> Result<Value, HttpError> {
        Self::unsupported("update_shop_shipping_profile")
    }

    /// Not supported.
    ///
    /// # Errors
    ///
    /// Always returns [`HttpError::Unsupported`].
    pub fn create_shop_shipping_profile_destination(
        &self,
        _shop_id: u64,
        _shipping_profile_id: u64,
    ) -> Result<Value, HttpError> {
        Self::unsupported("create_shop_shipping_profile_destination")
    }

    /// Not supported.
    ///
    /// # Errors
    ///
    /// Always returns [`HttpError::Unsupported`].
    pub fn update_shop_shipping_profile_destination(
        &self,
        _shop_id: u64,
        _shipping_profile_id: u64,
        _shipping_profile_destination_id: u64,
    ) -> Result<Value, HttpError> {
        Self::unsupported("update_shop_shipping_profile_destination")
    }

    /// Not supported.
    ///
    /// # Errors
    ///
    /// Always returns [`HttpError::Unsupported`].
    pub fn create_shop_shipping_profile_upgrade(
        &self,
        _shop_id: u64,
        _shipping_profile_id: u64,
    ) -> Result<Value, HttpError> {
        Self::unsupported("create_shop_shipping_profile_upgrade")
    }

    /// Not supported.
    ///
    /// # Errors
    ///
    /// Always returns [`HttpError::Unsupported`].
    pub fn update_shop_shipping_profile_upgrade(
        &self,
        _shop_id: u64,
        _shipping_profile_id: u64,
        _upgrade_id: u64,
    ) -> Result<Value, HttpError> {
        Self::unsupported("update_shop_shipping_profile_upgrade")
    }
}
