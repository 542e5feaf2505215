//! Shops, shop sections and reviews.

use serde_json::Value;

use crate::api::params::Pagination;
use crate::api::EtsyApi;
use crate::clients::{HttpError, HttpMethod, QueryParams};
use crate::models::{
    CreateShopSectionRequest, UpdateShopRequest, UpdateShopSectionRequest, Validated,
};

impl EtsyApi {
    /// Returns a shop.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_shop(&self, shop_id: u64) -> Result<Value, HttpError> {
        self.get(format!("shops/{shop_id}"), QueryParams::new()).await
    }

    /// Updates the announcement and policy texts of a shop.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update_shop(
        &self,
        shop_id: u64,
        shop: Validated<UpdateShopRequest>,
    ) -> Result<Value, HttpError> {
        self.send(HttpMethod::Put, format!("shops/{shop_id}"), shop)
            .await
    }

    /// Returns the shop owned by a user.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_shop_by_owner_user_id(&self, user_id: u64) -> Result<Value, HttpError> {
        self.get(format!("users/{user_id}/shops"), QueryParams::new())
            .await
    }

    /// Searches shops by name.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn find_shops(
        &self,
        shop_name: &str,
        page: Pagination,
    ) -> Result<Value, HttpError> {
        let query = QueryParams::new()
            .param("shop_name", Some(shop_name))
            .param("limit", page.limit)
            .param("offset", page.offset);
        self.get("shops".to_string(), query).await
    }

    /// Returns the production partners of a shop.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_shop_production_partners(&self, shop_id: u64) -> Result<Value, HttpError> {
        self.get(
            format!("shops/{shop_id}/production-partners"),
            QueryParams::new(),
        )
        .await
    }

    /// Creates a shop section.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create_shop_section(
        &self,
        shop_id: u64,
        section: Validated<CreateShopSectionRequest>,
    ) -> Result<Value, HttpError> {
        self.send(HttpMethod::Post, format!("shops/{shop_id}/sections"), section)
            .await
    }

    /// Returns the sections of a shop.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_shop_sections(&self, shop_id: u64) -> Result<Value, HttpError> {
        self.get(format!("shops/{shop_id}/sections"), QueryParams::new())
            .await
    }

    /// Deletes a shop section.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete_shop_section(
        &self,
        shop_id: u64,
        shop_section_id: u64,
    ) -> Result<Value, HttpError> {
        self.delete(format!("shops/{shop_id}/sections/{shop_section_id}"))
            .await
    }

    /// Returns a shop section.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_shop_section(
        &self,
        shop_id: u64,
        shop_section_id: u64,
    ) -> Result<Value, HttpError> {
        self.get(
            format!("shops/{shop_id}/sections/{shop_section_id}"),
            QueryParams::new(),
        )
        .await
    }

    /// Renames a shop section.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update_shop_section(
        &self,
        shop_id: u64,
        shop_section_id: u64,
        section: Validated<UpdateShopSectionRequest>,
    ) -> Result<Value, HttpError> {
        self.send(
            HttpMethod::Put,
            format!("shops/{shop_id}/sections/{shop_section_id}"),
            section,
        )
        .await
    }

    /// Returns the reviews of a listing.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_reviews_by_listing(
        &self,
        listing_id: u64,
        page: Pagination,
    ) -> Result<Value, HttpError> {
        self.get(format!("listings/{listing_id}/reviews"), page.to_query())
            .await
    }

    /// Returns the reviews of a shop.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_reviews_by_shop(
        &self,
        shop_id: u64,
        page: Pagination,
    ) -> Result<Value, HttpError> {
        self.get(format!("shops/{shop_id}/reviews"), page.to_query())
            .await
    }
}
