//! Listing endpoints: listings, properties, inventory, translations and
//! variation images.

use serde_json::Value;

use crate::api::params::{
    ActiveListingsByShopParams, ActiveListingsParams, ListingsByShopParams, Pagination,
    ShopSectionListingsParams,
};
use crate::api::EtsyApi;
use crate::clients::{HttpError, HttpMethod, QueryParams};
use crate::enums::Includes;
use crate::models::{
    CreateDraftListingRequest, CreateListingTranslationRequest, UpdateListingInventoryRequest,
    UpdateListingPropertyRequest, UpdateListingRequest, UpdateListingTranslationRequest,
    UpdateVariationImagesRequest, Validated,
};

impl EtsyApi {
    /// Creates a draft listing in a shop.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create_draft_listing(
        &self,
        shop_id: u64,
        listing: Validated<CreateDraftListingRequest>,
    ) -> Result<Value, HttpError> {
        self.send(HttpMethod::Post, format!("shops/{shop_id}/listings"), listing)
            .await
    }

    /// Returns the listings of a shop.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_listings_by_shop(
        &self,
        shop_id: u64,
        params: &ListingsByShopParams,
    ) -> Result<Value, HttpError> {
        self.get(format!("shops/{shop_id}/listings"), params.to_query())
            .await
    }

    /// Deletes a listing.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete_listing(&self, listing_id: u64) -> Result<Value, HttpError> {
        self.delete(format!("listings/{listing_id}")).await
    }

    /// Returns a listing, optionally with embedded associations.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_listing(
        &self,
        listing_id: u64,
        includes: Option<&[Includes]>,
    ) -> Result<Value, HttpError> {
        self.get(
            format!("listings/{listing_id}"),
            QueryParams::new().list("includes", includes),
        )
        .await
    }

    /// Searches all active listings on Etsy.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn find_all_listings_active(
        &self,
        params: &ActiveListingsParams,
    ) -> Result<Value, HttpError> {
        self.get("listings/active".to_string(), params.to_query())
            .await
    }

    /// Returns the active listings of a shop.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn find_all_active_listings_by_shop(
        &self,
        shop_id: u64,
        params: &ActiveListingsByShopParams,
    ) -> Result<Value, HttpError> {
        self.get(format!("shops/{shop_id}/listings/active"), params.to_query())
            .await
    }

    /// Returns several listings by id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_listings_by_listing_ids(
        &self,
        listing_ids: &[u64],
        includes: Option<&[Includes]>,
    ) -> Result<Value, HttpError> {
        let query = QueryParams::new()
            .list("listing_ids", Some(listing_ids))
            .list("includes", includes);
        self.get("listings/batch".to_string(), query).await
    }

    /// Returns the featured listings of a shop.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_featured_listings_by_shop(
        &self,
        shop_id: u64,
        page: Pagination,
    ) -> Result<Value, HttpError> {
        self.get(format!("shops/{shop_id}/listings/featured"), page.to_query())
            .await
    }

    /// Updates a listing.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update_listing(
        &self,
        shop_id: u64,
        listing_id: u64,
        listing: Validated<UpdateListingRequest>,
    ) -> Result<Value, HttpError> {
        self.send(
            HttpMethod::Patch,
            format!("shops/{shop_id}/listings/{listing_id}"),
            listing,
        )
        .await
    }

    /// Returns the listings purchased in a receipt.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_listings_by_shop_receipt(
        &self,
        shop_id: u64,
        receipt_id: u64,
        page: Pagination,
    ) -> Result<Value, HttpError> {
        self.get(
            format!("shops/{shop_id}/receipts/{receipt_id}/listings"),
            page.to_query(),
        )
        .await
    }

    /// Returns the listings in one or more shop sections.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_listings_by_shop_section_id(
        &self,
        shop_id: u64,
        shop_section_ids: &[u64],
        params: ShopSectionListingsParams,
    ) -> Result<Value, HttpError> {
        let query = QueryParams::new()
            .list("shop_section_ids", Some(shop_section_ids))
            .param("limit", params.limit)
            .param("offset", params.offset)
            .param("sort_on", params.sort_on)
            .param("sort_order", params.sort_order);
        self.get(format!("shops/{shop_id}/shop-sections/listings"), query)
            .await
    }

    /// Removes a property from a listing.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete_listing_property(
        &self,
        shop_id: u64,
        listing_id: u64,
        property_id: u64,
    ) -> Result<Value, HttpError> {
        self.delete(format!(
            "shops/{shop_id}/listings/{listing_id}/properties/{property_id}"
        ))
        .await
    }

    /// Sets a property of a listing.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update_listing_property(
        &self,
        shop_id: u64,
        listing_id: u64,
        property_id: u64,
        listing_property: Validated<UpdateListingPropertyRequest>,
    ) -> Result<Value, HttpError> {
        self.send(
            HttpMethod::Put,
            format!("shops/{shop_id}/listings/{listing_id}/properties/{property_id}"),
            listing_property,
        )
        .await
    }

    /// Not available: Etsy has not released this endpoint.
    ///
    /// # Errors
    ///
    /// Always returns [`HttpError::Unsupported`].
    pub fn get_listing_property(
        &self,
        _listing_id: u64,
        _property_id: u64,
    ) -> Result<Value, HttpError> {
        Self::unsupported("get_listing_property")
    }

    /// Returns the properties of a listing.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_listing_properties(
        &self,
        shop_id: u64,
        listing_id: u64,
    ) -> Result<Value, HttpError> {
        self.get(
            format!("shops/{shop_id}/listings/{listing_id}/properties"),
            QueryParams::new(),
        )
        .await
    }

    /// Returns the inventory of a listing.
    ///
    /// Pass the response to
    /// [`UpdateListingInventoryRequest::from_inventory_response`] to edit it.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_listing_inventory(&self, listing_id: u64) -> Result<Value, HttpError> {
        self.get(format!("listings/{listing_id}/inventory"), QueryParams::new())
            .await
    }

    /// Replaces the inventory of a listing.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update_listing_inventory(
        &self,
        listing_id: u64,
        listing_inventory: Validated<UpdateListingInventoryRequest>,
    ) -> Result<Value, HttpError> {
        self.send(
            HttpMethod::Put,
            format!("listings/{listing_id}/inventory"),
            listing_inventory,
        )
        .await
    }

    /// Returns one offering of a listing product.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_listing_offering(
        &self,
        listing_id: u64,
        product_id: u64,
        product_offering_id: u64,
    ) -> Result<Value, HttpError> {
        self.get(
            format!("listings/{listing_id}/products/{product_id}/offerings/{product_offering_id}"),
            QueryParams::new(),
        )
        .await
    }

    /// Returns one product of a listing's inventory.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_listing_product(
        &self,
        listing_id: u64,
        product_id: u64,
    ) -> Result<Value, HttpError> {
        self.get(
            format!("listings/{listing_id}/inventory/products/{product_id}"),
            QueryParams::new(),
        )
        .await
    }

    /// Adds a translation to a listing.
    ///
    /// `language` is an IETF tag such as `de` or `fr`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create_listing_translation(
        &self,
        shop_id: u64,
        listing_id: u64,
        language: &str,
        listing_translation: Validated<CreateListingTranslationRequest>,
    ) -> Result<Value, HttpError> {
        self.send(
            HttpMethod::Post,
            translation_path(shop_id, listing_id, language),
            listing_translation,
        )
        .await
    }

    /// Returns a translation of a listing.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_listing_translation(
        &self,
        shop_id: u64,
        listing_id: u64,
        language: &str,
    ) -> Result<Value, HttpError> {
        self.get(
            translation_path(shop_id, listing_id, language),
            QueryParams::new(),
        )
        .await
    }

    /// Replaces a translation of a listing.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update_listing_translation(
        &self,
        shop_id: u64,
        listing_id: u64,
        language: &str,
        listing_translation: Validated<UpdateListingTranslationRequest>,
    ) -> Result<Value, HttpError> {
        self.send(
            HttpMethod::Put,
            translation_path(shop_id, listing_id, language),
            listing_translation,
        )
        .await
    }

    /// Returns the images attached to listing variations.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_listing_variation_images(
        &self,
        shop_id: u64,
        listing_id: u64,
    ) -> Result<Value, HttpError> {
        self.get(
            format!("shops/{shop_id}/listings/{listing_id}/variation-images"),
            QueryParams::new(),
        )
        .await
    }

    /// Replaces the images attached to listing variations.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update_variation_images(
        &self,
        shop_id: u64,
        listing_id: u64,
        variation_images: Validated<UpdateVariationImagesRequest>,
    ) -> Result<Value, HttpError> {
        self.send(
            HttpMethod::Post,
            format!("shops/{shop_id}/listings/{listing_id}/variation-images"),
            variation_images,
        )
        .await
    }
}

fn translation_path(shop_id: u64, listing_id: u64, language: &str) -> String {
    format!(
        "shops/{shop_id}/listings/{listing_id}/translations/{}",
        urlencoding::encode(language)
    )
}
