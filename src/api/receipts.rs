//! Receipts, shipments and transactions.

use serde_json::Value;

use crate::api::params::{Pagination, ShopReceiptsParams};
use crate::api::EtsyApi;
use crate::clients::{HttpError, HttpMethod, QueryParams};
use crate::models::{CreateReceiptShipmentRequest, UpdateShopReceiptRequest, Validated};

impl EtsyApi {
    /// Returns a receipt.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_shop_receipt(
        &self,
        shop_id: u64,
        receipt_id: u64,
    ) -> Result<Value, HttpError> {
        self.get(
            format!("shops/{shop_id}/receipts/{receipt_id}"),
            QueryParams::new(),
        )
        .await
    }

    /// Updates the paid and shipped flags of a receipt.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update_shop_receipt(
        &self,
        shop_id: u64,
        receipt_id: u64,
        receipt: Validated<UpdateShopReceiptRequest>,
    ) -> Result<Value, HttpError> {
        self.send(
            HttpMethod::Put,
            format!("shops/{shop_id}/receipts/{receipt_id}"),
            receipt,
        )
        .await
    }

    /// Returns the receipts of a shop.
    ///
    /// With [`ShopReceiptsParams::default`] only paid, unshipped receipts are
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_shop_receipts(
        &self,
        shop_id: u64,
        params: &ShopReceiptsParams,
    ) -> Result<Value, HttpError> {
        self.get(format!("shops/{shop_id}/receipts"), params.to_query())
            .await
    }

    /// Submits tracking information for a receipt and marks it shipped.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create_receipt_shipment(
        &self,
        shop_id: u64,
        receipt_id: u64,
        shipment: Validated<CreateReceiptShipmentRequest>,
    ) -> Result<Value, HttpError> {
        self.send(
            HttpMethod::Post,
            format!("shops/{shop_id}/receipts/{receipt_id}/tracking"),
            shipment,
        )
        .await
    }

    /// Returns the transactions of a listing.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_shop_receipt_transactions_by_listing(
        &self,
        shop_id: u64,
        listing_id: u64,
        page: Pagination,
    ) -> Result<Value, HttpError> {
        self.get(
            format!("shops/{shop_id}/listings/{listing_id}/transactions"),
            page.to_query(),
        )
        .await
    }

    /// Returns the transactions of a receipt.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_shop_receipt_transactions_by_receipt(
        &self,
        shop_id: u64,
        receipt_id: u64,
    ) -> Result<Value, HttpError> {
        self.get(
            format!("shops/{shop_id}/receipts/{receipt_id}/transactions"),
            QueryParams::new(),
        )
        .await
    }

    /// Returns a transaction.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_shop_receipt_transaction(
        &self,
        shop_id: u64,
        transaction_id: u64,
    ) -> Result<Value, HttpError> {
        self.get(
            format!("shops/{shop_id}/transactions/{transaction_id}"),
            QueryParams::new(),
        )
        .await
    }

    /// Returns the transactions of a shop.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_shop_receipt_transactions_by_shop(
        &self,
        shop_id: u64,
        page: Pagination,
    ) -> Result<Value, HttpError> {
        self.get(format!("shops/{shop_id}/transactions"), page.to_query())
            .await
    }
}
