//! Payments and the payment account ledger.

use serde_json::Value;

use crate::api::params::Pagination;
use crate::api::EtsyApi;
use crate::clients::{HttpError, QueryParams};

impl EtsyApi {
    /// Returns one entry of the shop's payment account ledger.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_shop_payment_account_ledger_entry(
        &self,
        shop_id: u64,
        ledger_entry_id: u64,
    ) -> Result<Value, HttpError> {
        self.get(
            format!("shops/{shop_id}/payment-account/ledger-entries/{ledger_entry_id}"),
            QueryParams::new(),
        )
        .await
    }

    /// Returns the ledger entries created between two epoch timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_shop_payment_account_ledger_entries(
        &self,
        shop_id: u64,
        min_created: i64,
        max_created: i64,
        page: Pagination,
    ) -> Result<Value, HttpError> {
        let query = QueryParams::new()
            .param("min_created", Some(min_created))
            .param("max_created", Some(max_created))
            .param("limit", page.limit)
            .param("offset", page.offset);
        self.get(
            format!("shops/{shop_id}/payment-account/ledger-entries"),
            query,
        )
        .await
    }

    /// Returns the payments behind a set of ledger entries.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_payment_account_ledger_entry_payments(
        &self,
        shop_id: u64,
        ledger_entry_ids: &[u64],
    ) -> Result<Value, HttpError> {
        self.get(
            format!("shops/{shop_id}/payment-account/ledger-entries/payments"),
            QueryParams::new().list("ledger_entry_ids", Some(ledger_entry_ids)),
        )
        .await
    }

    /// Returns the payments of a receipt.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_shop_payment_by_receipt_id(
        &self,
        shop_id: u64,
        receipt_id: u64,
    ) -> Result<Value, HttpError> {
        self.get(
            format!("shops/{shop_id}/receipts/{receipt_id}/payments"),
            QueryParams::new(),
        )
        .await
    }

    /// Returns several payments by id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_payments(
        &self,
        shop_id: u64,
        payment_ids: &[u64],
    ) -> Result<Value, HttpError> {
        self.get(
            format!("shops/{shop_id}/payments"),
            QueryParams::new().list("payment_ids", Some(payment_ids)),
        )
        .await
    }
}
