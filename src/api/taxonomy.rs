//! Buyer and seller taxonomy endpoints.

use serde_json::Value;

use crate::api::EtsyApi;
use crate::clients::{HttpError, QueryParams};

impl EtsyApi {
    /// Returns the full buyer taxonomy tree.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_buyer_taxonomy_nodes(&self) -> Result<Value, HttpError> {
        self.get("buyer-taxonomy/nodes".to_string(), QueryParams::new())
            .await
    }

    /// Returns the product properties of a buyer taxonomy node.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_properties_by_buyer_taxonomy_id(
        &self,
        taxonomy_id: u64,
    ) -> Result<Value, HttpError> {
        self.get(
            format!("buyer-taxonomy/nodes/{taxonomy_id}/properties"),
            QueryParams::new(),
        )
        .await
    }

    /// Returns the full seller taxonomy tree.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_seller_taxonomy_nodes(&self) -> Result<Value, HttpError> {
        self.get("seller-taxonomy/nodes".to_string(), QueryParams::new())
            .await
    }

    /// Returns the product properties of a seller taxonomy node.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_properties_by_taxonomy_id(
        &self,
        taxonomy_id: u64,
    ) -> Result<Value, HttpError> {
        self.get(
            format!("seller-taxonomy/nodes/{taxonomy_id}/properties"),
            QueryParams::new(),
        )
        .await
    }
}
