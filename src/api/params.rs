//! Query parameters of the list and search endpoints.
//!
//! Every field is optional; unset fields are left out of the query string.

use crate::clients::QueryParams;
use crate::enums::{Includes, ListingState, SortOn, SortOrder};

/// Page window shared by most list endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Maximum number of results to return.
    pub limit: Option<u32>,
    /// Number of results to skip.
    pub offset: Option<u32>,
}

impl Pagination {
    /// Creates a page window.
    #[must_use]
    pub const fn new(limit: u32, offset: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }

    pub(crate) fn to_query(self) -> QueryParams {
        QueryParams::new()
            .param("limit", self.limit)
            .param("offset", self.offset)
    }
}

/// Parameters for `get_listings_by_shop`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingsByShopParams {
    /// Only listings in this state.
    pub state: Option<ListingState>,
    /// Maximum number of results to return.
    pub limit: Option<u32>,
    /// Number of results to skip.
    pub offset: Option<u32>,
    /// Sort key.
    pub sort_on: Option<SortOn>,
    /// Sort direction.
    pub sort_order: Option<SortOrder>,
    /// Associations to embed in each result.
    pub includes: Option<Vec<Includes>>,
}

impl ListingsByShopParams {
    pub(crate) fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .param("state", self.state)
            .param("limit", self.limit)
            .param("offset", self.offset)
            .param("sort_on", self.sort_on)
            .param("sort_order", self.sort_order)
            .list("includes", self.includes.as_deref())
    }
}

/// Parameters for `find_all_listings_active`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveListingsParams {
    /// Maximum number of results to return.
    pub limit: Option<u32>,
    /// Number of results to skip.
    pub offset: Option<u32>,
    /// Search terms.
    pub keywords: Option<String>,
    /// Sort key.
    pub sort_on: Option<SortOn>,
    /// Sort direction.
    pub sort_order: Option<SortOrder>,
    /// Lowest price to include.
    pub min_price: Option<f64>,
    /// Highest price to include.
    pub max_price: Option<f64>,
    /// Shop location to filter by.
    pub shop_location: Option<String>,
}

impl ActiveListingsParams {
    pub(crate) fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .param("limit", self.limit)
            .param("offset", self.offset)
            .param("keywords", self.keywords.as_deref())
            .param("sort_on", self.sort_on)
            .param("sort_order", self.sort_order)
            .param("min_price", self.min_price)
            .param("max_price", self.max_price)
            .param("shop_location", self.shop_location.as_deref())
    }
}

/// Parameters for `find_all_active_listings_by_shop`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveListingsByShopParams {
    /// Maximum number of results to return.
    pub limit: Option<u32>,
    /// Sort key.
    pub sort_on: Option<SortOn>,
    /// Sort direction.
    pub sort_order: Option<SortOrder>,
    /// Number of results to skip.
    pub offset: Option<u32>,
    /// Search terms.
    pub keywords: Option<String>,
}

impl ActiveListingsByShopParams {
    pub(crate) fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .param("limit", self.limit)
            .param("sort_on", self.sort_on)
            .param("sort_order", self.sort_order)
            .param("offset", self.offset)
            .param("keywords", self.keywords.as_deref())
    }
}

/// Parameters for `get_listings_by_shop_section_id`, besides the section ids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShopSectionListingsParams {
    /// Maximum number of results to return.
    pub limit: Option<u32>,
    /// Number of results to skip.
    pub offset: Option<u32>,
    /// Sort key.
    pub sort_on: Option<SortOn>,
    /// Sort direction.
    pub sort_order: Option<SortOrder>,
}

/// Parameters for `get_shop_receipts`.
///
/// The default asks for paid receipts that have not shipped yet, which is
/// the fulfilment queue of a shop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopReceiptsParams {
    /// Maximum number of results to return.
    pub limit: Option<u32>,
    /// Number of results to skip.
    pub offset: Option<u32>,
    /// Only paid (or unpaid) receipts.
    pub was_paid: Option<bool>,
    /// Only shipped (or unshipped) receipts.
    pub was_shipped: Option<bool>,
    /// Only receipts that were (or were not) canceled.
    pub was_canceled: Option<bool>,
    /// Earliest creation time, as epoch seconds.
    pub min_created: Option<i64>,
    /// Latest creation time, as epoch seconds.
    pub max_created: Option<i64>,
    /// Earliest modification time, as epoch seconds.
    pub min_last_modified: Option<i64>,
    /// Latest modification time, as epoch seconds.
    pub max_last_modified: Option<i64>,
    /// Sort key, e.g. `created`, `updated` or `receipt_id`.
    pub sort_on: Option<String>,
    /// Sort direction, e.g. `asc` or `desc`.
    pub sort_order: Option<String>,
    /// Only receipts that were (or were not) delivered.
    pub was_delivered: Option<bool>,
}

impl Default for ShopReceiptsParams {
    fn default() -> Self {
        Self {
            limit: None,
            offset: None,
            was_paid: Some(true),
            was_shipped: Some(false),
            was_canceled: None,
            min_created: None,
            max_created: None,
            min_last_modified: None,
            max_last_modified: None,
            sort_on: None,
            sort_order: None,
            was_delivered: None,
        }
    }
}

impl ShopReceiptsParams {
    pub(crate) fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .param("limit", self.limit)
            .param("offset", self.offset)
            .param("was_paid", self.was_paid)
            .param("was_shipped", self.was_shipped)
            .param("was_canceled", self.was_canceled)
            .param("min_created", self.min_created)
            .param("max_created", self.max_created)
            .param("min_last_modified", self.min_last_modified)
            .param("max_last_modified", self.max_last_modified)
            .param("sort_on", self.sort_on.as_deref())
            .param("sort_order", self.sort_order.as_deref())
            .param("was_delivered", self.was_delivered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::build_query;

    #[test]
    fn test_pagination_query() {
        assert_eq!(build_query("x", &Pagination::default().to_query()), "x");
        assert_eq!(
            build_query("x", &Pagination::new(25, 50).to_query()),
            "x?limit=25&offset=50"
        );
    }

    #[test]
    fn test_listings_by_shop_query() {
        let params = ListingsByShopParams {
            state: Some(ListingState::Draft),
            sort_order: Some(SortOrder::Desc),
            includes: Some(vec![Includes::Images, Includes::Inventory]),
            ..Default::default()
        };

        assert_eq!(
            build_query("x", &params.to_query()),
            "x?state=draft&sort_order=desc&includes=Images,Inventory"
        );
    }

    #[test]
    fn test_active_listings_query_encodes_keywords() {
        let params = ActiveListingsParams {
            keywords: Some("blue mug".to_string()),
            min_price: Some(10.5),
            ..Default::default()
        };

        assert_eq!(
            build_query("x", &params.to_query()),
            "x?keywords=blue%20mug&min_price=10.5"
        );
    }

    #[test]
    fn test_shop_receipts_default_filters_fulfilment_queue() {
        assert_eq!(
            build_query("x", &ShopReceiptsParams::default().to_query()),
            "x?was_paid=true&was_shipped=false"
        );
    }
}
