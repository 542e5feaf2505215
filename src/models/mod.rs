//! Request objects for the mutating Etsy API endpoints.
//!
//! Each request type is a plain struct of optional fields. Before it can be
//! handed to an endpoint it has to pass [`Request::validate`], which checks
//! that every mandatory field is set and wraps the request in
//! [`Validated`]:
//!
//! ```rust
//! use etsy_api::enums::{WhenMade, WhoMade};
//! use etsy_api::models::{CreateDraftListingRequest, Request};
//!
//! let request = CreateDraftListingRequest {
//!     quantity: Some(5),
//!     title: Some("Stoneware mug".to_string()),
//!     description: Some("Wheel thrown".to_string()),
//!     price: Some(28.0),
//!     who_made: Some(WhoMade::IDid),
//!     when_made: Some(WhenMade::MadeToOrder),
//!     taxonomy_id: Some(1069),
//!     tags: Some(vec![]),
//!     ..Default::default()
//! }
//! .validate()
//! .unwrap();
//!
//! let body = request.to_map();
//! assert_eq!(body["who_made"], "i_did");
//! assert!(body["tags"].is_null());
//! ```
//!
//! Upload requests are sent as multipart forms instead; see
//! [`MultipartRequest`].

mod inventory;
mod listing;
mod receipt;
mod serializer;
mod shop;
mod upload;

use std::ops::Deref;

use serde_json::Value;

use crate::clients::RequestBody;
use crate::error::ValidationError;

pub use inventory::{Product, UpdateListingInventoryRequest, UpdateVariationImagesRequest};
pub use listing::{
    CreateDraftListingRequest, CreateListingTranslationRequest, UpdateListingImageIdRequest,
    UpdateListingPropertyRequest, UpdateListingRequest, UpdateListingTranslationRequest,
};
pub use receipt::{CreateReceiptShipmentRequest, UpdateShopReceiptRequest};
pub use serializer::{serialize, JsonObject};
pub use shop::{CreateShopSectionRequest, UpdateShopRequest, UpdateShopSectionRequest};
pub use upload::{
    MultipartRequest, UploadListingFileRequest, UploadListingImageRequest,
    UploadListingVideoRequest,
};

/// A request object with declared field metadata.
///
/// Implementors list their fields explicitly in [`fields`](Self::fields),
/// using their internal names. `MANDATORY` and `NULLABLE` refer to those
/// names.
pub trait Request: Sized {
    /// Type name used in validation errors.
    const NAME: &'static str;

    /// Fields that must be set for the request to be valid.
    const MANDATORY: &'static [&'static str];

    /// Fields whose empty value is sent as an explicit `null`.
    const NULLABLE: &'static [&'static str];

    /// Returns every field with its current value, in declaration order.
    fn fields(&self) -> Vec<(&'static str, Option<Value>)>;

    /// Checks the mandatory fields and wraps the request.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingMandatoryField`] naming the first
    /// mandatory field that is unset.
    fn validate(self) -> Result<Validated<Self>, ValidationError> {
        Validated::new(self)
    }
}

/// A request whose mandatory fields are known to be set.
#[derive(Clone, Debug, PartialEq)]
pub struct Validated<R>(R);

impl<R: Request> Validated<R> {
    /// Validates `request`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingMandatoryField`] naming the first
    /// mandatory field that is unset.
    pub fn new(request: R) -> Result<Self, ValidationError> {
        let fields = request.fields();

        for &mandatory in R::MANDATORY {
            let is_set = fields
                .iter()
                .any(|(name, value)| *name == mandatory && value.is_some());
            if !is_set {
                return Err(ValidationError::MissingMandatoryField {
                    request: R::NAME,
                    field: mandatory,
                });
            }
        }

        Ok(Self(request))
    }

    /// Returns the JSON body for this request.
    #[must_use]
    pub fn to_map(&self) -> JsonObject {
        serialize(&self.0)
    }

    /// Unwraps the request.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<R> Deref for Validated<R> {
    type Target = R;

    fn deref(&self) -> &R {
        &self.0
    }
}

impl<R: Request> From<Validated<R>> for RequestBody {
    fn from(request: Validated<R>) -> Self {
        Self::Json(request.to_map())
    }
}
