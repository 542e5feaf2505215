//! Listing request objects.

use serde_json::Value;

use crate::enums::{
    ItemDimensionsUnit, ItemWeightUnit, ListingRequestState, ListingType, WhenMade, WhoMade,
};
use crate::models::serializer::field;
use crate::models::Request;

/// Body of `create_draft_listing`.
///
/// `quantity`, `title`, `description`, `price`, `who_made`, `when_made` and
/// `taxonomy_id` are mandatory. Clearing a nullable field (an empty list, an
/// empty string, zero or `false`) sends it as `null`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateDraftListingRequest {
    /// Number of items available for sale.
    pub quantity: Option<u32>,
    /// Listing title.
    pub title: Option<String>,
    /// Listing description.
    pub description: Option<String>,
    /// Price of the listing in the shop's currency.
    pub price: Option<f64>,
    /// Who made the item.
    pub who_made: Option<WhoMade>,
    /// When the item was made.
    pub when_made: Option<WhenMade>,
    /// Seller taxonomy node the listing belongs to.
    pub taxonomy_id: Option<u64>,
    /// Shipping profile applied to the listing.
    pub shipping_profile_id: Option<u64>,
    /// Materials the item is made of.
    pub materials: Option<Vec<String>>,
    /// Shop section the listing is shown in.
    pub shop_section_id: Option<u64>,
    /// Minimum processing time in days.
    pub processing_min: Option<u32>,
    /// Maximum processing time in days.
    pub processing_max: Option<u32>,
    /// Search tags.
    pub tags: Option<Vec<String>>,
    /// Style keywords.
    pub styles: Option<Vec<String>>,
    /// Weight of the item, in `item_weight_unit`.
    pub item_weight: Option<f64>,
    /// Length of the item, in `item_dimensions_unit`.
    pub item_length: Option<f64>,
    /// Width of the item, in `item_dimensions_unit`.
    pub item_width: Option<f64>,
    /// Height of the item, in `item_dimensions_unit`.
    pub item_height: Option<f64>,
    /// Unit of `item_weight`.
    pub item_weight_unit: Option<ItemWeightUnit>,
    /// Unit of the length, width and height.
    pub item_dimensions_unit: Option<ItemDimensionsUnit>,
    /// Whether buyers can personalize the item.
    pub is_personalizable: Option<bool>,
    /// Whether personalization is required to buy.
    pub personalization_is_required: Option<bool>,
    /// Maximum length of the personalization text.
    pub personalization_char_count_max: Option<u32>,
    /// Instructions shown to buyers for personalization.
    pub personalization_instructions: Option<String>,
    /// Production partners involved in making the item.
    pub production_partner_ids: Option<Vec<u64>>,
    /// Shop images to attach, in display order.
    pub image_ids: Option<Vec<u64>>,
    /// Whether the item is a craft supply.
    pub is_supply: Option<bool>,
    /// Whether the buyer can request customization.
    pub is_customizable: Option<bool>,
    /// Whether the listing renews automatically on expiry.
    pub should_auto_renew: Option<bool>,
    /// Whether sales tax applies.
    pub is_taxable: Option<bool>,
    /// Sent as `type`.
    pub listing_type: Option<ListingType>,
}

impl Request for CreateDraftListingRequest {
    const NAME: &'static str = "CreateDraftListingRequest";

    const MANDATORY: &'static [&'static str] = &[
        "quantity",
        "title",
        "description",
        "price",
        "who_made",
        "when_made",
        "taxonomy_id",
    ];

    const NULLABLE: &'static [&'static str] = &[
        "shipping_profile_id",
        "materials",
        "shop_section_id",
        "processing_min",
        "processing_max",
        "tags",
        "styles",
        "item_weight",
        "item_length",
        "item_width",
        "item_height",
        "item_weight_unit",
        "item_dimensions_unit",
        "production_partner_ids",
        "image_ids",
    ];

    fn fields(&self) -> Vec<(&'static str, Option<Value>)> {
        vec![
            ("quantity", field(&self.quantity)),
            ("title", field(&self.title)),
            ("description", field(&self.description)),
            ("price", field(&self.price)),
            ("who_made", field(&self.who_made)),
            ("when_made", field(&self.when_made)),
            ("taxonomy_id", field(&self.taxonomy_id)),
            ("shipping_profile_id", field(&self.shipping_profile_id)),
            ("materials", field(&self.materials)),
            ("shop_section_id", field(&self.shop_section_id)),
            ("processing_min", field(&self.processing_min)),
            ("processing_max", field(&self.processing_max)),
            ("tags", field(&self.tags)),
            ("styles", field(&self.styles)),
            ("item_weight", field(&self.item_weight)),
            ("item_length", field(&self.item_length)),
            ("item_width", field(&self.item_width)),
            ("item_height", field(&self.item_height)),
            ("item_weight_unit", field(&self.item_weight_unit)),
            ("item_dimensions_unit", field(&self.item_dimensions_unit)),
            ("is_personalizable", field(&self.is_personalizable)),
            (
                "personalization_is_required",
                field(&self.personalization_is_required),
            ),
            (
                "personalization_char_count_max",
                field(&self.personalization_char_count_max),
            ),
            (
                "personalization_instructions",
                field(&self.personalization_instructions),
            ),
            ("production_partner_ids", field(&self.production_partner_ids)),
            ("image_ids", field(&self.image_ids)),
            ("is_supply", field(&self.is_supply)),
            ("is_customizable", field(&self.is_customizable)),
            ("should_auto_renew", field(&self.should_auto_renew)),
            ("is_taxable", field(&self.is_taxable)),
            ("listing_type", field(&self.listing_type)),
        ]
    }
}

/// Body of `update_listing`. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateListingRequest {
    /// Shop images to attach, in display order.
    pub image_ids: Option<Vec<u64>>,
    /// Listing title.
    pub title: Option<String>,
    /// Listing description.
    pub description: Option<String>,
    /// Materials the item is made of.
    pub materials: Option<Vec<String>>,
    /// Whether the listing renews automatically on expiry.
    pub should_auto_renew: Option<bool>,
    /// Shipping profile applied to the listing.
    pub shipping_profile_id: Option<u64>,
    /// Shop section the listing is shown in.
    pub shop_section_id: Option<u64>,
    /// Weight of the item, in `item_weight_unit`.
    pub item_weight: Option<f64>,
    /// Length of the item, in `item_dimensions_unit`.
    pub item_length: Option<f64>,
    /// Width of the item, in `item_dimensions_unit`.
    pub item_width: Option<f64>,
    /// Height of the item, in `item_dimensions_unit`.
    pub item_height: Option<f64>,
    /// Unit of `item_weight`.
    pub item_weight_unit: Option<ItemWeightUnit>,
    /// Unit of the length, width and height.
    pub item_dimensions_unit: Option<ItemDimensionsUnit>,
    /// Whether sales tax applies.
    pub is_taxable: Option<bool>,
    /// Seller taxonomy node the listing belongs to.
    pub taxonomy_id: Option<u64>,
    /// Search tags.
    pub tags: Option<Vec<String>>,
    /// Who made the item.
    pub who_made: Option<WhoMade>,
    /// When the item was made.
    pub when_made: Option<WhenMade>,
    /// Position among the shop's featured listings.
    pub featured_rank: Option<i64>,
    /// Whether buyers can personalize the item.
    pub is_personalizable: Option<bool>,
    /// Whether personalization is required to buy.
    pub personalization_is_required: Option<bool>,
    /// Maximum length of the personalization text.
    pub personalization_char_count_max: Option<u32>,
    /// Instructions shown to buyers for personalization.
    pub personalization_instructions: Option<String>,
    /// State to move the listing to.
    pub state: Option<ListingRequestState>,
    /// Whether the item is a craft supply.
    pub is_supply: Option<bool>,
    /// Production partners involved in making the item.
    pub production_partner_ids: Option<Vec<u64>>,
    /// Sent as `type`.
    pub listing_type: Option<ListingType>,
}

impl Request for UpdateListingRequest {
    const NAME: &'static str = "UpdateListingRequest";

    const MANDATORY: &'static [&'static str] = &[];

    const NULLABLE: &'static [&'static str] = &[
        "materials",
        "shipping_profile_id",
        "shop_section_id",
        "item_weight",
        "item_length",
        "item_width",
        "item_height",
        "item_weight_unit",
        "item_dimensions_unit",
        "tags",
        "featured_rank",
        "production_partner_ids",
        "listing_type",
    ];

    fn fields(&self) -> Vec<(&'static str, Option<Value>)> {
        vec![
            ("image_ids", field(&self.image_ids)),
            ("title", field(&self.title)),
            ("description", field(&self.description)),
            ("materials", field(&self.materials)),
            ("should_auto_renew", field(&self.should_auto_renew)),
            ("shipping_profile_id", field(&self.shipping_profile_id)),
            ("shop_section_id", field(&self.shop_section_id)),
            ("item_weight", field(&self.item_weight)),
            ("item_length", field(&self.item_length)),
            ("item_width", field(&self.item_width)),
            ("item_height", field(&self.item_height)),
            ("item_weight_unit", field(&self.item_weight_unit)),
            ("item_dimensions_unit", field(&self.item_dimensions_unit)),
            ("is_taxable", field(&self.is_taxable)),
            ("taxonomy_id", field(&self.taxonomy_id)),
            ("tags", field(&self.tags)),
            ("who_made", field(&self.who_made)),
            ("when_made", field(&self.when_made)),
            ("featured_rank", field(&self.featured_rank)),
            ("is_personalizable", field(&self.is_personalizable)),
            (
                "personalization_is_required",
                field(&self.personalization_is_required),
            ),
            (
                "personalization_char_count_max",
                field(&self.personalization_char_count_max),
            ),
            (
                "personalization_instructions",
                field(&self.personalization_instructions),
            ),
            ("state", field(&self.state)),
            ("is_supply", field(&self.is_supply)),
            ("production_partner_ids", field(&self.production_partner_ids)),
            ("listing_type", field(&self.listing_type)),
        ]
    }
}

/// Body of `update_listing_property`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateListingPropertyRequest {
    /// Property value ids.
    pub value_ids: Option<Vec<u64>>,
    /// Property values, parallel to `value_ids`.
    pub values: Option<Vec<String>>,
    /// Scale the values are expressed in.
    pub scale_id: Option<u64>,
}

impl Request for UpdateListingPropertyRequest {
    const NAME: &'static str = "UpdateListingPropertyRequest";
    const MANDATORY: &'static [&'static str] = &["value_ids", "values"];
    const NULLABLE: &'static [&'static str] = &[];

    fn fields(&self) -> Vec<(&'static str, Option<Value>)> {
        vec![
            ("value_ids", field(&self.value_ids)),
            ("values", field(&self.values)),
            ("scale_id", field(&self.scale_id)),
        ]
    }
}

/// Body of `update_listing_image_id`, which attaches an existing image.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateListingImageIdRequest {
    /// Id of the listing image.
    pub listing_image_id: Option<u64>,
    /// Display position, starting at 1.
    pub rank: Option<u32>,
    /// Whether to replace the image currently at `rank`.
    pub overwrite: Option<bool>,
    /// Whether the image is watermarked.
    pub is_watermarked: Option<bool>,
    /// Alternative text for the image.
    pub alt_text: Option<String>,
}

impl Request for UpdateListingImageIdRequest {
    const NAME: &'static str = "UpdateListingImageIdRequest";
    const MANDATORY: &'static [&'static str] = &["listing_image_id"];
    const NULLABLE: &'static [&'static str] = &[];

    fn fields(&self) -> Vec<(&'static str, Option<Value>)> {
        vec![
            ("listing_image_id", field(&self.listing_image_id)),
            ("rank", field(&self.rank)),
            ("overwrite", field(&self.overwrite)),
            ("is_watermarked", field(&self.is_watermarked)),
            ("alt_text", field(&self.alt_text)),
        ]
    }
}

/// Body of `create_listing_translation`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreateListingTranslationRequest {
    /// Translated title.
    pub title: Option<String>,
    /// Translated description.
    pub description: Option<String>,
    /// Translated tags.
    pub tags: Option<Vec<String>>,
}

impl Request for CreateListingTranslationRequest {
    const NAME: &'static str = "CreateListingTranslationRequest";
    const MANDATORY: &'static [&'static str] = &["title", "description"];
    const NULLABLE: &'static [&'static str] = &[];

    fn fields(&self) -> Vec<(&'static str, Option<Value>)> {
        vec![
            ("title", field(&self.title)),
            ("description", field(&self.description)),
            ("tags", field(&self.tags)),
        ]
    }
}

/// Body of `update_listing_translation`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateListingTranslationRequest {
    /// Translated title.
    pub title: Option<String>,
    /// Translated description.
    pub description: Option<String>,
    /// Translated tags.
    pub tags: Option<Vec<String>>,
}

impl Request for UpdateListingTranslationRequest {
    const NAME: &'static str = "UpdateListingTranslationRequest";
    const MANDATORY: &'static [&'static str] = &["title", "description"];
    const NULLABLE: &'static [&'static str] = &[];

    fn fields(&self) -> Vec<(&'static str, Option<Value>)> {
        vec![
            ("title", field(&self.title)),
            ("description", field(&self.description)),
            ("tags", field(&self.tags)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use serde_json::json;

    fn draft() -> CreateDraftListingRequest {
        CreateDraftListingRequest {
            quantity: Some(1),
            title: Some("Mug".to_string()),
            description: Some("A mug".to_string()),
            price: Some(12.5),
            who_made: Some(WhoMade::IDid),
            when_made: Some(WhenMade::MadeToOrder),
            taxonomy_id: Some(1069),
            ..Default::default()
        }
    }

    #[test]
    fn test_draft_listing_with_mandatory_fields_serializes() {
        let map = draft().validate().unwrap().to_map();

        assert_eq!(
            Value::Object(map),
            json!({
                "quantity": 1,
                "title": "Mug",
                "description": "A mug",
                "price": 12.5,
                "who_made": "i_did",
                "when_made": "made_to_order",
                "taxonomy_id": 1069
            })
        );
    }

    #[test]
    fn test_draft_listing_without_taxonomy_is_rejected() {
        let request = CreateDraftListingRequest {
            taxonomy_id: None,
            ..draft()
        };

        assert_eq!(
            request.validate().unwrap_err(),
            ValidationError::MissingMandatoryField {
                request: "CreateDraftListingRequest",
                field: "taxonomy_id",
            }
        );
    }

    #[test]
    fn test_draft_listing_without_price_is_rejected() {
        let request = CreateDraftListingRequest {
            price: None,
            ..draft()
        };

        assert!(matches!(
            request.validate(),
            Err(ValidationError::MissingMandatoryField { field: "price", .. })
        ));
    }

    #[test]
    fn test_draft_listing_mandatory_accepts_empty_value() {
        let request = CreateDraftListingRequest {
            title: Some(String::new()),
            ..draft()
        };
        let map = request.validate().unwrap().to_map();
        assert_eq!(map.get("title"), Some(&json!("")));
    }

    #[test]
    fn test_draft_listing_type_and_units() {
        let request = CreateDraftListingRequest {
            listing_type: Some(ListingType::Download),
            item_weight_unit: Some(ItemWeightUnit::Kg),
            item_dimensions_unit: Some(ItemDimensionsUnit::Inches),
            ..draft()
        };
        let map = request.validate().unwrap().to_map();

        assert_eq!(map.get("type"), Some(&json!("download")));
        assert_eq!(map.get("item_weight_unit"), Some(&json!("kg")));
        assert_eq!(map.get("item_dimensions_unit"), Some(&json!("inches")));
        assert!(!map.contains_key("listing_type"));
    }

    #[test]
    fn test_update_listing_clears_nullable_fields() {
        let request = UpdateListingRequest {
            tags: Some(vec![]),
            shop_section_id: Some(0),
            title: Some("Renamed".to_string()),
            ..Default::default()
        };
        let map = request.validate().unwrap().to_map();

        assert_eq!(
            Value::Object(map),
            json!({"title": "Renamed", "shop_section_id": null, "tags": null})
        );
    }

    #[test]
    fn test_update_listing_state_code() {
        let map = UpdateListingRequest {
            state: Some(ListingRequestState::Inactive),
            ..Default::default()
        }
        .validate()
        .unwrap()
        .to_map();

        assert_eq!(map.get("state"), Some(&json!("inactive")));
    }

    #[test]
    fn test_update_listing_property_requires_values() {
        let result = UpdateListingPropertyRequest {
            value_ids: Some(vec![1]),
            ..Default::default()
        }
        .validate();

        assert!(matches!(
            result,
            Err(ValidationError::MissingMandatoryField { field: "values", .. })
        ));
    }

    #[test]
    fn test_update_listing_image_id_requires_id() {
        assert!(UpdateListingImageIdRequest::default().validate().is_err());

        let map = UpdateListingImageIdRequest {
            listing_image_id: Some(77),
            overwrite: Some(true),
            ..Default::default()
        }
        .validate()
        .unwrap()
        .to_map();
        assert_eq!(Value::Object(map), json!({"listing_image_id": 77, "overwrite": true}));
    }

    #[test]
    fn test_translation_requires_title_and_description() {
        let result = CreateListingTranslationRequest {
            title: Some("Tasse".to_string()),
            ..Default::default()
        }
        .validate();
        assert!(matches!(
            result,
            Err(ValidationError::MissingMandatoryField { field: "description", .. })
        ));

        let map = UpdateListingTranslationRequest {
            title: Some("Tasse".to_string()),
            description: Some("Eine Tasse".to_string()),
            tags: Some(vec!["keramik".to_string()]),
        }
        .validate()
        .unwrap()
        .to_map();
        assert_eq!(map.len(), 3);
    }
}
