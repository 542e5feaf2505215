//! Inventory and variation-image request objects.
//!
//! Both request types can be built from the matching GET response, so a
//! caller can fetch the current state, edit it and send it back.

use serde_json::Value;

use crate::error::ValidationError;
use crate::models::serializer::{field, nested, objects, JsonObject};
use crate::models::{Request, Validated};

/// Keys of a property value that the inventory update rejects.
const READ_ONLY_PROPERTY_KEYS: &[&str] = &["scale_name", "value_pairs"];

/// Keys of an offering that the inventory update rejects.
const READ_ONLY_OFFERING_KEYS: &[&str] = &["is_deleted", "offering_id"];

/// A product of a listing's inventory.
///
/// Property values and offerings are passed through as JSON objects.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Product {
    /// Stock keeping unit.
    pub sku: Option<String>,
    /// Variation property values of the product.
    pub property_values: Option<Vec<JsonObject>>,
    /// Price, quantity and availability of the product.
    pub offerings: Option<Vec<JsonObject>>,
}

impl Request for Product {
    const NAME: &'static str = "Product";
    const MANDATORY: &'static [&'static str] = &[];
    const NULLABLE: &'static [&'static str] = &[];

    fn fields(&self) -> Vec<(&'static str, Option<Value>)> {
        vec![
            ("sku", field(&self.sku)),
            ("property_values", objects(&self.property_values)),
            ("offerings", objects(&self.offerings)),
        ]
    }
}

/// Body of `update_listing_inventory`. `products` is mandatory.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateListingInventoryRequest {
    /// Every product of the listing's inventory.
    pub products: Option<Vec<Product>>,
    /// Properties that set the price.
    pub price_on_property: Option<Vec<u64>>,
    /// Properties that set the quantity.
    pub quantity_on_property: Option<Vec<u64>>,
    /// Properties that set the SKU.
    pub sku_on_property: Option<Vec<u64>>,
}

impl Request for UpdateListingInventoryRequest {
    const NAME: &'static str = "UpdateListingInventoryRequest";
    const MANDATORY: &'static [&'static str] = &["products"];
    const NULLABLE: &'static [&'static str] = &[];

    fn fields(&self) -> Vec<(&'static str, Option<Value>)> {
        vec![
            ("products", nested(&self.products)),
            ("price_on_property", field(&self.price_on_property)),
            ("quantity_on_property", field(&self.quantity_on_property)),
            ("sku_on_property", field(&self.sku_on_property)),
        ]
    }
}

impl UpdateListingInventoryRequest {
    /// Builds an update from a `get_listing_inventory` response.
    ///
    /// Read-only keys are dropped: `scale_name` and `value_pairs` from each
    /// property value, `is_deleted` and `offering_id` from each offering,
    /// and `product_id` and `is_deleted` from each product. Each offering
    /// price object `{amount, divisor, ...}` becomes the decimal
    /// `amount / divisor`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedResponse`] if a required key is
    /// missing or has the wrong shape, or a price divisor is zero.
    pub fn from_inventory_response(
        response: &Value,
    ) -> Result<Validated<Self>, ValidationError> {
        let products = array(response, "products")?
            .iter()
            .map(product_from_response)
            .collect::<Result<Vec<_>, _>>()?;

        Self {
            products: Some(products),
            price_on_property: id_list(response, "price_on_property")?,
            quantity_on_property: id_list(response, "quantity_on_property")?,
            sku_on_property: id_list(response, "sku_on_property")?,
        }
        .validate()
    }
}

fn product_from_response(product: &Value) -> Result<Product, ValidationError> {
    let property_values = array(product, "property_values")?
        .iter()
        .map(|value| -> Result<JsonObject, ValidationError> {
            let mut value = object(value, "property value")?;
            strip(&mut value, READ_ONLY_PROPERTY_KEYS);
            Ok(value)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let offerings = array(product, "offerings")?
        .iter()
        .map(offering_from_response)
        .collect::<Result<Vec<_>, _>>()?;

    let sku = match product.get("sku") {
        Some(Value::String(sku)) => Some(sku.clone()),
        Some(Value::Null) | None => None,
        Some(_) => return Err(malformed("'sku' is not a string")),
    };

    Ok(Product {
        sku,
        property_values: Some(property_values),
        offerings: Some(offerings),
    })
}

fn offering_from_response(offering: &Value) -> Result<JsonObject, ValidationError> {
    let mut offering = object(offering, "offering")?;
    strip(&mut offering, READ_ONLY_OFFERING_KEYS);

    let price = offering
        .get("price")
        .ok_or_else(|| malformed("offering has no 'price'"))?;
    let amount = price
        .get("amount")
        .and_then(Value::as_f64)
        .ok_or_else(|| malformed("price has no numeric 'amount'"))?;
    let divisor = price
        .get("divisor")
        .and_then(Value::as_f64)
        .ok_or_else(|| malformed("price has no numeric 'divisor'"))?;
    if divisor.abs() < f64::EPSILON {
        return Err(malformed("price divisor is zero"));
    }

    offering.insert("price".to_string(), Value::from(amount / divisor));
    Ok(offering)
}

/// Body of `update_variation_images`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateVariationImagesRequest {
    /// Entries of `{property_id, value_id, image_id}`.
    pub variation_images: Option<Vec<JsonObject>>,
}

impl Request for UpdateVariationImagesRequest {
    const NAME: &'static str = "UpdateVariationImagesRequest";
    const MANDATORY: &'static [&'static str] = &[];
    const NULLABLE: &'static [&'static str] = &[];

    fn fields(&self) -> Vec<(&'static str, Option<Value>)> {
        vec![("variation_images", objects(&self.variation_images))]
    }
}

impl UpdateVariationImagesRequest {
    /// Builds an update from a `get_variation_images` response, dropping the
    /// read-only `value` key of each entry.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedResponse`] if `results` is missing
    /// or holds something other than objects.
    pub fn from_variation_images_response(
        response: &Value,
    ) -> Result<Validated<Self>, ValidationError> {
        let variation_images = array(response, "results")?
            .iter()
            .map(|entry| -> Result<JsonObject, ValidationError> {
                let mut entry = object(entry, "variation image")?;
                entry.remove("value");
                Ok(entry)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self {
            variation_images: Some(variation_images),
        }
        .validate()
    }
}

fn malformed(reason: impl Into<String>) -> ValidationError {
    ValidationError::MalformedResponse {
        reason: reason.into(),
    }
}

fn array<'a>(value: &'a Value, key: &str) -> Result<&'a Vec<Value>, ValidationError> {
    value
        .get(key)
        .and_then(Value::as_array)
        .ok_or_else(|| malformed(format!("'{key}' is missing or not an array")))
}

fn object(value: &Value, what: &str) -> Result<JsonObject, ValidationError> {
    value
        .as_object()
        .cloned()
        .ok_or_else(|| malformed(format!("{what} is not an object")))
}

fn strip(object: &mut JsonObject, keys: &[&str]) {
    for key in keys {
        object.remove(*key);
    }
}

fn id_list(value: &Value, key: &str) -> Result<Option<Vec<u64>>, ValidationError> {
    match value.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_u64()
                    .ok_or_else(|| malformed(format!("'{key}' holds a non-integer")))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        Some(_) => Err(malformed(format!("'{key}' is not an array"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn inventory_response() -> Value {
        json!({
            "products": [{
                "product_id": 3,
                "sku": "MUG-BLUE",
                "is_deleted": false,
                "property_values": [{
                    "property_id": 200,
                    "property_name": "Primary color",
                    "scale_id": null,
                    "scale_name": null,
                    "value_ids": [1],
                    "values": ["Blue"],
                    "value_pairs": [{"value_id": 1, "value": "Blue"}]
                }],
                "offerings": [{
                    "offering_id": 9,
                    "quantity": 4,
                    "is_enabled": true,
                    "is_deleted": false,
                    "price": {"amount": 1250, "divisor": 100, "currency_code": "USD"}
                }]
            }],
            "price_on_property": [200],
            "quantity_on_property": [],
            "sku_on_property": [200]
        })
    }

    #[test]
    fn test_inventory_response_is_reshaped() {
        let request =
            UpdateListingInventoryRequest::from_inventory_response(&inventory_response()).unwrap();

        assert_eq!(
            Value::Object(request.to_map()),
            json!({
                "products": [{
                    "sku": "MUG-BLUE",
                    "property_values": [{
                        "property_id": 200,
                        "property_name": "Primary color",
                        "scale_id": null,
                        "value_ids": [1],
                        "values": ["Blue"]
                    }],
                    "offerings": [{
                        "quantity": 4,
                        "is_enabled": true,
                        "price": 12.5
                    }]
                }],
                "price_on_property": [200],
                "quantity_on_property": [],
                "sku_on_property": [200]
            })
        );
    }

    #[test]
    fn test_inventory_zero_divisor_is_rejected() {
        let mut response = inventory_response();
        response["products"][0]["offerings"][0]["price"]["divisor"] = json!(0);

        let error = UpdateListingInventoryRequest::from_inventory_response(&response).unwrap_err();
        assert!(matches!(error, ValidationError::MalformedResponse { .. }));

        response["products"][0]["offerings"][0]["price"]["divisor"] = json!(0.0);
        let error = UpdateListingInventoryRequest::from_inventory_response(&response).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Cannot build request from response: price divisor is zero"
        );
    }

    #[test]
    fn test_inventory_without_products_is_rejected() {
        let error =
            UpdateListingInventoryRequest::from_inventory_response(&json!({})).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Cannot build request from response: 'products' is missing or not an array"
        );
    }

    #[test]
    fn test_inventory_requires_products() {
        let result = UpdateListingInventoryRequest::default().validate();
        assert!(matches!(
            result,
            Err(ValidationError::MissingMandatoryField { field: "products", .. })
        ));
    }

    #[test]
    fn test_variation_images_drop_value() {
        let response = json!({
            "count": 1,
            "results": [{"property_id": 200, "value_id": 1, "value": "Blue", "image_id": 55}]
        });

        let request =
            UpdateVariationImagesRequest::from_variation_images_response(&response).unwrap();

        assert_eq!(
            Value::Object(request.to_map()),
            json!({"variation_images": [{"property_id": 200, "value_id": 1, "image_id": 55}]})
        );
    }

    #[test]
    fn test_variation_images_without_results_is_rejected() {
        assert!(
            UpdateVariationImagesRequest::from_variation_images_response(&json!({"count": 0}))
                .is_err()
        );
    }
}
