//! Receipt request objects.

use serde_json::Value;

use crate::models::serializer::field;
use crate::models::Request;

/// Body of `create_receipt_shipment`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreateReceiptShipmentRequest {
    /// Carrier tracking code.
    pub tracking_code: Option<String>,
    /// Carrier name as accepted by Etsy, e.g. `usps` or `royal-mail`.
    pub carrier_name: Option<String>,
    /// Whether to copy the shipping notification to the seller.
    pub send_bcc: Option<bool>,
    /// Message included in the shipping notification.
    pub note_to_buyer: Option<String>,
}

impl Request for CreateReceiptShipmentRequest {
    const NAME: &'static str = "CreateReceiptShipmentRequest";
    const MANDATORY: &'static [&'static str] = &[];
    const NULLABLE: &'static [&'static str] = &[];

    fn fields(&self) -> Vec<(&'static str, Option<Value>)> {
        vec![
            ("tracking_code", field(&self.tracking_code)),
            ("carrier_name", field(&self.carrier_name)),
            ("send_bcc", field(&self.send_bcc)),
            ("note_to_buyer", field(&self.note_to_buyer)),
        ]
    }
}

/// Body of `update_shop_receipt`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateShopReceiptRequest {
    /// Whether the order has shipped.
    pub was_shipped: Option<bool>,
    /// Whether the order has been paid.
    pub was_paid: Option<bool>,
}

impl Request for UpdateShopReceiptRequest {
    const NAME: &'static str = "UpdateShopReceiptRequest";
    const MANDATORY: &'static [&'static str] = &[];
    const NULLABLE: &'static [&'static str] = &["was_shipped", "was_paid"];

    fn fields(&self) -> Vec<(&'static str, Option<Value>)> {
        vec![
            ("was_shipped", field(&self.was_shipped)),
            ("was_paid", field(&self.was_paid)),
        ]
    }
}
