//! Shop and shop-section request objects.

use serde_json::Value;

use crate::models::serializer::field;
use crate::models::Request;

/// Body of `update_shop`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateShopRequest {
    /// Shop title.
    pub title: Option<String>,
    /// Announcement shown on the shop home page.
    pub announcement: Option<String>,
    /// Message sent to buyers of physical items.
    pub sale_message: Option<String>,
    /// Message sent to buyers of digital items.
    pub digital_sale_message: Option<String>,
    /// Additional shop policies.
    pub policy_additional: Option<String>,
}

impl Request for UpdateShopRequest {
    const NAME: &'static str = "UpdateShopRequest";
    const MANDATORY: &'static [&'static str] = &[];
    const NULLABLE: &'static [&'static str] = &[];

    fn fields(&self) -> Vec<(&'static str, Option<Value>)> {
        vec![
            ("title", field(&self.title)),
            ("announcement", field(&self.announcement)),
            ("sale_message", field(&self.sale_message)),
            ("digital_sale_message", field(&self.digital_sale_message)),
            ("policy_additional", field(&self.policy_additional)),
        ]
    }
}

/// Body of `create_shop_section`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreateShopSectionRequest {
    /// Section title.
    pub title: Option<String>,
}

impl Request for CreateShopSectionRequest {
    const NAME: &'static str = "CreateShopSectionRequest";
    const MANDATORY: &'static [&'static str] = &["title"];
    const NULLABLE: &'static [&'static str] = &[];

    fn fields(&self) -> Vec<(&'static str, Option<Value>)> {
        vec![("title", field(&self.title))]
    }
}

/// Body of `update_shop_section`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateShopSectionRequest {
    /// New section title.
    pub title: Option<String>,
}

impl Request for UpdateShopSectionRequest {
    const NAME: &'static str = "UpdateShopSectionRequest";
    const MANDATORY: &'static [&'static str] = &["title"];
    const NULLABLE: &'static [&'static str] = &[];

    fn fields(&self) -> Vec<(&'static str, Option<Value>)> {
        vec![("title", field(&self.title))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_shop_sends_only_set_fields() {
        let map = UpdateShopRequest {
            announcement: Some("Closed for holidays".to_string()),
            sale_message: Some(String::new()),
            ..Default::default()
        }
        .validate()
        .unwrap()
        .to_map();

        assert_eq!(
            Value::Object(map),
            json!({"announcement": "Closed for holidays", "sale_message": ""})
        );
    }

    #[test]
    fn test_update_shop_section_requires_title() {
        assert!(UpdateShopSectionRequest::default().validate().is_err());
        assert!(UpdateShopSectionRequest {
            title: Some("Bowls".to_string())
        }
        .validate()
        .is_ok());
    }
}
