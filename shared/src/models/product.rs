//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Default currency for a blank product form
pub const DEFAULT_CURRENCY: &str = "USD";

/// Default stock for a blank product form
pub const DEFAULT_STOCK_QUANTITY: i32 = 100;

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub stock_quantity: i32,
    #[serde(default)]
    pub image_url: String,
    /// Free-text grouping label, empty when uncategorised
    #[serde(default)]
    pub category: String,
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

/// Create/update product payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(custom(function = "validate_positive_price"))]
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i32>,
    #[validate(length(min = 1))]
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

fn validate_positive_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price <= Decimal::ZERO {
        return Err(ValidationError::new("positive_price"));
    }
    Ok(())
}

impl Default for ProductRequest {
    /// A blank admin form
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: Decimal::ZERO,
            currency: DEFAULT_CURRENCY.to_string(),
            sku: Some(String::new()),
            stock_quantity: Some(DEFAULT_STOCK_QUANTITY),
            image_url: String::new(),
            category: Some(String::new()),
            active: Some(true),
        }
    }
}

impl From<&Product> for ProductRequest {
    /// Pre-fill the edit form from an existing product
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            currency: product.currency.clone(),
            sku: Some(product.sku.clone()),
            stock_quantity: Some(product.stock_quantity),
            image_url: product.image_url.clone(),
            category: Some(product.category.clone()),
            active: Some(product.active),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            id: 7,
            name: "Red Shoes".into(),
            description: "Leather".into(),
            price: Decimal::new(4999, 2),
            currency: "USD".into(),
            sku: "RS-1".into(),
            stock_quantity: 3,
            image_url: "https://img/rs.png".into(),
            category: "Shoes".into(),
            active: true,
        }
    }

    #[test]
    fn test_product_deserializes_camel_case_with_defaults() {
        let json = r#"{"id":1,"name":"Hat","price":12.5,"imageUrl":"x.png","stockQuantity":4}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.image_url, "x.png");
        assert_eq!(product.stock_quantity, 4);
        assert_eq!(product.category, "");
        assert_eq!(product.price, Decimal::new(125, 1));
        assert!(product.active);
    }

    #[test]
    fn test_blank_form_fails_validation() {
        let form = ProductRequest::default();
        let errors = form.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("description"));
        assert!(fields.contains_key("image_url"));
        assert!(fields.contains_key("price"));
    }

    #[test]
    fn test_edit_form_from_product_is_valid() {
        let form = ProductRequest::from(&product());
        assert!(form.validate().is_ok());
        assert_eq!(form.category.as_deref(), Some("Shoes"));
        assert_eq!(form.stock_quantity, Some(3));
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let value = serde_json::to_value(ProductRequest::from(&product())).unwrap();
        assert_eq!(value["imageUrl"], "https://img/rs.png");
        assert_eq!(value["stockQuantity"], 3);
        assert!(value["price"].is_number());
    }
}
