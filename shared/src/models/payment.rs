//! PayPal proxy DTOs
//!
//! The backend proxies order creation and capture; these are the
//! request/response shapes of that proxy, not the provider protocol.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Create-order request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayPalOrderRequest {
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub amount: Decimal,
    pub currency: String,
    pub cart_id: i64,
}

/// Created order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayPalOrder {
    pub order_id: String,
}

/// Capture result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PayPalCapture {
    #[serde(default)]
    pub status: Option<String>,
}
