//! PayPal order proxy

use shared::models::{PayPalCapture, PayPalOrder, PayPalOrderRequest};
use shared::routes::encode_component;

use super::Gateway;
use crate::http::HttpClient;
use crate::ClientResult;

impl<C: HttpClient> Gateway<C> {
    pub async fn create_paypal_order(&self, request: &PayPalOrderRequest) -> ClientResult<PayPalOrder> {
        let order: PayPalOrder = self.http.post("payments/paypal/create", request).await?;
        tracing::info!(order_id = %order.order_id, cart_id = request.cart_id, "PayPal order created");
        Ok(order)
    }

    pub async fn capture_paypal_order(&self, order_id: &str) -> ClientResult<PayPalCapture> {
        let capture: Option<PayPalCapture> = self
            .http
            .post_empty(&format!(
                "payments/paypal/capture/{}",
                encode_component(order_id)
            ))
            .await?;
        let capture = capture.unwrap_or_default();
        tracing::info!(order_id, status = ?capture.status, "PayPal order captured");
        Ok(capture)
    }
}
