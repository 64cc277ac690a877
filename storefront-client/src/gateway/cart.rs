//! Session-bound cart (`carts/me`)

use shared::models::{Cart, CartItemRequest};

use super::Gateway;
use crate::http::HttpClient;
use crate::ClientResult;

impl<C: HttpClient> Gateway<C> {
    pub async fn get_cart(&self) -> ClientResult<Cart> {
        self.http.get("carts/me").await
    }

    pub async fn add_cart_item(&self, product_id: i64, quantity: i32) -> ClientResult<Cart> {
        let body = CartItemRequest {
            product_id,
            quantity,
        };
        self.http.post("carts/me/items", &body).await
    }

    pub async fn update_cart_item(
        &self,
        item_id: i64,
        product_id: i64,
        quantity: i32,
    ) -> ClientResult<Cart> {
        let body = CartItemRequest {
            product_id,
            quantity,
        };
        self.http
            .put(&format!("carts/me/items/{}", item_id), &body)
            .await
    }

    pub async fn remove_cart_item(&self, item_id: i64) -> ClientResult<()> {
        self.http
            .delete(&format!("carts/me/items/{}", item_id))
            .await
    }
}
