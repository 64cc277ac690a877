use shared::models::{Product, ProductRequest};
use shared::routes::encode_component;

use super::Gateway;
use crate::http::HttpClient;
use crate::ClientResult;

impl<C: HttpClient> Gateway<C> {
    /// List products, optionally filtered server-side by a search query
    pub async fn list_products(&self, query: Option<&str>) -> ClientResult<Vec<Product>> {
        let path = match query.map(str::trim).filter(|q| !q.is_empty()) {
            Some(q) => format!("products?q={}", encode_component(q)),
            None => "products".to_string(),
        };
        self.http.get(&path).await
    }

    pub async fn get_product(&self, id: i64) -> ClientResult<Product> {
        self.http.get(&format!("products/{}", id)).await
    }

    pub async fn create_product(&self, payload: &ProductRequest) -> ClientResult<Product> {
        let product: Product = self.http.post("products", payload).await?;
        tracing::info!(id = product.id, name = %product.name, "Product created");
        Ok(product)
    }

    pub async fn update_product(&self, id: i64, payload: &ProductRequest) -> ClientResult<Product> {
        let product: Product = self.http.put(&format!("products/{}", id), payload).await?;
        tracing::info!(id, "Product updated");
        Ok(product)
    }

    pub async fn delete_product(&self, id: i64) -> ClientResult<()> {
        self.http.delete::<()>(&format!("products/{}", id)).await?;
        tracing::info!(id, "Product deleted");
        Ok(())
    }
}
