//! Product detail page

use std::time::Instant;

use shared::i18n::{Notice, StatusKey};
use shared::models::Product;
use shared::routes::Route;

use crate::autocomplete::Key;
use crate::catalog::similar_products;
use crate::gateway::Gateway;
use crate::generation::{Generation, GenerationCounter};
use crate::http::HttpClient;
use crate::pages::SearchBox;
use crate::toast::ToastSlot;
use crate::ClientResult;

/// Number of same-category products shown under the detail view
pub const SIMILAR_LIMIT: usize = 6;

#[derive(Debug, Default)]
pub struct ProductDetailPage {
    product: Option<Product>,
    similar: Vec<Product>,
    /// Full catalog, used for suggestions and similar products
    all_products: Vec<Product>,
    status: Option<Notice>,
    loading: bool,
    loads: GenerationCounter,
    search: SearchBox,
    toast: ToastSlot,
}

impl ProductDetailPage {
    pub fn new() -> Self {
        Self {
            status: Some(StatusKey::ProductLoading.into()),
            ..Default::default()
        }
    }

    /// Start loading product `id`; id 0 resolves to not-found immediately
    pub fn begin_load(&mut self, id: i64) -> Option<Generation> {
        let generation = self.loads.issue();
        self.product = None;
        self.similar.clear();
        if id == 0 {
            self.loading = false;
            self.status = Some(StatusKey::ProductNotFound.into());
            return None;
        }
        self.loading = true;
        self.status = Some(StatusKey::ProductLoading.into());
        Some(generation)
    }

    /// Apply a product response; returns false for a superseded request
    pub fn finish_load(&mut self, generation: Generation, result: ClientResult<Product>) -> bool {
        if !self.loads.is_current(generation) {
            tracing::debug!(generation = generation.value(), "Discarding stale product response");
            return false;
        }
        self.loading = false;
        match result {
            Ok(product) => {
                self.status = None;
                self.product = Some(product);
                self.refresh_similar();
            }
            Err(e) => {
                tracing::debug!(error = %e, "Product lookup failed");
                self.status = Some(StatusKey::ProductNotFound.into());
            }
        }
        true
    }

    /// Replace the catalog used for suggestions and similar products
    pub fn set_catalog(&mut self, products: Vec<Product>) {
        self.all_products = products;
        self.refresh_similar();
    }

    /// Load the product, then the catalog behind it
    pub async fn load<C: HttpClient>(&mut self, gateway: &Gateway<C>, id: i64) {
        if let Some(generation) = self.begin_load(id) {
            let result = gateway.get_product(id).await;
            if !self.finish_load(generation, result) {
                return;
            }
        }
        match gateway.list_products(None).await {
            Ok(products) => self.set_catalog(products),
            Err(e) => tracing::debug!(error = %e, "Catalog unavailable for suggestions"),
        }
    }

    fn refresh_similar(&mut self) {
        self.similar = match &self.product {
            Some(product) => similar_products(&self.all_products, product, SIMILAR_LIMIT)
                .into_iter()
                .cloned()
                .collect(),
            None => Vec::new(),
        };
    }

    // ========== Search box ==========

    pub fn update_query(&mut self, text: &str) {
        self.search.input(text, &self.all_products);
    }

    pub fn handle_key(&mut self, key: Key) -> Option<Route> {
        self.search.key(key)
    }

    pub fn select_suggestion(&mut self, index: usize) -> Option<Route> {
        self.search.click(index)
    }

    /// Submitting the search goes to the home listing; blank text stays put
    pub fn search(&mut self) -> Option<Route> {
        let query = self.search.text().trim();
        if query.is_empty() {
            return None;
        }
        let route = Route::search(query);
        self.search.dismiss();
        Some(route)
    }

    pub fn blur_search(&mut self, now: Instant) {
        self.search.blur(now);
    }

    pub fn focus_search(&mut self) {
        self.search.focus();
    }

    pub fn poll(&mut self, now: Instant) {
        self.search.poll(now);
        self.toast.poll(now);
    }

    pub async fn add_to_cart<C: HttpClient>(&mut self, gateway: &Gateway<C>, product_id: i64, now: Instant) {
        match gateway.add_cart_item(product_id, 1).await {
            Ok(_) => self.toast.success(StatusKey::ProductAdded, now),
            Err(e) => {
                let message = e.user_message_or_sign_in(StatusKey::ProductSignIn, StatusKey::ProductAddFailed);
                self.toast.error(message, now);
            }
        }
    }

    // ========== View state ==========

    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    pub fn similar(&self) -> &[Product] {
        &self.similar
    }

    pub fn status(&self) -> Option<&Notice> {
        self.status.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn search_box(&self) -> &SearchBox {
        &self.search
    }

    pub fn toast(&self) -> &ToastSlot {
        &self.toast
    }
}
