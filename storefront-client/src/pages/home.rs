//! Home page: catalog listing, search and product administration

use std::time::Instant;

use shared::i18n::{Language, Notice, StatusKey};
use shared::models::{Product, ProductRequest};
use shared::routes::Route;
use validator::Validate;

use crate::autocomplete::Key;
use crate::catalog::CatalogEngine;
use crate::gateway::Gateway;
use crate::generation::{Generation, GenerationCounter};
use crate::http::HttpClient;
use crate::pages::SearchBox;
use crate::preferences::Preferences;
use crate::session::SessionContext;
use crate::toast::ToastSlot;
use crate::ClientResult;

/// Whether the product dialog creates or edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Add,
    Edit(i64),
}

/// Admin product dialog
#[derive(Debug, Clone)]
pub struct ProductEditor {
    pub mode: EditorMode,
    pub form: ProductRequest,
    error: Option<Notice>,
}

impl ProductEditor {
    pub fn error(&self) -> Option<&Notice> {
        self.error.as_ref()
    }
}

/// Ticket for an in-flight catalog request
#[derive(Debug, Clone)]
pub struct CatalogLoad {
    generation: Generation,
    query: Option<String>,
}

impl CatalogLoad {
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }
}

#[derive(Debug, Default)]
pub struct HomePage {
    catalog: CatalogEngine,
    search: SearchBox,
    loads: GenerationCounter,
    status: Option<Notice>,
    loading: bool,
    toast: ToastSlot,
    editor: Option<ProductEditor>,
}

impl HomePage {
    pub fn new() -> Self {
        Self {
            status: Some(StatusKey::HomeLoading.into()),
            ..Default::default()
        }
    }

    // ========== Loading ==========

    /// Start a catalog request; the search box shows `query`
    pub fn begin_load(&mut self, query: Option<&str>) -> CatalogLoad {
        let query = query.map(str::trim).filter(|q| !q.is_empty());
        self.search.set_text(query.unwrap_or_default());
        self.status = Some(StatusKey::HomeLoading.into());
        self.loading = true;
        CatalogLoad {
            generation: self.loads.issue(),
            query: query.map(str::to_string),
        }
    }

    /// Apply a catalog response; returns false when a newer load superseded it
    pub fn finish_load(&mut self, load: CatalogLoad, result: ClientResult<Vec<Product>>) -> bool {
        if !self.loads.is_current(load.generation) {
            tracing::debug!(generation = load.generation.value(), "Discarding stale catalog response");
            return false;
        }
        self.loading = false;
        match result {
            Ok(products) => {
                self.catalog.set_collection(products);
                self.status = if self.catalog.filtered_len() == 0 {
                    Some(StatusKey::HomeNoResults.into())
                } else {
                    None
                };
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load catalog");
                self.status = Some(StatusKey::HomeNeedSignIn.into());
            }
        }
        true
    }

    /// Fetch the catalog, optionally filtered by a backend search query
    pub async fn load<C: HttpClient>(&mut self, gateway: &Gateway<C>, query: Option<&str>) {
        let load = self.begin_load(query);
        let result = gateway.list_products(load.query()).await;
        self.finish_load(load, result);
    }

    /// Submit the search box text as a backend query
    pub async fn search<C: HttpClient>(&mut self, gateway: &Gateway<C>) {
        let query = self.search.text().trim().to_string();
        self.search.dismiss();
        self.load(gateway, Some(&query)).await;
    }

    // ========== Search box ==========

    pub fn update_query(&mut self, text: &str) {
        self.search.input(text, self.catalog.products());
    }

    pub fn handle_key(&mut self, key: Key) -> Option<Route> {
        self.search.key(key)
    }

    pub fn select_suggestion(&mut self, index: usize) -> Option<Route> {
        self.search.click(index)
    }

    pub fn blur_search(&mut self, now: Instant) {
        self.search.blur(now);
    }

    pub fn focus_search(&mut self) {
        self.search.focus();
    }

    /// Apply due timers (suggestion dismissal, toast)
    pub fn poll(&mut self, now: Instant) {
        self.search.poll(now);
        self.toast.poll(now);
    }

    // ========== Browsing ==========

    pub fn select_category(&mut self, category: &str) {
        self.catalog.select_category(category);
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.catalog.go_to_page(page);
    }

    pub fn next_page(&mut self) {
        self.catalog.next_page();
    }

    pub fn prev_page(&mut self) {
        self.catalog.prev_page();
    }

    pub async fn add_to_cart<C: HttpClient>(&mut self, gateway: &Gateway<C>, product_id: i64, now: Instant) {
        match gateway.add_cart_item(product_id, 1).await {
            Ok(_) => self.toast.success(StatusKey::HomeAdded, now),
            Err(e) => {
                let message = e.user_message_or_sign_in(StatusKey::HomeSignIn, StatusKey::HomeAddFailed);
                self.toast.error(message, now);
            }
        }
    }

    // ========== Administration ==========

    pub fn open_add(&mut self) {
        self.editor = Some(ProductEditor {
            mode: EditorMode::Add,
            form: ProductRequest::default(),
            error: None,
        });
    }

    /// Open the edit dialog pre-filled from a listed product
    pub fn open_edit(&mut self, product_id: i64) -> bool {
        let Some(product) = self.catalog.get(product_id) else {
            return false;
        };
        self.editor = Some(ProductEditor {
            mode: EditorMode::Edit(product_id),
            form: ProductRequest::from(product),
            error: None,
        });
        true
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    /// Validate and send the dialog; returns true when the dialog closed
    pub async fn submit_editor<C: HttpClient>(&mut self, gateway: &Gateway<C>) -> bool {
        let Some(editor) = self.editor.as_mut() else {
            return false;
        };
        editor.error = None;
        if editor.form.validate().is_err() {
            editor.error = Some(StatusKey::HomeRequiredFields.into());
            return false;
        }

        let mode = editor.mode;
        let form = editor.form.clone();
        let result = match mode {
            EditorMode::Add => gateway.create_product(&form).await.map(|product| {
                self.catalog.prepend(product);
            }),
            EditorMode::Edit(id) => gateway.update_product(id, &form).await.map(|product| {
                self.catalog.replace(product);
            }),
        };

        match result {
            Ok(()) => {
                self.editor = None;
                true
            }
            Err(e) => {
                let fallback = match mode {
                    EditorMode::Add => StatusKey::HomeCreateFailed,
                    EditorMode::Edit(_) => StatusKey::HomeUpdateFailed,
                };
                if let Some(editor) = self.editor.as_mut() {
                    editor.error = Some(e.user_message(fallback));
                }
                false
            }
        }
    }

    /// Delete a product; the caller has already confirmed with the user
    pub async fn delete_product<C: HttpClient>(&mut self, gateway: &Gateway<C>, product_id: i64, now: Instant) {
        match gateway.delete_product(product_id).await {
            Ok(()) => {
                self.catalog.remove(product_id);
            }
            Err(e) => self.toast.error(e.user_message(StatusKey::HomeDeleteFailed), now),
        }
    }

    // ========== Session ==========

    pub async fn logout<C: HttpClient>(&mut self, gateway: &Gateway<C>, session: &mut SessionContext) {
        if let Err(e) = session.logout(gateway).await {
            tracing::warn!(error = %e, "Logout failed");
        }
    }

    pub fn change_language(
        &mut self,
        session: &mut SessionContext,
        prefs: &mut Preferences,
        language: Language,
    ) -> ClientResult<()> {
        session.set_language(language, prefs)
    }

    // ========== View state ==========

    pub fn catalog(&self) -> &CatalogEngine {
        &self.catalog
    }

    pub fn search_box(&self) -> &SearchBox {
        &self.search
    }

    pub fn status(&self) -> Option<&Notice> {
        self.status.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn toast(&self) -> &ToastSlot {
        &self.toast
    }

    pub fn editor(&self) -> Option<&ProductEditor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut ProductEditor> {
        self.editor.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;
    use rust_decimal::Decimal;

    fn product(id: i64, category: &str) -> Product {
        Product {
            id,
            name: format!("Item {}", id),
            description: "d".into(),
            price: Decimal::new(1000, 2),
            currency: "USD".into(),
            sku: String::new(),
            stock_quantity: 5,
            image_url: "img".into(),
            category: category.into(),
            active: true,
        }
    }

    #[test]
    fn test_stale_load_is_discarded() {
        let mut page = HomePage::new();
        let first = page.begin_load(None);
        let second = page.begin_load(Some("  red "));
        assert_eq!(second.query(), Some("red"));
        assert_eq!(page.search_box().text(), "red");

        assert!(page.finish_load(second, Ok(vec![product(2, "Hats")])));
        assert!(!page.finish_load(first, Ok(vec![product(1, "Shoes"), product(3, "Shoes")])));

        assert_eq!(page.catalog().products().len(), 1);
        assert_eq!(page.catalog().products()[0].id, 2);
        assert_eq!(page.status(), None);
        assert!(!page.is_loading());
    }

    #[test]
    fn test_load_statuses() {
        let mut page = HomePage::new();
        assert!(page.status().unwrap().is_key(StatusKey::HomeLoading));

        let load = page.begin_load(None);
        page.finish_load(load, Ok(Vec::new()));
        assert!(page.status().unwrap().is_key(StatusKey::HomeNoResults));

        let load = page.begin_load(None);
        page.finish_load(load, Err(ClientError::InvalidResponse("boom".into())));
        assert!(page.status().unwrap().is_key(StatusKey::HomeNeedSignIn));
    }

    #[test]
    fn test_open_edit_prefills_form() {
        let mut page = HomePage::new();
        let load = page.begin_load(None);
        page.finish_load(load, Ok(vec![product(7, "Hats")]));

        assert!(!page.open_edit(99));
        assert!(page.editor().is_none());

        assert!(page.open_edit(7));
        let editor = page.editor().unwrap();
        assert_eq!(editor.mode, EditorMode::Edit(7));
        assert_eq!(editor.form.name, "Item 7");
        assert_eq!(editor.form.category.as_deref(), Some("Hats"));
    }
}
