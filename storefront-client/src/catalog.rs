//! Catalog filter/paginate engine
//!
//! Holds the full product list, the derived category set and the
//! current page window. Every mutation recomputes the visible slice, so
//! readers never observe a stale window.

use std::collections::HashSet;

use shared::models::Product;

/// Category sentinel that matches every product
pub const ALL_CATEGORIES: &str = "All";

/// Products per page
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Filtered, paged view over a product collection
#[derive(Debug, Clone)]
pub struct CatalogEngine {
    products: Vec<Product>,
    categories: Vec<String>,
    selected_category: String,
    /// Indices into `products` passing the category filter
    filtered: Vec<usize>,
    current_page: usize,
    page_size: usize,
}

impl CatalogEngine {
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// `page_size` of zero is treated as one
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            products: Vec::new(),
            categories: vec![ALL_CATEGORIES.to_string()],
            selected_category: ALL_CATEGORIES.to_string(),
            filtered: Vec::new(),
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    // ========== Mutations ==========

    /// Replace the whole collection and go back to page 1
    pub fn set_collection(&mut self, products: Vec<Product>) {
        self.products = products;
        self.current_page = 1;
        self.refresh();
    }

    /// Select a category; unknown categories fall back to "All"
    pub fn select_category(&mut self, category: &str) {
        self.selected_category = if self.categories.iter().any(|c| c == category) {
            category.to_string()
        } else {
            ALL_CATEGORIES.to_string()
        };
        self.current_page = 1;
        self.apply_filter();
    }

    /// Jump to page `page`; out-of-range pages are ignored
    pub fn go_to_page(&mut self, page: usize) {
        if page < 1 || page > self.total_pages() {
            return;
        }
        self.current_page = page;
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.current_page + 1);
    }

    pub fn prev_page(&mut self) {
        if let Some(page) = self.current_page.checked_sub(1) {
            self.go_to_page(page);
        }
    }

    /// Insert a newly created product at the front
    pub fn prepend(&mut self, product: Product) {
        self.products.insert(0, product);
        self.refresh();
    }

    /// Patch a product by id; returns false when the id is unknown
    pub fn replace(&mut self, product: Product) -> bool {
        let Some(slot) = self.products.iter_mut().find(|p| p.id == product.id) else {
            return false;
        };
        *slot = product;
        self.refresh();
        true
    }

    /// Remove a product by id; returns false when the id is unknown
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        if self.products.len() == before {
            return false;
        }
        self.refresh();
        true
    }

    // ========== Accessors ==========

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// "All" followed by each distinct non-empty category in first-seen order
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of products passing the category filter
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Filtered products, all pages
    pub fn filtered(&self) -> impl Iterator<Item = &Product> {
        self.filtered.iter().map(|&i| &self.products[i])
    }

    /// `max(1, ceil(filtered / page_size))`
    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(self.page_size).max(1)
    }

    /// Products on the current page
    pub fn visible(&self) -> Vec<&Product> {
        let start = (self.current_page - 1) * self.page_size;
        self.filtered
            .iter()
            .skip(start)
            .take(self.page_size)
            .map(|&i| &self.products[i])
            .collect()
    }

    /// Same-category products other than `product`, in collection order
    pub fn similar_to(&self, product: &Product, limit: usize) -> Vec<&Product> {
        similar_products(&self.products, product, limit)
    }

    // ========== Recompute ==========

    fn refresh(&mut self) {
        self.refresh_categories();
        self.apply_filter();
    }

    fn refresh_categories(&mut self) {
        let mut seen = HashSet::new();
        self.categories = std::iter::once(ALL_CATEGORIES.to_string())
            .chain(
                self.products
                    .iter()
                    .map(|p| p.category.as_str())
                    .filter(|c| !c.is_empty() && seen.insert(*c))
                    .map(str::to_string),
            )
            .collect();

        if !self.categories.contains(&self.selected_category) {
            tracing::debug!(category = %self.selected_category, "Selected category vanished, resetting");
            self.selected_category = ALL_CATEGORIES.to_string();
        }
    }

    fn apply_filter(&mut self) {
        let all = self.selected_category == ALL_CATEGORIES;
        self.filtered = self
            .products
            .iter()
            .enumerate()
            .filter(|(_, p)| all || p.category == self.selected_category)
            .map(|(i, _)| i)
            .collect();

        let total = self.total_pages();
        if self.current_page > total {
            self.current_page = total;
        }
    }
}

impl Default for CatalogEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Same-category products other than `product`, in order, at most `limit`
pub fn similar_products<'a>(products: &'a [Product], product: &Product, limit: usize) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| p.id != product.id && p.category == product.category)
        .take(limit)
        .collect()
}
