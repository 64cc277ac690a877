//! Page controllers
//!
//! Each controller owns its view state and talks to the backend through a
//! borrowed [`Gateway`](crate::gateway::Gateway). Session-wide state is
//! passed in as a [`SessionContext`](crate::session::SessionContext) where a
//! page needs it. Delayed transitions are polled with an [`Instant`].

use std::time::Instant;

use shared::models::Product;
use shared::routes::Route;

use crate::autocomplete::{Autocomplete, Key, KeyOutcome};

pub mod account;
pub mod cart;
pub mod contact;
pub mod home;
pub mod product_detail;

pub use account::{ForgotPage, LoginPage, ProfilePage, ResetPage, SignupPage};
pub use cart::{CardDetails, CartPage, CheckoutDialog, PaymentMethod};
pub use contact::ContactPage;
pub use home::{EditorMode, HomePage, ProductEditor};
pub use product_detail::ProductDetailPage;

/// Header search box with suggestions
///
/// Committing a suggestion yields the product route to navigate to.
#[derive(Debug, Clone, Default)]
pub struct SearchBox {
    autocomplete: Autocomplete,
}

impl SearchBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&mut self, text: &str, collection: &[Product]) {
        self.autocomplete.update_query(text, collection);
    }

    pub fn key(&mut self, key: Key) -> Option<Route> {
        match self.autocomplete.handle_key(key) {
            KeyOutcome::Selected(product) => Some(Route::Product(product.id)),
            KeyOutcome::Handled | KeyOutcome::Ignored => None,
        }
    }

    pub fn click(&mut self, index: usize) -> Option<Route> {
        self.autocomplete
            .select(index)
            .map(|product| Route::Product(product.id))
    }

    pub fn blur(&mut self, now: Instant) {
        self.autocomplete.blur(now);
    }

    pub fn focus(&mut self) {
        self.autocomplete.focus();
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        self.autocomplete.poll(now)
    }

    pub fn dismiss(&mut self) {
        self.autocomplete.dismiss();
    }

    pub fn text(&self) -> &str {
        self.autocomplete.query()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.autocomplete.set_query(text);
    }

    pub fn autocomplete(&self) -> &Autocomplete {
        &self.autocomplete
    }
}
