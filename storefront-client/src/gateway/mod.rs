//! Remote data gateway
//!
//! Typed wrappers over the storefront REST surface. No logic beyond URL
//! construction: every call is a single request/response through the
//! [`HttpClient`] the gateway was built with.

mod auth;
mod cart;
mod payments;
mod products;
mod support;

use crate::http::HttpClient;

/// Typed access to the storefront backend
#[derive(Debug, Clone)]
pub struct Gateway<C> {
    http: C,
}

impl<C: HttpClient> Gateway<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    /// Underlying transport
    pub fn http(&self) -> &C {
        &self.http
    }
}
