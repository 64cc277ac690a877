//! Data models
//!
//! Shared between the gateway and the page controllers.
//! JSON field names follow the backend's camelCase convention.

pub mod auth;
pub mod cart;
pub mod contact;
pub mod payment;
pub mod product;

// Re-exports
pub use auth::*;
pub use cart::*;
pub use contact::*;
pub use payment::*;
pub use product::*;
