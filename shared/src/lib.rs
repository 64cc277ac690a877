//! Shared types for the storefront
//!
//! Wire models exchanged with the storefront backend, error
//! categorisation, the language table and the routing table.

pub mod error;
pub mod i18n;
pub mod models;
pub mod routes;

// Re-exports
pub use http;
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};

pub use error::ErrorCategory;
pub use i18n::{Language, Notice, StatusKey, TextDirection};
pub use routes::Route;
