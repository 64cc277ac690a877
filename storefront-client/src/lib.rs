//! Storefront Client - client core for the storefront backend
//!
//! Catalog filtering and paging, search suggestions, the REST gateway,
//! the session context and the page controllers built on them.

pub mod autocomplete;
pub mod catalog;
pub mod config;
pub mod error;
pub mod gateway;
pub mod generation;
pub mod http;
pub mod logger;
pub mod pages;
pub mod preferences;
pub mod schedule;
pub mod session;
pub mod toast;

pub use autocomplete::{Autocomplete, Direction, Key, KeyOutcome};
pub use catalog::CatalogEngine;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use gateway::Gateway;
pub use generation::{Generation, GenerationCounter};
pub use http::{HttpClient, NetworkHttpClient};
pub use preferences::Preferences;
pub use session::{SessionContext, SessionEvent, SubscriptionId};
pub use toast::{Toast, ToastKind, ToastSlot};

// Re-export shared types for convenience
pub use shared::i18n::{Language, Notice, StatusKey};
pub use shared::models::{AuthUser, Cart, CartItem, Product, ProductRequest};
pub use shared::routes::Route;
