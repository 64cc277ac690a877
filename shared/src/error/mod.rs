//! Error categorisation for storefront API failures
//!
//! The backend reports failures only through the HTTP status and an
//! optional `{"message": "..."}` body. This module turns those into:
//! - [`ErrorCategory`]: coarse classification driving user-facing text
//! - [`ErrorBody`]: the optional server-supplied message

mod category;

pub use category::ErrorCategory;

use serde::{Deserialize, Serialize};

/// Error body returned by the backend on failure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Parse a raw response body, ignoring anything that is not JSON
    pub fn parse(text: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(text)
            .ok()
            .and_then(|body| body.message)
            .filter(|message| !message.trim().is_empty())
    }
}
