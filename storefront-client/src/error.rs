//! Client error types

use reqwest::StatusCode;
use shared::error::ErrorCategory;
use shared::i18n::{Notice, StatusKey};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport failed (connection refused, timeout, TLS...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("API error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: StatusCode,
        message: Option<String>,
    },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Form validation failed before anything was sent
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Preferences file error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status of the failure, if the request got a response
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation(_) => ErrorCategory::Validation,
            _ => ErrorCategory::from_status(self.status()),
        }
    }

    /// 401 or 403
    pub fn is_unauthenticated(&self) -> bool {
        self.category().requires_sign_in()
    }

    /// Server-supplied message, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Map to user-facing text: the server message when present, else `fallback`
    pub fn user_message(&self, fallback: StatusKey) -> Notice {
        match self.server_message() {
            Some(message) => Notice::Text(message.to_string()),
            None => Notice::Key(fallback),
        }
    }

    /// Like [`user_message`](Self::user_message), but 401/403 map to `sign_in`
    pub fn user_message_or_sign_in(&self, sign_in: StatusKey, fallback: StatusKey) -> Notice {
        if self.is_unauthenticated() {
            Notice::Key(sign_in)
        } else {
            self.user_message(fallback)
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16, message: Option<&str>) -> ClientError {
        ClientError::Api {
            status: StatusCode::from_u16(status).unwrap(),
            message: message.map(str::to_string),
        }
    }

    #[test]
    fn test_unauthenticated_maps_to_sign_in() {
        for status in [401, 403] {
            let err = api(status, Some("Session expired"));
            assert!(err.is_unauthenticated());
            assert_eq!(
                err.user_message_or_sign_in(StatusKey::HomeSignIn, StatusKey::HomeAddFailed),
                Notice::Key(StatusKey::HomeSignIn)
            );
        }
    }

    #[test]
    fn test_server_message_passes_through() {
        let err = api(409, Some("Out of stock"));
        assert_eq!(
            err.user_message_or_sign_in(StatusKey::HomeSignIn, StatusKey::HomeAddFailed),
            Notice::Text("Out of stock".into())
        );
    }

    #[test]
    fn test_missing_message_uses_fallback() {
        let err = api(500, None);
        assert_eq!(err.category(), ErrorCategory::Server);
        assert_eq!(
            err.user_message(StatusKey::HomeAddFailed),
            Notice::Key(StatusKey::HomeAddFailed)
        );
    }

    #[test]
    fn test_non_http_errors_have_no_status() {
        let err = ClientError::InvalidResponse("truncated".into());
        assert_eq!(err.status(), None);
        assert_eq!(err.category(), ErrorCategory::Network);
        assert!(!err.is_unauthenticated());
    }
}
