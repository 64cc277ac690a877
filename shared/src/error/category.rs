//! Error category classification

use http::StatusCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on HTTP status
///
/// - 401/403: unauthenticated, the user is asked to sign in
/// - 400/422: validation
/// - 404: not found
/// - other 4xx: client
/// - 5xx: server
/// - no status at all: network (the request never got a response)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    Unauthenticated,
    Validation,
    NotFound,
    Client,
    Server,
    Network,
}

impl ErrorCategory {
    /// Determine category from an optional HTTP status
    pub fn from_status(status: Option<StatusCode>) -> Self {
        let Some(status) = status else {
            return Self::Network;
        };
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Self::Unauthenticated,
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => Self::Validation,
            StatusCode::NOT_FOUND => Self::NotFound,
            s if s.is_client_error() => Self::Client,
            _ => Self::Server,
        }
    }

    /// Determine category from a raw status code value
    pub fn from_code(code: u16) -> Self {
        Self::from_status(StatusCode::from_u16(code).ok())
    }

    /// Whether the user should be prompted to sign in
    pub fn requires_sign_in(&self) -> bool {
        matches!(self, Self::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(401), ErrorCategory::Unauthenticated);
        assert_eq!(ErrorCategory::from_code(403), ErrorCategory::Unauthenticated);
        assert_eq!(ErrorCategory::from_code(400), ErrorCategory::Validation);
        assert_eq!(ErrorCategory::from_code(422), ErrorCategory::Validation);
        assert_eq!(ErrorCategory::from_code(404), ErrorCategory::NotFound);
        assert_eq!(ErrorCategory::from_code(409), ErrorCategory::Client);
        assert_eq!(ErrorCategory::from_code(500), ErrorCategory::Server);
        assert_eq!(ErrorCategory::from_code(503), ErrorCategory::Server);
        assert_eq!(ErrorCategory::from_status(None), ErrorCategory::Network);
    }

    #[test]
    fn test_requires_sign_in() {
        assert!(ErrorCategory::Unauthenticated.requires_sign_in());
        assert!(!ErrorCategory::Server.requires_sign_in());
    }
}
