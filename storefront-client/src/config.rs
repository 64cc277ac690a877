//! Client configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | STOREFRONT_API_URL | http://localhost:8080/api | Backend base URL |
//! | STOREFRONT_TIMEOUT_SECS | 30 | Request timeout |
//! | STOREFRONT_DATA_DIR | ./.storefront | Where preferences are persisted |
//! | PAYPAL_CLIENT_ID | (unset) | PayPal button client id |
//! | PAYPAL_CURRENCY | MAD | Currency passed to the PayPal SDK |

use std::path::PathBuf;

use shared::routes::encode_component;

use crate::{ClientError, ClientResult};

const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_DATA_DIR: &str = ".storefront";
pub const DEFAULT_PAYPAL_CURRENCY: &str = "MAD";

/// Client configuration for connecting to the storefront backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., "http://localhost:8080/api")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Directory holding the preferences file
    pub data_dir: PathBuf,

    /// PayPal client id for the checkout buttons
    pub paypal_client_id: Option<String>,

    /// Currency passed to the PayPal SDK
    pub paypal_currency: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT_SECS,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            paypal_client_id: None,
            paypal_currency: DEFAULT_PAYPAL_CURRENCY.to_string(),
        }
    }

    /// Load configuration from the environment (and a `.env` file if present)
    ///
    /// Unset variables fall back to defaults; malformed ones are an error.
    pub fn from_env() -> ClientResult<Self> {
        if let Ok(path) = dotenv::dotenv() {
            tracing::debug!("Loaded environment from {}", path.display());
        }

        let mut config = Self::new(
            std::env::var("STOREFRONT_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into()),
        );

        if let Ok(value) = std::env::var("STOREFRONT_TIMEOUT_SECS") {
            config.timeout = value.parse().map_err(|_| {
                ClientError::Config(format!("STOREFRONT_TIMEOUT_SECS is not a number: {}", value))
            })?;
        }
        if let Ok(dir) = std::env::var("STOREFRONT_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        config.paypal_client_id = std::env::var("PAYPAL_CLIENT_ID")
            .ok()
            .filter(|id| !id.trim().is_empty());
        if let Ok(currency) = std::env::var("PAYPAL_CURRENCY") {
            config.paypal_currency = currency;
        }

        config.validate()?;
        Ok(config)
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the preferences directory
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Set the PayPal client id and currency
    pub fn with_paypal(mut self, client_id: impl Into<String>, currency: impl Into<String>) -> Self {
        self.paypal_client_id = Some(client_id.into());
        self.paypal_currency = currency.into();
        self
    }

    pub fn validate(&self) -> ClientResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "base URL must be http(s): {}",
                self.base_url
            )));
        }
        if self.timeout == 0 {
            return Err(ClientError::Config("timeout must be positive".into()));
        }
        Ok(())
    }

    /// PayPal SDK script URL, when a client id is configured
    pub fn paypal_sdk_url(&self) -> Option<String> {
        self.paypal_client_id.as_ref().map(|id| {
            format!(
                "https://www.paypal.com/sdk/js?client-id={}&currency={}",
                encode_component(id),
                encode_component(&self.paypal_currency)
            )
        })
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<crate::NetworkHttpClient> {
        crate::NetworkHttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
