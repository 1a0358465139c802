//! Client configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | SHOPDESK_API_URL | http://localhost:5000/api | REST backend base URL |
//! | SHOPDESK_STORAGE_URL | http://localhost:54321 | Object storage base URL |
//! | SHOPDESK_STORAGE_KEY | (empty) | Object storage API key |
//! | SHOPDESK_ERROR_MESSAGE | see [`DEFAULT_ERROR_MESSAGE`] | Fallback error text |
//! | SHOPDESK_REQUEST_TIMEOUT_SECS | (unset) | Request timeout, none when unset |
//!
//! A `.env` file in the working directory is loaded first.

use std::time::Duration;

use crate::error::DEFAULT_ERROR_MESSAGE;

/// Client configuration for connecting to the storefront backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// REST backend base URL (e.g., "https://shop.example.com/api")
    pub base_url: String,

    /// Object storage base URL
    pub storage_url: String,

    /// Object storage API key
    pub storage_key: String,

    /// Localized text used when an error response has no usable message
    pub fallback_message: String,

    /// Request timeout. `None` means requests wait indefinitely.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            storage_url: "http://localhost:54321".into(),
            storage_key: String::new(),
            fallback_message: DEFAULT_ERROR_MESSAGE.into(),
            timeout: None,
        }
    }

    /// Load configuration from the environment (and `.env`)
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let mut config = Self::new(
            std::env::var("SHOPDESK_API_URL").unwrap_or_else(|_| "http://localhost:5000/api".into()),
        );
        if let Ok(url) = std::env::var("SHOPDESK_STORAGE_URL") {
            config.storage_url = url;
        }
        if let Ok(key) = std::env::var("SHOPDESK_STORAGE_KEY") {
            config.storage_key = key;
        }
        if let Ok(message) = std::env::var("SHOPDESK_ERROR_MESSAGE")
            && !message.trim().is_empty()
        {
            config.fallback_message = message;
        }
        config.timeout = std::env::var("SHOPDESK_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs);
        config
    }

    /// Set the object storage endpoint and key
    pub fn with_storage(mut self, url: impl Into<String>, key: impl Into<String>) -> Self {
        self.storage_url = url.into();
        self.storage_key = key.into();
        self
    }

    /// Set the fallback error message
    pub fn with_fallback_message(mut self, message: impl Into<String>) -> Self {
        self.fallback_message = message.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:5000/api")
    }
}
