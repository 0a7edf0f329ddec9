//! Client configuration

use crate::session::{MemoryTokenStore, TokenStore};
use std::sync::Arc;

/// Client configuration for connecting to the café API
#[derive(Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Token store backing the session (defaults to in-memory)
    pub token_store: Arc<dyn TokenStore>,
}

impl ClientConfig {
    /// Create a new client configuration with an in-memory token store
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            token_store: Arc::new(MemoryTokenStore::new()),
        }
    }

    /// Seed the session with an existing token
    pub fn with_token(self, token: impl Into<String>) -> Self {
        self.token_store.set(&token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Use a custom token store (e.g. [`crate::FileTokenStore`])
    pub fn with_token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.token_store = store;
        self
    }

    /// Create an API client from this configuration
    pub fn build(&self) -> super::ApiClient {
        super::ApiClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("token_present", &self.token_store.is_present())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, 30);
        assert!(!config.token_store.is_present());
    }

    #[test]
    fn test_with_token_seeds_store() {
        let config = ClientConfig::new("http://cafe.local").with_token("tok-1");
        assert!(config.token_store.is_present());
        assert_eq!(config.token_store.get().as_deref(), Some("tok-1"));
    }
}
