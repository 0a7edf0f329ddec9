//! HTTP client for network-based API calls

use crate::{ClientConfig, ClientError, ClientResult, TokenStore};
use http::StatusCode;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::response::ApiResponse;
use std::sync::Arc;

/// HTTP client for making network requests to the café API
///
/// Cheap to clone; clones share the token store.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Create a new API client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            tokens: config.token_store.clone(),
        }
    }

    /// The session token store shared with this client
    pub fn token_store(&self) -> Arc<dyn TokenStore> {
        self.tokens.clone()
    }

    /// Get the current token
    pub fn token(&self) -> Option<String> {
        self.tokens.get()
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Attach the bearer credential (when a token is cached) and a request id
    fn decorate(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header("x-request-id", uuid::Uuid::new_v4().to_string());
        match self.tokens.get() {
            Some(token) => request.header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", token),
            ),
            None => request,
        }
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.decorate(self.client.get(self.url(path)));
        Self::require_data(self.execute(request).await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.decorate(self.client.post(self.url(path)).json(body));
        Self::require_data(self.execute(request).await?)
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.decorate(self.client.put(self.url(path)).json(body));
        Self::require_data(self.execute(request).await?)
    }

    /// Make a PATCH request with JSON body
    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.decorate(self.client.patch(self.url(path)).json(body));
        Self::require_data(self.execute(request).await?)
    }

    /// Make a DELETE request, ignoring any response data
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let request = self.decorate(self.client.delete(self.url(path)));
        self.execute::<serde_json::Value>(request).await?;
        Ok(())
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> ClientResult<ApiResponse<T>> {
        let response = request.send().await.map_err(ClientError::Network)?;
        self.handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<ApiResponse<T>> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            // Evict the cached token; the flow layer turns this into a
            // single login redirect.
            if self.tokens.is_present() {
                self.tokens.clear();
                tracing::warn!("Received 401, evicted cached session token");
            }
            return Err(ClientError::Unauthorized);
        }

        let text = response.text().await.map_err(ClientError::Network)?;

        if !status.is_success() {
            if let Ok(body) = serde_json::from_str::<ApiResponse<serde_json::Value>>(&text) {
                return Err(ClientError::Api {
                    status,
                    code: body.code,
                    message: body.message,
                    details: body.details,
                });
            }
            return Err(ClientError::Status { status });
        }

        serde_json::from_str(&text).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    fn require_data<T>(envelope: ApiResponse<T>) -> ClientResult<T> {
        envelope
            .data
            .ok_or_else(|| ClientError::InvalidResponse("missing data in envelope".to_string()))
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("token_present", &self.tokens.is_present())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join() {
        let client = ClientConfig::new("http://cafe.local/").build();
        assert_eq!(client.url("orders"), "http://cafe.local/orders");
        assert_eq!(client.url("/orders"), "http://cafe.local/orders");
    }
}
