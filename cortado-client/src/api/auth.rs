//! Auth endpoints

use crate::{ApiClient, ClientResult};
use shared::client::{LoginRequest, LoginResponse, RegisterRequest, ValidateResponse};
use shared::models::User;

impl ApiClient {
    /// Login with email and password; caches the returned token
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response: LoginResponse = self.post("auth/login", &request).await?;
        self.token_store().set(&response.token);
        tracing::info!(user = %response.user.email, "Logged in");
        Ok(response)
    }

    /// Register a new account; caches the returned token
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> ClientResult<LoginResponse> {
        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };

        let response: LoginResponse = self.post("auth/register", &request).await?;
        self.token_store().set(&response.token);
        tracing::info!(user = %response.user.email, "Registered");
        Ok(response)
    }

    /// Get the current user
    pub async fn me(&self) -> ClientResult<User> {
        self.get("auth/me").await
    }

    /// Check whether the cached session is still valid
    pub async fn validate(&self) -> ClientResult<ValidateResponse> {
        self.get("auth/validate").await
    }

    /// Drop the cached session token (local only; the API keeps no
    /// server-side session state)
    pub fn logout(&self) {
        self.token_store().clear();
        tracing::info!("Logged out, session token cleared");
    }
}
