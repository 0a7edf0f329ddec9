//! User endpoints (staff dashboard)

use crate::{ApiClient, ClientResult};
use shared::models::{User, UserCreate, UserStatus, UserStatusUpdate};

impl ApiClient {
    /// List all users
    pub async fn list_users(&self) -> ClientResult<Vec<User>> {
        self.get("users").await
    }

    /// Create a user
    pub async fn create_user(&self, payload: &UserCreate) -> ClientResult<User> {
        self.post("users", payload).await
    }

    /// Change a user's account status; returns the updated user
    pub async fn set_user_status(&self, id: &str, status: UserStatus) -> ClientResult<User> {
        self.patch(
            &format!("users/{}/status", id),
            &UserStatusUpdate { status },
        )
        .await
    }

    /// Delete a user
    pub async fn delete_user(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("users/{}", id)).await
    }
}
