//! Cortado Client - HTTP client for the café API
//!
//! Typed access to the remote café service: auth, users, tables, products,
//! and orders. A bearer token is cached behind the narrow [`TokenStore`]
//! interface and attached to every request; any 401 response evicts it.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod qr;
pub mod session;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::ApiClient;
pub use session::{FileTokenStore, MemoryTokenStore, TokenStore};

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, LoginResponse, RegisterRequest, ValidateResponse};
pub use shared::response::ApiResponse;
