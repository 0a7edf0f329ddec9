//! Shared types for the Cortado café platform
//!
//! Common types used across the client and front-of-house crates: domain
//! models, error types, the API response envelope, and auth DTOs.

pub mod client;
pub mod error;
pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};
