//! Client error types and user-facing message mapping

use http::StatusCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure - the request never produced a response
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Structured error body returned by the server
    #[error("{message}")]
    Api {
        status: StatusCode,
        /// Envelope code (e.g. "E4001")
        code: String,
        message: String,
        details: Option<HashMap<String, Value>>,
    },

    /// Non-success status with no parseable body
    #[error("HTTP {status}")]
    Status { status: StatusCode },

    /// Authentication required (the cached token has already been evicted)
    #[error("Authentication required")]
    Unauthorized,

    /// Response body could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// User-facing display string for this error
    ///
    /// Server-provided messages are surfaced verbatim; detail values are
    /// joined into the message when the server sent no top-level message.
    /// Everything else maps to a fixed string per failure class.
    pub fn display_message(&self) -> String {
        match self {
            Self::Network(_) => {
                "Unable to reach the server. Please check your connection.".to_string()
            }
            Self::Api {
                status,
                message,
                details,
                ..
            } => {
                if !message.is_empty() {
                    return message.clone();
                }
                if let Some(details) = details {
                    let joined = details
                        .values()
                        .map(|v| match v {
                            Value::String(s) => s.clone(),
                            other => other.to_string(),
                        })
                        .collect::<Vec<_>>()
                        .join(", ");
                    if !joined.is_empty() {
                        return joined;
                    }
                }
                Self::status_message(*status)
            }
            Self::Status { status } => Self::status_message(*status),
            Self::Unauthorized => Self::status_message(StatusCode::UNAUTHORIZED),
            Self::InvalidResponse(_) => "Something went wrong. Please try again.".to_string(),
        }
    }

    /// Fixed message per bare HTTP status
    fn status_message(status: StatusCode) -> String {
        match status {
            StatusCode::BAD_REQUEST => "Invalid request.".to_string(),
            StatusCode::UNAUTHORIZED => "Please log in to continue.".to_string(),
            StatusCode::FORBIDDEN => {
                "You do not have permission to perform this action.".to_string()
            }
            StatusCode::NOT_FOUND => "The requested resource was not found.".to_string(),
            StatusCode::INTERNAL_SERVER_ERROR => "Server error. Please try again later.".to_string(),
            other => format!("Error: {}", other.as_u16()),
        }
    }

    /// Whether this error is the 401 eviction signal
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(
        status: StatusCode,
        message: &str,
        details: Option<HashMap<String, Value>>,
    ) -> ClientError {
        ClientError::Api {
            status,
            code: "E0002".to_string(),
            message: message.to_string(),
            details,
        }
    }

    #[test]
    fn test_server_message_surfaced_verbatim() {
        let err = api_error(StatusCode::BAD_REQUEST, "Email already registered", None);
        assert_eq!(err.display_message(), "Email already registered");
    }

    #[test]
    fn test_details_joined_when_no_message() {
        let mut details = HashMap::new();
        details.insert("email".to_string(), Value::String("is invalid".to_string()));
        let err = api_error(StatusCode::BAD_REQUEST, "", Some(details));
        assert_eq!(err.display_message(), "is invalid");
    }

    #[test]
    fn test_bare_status_mapping() {
        let err = ClientError::Status {
            status: StatusCode::NOT_FOUND,
        };
        assert_eq!(err.display_message(), "The requested resource was not found.");

        let err = ClientError::Status {
            status: StatusCode::BAD_GATEWAY,
        };
        assert_eq!(err.display_message(), "Error: 502");
    }

    #[test]
    fn test_unauthorized_mapping() {
        assert_eq!(
            ClientError::Unauthorized.display_message(),
            "Please log in to continue."
        );
    }

    #[test]
    fn test_invalid_response_fallback() {
        let err = ClientError::InvalidResponse("missing data".to_string());
        assert_eq!(
            err.display_message(),
            "Something went wrong. Please try again."
        );
    }
}
