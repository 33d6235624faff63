//! Application-wide error types for the remote banking API.

use thiserror::Error;

/// Result type alias using `ApiError`.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the remote banking API boundary.
///
/// Client-side validation never produces one of these; it is resolved
/// before any network call (see the workflow engine's own error type).
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Credentials were rejected (HTTP 401).
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Registration conflicts with an existing account (HTTP 400/409).
    #[error("Account already exists: {0}")]
    DuplicateAccount(String),

    /// No response from the backend at all (network failure).
    #[error("Banking service unreachable: {0}")]
    Unavailable(String),

    /// Any other non-2xx response.
    #[error("Remote error ({status}): {message}")]
    Remote {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Message derived from the response body, or a generic fallback.
        message: String,
    },
}

impl ApiError {
    /// Classifies a non-2xx status code into an error.
    ///
    /// `message` should come from the response body when present.
    #[must_use]
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 => Self::Authentication(message),
            _ => Self::Remote { status, message },
        }
    }

    /// Returns the HTTP status code behind this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication(_) => Some(401),
            Self::DuplicateAccount(_) => Some(400),
            Self::Unavailable(_) => None,
            Self::Remote { status, .. } => Some(*status),
        }
    }

    /// Returns the error code for display and logging.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Authentication(_) => "AUTHENTICATION_FAILED",
            Self::DuplicateAccount(_) => "DUPLICATE_ACCOUNT",
            Self::Unavailable(_) => "SERVICE_UNAVAILABLE",
            Self::Remote { .. } => "REMOTE_ERROR",
        }
    }

    /// Returns a human-readable message suitable for direct display.
    ///
    /// Classification follows the login screen's rules: 401 is "bad
    /// credentials", no response is "backend unavailable", anything else
    /// falls back to the message carried in the response body.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Authentication(_) => "Incorrect email address or password".to_string(),
            Self::DuplicateAccount(_) => "An account with this email already exists".to_string(),
            Self::Unavailable(_) => {
                "Cannot reach the banking service. Please try again later".to_string()
            }
            Self::Remote { message, .. } => {
                if message.is_empty() {
                    "An unexpected error occurred".to_string()
                } else {
                    message.clone()
                }
            }
        }
    }
}
