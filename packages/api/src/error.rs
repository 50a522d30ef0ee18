//! Errors surfaced by the API client.
//!
//! The `Display` text of every variant is what the UI shows in its error
//! dialogs, so it is written for end users rather than developers.

use thiserror::Error;

/// Fallback text for an unauthorized response without a server message.
pub const AUTHENTICATION_FAILED: &str = "Authentication failed";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never completed (network down, DNS, CORS).
    #[error("Network request failed: {0}")]
    Transport(String),

    /// 401. The stored token has already been cleared when this is returned.
    #[error("{}", .detail.as_deref().unwrap_or(AUTHENTICATION_FAILED))]
    Unauthorized { detail: Option<String> },

    /// Any other non-2xx status. `message` is the server's `detail` when it
    /// sent one, otherwise a generic status message.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body was not the JSON we expected.
    #[error("Invalid response from server: {0}")]
    Decode(String),

    /// The request payload could not be built.
    #[error("Could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// The HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_display() {
        let bare = ApiError::Unauthorized { detail: None };
        assert_eq!(bare.to_string(), "Authentication failed");

        let detailed = ApiError::Unauthorized {
            detail: Some("Invalid credentials".into()),
        };
        assert_eq!(detailed.to_string(), "Invalid credentials");
        assert_eq!(detailed.status(), Some(401));
    }

    #[test]
    fn test_status_display_is_message() {
        let err = ApiError::Status {
            status: 400,
            message: "You already have an active SOS alert".into(),
        };
        assert_eq!(err.to_string(), "You already have an active SOS alert");
        assert!(!err.is_unauthorized());
    }
}
