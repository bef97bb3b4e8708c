use thiserror::Error;

/// Message shown for any HTTP 500, whatever the body says.
pub const SERVER_ERROR_MESSAGE: &str = "Server error. Please try again later.";

/// Message used when an error envelope carries no `message`.
pub const DEFAULT_API_ERROR_MESSAGE: &str = "Failed to load dogs.";

/// Unified error type for every way a page fetch can fail.
///
/// The `Display` text of each variant is the human-readable message the UI
/// puts in front of the user, so callers never need to re-format it.
///
/// The type is `Clone` because fetch outcomes travel over a channel from the
/// worker task back to the UI loop and are kept in the fetch state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The request never produced a response (connection refused, DNS, reset).
    #[error("Unable to reach the server: {detail}")]
    Network {
        /// Transport error details.
        detail: String,
    },

    /// The request exceeded the configured timeout.
    #[error("The request timed out: {detail}")]
    Timeout {
        /// Transport error details.
        detail: String,
    },

    /// The server answered HTTP 500.
    #[error("Server error. Please try again later.")]
    Server,

    /// Any other non-2xx status.
    ///
    /// `message` is the server-supplied message when the body carried one,
    /// otherwise a generic status-code message.
    #[error("{message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Best available human-readable message.
        message: String,
    },

    /// A 2xx body that is not a valid envelope.
    #[error("Unexpected response from server: {detail}")]
    Parse {
        /// Deserialisation error details.
        detail: String,
    },

    /// A well-formed envelope with `status: "error"`.
    #[error("{message}")]
    Api {
        /// Message from the envelope, or [`DEFAULT_API_ERROR_MESSAGE`].
        message: String,
    },

    /// The client could not be constructed from the given settings.
    #[error("Invalid client configuration: {detail}")]
    InvalidConfig {
        /// What was wrong.
        detail: String,
    },
}

impl ClientError {
    /// Builds the error for a non-2xx status.
    ///
    /// 500 always maps to [`ClientError::Server`]; other statuses keep the
    /// server's message if one was supplied.
    pub fn from_status(status: u16, server_message: Option<String>) -> Self {
        if status == 500 {
            return Self::Server;
        }
        let message = server_message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed with status {status}"));
        Self::Http { status, message }
    }

    /// HTTP status carried by the error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server => Some(500),
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Library result alias.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_500_ignores_server_message() {
        let err = ClientError::from_status(500, Some("db exploded".into()));
        assert_eq!(err, ClientError::Server);
        assert_eq!(err.to_string(), SERVER_ERROR_MESSAGE);
    }

    #[test]
    fn other_status_keeps_server_message() {
        let err = ClientError::from_status(404, Some("Page not found".into()));
        assert_eq!(err.to_string(), "Page not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn other_status_without_message_is_generic() {
        let err = ClientError::from_status(503, None);
        assert_eq!(err.to_string(), "Request failed with status 503");
    }

    #[test]
    fn blank_server_message_is_generic() {
        let err = ClientError::from_status(400, Some("   ".into()));
        assert_eq!(err.to_string(), "Request failed with status 400");
    }

    #[test]
    fn transport_errors_have_no_status() {
        let err = ClientError::Network {
            detail: "connection refused".into(),
        };
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("connection refused"));
    }
}
