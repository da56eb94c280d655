//! Error types for gallery API operations.

/// Result type alias for gallery API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Gallery API error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP transport error (connection refused, DNS, timeout, aborted body).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// The session token was missing, invalid, or expired (HTTP 401).
    #[error("Authentication required")]
    AuthRequired,

    /// The server rejected the request with a parseable error body.
    #[error("{message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },

    /// The server answered with a body that is not JSON, typically an HTML
    /// error page from a proxy or a crashed backend.
    #[error("Unexpected {status} response from the backend")]
    InvalidResponse {
        /// HTTP status code.
        status: u16,
    },

    /// Invalid base address configuration.
    #[error("Invalid API base address: {0}")]
    InvalidBase(String),
}

impl Error {
    /// Creates a server error from a status code and extracted message.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// True when the failure means the backend could not be reached or did
    /// not speak the expected protocol, as opposed to rejecting the request.
    #[must_use]
    pub const fn is_connectivity(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Json(_) | Self::InvalidResponse { .. }
        )
    }
}
