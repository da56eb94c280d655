//! Classification of gateway errors for state handling.

use gallerydesk_api::Error as ApiError;
use thiserror::Error;

/// A gateway failure reduced to what the controller needs to know.
///
/// [`gallerydesk_api::Error`] carries transport types that are not `Clone`,
/// so async task results are folded into this shape before they travel
/// through the message loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiFailure {
    /// The stored token was rejected. The session must be discarded.
    #[error("authorization rejected")]
    Unauthorized,

    /// The backend could not be reached or did not answer as itself.
    #[error("backend unreachable: {message}")]
    Offline {
        /// Transport-level detail, for logs.
        message: String,
    },

    /// The backend answered and refused the request.
    #[error("{message}")]
    Rejected {
        /// Human-readable refusal, straight from the response body.
        message: String,
    },
}

impl ApiFailure {
    /// Whether this failure means the backend is unreachable.
    #[must_use]
    pub const fn is_offline(&self) -> bool {
        matches!(self, Self::Offline { .. })
    }
}

impl From<ApiError> for ApiFailure {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::AuthRequired => Self::Unauthorized,
            ApiError::Server { message, .. } => Self::Rejected { message },
            other if other.is_connectivity() => Self::Offline {
                message: other.to_string(),
            },
            other => Self::Rejected {
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_required_maps_to_unauthorized() {
        assert_eq!(
            ApiFailure::from(ApiError::AuthRequired),
            ApiFailure::Unauthorized
        );
    }

    #[test]
    fn test_server_refusal_keeps_message() {
        let failure = ApiFailure::from(ApiError::server(400, "Invalid credentials."));
        assert_eq!(
            failure,
            ApiFailure::Rejected {
                message: "Invalid credentials.".to_owned()
            }
        );
        assert!(!failure.is_offline());
    }

    #[test]
    fn test_html_response_maps_to_offline() {
        let failure = ApiFailure::from(ApiError::InvalidResponse { status: 502 });
        assert!(failure.is_offline());
    }
}
