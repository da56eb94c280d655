//! Session model.

use gallerydesk_api::UserProfile;

/// Authenticated session state.
///
/// The token alone decides authentication. `user` is informational and
/// never present without a token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    /// Opaque bearer token, empty when unauthenticated.
    pub token: String,
    /// Identity of the signed-in user, when known.
    pub user: Option<UserProfile>,
}

impl Session {
    /// Creates an unauthenticated session.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Creates a session from a login payload.
    ///
    /// A blank token yields an anonymous session, dropping the user with
    /// it.
    #[must_use]
    pub fn authenticated(token: impl Into<String>, user: Option<UserProfile>) -> Self {
        let token = token.into();
        if token.trim().is_empty() {
            return Self::anonymous();
        }
        Self { token, user }
    }

    /// True when a token is held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.token.trim().is_empty()
    }

    /// Display name of the signed-in user.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.username.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_token_is_anonymous() {
        assert!(!Session::anonymous().is_authenticated());
        assert!(!Session::authenticated("  ", None).is_authenticated());
    }

    #[test]
    fn test_blank_token_drops_user() {
        let user = Some(UserProfile {
            username: "admin".to_owned(),
        });
        let session = Session::authenticated("", user);
        assert!(session.user.is_none());
    }

    #[test]
    fn test_username_accessor() {
        let session = Session::authenticated(
            "abc",
            Some(UserProfile {
                username: "admin".to_owned(),
            }),
        );
        assert!(session.is_authenticated());
        assert_eq!(session.username(), Some("admin"));
    }
}
