//! Login form state.

/// Credentials being typed on the sign-in screen.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    /// Account name, trimmed before submit.
    pub username: String,
    /// Password, sent exactly as typed.
    pub password: String,
    /// True while a login request is on the wire.
    pub in_flight: bool,
}

impl LoginForm {
    /// Whether the form holds enough to attempt a sign-in.
    pub fn can_submit(&self) -> bool {
        !self.in_flight && !self.username.trim().is_empty() && !self.password.is_empty()
    }
}
