//! Transient feedback messages.

use std::time::Duration;

/// How long a toast stays on screen before it expires.
pub const TOAST_TTL: Duration = Duration::from_millis(3500);

/// Visual register of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStatus {
    /// Operation completed.
    Success,
    /// Operation failed.
    Error,
    /// Neutral notice.
    Info,
}

/// A single transient message.
///
/// The controller holds at most one toast at a time. A new toast replaces
/// whatever is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Visual register.
    pub status: ToastStatus,
    /// Message text.
    pub message: String,
}

impl Toast {
    /// Creates a success toast.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: ToastStatus::Success,
            message: message.into(),
        }
    }

    /// Creates an error toast.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ToastStatus::Error,
            message: message.into(),
        }
    }

    /// Creates an info toast.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            status: ToastStatus::Info,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_status() {
        assert_eq!(Toast::success("ok").status, ToastStatus::Success);
        assert_eq!(Toast::error("no").status, ToastStatus::Error);
        assert_eq!(Toast::info("hm").status, ToastStatus::Info);
    }
}
