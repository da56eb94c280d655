//! Durable session persistence.
//!
//! Two key files under the store directory: the raw token string and the
//! JSON-encoded user object. Loading is fail-soft so a corrupted file can
//! never lock the user out of the login screen.

use super::Session;
use crate::error::Result;
use gallerydesk_api::UserProfile;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File holding the raw token string.
const TOKEN_FILE: &str = "session.token";

/// File holding the JSON-encoded user object.
const USER_FILE: &str = "session-user.json";

/// File-backed store for the two session keys.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    /// Opens the store under the platform data directory.
    #[must_use]
    pub fn open_default() -> Self {
        let dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gallerydesk");
        Self::new(dir)
    }

    /// Opens the store under an explicit directory.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Reads the persisted session.
    ///
    /// Missing files mean unauthenticated. A malformed user file is
    /// dropped with a warning instead of failing the startup path, and a
    /// stored user without a token is ignored since the token is the only
    /// authority on authentication.
    pub async fn load(&self) -> Session {
        let token = (tokio::fs::read_to_string(self.token_path()).await)
            .map(|raw| raw.trim().to_owned())
            .unwrap_or_default();
        if token.is_empty() {
            return Session::anonymous();
        }
        let user = self.load_user().await;
        Session { token, user }
    }

    async fn load_user(&self) -> Option<UserProfile> {
        let raw = tokio::fs::read_to_string(self.user_path()).await.ok()?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(error) => {
                warn!(%error, "stored user profile is malformed, ignoring");
                None
            }
        }
    }

    /// Persists the session.
    ///
    /// An empty token removes the token file rather than writing an empty
    /// sentinel, and an absent user removes the user file. The store
    /// directory is created on demand.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory or files cannot be written.
    pub async fn save(&self, session: &Session) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;

        if session.is_authenticated() {
            tokio::fs::write(self.token_path(), session.token.as_bytes()).await?;
        } else {
            remove_if_present(&self.token_path()).await?;
        }

        match &session.user {
            Some(user) if session.is_authenticated() => {
                let contents = serde_json::to_string_pretty(user)?;
                tokio::fs::write(self.user_path(), contents).await?;
            }
            _ => remove_if_present(&self.user_path()).await?,
        }

        debug!(path = ?self.dir, "session persisted");
        Ok(())
    }

    /// Removes both keys.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failures other than the files already being
    /// gone.
    pub async fn clear(&self) -> Result<()> {
        remove_if_present(&self.token_path()).await?;
        remove_if_present(&self.user_path()).await?;
        debug!("session cleared");
        Ok(())
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_FILE)
    }

    fn user_path(&self) -> PathBuf {
        self.dir.join(USER_FILE)
    }
}

async fn remove_if_present(path: &Path) -> Result<()> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(error) => Err(error.into()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, SessionStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path());
        (dir, store)
    }

    fn admin() -> Session {
        Session::authenticated(
            "abc123",
            Some(UserProfile {
                username: "admin".to_owned(),
            }),
        )
    }

    #[tokio::test]
    async fn test_round_trip() {
        let (_dir, store) = store();
        store.save(&admin()).await.unwrap();

        let loaded = store.load().await;
        assert_eq!(loaded, admin());
    }

    #[tokio::test]
    async fn test_missing_files_load_as_anonymous() {
        let (_dir, store) = store();
        let loaded = store.load().await;
        assert_eq!(loaded, Session::anonymous());
    }

    #[tokio::test]
    async fn test_saving_anonymous_removes_keys() {
        let (dir, store) = store();
        store.save(&admin()).await.unwrap();
        store.save(&Session::anonymous()).await.unwrap();

        assert!(!dir.path().join(TOKEN_FILE).exists());
        assert!(!dir.path().join(USER_FILE).exists());
        assert_eq!(store.load().await, Session::anonymous());
    }

    #[tokio::test]
    async fn test_malformed_user_file_is_ignored() {
        let (dir, store) = store();
        store.save(&admin()).await.unwrap();
        tokio::fs::write(dir.path().join(USER_FILE), "{not json")
            .await
            .unwrap();

        let loaded = store.load().await;
        assert_eq!(loaded.token, "abc123");
        assert!(loaded.user.is_none());
    }

    #[tokio::test]
    async fn test_user_without_token_is_ignored() {
        let (dir, store) = store();
        store.save(&admin()).await.unwrap();
        tokio::fs::remove_file(dir.path().join(TOKEN_FILE))
            .await
            .unwrap();

        let loaded = store.load().await;
        assert_eq!(loaded, Session::anonymous());
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let (_dir, store) = store();
        store.save(&admin()).await.unwrap();
        store.clear().await.unwrap();
        store.clear().await.unwrap();

        assert_eq!(store.load().await, Session::anonymous());
    }

    #[tokio::test]
    async fn test_whitespace_token_loads_as_anonymous() {
        let (dir, store) = store();
        tokio::fs::create_dir_all(dir.path()).await.unwrap();
        tokio::fs::write(dir.path().join(TOKEN_FILE), "   \n")
            .await
            .unwrap();

        assert_eq!(store.load().await, Session::anonymous());
    }
}
