//! API base address configuration.
//!
//! The base address is resolved once at startup and injected into
//! [`GalleryClient`](crate::GalleryClient); nothing in this crate reads the
//! environment after construction.

use crate::error::{Error, Result};
use crate::photo::PhotoId;
use url::Url;

/// Environment variable overriding the API base address.
pub const API_URL_ENV: &str = "GALLERYDESK_API_URL";

/// Default API base address when the environment does not override it.
pub const DEFAULT_API_URL: &str = "https://backend1-2agm.onrender.com";

/// Resolved backend addresses.
///
/// Holds the normalized API base plus the derived media origin that
/// relative image paths resolve against.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    api_base: String,
    media_origin: Url,
}

impl ApiConfig {
    /// Builds a configuration from an explicit base address.
    ///
    /// A single trailing slash is stripped, mirroring how the address is
    /// usually written in deployment environments. The media origin is the
    /// base with a trailing `/api` path suffix removed; a base without that
    /// suffix is its own media origin.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBase`] when the address does not parse as an
    /// absolute URL with a host.
    pub fn new(base: &str) -> Result<Self> {
        let api_base = base.strip_suffix('/').unwrap_or(base).to_owned();
        let parsed = Url::parse(&api_base)
            .map_err(|error| Error::InvalidBase(format!("{api_base}: {error}")))?;
        if parsed.cannot_be_a_base() || !parsed.has_host() {
            return Err(Error::InvalidBase(format!("{api_base}: missing host")));
        }
        let media_origin = derive_media_origin(&api_base).unwrap_or(parsed);
        Ok(Self {
            api_base,
            media_origin,
        })
    }

    /// Reads the base address from [`API_URL_ENV`], falling back to
    /// [`DEFAULT_API_URL`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBase`] when the configured address does not
    /// parse.
    pub fn from_env() -> Result<Self> {
        match std::env::var(API_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => Self::new(value.trim()),
            _ => Self::new(DEFAULT_API_URL),
        }
    }

    /// Normalized API base address, without a trailing slash.
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Origin that relative image paths resolve against.
    ///
    /// Its path always ends with a slash so joining never drops a segment.
    #[must_use]
    pub const fn media_origin(&self) -> &Url {
        &self.media_origin
    }

    /// URL of the login endpoint.
    #[must_use]
    pub fn login_url(&self) -> String {
        self.endpoint("/auth/login/")
    }

    /// URL of the logout endpoint.
    #[must_use]
    pub fn logout_url(&self) -> String {
        self.endpoint("/auth/logout/")
    }

    /// URL of the photo collection endpoint.
    #[must_use]
    pub fn photos_url(&self) -> String {
        self.endpoint("/photos/")
    }

    /// URL of a single photo, the delete target.
    #[must_use]
    pub fn photo_url(&self, id: &PhotoId) -> String {
        format!("{}/photos/{id}/", self.api_base)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}

/// Strips a trailing `/api` segment and guarantees a slash-terminated path.
fn derive_media_origin(base: &str) -> Option<Url> {
    let no_slash = base.trim_end_matches('/');
    let media = no_slash.strip_suffix("/api").unwrap_or(no_slash);
    let mut url = Url::parse(media).ok()?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Some(url)
}
