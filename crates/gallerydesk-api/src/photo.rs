//! Wire types for the gallery API.

use crate::config::ApiConfig;
use crate::resolve::resolve_image;
use bytes::Bytes;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Title shown for records the backend stored without one.
pub const UNTITLED_TITLE: &str = "Untitled photo";

/// Photo identifier as produced by the backend.
///
/// Older records carry numeric ids, newer ones opaque strings; both are
/// stable and both address the delete endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PhotoId {
    /// Numeric identifier.
    Number(i64),
    /// String identifier.
    Text(String),
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for PhotoId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for PhotoId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_owned())
    }
}

impl From<String> for PhotoId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

/// Authenticated user identity returned by the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Login name, shown in the gallery header.
    #[serde(default)]
    pub username: String,
}

/// Successful login payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginSuccess {
    /// Opaque session token.
    #[serde(default)]
    pub token: String,
    /// Identity of the signed-in user.
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// Storage-object form of an image reference.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ImageObject {
    /// TLS URL, preferred when present.
    #[serde(default)]
    pub secure_url: Option<String>,
    /// Plain URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Relative storage path.
    #[serde(default)]
    pub path: Option<String>,
    /// Storage public id, resolvable like a relative path.
    #[serde(default)]
    pub public_id: Option<String>,
}

/// Image reference as it appears on a photo record.
///
/// The backend has produced three shapes over its lifetime: a bare URL or
/// path string, a storage object carrying URL fields, and nothing at all.
/// Unrecognized JSON shapes decode to [`ImageRef::Absent`] so one odd
/// record cannot poison a whole listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageRef {
    /// No image reference present.
    #[default]
    Absent,
    /// A bare string, absolute URL or site-relative path.
    Path(String),
    /// A storage object with one or more URL fields.
    Remote(ImageObject),
}

impl ImageRef {
    /// Interprets a raw JSON value as an image reference.
    #[must_use]
    pub fn from_value(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(path) => Self::Path(path.clone()),
            serde_json::Value::Object(_) => serde_json::from_value(value.clone())
                .map_or(Self::Absent, Self::Remote),
            _ => Self::Absent,
        }
    }
}

impl<'de> Deserialize<'de> for ImageRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// Raw photo record as returned by the backend, before normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct Photo {
    /// Stable identifier, list key and delete target.
    pub id: PhotoId,
    /// Display title.
    #[serde(default)]
    pub title: Option<String>,
    /// Classification label.
    #[serde(default)]
    pub category: Option<String>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Polymorphic image reference.
    #[serde(default)]
    pub image: ImageRef,
    /// Creation timestamp as sent by the backend.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Photo {
    /// Normalizes the record for display.
    ///
    /// Applies the title placeholder, resolves the image reference to an
    /// absolute URL and parses the creation timestamp. After this, the
    /// image is either `None` or a fully qualified URL.
    #[must_use]
    pub fn normalize(self, config: &ApiConfig) -> GalleryPhoto {
        let image_url = resolve_image(&self.image, config);
        GalleryPhoto {
            id: self.id,
            title: display_title(self.title.as_deref()),
            category: none_if_blank(self.category),
            notes: none_if_blank(self.notes),
            image_url,
            created_at: self.created_at.as_deref().and_then(parse_timestamp),
        }
    }
}

/// Photo record normalized for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryPhoto {
    /// Stable identifier.
    pub id: PhotoId,
    /// Title with the placeholder applied.
    pub title: String,
    /// Classification label.
    pub category: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Fully qualified image URL, when the record has a displayable image.
    pub image_url: Option<String>,
    /// Parsed creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for creating a photo through the multipart upload endpoint.
#[derive(Debug, Clone)]
pub struct NewPhoto {
    /// Display title.
    pub title: String,
    /// Classification label.
    pub category: String,
    /// Free-form notes, sent even when empty.
    pub notes: String,
    /// File name as picked by the user.
    pub file_name: String,
    /// MIME type of the image bytes.
    pub content_type: String,
    /// Raw image bytes.
    pub bytes: Bytes,
}

fn display_title(title: Option<&str>) -> String {
    match title.map(str::trim) {
        Some(title) if !title.is_empty() => title.to_owned(),
        _ => UNTITLED_TITLE.to_owned(),
    }
}

fn none_if_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

/// Parses the backend timestamp, tolerating a missing timezone.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|stamp| stamp.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_config() -> ApiConfig {
        ApiConfig::new("https://api.example.com/api").unwrap()
    }

    #[test]
    fn test_photo_id_decodes_number_and_string() {
        let numeric: PhotoId = serde_json::from_str("42").unwrap();
        assert_eq!(numeric, PhotoId::Number(42));

        let text: PhotoId = serde_json::from_str("\"a1b2\"").unwrap();
        assert_eq!(text, PhotoId::Text("a1b2".to_owned()));

        assert_eq!(numeric.to_string(), "42");
        assert_eq!(text.to_string(), "a1b2");
    }

    #[test]
    fn test_image_ref_decodes_string() {
        let image: ImageRef = serde_json::from_str("\"/media/a.png\"").unwrap();
        assert_eq!(image, ImageRef::Path("/media/a.png".to_owned()));
    }

    #[test]
    fn test_image_ref_decodes_object() {
        let image: ImageRef =
            serde_json::from_str(r#"{"secure_url": "https://cdn/a.png", "extra": 1}"#).unwrap();
        let ImageRef::Remote(object) = image else {
            panic!("expected remote object");
        };
        assert_eq!(object.secure_url.as_deref(), Some("https://cdn/a.png"));
        assert!(object.url.is_none());
    }

    #[test]
    fn test_image_ref_tolerates_odd_shapes() {
        for raw in ["null", "7", "true", "[\"a.png\"]"] {
            let image: ImageRef = serde_json::from_str(raw).unwrap();
            assert_eq!(image, ImageRef::Absent, "input: {raw}");
        }
        // Field of the wrong type inside the object falls back too.
        let image: ImageRef = serde_json::from_str(r#"{"secure_url": 7}"#).unwrap();
        assert_eq!(image, ImageRef::Absent);
    }

    #[test]
    fn test_photo_decodes_with_missing_fields() {
        let photo: Photo = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(photo.id, PhotoId::Number(3));
        assert!(photo.title.is_none());
        assert_eq!(photo.image, ImageRef::Absent);
    }

    #[test]
    fn test_normalize_applies_placeholder_title() {
        let photo: Photo = serde_json::from_str(r#"{"id": 1, "title": "  "}"#).unwrap();
        let normalized = photo.normalize(&test_config());
        assert_eq!(normalized.title, UNTITLED_TITLE);
    }

    #[test]
    fn test_normalize_resolves_relative_image() {
        let photo: Photo =
            serde_json::from_str(r#"{"id": 1, "title": "Sunset", "image": "/media/a.png"}"#)
                .unwrap();
        let normalized = photo.normalize(&test_config());
        assert_eq!(
            normalized.image_url.as_deref(),
            Some("https://api.example.com/media/a.png")
        );
    }

    #[test]
    fn test_normalize_parses_timestamps() {
        let with_zone = parse_timestamp("2024-05-03T10:22:01.123456Z").unwrap();
        assert_eq!(with_zone.timestamp(), 1_714_731_721);

        let naive = parse_timestamp("2024-05-03T10:22:01.123456").unwrap();
        assert_eq!(naive.timestamp(), with_zone.timestamp());

        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn test_login_success_tolerates_missing_user() {
        let login: LoginSuccess = serde_json::from_str(r#"{"token": "abc"}"#).unwrap();
        assert_eq!(login.token, "abc");
        assert!(login.user.is_none());
    }
}
