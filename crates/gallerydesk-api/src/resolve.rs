//! Image reference normalization.
//!
//! The backend stores images in cloud storage and has answered with three
//! shapes over its lifetime: absolute URLs, site-relative paths and storage
//! objects. Everything funnels through [`resolve_image`] before reaching
//! UI-facing state, so list rendering only ever sees `None` or an absolute
//! URL.

use crate::config::ApiConfig;
use crate::photo::{ImageObject, ImageRef};
use chrono::Utc;

/// Resolves an image reference to a displayable absolute URL.
///
/// Total and idempotent: any input maps to a well-formed absolute URL or
/// `None`, and feeding a resolved URL back in returns it unchanged.
#[must_use]
pub fn resolve_image(image: &ImageRef, config: &ApiConfig) -> Option<String> {
    match image {
        ImageRef::Absent => None,
        ImageRef::Path(path) => resolve_path(path, config),
        ImageRef::Remote(object) => resolve_object(object, config),
    }
}

/// Picks the best URL field of a storage object.
///
/// `secure_url` wins, then `url`, then the relative `path` or `public_id`
/// joined against the media origin. Blank fields are skipped.
fn resolve_object(object: &ImageObject, config: &ApiConfig) -> Option<String> {
    [
        object.secure_url.as_deref(),
        object.url.as_deref(),
        object.path.as_deref(),
        object.public_id.as_deref(),
    ]
    .into_iter()
    .flatten()
    .find_map(|candidate| resolve_path(candidate, config))
}

fn resolve_path(path: &str, config: &ApiConfig) -> Option<String> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return None;
    }
    if is_absolute(trimmed) {
        return Some(trimmed.to_owned());
    }
    Some(join_media(trimmed, config))
}

fn is_absolute(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

/// Joins a relative path against the media origin.
///
/// A leading slash on the path and a missing one produce the same URL; the
/// slash-terminated origin guarantees no segment is dropped. When the URL
/// library refuses the join, plain concatenation with a single slash at the
/// seam is the fallback.
fn join_media(path: &str, config: &ApiConfig) -> String {
    let relative = path.trim_start_matches('/');
    let origin = config.media_origin();
    origin.join(relative).map_or_else(
        |_| format!("{}/{relative}", origin.as_str().trim_end_matches('/')),
        |url| url.to_string(),
    )
}

/// Appends a cache-busting timestamp query parameter.
///
/// Used when freshness matters more than cache reuse, e.g. refetching a
/// thumbnail right after an upload replaced it.
#[must_use]
pub fn cache_busted(url: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}t={}", Utc::now().timestamp_millis())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_config() -> ApiConfig {
        ApiConfig::new("https://api.example.com/api").unwrap()
    }

    #[test]
    fn test_absolute_url_unchanged() {
        let image = ImageRef::Path("https://x.com/a.png".to_owned());
        assert_eq!(
            resolve_image(&image, &test_config()).as_deref(),
            Some("https://x.com/a.png")
        );
    }

    #[test]
    fn test_relative_path_joined_against_media_origin() {
        let image = ImageRef::Path("/media/a.png".to_owned());
        assert_eq!(
            resolve_image(&image, &test_config()).as_deref(),
            Some("https://api.example.com/media/a.png")
        );
    }

    #[test]
    fn test_leading_slash_is_irrelevant() {
        let config = test_config();
        let with_slash = resolve_image(&ImageRef::Path("/media/a.png".to_owned()), &config);
        let without_slash = resolve_image(&ImageRef::Path("media/a.png".to_owned()), &config);
        assert_eq!(with_slash, without_slash);
        assert!(!with_slash.unwrap().contains("com//"));
    }

    #[test]
    fn test_secure_url_preferred() {
        let image = ImageRef::Remote(ImageObject {
            secure_url: Some("https://cdn/a.png".to_owned()),
            url: Some("http://cdn/a.png".to_owned()),
            ..ImageObject::default()
        });
        assert_eq!(
            resolve_image(&image, &test_config()).as_deref(),
            Some("https://cdn/a.png")
        );
    }

    #[test]
    fn test_blank_secure_url_falls_through() {
        let image = ImageRef::Remote(ImageObject {
            secure_url: Some("  ".to_owned()),
            url: None,
            path: Some("uploads/b.jpg".to_owned()),
            ..ImageObject::default()
        });
        assert_eq!(
            resolve_image(&image, &test_config()).as_deref(),
            Some("https://api.example.com/uploads/b.jpg")
        );
    }

    #[test]
    fn test_public_id_resolves_like_a_path() {
        let image = ImageRef::Remote(ImageObject {
            public_id: Some("portfolio/abc123".to_owned()),
            ..ImageObject::default()
        });
        assert_eq!(
            resolve_image(&image, &test_config()).as_deref(),
            Some("https://api.example.com/portfolio/abc123")
        );
    }

    #[test]
    fn test_absent_and_empty_resolve_to_none() {
        let config = test_config();
        assert_eq!(resolve_image(&ImageRef::Absent, &config), None);
        assert_eq!(resolve_image(&ImageRef::Path(String::new()), &config), None);
        assert_eq!(
            resolve_image(&ImageRef::Remote(ImageObject::default()), &config),
            None
        );
    }

    #[test]
    fn test_media_origin_with_path_keeps_all_segments() {
        let config = ApiConfig::new("https://example.com/service/api").unwrap();
        let image = ImageRef::Path("media/a.png".to_owned());
        assert_eq!(
            resolve_image(&image, &config).as_deref(),
            Some("https://example.com/service/media/a.png")
        );
    }

    #[test]
    fn test_cache_busted_keeps_base_url() {
        let busted = cache_busted("https://cdn/a.png");
        assert!(busted.starts_with("https://cdn/a.png?t="));

        let with_query = cache_busted("https://cdn/a.png?w=200");
        assert!(with_query.starts_with("https://cdn/a.png?w=200&t="));
    }

    proptest! {
        #[test]
        fn resolve_is_total(input in ".*") {
            let config = test_config();
            let _ = resolve_image(&ImageRef::Path(input), &config);
        }

        #[test]
        fn resolve_is_idempotent(input in ".*") {
            let config = test_config();
            if let Some(resolved) = resolve_image(&ImageRef::Path(input), &config) {
                let again = resolve_image(&ImageRef::Path(resolved.clone()), &config);
                prop_assert_eq!(again, Some(resolved));
            }
        }
    }
}
