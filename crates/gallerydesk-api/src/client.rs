//! HTTP gateway for the gallery backend.

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::photo::{LoginSuccess, NewPhoto, Photo, PhotoId};
use bytes::Bytes;
use reqwest::multipart;
use reqwest::{Response, StatusCode, header};
use serde_json::Value;
use tracing::{debug, warn};

/// Typed client over the gallery endpoints.
///
/// Wraps a connection pool plus the injected [`ApiConfig`]; cheap to clone
/// and share. No operation retries internally; retrying is the caller's
/// decision through the explicit retry control.
#[derive(Debug, Clone)]
pub struct GalleryClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl GalleryClient {
    /// Creates a client over the given configuration.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// The injected configuration.
    #[must_use]
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Authenticates with a username and password.
    ///
    /// The username is trimmed before sending; the password goes through
    /// verbatim.
    ///
    /// # Errors
    ///
    /// Rejected credentials surface as [`Error::Server`] carrying the
    /// backend's `detail` message. A 401 from this endpoint means a wrong
    /// password, not an expired session, so it takes the same path. An
    /// HTML error page or unreachable backend surfaces as
    /// [`Error::InvalidResponse`] or [`Error::Http`].
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginSuccess> {
        let body = serde_json::json!({
            "username": username.trim(),
            "password": password,
        });
        let response = self
            .http
            .post(self.config.login_url())
            .json(&body)
            .send()
            .await?;
        let status = response.status();

        let payload = expect_json(response).await?;
        let login: LoginSuccess = serde_json::from_value(payload)?;
        if login.token.is_empty() {
            return Err(Error::server(
                status.as_u16(),
                "Login response did not include a token",
            ));
        }
        debug!("login accepted");
        Ok(login)
    }

    /// Fetches the photo collection.
    ///
    /// A non-array body is treated as an empty collection and records that
    /// fail to decode are skipped, so the result is always usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AuthRequired`] on 401; connectivity and server
    /// failures per [`Error`].
    pub async fn list_photos(&self, token: &str) -> Result<Vec<Photo>> {
        let response = self
            .http
            .get(self.config.photos_url())
            .header(header::AUTHORIZATION, auth_header(token))
            .send()
            .await?;
        ensure_authorized(response.status())?;

        let payload = expect_json(response).await?;
        Ok(photos_from_value(payload))
    }

    /// Uploads a new photo as a multipart form.
    ///
    /// The caller validates the draft first; this method only ships it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AuthRequired`] on 401, [`Error::Server`] with the
    /// extracted message on a rejected upload.
    pub async fn upload_photo(&self, token: &str, photo: NewPhoto) -> Result<Photo> {
        let NewPhoto {
            title,
            category,
            notes,
            file_name,
            content_type,
            bytes,
        } = photo;

        let image = multipart::Part::bytes(bytes.to_vec())
            .file_name(file_name)
            .mime_str(&content_type)?;
        let form = multipart::Form::new()
            .part("image", image)
            .text("title", title)
            .text("category", category)
            .text("notes", notes);

        let response = self
            .http
            .post(self.config.photos_url())
            .header(header::AUTHORIZATION, auth_header(token))
            .multipart(form)
            .send()
            .await?;
        ensure_authorized(response.status())?;

        let payload = expect_json(response).await?;
        serde_json::from_value(payload).map_err(Into::into)
    }

    /// Deletes a photo by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AuthRequired`] on 401; any other non-2xx answer is
    /// an error with the best message the body offers.
    pub async fn delete_photo(&self, token: &str, id: &PhotoId) -> Result<()> {
        let response = self
            .http
            .delete(self.config.photo_url(id))
            .header(header::AUTHORIZATION, auth_header(token))
            .send()
            .await?;
        ensure_authorized(response.status())?;

        let status = response.status();
        if status.is_success() {
            debug!(%id, "photo deleted");
            return Ok(());
        }
        let content_type = content_type_of(&response);
        let body = response.text().await?;
        Err(rejection(status, &content_type, &body))
    }

    /// Invalidates the session token server side.
    ///
    /// Best effort: a rejection is logged and swallowed, since the caller
    /// discards the session either way.
    ///
    /// # Errors
    ///
    /// Only transport failures are reported.
    pub async fn logout(&self, token: &str) -> Result<()> {
        let response = self
            .http
            .post(self.config.logout_url())
            .header(header::AUTHORIZATION, auth_header(token))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            debug!(%status, "logout rejected by the backend");
        }
        Ok(())
    }

    /// Downloads image bytes for local display.
    ///
    /// Media URLs are served publicly, so no auth header is attached.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Server`] for a non-2xx answer and [`Error::Http`]
    /// for transport failures.
    pub async fn fetch_image(&self, url: &str) -> Result<Bytes> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::server(
                status.as_u16(),
                format!("Image fetch failed with {status}"),
            ));
        }
        response.bytes().await.map_err(Into::into)
    }
}

/// Formats the `Authorization` header value for a session token.
fn auth_header(token: &str) -> String {
    format!("Token {token}")
}

/// Translates a 401 on an authenticated endpoint into [`Error::AuthRequired`].
fn ensure_authorized(status: StatusCode) -> Result<()> {
    if status == StatusCode::UNAUTHORIZED {
        return Err(Error::AuthRequired);
    }
    Ok(())
}

fn content_type_of(response: &Response) -> String {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned()
}

/// Reads a response expected to carry JSON.
///
/// Non-2xx statuses become [`rejection`] errors; a 2xx body that is not
/// JSON (a proxy's HTML page, for instance) is a connectivity-class error
/// rather than a decode panic deeper in the stack.
async fn expect_json(response: Response) -> Result<Value> {
    let status = response.status();
    let content_type = content_type_of(&response);
    let body = response.text().await?;

    if !status.is_success() {
        return Err(rejection(status, &content_type, &body));
    }
    if looks_like_html(&content_type, &body) {
        return Err(Error::InvalidResponse {
            status: status.as_u16(),
        });
    }
    serde_json::from_str(&body).map_err(Into::into)
}

/// Converts a non-2xx response into the matching error.
fn rejection(status: StatusCode, content_type: &str, body: &str) -> Error {
    if looks_like_html(content_type, body) {
        return Error::InvalidResponse {
            status: status.as_u16(),
        };
    }
    serde_json::from_str::<Value>(body).map_or(
        Error::InvalidResponse {
            status: status.as_u16(),
        },
        |value| Error::server(status.as_u16(), extract_message(&value)),
    )
}

/// True when a response body is evidently an HTML page rather than JSON.
fn looks_like_html(content_type: &str, body: &str) -> bool {
    let head = body.trim_start();
    content_type.contains("text/html")
        || head.get(..9).is_some_and(|h| h.eq_ignore_ascii_case("<!doctype"))
        || head.get(..5).is_some_and(|h| h.eq_ignore_ascii_case("<html"))
}

/// Extracts a human-readable message from an error body.
///
/// Prefers `detail`, then `message`, then the stringified body.
fn extract_message(body: &Value) -> String {
    for key in ["detail", "message"] {
        if let Some(text) = body.get(key).and_then(Value::as_str) {
            if !text.trim().is_empty() {
                return text.to_owned();
            }
        }
    }
    body.to_string()
}

/// Decodes a listing body, tolerating a non-array response.
fn photos_from_value(payload: Value) -> Vec<Photo> {
    let Value::Array(items) = payload else {
        warn!("photo listing was not an array, treating as empty");
        return Vec::new();
    };
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Photo>(item) {
            Ok(photo) => Some(photo),
            Err(error) => {
                warn!(%error, "skipping undecodable photo record");
                None
            }
        })
        .collect()
}
