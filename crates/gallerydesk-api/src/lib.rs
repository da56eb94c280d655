//! # gallerydesk-api
//!
//! Typed HTTP client for the portfolio gallery backend.
//!
//! This crate provides:
//! - Injected base-address configuration with media-origin derivation
//! - Wire types for photo records, including the polymorphic image field
//! - Image URL normalization (total and idempotent)
//! - A [`GalleryClient`] over the login, listing, upload, delete and
//!   logout endpoints
//!
//! ## Quick Start
//!
//! ```ignore
//! use gallerydesk_api::{ApiConfig, GalleryClient};
//!
//! #[tokio::main]
//! async fn main() -> gallerydesk_api::Result<()> {
//!     let config = ApiConfig::from_env()?;
//!     let client = GalleryClient::new(config);
//!
//!     let login = client.login("admin", "secret").await?;
//!     for photo in client.list_photos(&login.token).await? {
//!         println!("{}", photo.normalize(client.config()).title);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
mod error;
pub mod photo;
pub mod resolve;

pub use client::GalleryClient;
pub use config::{API_URL_ENV, ApiConfig, DEFAULT_API_URL};
pub use error::{Error, Result};
pub use photo::{
    GalleryPhoto, ImageObject, ImageRef, LoginSuccess, NewPhoto, Photo, PhotoId, UserProfile,
};
pub use resolve::{cache_busted, resolve_image};
