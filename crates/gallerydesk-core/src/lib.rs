//! # gallerydesk-core
//!
//! Core flow logic for the `GalleryDesk` admin console.
//!
//! This crate provides:
//! - Session model and durable session store
//! - Upload draft state and client-side validation
//! - Toast notifications
//! - The pure gallery state controller the GUI shell drives

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod controller;
pub mod draft;
mod error;
pub mod session;
pub mod toast;

pub use controller::{Action, ApiFailure, GalleryController, Phase};
pub use draft::{
    ALLOWED_IMAGE_TYPES, DraftError, DraftFile, DraftResult, MAX_IMAGE_BYTES, UploadDraft,
    content_type_for,
};
pub use error::{Error, Result};
pub use session::{Session, SessionStore};
pub use toast::{TOAST_TTL, Toast, ToastStatus};
