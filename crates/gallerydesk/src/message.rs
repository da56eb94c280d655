//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.

use gallerydesk_api::{GalleryPhoto, PhotoId};
use gallerydesk_core::{ApiFailure, Session};
use iced::widget::image;

use crate::model::PickedImage;

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    // Startup
    /// Stored session read back from disk.
    SessionRestored(Session),

    // Sign-in
    /// Login form messages.
    Login(LoginMessage),
    /// Login request settled.
    LoginFinished(Result<Session, ApiFailure>),

    // Gallery
    /// Photo listing settled.
    PhotosLoaded(Result<Vec<GalleryPhoto>, ApiFailure>),
    /// Search box edited.
    SearchChanged(String),
    /// Re-run the photo fetch after a connection failure.
    RetryConnection,
    /// Thumbnail fetch settled for one photo.
    ThumbnailLoaded(PhotoId, Result<image::Handle, ApiFailure>),
    /// Open the full-size image in the system browser.
    OpenImage(String),

    // Upload
    /// Upload form messages.
    Upload(UploadMessage),
    /// File dialog closed, with the picked file when there is one.
    ImagePicked(Result<Option<PickedImage>, String>),
    /// Upload request settled.
    UploadFinished(Result<GalleryPhoto, ApiFailure>),

    // Delete
    /// Ask before removing a photo.
    RequestDelete(PhotoId),
    /// Keep the photo after all.
    CancelDelete,
    /// Fire the delete request.
    ConfirmDelete(PhotoId),
    /// Delete request settled.
    DeleteFinished(PhotoId, Result<(), ApiFailure>),

    // Session
    /// Sign out of the console.
    Logout,
    /// Logout notice delivered, or dropped without consequence.
    LogoutPosted,
    /// Session written to disk.
    SessionSaved(Result<(), String>),
    /// Stored session wiped.
    SessionCleared(Result<(), String>),

    // Notifications
    /// Current toast outlived its display window.
    ToastExpired(u64),
    /// Toast dismissed by hand.
    ToastDismissed,

    // Keyboard
    /// Keyboard shortcut pressed.
    KeyPressed(KeyboardAction),
    /// Keyboard event with no binding.
    KeyboardIgnored,
}

/// Login form messages.
#[derive(Debug, Clone)]
pub enum LoginMessage {
    /// Username edited.
    UsernameChanged(String),
    /// Password edited.
    PasswordChanged(String),
    /// Credentials submitted.
    Submit,
}

/// Upload form messages.
#[derive(Debug, Clone)]
pub enum UploadMessage {
    /// Title edited.
    TitleChanged(String),
    /// Category edited.
    CategoryChanged(String),
    /// Notes edited.
    NotesChanged(String),
    /// Open the native file picker.
    PickImage,
    /// Drop the picked file, keeping the text fields.
    ClearImage,
    /// Send the draft to the backend.
    Submit,
}

/// Actions bound to keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardAction {
    /// Esc: close the delete prompt, else dismiss the toast.
    Cancel,
    /// F5: refresh the photo list.
    Refresh,
}
