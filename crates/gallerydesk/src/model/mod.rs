//! Data models for the admin console.

mod login;
mod thumbnail;
mod upload;

pub use login::LoginForm;
pub use thumbnail::ThumbnailState;
pub use upload::{PickedImage, UploadForm};
