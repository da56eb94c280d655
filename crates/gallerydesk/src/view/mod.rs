//! View components for the application.

mod header;
mod login;
mod photo_grid;
mod toast;
mod upload;

pub use header::{view_header, view_offline_banner};
pub use login::view_login;
pub use photo_grid::view_photo_grid;
pub use toast::view_toast;
pub use upload::view_upload_card;
