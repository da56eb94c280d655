//! Thumbnail fetch state.

use iced::widget::image;

/// Lifecycle of one photo's gallery thumbnail.
#[derive(Debug, Clone)]
pub enum ThumbnailState {
    /// Fetch in progress.
    Loading,
    /// Decoded and ready to draw.
    Ready(image::Handle),
    /// Fetch failed; a placeholder is drawn instead.
    Failed,
}
