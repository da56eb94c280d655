//! Upload form state.

use bytes::Bytes;
use gallerydesk_core::{DraftFile, UploadDraft};
use iced::widget::image;

/// File handed back by the native picker.
#[derive(Debug, Clone)]
pub struct PickedImage {
    /// File name as shown in the picker.
    pub name: String,
    /// MIME type guessed from the extension.
    pub content_type: Option<String>,
    /// Raw file contents.
    pub bytes: Bytes,
}

/// Upload form: the draft plus a preview of the picked file.
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    /// Draft sent to the backend on submit.
    pub draft: UploadDraft,
    /// Decoded preview of the picked image.
    pub preview: Option<image::Handle>,
}

impl UploadForm {
    /// Attach a picked file to the draft and build its preview.
    ///
    /// An unknown MIME type is kept as an empty string so validation
    /// can report it instead of the picker guessing wrong.
    pub fn attach(&mut self, picked: PickedImage) {
        self.preview = Some(image::Handle::from_bytes(picked.bytes.clone()));
        self.draft.file = Some(DraftFile {
            name: picked.name,
            content_type: picked.content_type.unwrap_or_default(),
            bytes: picked.bytes,
        });
    }

    /// Drop the picked file, keeping the text fields.
    pub fn detach(&mut self) {
        self.draft.file = None;
        self.preview = None;
    }

    /// Reset every field after a successful upload.
    pub fn clear(&mut self) {
        self.draft.clear();
        self.preview = None;
    }
}
