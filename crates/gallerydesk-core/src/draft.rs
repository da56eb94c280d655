//! Upload draft state and validation.

use bytes::Bytes;
use gallerydesk_api::NewPhoto;
use std::path::Path;

/// Largest accepted image, 10 MiB.
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// Content types the backend accepts for the image part.
pub const ALLOWED_IMAGE_TYPES: [&str; 4] =
    ["image/jpeg", "image/png", "image/webp", "image/gif"];

/// A picked image file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftFile {
    /// File name shown in the form and sent with the multipart part.
    pub name: String,
    /// MIME type inferred from the file extension.
    pub content_type: String,
    /// Raw image bytes.
    pub bytes: Bytes,
}

/// Editable upload form state.
///
/// Lives only in memory. Cleared on a successful upload or an explicit
/// reset, preserved verbatim when the backend rejects the submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadDraft {
    /// Display title.
    pub title: String,
    /// Classification label.
    pub category: String,
    /// Free-form notes.
    pub notes: String,
    /// Selected image file.
    pub file: Option<DraftFile>,
}

/// Validation error for an upload draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    /// No file selected.
    MissingFile,
    /// Title is blank.
    MissingTitle,
    /// Category is blank.
    MissingCategory,
    /// File exceeds [`MAX_IMAGE_BYTES`].
    FileTooLarge,
    /// File content type is not in [`ALLOWED_IMAGE_TYPES`].
    UnsupportedType,
}

impl DraftError {
    /// Get human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::MissingFile => "Please select a photo to upload.",
            Self::MissingTitle => "Please give the photo a title.",
            Self::MissingCategory => "Please pick a category.",
            Self::FileTooLarge => "Please choose a file smaller than 10 MB.",
            Self::UnsupportedType => "Only JPEG, PNG, WebP or GIF images are supported.",
        }
    }

    /// Get the field name this error relates to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingFile | Self::FileTooLarge | Self::UnsupportedType => "image",
            Self::MissingTitle => "title",
            Self::MissingCategory => "category",
        }
    }
}

impl std::fmt::Display for DraftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for DraftError {}

/// Result of validating a draft.
pub type DraftResult = Result<(), Vec<DraftError>>;

impl UploadDraft {
    /// Validates the draft without touching the network.
    ///
    /// # Errors
    ///
    /// Returns every violation at once so the form can mark all fields.
    pub fn validate(&self) -> DraftResult {
        let mut errors = Vec::new();

        match &self.file {
            None => errors.push(DraftError::MissingFile),
            Some(file) => {
                if !ALLOWED_IMAGE_TYPES.contains(&file.content_type.as_str()) {
                    errors.push(DraftError::UnsupportedType);
                }
                if file.bytes.len() > MAX_IMAGE_BYTES {
                    errors.push(DraftError::FileTooLarge);
                }
            }
        }
        if self.title.trim().is_empty() {
            errors.push(DraftError::MissingTitle);
        }
        if self.category.trim().is_empty() {
            errors.push(DraftError::MissingCategory);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Converts a validated draft into the wire payload.
    ///
    /// Title and category are trimmed; notes go through as an empty string
    /// when blank, which is what the backend's form handler expects.
    /// Returns `None` when no file is selected.
    #[must_use]
    pub fn to_new_photo(&self) -> Option<NewPhoto> {
        let file = self.file.as_ref()?;
        Some(NewPhoto {
            title: self.title.trim().to_owned(),
            category: self.category.trim().to_owned(),
            notes: self.notes.trim().to_owned(),
            file_name: file.name.clone(),
            content_type: file.content_type.clone(),
            bytes: file.bytes.clone(),
        })
    }

    /// Resets every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Infers the MIME type for a picked file from its extension.
#[must_use]
pub fn content_type_for(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn png_file(len: usize) -> DraftFile {
        DraftFile {
            name: "sunset.png".to_owned(),
            content_type: "image/png".to_owned(),
            bytes: Bytes::from(vec![0u8; len]),
        }
    }

    #[test]
    fn test_empty_draft_reports_every_field() {
        let errors = UploadDraft::default().validate().unwrap_err();
        assert!(errors.contains(&DraftError::MissingFile));
        assert!(errors.contains(&DraftError::MissingTitle));
        assert!(errors.contains(&DraftError::MissingCategory));
    }

    #[test]
    fn test_valid_draft_passes() {
        let draft = UploadDraft {
            title: "  Sunset ".to_owned(),
            category: "Nature".to_owned(),
            notes: String::new(),
            file: Some(png_file(2 * 1024 * 1024)),
        };
        assert!(draft.validate().is_ok());

        let photo = draft.to_new_photo().unwrap();
        assert_eq!(photo.title, "Sunset");
        assert_eq!(photo.category, "Nature");
        assert_eq!(photo.notes, "");
        assert_eq!(photo.content_type, "image/png");
    }

    #[test]
    fn test_oversized_file_rejected() {
        let draft = UploadDraft {
            title: "Sunset".to_owned(),
            category: "Nature".to_owned(),
            notes: String::new(),
            file: Some(png_file(MAX_IMAGE_BYTES + 1)),
        };
        assert_eq!(draft.validate().unwrap_err(), vec![DraftError::FileTooLarge]);
    }

    #[test]
    fn test_unsupported_type_rejected() {
        let mut file = png_file(16);
        file.content_type = "application/pdf".to_owned();
        let draft = UploadDraft {
            title: "Doc".to_owned(),
            category: "Misc".to_owned(),
            notes: String::new(),
            file: Some(file),
        };
        assert_eq!(
            draft.validate().unwrap_err(),
            vec![DraftError::UnsupportedType]
        );
    }

    #[test]
    fn test_error_fields_are_stable() {
        assert_eq!(DraftError::MissingFile.field(), "image");
        assert_eq!(DraftError::FileTooLarge.field(), "image");
        assert_eq!(DraftError::MissingTitle.field(), "title");
        assert_eq!(DraftError::MissingCategory.field(), "category");
    }

    #[test]
    fn test_content_type_inference() {
        assert_eq!(
            content_type_for(&PathBuf::from("a/b/photo.JPG")),
            Some("image/jpeg")
        );
        assert_eq!(
            content_type_for(&PathBuf::from("photo.webp")),
            Some("image/webp")
        );
        assert_eq!(content_type_for(&PathBuf::from("notes.txt")), None);
        assert_eq!(content_type_for(&PathBuf::from("noext")), None);
    }
}
