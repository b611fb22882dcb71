//! Upload inspection
//!
//! A file is accepted only when its extension is on the image allow-list AND its
//! magic bytes sniff to the same MIME type the extension implies.

use std::path::Path;

use thiserror::Error;

use shop_shared::constants::ALLOWED_IMAGE_EXTENSIONS;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UploadError {
    #[error("File is empty")]
    Empty,
    #[error("File exceeds the {0} byte limit")]
    TooLarge(usize),
    #[error("File extension not allowed: {0}")]
    ExtensionNotAllowed(String),
    #[error("File content does not match its extension")]
    ContentMismatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectedImage {
    /// Lower-cased extension without the dot
    pub extension: String,
    pub content_type: String,
    pub size: usize,
}

pub fn inspect_image(
    original_name: &str,
    bytes: &[u8],
    max_size: usize,
) -> Result<InspectedImage, UploadError> {
    let extension = Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    if !ALLOWED_IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        return Err(UploadError::ExtensionNotAllowed(extension));
    }
    if bytes.is_empty() {
        return Err(UploadError::Empty);
    }
    if bytes.len() > max_size {
        return Err(UploadError::TooLarge(max_size));
    }

    let expected = mime_guess::from_ext(&extension)
        .first()
        .ok_or(UploadError::ContentMismatch)?;

    let sniffed = infer::get(bytes).ok_or(UploadError::ContentMismatch)?;
    if sniffed.matcher_type() != infer::MatcherType::Image
        || sniffed.mime_type() != expected.essence_str()
    {
        return Err(UploadError::ContentMismatch);
    }

    Ok(InspectedImage {
        extension,
        content_type: sniffed.mime_type().to_string(),
        size: bytes.len(),
    })
}
