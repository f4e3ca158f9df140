//! File validation against the upload allow-list and size ceiling.
//!
//! DESIGN
//! ======
//! Validation is a pure function of the declared MIME type and byte size.
//! The type check runs first, so an oversized unsupported file reports the
//! type problem. The picker filter is cosmetic; this module is the real gate.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::path::Path;

/// Largest accepted file, inclusive: 5 MiB.
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// MIME types the endpoint is allowed to receive.
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// `accept` attribute for the browser file picker.
pub const ACCEPT_FILTER: &str = "image/*,.pdf,.doc,.docx";

/// Why a candidate file was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// The declared MIME type is not in [`ALLOWED_MIME_TYPES`].
    #[error("File type not supported. Please upload an image, PDF, or Word document.")]
    UnsupportedType,
    /// The file is larger than [`MAX_FILE_SIZE`].
    #[error("File size exceeds 5MB limit.")]
    TooLarge,
}

/// Check a candidate's declared type and size.
///
/// # Errors
///
/// Returns [`Rejection::UnsupportedType`] for types outside the allow-list and
/// [`Rejection::TooLarge`] for files above [`MAX_FILE_SIZE`].
pub fn validate(mime_type: &str, size: u64) -> Result<(), Rejection> {
    if !ALLOWED_MIME_TYPES.contains(&mime_type) {
        return Err(Rejection::UnsupportedType);
    }
    if size > MAX_FILE_SIZE {
        return Err(Rejection::TooLarge);
    }
    Ok(())
}

/// Whether a MIME type can be previewed as an image.
#[must_use]
pub fn is_image(mime_type: &str) -> bool {
    mime_type.starts_with("image/")
}

/// Declared MIME type for a file on disk, by extension.
///
/// Unknown extensions map to `application/octet-stream`, which [`validate`]
/// rejects.
#[must_use]
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain",
        "csv" => "text/csv",
        "json" => "application/json",
        "zip" => "application/zip",
        "mp4" => "video/mp4",
        "mp3" => "audio/mpeg",
        _ => "application/octet-stream",
    }
}
