//! Display text for the uploader card.

#[cfg(test)]
#[path = "labels_test.rs"]
mod labels_test;

pub const CARD_TITLE: &str = "File Uploader";
pub const DROP_HINT: &str = "Drag and drop a file here, or click to select";
pub const SUCCESS_TITLE: &str = "File uploaded successfully!";
pub const PREVIEW_ALT: &str = "Preview";

pub fn upload_button_label(uploading: bool) -> &'static str {
    if uploading { "Uploading..." } else { "Upload File" }
}

pub fn progress_label(percent: u8) -> String {
    format!("Upload progress: {percent}%")
}

/// The progress bar is hidden until the first tick.
pub fn show_progress(percent: u8) -> bool {
    percent > 0
}
