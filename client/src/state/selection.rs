//! Render snapshot of the selected file.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use uploader::{CandidateFile, PreviewSource, Uploader};

/// What the drop zone shows for a selected file.
///
/// Progress is not part of the snapshot, so a memo over it holds steady while
/// progress ticks arrive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedView {
    pub name: String,
    pub preview_src: Option<String>,
    pub uploading: bool,
}

impl SelectedView {
    pub fn of<F, P>(uploader: &Uploader<F, P>) -> Option<Self>
    where
        F: CandidateFile + Clone,
        P: PreviewSource<F>,
        P::Handle: AsRef<str>,
    {
        uploader.file().map(|file| Self {
            name: file.name().to_owned(),
            preview_src: uploader.preview().map(|src| src.as_ref().to_owned()),
            uploading: uploader.is_uploading(),
        })
    }
}
