//! Upload state machine: select → validate → preview → upload → result.
//!
//! SYSTEM CONTEXT
//! ==============
//! Surfaces own an [`Uploader`] and forward user actions to it. The network
//! request itself happens outside: [`Uploader::begin_upload`] hands out an
//! [`UploadTicket`], the surface sends the file, reports simulated progress
//! through [`Uploader::record_progress`], and settles with
//! [`Uploader::finish`].
//!
//! INVARIANTS
//! ==========
//! - At most one preview handle is alive; the old one is dropped before a new
//!   one is acquired.
//! - Progress is monotonic within one upload and only reaches 100 on success.
//! - A new selection clears progress and result; clearing keeps the result.
//! - While an upload is in flight, selection and clearing are refused so the
//!   visible file always matches the one being sent.

#[cfg(test)]
#[path = "workflow_test.rs"]
mod workflow_test;

use crate::file::CandidateFile;
use crate::preview::PreviewSource;
use crate::progress::PROGRESS_CAP;
use crate::response::UploadError;
use crate::validate::{Rejection, is_image, validate};

/// Error banner text when upload is requested without a file.
pub const NO_FILE_MESSAGE: &str = "Please select a file first";

/// Workflow phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Nothing selected.
    #[default]
    Idle,
    /// A validated file is waiting to be uploaded.
    FileSelected,
    /// A request is in flight.
    Uploading,
    /// The last upload returned a URL.
    Succeeded,
    /// The last upload failed; the file is kept for retry.
    Failed,
}

/// Outcome of the most recent upload attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadResult {
    Uploaded { url: String },
    Failed { message: String },
}

/// Why a selection was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error(transparent)]
    Rejected(#[from] Rejection),
    #[error("an upload is in progress")]
    Busy,
}

/// Why an upload was not started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StartError {
    #[error("no file selected")]
    NoFile,
    #[error("an upload is already in progress")]
    AlreadyUploading,
}

/// The file to send for one upload attempt.
#[derive(Clone, Debug)]
pub struct UploadTicket<F> {
    file: F,
}

impl<F> UploadTicket<F> {
    pub fn file(&self) -> &F {
        &self.file
    }

    pub fn into_file(self) -> F {
        self.file
    }
}

/// Client-side upload workflow for a single file.
pub struct Uploader<F, P: PreviewSource<F>> {
    previews: P,
    phase: Phase,
    file: Option<F>,
    preview: Option<P::Handle>,
    progress: u8,
    error: Option<String>,
    result: Option<UploadResult>,
}

impl<F, P> Uploader<F, P>
where
    F: CandidateFile + Clone,
    P: PreviewSource<F>,
{
    pub fn new(previews: P) -> Self {
        Self {
            previews,
            phase: Phase::Idle,
            file: None,
            preview: None,
            progress: 0,
            error: None,
            result: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn preview(&self) -> Option<&P::Handle> {
        self.preview.as_ref()
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Latest error banner text, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn result(&self) -> Option<&UploadResult> {
        self.result.as_ref()
    }

    /// The shareable URL from the last successful upload.
    pub fn uploaded_url(&self) -> Option<&str> {
        match &self.result {
            Some(UploadResult::Uploaded { url }) => Some(url),
            _ => None,
        }
    }

    pub fn is_uploading(&self) -> bool {
        self.phase == Phase::Uploading
    }

    /// Whether the upload action should be enabled.
    pub fn can_upload(&self) -> bool {
        self.file.is_some() && !self.is_uploading()
    }

    /// Offer a newly picked or dropped file.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::Busy`] while uploading (nothing changes) and
    /// [`SelectError::Rejected`] when validation fails (only the error banner
    /// changes).
    pub fn select(&mut self, file: F) -> Result<(), SelectError> {
        if self.is_uploading() {
            tracing::warn!(name = file.name(), "selection refused while upload in flight");
            return Err(SelectError::Busy);
        }
        if let Err(rejection) = validate(file.mime_type(), file.size()) {
            tracing::debug!(name = file.name(), mime = file.mime_type(), size = file.size(), %rejection, "file rejected");
            self.error = Some(rejection.to_string());
            return Err(rejection.into());
        }

        // Release before acquiring so two handles never coexist.
        self.preview = None;
        if is_image(file.mime_type()) {
            self.preview = self.previews.acquire(&file);
        }

        tracing::debug!(name = file.name(), size = file.size(), preview = self.preview.is_some(), "file selected");
        self.file = Some(file);
        self.error = None;
        self.result = None;
        self.progress = 0;
        self.phase = Phase::FileSelected;
        Ok(())
    }

    /// Drop the selected file and its preview. Returns `false` (and changes
    /// nothing) while an upload is in flight.
    pub fn clear(&mut self) -> bool {
        if self.is_uploading() {
            tracing::warn!("clear refused while upload in flight");
            return false;
        }
        self.file = None;
        self.preview = None;
        self.error = None;
        self.progress = 0;
        self.phase = Phase::Idle;
        true
    }

    /// Start an upload of the selected file.
    ///
    /// # Errors
    ///
    /// Returns [`StartError::AlreadyUploading`] without side effects while a
    /// request is in flight, and [`StartError::NoFile`] (setting the error
    /// banner) when nothing is selected.
    pub fn begin_upload(&mut self) -> Result<UploadTicket<F>, StartError> {
        if self.is_uploading() {
            return Err(StartError::AlreadyUploading);
        }
        let Some(file) = self.file.clone() else {
            self.error = Some(NO_FILE_MESSAGE.to_owned());
            return Err(StartError::NoFile);
        };

        tracing::debug!(name = file.name(), "upload started");
        self.error = None;
        self.progress = 0;
        self.phase = Phase::Uploading;
        Ok(UploadTicket { file })
    }

    /// Apply a simulated progress value. Ignored unless uploading; never moves
    /// backwards or past the simulation cap.
    pub fn record_progress(&mut self, percent: u8) {
        if !self.is_uploading() {
            return;
        }
        self.progress = self.progress.max(percent.min(PROGRESS_CAP));
    }

    /// Settle the in-flight upload. Ignored unless uploading.
    pub fn finish(&mut self, outcome: Result<String, UploadError>) {
        if !self.is_uploading() {
            tracing::warn!("upload outcome arrived with no upload in flight");
            return;
        }
        match outcome {
            Ok(url) => {
                tracing::debug!(%url, "upload succeeded");
                self.progress = 100;
                self.file = None;
                self.preview = None;
                self.result = Some(UploadResult::Uploaded { url });
                self.phase = Phase::Succeeded;
            }
            Err(err) => {
                tracing::warn!(error = %err, "upload failed");
                let message = err.user_message();
                self.error = Some(message.clone());
                self.result = Some(UploadResult::Failed { message });
                self.phase = Phase::Failed;
            }
        }
    }
}
