//! Upload workflow core shared by the browser widget and the CLI.
//!
//! SYSTEM CONTEXT
//! ==============
//! `validate` decides which files may be sent, `preview` defines the
//! revocable display handle contract, `workflow` is the select → upload →
//! result state machine, and `progress` couples the cosmetic progress ticks
//! to the lifetime of the upload request. `config` and `response` describe
//! the external media-hosting endpoint.
//!
//! Nothing in this crate performs I/O; surfaces bring their own file type,
//! HTTP transport, and timer.

pub mod config;
pub mod file;
pub mod preview;
pub mod progress;
pub mod response;
pub mod validate;
pub mod workflow;

pub use config::{ConfigError, UploadConfig};
pub use file::CandidateFile;
pub use preview::{NoPreview, PreviewSource};
pub use progress::{PROGRESS_TICK, PROGRESS_TICK_MS, ProgressSimulation, with_simulated_progress};
pub use response::{GENERIC_FAILURE_MESSAGE, UploadError, UploadResponse};
pub use validate::{ACCEPT_FILTER, ALLOWED_MIME_TYPES, MAX_FILE_SIZE, Rejection, is_image, mime_for_path, validate};
pub use workflow::{NO_FILE_MESSAGE, Phase, SelectError, StartError, UploadResult, UploadTicket, Uploader};
