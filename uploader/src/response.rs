//! Upload endpoint response model and error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! The endpoint reports failures as `{"error": {"message": ...}}`, usually
//! alongside a 4xx status, so callers parse the body regardless of status.
//! Every [`UploadError`] maps to one user-facing line via
//! [`UploadError::user_message`].

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;

use serde::Deserialize;

/// Shown when no more specific message can be extracted.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to upload file";

/// Errors produced by one upload attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    /// The endpoint answered with an `error` payload.
    #[error("endpoint rejected upload: {0}")]
    Remote(String),

    /// The request never produced a response (network, CORS, timeout).
    #[error("upload request failed: {0}")]
    Transport(String),

    /// The response body was not the expected JSON.
    #[error("upload response parse failed: {0}")]
    Malformed(String),

    /// The response had neither an error nor a `secure_url`.
    #[error("upload response missing secure_url")]
    MissingUrl,
}

impl UploadError {
    /// Message to show the user for this failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Remote(msg) | Self::Transport(msg) if !msg.trim().is_empty() => msg.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteError {
    #[serde(default)]
    pub message: Option<String>,
}

/// JSON body returned by the upload endpoint. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub secure_url: Option<String>,
    #[serde(default)]
    pub error: Option<RemoteError>,
}

impl UploadResponse {
    /// Parse a raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::Malformed`] when the body is not a JSON object of
    /// the expected shape.
    pub fn parse(body: &[u8]) -> Result<Self, UploadError> {
        serde_json::from_slice(body).map_err(|e| UploadError::Malformed(e.to_string()))
    }

    /// Resolve the response into the shareable URL.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::Remote`] when an `error` object is present and
    /// [`UploadError::MissingUrl`] when the success field is absent.
    pub fn into_result(self) -> Result<String, UploadError> {
        if let Some(err) = self.error {
            return Err(UploadError::Remote(err.message.unwrap_or_default()));
        }
        self.secure_url.filter(|url| !url.is_empty()).ok_or(UploadError::MissingUrl)
    }
}
