//! Multipart upload over `reqwest`.
//!
//! ERROR HANDLING
//! ==============
//! The endpoint reports failures as JSON with a 4xx status, so the body is
//! parsed whatever the status. Everything before a body arrives maps to
//! `UploadError::Transport`.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use uploader::config::{FILE_FIELD, PRESET_FIELD};
use uploader::{CandidateFile, UploadConfig, UploadError, UploadResponse};

use crate::local_file::LocalFile;

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// HTTP client with the configured request timeout.
pub fn build_client(config: &UploadConfig) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .build()
}

/// POST `file` to the configured endpoint and return its `secure_url`.
pub async fn send(client: &reqwest::Client, config: &UploadConfig, file: &LocalFile) -> Result<String, UploadError> {
    let bytes = file
        .read()
        .await
        .map_err(|e| UploadError::Transport(format!("cannot read {}: {e}", file.path().display())))?;
    let part = Part::bytes(bytes)
        .file_name(file.name().to_owned())
        .mime_str(file.mime_type())
        .map_err(|e| UploadError::Transport(e.to_string()))?;
    let form = Form::new()
        .part(FILE_FIELD, part)
        .text(PRESET_FIELD, config.upload_preset.clone());

    let resp = client
        .post(config.endpoint())
        .multipart(form)
        .send()
        .await
        .map_err(|e| UploadError::Transport(e.to_string()))?;
    let status = resp.status();
    let body = resp
        .bytes()
        .await
        .map_err(|e| UploadError::Transport(e.to_string()))?;
    tracing::debug!(%status, bytes = body.len(), "upload response received");

    UploadResponse::parse(&body).and_then(UploadResponse::into_result)
}
