//! Upload request to the media-hosting endpoint.
//!
//! Client-side (csr): real `fetch` via `gloo-net`.
//!
//! ERROR HANDLING
//! ==============
//! The endpoint answers errors with a JSON body and a 4xx status, so the body
//! is parsed whatever the status. Transport failures keep the browser's
//! message; anything unparsable becomes `UploadError::Malformed`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "csr")]
use uploader::config::{FILE_FIELD, PRESET_FIELD};
#[cfg(feature = "csr")]
use uploader::{UploadConfig, UploadResponse};
#[cfg(any(test, feature = "csr"))]
use uploader::UploadError;

#[cfg(feature = "csr")]
use crate::state::file::BrowserFile;

#[cfg(any(test, feature = "csr"))]
fn transport_error(detail: Option<String>) -> UploadError {
    UploadError::Transport(detail.unwrap_or_default())
}

#[cfg(any(test, feature = "csr"))]
fn status_context(status: u16, err: UploadError) -> UploadError {
    match err {
        UploadError::Malformed(detail) => UploadError::Malformed(format!("status {status}: {detail}")),
        other => other,
    }
}

#[cfg(feature = "csr")]
fn js_error(err: &wasm_bindgen::JsValue) -> UploadError {
    transport_error(err.as_string().or_else(|| Some(format!("{err:?}"))))
}

/// POST `file` to the configured endpoint and return its `secure_url`.
///
/// # Errors
///
/// Returns an [`UploadError`] describing the transport, parse, or remote
/// failure.
#[cfg(feature = "csr")]
pub async fn upload_file(config: &UploadConfig, file: &BrowserFile) -> Result<String, UploadError> {
    let form = web_sys::FormData::new().map_err(|e| js_error(&e))?;
    form.append_with_blob(FILE_FIELD, file.blob()).map_err(|e| js_error(&e))?;
    form.append_with_str(PRESET_FIELD, &config.upload_preset)
        .map_err(|e| js_error(&e))?;

    let resp = gloo_net::http::Request::post(&config.endpoint())
        .body(form)
        .map_err(|e| transport_error(Some(e.to_string())))?
        .send()
        .await
        .map_err(|e| transport_error(Some(e.to_string())))?;
    let status = resp.status();
    let body = resp.binary().await.map_err(|e| transport_error(Some(e.to_string())))?;

    UploadResponse::parse(&body)
        .and_then(UploadResponse::into_result)
        .map_err(|e| status_context(status, e))
}
