//! Browser file and object URL adapters.
//!
//! DESIGN
//! ======
//! `ObjectUrl` is the widget's preview handle. The URL is revoked in `Drop`;
//! the uploader drops the handle whenever the selection goes away.

use uploader::{CandidateFile, PreviewSource};

/// A `web_sys::File` with its metadata read once.
#[derive(Clone, Debug)]
pub struct BrowserFile {
    inner: web_sys::File,
    name: String,
    mime: String,
    size: u64,
}

impl BrowserFile {
    pub fn new(inner: web_sys::File) -> Self {
        let name = inner.name();
        let mime = inner.type_();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let size = inner.size().max(0.0) as u64;
        Self { inner, name, mime, size }
    }

    /// The underlying blob, for `FormData` and object URLs.
    pub fn blob(&self) -> &web_sys::Blob {
        &self.inner
    }
}

impl CandidateFile for BrowserFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn mime_type(&self) -> &str {
        &self.mime
    }

    fn size(&self) -> u64 {
        self.size
    }
}

/// An object URL that is revoked when dropped.
#[derive(Debug)]
pub struct ObjectUrl(String);

impl ObjectUrl {
    /// Allocate an object URL for `blob`.
    ///
    /// # Errors
    ///
    /// Returns the browser exception if the URL cannot be created.
    pub fn create(blob: &web_sys::Blob) -> Result<Self, wasm_bindgen::JsValue> {
        web_sys::Url::create_object_url_with_blob(blob).map(Self)
    }
}

impl AsRef<str> for ObjectUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Err(err) = web_sys::Url::revoke_object_url(&self.0) {
            log::warn!("revoking object URL failed: {err:?}");
        }
    }
}

/// Preview source backed by object URLs.
#[derive(Clone, Copy, Debug, Default)]
pub struct ObjectUrlPreviews;

impl PreviewSource<BrowserFile> for ObjectUrlPreviews {
    type Handle = ObjectUrl;

    fn acquire(&mut self, file: &BrowserFile) -> Option<ObjectUrl> {
        match ObjectUrl::create(file.blob()) {
            Ok(url) => Some(url),
            Err(err) => {
                log::warn!("preview unavailable for {}: {err:?}", file.name);
                None
            }
        }
    }
}
