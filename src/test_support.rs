//! Shared fixtures: temp files and an in-process upload endpoint.

use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::extract::{Multipart, Path as UrlPath, State};
use axum::http::StatusCode;
use axum::routing::post;
use serde_json::{Value, json};
use uploader::UploadConfig;
use uploader::config::{API_BASE_VAR, CLOUD_NAME_VAR, UPLOAD_PRESET_VAR};

pub const GOOD_PRESET: &str = "unsigned";

static TEMP_SEQ: AtomicUsize = AtomicUsize::new(0);

/// A file in its own temp directory; the directory is removed on drop.
pub struct TempFile {
    dir: PathBuf,
    path: PathBuf,
}

impl TempFile {
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Deref for TempFile {
    type Target = Path;

    fn deref(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}

/// Write `contents` to a fresh directory under the system temp dir.
pub fn temp_file(name: &str, contents: &[u8]) -> TempFile {
    let seq = TEMP_SEQ.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join(format!("mediadrop-test-{}-{seq}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write temp file");
    TempFile { dir, path }
}

pub fn config_for(api_base: &str, preset: &str) -> UploadConfig {
    UploadConfig::from_lookup(|key| {
        match key {
            CLOUD_NAME_VAR => Some("demo"),
            UPLOAD_PRESET_VAR => Some(preset),
            API_BASE_VAR => Some(api_base),
            _ => None,
        }
        .map(str::to_owned)
    })
    .expect("test config")
}

/// Serve `router` on an ephemeral port and return the API base URL.
pub async fn spawn_endpoint(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}/v1_1")
}

/// Endpoint state: request counter and artificial latency.
#[derive(Clone, Default)]
pub struct Endpoint {
    pub hits: Arc<AtomicUsize>,
    pub delay: Duration,
}

impl Endpoint {
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay, ..Self::default() }
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Upload route mimicking the media host: accepts `GOOD_PRESET` only and
    /// echoes what it received in the returned URL.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/v1_1/{cloud}/auto/upload", post(echo_upload))
            .with_state(self.clone())
    }
}

async fn echo_upload(
    State(endpoint): State<Endpoint>,
    UrlPath(cloud): UrlPath<String>,
    mut multipart: Multipart,
) -> (StatusCode, Json<Value>) {
    endpoint.hits.fetch_add(1, Ordering::SeqCst);
    if !endpoint.delay.is_zero() {
        tokio::time::sleep(endpoint.delay).await;
    }

    let mut preset = None;
    let mut file = None;
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_owned();
        match name.as_str() {
            "upload_preset" => preset = field.text().await.ok(),
            "file" => {
                let file_name = field.file_name().unwrap_or_default().to_owned();
                let content_type = field.content_type().unwrap_or_default().to_owned();
                let len = field.bytes().await.map(|b| b.len()).unwrap_or_default();
                file = Some((file_name, content_type, len));
            }
            _ => {}
        }
    }

    match (preset.as_deref(), file) {
        (Some(GOOD_PRESET), Some((file_name, content_type, len))) => (
            StatusCode::OK,
            Json(json!({
                "secure_url": format!("https://cdn.example/{cloud}/{file_name}?bytes={len}&type={content_type}"),
            })),
        ),
        (Some(_), Some(_)) => (StatusCode::BAD_REQUEST, Json(json!({ "error": { "message": "Invalid preset" } }))),
        _ => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": { "message": "Missing required parameter - file" } })),
        ),
    }
}
