//! Files on disk as upload candidates.

#[cfg(test)]
#[path = "local_file_test.rs"]
mod local_file_test;

use std::path::{Path, PathBuf};

use uploader::{CandidateFile, mime_for_path};

use crate::error::CliError;

/// A file on disk with its metadata read up front. Bytes are read at send
/// time, so cloning for an upload ticket is cheap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalFile {
    path: PathBuf,
    name: String,
    mime: &'static str,
    size: u64,
}

impl LocalFile {
    /// Stat `path` and derive its declared MIME type from the extension.
    pub async fn open(path: &Path) -> Result<Self, CliError> {
        let meta = tokio::fs::metadata(path)
            .await
            .map_err(|source| CliError::Io { path: path.to_path_buf(), source })?;
        if !meta.is_file() {
            return Err(CliError::NotAFile(path.to_path_buf()));
        }
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

        Ok(Self { path: path.to_path_buf(), name, mime: mime_for_path(path), size: meta.len() })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read(&self) -> std::io::Result<Vec<u8>> {
        tokio::fs::read(&self.path).await
    }
}

impl CandidateFile for LocalFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn mime_type(&self) -> &str {
        self.mime
    }

    fn size(&self) -> u64 {
        self.size
    }
}
