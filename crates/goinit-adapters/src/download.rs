//! Download sink adapters.
//!
//! [`FileDownloadSink`] stages the archive in a temporary file inside the
//! destination directory, then renames it into place, so a failed write
//! never leaves a truncated archive at the final path. The temporary
//! handle is dropped (and the file removed) on every error path.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use tempfile::NamedTempFile;
use tracing::info;

use goinit_core::application::error::ApplicationError;
use goinit_core::application::ports::DownloadSink;

/// Production sink writing archives into a directory.
#[derive(Debug, Clone)]
pub struct FileDownloadSink {
    dir: PathBuf,
}

impl FileDownloadSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for FileDownloadSink {
    fn save(&self, bytes: &[u8], filename: &str) -> Result<PathBuf, ApplicationError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| save_error(filename, e))?;

        let mut staged =
            NamedTempFile::new_in(&self.dir).map_err(|e| save_error(filename, e))?;
        staged
            .write_all(bytes)
            .map_err(|e| save_error(filename, e))?;

        let target = self.dir.join(filename);
        staged
            .persist(&target)
            .map_err(|e| save_error(filename, e.error))?;

        info!(path = %target.display(), bytes = bytes.len(), "archive saved");
        Ok(target)
    }
}

fn save_error(filename: &str, e: std::io::Error) -> ApplicationError {
    ApplicationError::SaveFailed {
        filename: filename.to_string(),
        reason: e.to_string(),
    }
}

/// In-memory sink for testing.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    saved: Arc<RwLock<Vec<(String, Vec<u8>)>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The archive saved under `filename`, if any (testing helper).
    pub fn bytes_for(&self, filename: &str) -> Option<Vec<u8>> {
        let saved = self.saved.read().ok()?;
        saved
            .iter()
            .find(|(name, _)| name == filename)
            .map(|(_, bytes)| bytes.clone())
    }

    /// Filenames in save order.
    pub fn filenames(&self) -> Vec<String> {
        match self.saved.read() {
            Ok(saved) => saved.iter().map(|(name, _)| name.clone()).collect(),
            Err(_) => Vec::new(),
        }
    }
}

impl DownloadSink for MemorySink {
    fn save(&self, bytes: &[u8], filename: &str) -> Result<PathBuf, ApplicationError> {
        match self.saved.write() {
            Ok(mut saved) => {
                saved.push((filename.to_string(), bytes.to_vec()));
                Ok(PathBuf::from(filename))
            }
            Err(_) => Err(ApplicationError::SaveFailed {
                filename: filename.to_string(),
                reason: "sink lock poisoned".to_string(),
            }),
        }
    }
}
