//! Mounted-file boundary.
//!
//! The request file is read in one go and its handle dropped before
//! dispatch. The result is written to a temporary file next to the
//! target and renamed over it, so readers never observe a partial
//! document and a failed write leaves nothing behind. The result keeps
//! the mode of the file it replaces, or `0644` when there is none, so a
//! host running as another user can read it.

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tracing::{debug, trace};

use fieldrun_protocol::paths;
use fieldrun_runtime::{RequestSource, ResultSink, TransportError};

/// Reads the request document from a file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Source reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Source at the default mount point.
    pub fn default_input() -> Self {
        Self::new(paths::DEFAULT_INPUT_PATH)
    }

    /// Target file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RequestSource for FileSource {
    async fn read_request(&mut self) -> Result<Vec<u8>, TransportError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| TransportError::Read {
                target: self.path.display().to_string(),
                reason: e.to_string(),
            })?;
        debug!(path = %self.path.display(), len = bytes.len(), "read request");
        Ok(bytes)
    }
}

/// Writes the result document to a file, atomically.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Sink writing `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Sink at the default mount point.
    pub fn default_output() -> Self {
        Self::new(paths::DEFAULT_OUTPUT_PATH)
    }

    /// Target file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ResultSink for FileSink {
    async fn write_result(&mut self, document: &[u8]) -> Result<(), TransportError> {
        let path = self.path.clone();
        let document = document.to_vec();
        let target = path.display().to_string();

        tokio::task::spawn_blocking(move || write_atomic(&path, &document))
            .await
            .map_err(|e| TransportError::Write {
                target: target.clone(),
                reason: e.to_string(),
            })?
            .map_err(|e| TransportError::Write {
                target: target.clone(),
                reason: e.to_string(),
            })?;

        debug!(path = %target, "wrote result");
        Ok(())
    }
}

fn write_atomic(path: &Path, document: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    trace!(tmp = %tmp.path().display(), "staging result");
    tmp.write_all(document)?;
    #[cfg(unix)]
    tmp.as_file().set_permissions(result_permissions(path))?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Mode of the file being replaced, or `0644` for a new one.
#[cfg(unix)]
fn result_permissions(path: &Path) -> std::fs::Permissions {
    use std::os::unix::fs::PermissionsExt;

    match std::fs::metadata(path) {
        Ok(meta) => meta.permissions(),
        Err(_) => std::fs::Permissions::from_mode(DEFAULT_RESULT_MODE),
    }
}

#[cfg(unix)]
const DEFAULT_RESULT_MODE: u32 = 0o644;
