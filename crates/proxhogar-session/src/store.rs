// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! [`SessionStore`] implementations: a JSON file on disk and an in-memory slot.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use proxhogar_core::{ProxHogarError, SessionStore};
use tracing::debug;

fn storage_error(e: impl std::error::Error + Send + Sync + 'static) -> ProxHogarError {
    ProxHogarError::Storage {
        source: Box::new(e),
    }
}

/// Stores the session record in a single file.
///
/// Writes go to a temp file in the same directory which is then renamed
/// over the target, so a crash never leaves a half-written record.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Result<Option<String>, ProxHogarError> {
        match tokio::fs::read(&self.path).await {
            // Non-UTF-8 bytes come back lossily so the caller sees an
            // unparseable record and clears it.
            Ok(bytes) => Ok(Some(match String::from_utf8(bytes) {
                Ok(record) => record,
                Err(e) => {
                    debug!(path = %self.path.display(), "session record is not UTF-8");
                    String::from_utf8_lossy(e.as_bytes()).into_owned()
                }
            })),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(storage_error(e)),
        }
    }

    async fn save(&self, record: &str) -> Result<(), ProxHogarError> {
        let path = self.path.clone();
        let bytes = record.as_bytes().to_vec();
        tokio::task::spawn_blocking(move || atomic_write(&path, &bytes))
            .await
            .map_err(|e| ProxHogarError::Internal(format!("session write task failed: {e}")))??;
        debug!(path = %self.path.display(), "session record saved");
        Ok(())
    }

    async fn clear(&self) -> Result<(), ProxHogarError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!(path = %self.path.display(), "session record removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(storage_error(e)),
        }
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

fn atomic_write(path: &Path, bytes: &[u8]) -> Result<(), ProxHogarError> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(storage_error)?;

    let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(storage_error)?;

    // The record carries a bearer token.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        temp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o600))
            .map_err(storage_error)?;
    }

    temp.as_file_mut().write_all(bytes).map_err(storage_error)?;
    temp.as_file().sync_all().map_err(storage_error)?;
    temp.persist(path).map_err(|e| storage_error(e.error))?;
    Ok(())
}

/// Keeps the session record in memory. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    record: Mutex<Option<String>>,
}

impl MemorySessionStore {
    /// A store that already holds `record`.
    pub fn with_record(record: impl Into<String>) -> Self {
        Self {
            record: Mutex::new(Some(record.into())),
        }
    }

    /// Current contents, for assertions.
    pub fn snapshot(&self) -> Option<String> {
        self.record.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> Result<Option<String>, ProxHogarError> {
        let guard = self
            .record
            .lock()
            .map_err(|_| ProxHogarError::Internal("session store lock poisoned".into()))?;
        Ok(guard.clone())
    }

    async fn save(&self, record: &str) -> Result<(), ProxHogarError> {
        let mut guard = self
            .record
            .lock()
            .map_err(|_| ProxHogarError::Internal("session store lock poisoned".into()))?;
        *guard = Some(record.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), ProxHogarError> {
        let mut guard = self
            .record
            .lock()
            .map_err(|_| ProxHogarError::Internal("session store lock poisoned".into()))?;
        *guard = None;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
