//! Desktop platform implementations
//!
//! Provides platform-specific implementations for desktop using
//! standard library and native crates.

use crate::ports::outbound::platform::{
    DocumentProvider, ExportProvider, SleepProvider, StorageProvider,
};
use crate::ports::outbound::{ExportFile, ExportLocation, PlatformError};
use crate::state::Platform;
use directories::{ProjectDirs, UserDirs};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use std::{future::Future, pin::Pin, sync::Arc};

/// Desktop sleep provider using tokio timer
#[derive(Clone, Default)]
pub struct DesktopSleepProvider;

impl SleepProvider for DesktopSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(async move {
            tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
        })
    }
}

/// Desktop storage provider with file-based persistence
///
/// Stores key-value pairs in a JSON file at:
/// - Linux: ~/.config/growthwise/player/storage.json
/// - macOS: ~/Library/Application Support/io.growthwise.player/storage.json
/// - Windows: C:\Users\<User>\AppData\Roaming\growthwise\player\storage.json
#[derive(Clone)]
pub struct DesktopStorageProvider {
    storage_path: PathBuf,
    /// In-memory cache of stored values
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for DesktopStorageProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopStorageProvider {
    pub fn new() -> Self {
        let storage_path = if let Some(dirs) = ProjectDirs::from("io", "growthwise", "player") {
            dirs.config_dir().join("storage.json")
        } else {
            PathBuf::from("growthwise_storage.json")
        };
        Self::at_path(storage_path)
    }

    /// Storage backed by a specific file; existing contents are loaded.
    pub fn at_path(storage_path: impl Into<PathBuf>) -> Self {
        let storage_path = storage_path.into();
        let cache = if storage_path.exists() {
            match fs::read_to_string(&storage_path) {
                Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
                    Ok(map) => map,
                    Err(e) => {
                        tracing::warn!(path = %storage_path.display(), error = %e, "Ignoring unreadable storage file");
                        HashMap::new()
                    }
                },
                Err(e) => {
                    tracing::warn!(path = %storage_path.display(), error = %e, "Could not read storage file");
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        tracing::debug!(path = %storage_path.display(), entries = cache.len(), "Desktop storage ready");

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    fn persist(&self) {
        if let Some(parent) = self.storage_path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::error!(error = %e, "Could not create storage directory");
                return;
            }
        }

        let cache = match self.cache.read() {
            Ok(guard) => guard,
            Err(e) => {
                tracing::error!(error = %e, "Storage lock poisoned");
                return;
            }
        };

        match serde_json::to_string_pretty(&*cache) {
            Ok(data) => {
                if let Err(e) = fs::write(&self.storage_path, data) {
                    tracing::error!(path = %self.storage_path.display(), error = %e, "Could not write storage file");
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Could not encode storage");
            }
        }
    }
}

impl StorageProvider for DesktopStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.insert(key.to_string(), value.to_string());
                drop(guard);
                self.persist();
            }
            Err(e) => {
                tracing::error!(error = %e, "Storage lock poisoned");
            }
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.cache.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!(error = %e, "Storage lock poisoned");
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                let existed = guard.remove(key).is_some();
                drop(guard);
                if existed {
                    self.persist();
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Storage lock poisoned");
            }
        }
    }
}

/// Desktop document provider (no-op for page title)
#[derive(Clone, Default)]
pub struct DesktopDocumentProvider;

impl DocumentProvider for DesktopDocumentProvider {
    fn set_page_title(&self, _title: &str) {
        // Window title is owned by the desktop shell
    }
}

/// Writes exports into the user's download directory
#[derive(Clone)]
pub struct DesktopExportProvider {
    dir: Option<PathBuf>,
}

impl Default for DesktopExportProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopExportProvider {
    /// Downloads folder, else the app data directory
    pub fn new() -> Self {
        let dir = UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
            .or_else(|| {
                ProjectDirs::from("io", "growthwise", "player")
                    .map(|dirs| dirs.data_dir().join("exports"))
            });
        Self { dir }
    }

    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }
}

impl ExportProvider for DesktopExportProvider {
    fn save_export(&self, file: &ExportFile) -> Result<ExportLocation, PlatformError> {
        let dir = self.dir.as_ref().ok_or(PlatformError::NoExportDirectory)?;
        fs::create_dir_all(dir).map_err(|source| PlatformError::Write {
            path: dir.clone(),
            source,
        })?;

        let path = unique_path(dir, &file.filename);
        fs::write(&path, &file.contents).map_err(|source| PlatformError::Write {
            path: path.clone(),
            source,
        })?;

        Ok(ExportLocation::File(path))
    }
}

/// `name.ext`, then `name (1).ext`, `name (2).ext`, ... like a browser would.
fn unique_path(dir: &Path, filename: &str) -> PathBuf {
    let candidate = dir.join(filename);
    if !candidate.exists() {
        return candidate;
    }

    let (stem, ext) = match filename.rsplit_once('.') {
        Some((stem, ext)) => (stem, Some(ext)),
        None => (filename, None),
    };

    (1..)
        .map(|n| match ext {
            Some(ext) => dir.join(format!("{stem} ({n}).{ext}")),
            None => dir.join(format!("{stem} ({n})")),
        })
        .find(|path| !path.exists())
        .unwrap_or(candidate)
}

/// Create platform services for desktop
pub fn create_platform() -> Platform {
    Platform::new(
        DesktopSleepProvider,
        DesktopStorageProvider::new(),
        DesktopDocumentProvider,
        DesktopExportProvider::new(),
    )
}
