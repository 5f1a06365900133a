//! PlatformPort - Unified platform services interface
//!
//! This trait gives the UI layer every platform operation through one
//! injectable type, so views never touch `cfg(target_arch)` branches.
//!
//! Use via Dioxus context: `use_context::<Arc<dyn PlatformPort>>()`

use std::{future::Future, path::PathBuf, pin::Pin};

/// A file ready to be handed to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub mime_type: &'static str,
    pub contents: String,
}

/// Where an export ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportLocation {
    /// Written to this path on disk
    File(PathBuf),
    /// Passed to the browser's download manager
    BrowserDownload,
}

impl ExportLocation {
    /// Short text for the confirmation toast
    pub fn describe(&self) -> String {
        match self {
            ExportLocation::File(path) => path.display().to_string(),
            ExportLocation::BrowserDownload => String::new(),
        }
    }
}

/// Errors from platform I/O
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("No directory available for exports")]
    NoExportDirectory,

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Browser API unavailable: {0}")]
    Browser(String),

    #[error("Failed to encode export: {0}")]
    Encode(String),
}

/// Unified platform services port
#[cfg_attr(test, mockall::automock)]
pub trait PlatformPort: Send + Sync {
    // -------------------------------------------------------------------------
    // Sleep operations
    // -------------------------------------------------------------------------

    /// Sleep for the given number of milliseconds
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;

    // -------------------------------------------------------------------------
    // Storage operations
    // -------------------------------------------------------------------------

    /// Save a string value with the given key
    fn storage_save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn storage_load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn storage_remove(&self, key: &str);

    // -------------------------------------------------------------------------
    // Document operations
    // -------------------------------------------------------------------------

    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);

    // -------------------------------------------------------------------------
    // Export operations
    // -------------------------------------------------------------------------

    /// Save or download an exported file
    fn save_export(&self, file: &ExportFile) -> Result<ExportLocation, PlatformError>;
}
