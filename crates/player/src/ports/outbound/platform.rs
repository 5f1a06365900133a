//! Platform abstraction ports for cross-platform compatibility
//!
//! Each trait covers one platform concern. Desktop and browser
//! implementations live in `infrastructure::platform`; the `Platform`
//! container in `state::platform` aggregates them behind [`super::PlatformPort`].

use std::{future::Future, pin::Pin};

use super::platform_port::{ExportFile, ExportLocation, PlatformError};

/// Async sleep abstraction, used by timed UI effects such as toast dismissal
pub trait SleepProvider: Clone + 'static {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}

/// Persistent storage abstraction (localStorage/file-based)
pub trait StorageProvider: Clone + 'static {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// Browser document operations (page title, etc.)
pub trait DocumentProvider: Clone + 'static {
    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);
}

/// Hands an exported file to the user: a file in the download directory on
/// desktop, a browser download on the web.
pub trait ExportProvider: Clone + 'static {
    fn save_export(&self, file: &ExportFile) -> Result<ExportLocation, PlatformError>;
}

/// Storage key constants
///
/// Only two items survive a session: the cached API key and the last
/// chosen UI language.
pub mod storage_keys {
    pub const API_KEY: &str = "growthwise.api_key";
    pub const LANGUAGE: &str = "growthwise.language";
}
