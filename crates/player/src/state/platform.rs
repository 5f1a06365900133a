//! Platform DI Container
//!
//! `Platform` aggregates the platform-specific providers behind the port
//! traits and implements [`PlatformPort`] over them.
//!
//! Usage:
//! - Created by `create_platform()` in `infrastructure::platform`
//! - Injected into Dioxus context by `main.rs`
//! - Accessed in UI via `use_platform()`

use std::{future::Future, pin::Pin, sync::Arc};

use crate::ports::outbound::{
    DocumentProvider, ExportFile, ExportLocation, ExportProvider, PlatformError, PlatformPort,
    SleepProvider, StorageProvider,
};

/// Unified platform services container
#[derive(Clone)]
pub struct Platform {
    sleep: Arc<dyn SleepProviderDyn>,
    storage: Arc<dyn StorageProviderDyn>,
    document: Arc<dyn DocumentProviderDyn>,
    export: Arc<dyn ExportProviderDyn>,
}

// =============================================================================
// Dynamic trait versions for Arc storage (need Send + Sync for Dioxus context)
// =============================================================================

trait SleepProviderDyn: Send + Sync {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}

trait StorageProviderDyn: Send + Sync {
    fn save(&self, key: &str, value: &str);
    fn load(&self, key: &str) -> Option<String>;
    fn remove(&self, key: &str);
}

trait DocumentProviderDyn: Send + Sync {
    fn set_page_title(&self, title: &str);
}

trait ExportProviderDyn: Send + Sync {
    fn save_export(&self, file: &ExportFile) -> Result<ExportLocation, PlatformError>;
}

// =============================================================================
// Blanket implementations - convert port traits to dyn-safe wrappers
// =============================================================================

impl<T: SleepProvider + Send + Sync> SleepProviderDyn for T {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        SleepProvider::sleep_ms(self, ms)
    }
}

impl<T: StorageProvider + Send + Sync> StorageProviderDyn for T {
    fn save(&self, key: &str, value: &str) {
        StorageProvider::save(self, key, value)
    }
    fn load(&self, key: &str) -> Option<String> {
        StorageProvider::load(self, key)
    }
    fn remove(&self, key: &str) {
        StorageProvider::remove(self, key)
    }
}

impl<T: DocumentProvider + Send + Sync> DocumentProviderDyn for T {
    fn set_page_title(&self, title: &str) {
        DocumentProvider::set_page_title(self, title)
    }
}

impl<T: ExportProvider + Send + Sync> ExportProviderDyn for T {
    fn save_export(&self, file: &ExportFile) -> Result<ExportLocation, PlatformError> {
        ExportProvider::save_export(self, file)
    }
}

// =============================================================================
// Platform implementation
// =============================================================================

impl Platform {
    /// Create a new Platform with the given providers
    pub fn new<Sl, S, D, E>(sleep: Sl, storage: S, document: D, export: E) -> Self
    where
        Sl: SleepProvider + Send + Sync,
        S: StorageProvider + Send + Sync,
        D: DocumentProvider + Send + Sync,
        E: ExportProvider + Send + Sync,
    {
        Self {
            sleep: Arc::new(sleep),
            storage: Arc::new(storage),
            document: Arc::new(document),
            export: Arc::new(export),
        }
    }
}

impl PlatformPort for Platform {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        self.sleep.sleep_ms(ms)
    }

    fn storage_save(&self, key: &str, value: &str) {
        self.storage.save(key, value)
    }

    fn storage_load(&self, key: &str) -> Option<String> {
        self.storage.load(key)
    }

    fn storage_remove(&self, key: &str) {
        self.storage.remove(key)
    }

    fn set_page_title(&self, title: &str) {
        self.document.set_page_title(title)
    }

    fn save_export(&self, file: &ExportFile) -> Result<ExportLocation, PlatformError> {
        let location = self.export.save_export(file)?;
        tracing::info!(
            filename = %file.filename,
            bytes = file.contents.len(),
            location = ?location,
            "Export saved"
        );
        Ok(location)
    }
}
