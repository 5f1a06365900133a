//! In-memory platform for tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::{future::Future, pin::Pin};

use crate::ports::outbound::platform::{
    DocumentProvider, ExportProvider, SleepProvider, StorageProvider,
};
use crate::ports::outbound::{ExportFile, ExportLocation, PlatformError};
use crate::state::Platform;

#[derive(Clone, Default)]
pub struct ImmediateSleepProvider;

impl SleepProvider for ImmediateSleepProvider {
    fn sleep_ms(&self, _ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(async {})
    }
}

#[derive(Clone, Default)]
pub struct MemoryStorageProvider {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl StorageProvider for MemoryStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.insert(key.to_string(), value.to_string());
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    fn remove(&self, key: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.remove(key);
        }
    }
}

#[derive(Clone, Default)]
pub struct NoopDocumentProvider;

impl DocumentProvider for NoopDocumentProvider {
    fn set_page_title(&self, _title: &str) {}
}

/// Keeps every export in memory
#[derive(Clone, Default)]
pub struct RecordingExportProvider {
    saved: Arc<Mutex<Vec<ExportFile>>>,
}

impl RecordingExportProvider {
    pub fn saved(&self) -> Vec<ExportFile> {
        self.saved.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl ExportProvider for RecordingExportProvider {
    fn save_export(&self, file: &ExportFile) -> Result<ExportLocation, PlatformError> {
        if let Ok(mut saved) = self.saved.lock() {
            saved.push(file.clone());
        }
        Ok(ExportLocation::BrowserDownload)
    }
}

pub fn create_mock_platform() -> Platform {
    Platform::new(
        ImmediateSleepProvider,
        MemoryStorageProvider::default(),
        NoopDocumentProvider,
        RecordingExportProvider::default(),
    )
}
