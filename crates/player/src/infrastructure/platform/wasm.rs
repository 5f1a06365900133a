//! Browser platform implementations
//!
//! localStorage for persistence, `document.title` for the page title, and
//! script evaluation for timers and Blob downloads.

use crate::ports::outbound::platform::{
    DocumentProvider, ExportProvider, SleepProvider, StorageProvider,
};
use crate::ports::outbound::{ExportFile, ExportLocation, PlatformError};
use crate::state::Platform;
use dioxus::document;
use std::{future::Future, pin::Pin};

/// Sleep via `setTimeout`
#[derive(Clone, Default)]
pub struct WasmSleepProvider;

impl SleepProvider for WasmSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(async move {
            let script = format!(
                "await new Promise((resolve) => setTimeout(resolve, {ms})); return null;"
            );
            if let Err(e) = document::eval(&script).await {
                tracing::debug!(error = ?e, "Timer script failed");
            }
        })
    }
}

/// localStorage-backed storage
#[derive(Clone, Default)]
pub struct WasmStorageProvider;

impl WasmStorageProvider {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl StorageProvider for WasmStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    tracing::error!(key, "Failed to write localStorage item");
                }
            }
            None => tracing::warn!("localStorage unavailable"),
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if storage.remove_item(key).is_err() {
                tracing::error!(key, "Failed to remove localStorage item");
            }
        }
    }
}

#[derive(Clone, Default)]
pub struct WasmDocumentProvider;

impl DocumentProvider for WasmDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(title);
        }
    }
}

/// Triggers a download through a temporary object URL
#[derive(Clone, Default)]
pub struct WasmExportProvider;

impl ExportProvider for WasmExportProvider {
    fn save_export(&self, file: &ExportFile) -> Result<ExportLocation, PlatformError> {
        if web_sys::window().is_none() {
            return Err(PlatformError::Browser("window".into()));
        }

        let script = download_script(file)?;
        // Runs on the next tick of the page; the handle is not awaited
        let _ = document::eval(&script);
        Ok(ExportLocation::BrowserDownload)
    }
}

/// JSON string literals are valid JavaScript string literals.
fn download_script(file: &ExportFile) -> Result<String, PlatformError> {
    let encode = |s: &str| serde_json::to_string(s).map_err(|e| PlatformError::Encode(e.to_string()));
    let contents = encode(&file.contents)?;
    let filename = encode(&file.filename)?;
    let mime = encode(&format!("{};charset=utf-8", file.mime_type))?;

    Ok(format!(
        r#"const blob = new Blob([{contents}], {{ type: {mime} }});
const url = URL.createObjectURL(blob);
const link = document.createElement("a");
link.href = url;
link.download = {filename};
document.body.appendChild(link);
link.click();
document.body.removeChild(link);
setTimeout(() => URL.revokeObjectURL(url), 1000);
return null;"#
    ))
}

/// Create platform services for the browser
pub fn create_platform() -> Platform {
    Platform::new(
        WasmSleepProvider,
        WasmStorageProvider,
        WasmDocumentProvider,
        WasmExportProvider,
    )
}
