//! Platform-specific implementations
//!
//! The correct platform is selected at compile time based on the target
//! architecture.

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

#[cfg(test)]
pub mod mock;

#[cfg(target_arch = "wasm32")]
pub use wasm::{
    create_platform, WasmDocumentProvider, WasmExportProvider, WasmSleepProvider,
    WasmStorageProvider,
};

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::{
    create_platform, DesktopDocumentProvider, DesktopExportProvider, DesktopSleepProvider,
    DesktopStorageProvider,
};
