//! Outbound ports - Interfaces for platform services

pub mod platform;
pub mod platform_port;

pub use platform::{storage_keys, DocumentProvider, ExportProvider, SleepProvider, StorageProvider};
pub use platform_port::{ExportFile, ExportLocation, PlatformError, PlatformPort};

#[cfg(test)]
pub use platform_port::MockPlatformPort;
