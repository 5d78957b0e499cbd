//! Credential store backends
//!
//! This module provides three backends:
//! 1. OS Keychain (macOS only)
//! 2. Unsupported (every other platform)
//! 3. In-memory (tests and embedding)

mod traits;
#[cfg(target_os = "macos")]
mod keychain;
mod memory;
mod unsupported;

pub use traits::CredentialStore;
#[cfg(target_os = "macos")]
pub use keychain::KeychainStore;
pub use memory::{MemoryStore, StoredItem};
pub use unsupported::UnsupportedStore;

/// Store backing the system keychain on this platform
#[cfg(target_os = "macos")]
pub type PlatformStore = KeychainStore;

/// Store backing the system keychain on this platform
#[cfg(not(target_os = "macos"))]
pub type PlatformStore = UnsupportedStore;

/// Create the store for the current platform
pub fn platform_store() -> PlatformStore {
    PlatformStore::new()
}
