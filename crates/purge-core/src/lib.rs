//! # purge-core
//!
//! Keychain purge logic used by the factory-reset flow:
//! - Deletion queries scoped to the data protection or legacy keychain
//! - Status code mapping and the status lines printed for each outcome
//! - Store backends: macOS Keychain, an unsupported-platform fallback and
//!   an in-memory store

pub mod config;
pub mod error;
pub mod query;
pub mod report;
pub mod status;
pub mod storage;
mod purger;

pub use config::{PurgeConfig, DEFAULT_ITEM_LABEL, DEFAULT_SERVICE};
pub use error::{PurgeError, Result};
pub use purger::{PurgeReport, Purger};
pub use query::{DeletionQuery, ItemClass, StorageScope};
pub use report::status_line;
pub use status::PurgeStatus;
pub use storage::{platform_store, CredentialStore, MemoryStore, PlatformStore, StoredItem};
