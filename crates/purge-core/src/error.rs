//! Error types for purge-core

use thiserror::Error;

/// Result type alias for purge operations
pub type Result<T> = std::result::Result<T, PurgeError>;

/// Purge error types
///
/// Keychain status codes are not represented here: a failed delete is an
/// outcome to report, not an error to propagate.
#[derive(Error, Debug)]
pub enum PurgeError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
