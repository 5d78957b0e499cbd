//! Storage trait definitions

use crate::query::DeletionQuery;
use crate::status::PurgeStatus;

/// Trait for credential stores that can bulk-delete items
pub trait CredentialStore: Send + Sync {
    /// Delete every item matching the query in one call
    fn delete_items(&self, query: &DeletionQuery) -> PurgeStatus;

    /// Get a human-readable name for this backend
    fn backend_name(&self) -> &'static str;
}
