//! Fallback for platforms without a keychain

use tracing::warn;

use super::CredentialStore;
use crate::query::DeletionQuery;
use crate::status::{PurgeStatus, ERR_SEC_UNIMPLEMENTED};

/// Backend that answers every delete with `errSecUnimplemented`
#[derive(Debug, Default)]
pub struct UnsupportedStore;

impl UnsupportedStore {
    pub fn new() -> Self {
        Self
    }
}

impl CredentialStore for UnsupportedStore {
    fn delete_items(&self, query: &DeletionQuery) -> PurgeStatus {
        warn!(
            "No keychain on this platform, cannot clear {}",
            query.scope().name()
        );
        PurgeStatus::Other(ERR_SEC_UNIMPLEMENTED)
    }

    fn backend_name(&self) -> &'static str {
        "Unsupported platform"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::StorageScope;

    #[test]
    fn test_every_delete_is_unimplemented() {
        let store = UnsupportedStore::new();
        for scope in [StorageScope::DataProtection, StorageScope::Legacy] {
            let query = DeletionQuery::generic_password("svc", scope);
            assert_eq!(store.delete_items(&query), PurgeStatus::Other(-4));
        }
    }
}
