//! In-process credential store
//!
//! Mirrors how the keychain selects items for deletion so the purge flow
//! can be exercised without touching the system keychain.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use super::CredentialStore;
use crate::query::{DeletionQuery, ItemClass, StorageScope};
use crate::status::PurgeStatus;

/// An item held by [`MemoryStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredItem {
    pub class: ItemClass,
    pub service: String,
    pub account: String,
    pub scope: StorageScope,
}

impl StoredItem {
    /// A generic password item
    pub fn generic_password(
        service: impl Into<String>,
        account: impl Into<String>,
        scope: StorageScope,
    ) -> Self {
        Self {
            class: ItemClass::GenericPassword,
            service: service.into(),
            account: account.into(),
            scope,
        }
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    items: Vec<StoredItem>,
    failures: HashMap<StorageScope, i32>,
}

/// In-memory store backend
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with items
    pub fn with_items(items: impl IntoIterator<Item = StoredItem>) -> Self {
        let store = Self::new();
        store.lock().items.extend(items);
        store
    }

    pub fn insert(&self, item: StoredItem) {
        self.lock().items.push(item);
    }

    /// Make every delete in `scope` fail with `code` and remove nothing
    pub fn fail_scope(&self, scope: StorageScope, code: i32) {
        self.lock().failures.insert(scope, code);
    }

    /// Snapshot of the remaining items
    pub fn items(&self) -> Vec<StoredItem> {
        self.lock().items.clone()
    }

    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl CredentialStore for MemoryStore {
    fn delete_items(&self, query: &DeletionQuery) -> PurgeStatus {
        let mut state = self.lock();

        if let Some(code) = state.failures.get(&query.scope()) {
            return PurgeStatus::Other(*code);
        }

        let before = state.items.len();
        state
            .items
            .retain(|item| !query.matches(item.class, &item.service, item.scope));
        let removed = before - state.items.len();

        debug!(
            "Removed {} item(s) for {} from {}",
            removed,
            query.service(),
            query.scope().name()
        );

        if removed > 0 {
            PurgeStatus::Success
        } else {
            PurgeStatus::NotFound
        }
    }

    fn backend_name(&self) -> &'static str {
        "In-memory store"
    }
}
