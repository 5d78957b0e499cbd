//! Keychain purge orchestration

use std::io::Write;

use tracing::{debug, info, warn};

use crate::config::PurgeConfig;
use crate::error::Result;
use crate::query::{DeletionQuery, StorageScope};
use crate::report::status_line;
use crate::status::PurgeStatus;
use crate::storage::CredentialStore;

/// Statuses observed by a full run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurgeReport {
    pub protected: PurgeStatus,
    pub legacy: PurgeStatus,
}

/// Deletes every item registered under the configured service
pub struct Purger<S> {
    store: S,
    config: PurgeConfig,
}

impl<S: CredentialStore> Purger<S> {
    /// Create a purger over a store
    pub fn new(store: S, config: PurgeConfig) -> Result<Self> {
        config.validate()?;
        debug!("Purging {} via {}", config.service, store.backend_name());
        Ok(Self { store, config })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &PurgeConfig {
        &self.config
    }

    /// Delete all matching items in one scope
    pub fn purge(&self, scope: StorageScope) -> PurgeStatus {
        let query = DeletionQuery::generic_password(self.config.service.as_str(), scope);
        let status = self.store.delete_items(&query);

        if status.is_ok() {
            debug!("Purge of {}: {}", scope.name(), status);
        } else {
            warn!("Purge of {} returned {}", scope.name(), status);
        }

        status
    }

    /// Purge the data protection keychain, then the legacy keychain, writing
    /// a status line for each reportable outcome.
    ///
    /// Statuses never become errors; only a failed write does. The legacy
    /// pass runs even when the first line could not be written, and the
    /// write error is returned once both passes are done.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<PurgeReport> {
        let protected = self.purge(StorageScope::DataProtection);
        let written = self.report(out, StorageScope::DataProtection, protected);
        if let Err(e) = &written {
            warn!("Could not write status line: {}", e);
        }

        let legacy = self.purge(StorageScope::Legacy);
        written?;
        self.report(out, StorageScope::Legacy, legacy)?;

        info!("Keychain purge finished ({}, legacy {})", protected, legacy);
        Ok(PurgeReport { protected, legacy })
    }

    fn report<W: Write>(
        &self,
        out: &mut W,
        scope: StorageScope,
        status: PurgeStatus,
    ) -> Result<()> {
        if let Some(line) = status_line(scope, status, &self.config.item_label) {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}
