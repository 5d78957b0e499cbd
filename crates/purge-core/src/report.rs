//! Status lines printed for each purge

use crate::query::StorageScope;
use crate::status::PurgeStatus;

/// Line to print for a purge outcome, if any.
///
/// The legacy pass only ever reports success; not-found and failures there
/// stay silent.
pub fn status_line(scope: StorageScope, status: PurgeStatus, item_label: &str) -> Option<String> {
    match (scope, status) {
        (StorageScope::DataProtection, PurgeStatus::Success) => Some(format!(
            "OK: Cleared all {} items from Data Protection Keychain",
            item_label
        )),
        (StorageScope::DataProtection, PurgeStatus::NotFound) => Some(format!(
            "OK: No {} items found in Data Protection Keychain",
            item_label
        )),
        (StorageScope::DataProtection, PurgeStatus::Other(code)) => {
            Some(format!("WARNING: SecItemDelete returned status {}", code))
        }
        (StorageScope::Legacy, PurgeStatus::Success) => {
            Some("OK: Also cleared legacy keychain items".to_string())
        }
        (StorageScope::Legacy, _) => None,
    }
}
