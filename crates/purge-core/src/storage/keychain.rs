//! macOS Keychain backend
//!
//! Talks to the Security framework directly: the `security` CLI and
//! account-scoped APIs cannot reach items in the data protection keychain
//! or delete every account under a service at once.

use core_foundation::base::{CFType, TCFType};
use core_foundation::boolean::CFBoolean;
use core_foundation::dictionary::CFDictionary;
use core_foundation::string::CFString;
use security_framework_sys::item::{
    kSecAttrService, kSecClass, kSecClassGenericPassword, kSecUseDataProtectionKeychain,
};
use security_framework_sys::keychain_item::SecItemDelete;
use tracing::{debug, warn};

use super::CredentialStore;
use crate::query::{DeletionQuery, ItemClass, QueryKey, QueryValue};
use crate::status::PurgeStatus;

/// System keychain backend
#[derive(Debug, Default)]
pub struct KeychainStore;

impl KeychainStore {
    pub fn new() -> Self {
        Self
    }

    /// Build the CoreFoundation dictionary for a query
    fn to_dictionary(query: &DeletionQuery) -> CFDictionary<CFString, CFType> {
        let pairs: Vec<(CFString, CFType)> = query
            .attributes()
            .iter()
            .map(|(key, value)| (cf_key(*key), cf_value(value)))
            .collect();

        CFDictionary::from_CFType_pairs(&pairs)
    }
}

fn cf_key(key: QueryKey) -> CFString {
    // SAFETY: the Security framework constants are valid for the life of the process
    unsafe {
        match key {
            QueryKey::Class => CFString::wrap_under_get_rule(kSecClass),
            QueryKey::Service => CFString::wrap_under_get_rule(kSecAttrService),
            QueryKey::UseDataProtectionKeychain => {
                CFString::wrap_under_get_rule(kSecUseDataProtectionKeychain)
            }
        }
    }
}

fn cf_value(value: &QueryValue) -> CFType {
    match value {
        QueryValue::Class(ItemClass::GenericPassword) => {
            // SAFETY: see cf_key
            unsafe { CFString::wrap_under_get_rule(kSecClassGenericPassword) }.into_CFType()
        }
        QueryValue::Text(text) => CFString::new(text).into_CFType(),
        QueryValue::Flag(flag) => CFBoolean::from(*flag).into_CFType(),
    }
}

impl CredentialStore for KeychainStore {
    fn delete_items(&self, query: &DeletionQuery) -> PurgeStatus {
        let dict = Self::to_dictionary(query);

        // SAFETY: dict is a valid CFDictionary kept alive across the call
        let code = unsafe { SecItemDelete(dict.as_concrete_TypeRef()) };
        let status = PurgeStatus::from_os_status(code);

        match status {
            PurgeStatus::Other(code) => {
                let description = security_framework::base::Error::from_code(code);
                warn!(
                    "SecItemDelete on {} failed: {} ({})",
                    query.scope().name(),
                    code,
                    description
                );
            }
            _ => debug!("SecItemDelete on {}: {}", query.scope().name(), status),
        }

        status
    }

    fn backend_name(&self) -> &'static str {
        "macOS Keychain"
    }
}
