//! Deletion queries
//!
//! A query is the attribute mapping handed to `SecItemDelete`. It lives only
//! for the duration of one delete call.

use indexmap::IndexMap;

/// Keychain item class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemClass {
    /// `kSecClassGenericPassword`
    GenericPassword,
}

/// Which keychain a query targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageScope {
    /// The data protection keychain (`kSecUseDataProtectionKeychain`)
    DataProtection,
    /// The legacy file-based keychain
    Legacy,
}

impl StorageScope {
    /// Human-readable name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            StorageScope::DataProtection => "data protection keychain",
            StorageScope::Legacy => "legacy keychain",
        }
    }
}

/// Attribute keys understood by the delete primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// `kSecClass`
    Class,
    /// `kSecAttrService`
    Service,
    /// `kSecUseDataProtectionKeychain`
    UseDataProtectionKeychain,
}

/// Attribute values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Class(ItemClass),
    Text(String),
    Flag(bool),
}

/// Query selecting every item of one class under one service label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionQuery {
    class: ItemClass,
    service: String,
    scope: StorageScope,
}

impl DeletionQuery {
    /// Query for all generic passwords under `service` in `scope`
    pub fn generic_password(service: impl Into<String>, scope: StorageScope) -> Self {
        Self {
            class: ItemClass::GenericPassword,
            service: service.into(),
            scope,
        }
    }

    pub fn class(&self) -> ItemClass {
        self.class
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn scope(&self) -> StorageScope {
        self.scope
    }

    /// The attribute mapping in insertion order.
    ///
    /// The legacy scope leaves the data protection flag out entirely rather
    /// than setting it to `false`.
    pub fn attributes(&self) -> IndexMap<QueryKey, QueryValue> {
        let mut attrs = IndexMap::new();
        attrs.insert(QueryKey::Class, QueryValue::Class(self.class));
        attrs.insert(QueryKey::Service, QueryValue::Text(self.service.clone()));

        if self.scope == StorageScope::DataProtection {
            attrs.insert(QueryKey::UseDataProtectionKeychain, QueryValue::Flag(true));
        }

        attrs
    }

    /// Whether an item with these attributes is selected by the query
    pub fn matches(&self, class: ItemClass, service: &str, scope: StorageScope) -> bool {
        self.class == class && self.service == service && self.scope == scope
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected_query_attributes() {
        let query = DeletionQuery::generic_password("svc", StorageScope::DataProtection);
        let attrs = query.attributes();

        assert_eq!(attrs.len(), 3);
        assert_eq!(
            attrs.get(&QueryKey::Class),
            Some(&QueryValue::Class(ItemClass::GenericPassword))
        );
        assert_eq!(
            attrs.get(&QueryKey::Service),
            Some(&QueryValue::Text("svc".to_string()))
        );
        assert_eq!(
            attrs.get(&QueryKey::UseDataProtectionKeychain),
            Some(&QueryValue::Flag(true))
        );
    }

    #[test]
    fn test_legacy_query_omits_scope_flag() {
        let query = DeletionQuery::generic_password("svc", StorageScope::Legacy);
        let attrs = query.attributes();

        assert_eq!(attrs.len(), 2);
        assert!(!attrs.contains_key(&QueryKey::UseDataProtectionKeychain));
        let keys: Vec<_> = attrs.keys().copied().collect();
        assert_eq!(keys, vec![QueryKey::Class, QueryKey::Service]);
    }

    #[test]
    fn test_matches() {
        let query = DeletionQuery::generic_password("svc", StorageScope::DataProtection);

        assert!(query.matches(ItemClass::GenericPassword, "svc", StorageScope::DataProtection));
        assert!(!query.matches(ItemClass::GenericPassword, "other", StorageScope::DataProtection));
        assert!(!query.matches(ItemClass::GenericPassword, "svc", StorageScope::Legacy));
    }
}
