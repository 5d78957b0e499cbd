//! Purge configuration
//!
//! The tool has no config file and reads no flags; the defaults below are
//! what the application registers its secure storage under.

use crate::error::{PurgeError, Result};

/// Service label used by the application's secure storage
pub const DEFAULT_SERVICE: &str = "flutter_secure_storage_service";

/// Label used when describing the items in output
pub const DEFAULT_ITEM_LABEL: &str = "flutter_secure_storage";

/// Purge configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurgeConfig {
    /// `kSecAttrService` value to match
    pub service: String,
    /// Name for the items in status lines
    pub item_label: String,
}

impl Default for PurgeConfig {
    fn default() -> Self {
        Self {
            service: DEFAULT_SERVICE.to_string(),
            item_label: DEFAULT_ITEM_LABEL.to_string(),
        }
    }
}

impl PurgeConfig {
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = service.into();
        self
    }

    pub fn with_item_label(mut self, label: impl Into<String>) -> Self {
        self.item_label = label.into();
        self
    }

    /// Reject configurations that could never match a real item
    pub fn validate(&self) -> Result<()> {
        if self.service.trim().is_empty() {
            return Err(PurgeError::InvalidConfig(
                "service label must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = PurgeConfig::default();
        assert_eq!(config.service, "flutter_secure_storage_service");
        assert_eq!(config.item_label, "flutter_secure_storage");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builders() {
        let config = PurgeConfig::default()
            .with_service("com.example.app")
            .with_item_label("example");
        assert_eq!(config.service, "com.example.app");
        assert_eq!(config.item_label, "example");
    }

    #[test]
    fn test_empty_service_rejected() {
        let config = PurgeConfig::default().with_service("  ");
        assert!(matches!(
            config.validate(),
            Err(PurgeError::InvalidConfig(_))
        ));
    }
}
