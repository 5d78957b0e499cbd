//! Keychain status codes
//!
//! `SecItemDelete` answers with an `OSStatus`. Only two values carry meaning
//! for a purge; everything else is passed through untouched.

use std::fmt;

/// `errSecSuccess`
pub const ERR_SEC_SUCCESS: i32 = 0;

/// `errSecItemNotFound`
pub const ERR_SEC_ITEM_NOT_FOUND: i32 = -25300;

/// `errSecUnimplemented`
pub const ERR_SEC_UNIMPLEMENTED: i32 = -4;

/// Outcome of a single delete call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurgeStatus {
    /// All matching items were removed
    Success,
    /// Nothing matched the query
    NotFound,
    /// Any other status, kept verbatim
    Other(i32),
}

impl PurgeStatus {
    /// Map a raw `OSStatus`
    pub fn from_os_status(code: i32) -> Self {
        match code {
            ERR_SEC_SUCCESS => PurgeStatus::Success,
            ERR_SEC_ITEM_NOT_FOUND => PurgeStatus::NotFound,
            other => PurgeStatus::Other(other),
        }
    }

    /// The raw numeric code
    pub fn code(&self) -> i32 {
        match self {
            PurgeStatus::Success => ERR_SEC_SUCCESS,
            PurgeStatus::NotFound => ERR_SEC_ITEM_NOT_FOUND,
            PurgeStatus::Other(code) => *code,
        }
    }

    /// Success and not-found are both expected terminal outcomes
    pub fn is_ok(&self) -> bool {
        !matches!(self, PurgeStatus::Other(_))
    }
}

impl fmt::Display for PurgeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PurgeStatus::Success => write!(f, "success"),
            PurgeStatus::NotFound => write!(f, "not found"),
            PurgeStatus::Other(code) => write!(f, "status {}", code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_os_status() {
        assert_eq!(PurgeStatus::from_os_status(0), PurgeStatus::Success);
        assert_eq!(PurgeStatus::from_os_status(-25300), PurgeStatus::NotFound);
        assert_eq!(
            PurgeStatus::from_os_status(-25308),
            PurgeStatus::Other(-25308)
        );
    }

    #[test]
    fn test_code_is_preserved() {
        for code in [0, -25300, -34018, -4, 1] {
            assert_eq!(PurgeStatus::from_os_status(code).code(), code);
        }
    }

    #[test]
    fn test_not_found_is_not_an_error() {
        assert!(PurgeStatus::Success.is_ok());
        assert!(PurgeStatus::NotFound.is_ok());
        assert!(!PurgeStatus::Other(-34018).is_ok());
    }

    #[test]
    fn test_display() {
        assert_eq!(PurgeStatus::NotFound.to_string(), "not found");
        assert_eq!(PurgeStatus::Other(-25293).to_string(), "status -25293");
    }
}
