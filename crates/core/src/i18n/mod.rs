//! Label localization.
//!
//! Every label in a filter descriptor passes through a [`Localizer`] before
//! it reaches the host, so one descriptor builder serves every language.

pub mod catalog;
pub mod error;

pub use catalog::CatalogLocalizer;
pub use error::LocalizeError;

/// Translates a source-language label into the display language.
pub trait Localizer: Send + Sync {
    /// Returns the localized form of `key`.
    fn localize(&self, key: &str) -> Result<String, LocalizeError>;
}

/// Localizer that serves labels in the source language.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityLocalizer;

impl Localizer for IdentityLocalizer {
    fn localize(&self, key: &str) -> Result<String, LocalizeError> {
        Ok(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_returns_key() {
        assert_eq!(IdentityLocalizer.localize("Employee").unwrap(), "Employee");
        assert_eq!(IdentityLocalizer.localize("").unwrap(), "");
    }
}
