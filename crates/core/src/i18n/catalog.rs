//! Map-backed localizer.

use std::collections::HashMap;
use std::path::Path;

use super::{LocalizeError, Localizer};

/// Localizer backed by an in-memory translation table.
///
/// Labels missing from the table are returned untranslated, unless the
/// catalog is strict, in which case they are an error.
#[derive(Debug, Clone, Default)]
pub struct CatalogLocalizer {
    entries: HashMap<String, String>,
    strict: bool,
}

impl CatalogLocalizer {
    /// Creates a lenient catalog from label/translation pairs.
    #[must_use]
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            strict: false,
        }
    }

    /// Sets whether missing labels are an error.
    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Parses a catalog from a JSON object such as `{"Month": "Mois"}`.
    pub fn from_json_str(json: &str) -> Result<Self, LocalizeError> {
        let entries: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self {
            entries,
            strict: false,
        })
    }

    /// Loads a catalog from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LocalizeError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| LocalizeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Number of translated labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Localizer for CatalogLocalizer {
    fn localize(&self, key: &str) -> Result<String, LocalizeError> {
        match self.entries.get(key) {
            Some(translated) => Ok(translated.clone()),
            None if self.strict => Err(LocalizeError::MissingTranslation(key.to_string())),
            None => Ok(key.to_string()),
        }
    }
}
