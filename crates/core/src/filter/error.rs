//! Descriptor error types.

use thiserror::Error;

use super::types::FieldType;
use crate::i18n::LocalizeError;

/// Errors that can occur while building a filter descriptor.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// A field has an empty name.
    #[error("Filter field name must not be empty")]
    EmptyFieldName,

    /// Two fields share a name.
    #[error("Duplicate filter field: {0}")]
    DuplicateField(String),

    /// Two options of one select field share a value.
    #[error("Duplicate option {value} in filter field {fieldname}")]
    DuplicateOption {
        /// Field holding the options.
        fieldname: String,
        /// Repeated option value.
        value: String,
    },

    /// Options are missing, empty, or of the wrong kind for the field type.
    #[error("Options of filter field {fieldname} do not fit field type {fieldtype}")]
    OptionsMismatch {
        /// Field name.
        fieldname: String,
        /// Declared field type.
        fieldtype: FieldType,
    },

    /// The default is not a value the field accepts.
    #[error("Default of filter field {fieldname} is not a valid {fieldtype} value")]
    InvalidDefault {
        /// Field name.
        fieldname: String,
        /// Declared field type.
        fieldtype: FieldType,
    },

    /// A label could not be localized.
    #[error(transparent)]
    Localization(#[from] LocalizeError),
}
