//! Filter field types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Widget kind a host renders for a filter field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    /// Reference to a record of another entity type, resolved by lookup.
    Link,
    /// One value out of an ordered option list.
    Select,
    /// Whole number.
    Int,
    /// Free text.
    Data,
    /// Calendar date (`YYYY-MM-DD`).
    Date,
    /// Checkbox.
    Check,
    /// Decimal number.
    Float,
}

impl FieldType {
    /// Returns the wire name of the field type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Link => "Link",
            Self::Select => "Select",
            Self::Int => "Int",
            Self::Data => "Data",
            Self::Date => "Date",
            Self::Check => "Check",
            Self::Float => "Float",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a select field's option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Value submitted to the query.
    pub value: String,
    /// Localized display text.
    pub label: String,
}

impl SelectOption {
    /// Creates an option.
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Options attached to a field, depending on its type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldOptions {
    /// Entity type a link field resolves against (e.g. "Employee").
    Link(String),
    /// Ordered option list of a select field.
    Select(Vec<SelectOption>),
}

/// Value pre-populated in a field when the form is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterDefault {
    /// Integer default, serialized as a JSON number.
    Int(i64),
    /// Text default, serialized as a JSON string.
    Text(String),
}

impl FilterDefault {
    /// Returns the text default, if any.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Int(_) => None,
        }
    }

    /// Returns the integer default, if any.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Text(_) => None,
        }
    }
}

/// A single named, typed input of a report's query form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterField {
    /// Query parameter the input binds to. Unique within a descriptor.
    pub fieldname: String,
    /// Localized display text.
    pub label: String,
    /// Widget kind.
    pub fieldtype: FieldType,
    /// Link target or select options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<FieldOptions>,
    /// Whether the host must reject an empty submission.
    #[serde(rename = "reqd", with = "reqd_flag", default)]
    pub required: bool,
    /// Value pre-populated at render time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<FilterDefault>,
}

impl FilterField {
    /// Creates an optional field with no options and no default.
    #[must_use]
    pub fn new(fieldname: impl Into<String>, label: impl Into<String>, fieldtype: FieldType) -> Self {
        Self {
            fieldname: fieldname.into(),
            label: label.into(),
            fieldtype,
            options: None,
            required: false,
            default: None,
        }
    }

    /// Creates a link field resolving against `entity_type`.
    #[must_use]
    pub fn link(
        fieldname: impl Into<String>,
        label: impl Into<String>,
        entity_type: impl Into<String>,
    ) -> Self {
        Self {
            options: Some(FieldOptions::Link(entity_type.into())),
            ..Self::new(fieldname, label, FieldType::Link)
        }
    }

    /// Creates a select field with the given ordered options.
    #[must_use]
    pub fn select(
        fieldname: impl Into<String>,
        label: impl Into<String>,
        options: Vec<SelectOption>,
    ) -> Self {
        Self {
            options: Some(FieldOptions::Select(options)),
            ..Self::new(fieldname, label, FieldType::Select)
        }
    }

    /// Creates an integer field.
    #[must_use]
    pub fn int(fieldname: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(fieldname, label, FieldType::Int)
    }

    /// Marks the field as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the render-time default.
    #[must_use]
    pub fn with_default(mut self, default: FilterDefault) -> Self {
        self.default = Some(default);
        self
    }

    /// Returns the entity type of a link field.
    #[must_use]
    pub fn link_target(&self) -> Option<&str> {
        match &self.options {
            Some(FieldOptions::Link(target)) => Some(target),
            _ => None,
        }
    }

    /// Returns the options of a select field.
    #[must_use]
    pub fn select_options(&self) -> Option<&[SelectOption]> {
        match &self.options {
            Some(FieldOptions::Select(options)) => Some(options),
            _ => None,
        }
    }
}

/// Hosts expect `reqd` as `0`/`1`.
mod reqd_flag {
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(required: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*required))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Flag {
            Int(u8),
            Bool(bool),
        }

        Ok(match Flag::deserialize(deserializer)? {
            Flag::Int(n) => n != 0,
            Flag::Bool(b) => b,
        })
    }
}
