//! Validation of submitted filter values.
//!
//! Hosts collect values from the rendered form and check them against the
//! descriptor before running the report query.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::descriptor::FilterDescriptor;
use super::types::{FieldType, FilterDefault, FilterField};

/// Values submitted for a report's filters, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterValues(BTreeMap<String, Value>);

impl FilterValues {
    /// Creates an empty submission.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value.
    #[must_use]
    pub fn with(mut self, fieldname: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(fieldname.into(), value.into());
        self
    }

    /// Returns the submitted value of a field.
    #[must_use]
    pub fn get(&self, fieldname: &str) -> Option<&Value> {
        self.0.get(fieldname)
    }

    /// Iterates over submitted values in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for FilterValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A submitted value that the descriptor does not accept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterViolation {
    /// A required field is missing or blank.
    #[error("Please select {label}")]
    MissingRequired {
        /// Field name.
        fieldname: String,
        /// Field label, as shown to the user.
        label: String,
    },

    /// A select value is not one of the field's options.
    #[error("{value} is not a valid option for {fieldname}")]
    UnknownOption {
        /// Field name.
        fieldname: String,
        /// Submitted value.
        value: String,
    },

    /// A value does not parse as the field's type.
    #[error("{value} is not a valid {expected} value for {fieldname}")]
    InvalidValue {
        /// Field name.
        fieldname: String,
        /// Submitted value.
        value: String,
        /// Expected field type.
        expected: FieldType,
    },

    /// A value was submitted for a field the descriptor does not declare.
    #[error("Unknown filter: {fieldname}")]
    UnknownField {
        /// Submitted field name.
        fieldname: String,
    },
}

impl FilterDescriptor {
    /// Checks submitted values against this descriptor.
    ///
    /// Fields are checked in rendering order, then unknown field names in
    /// alphabetical order. Blank optional fields are accepted.
    ///
    /// # Errors
    ///
    /// Returns every violation found.
    pub fn validate(&self, values: &FilterValues) -> Result<(), Vec<FilterViolation>> {
        let mut violations: Vec<FilterViolation> = self
            .fields()
            .iter()
            .filter_map(|field| check_field(field, values.get(&field.fieldname)))
            .collect();

        violations.extend(
            values
                .iter()
                .filter(|(name, _)| self.field(name).is_none())
                .map(|(name, _)| FilterViolation::UnknownField {
                    fieldname: name.to_string(),
                }),
        );

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

fn check_field(field: &FilterField, value: Option<&Value>) -> Option<FilterViolation> {
    let missing = || {
        field.required.then(|| FilterViolation::MissingRequired {
            fieldname: field.fieldname.clone(),
            label: field.label.clone(),
        })
    };

    let text = match value.map_or(Submitted::Blank, classify) {
        Submitted::Blank => return missing(),
        // every field type takes a single scalar
        Submitted::Composite(json) => {
            return Some(FilterViolation::InvalidValue {
                fieldname: field.fieldname.clone(),
                value: json,
                expected: field.fieldtype,
            });
        }
        Submitted::Scalar(text) => text,
    };

    let invalid = || FilterViolation::InvalidValue {
        fieldname: field.fieldname.clone(),
        value: text.clone(),
        expected: field.fieldtype,
    };

    match field.fieldtype {
        FieldType::Select => {
            let options = field.select_options().unwrap_or_default();
            if options.iter().any(|o| o.value == text) {
                None
            } else {
                Some(FilterViolation::UnknownOption {
                    fieldname: field.fieldname.clone(),
                    value: text.clone(),
                })
            }
        }
        FieldType::Int => text.parse::<i64>().is_err().then(invalid),
        FieldType::Float => (!text.parse::<f64>().is_ok_and(f64::is_finite)).then(invalid),
        FieldType::Date => NaiveDate::parse_from_str(&text, "%Y-%m-%d")
            .is_err()
            .then(invalid),
        FieldType::Check => (!matches!(text.as_str(), "0" | "1" | "true" | "false")).then(invalid),
        FieldType::Link | FieldType::Data => None,
    }
}

/// Returns true if `default` is a value `field` would accept on submission.
pub(super) fn accepts_default(field: &FilterField, default: &FilterDefault) -> bool {
    let value = match default {
        FilterDefault::Int(n) => Value::from(*n),
        FilterDefault::Text(text) => Value::from(text.as_str()),
    };
    matches!(classify(&value), Submitted::Scalar(_)) && check_field(field, Some(&value)).is_none()
}

/// Shape of a submitted value.
enum Submitted {
    /// Null, whitespace, or an empty array or object.
    Blank,
    /// Trimmed text of a string, number or boolean.
    Scalar(String),
    /// JSON text of a non-empty array or object.
    Composite(String),
}

fn classify(value: &Value) -> Submitted {
    let text = match value {
        Value::Null => return Submitted::Blank,
        Value::Array(items) if items.is_empty() => return Submitted::Blank,
        Value::Object(map) if map.is_empty() => return Submitted::Blank,
        Value::Array(_) | Value::Object(_) => return Submitted::Composite(value.to_string()),
        Value::String(s) => s.trim().to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
    };
    if text.is_empty() {
        Submitted::Blank
    } else {
        Submitted::Scalar(text)
    }
}
