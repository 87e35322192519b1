//! Filter descriptor and its builder.

use std::collections::HashSet;

use serde::Serialize;

use super::error::DescriptorError;
use super::types::{FieldOptions, FieldType, FilterDefault, FilterField};
use super::validation::accepts_default;

/// Immutable, ordered filter set of one report.
///
/// Field order is rendering order. Field names are unique, and so are the
/// option values of every select field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterDescriptor {
    report_name: String,
    filters: Vec<FilterField>,
}

impl FilterDescriptor {
    /// Starts a descriptor for the named report.
    #[must_use]
    pub fn builder(report_name: impl Into<String>) -> FilterDescriptorBuilder {
        FilterDescriptorBuilder {
            report_name: report_name.into(),
            fields: Vec::new(),
        }
    }

    /// Name of the report the filters belong to.
    #[must_use]
    pub fn report_name(&self) -> &str {
        &self.report_name
    }

    /// Fields in rendering order.
    #[must_use]
    pub fn fields(&self) -> &[FilterField] {
        &self.filters
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, fieldname: &str) -> Option<&FilterField> {
        self.filters.iter().find(|f| f.fieldname == fieldname)
    }

    /// Field names in rendering order.
    #[must_use]
    pub fn fieldnames(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.fieldname.as_str()).collect()
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns true if the descriptor declares no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

/// Collects fields in order and checks descriptor invariants on [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct FilterDescriptorBuilder {
    report_name: String,
    fields: Vec<FilterField>,
}

impl FilterDescriptorBuilder {
    /// Appends a field.
    #[must_use]
    pub fn field(mut self, field: FilterField) -> Self {
        self.fields.push(field);
        self
    }

    /// Finishes the descriptor.
    ///
    /// # Errors
    ///
    /// Returns an error if a field name is empty or repeated, if a field's
    /// options do not fit its type, if a select field repeats an option
    /// value, or if a default is not a value the field accepts.
    pub fn build(self) -> Result<FilterDescriptor, DescriptorError> {
        let mut names = HashSet::with_capacity(self.fields.len());

        for field in &self.fields {
            if field.fieldname.is_empty() {
                return Err(DescriptorError::EmptyFieldName);
            }
            if !names.insert(field.fieldname.as_str()) {
                return Err(DescriptorError::DuplicateField(field.fieldname.clone()));
            }

            check_options(field)?;

            if let Some(options) = field.select_options() {
                let mut values = HashSet::with_capacity(options.len());
                for option in options {
                    if !values.insert(option.value.as_str()) {
                        return Err(DescriptorError::DuplicateOption {
                            fieldname: field.fieldname.clone(),
                            value: option.value.clone(),
                        });
                    }
                }
            }
        }

        for field in &self.fields {
            check_default(field)?;
        }

        Ok(FilterDescriptor {
            report_name: self.report_name,
            filters: self.fields,
        })
    }
}

/// Link fields need an entity name, select fields a non-empty option list,
/// every other type no options.
fn check_options(field: &FilterField) -> Result<(), DescriptorError> {
    let fits = match (field.fieldtype, &field.options) {
        (FieldType::Link, Some(FieldOptions::Link(target))) => !target.trim().is_empty(),
        (FieldType::Select, Some(FieldOptions::Select(options))) => !options.is_empty(),
        (FieldType::Link | FieldType::Select, _) => false,
        (_, options) => options.is_none(),
    };

    if fits {
        Ok(())
    } else {
        Err(DescriptorError::OptionsMismatch {
            fieldname: field.fieldname.clone(),
            fieldtype: field.fieldtype,
        })
    }
}

/// Numeric and checkbox fields take integer defaults, the rest text. The
/// default must also pass submission validation.
fn check_default(field: &FilterField) -> Result<(), DescriptorError> {
    let Some(default) = &field.default else {
        return Ok(());
    };

    let kind_fits = matches!(
        (field.fieldtype, default),
        (
            FieldType::Int | FieldType::Check | FieldType::Float,
            FilterDefault::Int(_)
        ) | (
            FieldType::Float | FieldType::Link | FieldType::Select | FieldType::Data | FieldType::Date,
            FilterDefault::Text(_)
        )
    );

    if kind_fits && accepts_default(field, default) {
        Ok(())
    } else {
        Err(DescriptorError::InvalidDefault {
            fieldname: field.fieldname.clone(),
            fieldtype: field.fieldtype,
        })
    }
}
