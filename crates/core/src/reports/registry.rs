//! Registry of report filter builders.

use std::collections::BTreeMap;

use crate::clock::Clock;
use crate::filter::{DescriptorError, FilterDescriptor};
use crate::i18n::Localizer;

use super::employee_timesheet;
use super::error::RegistryError;

/// Function building a report's filter descriptor.
pub type DescriptorFn =
    fn(&dyn Clock, &dyn Localizer) -> Result<FilterDescriptor, DescriptorError>;

/// Maps report names to their filter builders.
#[derive(Debug, Clone, Default)]
pub struct ReportRegistry {
    reports: BTreeMap<String, DescriptorFn>,
}

impl ReportRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in report.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.reports.insert(
            employee_timesheet::REPORT_NAME.to_string(),
            employee_timesheet::filters,
        );
        registry
    }

    /// Registers a report.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is already taken.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        build: DescriptorFn,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.reports.contains_key(&name) {
            return Err(RegistryError::AlreadyRegistered(name));
        }
        self.reports.insert(name, build);
        Ok(())
    }

    /// Returns true if a report is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.reports.contains_key(name)
    }

    /// Registered report names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.reports.keys().map(String::as_str).collect()
    }

    /// Builds a fresh descriptor for the named report.
    ///
    /// # Errors
    ///
    /// Returns an error if the report is unknown or its descriptor cannot be built.
    pub fn evaluate(
        &self,
        name: &str,
        clock: &dyn Clock,
        localizer: &dyn Localizer,
    ) -> Result<FilterDescriptor, RegistryError> {
        let build = self
            .reports
            .get(name)
            .ok_or_else(|| RegistryError::UnknownReport(name.to_string()))?;
        Ok(build(clock, localizer)?)
    }
}
