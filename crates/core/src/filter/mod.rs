//! Report filter schemas.
//!
//! A [`FilterDescriptor`] is the ordered, immutable list of [`FilterField`]s a
//! host renders as a report's query form. This module provides:
//! - Field types, option lists and default values
//! - A builder enforcing unique field names and option values
//! - Validation of submitted filter values against a descriptor

pub mod descriptor;
pub mod error;
pub mod types;
pub mod validation;

#[cfg(test)]
mod tests;

pub use descriptor::{FilterDescriptor, FilterDescriptorBuilder};
pub use error::DescriptorError;
pub use types::*;
pub use validation::{FilterValues, FilterViolation};
