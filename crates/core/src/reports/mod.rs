//! Report filter registrations.
//!
//! This module maps report names to the functions that build their filter
//! descriptors:
//! - Employee Timesheet Report
//!
//! Descriptors are rebuilt on every evaluation so date defaults always
//! reflect the clock at render time.

pub mod employee_timesheet;
pub mod error;
pub mod registry;


pub use error::RegistryError;
pub use registry::{DescriptorFn, ReportRegistry};
