//! Report filter schemas for the timesheet module.
//!
//! This crate contains pure report metadata with ZERO web dependencies.
//! Hosts read the descriptors built here to render report query forms.
//!
//! # Modules
//!
//! - `clock` - Injectable sources of the current date
//! - `i18n` - Label localization
//! - `filter` - Filter fields, descriptors and submission validation
//! - `reports` - Report registrations (Employee Timesheet Report)

pub mod clock;
pub mod filter;
pub mod i18n;
pub mod reports;
