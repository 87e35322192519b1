//! Filters of the Employee Timesheet Report.
//!
//! The report shows one employee's timesheet for one calendar month, so the
//! form asks for an employee, a month and a year. Month and year default to
//! the clock's current date.

use chrono::{Datelike, Month};

use crate::clock::Clock;
use crate::filter::{
    DescriptorError, FilterDefault, FilterDescriptor, FilterField, SelectOption,
};
use crate::i18n::{LocalizeError, Localizer};

/// Name the report is registered under.
pub const REPORT_NAME: &str = "Employee Timesheet Report";

/// Entity type the employee filter resolves against.
pub const EMPLOYEE_ENTITY: &str = "Employee";

/// Builds the report's filter descriptor for the clock's current date.
///
/// # Errors
///
/// Returns an error if a label cannot be localized.
pub fn filters(
    clock: &dyn Clock,
    localizer: &dyn Localizer,
) -> Result<FilterDescriptor, DescriptorError> {
    let today = clock.today();

    FilterDescriptor::builder(REPORT_NAME)
        .field(
            FilterField::link("employee", localizer.localize("Employee")?, EMPLOYEE_ENTITY)
                .required(),
        )
        .field(
            FilterField::select("month", localizer.localize("Month")?, month_options(localizer)?)
                .required()
                // chrono months are 1-based
                .with_default(FilterDefault::Text(today.month().to_string())),
        )
        .field(
            FilterField::int("year", localizer.localize("Year")?)
                .required()
                .with_default(FilterDefault::Int(i64::from(today.year()))),
        )
        .build()
}

/// Twelve options valued "1".."12", labelled with localized month names.
pub fn month_options(localizer: &dyn Localizer) -> Result<Vec<SelectOption>, LocalizeError> {
    std::iter::successors(Some(Month::January), |m| {
        (*m != Month::December).then(|| m.succ())
    })
    .map(|month| -> Result<SelectOption, LocalizeError> {
        Ok(SelectOption::new(
            month.number_from_month().to_string(),
            localizer.localize(month.name())?,
        ))
    })
    .collect()
}
