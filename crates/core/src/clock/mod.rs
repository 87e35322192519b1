//! Sources of the current date.
//!
//! Filter defaults such as "this month" are computed from a [`Clock`]
//! passed in by the caller, so tests can pin the date.

pub mod error;

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

pub use error::ClockError;

/// Capability that reports the current calendar date.
pub trait Clock: Send + Sync {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}

/// Wall clock reading the system time in a fixed timezone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    timezone: Tz,
}

impl SystemClock {
    /// Creates a system clock for the given timezone.
    #[must_use]
    pub const fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    /// Creates a system clock reporting UTC dates.
    #[must_use]
    pub const fn utc() -> Self {
        Self::new(Tz::UTC)
    }

    /// Creates a system clock from an IANA timezone name such as `"Europe/Berlin"`.
    pub fn from_timezone_name(name: &str) -> Result<Self, ClockError> {
        name.parse::<Tz>()
            .map(Self::new)
            .map_err(|_| ClockError::UnknownTimezone(name.to_string()))
    }

    /// Returns the configured timezone.
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.timezone
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::utc()
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.timezone).date_naive()
    }
}

/// Clock frozen on a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    /// Creates a clock that always reports `date`.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Creates a clock from year, month and day. Returns `None` for an invalid date.
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_fixed_clock_reports_its_date() {
        let clock = FixedClock::from_ymd(2025, 3, 15).expect("valid date");
        assert_eq!(
            clock.today(),
            NaiveDate::from_ymd_opt(2025, 3, 15).expect("valid date")
        );
    }

    #[test]
    fn test_fixed_clock_rejects_invalid_date() {
        assert!(FixedClock::from_ymd(2025, 2, 30).is_none());
        assert!(FixedClock::from_ymd(2025, 13, 1).is_none());
    }

    #[rstest]
    #[case("UTC")]
    #[case("Asia/Kolkata")]
    #[case("America/New_York")]
    fn test_known_timezones(#[case] name: &str) {
        let clock = SystemClock::from_timezone_name(name).expect("known zone");
        assert_eq!(clock.timezone().name(), name);
    }

    #[test]
    fn test_unknown_timezone() {
        let err = SystemClock::from_timezone_name("Mars/Olympus_Mons").unwrap_err();
        assert_eq!(err, ClockError::UnknownTimezone("Mars/Olympus_Mons".into()));
    }

    #[test]
    fn test_system_clock_is_within_a_day_of_utc() {
        let utc_today = Utc::now().date_naive();
        let today = SystemClock::from_timezone_name("Pacific/Kiritimati")
            .expect("known zone")
            .today();
        let diff = (today - utc_today).num_days().abs();
        assert!(diff <= 1, "zone offset moved the date by {diff} days");
    }
}
