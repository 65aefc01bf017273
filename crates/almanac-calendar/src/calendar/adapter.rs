use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::jdn::JulianDay;
use crate::error::CalendarResult;

/// Weekday headers shared by every calendar, Sunday first.
pub const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A date in some calendar's own year/month/day numbering.
///
/// Values are not validated: adapters accept whatever month and day they are
/// given and let the arithmetic run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Set for days outside the regular months, such as the Egyptian
    /// epagomenal days.
    #[serde(default)]
    pub is_intercalary: bool,
}

impl CalendarDate {
    #[must_use]
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month,
            day,
            is_intercalary: false,
        }
    }
}

/// ## Summary
/// Capability contract every calendar system implements.
///
/// An adapter only has to map its dates to and from a [`JulianDay`] and
/// describe its month layout; conversion to and from Gregorian dates and the
/// weekday of a month's first day are derived from that.
pub trait CalendarAdapter {
    /// Human-readable calendar name.
    fn name(&self) -> &'static str;

    /// Name of a 1-based month, or "Unknown" outside the calendar's months.
    fn month_name(&self, month: u32) -> &'static str;

    fn weekday_names(&self) -> [&'static str; 7] {
        WEEKDAY_NAMES
    }

    fn months_in_year(&self, year: i32) -> u32;

    fn days_in_month(&self, year: i32, month: u32) -> u32;

    fn from_julian_day(&self, day: JulianDay) -> CalendarDate;

    fn to_julian_day(&self, date: CalendarDate) -> JulianDay;

    /// Weekday of the month's first day, 0 = Sunday through 6 = Saturday.
    fn start_day_of_month(&self, year: i32, month: u32) -> u32 {
        self.to_julian_day(CalendarDate::new(year, month, 1))
            .weekday()
            .num_days_from_sunday()
    }

    fn convert_from_gregorian(&self, date: NaiveDate) -> CalendarDate {
        self.from_julian_day(JulianDay::from_date(date))
    }

    /// ## Summary
    /// Converts a date in this calendar to a civil Gregorian date.
    ///
    /// ## Errors
    /// Returns `CalendarError::OutOfRange` if the result cannot be represented
    /// as a `NaiveDate`.
    fn convert_to_gregorian(&self, date: CalendarDate) -> CalendarResult<NaiveDate> {
        self.to_julian_day(date).to_date()
    }

    /// Names of every month in `year`, in order.
    fn month_names(&self, year: i32) -> Vec<&'static str> {
        (1..=self.months_in_year(year))
            .map(|month| self.month_name(month))
            .collect()
    }
}

/// Looks up a 1-based month in a name table.
#[must_use]
pub(crate) fn lookup_month_name(names: &[&'static str], month: u32) -> &'static str {
    usize::try_from(month)
        .ok()
        .and_then(|month| month.checked_sub(1))
        .and_then(|index| names.get(index))
        .copied()
        .unwrap_or("Unknown")
}
