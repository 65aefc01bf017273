use chrono::{Datelike, NaiveDate};

use super::adapter::{CalendarAdapter, CalendarDate, lookup_month_name};
use super::jdn::{JulianDay, saturate_i32};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The proleptic Gregorian calendar.
///
/// Civil dates pass through unchanged; out-of-range months and days roll
/// over into neighbouring months.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GregorianAdapter;

impl CalendarAdapter for GregorianAdapter {
    fn name(&self) -> &'static str {
        "Gregorian"
    }

    fn month_name(&self, month: u32) -> &'static str {
        lookup_month_name(&MONTH_NAMES, month)
    }

    fn months_in_year(&self, _year: i32) -> u32 {
        12
    }

    fn days_in_month(&self, year: i32, month: u32) -> u32 {
        // Day 0 of the next month is the last day of this one.
        let last = CalendarDate::new(year, month.saturating_add(1), 0);
        self.from_julian_day(self.to_julian_day(last)).day
    }

    fn from_julian_day(&self, day: JulianDay) -> CalendarDate {
        let (year, month, day) = day.to_gregorian();
        CalendarDate::new(saturate_i32(year), month, day)
    }

    fn to_julian_day(&self, date: CalendarDate) -> JulianDay {
        JulianDay::from_gregorian(
            i64::from(date.year),
            i64::from(date.month),
            i64::from(date.day),
        )
    }

    fn convert_from_gregorian(&self, date: NaiveDate) -> CalendarDate {
        CalendarDate::new(date.year(), date.month(), date.day())
    }
}
