//! Ancient Egyptian civil calendar.
//!
//! A wandering year of exactly 365 days: twelve 30-day months followed by
//! five epagomenal days, with no leap years. Years are counted from the era
//! of Nabonassar, whose Thoth 1 is proleptic Gregorian -746-02-18.

use super::adapter::{CalendarAdapter, CalendarDate, lookup_month_name};
use super::jdn::{JulianDay, saturate_i32, saturate_u32};

/// Thoth 1 of year 1.
pub const EGYPTIAN_EPOCH: JulianDay = JulianDay::new(1_448_638);

const DAYS_IN_YEAR: i64 = 365;
const DAYS_IN_MONTH: i64 = 30;

/// The pseudo-month that holds the epagomenal days.
const EPAGOMENAL_MONTH: u32 = 13;

const MONTH_NAMES: [&str; 13] = [
    "Thoth",
    "Phaophi",
    "Athyr",
    "Choiak",
    "Tybi",
    "Mecheir",
    "Phamenoth",
    "Pharmuthi",
    "Pachons",
    "Payni",
    "Epiphi",
    "Mesore",
    "Epagomenal",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EgyptianAdapter;

impl CalendarAdapter for EgyptianAdapter {
    fn name(&self) -> &'static str {
        "Ancient Egyptian"
    }

    fn month_name(&self, month: u32) -> &'static str {
        lookup_month_name(&MONTH_NAMES, month)
    }

    fn months_in_year(&self, _year: i32) -> u32 {
        EPAGOMENAL_MONTH
    }

    fn days_in_month(&self, _year: i32, month: u32) -> u32 {
        if month == EPAGOMENAL_MONTH { 5 } else { 30 }
    }

    fn from_julian_day(&self, day: JulianDay) -> CalendarDate {
        let elapsed = day.days_since(EGYPTIAN_EPOCH);
        let year = saturate_i32(elapsed.div_euclid(DAYS_IN_YEAR) + 1);
        let day_of_year = elapsed.rem_euclid(DAYS_IN_YEAR);

        if day_of_year >= 12 * DAYS_IN_MONTH {
            CalendarDate {
                year,
                month: EPAGOMENAL_MONTH,
                day: saturate_u32(day_of_year - 12 * DAYS_IN_MONTH + 1),
                is_intercalary: true,
            }
        } else {
            CalendarDate::new(
                year,
                saturate_u32(day_of_year / DAYS_IN_MONTH + 1),
                saturate_u32(day_of_year % DAYS_IN_MONTH + 1),
            )
        }
    }

    fn to_julian_day(&self, date: CalendarDate) -> JulianDay {
        let elapsed = (i64::from(date.year) - 1) * DAYS_IN_YEAR
            + (i64::from(date.month) - 1) * DAYS_IN_MONTH
            + i64::from(date.day)
            - 1;
        EGYPTIAN_EPOCH.offset(elapsed)
    }
}
