//! Tabular (arithmetic) Islamic calendar.
//!
//! Twelve months alternating 30 and 29 days, with Dhu al-Hijjah lengthened to
//! 30 days in the 11 leap years of each 30-year cycle. This is the civil
//! variant: 1 Muharram AH 1 is Friday 622-07-19 (proleptic Gregorian).

use super::adapter::{CalendarAdapter, CalendarDate, lookup_month_name};
use super::jdn::{JulianDay, saturate_i32, saturate_u32};

/// 1 Muharram AH 1.
pub const ISLAMIC_EPOCH: JulianDay = JulianDay::new(1_948_440);

const MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi\u{2018} al-awwal",
    "Rabi\u{2018} al-thani",
    "Jumada al-awwal",
    "Jumada al-thani",
    "Rajab",
    "Sha\u{2018}ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi\u{2018}dah",
    "Dhu al-Hijjah",
];

/// Leap years are years 2, 5, 7, 10, 13, 16, 18, 21, 24, 26 and 29 of each
/// 30-year cycle.
#[must_use]
pub fn is_islamic_leap_year(year: i32) -> bool {
    (14 + 11 * i64::from(year)).rem_euclid(30) < 11
}

/// Days from the epoch to the first day of `year`.
fn year_start(year: i64) -> i64 {
    354 * (year - 1) + (3 + 11 * year).div_euclid(30)
}

/// Days from the start of the year to the first day of `month`.
fn month_start(month: i64) -> i64 {
    (59 * (month - 1) + 1).div_euclid(2)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IslamicAdapter;

impl CalendarAdapter for IslamicAdapter {
    fn name(&self) -> &'static str {
        "Islamic (Hijri)"
    }

    fn month_name(&self, month: u32) -> &'static str {
        lookup_month_name(&MONTH_NAMES, month)
    }

    fn months_in_year(&self, _year: i32) -> u32 {
        12
    }

    fn days_in_month(&self, year: i32, month: u32) -> u32 {
        match month {
            12 if is_islamic_leap_year(year) => 30,
            m if m % 2 == 1 => 30,
            _ => 29,
        }
    }

    fn from_julian_day(&self, day: JulianDay) -> CalendarDate {
        let elapsed = day.days_since(ISLAMIC_EPOCH);
        let year = (30 * elapsed + 10_646).div_euclid(10_631);
        let day_of_year = elapsed - year_start(year) + 1;
        let month = ((2 * day_of_year + 57).div_euclid(59)).min(12);

        CalendarDate::new(
            saturate_i32(year),
            saturate_u32(month),
            saturate_u32(day_of_year - month_start(month)),
        )
    }

    fn to_julian_day(&self, date: CalendarDate) -> JulianDay {
        // Months past 12 carry into the following years.
        let month_index = i64::from(date.month) - 1;
        let year = i64::from(date.year) + month_index.div_euclid(12);
        let month = month_index.rem_euclid(12) + 1;

        ISLAMIC_EPOCH.offset(year_start(year) + month_start(month) + i64::from(date.day) - 1)
    }
}
