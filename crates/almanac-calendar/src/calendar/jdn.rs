//! Julian Day Number pivot.
//!
//! A [`JulianDay`] is the chronological Julian Day Number of a civil day: an
//! integer count where 1970-01-01 is day 2 440 588. The astronomical Julian
//! Date of the midnight that starts a civil day is that number minus 0.5, so
//! `floor(unix_millis / 86_400_000) + 2_440_587.5` names the same day.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};

/// JDN of 0000-12-31 (proleptic Gregorian), the day before `chrono`'s CE day 1.
const CE_OFFSET: i64 = 1_721_425;

/// Chronological Julian Day Number of a civil day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JulianDay(i64);

impl JulianDay {
    /// 1970-01-01.
    pub const UNIX_EPOCH: Self = Self(2_440_588);

    #[must_use]
    pub const fn new(day: i64) -> Self {
        Self(day)
    }

    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Days elapsed from `epoch` to `self`; negative before the epoch.
    #[must_use]
    pub const fn days_since(self, epoch: Self) -> i64 {
        self.0 - epoch.0
    }

    /// The day `days` after `self` (before, when negative).
    #[must_use]
    pub const fn offset(self, days: i64) -> Self {
        Self(self.0.saturating_add(days))
    }

    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self(i64::from(date.num_days_from_ce()) + CE_OFFSET)
    }

    /// ## Summary
    /// Converts back to a `chrono` civil date.
    ///
    /// ## Errors
    /// Returns `CalendarError::OutOfRange` if the day lies outside the range
    /// `NaiveDate` can represent.
    pub fn to_date(self) -> CalendarResult<NaiveDate> {
        i32::try_from(self.0 - CE_OFFSET)
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .ok_or(CalendarError::OutOfRange { julian_day: self.0 })
    }

    /// Proleptic Gregorian date to JDN.
    ///
    /// Months and days outside their usual ranges roll over into the
    /// neighbouring months and years: month 13 is January of the next year,
    /// day 0 is the last day of the previous month.
    #[must_use]
    pub fn from_gregorian(year: i64, month: i64, day: i64) -> Self {
        let month_index = month - 1;
        let year = year + month_index.div_euclid(12);
        let month = month_index.rem_euclid(12) + 1;

        // Count from March so the leap day falls at the end of the year.
        let a = (14 - month) / 12;
        let y = year + 4800 - a;
        let m = month + 12 * a - 3;

        let first_of_month = (153 * m + 2) / 5 + 1 + 365 * y + y.div_euclid(4) - y.div_euclid(100)
            + y.div_euclid(400)
            - 32_045;

        Self(first_of_month + day - 1)
    }

    /// JDN to proleptic Gregorian `(year, month, day)`.
    #[must_use]
    pub fn to_gregorian(self) -> (i64, u32, u32) {
        let a = self.0 + 32_044;
        let b = (4 * a + 3).div_euclid(146_097);
        let c = a - (146_097 * b).div_euclid(4);
        let d = (4 * c + 3).div_euclid(1461);
        let e = c - (1461 * d).div_euclid(4);
        let m = (5 * e + 2).div_euclid(153);

        let day = e - (153 * m + 2).div_euclid(5) + 1;
        let month = m + 3 - 12 * (m / 10);
        let year = 100 * b + d - 4800 + m / 10;

        (year, saturate_u32(month), saturate_u32(day))
    }

    /// Day of the week; JDN 0 was a Monday.
    #[must_use]
    pub fn weekday(self) -> Weekday {
        match self.0.rem_euclid(7) {
            0 => Weekday::Mon,
            1 => Weekday::Tue,
            2 => Weekday::Wed,
            3 => Weekday::Thu,
            4 => Weekday::Fri,
            5 => Weekday::Sat,
            _ => Weekday::Sun,
        }
    }
}

impl From<NaiveDate> for JulianDay {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

/// Narrows a day-arithmetic result, saturating at the `i32` bounds.
#[must_use]
pub(crate) fn saturate_i32(value: i64) -> i32 {
    i32::try_from(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX))).unwrap_or_default()
}

/// Narrows a day-arithmetic result, saturating at the `u32` bounds.
#[must_use]
pub(crate) fn saturate_u32(value: i64) -> u32 {
    u32::try_from(value.clamp(0, i64::from(u32::MAX))).unwrap_or_default()
}
