//! Month grids, month navigation and week strips.
//!
//! Grids are laid out Sunday first: a month starting on a Wednesday has three
//! leading blank cells. Every cell carries its Gregorian date so events, which
//! are stored against Gregorian dates, can be attached whatever calendar is
//! being displayed.

use almanac_core::types::CalendarSystem;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::adapter::{CalendarAdapter, CalendarDate};
use super::event::{CalendarEvent, DatedEvents};
use super::jdn::JulianDay;
use super::registry::calendar_for;
use crate::error::{CalendarError, CalendarResult};

/// The (year, month) a month grid displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCursor {
    pub year: i32,
    pub month: u32,
}

impl MonthCursor {
    #[must_use]
    pub const fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The month of `calendar` that contains `date`.
    #[must_use]
    pub fn containing<C: CalendarAdapter + ?Sized>(calendar: &C, date: NaiveDate) -> Self {
        let converted = calendar.convert_from_gregorian(date);
        Self::new(converted.year, converted.month)
    }

    #[must_use]
    pub fn next<C: CalendarAdapter + ?Sized>(self, calendar: &C) -> Self {
        if self.month >= calendar.months_in_year(self.year) {
            Self::new(self.year.saturating_add(1), 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    #[must_use]
    pub fn prev<C: CalendarAdapter + ?Sized>(self, calendar: &C) -> Self {
        if self.month <= 1 {
            let year = self.year.saturating_sub(1);
            Self::new(year, calendar.months_in_year(year))
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    /// ## Summary
    /// Checks the month exists in `calendar`.
    ///
    /// ## Errors
    /// Returns `CalendarError::InvalidDate` if the month is 0 or past the
    /// last month of the year.
    pub fn validate<C: CalendarAdapter + ?Sized>(self, calendar: &C) -> CalendarResult<()> {
        let months = calendar.months_in_year(self.year);
        if (1..=months).contains(&self.month) {
            Ok(())
        } else {
            Err(CalendarError::InvalidDate(format!(
                "month {} of {} is outside 1..={months}",
                self.month,
                calendar.name()
            )))
        }
    }
}

/// One day cell of a month grid.
#[derive(Debug, Clone, Serialize)]
pub struct GridDay {
    pub day: u32,
    pub date: CalendarDate,
    pub gregorian: NaiveDate,
    pub is_today: bool,
    pub events: Vec<CalendarEvent>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthGrid {
    pub system: CalendarSystem,
    pub calendar_name: &'static str,
    pub year: i32,
    pub month: u32,
    pub month_name: &'static str,
    pub title: String,
    pub weekday_names: [&'static str; 7],
    /// Empty cells before day 1, equal to the weekday of day 1.
    pub leading_blanks: u32,
    pub days: Vec<GridDay>,
    pub prev: MonthCursor,
    pub next: MonthCursor,
}

impl MonthGrid {
    /// ## Summary
    /// Lays out one month of `system` with `events` attached to their days.
    ///
    /// ## Errors
    /// Returns `CalendarError::InvalidDate` if the cursor names a month the
    /// calendar does not have, or `CalendarError::OutOfRange` if a day of the
    /// month has no Gregorian equivalent.
    pub fn build(
        system: CalendarSystem,
        cursor: MonthCursor,
        today: NaiveDate,
        events: &[CalendarEvent],
    ) -> CalendarResult<Self> {
        let calendar = calendar_for(system);
        cursor.validate(&calendar)?;

        let dated = DatedEvents::new(events);
        let first = calendar.to_julian_day(CalendarDate::new(cursor.year, cursor.month, 1));
        let days_in_month = calendar.days_in_month(cursor.year, cursor.month);

        let days = (1..=days_in_month)
            .map(|day| {
                let julian_day = first.offset(i64::from(day) - 1);
                let gregorian = julian_day.to_date()?;
                Ok(GridDay {
                    day,
                    date: calendar.from_julian_day(julian_day),
                    gregorian,
                    is_today: gregorian == today,
                    events: dated.on(gregorian).into_iter().cloned().collect(),
                })
            })
            .collect::<CalendarResult<Vec<_>>>()?;

        tracing::debug!(
            %system,
            year = cursor.year,
            month = cursor.month,
            days = days.len(),
            events = dated.len(),
            "Built month grid"
        );

        let month_name = calendar.month_name(cursor.month);
        Ok(Self {
            system,
            calendar_name: calendar.name(),
            year: cursor.year,
            month: cursor.month,
            month_name,
            title: format!("{month_name} {}", cursor.year),
            weekday_names: calendar.weekday_names(),
            leading_blanks: first.weekday().num_days_from_sunday(),
            days,
            prev: cursor.prev(&calendar),
            next: cursor.next(&calendar),
        })
    }
}

/// ## Summary
/// The seven Gregorian dates of the Sunday-started week containing `date`.
///
/// ## Errors
/// Returns `CalendarError::OutOfRange` at the very ends of the supported
/// date range.
pub fn week_of(date: NaiveDate) -> CalendarResult<Vec<NaiveDate>> {
    let days_since_sunday = i64::from(date.weekday().num_days_from_sunday());
    let sunday = JulianDay::from_date(date).offset(-days_since_sunday);
    (0..7).map(|offset| sunday.offset(offset).to_date()).collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct WeekDay {
    pub gregorian: NaiveDate,
    pub date: CalendarDate,
    pub weekday_name: &'static str,
    pub month_name: &'static str,
    pub is_today: bool,
    pub events: Vec<CalendarEvent>,
}

/// A week strip shown in one calendar system.
#[derive(Debug, Clone, Serialize)]
pub struct WeekView {
    pub system: CalendarSystem,
    pub days: Vec<WeekDay>,
}

impl WeekView {
    /// ## Summary
    /// Builds the week containing `date`, with each day converted to `system`.
    ///
    /// ## Errors
    /// Returns `CalendarError::OutOfRange` at the very ends of the supported
    /// date range.
    pub fn build(
        system: CalendarSystem,
        date: NaiveDate,
        today: NaiveDate,
        events: &[CalendarEvent],
    ) -> CalendarResult<Self> {
        let calendar = calendar_for(system);
        let weekday_names = calendar.weekday_names();
        let dated = DatedEvents::new(events);

        let days = week_of(date)?
            .into_iter()
            .zip(weekday_names)
            .map(|(gregorian, weekday_name)| {
                let converted = calendar.convert_from_gregorian(gregorian);
                WeekDay {
                    gregorian,
                    date: converted,
                    weekday_name,
                    month_name: calendar.month_name(converted.month),
                    is_today: gregorian == today,
                    events: dated.on(gregorian).into_iter().cloned().collect(),
                }
            })
            .collect();

        Ok(Self { system, days })
    }
}

/// Events for a single selected day.
#[derive(Debug, Clone, Serialize)]
pub struct DayView {
    pub gregorian: NaiveDate,
    pub heading: String,
    pub events: Vec<CalendarEvent>,
}

impl DayView {
    /// The heading follows the first event: annual events drop the year.
    #[must_use]
    pub fn build(date: NaiveDate, events: &[CalendarEvent]) -> Self {
        let events: Vec<CalendarEvent> = DatedEvents::new(events)
            .on(date)
            .into_iter()
            .cloned()
            .collect();

        let heading = events.first().map_or_else(
            || date.format("%B %-d, %Y").to_string(),
            |event| event.heading_for(date),
        );

        Self {
            gregorian: date,
            heading,
            events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{EgyptianAdapter, GregorianAdapter, IslamicAdapter};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_cursor_walks_thirteen_egyptian_months() {
        let mut cursor = MonthCursor::new(2772, 1);
        for _ in 0..13 {
            cursor = cursor.next(&EgyptianAdapter);
        }
        assert_eq!(cursor, MonthCursor::new(2773, 1));

        assert_eq!(
            MonthCursor::new(2772, 12).next(&EgyptianAdapter),
            MonthCursor::new(2772, 13)
        );
        assert_eq!(
            MonthCursor::new(2773, 1).prev(&EgyptianAdapter),
            MonthCursor::new(2772, 13)
        );
    }

    #[test]
    fn test_cursor_walks_twelve_months() {
        let mut cursor = MonthCursor::new(1445, 1);
        for _ in 0..12 {
            cursor = cursor.next(&IslamicAdapter);
        }
        assert_eq!(cursor, MonthCursor::new(1446, 1));
        assert_eq!(
            MonthCursor::new(2024, 1).prev(&GregorianAdapter),
            MonthCursor::new(2023, 12)
        );
    }

    #[test]
    fn test_cursor_containing() {
        assert_eq!(
            MonthCursor::containing(&IslamicAdapter, date(2024, 1, 1)),
            MonthCursor::new(1445, 6)
        );
        assert_eq!(
            MonthCursor::containing(&EgyptianAdapter, date(2024, 4, 16)),
            MonthCursor::new(2772, 13)
        );
    }

    #[test]
    fn test_validate_rejects_missing_months() {
        assert!(MonthCursor::new(2024, 0).validate(&GregorianAdapter).is_err());
        assert!(MonthCursor::new(2024, 13).validate(&GregorianAdapter).is_err());
        assert!(MonthCursor::new(2772, 13).validate(&EgyptianAdapter).is_ok());
    }

    #[test_log::test]
    fn test_gregorian_month_grid() {
        let events = vec![
            CalendarEvent::new("Leap day", date(2024, 2, 29)),
            CalendarEvent::new("Valentine", date(1990, 2, 14)).annual_in(CalendarSystem::Gregorian),
        ];
        let grid = MonthGrid::build(
            CalendarSystem::Gregorian,
            MonthCursor::new(2024, 2),
            date(2024, 2, 10),
            &events,
        )
        .unwrap();

        assert_eq!(grid.title, "February 2024");
        // 2024-02-01 was a Thursday.
        assert_eq!(grid.leading_blanks, 4);
        assert_eq!(grid.days.len(), 29);
        assert!(grid.days[9].is_today);
        assert_eq!(grid.days.iter().filter(|d| d.is_today).count(), 1);
        assert_eq!(grid.days[13].events[0].holiday_name, "Valentine");
        assert_eq!(grid.days[28].events[0].holiday_name, "Leap day");
        assert_eq!(grid.days.iter().map(|d| d.events.len()).sum::<usize>(), 2);
        assert_eq!(grid.prev, MonthCursor::new(2024, 1));
        assert_eq!(grid.next, MonthCursor::new(2024, 3));
    }

    #[test]
    fn test_islamic_month_grid() {
        let grid = MonthGrid::build(
            CalendarSystem::Islamic,
            MonthCursor::new(1445, 9),
            date(2024, 3, 11),
            &[],
        )
        .unwrap();

        assert_eq!(grid.month_name, "Ramadan");
        assert_eq!(grid.days.len(), 30);
        assert_eq!(grid.leading_blanks, 1);
        assert_eq!(grid.days[0].gregorian, date(2024, 3, 11));
        assert!(grid.days[0].is_today);
        assert_eq!(grid.days[29].gregorian, date(2024, 4, 9));
    }

    #[test]
    fn test_epagomenal_month_grid() {
        let grid = MonthGrid::build(
            CalendarSystem::Egyptian,
            MonthCursor::new(2772, 13),
            date(2024, 1, 1),
            &[],
        )
        .unwrap();

        assert_eq!(grid.month_name, "Epagomenal");
        assert_eq!(grid.days.len(), 5);
        assert!(grid.days.iter().all(|d| d.date.is_intercalary));
        assert_eq!(grid.days[4].gregorian, date(2024, 4, 16));
        assert_eq!(grid.next, MonthCursor::new(2773, 1));
    }

    #[test]
    fn test_grid_rejects_unknown_month() {
        let result = MonthGrid::build(
            CalendarSystem::Islamic,
            MonthCursor::new(1445, 13),
            date(2024, 1, 1),
            &[],
        );
        assert!(matches!(result, Err(CalendarError::InvalidDate(_))));
    }

    #[test]
    fn test_week_of_starts_on_sunday() {
        // Wednesday
        let week = week_of(date(2024, 1, 3)).unwrap();
        assert_eq!(week.len(), 7);
        assert_eq!(week[0], date(2023, 12, 31));
        assert_eq!(week[6], date(2024, 1, 6));

        let sunday = week_of(date(2023, 12, 31)).unwrap();
        assert_eq!(sunday, week);
    }

    #[test]
    fn test_week_view_in_islamic() {
        let view = WeekView::build(
            CalendarSystem::Islamic,
            date(2024, 3, 13),
            date(2024, 3, 11),
            &[CalendarEvent::new("Start", date(2024, 3, 11))],
        )
        .unwrap();

        assert_eq!(view.days[0].weekday_name, "Sun");
        assert_eq!(view.days[1].gregorian, date(2024, 3, 11));
        assert_eq!(view.days[1].date, CalendarDate::new(1445, 9, 1));
        assert_eq!(view.days[1].month_name, "Ramadan");
        assert!(view.days[1].is_today);
        assert_eq!(view.days[1].events.len(), 1);
        assert_eq!(view.days[0].month_name, "Sha\u{2018}ban");
    }

    #[test]
    fn test_day_view_heading() {
        let day = date(2024, 1, 2);
        let empty = DayView::build(day, &[]);
        assert_eq!(empty.heading, "January 2, 2024");
        assert!(empty.events.is_empty());

        let annual = [CalendarEvent::new("Anniversary", date(2000, 1, 2))
            .annual_in(CalendarSystem::Gregorian)];
        let view = DayView::build(day, &annual);
        assert_eq!(view.heading, "January 2");
        assert_eq!(view.events.len(), 1);
    }
}
