//! Calendar adapters and the views built on them.
//!
//! Every calendar converts through a [`JulianDay`], so adding a calendar
//! means one adapter rather than one conversion per pair of calendars:
//! - `jdn`: the Julian Day Number pivot and proleptic Gregorian arithmetic
//! - `adapter`: the [`CalendarAdapter`] contract and [`CalendarDate`]
//! - `gregorian`, `islamic`, `egyptian`: the three adapters
//! - `registry`: lookup from [`CalendarSystem`] to an adapter
//! - `grid`: month grids, month navigation and week strips
//! - `event`: stored events and which days they fall on

mod adapter;
mod egyptian;
mod event;
mod gregorian;
mod grid;
mod islamic;
mod jdn;
mod registry;


pub use adapter::{CalendarAdapter, CalendarDate, WEEKDAY_NAMES};
pub use almanac_core::types::CalendarSystem;
pub use egyptian::{EGYPTIAN_EPOCH, EgyptianAdapter};
pub use event::{CalendarEvent, DatedEvents, events_on};
pub use gregorian::GregorianAdapter;
pub use grid::{DayView, GridDay, MonthCursor, MonthGrid, WeekDay, WeekView, week_of};
pub use islamic::{ISLAMIC_EPOCH, IslamicAdapter, is_islamic_leap_year};
pub use jdn::JulianDay;
pub use registry::{AnyCalendar, calendar_for, calendar_systems};
