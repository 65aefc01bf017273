//! Calendar-system conversion engine.
//!
//! Converts civil Gregorian dates to and from the tabular Islamic (Hijri)
//! calendar and the ancient Egyptian civil calendar, using the Julian Day
//! Number as a common pivot, and lays out month grids, week strips and
//! event lists on top of those conversions.

pub mod calendar;
pub mod error;
