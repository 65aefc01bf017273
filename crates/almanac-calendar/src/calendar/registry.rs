use almanac_core::types::CalendarSystem;

use super::adapter::{CalendarAdapter, CalendarDate};
use super::egyptian::EgyptianAdapter;
use super::gregorian::GregorianAdapter;
use super::islamic::IslamicAdapter;
use super::jdn::JulianDay;

/// Any of the supported calendars, chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnyCalendar {
    Gregorian(GregorianAdapter),
    Egyptian(EgyptianAdapter),
    Islamic(IslamicAdapter),
}

impl AnyCalendar {
    #[must_use]
    pub const fn system(&self) -> CalendarSystem {
        match self {
            Self::Gregorian(_) => CalendarSystem::Gregorian,
            Self::Egyptian(_) => CalendarSystem::Egyptian,
            Self::Islamic(_) => CalendarSystem::Islamic,
        }
    }

    fn inner(&self) -> &dyn CalendarAdapter {
        match self {
            Self::Gregorian(c) => c,
            Self::Egyptian(c) => c,
            Self::Islamic(c) => c,
        }
    }
}

impl From<CalendarSystem> for AnyCalendar {
    fn from(system: CalendarSystem) -> Self {
        calendar_for(system)
    }
}

impl CalendarAdapter for AnyCalendar {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn month_name(&self, month: u32) -> &'static str {
        self.inner().month_name(month)
    }

    fn months_in_year(&self, year: i32) -> u32 {
        self.inner().months_in_year(year)
    }

    fn days_in_month(&self, year: i32, month: u32) -> u32 {
        self.inner().days_in_month(year, month)
    }

    fn from_julian_day(&self, day: JulianDay) -> CalendarDate {
        self.inner().from_julian_day(day)
    }

    fn to_julian_day(&self, date: CalendarDate) -> JulianDay {
        self.inner().to_julian_day(date)
    }

    fn convert_from_gregorian(&self, date: chrono::NaiveDate) -> CalendarDate {
        self.inner().convert_from_gregorian(date)
    }
}

/// The adapter for a calendar system.
#[must_use]
pub const fn calendar_for(system: CalendarSystem) -> AnyCalendar {
    match system {
        CalendarSystem::Gregorian => AnyCalendar::Gregorian(GregorianAdapter),
        CalendarSystem::Egyptian => AnyCalendar::Egyptian(EgyptianAdapter),
        CalendarSystem::Islamic => AnyCalendar::Islamic(IslamicAdapter),
    }
}

/// Every supported system with its adapter, in display order.
#[must_use]
pub fn calendar_systems() -> [(CalendarSystem, AnyCalendar); 3] {
    CalendarSystem::ALL.map(|system| (system, calendar_for(system)))
}
