use almanac_core::types::CalendarSystem;
use almanac_core::util::iso::parse_iso_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::adapter::CalendarAdapter;
use super::registry::calendar_for;
use crate::error::{CalendarError, CalendarResult};

/// A holiday or observance stored against a culture.
///
/// Only `calendar_date` (an ISO-8601 date) is authoritative. For annual
/// events the alternate-calendar month and day are recomputed from it
/// through `reference_system` whenever they are needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    #[serde(default)]
    pub id: Option<i64>,
    pub holiday_name: String,
    #[serde(default)]
    pub calendar_date: Option<String>,
    #[serde(default, alias = "isAnnual")]
    pub is_annual: bool,
    #[serde(default)]
    pub reference_system: CalendarSystem,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub date_text: Option<String>,
    #[serde(default)]
    pub meaning: Option<String>,
    #[serde(default)]
    pub traditions: Option<String>,
}

impl CalendarEvent {
    #[must_use]
    pub fn new(holiday_name: impl Into<String>, calendar_date: NaiveDate) -> Self {
        Self {
            id: None,
            holiday_name: holiday_name.into(),
            calendar_date: Some(calendar_date.to_string()),
            is_annual: false,
            reference_system: CalendarSystem::Gregorian,
            kind: None,
            date_text: None,
            meaning: None,
            traditions: None,
        }
    }

    /// Marks the event as recurring every year of `system`.
    #[must_use]
    pub fn annual_in(mut self, system: CalendarSystem) -> Self {
        self.is_annual = true;
        self.reference_system = system;
        self
    }

    /// ## Summary
    /// Parses the stored date.
    ///
    /// ## Errors
    /// Returns `CalendarError::InvalidDate` if `calendar_date` is present but
    /// is neither `YYYY-MM-DD` nor an RFC 3339 timestamp.
    pub fn gregorian_date(&self) -> CalendarResult<Option<NaiveDate>> {
        self.calendar_date
            .as_deref()
            .map(|value| {
                parse_iso_date(value).map_err(|e| {
                    CalendarError::InvalidDate(format!("{}: {e}", self.holiday_name))
                })
            })
            .transpose()
    }

    /// ## Summary
    /// Whether the event falls on `day`.
    ///
    /// One-off events match their exact date. Annual events match any day
    /// with the same month and day in the reference calendar.
    ///
    /// ## Errors
    /// Returns `CalendarError::InvalidDate` if the stored date is malformed.
    pub fn occurs_on(&self, day: NaiveDate) -> CalendarResult<bool> {
        Ok(self
            .gregorian_date()?
            .is_some_and(|stored| self.matches(stored, day)))
    }

    fn matches(&self, stored: NaiveDate, day: NaiveDate) -> bool {
        if !self.is_annual {
            return stored == day;
        }

        let calendar = calendar_for(self.reference_system);
        let anniversary = calendar.convert_from_gregorian(stored);
        let candidate = calendar.convert_from_gregorian(day);
        anniversary.month == candidate.month && anniversary.day == candidate.day
    }

    /// Heading for `day` in an event list: the year is left out for annual
    /// events.
    #[must_use]
    pub fn heading_for(&self, day: NaiveDate) -> String {
        if self.is_annual {
            day.format("%B %-d").to_string()
        } else {
            day.format("%B %-d, %Y").to_string()
        }
    }
}

/// Events with their stored dates parsed once, for repeated lookups.
#[derive(Debug, Clone, Default)]
pub struct DatedEvents<'a> {
    entries: Vec<(NaiveDate, &'a CalendarEvent)>,
}

impl<'a> DatedEvents<'a> {
    /// Parses every event's date; events without one, or with a malformed
    /// one, are skipped.
    #[must_use]
    pub fn new(events: &'a [CalendarEvent]) -> Self {
        let entries = events
            .iter()
            .filter_map(|event| match event.gregorian_date() {
                Ok(Some(date)) => Some((date, event)),
                Ok(None) => {
                    tracing::debug!(event = %event.holiday_name, "Event has no date, skipping");
                    None
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping event with malformed date");
                    None
                }
            })
            .collect();

        Self { entries }
    }

    /// Events falling on `day`, in their original order.
    #[must_use]
    pub fn on(&self, day: NaiveDate) -> Vec<&'a CalendarEvent> {
        self.entries
            .iter()
            .filter(|(stored, event)| event.matches(*stored, day))
            .map(|(_, event)| *event)
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Events from `events` that fall on `day`; undated and malformed events are
/// skipped.
#[must_use]
pub fn events_on(events: &[CalendarEvent], day: NaiveDate) -> Vec<&CalendarEvent> {
    DatedEvents::new(events).on(day)
}
