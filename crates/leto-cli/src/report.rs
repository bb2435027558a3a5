//! JSON shapes printed by the `leto` commands.

use chrono::NaiveDate;
use leto_core::error::Result;
use leto_core::{Calendar, CalendarKind, Locale, PeriodView};
use serde::Serialize;

/// A day in one calendar, with its decomposition.
#[derive(Debug, Serialize)]
pub struct CalendarReport {
    pub calendar: CalendarKind,
    pub name: &'static str,
    pub day_offset: i64,
    pub date: DisplayDate,
    /// The same day in the proleptic Gregorian calendar.
    pub civil_date: Option<NaiveDate>,
    pub periods: Vec<PeriodView>,
}

/// Day, month and year counted from 1, as people write them.
#[derive(Debug, Serialize)]
pub struct DisplayDate {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub month_name: &'static str,
}

impl CalendarReport {
    pub fn new(
        kind: CalendarKind,
        calendar: &Calendar,
        day_offset: i64,
        locale: Locale,
    ) -> Result<Self> {
        let periods = calendar.calculate_calendar_periods(day_offset)?;
        let date = calendar.date_of(&periods)?;
        let month_name = calendar.structure(periods[1].structure()).name(locale);

        Ok(Self {
            calendar: kind,
            name: calendar.name(locale),
            day_offset,
            date: DisplayDate {
                year: date.year + 1,
                month: date.month + 1,
                day: date.day + 1,
                month_name,
            },
            civil_date: calendar.civil_date_of(day_offset).ok(),
            periods: calendar.describe(&periods, locale)?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ConvertReport {
    pub from: CalendarReport,
    pub to: CalendarReport,
}

/// Outcome of verifying one calendar.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub calendar: CalendarKind,
    pub structures: usize,
    pub period_types: Vec<&'static str>,
    pub cycle_length_in_days: i64,
    pub consistent: bool,
}
