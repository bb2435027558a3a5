//! Concrete calendar definitions.
//!
//! [`Calendars::build`] constructs every calendar once and returns an owned,
//! immutable value for callers to share by reference.

pub mod bulgarian;
pub mod gregorian;
pub mod julian;
mod names;
mod western;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::calendar::Calendar;
use crate::error::{LetoError, Result};

/// The calendars this crate defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarKind {
    Julian,
    Gregorian,
    Bulgarian,
}

impl CalendarKind {
    pub const ALL: [CalendarKind; 3] = [
        CalendarKind::Julian,
        CalendarKind::Gregorian,
        CalendarKind::Bulgarian,
    ];

    /// Build a standalone instance of this calendar.
    pub fn build(self) -> Result<Calendar> {
        match self {
            CalendarKind::Julian => julian::build(),
            CalendarKind::Gregorian => gregorian::build(),
            CalendarKind::Bulgarian => bulgarian::build(),
        }
    }
}

impl fmt::Display for CalendarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarKind::Julian => f.write_str("julian"),
            CalendarKind::Gregorian => f.write_str("gregorian"),
            CalendarKind::Bulgarian => f.write_str("bulgarian"),
        }
    }
}

impl FromStr for CalendarKind {
    type Err = LetoError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "julian" => Ok(CalendarKind::Julian),
            "gregorian" => Ok(CalendarKind::Gregorian),
            "bulgarian" => Ok(CalendarKind::Bulgarian),
            other => Err(LetoError::Configuration(format!(
                "unknown calendar '{}', expected julian, gregorian or bulgarian",
                other
            ))),
        }
    }
}

/// Every calendar, built and verified.
#[derive(Debug)]
pub struct Calendars {
    julian: Calendar,
    gregorian: Calendar,
    bulgarian: Calendar,
}

impl Calendars {
    /// Build all calendars. Each call returns a fresh, equivalent value.
    ///
    /// # Errors
    /// Propagates the first construction or consistency error; a calendar
    /// that fails its checks is never returned.
    pub fn build() -> Result<Self> {
        let calendars = Self {
            julian: julian::build()?,
            gregorian: gregorian::build()?,
            bulgarian: bulgarian::build()?,
        };
        info!("calendars ready");
        Ok(calendars)
    }

    pub fn get(&self, kind: CalendarKind) -> &Calendar {
        match kind {
            CalendarKind::Julian => &self.julian,
            CalendarKind::Gregorian => &self.gregorian,
            CalendarKind::Bulgarian => &self.bulgarian,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (CalendarKind, &Calendar)> {
        CalendarKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }
}
