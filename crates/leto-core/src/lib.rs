//! # leto-core
//!
//! Decomposes an absolute day count into the nested periods of a calendar:
//! day, month, year and the calendar's multi-year cycles.
//!
//! Each calendar is a hierarchy of immutable period structures. A structure
//! is a single day or an ordered sequence of shared child structures, and the
//! calendar's root structure repeats forever to cover every day offset.
//!
//! ## Quick start
//!
//! ```rust
//! use leto_core::{CalendarKind, Calendars};
//!
//! let calendars = Calendars::build().unwrap();
//! let julian = calendars.get(CalendarKind::Julian);
//!
//! // Day 1460 is the last day of the fourth (leap) year.
//! let periods = julian.calculate_calendar_periods(1460).unwrap();
//! assert_eq!(periods[2].number(), 3);
//! assert_eq!(periods[0].absolute_number(), 1460);
//! assert_eq!(julian.calculate_days_from_periods(&periods).unwrap(), 1460);
//! ```
//!
//! ## Modules
//!
//! - [`hierarchy`] -- arena of period types and structures, with a validating builder
//! - [`structure`] -- `PeriodStructure` templates and their length tables
//! - [`calendar`] -- `Calendar`, `Period` and date conversions
//! - [`decomposer`] -- day offset to period list and back
//! - [`checker`] -- recomputes and verifies length tables
//! - [`calendars`] -- Julian, Gregorian and Bulgarian definitions
//! - [`view`] -- name-resolved periods for front-ends
//! - [`error`] -- Error types

pub mod calendar;
pub mod calendars;
pub mod checker;
pub mod decomposer;
pub mod error;
pub mod hierarchy;
pub mod locale;
pub mod period_type;
pub mod structure;
pub mod view;

pub use calendar::{Calendar, CalendarDate, Period};
pub use calendars::{CalendarKind, Calendars};
pub use error::LetoError;
pub use hierarchy::{Hierarchy, HierarchyBuilder};
pub use locale::{Locale, LocalizedName};
pub use period_type::{PeriodType, PeriodTypeId};
pub use structure::{LengthTable, PeriodStructure, StructureId};
pub use view::PeriodView;
