//! The Julian calendar: every fourth year is a leap year.
//!
//! The root tiling structure is a 1461-day block of three common years
//! followed by one leap year. Day zero is 1 January of year 1, which falls two
//! days before 1 January of year 1 in the proleptic Gregorian calendar.

use crate::calendar::Calendar;
use crate::error::Result;
use crate::hierarchy::HierarchyBuilder;

use super::names;
use super::western::{self, WesternTypes};

/// Days from 1 January 1 (Julian) to 1970-01-01.
pub const EPOCH_OFFSET_DAYS: i64 = 719_164;

pub fn build() -> Result<Calendar> {
    let mut builder = HierarchyBuilder::new();
    let types = WesternTypes::register(&mut builder);
    let years = western::add_years(&mut builder, types)?;

    let hierarchy = builder.build();
    western::install_lengths(&hierarchy, types, &years)?;

    Calendar::new(
        names::JULIAN,
        EPOCH_OFFSET_DAYS,
        hierarchy,
        vec![types.day, types.month, types.year, types.four_years],
        years.four_years,
    )
}
