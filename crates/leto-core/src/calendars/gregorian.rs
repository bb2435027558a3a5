//! The Gregorian calendar, encoded as a 400-year tiling cycle.
//!
//! A year is a leap year when it is divisible by 4, except centuries, except
//! multiples of 400. Counting years from 1, the last year of every four-year
//! block is the candidate leap year, so:
//!
//! - a common century (years 1..=100, 101..=200, 201..=300) is 24 leap
//!   four-year blocks followed by one block without a leap year (36 524 days);
//! - the last century of the cycle (301..=400) keeps all 25 leap years
//!   (36 525 days);
//! - the cycle is three common centuries and one leap century (146 097 days).

use crate::calendar::Calendar;
use crate::error::Result;
use crate::hierarchy::HierarchyBuilder;

use super::names;
use super::western::{self, WesternTypes};

/// Days from 1 January 1 (proleptic Gregorian) to 1970-01-01.
pub const EPOCH_OFFSET_DAYS: i64 = 719_162;

pub fn build() -> Result<Calendar> {
    let mut builder = HierarchyBuilder::new();
    let types = WesternTypes::register(&mut builder);
    let century_type = builder.add_period_type(names::CENTURY);
    let four_centuries_type = builder.add_period_type(names::FOUR_CENTURIES);

    let years = western::add_years(&mut builder, types)?;
    let four_common_years = builder.composite(
        types.four_years,
        names::FOUR_YEARS_NO_LEAP,
        1460,
        &[years.common; 4],
    )?;

    let mut century_children = vec![years.four_years; 24];
    century_children.push(four_common_years);
    let century = builder.composite(century_type, names::CENTURY, 36_524, &century_children)?;
    let leap_century = builder.composite(
        century_type,
        names::CENTURY_LEAP,
        36_525,
        &[years.four_years; 25],
    )?;
    let four_centuries = builder.composite(
        four_centuries_type,
        names::FOUR_CENTURIES,
        146_097,
        &[century, century, century, leap_century],
    )?;

    let hierarchy = builder.build();
    western::install_lengths(&hierarchy, types, &years)?;
    hierarchy.install_lengths(
        four_common_years,
        &[
            (types.day, 1460),
            (types.month, 48),
            (types.year, 4),
            (types.four_years, 1),
        ],
    )?;
    hierarchy.install_lengths(
        century,
        &[
            (types.day, 36_524),
            (types.month, 1200),
            (types.year, 100),
            (types.four_years, 25),
            (century_type, 1),
        ],
    )?;
    hierarchy.install_lengths(
        leap_century,
        &[
            (types.day, 36_525),
            (types.month, 1200),
            (types.year, 100),
            (types.four_years, 25),
            (century_type, 1),
        ],
    )?;
    hierarchy.install_lengths(
        four_centuries,
        &[
            (types.day, 146_097),
            (types.month, 4800),
            (types.year, 400),
            (types.four_years, 100),
            (century_type, 4),
            (four_centuries_type, 1),
        ],
    )?;

    Calendar::new(
        names::GREGORIAN,
        EPOCH_OFFSET_DAYS,
        hierarchy,
        vec![
            types.day,
            types.month,
            types.year,
            types.four_years,
            century_type,
            four_centuries_type,
        ],
        four_centuries,
    )
}
