//! Day, month and year structures shared by the Julian and Gregorian calendars.
//!
//! Both calendars use the same twelve months. The only difference inside a
//! year is February, which has 29 days in a leap year.

use crate::error::Result;
use crate::hierarchy::{Hierarchy, HierarchyBuilder};
use crate::locale::LocalizedName;
use crate::period_type::PeriodTypeId;
use crate::structure::StructureId;

use super::names;

const MONTHS: [(LocalizedName, i64); 12] = [
    (LocalizedName::new("January", "Януари"), 31),
    (LocalizedName::new("February", "Февруари"), 28),
    (LocalizedName::new("March", "Март"), 31),
    (LocalizedName::new("April", "Април"), 30),
    (LocalizedName::new("May", "Май"), 31),
    (LocalizedName::new("June", "Юни"), 30),
    (LocalizedName::new("July", "Юли"), 31),
    (LocalizedName::new("August", "Август"), 31),
    (LocalizedName::new("September", "Септември"), 30),
    (LocalizedName::new("October", "Октомври"), 31),
    (LocalizedName::new("November", "Ноември"), 30),
    (LocalizedName::new("December", "Декември"), 31),
];

const FEBRUARY: usize = 1;

#[derive(Debug, Clone, Copy)]
pub(crate) struct WesternTypes {
    pub day: PeriodTypeId,
    pub month: PeriodTypeId,
    pub year: PeriodTypeId,
    pub four_years: PeriodTypeId,
}

impl WesternTypes {
    pub fn register(builder: &mut HierarchyBuilder) -> Self {
        Self {
            day: builder.add_period_type(names::DAY),
            month: builder.add_period_type(names::MONTH),
            year: builder.add_period_type(names::YEAR),
            four_years: builder.add_period_type(names::FOUR_YEARS),
        }
    }
}

/// The structures below the four-year level.
#[derive(Debug, Clone)]
pub(crate) struct WesternYears {
    pub day: StructureId,
    /// January..December of a common year.
    pub months: Vec<(StructureId, i64)>,
    pub february_leap: StructureId,
    pub common: StructureId,
    pub leap: StructureId,
    /// Four years whose last year is a leap year (1461 days).
    pub four_years: StructureId,
}

pub(crate) fn add_years(builder: &mut HierarchyBuilder, types: WesternTypes) -> Result<WesternYears> {
    let day = builder.atomic(types.day, names::DAY)?;

    let mut months = Vec::with_capacity(MONTHS.len());
    for (name, length) in MONTHS {
        let month = builder.composite(types.month, name, length, &vec![day; length as usize])?;
        months.push((month, length));
    }
    let february_leap = builder.composite(
        types.month,
        MONTHS[FEBRUARY].0,
        29,
        &vec![day; 29],
    )?;

    let common_months: Vec<StructureId> = months.iter().map(|&(id, _)| id).collect();
    let mut leap_months = common_months.clone();
    leap_months[FEBRUARY] = february_leap;

    let common = builder.composite(types.year, names::YEAR_COMMON, 365, &common_months)?;
    let leap = builder.composite(types.year, names::YEAR_LEAP, 366, &leap_months)?;
    let four_years = builder.composite(
        types.four_years,
        names::FOUR_YEARS,
        1461,
        &[common, common, common, leap],
    )?;

    Ok(WesternYears {
        day,
        months,
        february_leap,
        common,
        leap,
        four_years,
    })
}

pub(crate) fn install_lengths(
    hierarchy: &Hierarchy,
    types: WesternTypes,
    years: &WesternYears,
) -> Result<()> {
    hierarchy.install_lengths(years.day, &[(types.day, 1)])?;
    for &(month, length) in &years.months {
        hierarchy.install_lengths(month, &[(types.day, length), (types.month, 1)])?;
    }
    hierarchy.install_lengths(years.february_leap, &[(types.day, 29), (types.month, 1)])?;
    hierarchy.install_lengths(
        years.common,
        &[(types.day, 365), (types.month, 12), (types.year, 1)],
    )?;
    hierarchy.install_lengths(
        years.leap,
        &[(types.day, 366), (types.month, 12), (types.year, 1)],
    )?;
    hierarchy.install_lengths(
        years.four_years,
        &[
            (types.day, 1461),
            (types.month, 48),
            (types.year, 4),
            (types.four_years, 1),
        ],
    )
}
