//! The historical Bulgarian calendar.
//!
//! A year is four quarters of 91 days. Each quarter is one 31-day month
//! followed by two 30-day months. Two intercalary days sit outside the week
//! cycle and are appended to a month as its 31st day:
//!
//! - **Eni**, the last day of every year, closes the 12th month;
//! - **Behti**, present in leap years only, closes the 6th month.
//!
//! Folk tradition also knows Eni as Ednazhden or Ignazhden ("Ani-Alem") and
//! Behti as "Eni-Dzhitem"; the structures carry only the day names.
//!
//! Leap years follow a layered cycle:
//!
//! | Level     | Made of                                                  | Days          |
//! |-----------|----------------------------------------------------------|---------------|
//! | FourYears | 3 common years + 1 leap year                             | 1 461         |
//! | StarDay   | 14 FourYears + 1 FourYears without a leap year (60 yrs)  | 21 914        |
//! | StarWeek  | 6 StarDays + 1 StarDay keeping all its leap years        | 153 399       |
//! | StarMonth | 4 StarWeeks (1 680 yrs)                                  | 613 596       |
//! | StarYear  | 12 StarMonths (20 160 yrs)                               | 7 363 152     |
//! | StarEpoch | 500 StarYears (10 080 000 yrs)                           | 3 681 576 000 |
//!
//! Day zero is the winter solstice of 5505 BC (22 December, proleptic
//! Gregorian).

use crate::calendar::Calendar;
use crate::error::Result;
use crate::hierarchy::HierarchyBuilder;
use crate::locale::LocalizedName;
use crate::structure::StructureId;

use super::names;

/// Days from the Bulgarian day zero to 1970-01-01.
pub const EPOCH_OFFSET_DAYS: i64 = 2_729_466;

const MONTHS: [LocalizedName; 12] = [
    LocalizedName::new("First month", "Първи месец"),
    LocalizedName::new("Second month", "Втори месец"),
    LocalizedName::new("Third month", "Трети месец"),
    LocalizedName::new("Fourth month", "Четвърти месец"),
    LocalizedName::new("Fifth month", "Пети месец"),
    LocalizedName::new("Sixth month", "Шести месец"),
    LocalizedName::new("Seventh month", "Седми месец"),
    LocalizedName::new("Eighth month", "Осми месец"),
    LocalizedName::new("Ninth month", "Девети месец"),
    LocalizedName::new("Tenth month", "Десети месец"),
    LocalizedName::new("Eleventh month", "Единадесети месец"),
    LocalizedName::new("Twelfth month", "Дванадесети месец"),
];

const SIXTH: usize = 5;
const TWELFTH: usize = 11;

const ENI: LocalizedName = LocalizedName::new("Eni", "Ени");
const BEHTI: LocalizedName = LocalizedName::new("Behti", "Бехти");
const STAR_DAY: LocalizedName = LocalizedName::new("Star day", "Звезден ден");
const STAR_DAY_LONG: LocalizedName =
    LocalizedName::new("Star day (all leap years)", "Звезден ден с всички високосни години");
const STAR_WEEK: LocalizedName = LocalizedName::new("Star week", "Звездна седмица");
const STAR_MONTH: LocalizedName = LocalizedName::new("Star month", "Звезден месец");
const STAR_YEAR: LocalizedName = LocalizedName::new("Star year", "Звездна година");
const STAR_EPOCH: LocalizedName = LocalizedName::new("Star epoch", "Звездна епоха");

const STAR_WEEK_DAYS: i64 = 153_399;
const STAR_MONTH_DAYS: i64 = 4 * STAR_WEEK_DAYS;
const STAR_YEAR_DAYS: i64 = 12 * STAR_MONTH_DAYS;
const STAR_EPOCH_DAYS: i64 = 500 * STAR_YEAR_DAYS;

/// Day count of the `index`-th month before any intercalary day.
fn month_length(index: usize) -> i64 {
    if index % 3 == 0 {
        31
    } else {
        30
    }
}

/// Month with an intercalary day appended as its last day.
fn month_with(day: StructureId, extra: StructureId, length: i64) -> Vec<StructureId> {
    let mut children = vec![day; length as usize];
    children.push(extra);
    children
}

pub fn build() -> Result<Calendar> {
    let mut builder = HierarchyBuilder::new();
    let day_type = builder.add_period_type(names::DAY);
    let month_type = builder.add_period_type(names::MONTH);
    let year_type = builder.add_period_type(names::YEAR);
    let four_years_type = builder.add_period_type(names::FOUR_YEARS);
    let star_day_type = builder.add_period_type(STAR_DAY);
    let star_week_type = builder.add_period_type(STAR_WEEK);
    let star_month_type = builder.add_period_type(STAR_MONTH);
    let star_year_type = builder.add_period_type(STAR_YEAR);
    let star_epoch_type = builder.add_period_type(STAR_EPOCH);

    let day = builder.atomic(day_type, names::DAY)?;
    let eni = builder.atomic(day_type, ENI)?;
    let behti = builder.atomic(day_type, BEHTI)?;

    let mut months = Vec::with_capacity(MONTHS.len());
    for (index, name) in MONTHS.into_iter().enumerate() {
        let length = month_length(index);
        let children = if index == TWELFTH {
            month_with(day, eni, length)
        } else {
            vec![day; length as usize]
        };
        let month = builder.composite(month_type, name, children.len() as i64, &children)?;
        months.push(month);
    }
    let sixth_with_behti = builder.composite(
        month_type,
        MONTHS[SIXTH],
        31,
        &month_with(day, behti, month_length(SIXTH)),
    )?;

    let mut leap_months = months.clone();
    leap_months[SIXTH] = sixth_with_behti;

    let common = builder.composite(year_type, names::YEAR_COMMON, 365, &months)?;
    let leap = builder.composite(year_type, names::YEAR_LEAP, 366, &leap_months)?;

    let four_years = builder.composite(
        four_years_type,
        names::FOUR_YEARS,
        1461,
        &[common, common, common, leap],
    )?;
    let four_common_years =
        builder.composite(four_years_type, names::FOUR_YEARS_NO_LEAP, 1460, &[common; 4])?;

    let mut star_day_children = vec![four_years; 14];
    star_day_children.push(four_common_years);
    let star_day = builder.composite(star_day_type, STAR_DAY, 21_914, &star_day_children)?;
    let star_day_long = builder.composite(star_day_type, STAR_DAY_LONG, 21_915, &[four_years; 15])?;

    let mut star_week_children = vec![star_day; 6];
    star_week_children.push(star_day_long);
    let star_week =
        builder.composite(star_week_type, STAR_WEEK, STAR_WEEK_DAYS, &star_week_children)?;
    let star_month =
        builder.composite(star_month_type, STAR_MONTH, STAR_MONTH_DAYS, &[star_week; 4])?;
    let star_year =
        builder.composite(star_year_type, STAR_YEAR, STAR_YEAR_DAYS, &[star_month; 12])?;
    let star_epoch =
        builder.composite(star_epoch_type, STAR_EPOCH, STAR_EPOCH_DAYS, &[star_year; 500])?;

    let hierarchy = builder.build();
    for atomic in [day, eni, behti] {
        hierarchy.install_lengths(atomic, &[(day_type, 1)])?;
    }
    for &month in months.iter().chain([&sixth_with_behti]) {
        let length = hierarchy.structure(month).total_length_in_days();
        hierarchy.install_lengths(month, &[(day_type, length), (month_type, 1)])?;
    }
    hierarchy.install_lengths(common, &[(day_type, 365), (month_type, 12), (year_type, 1)])?;
    hierarchy.install_lengths(leap, &[(day_type, 366), (month_type, 12), (year_type, 1)])?;
    hierarchy.install_lengths(
        four_years,
        &[
            (day_type, 1461),
            (month_type, 48),
            (year_type, 4),
            (four_years_type, 1),
        ],
    )?;
    hierarchy.install_lengths(
        four_common_years,
        &[
            (day_type, 1460),
            (month_type, 48),
            (year_type, 4),
            (four_years_type, 1),
        ],
    )?;
    hierarchy.install_lengths(
        star_day,
        &[
            (day_type, 21_914),
            (month_type, 720),
            (year_type, 60),
            (four_years_type, 15),
            (star_day_type, 1),
        ],
    )?;
    hierarchy.install_lengths(
        star_day_long,
        &[
            (day_type, 21_915),
            (month_type, 720),
            (year_type, 60),
            (four_years_type, 15),
            (star_day_type, 1),
        ],
    )?;
    hierarchy.install_lengths(
        star_week,
        &[
            (day_type, STAR_WEEK_DAYS),
            (month_type, 5040),
            (year_type, 420),
            (four_years_type, 105),
            (star_day_type, 7),
            (star_week_type, 1),
        ],
    )?;
    hierarchy.install_lengths(
        star_month,
        &[
            (day_type, STAR_MONTH_DAYS),
            (month_type, 20_160),
            (year_type, 1680),
            (four_years_type, 420),
            (star_day_type, 28),
            (star_week_type, 4),
            (star_month_type, 1),
        ],
    )?;
    hierarchy.install_lengths(
        star_year,
        &[
            (day_type, STAR_YEAR_DAYS),
            (month_type, 241_920),
            (year_type, 20_160),
            (four_years_type, 5040),
            (star_day_type, 336),
            (star_week_type, 48),
            (star_month_type, 12),
            (star_year_type, 1),
        ],
    )?;
    hierarchy.install_lengths(
        star_epoch,
        &[
            (day_type, STAR_EPOCH_DAYS),
            (month_type, 120_960_000),
            (year_type, 10_080_000),
            (four_years_type, 2_520_000),
            (star_day_type, 168_000),
            (star_week_type, 24_000),
            (star_month_type, 6000),
            (star_year_type, 500),
            (star_epoch_type, 1),
        ],
    )?;

    Calendar::new(
        names::BULGARIAN,
        EPOCH_OFFSET_DAYS,
        hierarchy,
        vec![
            day_type,
            month_type,
            year_type,
            four_years_type,
            star_day_type,
            star_week_type,
            star_month_type,
            star_year_type,
            star_epoch_type,
        ],
        star_epoch,
    )
}
