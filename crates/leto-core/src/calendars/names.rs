//! Names shared across calendar definitions.

use crate::locale::LocalizedName;

pub const JULIAN: LocalizedName = LocalizedName::new("Julian calendar", "Юлиански календар");
pub const GREGORIAN: LocalizedName = LocalizedName::new("Gregorian calendar", "Григориански календар");
pub const BULGARIAN: LocalizedName = LocalizedName::new("Bulgarian calendar", "Български календар");

pub const DAY: LocalizedName = LocalizedName::new("Day", "Ден");
pub const MONTH: LocalizedName = LocalizedName::new("Month", "Месец");
pub const YEAR: LocalizedName = LocalizedName::new("Year", "Година");
pub const YEAR_COMMON: LocalizedName = LocalizedName::new("Common year", "Обикновена година");
pub const YEAR_LEAP: LocalizedName = LocalizedName::new("Leap year", "Високосна година");
pub const FOUR_YEARS: LocalizedName = LocalizedName::new("Four years", "Четиригодие");
pub const FOUR_YEARS_NO_LEAP: LocalizedName =
    LocalizedName::new("Four years (no leap year)", "Четиригодие без високосна година");
pub const CENTURY: LocalizedName = LocalizedName::new("Century", "Век");
pub const CENTURY_LEAP: LocalizedName =
    LocalizedName::new("Century (leap)", "Век с високосна година");
pub const FOUR_CENTURIES: LocalizedName = LocalizedName::new("Four centuries", "Четиривековие");
