//! Calendars: a hierarchy anchored to an epoch, plus the periods it yields.

use chrono::{Datelike, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::checker;
use crate::decomposer;
use crate::error::{LetoError, Result};
use crate::hierarchy::Hierarchy;
use crate::locale::{Locale, LocalizedName};
use crate::period_type::{PeriodType, PeriodTypeId};
use crate::structure::{PeriodStructure, StructureId};

/// `NaiveDate::num_days_from_ce` of 1970-01-01, the shared reference epoch.
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// One hierarchy level instantiated for a specific day offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    period_type: PeriodTypeId,
    number: i64,
    absolute_number: i64,
    starts_at_days_after_epoch: i64,
    structure: StructureId,
}

impl Period {
    pub(crate) fn new(
        period_type: PeriodTypeId,
        number: i64,
        absolute_number: i64,
        starts_at_days_after_epoch: i64,
        structure: StructureId,
    ) -> Self {
        Self {
            period_type,
            number,
            absolute_number,
            starts_at_days_after_epoch,
            structure,
        }
    }

    pub fn period_type(&self) -> PeriodTypeId {
        self.period_type
    }

    /// 0-based ordinal within the immediate parent period.
    pub fn number(&self) -> i64 {
        self.number
    }

    /// 0-based ordinal since the calendar epoch.
    pub fn absolute_number(&self) -> i64 {
        self.absolute_number
    }

    pub fn starts_at_days_after_epoch(&self) -> i64 {
        self.starts_at_days_after_epoch
    }

    pub fn structure(&self) -> StructureId {
        self.structure
    }
}

/// A day/month/year triple, all components 0-based; `year` is absolute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i64,
    pub month: i64,
    pub day: i64,
}

impl CalendarDate {
    pub fn new(year: i64, month: i64, day: i64) -> Self {
        Self { year, month, day }
    }
}

/// A period hierarchy anchored to an epoch.
///
/// Built once, immutable afterwards, and safe to share between threads.
#[derive(Debug)]
pub struct Calendar {
    name: LocalizedName,
    epoch_offset_days: i64,
    hierarchy: Hierarchy,
    period_types: Vec<PeriodTypeId>,
    levels_by_type: Vec<Option<usize>>,
    root: StructureId,
}

impl Calendar {
    /// Assemble and validate a calendar.
    ///
    /// `period_types` lists the levels finest first and must name every type
    /// of the hierarchy exactly once. `root` is the structure that tiles the
    /// whole time line and must belong to the coarsest level. Every composite
    /// structure may only contain structures of the next finer level.
    ///
    /// # Errors
    /// Returns `LetoError::Configuration` for a broken level layout and the
    /// correctness checker's error if any length table is missing or wrong.
    pub fn new(
        name: LocalizedName,
        epoch_offset_days: i64,
        hierarchy: Hierarchy,
        period_types: Vec<PeriodTypeId>,
        root: StructureId,
    ) -> Result<Self> {
        if period_types.is_empty() {
            return Err(LetoError::Configuration(format!(
                "calendar '{}' does not define any period types",
                name
            )));
        }

        let mut levels_by_type = vec![None; hierarchy.period_types().len()];
        for (level, id) in period_types.iter().enumerate() {
            let slot = levels_by_type.get_mut(id.index()).ok_or_else(|| {
                LetoError::Configuration(format!(
                    "period type #{} does not belong to calendar '{}'",
                    id.index(),
                    name
                ))
            })?;
            if slot.is_some() {
                return Err(LetoError::Configuration(format!(
                    "period type #{} is listed twice in calendar '{}'",
                    id.index(),
                    name
                )));
            }
            *slot = Some(level);
        }
        if let Some(missing) = levels_by_type.iter().position(Option::is_none) {
            return Err(LetoError::Configuration(format!(
                "period type '{}' has no level in calendar '{}'",
                hierarchy.period_types()[missing].name(Locale::En),
                name
            )));
        }

        let root_structure = hierarchy.get_structure(root).ok_or_else(|| {
            LetoError::Configuration(format!("unknown root structure #{}", root.index()))
        })?;
        if levels_by_type[root_structure.period_type().index()] != Some(period_types.len() - 1) {
            return Err(LetoError::Configuration(format!(
                "root structure '{}' is not of the coarsest period type",
                root_structure.name(Locale::En)
            )));
        }

        for structure in hierarchy.structures() {
            let level = levels_by_type[structure.period_type().index()].unwrap_or_default();
            if structure.is_atomic() && level != 0 {
                return Err(LetoError::Configuration(format!(
                    "atomic structure '{}' is not on the finest level",
                    structure.name(Locale::En)
                )));
            }
            for &child in structure.children() {
                let child = hierarchy.structure(child);
                let child_level = levels_by_type[child.period_type().index()].unwrap_or_default();
                if child_level + 1 != level {
                    return Err(LetoError::Configuration(format!(
                        "structure '{}' contains '{}' which is not on the next finer level",
                        structure.name(Locale::En),
                        child.name(Locale::En)
                    )));
                }
            }
        }

        checker::check_hierarchy(&hierarchy)?;
        debug!(
            calendar = name.en,
            levels = period_types.len(),
            structures = hierarchy.structures().len(),
            "calendar built"
        );

        Ok(Self {
            name,
            epoch_offset_days,
            hierarchy,
            period_types,
            levels_by_type,
            root,
        })
    }

    pub fn name(&self, locale: Locale) -> &'static str {
        self.name.get(locale)
    }

    /// Days between this calendar's day zero and the shared reference epoch
    /// (1970-01-01). A calendar day offset is this value plus the number of
    /// days since the reference epoch.
    pub fn epoch_offset_days(&self) -> i64 {
        self.epoch_offset_days
    }

    /// Period types, finest first.
    pub fn period_types_by_granularity(&self) -> &[PeriodTypeId] {
        &self.period_types
    }

    pub fn hierarchy(&self) -> &Hierarchy {
        &self.hierarchy
    }

    /// The structure that repeats to cover every day offset.
    pub fn root(&self) -> StructureId {
        self.root
    }

    pub fn structure(&self, id: StructureId) -> &PeriodStructure {
        self.hierarchy.structure(id)
    }

    pub fn period_type(&self, id: PeriodTypeId) -> &PeriodType {
        self.hierarchy.period_type(id)
    }

    /// Position of `period_type` in [`period_types_by_granularity`](Self::period_types_by_granularity).
    pub fn level_of(&self, period_type: PeriodTypeId) -> Result<usize> {
        self.levels_by_type
            .get(period_type.index())
            .copied()
            .flatten()
            .ok_or_else(|| {
                LetoError::Configuration(format!(
                    "period type #{} does not belong to calendar '{}'",
                    period_type.index(),
                    self.name
                ))
            })
    }

    /// Decompose a day offset into one [`Period`] per level, finest first.
    ///
    /// # Errors
    /// Returns `LetoError::OutOfRange` for negative offsets.
    pub fn calculate_calendar_periods(&self, day_offset: i64) -> Result<Vec<Period>> {
        decomposer::decompose(self, day_offset)
    }

    /// Reconstruct the day offset a period list was decomposed from.
    pub fn calculate_days_from_periods(&self, periods: &[Period]) -> Result<i64> {
        decomposer::compose(self, periods)
    }

    /// Day offset at which the `absolute_number`-th period of `period_type` starts.
    pub fn start_of(&self, period_type: PeriodTypeId, absolute_number: i64) -> Result<i64> {
        decomposer::start_of(self, period_type, absolute_number)
    }

    /// Read the day/month/year triple out of a decomposition.
    pub fn date_of(&self, periods: &[Period]) -> Result<CalendarDate> {
        self.require_date_levels()?;
        if periods.len() != self.period_types.len() {
            return Err(LetoError::InconsistentPeriods(format!(
                "expected {} periods, got {}",
                self.period_types.len(),
                periods.len()
            )));
        }
        Ok(CalendarDate {
            year: periods[2].absolute_number(),
            month: periods[1].number(),
            day: periods[0].number(),
        })
    }

    /// Day offset of a day/month/year triple.
    ///
    /// # Errors
    /// Returns `LetoError::InvalidDate` if the year is negative or the month
    /// or day does not exist in that year.
    pub fn day_offset_of(&self, date: CalendarDate) -> Result<i64> {
        self.require_date_levels()?;
        if date.year < 0 {
            return Err(LetoError::InvalidDate(format!(
                "year {} is before the calendar epoch",
                date.year
            )));
        }
        let (day_type, month_type, year_type) =
            (self.period_types[0], self.period_types[1], self.period_types[2]);

        let year_start = self.start_of(year_type, date.year)?;
        let year = self.calculate_calendar_periods(year_start)?[2].structure();

        let (month, month_offset) =
            decomposer::nth_child_of_type(&self.hierarchy, year, month_type, date.month)
                .ok_or_else(|| {
                    LetoError::InvalidDate(format!(
                        "month {} does not exist in year {}",
                        date.month, date.year
                    ))
                })?;
        let (_, day_offset) =
            decomposer::nth_child_of_type(&self.hierarchy, month, day_type, date.day).ok_or_else(
                || {
                    LetoError::InvalidDate(format!(
                        "day {} does not exist in month {} of year {}",
                        date.day, date.month, date.year
                    ))
                },
            )?;

        year_start
            .checked_add(month_offset + day_offset)
            .ok_or_else(|| {
                LetoError::InvalidDate(format!("year {} is too far from the calendar epoch", date.year))
            })
    }

    /// Translate a day offset of this calendar into the same physical day in
    /// `target`. Pure integer arithmetic on the two epoch offsets.
    ///
    /// # Errors
    /// Returns `LetoError::OutOfRange` if the translated offset does not fit
    /// in an `i64`.
    pub fn convert_day_offset(&self, day_offset: i64, target: &Calendar) -> Result<i64> {
        day_offset
            .checked_sub(self.epoch_offset_days)
            .and_then(|days| days.checked_add(target.epoch_offset_days))
            .ok_or(LetoError::OutOfRange { day_offset })
    }

    /// Day offset of a proleptic Gregorian civil date.
    pub fn day_offset_for_date(&self, date: NaiveDate) -> i64 {
        i64::from(date.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE + self.epoch_offset_days
    }

    /// Proleptic Gregorian civil date of a day offset.
    pub fn civil_date_of(&self, day_offset: i64) -> Result<NaiveDate> {
        day_offset
            .checked_sub(self.epoch_offset_days)
            .and_then(|days| days.checked_add(UNIX_EPOCH_DAYS_FROM_CE))
            .and_then(|days| i32::try_from(days).ok())
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .ok_or(LetoError::OutOfRange { day_offset })
    }

    pub fn periods_for_date(&self, date: NaiveDate) -> Result<Vec<Period>> {
        self.calculate_calendar_periods(self.day_offset_for_date(date))
    }

    /// Periods of the current day as seen from a fixed UTC offset.
    pub fn today(&self, offset: FixedOffset) -> Result<Vec<Period>> {
        let local = Utc::now().with_timezone(&offset);
        self.periods_for_date(local.date_naive())
    }

    fn require_date_levels(&self) -> Result<()> {
        if self.period_types.len() < 3 {
            return Err(LetoError::Configuration(format!(
                "calendar '{}' has no day, month and year levels",
                self.name
            )));
        }
        Ok(())
    }
}
