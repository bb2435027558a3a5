//! Mixed-radix decomposition of day offsets into calendar periods.
//!
//! The root structure of a calendar repeats forever. A day offset first selects
//! a repetition of the root (floor division by its length), then descends one
//! level at a time: the children of the current structure are skipped whole
//! until the remaining offset falls inside one of them. Every skipped child
//! bumps the ordinal of its own period type and adds its whole length table to
//! the absolute counters.

use crate::calendar::{Calendar, Period};
use crate::error::{LetoError, Result};
use crate::hierarchy::Hierarchy;
use crate::locale::Locale;
use crate::period_type::PeriodTypeId;
use crate::structure::{PeriodStructure, StructureId};

#[derive(Debug, Clone, Copy, Default)]
struct Level {
    number: i64,
    absolute_number: i64,
    starts_at: i64,
    structure: Option<StructureId>,
}

/// Decompose `day_offset` into one period per level of `calendar`, finest first.
///
/// # Errors
/// Returns `LetoError::OutOfRange` if `day_offset` is negative, and a
/// configuration error if the calendar's hierarchy is not fully initialised.
pub fn decompose(calendar: &Calendar, day_offset: i64) -> Result<Vec<Period>> {
    if day_offset < 0 {
        return Err(LetoError::OutOfRange { day_offset });
    }

    let hierarchy = calendar.hierarchy();
    let types = calendar.period_types_by_granularity();
    let mut levels = vec![Level::default(); types.len()];

    let root = hierarchy.structure(calendar.root());
    let root_length = root.total_length_in_days();
    let repetitions = day_offset.div_euclid(root_length);
    let mut remaining = day_offset.rem_euclid(root_length);
    let mut elapsed = repetitions * root_length;

    let root_level = &mut levels[calendar.level_of(root.period_type())?];
    root_level.number = repetitions;
    root_level.starts_at = elapsed;
    root_level.structure = Some(root.id());
    add_absolute_counts(&mut levels, types, root, repetitions)?;

    let mut current = root;
    while !current.is_atomic() {
        let mut selected = None;
        for &child_id in current.children() {
            let child = hierarchy.structure(child_id);
            let length = child.total_length_in_days();
            if remaining < length {
                selected = Some(child);
                break;
            }
            remaining -= length;
            elapsed += length;
            levels[calendar.level_of(child.period_type())?].number += 1;
            add_absolute_counts(&mut levels, types, child, 1)?;
        }

        let child = selected.ok_or_else(|| {
            LetoError::Configuration(format!(
                "offset {} runs past the end of structure '{}'",
                day_offset,
                current.name(Locale::En)
            ))
        })?;
        let level = &mut levels[calendar.level_of(child.period_type())?];
        level.starts_at = elapsed;
        level.structure = Some(child.id());
        current = child;
    }

    levels
        .into_iter()
        .zip(types)
        .map(|(level, &period_type)| {
            let structure = level.structure.ok_or_else(|| {
                LetoError::Configuration(format!(
                    "period type '{}' was not reached while decomposing offset {}",
                    calendar.period_type(period_type).name(Locale::En),
                    day_offset
                ))
            })?;
            Ok(Period::new(
                period_type,
                level.number,
                level.absolute_number,
                level.starts_at,
                structure,
            ))
        })
        .collect()
}

fn add_absolute_counts(
    levels: &mut [Level],
    types: &[PeriodTypeId],
    structure: &PeriodStructure,
    repetitions: i64,
) -> Result<()> {
    for (level, &period_type) in levels.iter_mut().zip(types) {
        level.absolute_number += structure.length_in_period_type(period_type)? * repetitions;
    }
    Ok(())
}

/// Inverse of [`decompose`]: the day offset a period list describes.
///
/// # Errors
/// Returns `LetoError::InconsistentPeriods` if the list does not describe a
/// path through the calendar's hierarchy.
pub fn compose(calendar: &Calendar, periods: &[Period]) -> Result<i64> {
    let hierarchy = calendar.hierarchy();
    let types = calendar.period_types_by_granularity();
    if periods.len() != types.len() {
        return Err(LetoError::InconsistentPeriods(format!(
            "expected {} periods, got {}",
            types.len(),
            periods.len()
        )));
    }
    if let Some((period, _)) = periods
        .iter()
        .zip(types)
        .find(|&(period, &period_type)| period.period_type() != period_type)
    {
        return Err(LetoError::InconsistentPeriods(format!(
            "period of type #{} is out of order",
            period.period_type().index()
        )));
    }

    let (coarsest, finer) = periods
        .split_last()
        .ok_or_else(|| LetoError::InconsistentPeriods("empty period list".to_string()))?;
    if coarsest.structure() != calendar.root() || coarsest.number() < 0 {
        return Err(LetoError::InconsistentPeriods(
            "coarsest period is not a repetition of the root structure".to_string(),
        ));
    }

    let overflow = || {
        LetoError::InconsistentPeriods(format!(
            "root repetition #{} is too far from the calendar epoch",
            coarsest.number()
        ))
    };
    let mut days = coarsest
        .number()
        .checked_mul(hierarchy.structure(calendar.root()).total_length_in_days())
        .ok_or_else(overflow)?;
    let mut parent = coarsest.structure();
    for period in finer.iter().rev() {
        let (child, offset) =
            nth_child_of_type(hierarchy, parent, period.period_type(), period.number())
                .ok_or_else(|| {
                    LetoError::InconsistentPeriods(format!(
                        "structure '{}' has no child #{} of the requested type",
                        hierarchy.structure(parent).name(Locale::En),
                        period.number()
                    ))
                })?;
        if child != period.structure() {
            return Err(LetoError::InconsistentPeriods(format!(
                "child #{} of '{}' is '{}', not the structure given",
                period.number(),
                hierarchy.structure(parent).name(Locale::En),
                hierarchy.structure(child).name(Locale::En)
            )));
        }
        days = days.checked_add(offset).ok_or_else(overflow)?;
        parent = child;
    }

    Ok(days)
}

/// Find the `n`-th child of `parent` whose period type is `period_type`, and
/// the number of days from the start of `parent` to the start of that child.
pub fn nth_child_of_type(
    hierarchy: &Hierarchy,
    parent: StructureId,
    period_type: PeriodTypeId,
    n: i64,
) -> Option<(StructureId, i64)> {
    if n < 0 {
        return None;
    }
    let mut seen = 0;
    let mut offset = 0;
    for &child_id in hierarchy.get_structure(parent)?.children() {
        let child = hierarchy.structure(child_id);
        if child.period_type() == period_type {
            if seen == n {
                return Some((child_id, offset));
            }
            seen += 1;
        }
        offset += child.total_length_in_days();
    }
    None
}

/// Day offset at which the `absolute_number`-th instance of `period_type`
/// starts, counting from the calendar epoch.
///
/// # Errors
/// Returns `LetoError::InvalidDate` for a negative `absolute_number` or one
/// whose start does not fit in an `i64`.
pub fn start_of(calendar: &Calendar, period_type: PeriodTypeId, absolute_number: i64) -> Result<i64> {
    if absolute_number < 0 {
        return Err(LetoError::InvalidDate(format!(
            "{} #{} is before the calendar epoch",
            calendar.period_type(period_type).name(Locale::En),
            absolute_number
        )));
    }
    calendar.level_of(period_type)?;

    let hierarchy = calendar.hierarchy();
    let root = hierarchy.structure(calendar.root());
    let per_root = root.length_in_period_type(period_type)?;
    let repetitions = absolute_number.div_euclid(per_root);
    let mut remaining = absolute_number.rem_euclid(per_root);
    let overflow = || {
        LetoError::InvalidDate(format!(
            "{} #{} is too far from the calendar epoch",
            calendar.period_type(period_type).name(Locale::En),
            absolute_number
        ))
    };
    let mut elapsed = repetitions
        .checked_mul(root.total_length_in_days())
        .ok_or_else(overflow)?;

    let mut current = root;
    while current.period_type() != period_type {
        let mut selected = None;
        for &child_id in current.children() {
            let child = hierarchy.structure(child_id);
            let count = child.length_in_period_type(period_type)?;
            if remaining < count {
                selected = Some(child);
                break;
            }
            remaining -= count;
            elapsed = elapsed
                .checked_add(child.total_length_in_days())
                .ok_or_else(overflow)?;
        }
        current = selected.ok_or_else(|| {
            LetoError::Configuration(format!(
                "structure '{}' does not contain enough '{}' periods",
                current.name(Locale::En),
                calendar.period_type(period_type).name(Locale::En)
            ))
        })?;
    }

    Ok(elapsed)
}
