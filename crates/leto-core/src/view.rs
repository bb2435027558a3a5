//! Name-resolved, serializable rendering of decomposed periods.

use serde::{Deserialize, Serialize};

use crate::calendar::{Calendar, Period};
use crate::error::Result;
use crate::locale::Locale;

/// One [`Period`] with its type and structure names resolved for a locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodView {
    pub period_type: String,
    pub structure: String,
    pub number: i64,
    pub absolute_number: i64,
    pub starts_at_days_after_epoch: i64,
    pub length_in_days: i64,
}

impl Calendar {
    /// Resolve the names of a decomposition, keeping its order.
    ///
    /// # Errors
    /// Returns `LetoError::InconsistentPeriods` if `periods` is not a
    /// decomposition made by this calendar.
    pub fn describe(&self, periods: &[Period], locale: Locale) -> Result<Vec<PeriodView>> {
        self.calculate_days_from_periods(periods)?;
        let views = periods
            .iter()
            .map(|period| {
                let structure = self.structure(period.structure());
                PeriodView {
                    period_type: self.period_type(period.period_type()).name(locale).to_string(),
                    structure: structure.name(locale).to_string(),
                    number: period.number(),
                    absolute_number: period.absolute_number(),
                    starts_at_days_after_epoch: period.starts_at_days_after_epoch(),
                    length_in_days: structure.total_length_in_days(),
                }
            })
            .collect();
        Ok(views)
    }
}
