//! Period types: the granularities (Day, Month, Year, ...) of a calendar.

use serde::{Deserialize, Serialize};

use crate::locale::{Locale, LocalizedName};

/// Handle of a [`PeriodType`] inside its [`Hierarchy`](crate::Hierarchy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeriodTypeId(pub(crate) usize);

impl PeriodTypeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One granularity of a calendar. Carries nothing but its identity and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodType {
    id: PeriodTypeId,
    name: LocalizedName,
}

impl PeriodType {
    pub(crate) fn new(id: PeriodTypeId, name: LocalizedName) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> PeriodTypeId {
        self.id
    }

    pub fn name(&self, locale: Locale) -> &'static str {
        self.name.get(locale)
    }
}
