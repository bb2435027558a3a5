//! Period structures: the reusable templates each calendar level is made of.
//!
//! A structure is either atomic (exactly one day) or composite (an ordered
//! sequence of child structures). Children are [`StructureId`] handles into the
//! owning [`Hierarchy`](crate::Hierarchy), so one node may appear many times
//! inside its parents without being copied.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{LetoError, Result};
use crate::locale::{Locale, LocalizedName};
use crate::period_type::PeriodTypeId;

/// Handle of a [`PeriodStructure`] inside its hierarchy. Equal handles mean
/// the very same node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructureId(pub(crate) usize);

impl StructureId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// How many units of each period type a structure contains. Types missing
/// from the table count as zero.
pub type LengthTable = BTreeMap<PeriodTypeId, i64>;

#[derive(Debug)]
pub struct PeriodStructure {
    id: StructureId,
    period_type: PeriodTypeId,
    name: LocalizedName,
    total_length_in_days: i64,
    children: Vec<StructureId>,
    lengths: OnceLock<LengthTable>,
}

impl PeriodStructure {
    pub(crate) fn new(
        id: StructureId,
        period_type: PeriodTypeId,
        name: LocalizedName,
        total_length_in_days: i64,
        children: Vec<StructureId>,
    ) -> Self {
        Self {
            id,
            period_type,
            name,
            total_length_in_days,
            children,
            lengths: OnceLock::new(),
        }
    }

    pub fn id(&self) -> StructureId {
        self.id
    }

    pub fn period_type(&self) -> PeriodTypeId {
        self.period_type
    }

    pub fn name(&self, locale: Locale) -> &'static str {
        self.name.get(locale)
    }

    pub fn is_atomic(&self) -> bool {
        self.children.is_empty()
    }

    pub fn total_length_in_days(&self) -> i64 {
        self.total_length_in_days
    }

    /// Ordered child structures; empty iff the structure is atomic.
    pub fn children(&self) -> &[StructureId] {
        &self.children
    }

    /// Alias of [`children`](Self::children) under the name front-ends use.
    pub fn sub_periods(&self) -> &[StructureId] {
        &self.children
    }

    /// Install the length table. Allowed exactly once per structure.
    pub fn set_total_length_in_period_types(&self, lengths: LengthTable) -> Result<()> {
        self.lengths
            .set(lengths)
            .map_err(|_| LetoError::LengthsAlreadyInstalled {
                structure: self.name.en.to_string(),
            })
    }

    pub fn has_lengths_installed(&self) -> bool {
        self.lengths.get().is_some()
    }

    /// The installed length table.
    ///
    /// # Errors
    /// Returns `LetoError::LengthsNotInstalled` if the table was never set.
    pub fn total_length_in_period_types(&self) -> Result<&LengthTable> {
        self.lengths
            .get()
            .ok_or_else(|| LetoError::LengthsNotInstalled {
                structure: self.name.en.to_string(),
            })
    }

    /// Number of `period_type` units inside this structure.
    pub fn length_in_period_type(&self, period_type: PeriodTypeId) -> Result<i64> {
        Ok(self
            .total_length_in_period_types()?
            .get(&period_type)
            .copied()
            .unwrap_or(0))
    }
}
