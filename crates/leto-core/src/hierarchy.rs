//! Arena of period types and structures shared by one calendar.
//!
//! A [`HierarchyBuilder`] validates every structure as it is added, so a
//! malformed definition fails at construction instead of mis-decomposing
//! later. [`HierarchyBuilder::build`] freezes the arena into a [`Hierarchy`].

use tracing::trace;

use crate::error::{LetoError, Result};
use crate::locale::{Locale, LocalizedName};
use crate::period_type::{PeriodType, PeriodTypeId};
use crate::structure::{LengthTable, PeriodStructure, StructureId};

#[derive(Debug, Default)]
pub struct HierarchyBuilder {
    period_types: Vec<PeriodType>,
    structures: Vec<PeriodStructure>,
}

impl HierarchyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_period_type(&mut self, name: LocalizedName) -> PeriodTypeId {
        let id = PeriodTypeId(self.period_types.len());
        self.period_types.push(PeriodType::new(id, name));
        id
    }

    /// Add a one-day structure.
    pub fn atomic(&mut self, period_type: PeriodTypeId, name: LocalizedName) -> Result<StructureId> {
        self.check_period_type(period_type)?;
        Ok(self.push(period_type, name, 1, Vec::new()))
    }

    /// Add a structure made of `children`, in order.
    ///
    /// # Errors
    /// Returns `LetoError::MalformedStructure` if `children` is empty, refers to
    /// an unknown structure or one of the same period type, if any length is
    /// not positive, or if the children do not add up to `total_length_in_days`.
    pub fn composite(
        &mut self,
        period_type: PeriodTypeId,
        name: LocalizedName,
        total_length_in_days: i64,
        children: &[StructureId],
    ) -> Result<StructureId> {
        self.check_period_type(period_type)?;
        if children.is_empty() {
            return Err(LetoError::MalformedStructure(format!(
                "composite structure '{}' has no children",
                name
            )));
        }
        if total_length_in_days <= 0 {
            return Err(LetoError::MalformedStructure(format!(
                "structure '{}' declares a non-positive length of {} days",
                name, total_length_in_days
            )));
        }

        let mut sum: i64 = 0;
        for &child_id in children {
            let child = self.structures.get(child_id.0).ok_or_else(|| {
                LetoError::MalformedStructure(format!(
                    "structure '{}' refers to unknown child #{}",
                    name, child_id.0
                ))
            })?;
            if child.total_length_in_days() <= 0 {
                return Err(LetoError::MalformedStructure(format!(
                    "child '{}' of structure '{}' has a non-positive length",
                    child.name(Locale::En),
                    name
                )));
            }
            if child.period_type() == period_type {
                return Err(LetoError::MalformedStructure(format!(
                    "child '{}' of structure '{}' has the same period type as its parent",
                    child.name(Locale::En),
                    name
                )));
            }
            sum += child.total_length_in_days();
        }
        if sum != total_length_in_days {
            return Err(LetoError::MalformedStructure(format!(
                "structure '{}' declares {} days but its children add up to {}",
                name, total_length_in_days, sum
            )));
        }

        Ok(self.push(period_type, name, total_length_in_days, children.to_vec()))
    }

    pub fn build(self) -> Hierarchy {
        trace!(
            period_types = self.period_types.len(),
            structures = self.structures.len(),
            "hierarchy frozen"
        );
        Hierarchy {
            period_types: self.period_types,
            structures: self.structures,
        }
    }

    fn check_period_type(&self, period_type: PeriodTypeId) -> Result<()> {
        if period_type.0 < self.period_types.len() {
            Ok(())
        } else {
            Err(LetoError::MalformedStructure(format!(
                "unknown period type #{}",
                period_type.0
            )))
        }
    }

    fn push(
        &mut self,
        period_type: PeriodTypeId,
        name: LocalizedName,
        total_length_in_days: i64,
        children: Vec<StructureId>,
    ) -> StructureId {
        let id = StructureId(self.structures.len());
        self.structures.push(PeriodStructure::new(
            id,
            period_type,
            name,
            total_length_in_days,
            children,
        ));
        id
    }
}

/// Frozen arena. Nodes are never mutated; only the once-only length tables
/// may still be installed.
#[derive(Debug)]
pub struct Hierarchy {
    period_types: Vec<PeriodType>,
    structures: Vec<PeriodStructure>,
}

impl Hierarchy {
    pub fn period_types(&self) -> &[PeriodType] {
        &self.period_types
    }

    pub fn structures(&self) -> &[PeriodStructure] {
        &self.structures
    }

    /// Look up a period type by handle.
    ///
    /// # Panics
    /// Panics if the handle belongs to another hierarchy and is out of bounds.
    pub fn period_type(&self, id: PeriodTypeId) -> &PeriodType {
        &self.period_types[id.0]
    }

    /// Look up a structure by handle.
    ///
    /// # Panics
    /// Panics if the handle belongs to another hierarchy and is out of bounds.
    pub fn structure(&self, id: StructureId) -> &PeriodStructure {
        &self.structures[id.0]
    }

    pub fn get_structure(&self, id: StructureId) -> Option<&PeriodStructure> {
        self.structures.get(id.0)
    }

    /// Install the declared length table of one structure.
    pub fn install_lengths(
        &self,
        id: StructureId,
        lengths: &[(PeriodTypeId, i64)],
    ) -> Result<()> {
        let structure = self.get_structure(id).ok_or_else(|| {
            LetoError::Configuration(format!("unknown structure #{}", id.0))
        })?;
        let table: LengthTable = lengths.iter().copied().collect();
        structure.set_total_length_in_period_types(table)
    }
}
