//! Structural consistency checks for calendar hierarchies.
//!
//! Every structure carries a declared length table (how many days, months,
//! years, ... it contains). The checker recomputes that table purely from the
//! structure's children and reports the first disagreement. A calendar that
//! fails the check would publish wrong unit counts to every caller, so
//! [`Calendar::new`](crate::Calendar::new) refuses to build one.

use tracing::debug;

use crate::error::{LetoError, Result};
use crate::hierarchy::Hierarchy;
use crate::locale::Locale;
use crate::structure::{LengthTable, StructureId};

/// Recompute the length table of `structure` from its children.
///
/// An atomic structure contains one unit of its own type. A composite
/// structure contains one unit of its own type plus everything its children
/// contain. Shared children are counted once per occurrence.
pub fn calculate_length_in_period_types(hierarchy: &Hierarchy, structure: StructureId) -> LengthTable {
    let mut memo: Vec<Option<LengthTable>> = vec![None; hierarchy.structures().len()];
    calculate_memoized(hierarchy, structure, &mut memo)
}

fn calculate_memoized(
    hierarchy: &Hierarchy,
    id: StructureId,
    memo: &mut Vec<Option<LengthTable>>,
) -> LengthTable {
    if let Some(table) = &memo[id.index()] {
        return table.clone();
    }

    let structure = hierarchy.structure(id);
    let mut table = LengthTable::new();
    table.insert(structure.period_type(), 1);
    for &child in structure.children() {
        for (period_type, count) in calculate_memoized(hierarchy, child, memo) {
            *table.entry(period_type).or_insert(0) += count;
        }
    }

    memo[id.index()] = Some(table.clone());
    table
}

/// Compare one structure's installed table with the recomputed one, over
/// every period type of the hierarchy.
///
/// # Errors
/// Returns `LetoError::LengthsNotInstalled` if the structure has no table and
/// `LetoError::LengthMismatch` for the first disagreeing period type.
pub fn check_structure(hierarchy: &Hierarchy, structure: StructureId) -> Result<()> {
    let computed = calculate_length_in_period_types(hierarchy, structure);
    compare(hierarchy, structure, &computed)
}

/// Check every structure of the hierarchy.
#[tracing::instrument(level = "debug", skip_all)]
pub fn check_hierarchy(hierarchy: &Hierarchy) -> Result<()> {
    let mut memo: Vec<Option<LengthTable>> = vec![None; hierarchy.structures().len()];
    for structure in hierarchy.structures() {
        let computed = calculate_memoized(hierarchy, structure.id(), &mut memo);
        compare(hierarchy, structure.id(), &computed)?;
    }
    debug!(
        structures = hierarchy.structures().len(),
        "length tables verified"
    );
    Ok(())
}

fn compare(hierarchy: &Hierarchy, id: StructureId, computed: &LengthTable) -> Result<()> {
    let structure = hierarchy.structure(id);
    let declared = structure.total_length_in_period_types()?;

    for period_type in hierarchy.period_types() {
        let declared_count = declared.get(&period_type.id()).copied().unwrap_or(0);
        let computed_count = computed.get(&period_type.id()).copied().unwrap_or(0);
        if declared_count != computed_count {
            return Err(LetoError::LengthMismatch {
                structure: structure.name(Locale::En).to_string(),
                period_type: period_type.name(Locale::En).to_string(),
                declared: declared_count,
                computed: computed_count,
            });
        }
    }
    Ok(())
}
