//! Tests for period structures, the hierarchy builder and the correctness checker.

use leto_core::checker::{calculate_length_in_period_types, check_hierarchy, check_structure};
use leto_core::{
    Calendar, CalendarKind, Calendars, HierarchyBuilder, LetoError, Locale, LocalizedName,
};

const DAY: LocalizedName = LocalizedName::new("Day", "Ден");
const MONTH: LocalizedName = LocalizedName::new("Month", "Месец");
const YEAR: LocalizedName = LocalizedName::new("Year", "Година");

/// Find a structure by English name and day length in a built calendar.
fn find_structure<'a>(
    calendar: &'a Calendar,
    name: &str,
    length: i64,
) -> &'a leto_core::PeriodStructure {
    calendar
        .hierarchy()
        .structures()
        .iter()
        .find(|s| s.name(Locale::En) == name && s.total_length_in_days() == length)
        .unwrap_or_else(|| panic!("structure {} ({} days) must exist", name, length))
}

// ---------------------------------------------------------------------------
// Month and year lengths
// ---------------------------------------------------------------------------

#[test]
fn thirty_one_day_month_has_31_days() {
    let julian = CalendarKind::Julian.build().unwrap();
    let day = julian.period_types_by_granularity()[0];

    let january = find_structure(&julian, "January", 31);

    assert_eq!(january.length_in_period_type(day).unwrap(), 31);
    assert_eq!(january.children().len(), 31);
    assert!(!january.is_atomic());
}

#[test]
fn common_year_has_365_days_and_leap_year_366() {
    let julian = CalendarKind::Julian.build().unwrap();
    let types = julian.period_types_by_granularity();
    let (day, month) = (types[0], types[1]);

    let common = find_structure(&julian, "Common year", 365);
    let leap = find_structure(&julian, "Leap year", 366);

    let month_lengths: Vec<i64> = common
        .children()
        .iter()
        .map(|&id| julian.structure(id).total_length_in_days())
        .collect();
    assert_eq!(
        month_lengths,
        vec![31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    );
    assert_eq!(common.length_in_period_type(day).unwrap(), 365);
    assert_eq!(common.length_in_period_type(month).unwrap(), 12);

    let february = julian.structure(leap.children()[1]);
    assert_eq!(february.total_length_in_days(), 29);
    assert_eq!(leap.length_in_period_type(day).unwrap(), 366);
}

#[test]
fn coarser_types_count_zero() {
    let julian = CalendarKind::Julian.build().unwrap();
    let year = julian.period_types_by_granularity()[2];
    let january = find_structure(&julian, "January", 31);

    assert_eq!(january.length_in_period_type(year).unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Node sharing
// ---------------------------------------------------------------------------

#[test]
fn shared_nodes_are_referenced_not_copied() {
    let julian = CalendarKind::Julian.build().unwrap();
    let root = julian.structure(julian.root());

    // Three common years, then the leap year: the common year is one node.
    let children = root.children();
    assert_eq!(children.len(), 4);
    assert_eq!(children[0], children[1]);
    assert_eq!(children[1], children[2]);
    assert_ne!(children[2], children[3]);

    // Common and leap years share every month except February.
    let common = julian.structure(children[0]).children();
    let leap = julian.structure(children[3]).children();
    for (index, (a, b)) in common.iter().zip(leap).enumerate() {
        if index == 1 {
            assert_ne!(a, b, "February must differ");
        } else {
            assert_eq!(a, b, "month {} must be shared", index);
        }
    }

    // Every day of every month is the same leaf.
    let day_leaf = julian.structure(common[0]).children()[0];
    for &month in common.iter().chain(leap) {
        assert!(julian
            .structure(month)
            .children()
            .iter()
            .all(|&day| day == day_leaf));
    }
}

// ---------------------------------------------------------------------------
// Builder validation
// ---------------------------------------------------------------------------

#[test]
fn composite_without_children_is_malformed() {
    let mut builder = HierarchyBuilder::new();
    let month = builder.add_period_type(MONTH);

    let err = builder.composite(month, MONTH, 30, &[]).unwrap_err();
    assert!(matches!(err, LetoError::MalformedStructure(_)), "got {:?}", err);
}

#[test]
fn declared_length_must_match_children() {
    let mut builder = HierarchyBuilder::new();
    let day_type = builder.add_period_type(DAY);
    let month = builder.add_period_type(MONTH);
    let day = builder.atomic(day_type, DAY).unwrap();

    let err = builder.composite(month, MONTH, 31, &vec![day; 30]).unwrap_err();
    assert!(matches!(err, LetoError::MalformedStructure(_)), "got {:?}", err);
}

#[test]
fn non_positive_declared_length_is_malformed() {
    let mut builder = HierarchyBuilder::new();
    let day_type = builder.add_period_type(DAY);
    let month = builder.add_period_type(MONTH);
    let day = builder.atomic(day_type, DAY).unwrap();

    for length in [0, -5] {
        let err = builder.composite(month, MONTH, length, &[day]).unwrap_err();
        assert!(matches!(err, LetoError::MalformedStructure(_)), "got {:?}", err);
    }
}

#[test]
fn child_of_same_type_is_malformed() {
    let mut builder = HierarchyBuilder::new();
    let day_type = builder.add_period_type(DAY);
    let month = builder.add_period_type(MONTH);
    let day = builder.atomic(day_type, DAY).unwrap();
    let inner = builder.composite(month, MONTH, 2, &[day, day]).unwrap();

    let err = builder.composite(month, MONTH, 2, &[inner]).unwrap_err();
    assert!(matches!(err, LetoError::MalformedStructure(_)), "got {:?}", err);
}

#[test]
fn unknown_period_type_is_malformed() {
    let mut other = HierarchyBuilder::new();
    other.add_period_type(DAY);
    let foreign = other.add_period_type(MONTH);

    let mut builder = HierarchyBuilder::new();
    builder.add_period_type(DAY);

    let err = builder.atomic(foreign, DAY).unwrap_err();
    assert!(matches!(err, LetoError::MalformedStructure(_)), "got {:?}", err);
}

// ---------------------------------------------------------------------------
// Length tables
// ---------------------------------------------------------------------------

#[test]
fn length_table_installs_only_once() {
    let mut builder = HierarchyBuilder::new();
    let day_type = builder.add_period_type(DAY);
    let day = builder.atomic(day_type, DAY).unwrap();
    let hierarchy = builder.build();

    hierarchy.install_lengths(day, &[(day_type, 1)]).unwrap();
    let err = hierarchy.install_lengths(day, &[(day_type, 1)]).unwrap_err();
    assert!(
        matches!(err, LetoError::LengthsAlreadyInstalled { .. }),
        "got {:?}",
        err
    );
}

#[test]
fn querying_before_install_is_an_error() {
    let mut builder = HierarchyBuilder::new();
    let day_type = builder.add_period_type(DAY);
    let day = builder.atomic(day_type, DAY).unwrap();
    let hierarchy = builder.build();

    let err = hierarchy
        .structure(day)
        .length_in_period_type(day_type)
        .unwrap_err();
    assert!(matches!(err, LetoError::LengthsNotInstalled { .. }), "got {:?}", err);
}

#[test]
fn checker_computes_tables_from_children() {
    let mut builder = HierarchyBuilder::new();
    let day_type = builder.add_period_type(DAY);
    let month_type = builder.add_period_type(MONTH);
    let year_type = builder.add_period_type(YEAR);
    let day = builder.atomic(day_type, DAY).unwrap();
    let short = builder.composite(month_type, MONTH, 2, &[day, day]).unwrap();
    let long = builder.composite(month_type, MONTH, 3, &[day, day, day]).unwrap();
    let year = builder.composite(year_type, YEAR, 7, &[short, long, short]).unwrap();
    let hierarchy = builder.build();

    let table = calculate_length_in_period_types(&hierarchy, year);
    assert_eq!(table.get(&day_type), Some(&7));
    assert_eq!(table.get(&month_type), Some(&3));
    assert_eq!(table.get(&year_type), Some(&1));

    let table = calculate_length_in_period_types(&hierarchy, day);
    assert_eq!(table.len(), 1);
    assert_eq!(table.get(&day_type), Some(&1));
}

#[test]
fn checker_rejects_wrong_declared_table() {
    let mut builder = HierarchyBuilder::new();
    let day_type = builder.add_period_type(DAY);
    let month_type = builder.add_period_type(MONTH);
    let day = builder.atomic(day_type, DAY).unwrap();
    let month = builder.composite(month_type, MONTH, 3, &[day, day, day]).unwrap();
    let hierarchy = builder.build();

    hierarchy.install_lengths(day, &[(day_type, 1)]).unwrap();
    hierarchy
        .install_lengths(month, &[(day_type, 4), (month_type, 1)])
        .unwrap();

    let err = check_structure(&hierarchy, month).unwrap_err();
    assert_eq!(
        err,
        LetoError::LengthMismatch {
            structure: "Month".to_string(),
            period_type: "Day".to_string(),
            declared: 4,
            computed: 3,
        }
    );
    assert!(check_structure(&hierarchy, day).is_ok());
    assert!(check_hierarchy(&hierarchy).is_err());
}

#[test]
fn checker_rejects_missing_table() {
    let mut builder = HierarchyBuilder::new();
    let day_type = builder.add_period_type(DAY);
    let month_type = builder.add_period_type(MONTH);
    let day = builder.atomic(day_type, DAY).unwrap();
    builder.composite(month_type, MONTH, 2, &[day, day]).unwrap();
    let hierarchy = builder.build();
    hierarchy.install_lengths(day, &[(day_type, 1)]).unwrap();

    let err = check_hierarchy(&hierarchy).unwrap_err();
    assert!(matches!(err, LetoError::LengthsNotInstalled { .. }), "got {:?}", err);
}

#[test]
fn calendar_with_wrong_table_is_never_built() {
    let mut builder = HierarchyBuilder::new();
    let day_type = builder.add_period_type(DAY);
    let month_type = builder.add_period_type(MONTH);
    let day = builder.atomic(day_type, DAY).unwrap();
    let month = builder.composite(month_type, MONTH, 30, &vec![day; 30]).unwrap();
    let hierarchy = builder.build();
    hierarchy.install_lengths(day, &[(day_type, 1)]).unwrap();
    hierarchy
        .install_lengths(month, &[(day_type, 31), (month_type, 1)])
        .unwrap();

    let err = Calendar::new(
        LocalizedName::new("Broken", "Счупен"),
        0,
        hierarchy,
        vec![day_type, month_type],
        month,
    )
    .unwrap_err();
    assert!(matches!(err, LetoError::LengthMismatch { .. }), "got {:?}", err);
}

#[test]
fn calendar_rejects_root_below_coarsest_level() {
    let mut builder = HierarchyBuilder::new();
    let day_type = builder.add_period_type(DAY);
    let month_type = builder.add_period_type(MONTH);
    let day = builder.atomic(day_type, DAY).unwrap();
    let month = builder.composite(month_type, MONTH, 2, &[day, day]).unwrap();
    let hierarchy = builder.build();
    hierarchy.install_lengths(day, &[(day_type, 1)]).unwrap();
    hierarchy
        .install_lengths(month, &[(day_type, 2), (month_type, 1)])
        .unwrap();

    let err = Calendar::new(DAY, 0, hierarchy, vec![day_type, month_type], day).unwrap_err();
    assert!(matches!(err, LetoError::Configuration(_)), "got {:?}", err);
}

#[test]
fn calendar_rejects_skipped_level() {
    let mut builder = HierarchyBuilder::new();
    let day_type = builder.add_period_type(DAY);
    let month_type = builder.add_period_type(MONTH);
    let year_type = builder.add_period_type(YEAR);
    let day = builder.atomic(day_type, DAY).unwrap();
    // A year made directly of days skips the month level.
    let year = builder.composite(year_type, YEAR, 3, &[day, day, day]).unwrap();
    let hierarchy = builder.build();
    hierarchy.install_lengths(day, &[(day_type, 1)]).unwrap();
    hierarchy
        .install_lengths(year, &[(day_type, 3), (year_type, 1)])
        .unwrap();

    let err = Calendar::new(
        YEAR,
        0,
        hierarchy,
        vec![day_type, month_type, year_type],
        year,
    )
    .unwrap_err();
    assert!(matches!(err, LetoError::Configuration(_)), "got {:?}", err);
}

// ---------------------------------------------------------------------------
// Every shipped calendar is consistent
// ---------------------------------------------------------------------------

#[test]
fn every_structure_of_every_calendar_matches_its_table() {
    let calendars = Calendars::build().unwrap();

    for (kind, calendar) in calendars.iter() {
        let hierarchy = calendar.hierarchy();
        for structure in hierarchy.structures() {
            let computed = calculate_length_in_period_types(hierarchy, structure.id());
            for period_type in hierarchy.period_types() {
                assert_eq!(
                    structure.length_in_period_type(period_type.id()).unwrap(),
                    computed.get(&period_type.id()).copied().unwrap_or(0),
                    "{} / {} / {}",
                    kind,
                    structure.name(Locale::En),
                    period_type.name(Locale::En)
                );
            }
        }
        assert!(check_hierarchy(hierarchy).is_ok(), "{}", kind);
    }
}

#[test]
fn every_structure_satisfies_shape_invariants() {
    let calendars = Calendars::build().unwrap();

    for (kind, calendar) in calendars.iter() {
        for structure in calendar.hierarchy().structures() {
            if structure.is_atomic() {
                assert_eq!(structure.total_length_in_days(), 1, "{}", kind);
                assert!(structure.sub_periods().is_empty());
            } else {
                let sum: i64 = structure
                    .children()
                    .iter()
                    .map(|&id| calendar.structure(id).total_length_in_days())
                    .sum();
                assert_eq!(sum, structure.total_length_in_days(), "{}", kind);
            }
        }
    }
}
