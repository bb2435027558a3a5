//! Tests for the Julian calendar hierarchy and its decomposition.

use chrono::NaiveDate;
use leto_core::calendars::julian;
use leto_core::{Calendar, CalendarDate, CalendarKind, Locale};

fn julian() -> Calendar {
    CalendarKind::Julian.build().expect("julian calendar must build")
}

#[test]
fn offset_zero_is_first_day_of_first_month_of_first_year() {
    let calendar = julian();
    let periods = calendar.calculate_calendar_periods(0).unwrap();

    assert_eq!(periods.len(), 4);
    for period in &periods {
        assert_eq!(period.number(), 0);
        assert_eq!(period.absolute_number(), 0);
        assert_eq!(period.starts_at_days_after_epoch(), 0);
    }
}

#[test]
fn offset_1460_is_last_day_of_the_leap_year() {
    let calendar = julian();
    let periods = calendar.calculate_calendar_periods(1460).unwrap();
    let (day, month, year, four_years) = (&periods[0], &periods[1], &periods[2], &periods[3]);

    assert_eq!(day.absolute_number(), 1460);
    assert_eq!(day.number(), 30);
    assert_eq!(month.number(), 11);
    assert_eq!(month.absolute_number(), 47);
    assert_eq!(month.starts_at_days_after_epoch(), 1430);
    assert_eq!(year.number(), 3);
    assert_eq!(year.starts_at_days_after_epoch(), 1095);
    assert_eq!(
        calendar.structure(year.structure()).total_length_in_days(),
        366
    );
    assert_eq!(four_years.number(), 0);
}

#[test]
fn offset_1461_starts_the_next_cycle() {
    let calendar = julian();
    let periods = calendar.calculate_calendar_periods(1461).unwrap();

    assert_eq!(periods[0].number(), 0);
    assert_eq!(periods[1].number(), 0);
    assert_eq!(periods[2].number(), 0);
    assert_eq!(periods[2].absolute_number(), 4);
    assert_eq!(periods[3].number(), 1);
    assert_eq!(periods[3].starts_at_days_after_epoch(), 1461);
}

#[test]
fn exactly_the_fourth_year_of_each_block_is_leap() {
    let calendar = julian();
    let year_type = calendar.period_types_by_granularity()[2];

    for block in 0..500 {
        for year_in_block in 0..4 {
            let absolute = block * 4 + year_in_block;
            let start = calendar.start_of(year_type, absolute).unwrap();
            let periods = calendar.calculate_calendar_periods(start).unwrap();
            let length = calendar
                .structure(periods[2].structure())
                .total_length_in_days();

            let expected = if year_in_block == 3 { 366 } else { 365 };
            assert_eq!(length, expected, "year {}", absolute + 1);
            assert_eq!(periods[2].number(), year_in_block);
        }
    }
}

#[test]
fn unix_epoch_is_19_december_1969() {
    let calendar = julian();
    assert_eq!(calendar.epoch_offset_days(), julian::EPOCH_OFFSET_DAYS);

    let periods = calendar.calculate_calendar_periods(719_164).unwrap();
    let date = calendar.date_of(&periods).unwrap();

    assert_eq!(date, CalendarDate::new(1968, 11, 18));
    assert_eq!(
        calendar.structure(periods[1].structure()).name(Locale::En),
        "December"
    );
    assert_eq!(
        calendar.structure(periods[1].structure()).name(Locale::Bg),
        "Декември"
    );
}

#[test]
fn gregorian_2000_03_13_is_julian_leap_day() {
    let calendar = julian();
    let date = NaiveDate::from_ymd_opt(2000, 3, 13).unwrap();
    let periods = calendar.periods_for_date(date).unwrap();

    assert_eq!(
        calendar.date_of(&periods).unwrap(),
        CalendarDate::new(1999, 1, 28)
    );
    assert_eq!(
        calendar.structure(periods[1].structure()).total_length_in_days(),
        29
    );
}

#[test]
fn period_types_are_finest_first() {
    let calendar = julian();
    let names: Vec<&str> = calendar
        .period_types_by_granularity()
        .iter()
        .map(|&id| calendar.period_type(id).name(Locale::En))
        .collect();

    assert_eq!(names, vec!["Day", "Month", "Year", "Four years"]);
}
