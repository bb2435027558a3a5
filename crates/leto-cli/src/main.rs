//! `leto` CLI: decompose days into Julian, Gregorian and Bulgarian calendar
//! periods from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Periods of day 1460 of the Julian calendar
//! leto periods --calendar julian 1460
//!
//! # A Gregorian civil date in the Bulgarian calendar, with Bulgarian names
//! leto date --calendar bulgarian 2026-10-16 --locale bg
//!
//! # Today, as seen from UTC+2 (or $LETO_UTC_OFFSET_MINUTES)
//! leto today --calendar gregorian
//!
//! # 31 March 1916 (Julian) in the Gregorian calendar
//! leto convert --from julian --to gregorian 1916 3 31
//!
//! # Verify every calendar's length tables
//! leto check -v
//! ```
//!
//! Every command prints pretty JSON on stdout. Errors go to stderr with exit
//! code 1.

mod cli;
mod logging;
mod report;

use std::process;

use anyhow::{Context, Result};
use chrono::FixedOffset;
use clap::Parser;
use leto_core::{checker, CalendarDate, CalendarKind, Calendars, Locale};
use serde::Serialize;
use tracing::debug;

use crate::cli::{Cli, Command, ConvertArgs, DateArgs, PeriodsArgs, TodayArgs};
use crate::report::{CalendarReport, CheckReport, ConvertReport};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command, cli.locale) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command, locale: Locale) -> Result<()> {
    let calendars = Calendars::build().context("Failed to build calendars")?;

    match command {
        Command::Periods(args) => periods(&calendars, args, locale),
        Command::Date(args) => date(&calendars, args, locale),
        Command::Today(args) => today(&calendars, args, locale),
        Command::Convert(args) => convert(&calendars, args, locale),
        Command::Check => check(&calendars),
    }
}

fn periods(calendars: &Calendars, args: PeriodsArgs, locale: Locale) -> Result<()> {
    let kind = CalendarKind::from(args.calendar);
    let report = CalendarReport::new(kind, calendars.get(kind), args.days, locale)
        .with_context(|| format!("Failed to decompose day {} of the {} calendar", args.days, kind))?;
    write_json(&report)
}

fn date(calendars: &Calendars, args: DateArgs, locale: Locale) -> Result<()> {
    let kind = CalendarKind::from(args.calendar);
    let calendar = calendars.get(kind);
    let day_offset = calendar.day_offset_for_date(args.date);
    debug!(%kind, date = %args.date, day_offset, "resolved civil date");

    let report = CalendarReport::new(kind, calendar, day_offset, locale)
        .with_context(|| format!("Failed to decompose {} in the {} calendar", args.date, kind))?;
    write_json(&report)
}

fn today(calendars: &Calendars, args: TodayArgs, locale: Locale) -> Result<()> {
    let kind = CalendarKind::from(args.calendar);
    let calendar = calendars.get(kind);
    let offset = FixedOffset::east_opt(args.utc_offset_minutes.saturating_mul(60))
        .with_context(|| format!("Invalid UTC offset: {} minutes", args.utc_offset_minutes))?;

    let periods = calendar
        .today(offset)
        .with_context(|| format!("Failed to decompose today in the {} calendar", kind))?;
    let report = CalendarReport::new(kind, calendar, periods[0].absolute_number(), locale)?;
    write_json(&report)
}

fn convert(calendars: &Calendars, args: ConvertArgs, locale: Locale) -> Result<()> {
    let (from, to) = (CalendarKind::from(args.from), CalendarKind::from(args.to));
    let (source, target) = (calendars.get(from), calendars.get(to));

    let date = CalendarDate::new(
        args.year.saturating_sub(1),
        args.month.saturating_sub(1),
        args.day.saturating_sub(1),
    );
    let day_offset = source.day_offset_of(date).with_context(|| {
        format!(
            "{}-{}-{} is not a date of the {} calendar",
            args.year, args.month, args.day, from
        )
    })?;
    let converted = source
        .convert_day_offset(day_offset, target)
        .with_context(|| format!("The date falls outside the {} calendar", to))?;

    let report = ConvertReport {
        from: CalendarReport::new(from, source, day_offset, locale)?,
        to: CalendarReport::new(to, target, converted, locale)
            .with_context(|| format!("The date falls outside the {} calendar", to))?,
    };
    write_json(&report)
}

fn check(calendars: &Calendars) -> Result<()> {
    let mut reports = Vec::new();
    for (kind, calendar) in calendars.iter() {
        checker::check_hierarchy(calendar.hierarchy())
            .with_context(|| format!("The {} calendar is inconsistent", kind))?;

        reports.push(CheckReport {
            calendar: kind,
            structures: calendar.hierarchy().structures().len(),
            period_types: calendar
                .period_types_by_granularity()
                .iter()
                .map(|&id| calendar.period_type(id).name(Locale::En))
                .collect(),
            cycle_length_in_days: calendar.structure(calendar.root()).total_length_in_days(),
            consistent: true,
        });
    }
    write_json(&reports)
}

fn write_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
