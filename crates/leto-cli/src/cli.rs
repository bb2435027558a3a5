use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use leto_core::{CalendarKind, Locale};

/// Calendar period decomposition for the Julian, Gregorian and Bulgarian calendars.
#[derive(Parser)]
#[command(
    name = "leto",
    version,
    about = "Decompose days into calendar periods"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Language of period and structure names (en or bg).
    #[arg(long, global = true, default_value = "en")]
    pub locale: Locale,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decompose a day offset counted from the calendar's epoch.
    Periods(PeriodsArgs),
    /// Decompose a Gregorian civil date (YYYY-MM-DD).
    Date(DateArgs),
    /// Decompose the current day.
    Today(TodayArgs),
    /// Convert a date from one calendar into another.
    Convert(ConvertArgs),
    /// Verify the length tables of every calendar.
    Check,
}

#[derive(Args)]
pub struct PeriodsArgs {
    #[arg(short, long, value_enum)]
    pub calendar: CalendarArg,

    /// Days since the calendar's epoch.
    #[arg(allow_negative_numbers = true)]
    pub days: i64,
}

#[derive(Args)]
pub struct DateArgs {
    #[arg(short, long, value_enum)]
    pub calendar: CalendarArg,

    /// Proleptic Gregorian date.
    pub date: NaiveDate,
}

#[derive(Args)]
pub struct TodayArgs {
    #[arg(short, long, value_enum)]
    pub calendar: CalendarArg,

    /// Offset from UTC, in minutes, used to decide what "today" is.
    #[arg(
        long,
        env = "LETO_UTC_OFFSET_MINUTES",
        default_value_t = 120,
        allow_negative_numbers = true
    )]
    pub utc_offset_minutes: i32,
}

#[derive(Args)]
pub struct ConvertArgs {
    #[arg(long, value_enum)]
    pub from: CalendarArg,

    #[arg(long, value_enum)]
    pub to: CalendarArg,

    /// Year, counting the first year of the calendar as 1.
    pub year: i64,

    /// Month, 1-based.
    pub month: i64,

    /// Day of the month, 1-based.
    pub day: i64,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CalendarArg {
    Julian,
    Gregorian,
    Bulgarian,
}

impl From<CalendarArg> for CalendarKind {
    fn from(arg: CalendarArg) -> Self {
        match arg {
            CalendarArg::Julian => CalendarKind::Julian,
            CalendarArg::Gregorian => CalendarKind::Gregorian,
            CalendarArg::Bulgarian => CalendarKind::Bulgarian,
        }
    }
}
