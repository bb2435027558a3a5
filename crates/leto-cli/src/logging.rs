use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

/// The binary itself and the decomposition library.
const LOG_TARGETS: [&str; 2] = [env!("CARGO_CRATE_NAME"), "leto_core"];

/// Map the `-v` count to a level: warn, info, debug, then trace.
fn level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Filter enabling `level` for our own targets only, so dependencies stay quiet.
fn default_filter(level: LevelFilter) -> EnvFilter {
    LOG_TARGETS
        .iter()
        .filter_map(|target| format!("{target}={level}").parse::<Directive>().ok())
        .fold(EnvFilter::default(), EnvFilter::add_directive)
}

/// Install the stderr subscriber. `RUST_LOG` wins over `-v` when set, and
/// stdout is left to the JSON reports.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter(level(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
