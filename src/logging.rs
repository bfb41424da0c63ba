#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "CONNECT_FOUR_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    // stdout is reserved for boards and JSON output
    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{:<5} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn parse_level(value: Option<String>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Initialize logging with a level taken from `CONNECT_FOUR_LOG`.
/// Defaults to `info` if the variable is not set or invalid.
pub fn init_logging() {
    init_logging_with(parse_level(env::var(LOG_ENV).ok()));
}

/// Install the stderr logger at a fixed level. Later calls only adjust the level.
pub fn init_logging_with(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parsing_falls_back_to_info() {
        assert_eq!(parse_level(Some("debug".into())), LevelFilter::Debug);
        assert_eq!(parse_level(Some(" WARN ".into())), LevelFilter::Warn);
        assert_eq!(parse_level(Some("loud".into())), LevelFilter::Info);
        assert_eq!(parse_level(None), LevelFilter::Info);
    }

    #[test]
    fn init_sets_max_level() {
        init_logging_with(LevelFilter::Trace);
        assert_eq!(log::max_level(), LevelFilter::Trace);
        log::debug!("logger installed");
    }
}
