#![cfg(feature = "std")]

use std::env;
use std::fmt;
use std::string::String;

use log::{self, Level, LevelFilter, Metadata, Record};

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_record(record.level(), record.target(), record.args()));
        }
    }

    fn flush(&self) {}
}

/// `LEVEL target - message`, e.g. `INFO broadside::game - computer placed 5 ships`.
fn format_record(level: Level, target: &str, args: &fmt::Arguments<'_>) -> String {
    std::format!("{} {} - {}", level, target, args)
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the stderr logger with a level taken from `BROADSIDE_LOG`.
/// Defaults to `info` if the variable is unset or invalid. Later calls are
/// no-ops.
pub fn init_logging() {
    let level = env::var("BROADSIDE_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_names_its_module() {
        let line = format_record(Level::Debug, "broadside::ai", &format_args!("round {}", 3));
        assert_eq!(line, "DEBUG broadside::ai - round 3");
    }
}
