//! Terminal logger - a `log` backend that stays readable in raw mode.
//!
//! Raw mode disables output post-processing, so a bare `\n` only moves the
//! cursor down. Every record is written to stderr terminated with `\r\n`.
//!
//! The level comes from `SPARK_INPUT_LOG` (`error`, `warn`, `info`, `debug`,
//! `trace`, `off`), defaulting to `info`.

use std::io::Write;
use std::str::FromStr;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "SPARK_INPUT_LOG";

pub struct TerminalLogger {
    level: LevelFilter,
}

impl TerminalLogger {
    pub const fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    fn format(record: &Record) -> String {
        if record.target() == "spark_input::events" {
            format!("{}\r\n", record.args())
        } else {
            format!("[{:<5} {}] {}\r\n", record.level(), record.target(), record.args())
        }
    }
}

impl Log for TerminalLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let mut err = std::io::stderr().lock();
            let _ = err.write_all(Self::format(record).as_bytes());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Parse a level name; unknown or missing values fall back to `info`.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| LevelFilter::from_str(v.trim()).ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the terminal logger at the level named by [`LOG_ENV`].
pub fn init() -> Result<LevelFilter, SetLoggerError> {
    let level = level_from(std::env::var(LOG_ENV).ok().as_deref());
    log::set_boxed_logger(Box::new(TerminalLogger::new(level)))?;
    log::set_max_level(level);
    Ok(level)
}
