//! log4rs setup: one file appender with `LEVEL: message` lines.

use crate::error::{Error, Result};
use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;

const LOG_PATTERN: &str = "{l}: {m}{n}";

/// Crates whose own logging is capped at `Warn`.
const QUIET_CRATES: [&str; 2] = ["reqwest", "hyper_util"];

/// Build the log4rs config writing to `path` (appending) at `level`.
pub fn build_config(path: &Path, level: LevelFilter) -> Result<Config> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(path)
        .map_err(|e| Error::Logging(format!("can't open log file {}: {e}", path.display())))?;

    let mut builder =
        Config::builder().appender(Appender::builder().build("logfile", Box::new(logfile)));
    for name in QUIET_CRATES {
        builder = builder.logger(Logger::builder().build(name, LevelFilter::Warn));
    }

    builder
        .build(Root::builder().appender("logfile").build(level))
        .map_err(|e| Error::Logging(e.to_string()))
}

/// Install the process-wide logger. Call once at start-up.
pub fn init(path: &Path, level: LevelFilter) -> Result<log4rs::Handle> {
    let config = build_config(path, level)?;
    log4rs::init_config(config).map_err(|e| Error::Logging(e.to_string()))
}
