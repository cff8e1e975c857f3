//! Logger setup for the binary.

use std::io::Write;

use colored::{ColoredString, Colorize};
use env_logger::fmt::Formatter;
use log::{Level, LevelFilter, Record};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Dependencies that log far more than a search run needs, with their ceiling.
const NOISY_MODULES: &[(&str, LevelFilter)] = &[
    ("html5ever", LevelFilter::Error),
    ("selectors", LevelFilter::Warn),
    ("reqwest", LevelFilter::Info),
    ("hyper", LevelFilter::Info),
];

/// Installs an `env_logger` backend writing plain or JSON lines to stderr.
///
/// `RUST_LOG` is read first, then `level` is applied on top of it, so the
/// `--log-level` flag wins for this crate. Parsing and HTTP internals are
/// capped by `NOISY_MODULES`.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// RUST_LOG=reqwest=debug search_scrape --log-level debug "rust"
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    for (module, ceiling) in NOISY_MODULES {
        builder.filter_module(module, *ceiling);
    }
    builder.filter_module("search_scrape", level);

    match format {
        LogFormat::Json => builder.format(write_json_line),
        LogFormat::Plain => builder.format(write_plain_line),
    };

    builder.try_init()?;
    Ok(())
}

/// `{"ts":<millis>,"level":..,"target":..,"msg":..}`
fn write_json_line(buf: &mut Formatter, record: &Record) -> std::io::Result<()> {
    let msg = serde_json::to_string(&record.args().to_string())
        .unwrap_or_else(|_| "\"\"".to_string());
    writeln!(
        buf,
        "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
        chrono::Utc::now().timestamp_millis(),
        record.level(),
        record.target(),
        msg
    )
}

fn write_plain_line(buf: &mut Formatter, record: &Record) -> std::io::Result<()> {
    let (marker, level) = level_style(record.level());
    writeln!(
        buf,
        "{marker} {} [{level}] {}",
        record.target().cyan(),
        record.args()
    )
}

/// Emoji marker and coloured label for a level.
fn level_style(level: Level) -> (&'static str, ColoredString) {
    let label = level.to_string();
    match level {
        Level::Error => ("❌", label.red()),
        Level::Warn => ("⚠️", label.yellow()),
        Level::Info => ("✔️", label.green()),
        Level::Debug => ("🔍", label.blue()),
        Level::Trace => ("🔬", label.purple()),
    }
}
