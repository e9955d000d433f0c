//! Logger setup for the command-line harness.
//!
//! The library only emits through the `log` facade; binaries call
//! [`init_logger`] once to route records to stderr.

use std::io::Write;

use clap::ValueEnum;
use env_logger::{fmt::Formatter, Builder, Target};
use log::{Level, LevelFilter};

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum LogLevel {
    Error,
    #[value(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    pub fn to_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
            Self::Off => LevelFilter::Off,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum LogFormat {
    /// `LEVEL message`
    Compact,
    /// `LEVEL [target] message`
    Pretty,
}

pub fn init_logger(level: LogLevel, format: LogFormat, timestamp: bool) -> Result<()> {
    let mut builder = Builder::new();
    builder
        .filter_level(level.to_filter())
        .write_style(env_logger::WriteStyle::Never)
        .target(Target::Stderr)
        .format(move |buf: &mut Formatter, record| {
            if timestamp {
                write!(buf, "{} ", buf.timestamp_millis())?;
            }
            match format {
                LogFormat::Compact => {
                    writeln!(buf, "{} {}", level_tag(record.level()), record.args())
                }
                LogFormat::Pretty => writeln!(
                    buf,
                    "{} [{}] {}",
                    level_tag(record.level()),
                    record.target(),
                    record.args()
                ),
            }
        });

    builder
        .try_init()
        .map_err(|e| Error::other(format!("logger init failed: {e}")))
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
