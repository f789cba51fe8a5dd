//! Console logger setup.
//!
//! All user-facing output goes through the `log` facade. Normal messages are
//! printed bare to stdout, warnings and errors get a colored prefix, and
//! `--verbose` adds timestamps. With `--logfile` every line is also appended
//! to a file with ANSI escapes stripped.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::error::CliError;

/// Writes to stdout and a plain-text copy to a log file.
struct TeeWriter {
    file: strip_ansi_escapes::Writer<File>,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        self.file.flush()
    }
}

fn level_filter(quiet: bool, verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

/// Install the global logger. `RUST_LOG` overrides the level chosen by flags.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level_filter(quiet, verbose));
    builder.parse_default_env();

    builder.format(move |buf, record| {
        if verbose {
            let ts = buf.timestamp_millis();
            write!(buf, "[{ts}] ")?;
        }
        match record.level() {
            Level::Error => write!(buf, "{} ", "error:".if_supports_color(Stdout, |t| t.red()))?,
            Level::Warn => write!(
                buf,
                "{} ",
                "warning:".if_supports_color(Stdout, |t| t.yellow())
            )?,
            _ => {}
        }
        writeln!(buf, "{}", record.args())
    });

    match logfile {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.target(env_logger::Target::Pipe(Box::new(TeeWriter {
                file: strip_ansi_escapes::Writer::new(file),
            })));
        }
        None => {
            builder.target(env_logger::Target::Stdout);
        }
    }

    builder
        .try_init()
        .map_err(|e| CliError::logger(e.to_string()))
}
