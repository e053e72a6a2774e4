//! Process-wide logging setup.
//!
//! Lines look like `[  1.204s  INFO worker-3 comic_tiles::batch] message`.
//! The thread column is the name of the logging thread (`main` or the name a
//! thread pool gave its workers), so lines of a parallel batch can be told
//! apart. Threads without a name print `-`.

use std::io::{self, Write};
use std::sync::OnceLock;
use std::thread;
use std::time::Instant;

use log::{Level, LevelFilter, Log, Metadata, Record};

#[cfg(feature = "tracing")]
use tracing_subscriber::fmt::format::FmtSpan;
#[cfg(feature = "tracing")]
use tracing_subscriber::util::SubscriberInitExt;
#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt, EnvFilter};

struct BatchLogger {
    level: LevelFilter,
    started: Instant,
}

fn write_line(
    out: &mut impl Write,
    elapsed_secs: f64,
    level: Level,
    thread: Option<&str>,
    target: &str,
    args: std::fmt::Arguments<'_>,
) -> io::Result<()> {
    writeln!(
        out,
        "[{elapsed_secs:7.3}s {level:>5} {} {target}] {args}",
        thread.unwrap_or("-")
    )
}

impl Log for BatchLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let current = thread::current();
        // one locked write per record keeps worker lines whole
        let _ = write_line(
            &mut io::stderr().lock(),
            self.started.elapsed().as_secs_f64(),
            record.level(),
            current.name(),
            record.target(),
            *record.args(),
        );
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

static LOGGER: OnceLock<BatchLogger> = OnceLock::new();

/// Install the stderr logger. Later calls keep the first logger.
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    if LOGGER.get().is_some() {
        return Ok(());
    }
    let logger = LOGGER.get_or_init(|| BatchLogger {
        level,
        started: Instant::now(),
    });
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Install a `tracing` subscriber.
///
/// `RUST_LOG` overrides `level` when set. Thread names are included so the
/// per-image spans of a parallel batch can be attributed to their worker.
#[cfg(feature = "tracing")]
pub fn init_tracing(level: LevelFilter, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));
    let builder = fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_thread_names(true);
    let _ = if json {
        builder.json().flatten_event(true).finish().try_init()
    } else {
        builder
            .with_timer(fmt::time::Uptime::default())
            .finish()
            .try_init()
    };
}
