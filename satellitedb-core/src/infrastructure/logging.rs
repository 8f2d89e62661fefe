//! Run log for satellitedb.
//!
//! Each run appends plain-text lines to `logs/<component>-log-<YYYYMMDDHHMMSS>.txt`:
//!
//! ```text
//! 2026-10-18 09:14:02 AM - satellitedb_core::application::generate - INFO - Creating DB URL
//! ```
//!
//! The subscriber is returned rather than installed globally; callers scope
//! it with [`tracing::subscriber::with_default`].

use chrono::{DateTime, Local};
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::registry::LookupSpan;

use crate::infrastructure::error::InfrastructureError;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %I:%M:%S %p";
const FILE_STAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// `timestamp - logger_name - level - message`, one event per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainLineFormat;

impl<S, N> FormatEvent<S, N> for PlainLineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        write!(
            writer,
            "{} - {} - {} - ",
            Local::now().format(TIMESTAMP_FORMAT),
            meta.target(),
            meta.level()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

pub fn log_file_name(component: &str, now: &DateTime<Local>) -> String {
    format!("{}-log-{}.txt", component, now.format(FILE_STAMP_FORMAT))
}

/// Creates `log_dir` if needed and opens a fresh timestamped log file in
/// append mode.
pub fn create_log_file(
    log_dir: &Path,
    component: &str,
) -> Result<(PathBuf, File), InfrastructureError> {
    fs::create_dir_all(log_dir)?;
    let path = log_dir.join(log_file_name(component, &Local::now()));
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}

/// Subscriber writing [`PlainLineFormat`] lines to `writer`.
pub fn line_subscriber<W>(writer: W, max_level: Level) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(max_level)
        .with_writer(writer)
        .event_format(PlainLineFormat)
        .finish()
}

/// Subscriber for a log file opened by [`create_log_file`].
pub fn file_subscriber(file: File, max_level: Level) -> impl Subscriber + Send + Sync + 'static {
    line_subscriber(Mutex::new(file), max_level)
}
