use std::io::IsTerminal;
use std::path::Path;

use anyhow::Context;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use super::LogRotation;
use crate::runtime::Config;

/// Installs the global subscriber, writing to rolling log files when a log directory is
/// configured and to stderr otherwise
///
/// Stdout is reserved for the generated document. The returned guard flushes file logs on drop.
pub fn setup_logging(config: &Config) -> anyhow::Result<Option<WorkerGuard>> {
    let logging = &config.logging;

    let (writer, guard) = match &logging.path {
        Some(directory) => match file_writer(directory, logging.rotation) {
            Ok((writer, guard)) => (BoxMakeWriter::new(writer), Some(guard)),
            Err(error) => {
                eprintln!("{error:#}, logging to stderr instead");
                (BoxMakeWriter::new(std::io::stderr), None)
            }
        },
        None => (BoxMakeWriter::new(std::io::stderr), None),
    };

    tracing_subscriber::registry()
        .with(logging.env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(guard.is_none() && std::io::stderr().is_terminal())
                .with_target(false),
        )
        .try_init()?;

    Ok(guard)
}

fn file_writer(
    directory: &Path,
    rotation: LogRotation,
) -> anyhow::Result<(NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(directory)
        .with_context(|| format!("Could not create log directory {}", directory.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(rotation.into())
        .filename_prefix(env!("CARGO_PKG_NAME"))
        .filename_suffix("log")
        .build(directory)
        .context("Could not open log file")?;

    Ok(tracing_appender::non_blocking(appender))
}
