//! Tracing setup for the `gradebook` binary.
//!
//! Events go to stderr in compact form. With a log file, a second JSON layer
//! writes through a non-blocking daily-rolled appender; the returned
//! [`WorkerGuard`] must stay alive until exit or buffered lines are lost.

use crate::error::{GradebookError, Result};
use std::ffi::OsStr;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_NAME: &str = "gradebook.log";

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `verbose` when set. Fails if a subscriber is already
/// installed or the log directory cannot be created.
pub fn init(verbose: bool, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    let Some(log_path) = log_file else {
        registry.try_init().map_err(already_set)?;
        return Ok(None);
    };

    let dir = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;
    let file_name = log_path
        .file_name()
        .unwrap_or_else(|| OsStr::new(DEFAULT_LOG_NAME));

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, file_name));
    let file_layer = fmt::layer().with_writer(writer).with_ansi(false).json();

    registry.with(file_layer).try_init().map_err(already_set)?;
    Ok(Some(guard))
}

/// Filter used when `RUST_LOG` is unset: our own events plus the HTTP
/// request spans emitted by the server's trace layer.
fn directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("gradebook={level},tower_http={level}")
}

fn already_set(e: tracing_subscriber::util::TryInitError) -> GradebookError {
    GradebookError::Config(format!("logging already initialized: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_directives_cover_http_spans() {
        assert_eq!(directives(false), "gradebook=info,tower_http=info");
        assert_eq!(directives(true), "gradebook=debug,tower_http=debug");
    }

    // The only test in this binary that installs the global subscriber
    #[test]
    fn test_file_logging_and_second_init() {
        let temp_dir = TempDir::new().unwrap();
        let log_dir = temp_dir.path().join("logs");

        let guard = init(false, Some(&log_dir.join("test.log"))).unwrap();
        assert!(guard.is_some());
        tracing::info!(target: "gradebook", "file layer check");
        drop(guard);

        assert!(matches!(init(false, None), Err(GradebookError::Config(_))));

        let written: String = std::fs::read_dir(&log_dir)
            .unwrap()
            .filter_map(|entry| std::fs::read_to_string(entry.unwrap().path()).ok())
            .collect();
        assert!(written.contains("file layer check"));
    }
}
