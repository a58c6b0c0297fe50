use anyhow::Context;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs file logging when `log_file` is set.
///
/// Nothing is ever written to stdout/stderr while the UI owns the terminal, so without a file
/// no subscriber is installed. Filter precedence: `RUST_LOG` > `default_level`.
/// Keep the returned guard alive until exit so buffered lines are flushed.
pub fn init(log_file: Option<&Path>, default_level: &str) -> anyhow::Result<Option<WorkerGuard>> {
    let Some(path) = log_file else {
        return Ok(None);
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .with_context(|| format!("log path {} has no file name", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating log directory {}", dir.display()))?;

    let default_filter = format!("ratatui_todo={default_level},ratatui_todo_core={default_level}");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init()
        .context("installing tracing subscriber")?;

    Ok(Some(guard))
}
