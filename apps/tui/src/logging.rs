use color_eyre::eyre::eyre;
use color_eyre::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::log_dir;

const LOG_FILE: &str = "market-dashboard.log";

/// Installs the global subscriber.
///
/// The interactive UI owns the terminal, so events go to a daily log file; the returned guard
/// must be held until exit to flush it. Headless runs log to stderr instead.
pub fn init(headless: bool, debug: bool) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "info" }));

    if headless {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
            .map_err(|error| eyre!("Failed to install logger: {error}"))?;
        return Ok(None);
    }

    let appender = tracing_appender::rolling::daily(log_dir(), LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|error| eyre!("Failed to install logger: {error}"))?;

    Ok(Some(guard))
}
