//! Logging initialisation for the spanwood CLI.
//!
//! Installs a global `tracing` subscriber with optional JSON formatting and
//! bridges the `log` facade so crates using either API emit structured events.

use std::{env, sync::OnceLock};

use thiserror::Error;
use tracing::warn;
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt};

const LOG_FORMAT_ENV: &str = "SPANWOOD_LOG_FORMAT";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Output format selected through `SPANWOOD_LOG_FORMAT`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogFormat {
    /// Human-readable lines (the default).
    Human,
    /// One JSON object per event, including the active span list.
    Json,
}

/// Errors raised while initialising structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Environment variable contained invalid UTF-8 data.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Name of the offending environment variable.
        name: &'static str,
        /// Underlying parse failure.
        #[source]
        source: env::VarError,
    },
    /// Unsupported log format requested via `SPANWOOD_LOG_FORMAT`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Raw value supplied by the user.
        provided: String,
    },
    /// Another global subscriber was already installed.
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        /// Error raised by `tracing`.
        #[source]
        source: tracing::subscriber::SetGlobalDefaultError,
    },
    /// Another logger already owns the `log` facade.
    #[error("failed to bridge the `log` facade: {source}")]
    LogBridge {
        /// Error raised by `tracing-log`.
        #[source]
        source: tracing_log::log::SetLoggerError,
    },
}

/// Install global structured logging if it has not already been configured.
///
/// The log format defaults to human-readable output and switches to JSON with
/// `SPANWOOD_LOG_FORMAT=json`. Diagnostics go to `stderr` so summaries on
/// `stdout` stay parseable. `RUST_LOG` controls the level, defaulting to
/// `info`.
///
/// # Errors
/// Returns [`LoggingError`] if the environment variable contains invalid
/// Unicode or names an unsupported format. An already-installed subscriber
/// or logger is reported as a warning and otherwise ignored.
pub fn init_logging() -> Result<(), LoggingError> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }

    let format = log_format_from_env()?;
    match install_subscriber(format) {
        Ok(()) => {}
        Err(err @ (LoggingError::InstallFailed { .. } | LoggingError::LogBridge { .. })) => {
            warn!(error = %err, "structured logging already configured elsewhere");
        }
        Err(err) => return Err(err),
    }
    INITIALISED.get_or_init(|| ());
    Ok(())
}

fn log_format_from_env() -> Result<LogFormat, LoggingError> {
    match env::var(LOG_FORMAT_ENV) {
        Ok(raw) => parse_log_format(&raw),
        Err(env::VarError::NotPresent) => Ok(LogFormat::Human),
        Err(err @ env::VarError::NotUnicode(_)) => Err(LoggingError::InvalidUnicode {
            name: LOG_FORMAT_ENV,
            source: err,
        }),
    }
}

fn install_subscriber(format: LogFormat) -> Result<(), LoggingError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let base_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);

    let fmt_layer = match format {
        LogFormat::Json => base_layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
        LogFormat::Human => base_layer.boxed(),
    };

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer);
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|source| LoggingError::InstallFailed { source })?;

    LogTracer::init().map_err(|source| LoggingError::LogBridge { source })
}

fn parse_log_format(raw: &str) -> Result<LogFormat, LoggingError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "human" => Ok(LogFormat::Human),
        "json" => Ok(LogFormat::Json),
        other => Err(LoggingError::UnsupportedFormat {
            provided: other.to_owned(),
        }),
    }
}
