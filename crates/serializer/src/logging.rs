// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use abi_json_config::LogConfig;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log level '{level}': {source}")]
    InvalidLogLevel {
        level: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to install global tracing subscriber: {0}")]
    AlreadyInitialized(#[from] tracing_subscriber::util::TryInitError),
}

/// Configuration for logging initialization
#[derive(Debug, Clone, Copy)]
pub struct LoggingConfig<'a> {
    pub level: &'a str,
    pub json_format: bool,
    pub strip_ansi: bool,
}

impl<'a> From<&'a LogConfig> for LoggingConfig<'a> {
    fn from(config: &'a LogConfig) -> Self {
        Self {
            level: &config.level,
            json_format: config.json,
            strip_ansi: config.strip_ansi,
        }
    }
}

/// Build the filter for a level directive such as `debug` or `info,abi_json=trace`.
fn filter(level: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(level).map_err(|source| LoggingError::InvalidLogLevel {
        level: level.to_string(),
        source,
    })
}

/// Initialize tracing/logging with the specified configuration
///
/// Output goes to stdout, either as JSON lines or as human-readable text. A second
/// call returns [`LoggingError::AlreadyInitialized`] and leaves the first
/// subscriber in place.
///
/// # Examples
/// ```no_run
/// use abi_json::logging::{self, LoggingConfig};
///
/// logging::init(LoggingConfig {
///     level: "debug",
///     json_format: false,
///     strip_ansi: false,
/// })?;
/// # Ok::<(), abi_json::logging::LoggingError>(())
/// ```
pub fn init(config: LoggingConfig) -> Result<(), LoggingError> {
    let filter = filter(config.level)?;
    let registry = tracing_subscriber::registry().with(filter);

    if config.json_format {
        registry.with(fmt::layer().json()).try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(!config.strip_ansi);
        registry.with(fmt_layer).try_init()?;
    }

    Ok(())
}
