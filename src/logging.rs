//! Logging setup
//!
//! The library only emits `tracing` events; hosts that have no subscriber of
//! their own can install the fmt subscriber below.
//!
//! - `FARM_LOG_LEVEL`: trace, debug, info, warn, error (default info)
//! - `FARM_LOG_FORMAT`: compact, pretty, json (default compact)
//! - `RUST_LOG` overrides the level with a full filter directive

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

impl LogLevel {
    fn directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format: {}", s)),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    /// Whether to enable colored output
    pub enable_colors: bool,
    /// Whether to include event targets
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Compact,
            enable_colors: true,
            include_targets: false,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(level) = env::var("FARM_LOG_LEVEL") {
            config.level = level.parse().unwrap_or(LogLevel::Info);
        }

        if let Ok(format) = env::var("FARM_LOG_FORMAT") {
            config.format = format.parse().unwrap_or(LogFormat::Compact);
        }

        if let Ok(colors) = env::var("FARM_LOG_COLORS") {
            config.enable_colors = colors.parse().unwrap_or(true);
        }

        config
    }

    /// Debug level, for `--debug` style flags
    pub fn debug(mut self) -> Self {
        self.level = LogLevel::Debug;
        self
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.level.directive()))
    }
}

/// Install the global fmt subscriber.
///
/// Fails if another subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), Error> {
    let builder = fmt()
        .with_env_filter(config.env_filter())
        .with_ansi(config.enable_colors)
        .with_target(config.include_targets)
        .with_writer(std::io::stderr);

    let result = match config.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    result.map_err(|e| Error::Config(format!("Failed to initialize logging: {}", e)))
}
