//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing, plus the [`Endpoints`] struct that tells the lookups where the
//! three remote services live.

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_TIMEOUT_SECS, IPIFY_URL, IPVIGILANTE_URL, OPEN_NOTIFY_URL,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// The three remote endpoints the lookups talk to.
///
/// `Default` points at the production services. Tests construct their own
/// `Endpoints` aimed at a local stub server; nothing else is configurable.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// IP-echo endpoint, queried as-is.
    pub ip_url: String,
    /// Geolocation base URL; the IP is appended as a path segment.
    pub geo_url: String,
    /// Pass-prediction endpoint; `lat`/`lon` are added as query parameters.
    pub flyover_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            ip_url: IPIFY_URL.to_string(),
            geo_url: IPVIGILANTE_URL.to_string(),
            flyover_url: OPEN_NOTIFY_URL.to_string(),
        }
    }
}

/// Looks up upcoming visible ISS passes for your location.
///
/// Chains three public APIs: your public IP address, the coordinates for that
/// IP, and the ISS pass predictions for those coordinates.
#[derive(Parser, Debug, Clone)]
#[command(name = "iss_flyover", version)]
pub struct Config {
    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }
}
