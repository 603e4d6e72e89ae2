//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, endpoint URLs, demo sample inputs)
//! - CLI option types and parsing
//! - The [`Endpoints`] override point used by tests

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, Endpoints, LogFormat, LogLevel};
