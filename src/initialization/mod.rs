//! One-time setup for the ambient pieces of the application.
//!
//! This module provides initialization for the logger and the shared HTTP
//! client.

mod client;
mod logger;

pub use client::init_client;
pub use logger::init_logger_with;
