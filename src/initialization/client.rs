//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::DEFAULT_USER_AGENT;

/// Initializes the shared HTTP client.
///
/// Creates a `reqwest::Client` configured with:
/// - the `iss_flyover` User-Agent
/// - a global request timeout
///
/// All three lookups share this one client. There is no connect timeout and
/// no retry layer; a stalled remote call fails when the global timeout fires.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub async fn init_client(timeout_seconds: u64) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(DEFAULT_USER_AGENT)
        .build()?;
    Ok(Arc::new(client))
}
