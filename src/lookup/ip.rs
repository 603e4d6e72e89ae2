//! Public IP lookup.

use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::config::Endpoints;
use crate::error_handling::LookupError;

const WHAT: &str = "IP";

#[derive(Deserialize)]
struct IpResponse {
    ip: String,
}

/// Fetches the caller's public IP address from the IP-echo endpoint.
///
/// The address comes back exactly as the service reports it, in
/// dotted-decimal form; no validation is applied on this side.
///
/// # Errors
///
/// `LookupError::Transport` if the request fails on the wire,
/// `LookupError::UnexpectedStatus` for any non-200 answer, and
/// `LookupError::MalformedBody` when the body is not `{"ip": "..."}`.
pub async fn fetch_my_ip(client: &Client, endpoints: &Endpoints) -> Result<String, LookupError> {
    let response = client
        .get(&endpoints.ip_url)
        .send()
        .await
        .map_err(|source| LookupError::transport(WHAT, source))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|source| LookupError::transport(WHAT, source))?;

    if status != StatusCode::OK {
        return Err(LookupError::unexpected_status(WHAT, status, body));
    }

    decode_ip_body(&body)
}

fn decode_ip_body(body: &str) -> Result<String, LookupError> {
    let decoded: IpResponse =
        serde_json::from_str(body).map_err(|source| LookupError::malformed_body(WHAT, source))?;
    Ok(decoded.ip)
}
