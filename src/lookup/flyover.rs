//! ISS pass-prediction lookup.

use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::config::Endpoints;
use crate::error_handling::LookupError;
use crate::models::{Coordinates, FlyoverPass};

const WHAT: &str = "flyover times";

#[derive(Deserialize)]
struct FlyoverResponse {
    response: Vec<FlyoverPass>,
}

/// Fetches the predicted ISS passes over `coords`.
///
/// Sends the coordinates as `lat`/`lon` query parameters (the wire names the
/// pass-prediction API requires) and returns the decoded `response` array.
///
/// # Errors
///
/// Same taxonomy as [`fetch_my_ip`](crate::fetch_my_ip): transport failure,
/// non-200 status (message carries the code and body), malformed body.
pub async fn fetch_flyover_times(
    client: &Client,
    endpoints: &Endpoints,
    coords: &Coordinates,
) -> Result<Vec<FlyoverPass>, LookupError> {
    let response = client
        .get(&endpoints.flyover_url)
        .query(&[("lat", coords.latitude), ("lon", coords.longitude)])
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

    decode_flyover_body(&body)
}

fn decode_flyover_body(body: &str) -> Result<Vec<FlyoverPass>, LookupError> {
    let decoded: FlyoverResponse =
        serde_json::from_str(body).map_err(|source| LookupError::malformed_body(WHAT, source))?;
    Ok(decoded.response)
}
