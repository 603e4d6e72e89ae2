//! IP geolocation lookup.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Deserializer};

use crate::config::Endpoints;
use crate::error_handling::LookupError;
use crate::models::Coordinates;

const WHAT: &str = "coordinates";

#[derive(Deserialize)]
struct GeoResponse {
    data: GeoData,
}

#[derive(Deserialize)]
struct GeoData {
    #[serde(deserialize_with = "string_or_f64")]
    latitude: f64,
    #[serde(deserialize_with = "string_or_f64")]
    longitude: f64,
}

/// The geolocation service sends latitude/longitude as quoted strings for
/// some records and as bare numbers for others; accept both.
fn string_or_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
    }
}

/// Fetches the coordinates the geolocation service associates with `ip`.
///
/// The IP goes into the URL path unvalidated; a nonsense value is the remote
/// service's to reject.
///
/// # Errors
///
/// Same taxonomy as [`fetch_my_ip`](crate::fetch_my_ip): transport failure,
/// non-200 status (message carries the code and body), malformed body.
pub async fn fetch_coords_by_ip(
    client: &Client,
    endpoints: &Endpoints,
    ip: &str,
) -> Result<Coordinates, LookupError> {
    let url = format!("{}/{}", endpoints.geo_url.trim_end_matches('/'), ip);
    let response = client
        .get(&url)
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

    decode_coords_body(&body)
}

fn decode_coords_body(body: &str) -> Result<Coordinates, LookupError> {
    let decoded: GeoResponse =
        serde_json::from_str(body).map_err(|source| LookupError::malformed_body(WHAT, source))?;
    Ok(Coordinates {
        latitude: decoded.data.latitude,
        longitude: decoded.data.longitude,
    })
}
