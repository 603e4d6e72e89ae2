//! The composite IP → coordinates → flyover chain.

use log::debug;
use reqwest::Client;

use crate::config::Endpoints;
use crate::error_handling::LookupError;
use crate::models::FlyoverPass;

use super::{fetch_coords_by_ip, fetch_flyover_times, fetch_my_ip};

/// Runs the full chain for the machine this runs on: public IP, then the
/// coordinates for that IP, then the ISS passes over those coordinates.
///
/// The steps run strictly in order; a later step never starts before the
/// previous one has produced its value. The first failing step aborts the
/// rest and its error reaches the caller unchanged.
///
/// # Errors
///
/// Whatever [`LookupError`] the failing step produced.
pub async fn next_flyovers_for_my_location(
    client: &Client,
    endpoints: &Endpoints,
) -> Result<Vec<FlyoverPass>, LookupError> {
    let ip = fetch_my_ip(client, endpoints).await?;
    debug!("Resolved public IP: {}", ip);

    let coords = fetch_coords_by_ip(client, endpoints, &ip).await?;
    debug!("Resolved coordinates: {}", coords);

    fetch_flyover_times(client, endpoints, &coords).await
}
