//! Data types passed between the lookup steps.

use std::fmt;

use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A geographic position in decimal degrees.
///
/// Field naming is `latitude`/`longitude` throughout this crate; the
/// abbreviated `lat`/`lon` appear only in the open-notify query string,
/// which that API dictates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees, north positive.
    pub latitude: f64,
    /// Longitude in decimal degrees, east positive.
    pub longitude: f64,
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.latitude, self.longitude)
    }
}

/// One predicted ISS pass over a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlyoverPass {
    /// Unix timestamp at which the ISS rises above the horizon.
    pub risetime: i64,
    /// Seconds the ISS stays visible.
    pub duration: i64,
}

impl fmt::Display for FlyoverPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Utc.timestamp_opt(self.risetime, 0).single() {
            Some(risetime) => write!(
                f,
                "Next pass at {} for {} seconds!",
                risetime.format("%a %b %d %Y %H:%M:%S UTC"),
                self.duration
            ),
            // risetime outside the representable range; show it raw
            None => write!(
                f,
                "Next pass at timestamp {} for {} seconds!",
                self.risetime, self.duration
            ),
        }
    }
}
