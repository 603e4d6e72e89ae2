//! iss_flyover library: ISS pass lookup by public-IP geolocation
//!
//! This library chains three public JSON HTTP APIs into one composite query:
//! the caller's public IP address, the geographic coordinates for that IP,
//! and the upcoming visible overhead passes of the International Space
//! Station for those coordinates.
//!
//! Each step is a single HTTP GET; the composite chain runs them strictly in
//! order and short-circuits on the first error.
//!
//! # Example
//!
//! ```no_run
//! use iss_flyover::{next_flyovers_for_my_location, Endpoints};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = reqwest::Client::new();
//! let passes = next_flyovers_for_my_location(&client, &Endpoints::default()).await?;
//! for pass in passes {
//!     println!("{}", pass);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod initialization;
mod lookup;
mod models;

// Re-export public API
pub use config::{Config, Endpoints, LogFormat, LogLevel};
pub use demo::{run_demo, DemoReport};
pub use error_handling::{InitializationError, LookupError};
pub use lookup::{
    fetch_coords_by_ip, fetch_flyover_times, fetch_my_ip, next_flyovers_for_my_location,
};
pub use models::{Coordinates, FlyoverPass};

// Internal demo module (the demonstration entry point)
mod demo {
    use anyhow::{Context, Result};
    use log::{error, info};

    use crate::config::{Config, Endpoints, DEMO_LATITUDE, DEMO_LONGITUDE, DEMO_SAMPLE_IP};
    use crate::error_handling::LookupError;
    use crate::initialization::init_client;
    use crate::lookup::{
        fetch_coords_by_ip, fetch_flyover_times, fetch_my_ip, next_flyovers_for_my_location,
    };
    use crate::models::{Coordinates, FlyoverPass};

    /// Outcome tally of a demonstration run.
    #[derive(Debug, Clone, Copy)]
    pub struct DemoReport {
        /// Number of lookups that succeeded
        pub succeeded: usize,
        /// Number of lookups that failed
        pub failed: usize,
    }

    impl DemoReport {
        /// Total number of lookups attempted.
        pub fn total(&self) -> usize {
            self.succeeded + self.failed
        }
    }

    /// Logs the outcome of one demonstration lookup and updates the tally.
    fn record<T>(report: &mut DemoReport, outcome: Result<T, LookupError>) -> Option<T> {
        match outcome {
            Ok(value) => {
                report.succeeded += 1;
                Some(value)
            }
            Err(e) => {
                error!("It didn't work! {}", e);
                report.failed += 1;
                None
            }
        }
    }

    fn log_passes(where_from: &str, passes: &[FlyoverPass]) {
        if passes.is_empty() {
            info!("It worked! No upcoming passes for {}", where_from);
            return;
        }
        info!("It worked! Returned flyover times for {}:", where_from);
        for pass in passes {
            info!("  {}", pass);
        }
    }

    /// Runs the demonstration: each lookup with the original sample inputs,
    /// plus the full composite chain.
    ///
    /// The four invocations run concurrently relative to each other; only the
    /// composite chain orders its steps internally. Individual lookup
    /// failures are logged and tallied, not returned — the error path is
    /// reserved for setup problems like HTTP client construction.
    pub async fn run_demo(config: &Config) -> Result<DemoReport> {
        let client = init_client(config.timeout_seconds)
            .await
            .context("Failed to initialize HTTP client")?;
        let endpoints = Endpoints::default();

        let sample_coords = Coordinates {
            latitude: DEMO_LATITUDE,
            longitude: DEMO_LONGITUDE,
        };

        let (ip, coords, passes, chained) = tokio::join!(
            fetch_my_ip(&client, &endpoints),
            fetch_coords_by_ip(&client, &endpoints, DEMO_SAMPLE_IP),
            fetch_flyover_times(&client, &endpoints, &sample_coords),
            next_flyovers_for_my_location(&client, &endpoints),
        );

        let mut report = DemoReport {
            succeeded: 0,
            failed: 0,
        };

        if let Some(ip) = record(&mut report, ip) {
            info!("It worked! Returned IP: {}", ip);
        }
        if let Some(coords) = record(&mut report, coords) {
            info!("It worked! Returned coordinates: {}", coords);
        }
        if let Some(passes) = record(&mut report, passes) {
            log_passes("the sample coordinates", &passes);
        }
        if let Some(passes) = record(&mut report, chained) {
            log_passes("your location", &passes);
        }

        Ok(report)
    }
}
