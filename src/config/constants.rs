//! Configuration constants.

/// Default per-request timeout in seconds.
///
/// There is no separate connect timeout and no retry layer; a stalled remote
/// call fails when this global timeout fires.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// User-Agent header sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("iss_flyover/", env!("CARGO_PKG_VERSION"));

/// Production IP-echo endpoint, queried as-is.
pub const IPIFY_URL: &str = "https://api.ipify.org?format=json";

/// Production geolocation base URL; the IP is appended as a path segment.
pub const IPVIGILANTE_URL: &str = "https://ipvigilante.com";

/// Production ISS pass-prediction endpoint; `lat`/`lon` go in the query string.
pub const OPEN_NOTIFY_URL: &str = "http://api.open-notify.org/iss-pass.json";

/// Sample IP used by the demonstration coordinate lookup.
pub const DEMO_SAMPLE_IP: &str = "102.89.32.146";

/// Sample latitude (Vancouver, BC) used by the demonstration flyover lookup.
pub const DEMO_LATITUDE: f64 = 49.27670;

/// Sample longitude (Vancouver, BC) used by the demonstration flyover lookup.
pub const DEMO_LONGITUDE: f64 = -123.13000;
