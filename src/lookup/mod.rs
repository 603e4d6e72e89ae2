//! The three API lookups and the composite chain.
//!
//! Each lookup issues one GET against a third-party JSON endpoint and decodes
//! the interesting part of the body. The chain runs them strictly in order:
//! public IP, then coordinates for that IP, then ISS passes over those
//! coordinates. The first failing step aborts the rest.

mod chain;
mod flyover;
mod geo;
mod ip;

pub use chain::next_flyovers_for_my_location;
pub use flyover::fetch_flyover_times;
pub use geo::fetch_coords_by_ip;
pub use ip::fetch_my_ip;
