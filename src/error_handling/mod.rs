//! Error handling.
//!
//! One [`LookupError`] covers all three lookups and the composite chain.
//! Errors are categorized into:
//! - **Transport**: the request never produced a usable response
//! - **UnexpectedStatus**: the service answered with a status other than 200
//! - **MalformedBody**: the body was not JSON of the expected shape
//!
//! Errors propagate with `?`, first error wins, nothing is retried.

mod types;

// Re-export public API
pub use types::{InitializationError, LookupError};
