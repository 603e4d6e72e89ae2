//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// The single error type shared by every lookup and the composite chain.
///
/// Each variant carries a `what` label ("IP", "coordinates", "flyover times")
/// naming the lookup that failed, so the message reads the same however far
/// down the chain the failure happened.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The request failed on the wire (connect failure, DNS, timeout).
    #[error("Error when fetching {what}: {source}")]
    Transport {
        /// Which lookup was in flight.
        what: &'static str,
        /// The underlying client error.
        source: ReqwestError,
    },

    /// The service answered with a status other than 200 OK.
    ///
    /// The message carries both the status code and the response body.
    #[error("Status Code {status} when fetching {what}: {body}")]
    UnexpectedStatus {
        /// Which lookup was in flight.
        what: &'static str,
        /// The status the service returned.
        status: StatusCode,
        /// The response body, verbatim.
        body: String,
    },

    /// The body was not JSON of the expected shape.
    #[error("Malformed body when fetching {what}: {source}")]
    MalformedBody {
        /// Which lookup was in flight.
        what: &'static str,
        /// The decode failure.
        source: serde_json::Error,
    },
}

impl LookupError {
    pub(crate) fn transport(what: &'static str, source: ReqwestError) -> Self {
        LookupError::Transport { what, source }
    }

    pub(crate) fn unexpected_status(what: &'static str, status: StatusCode, body: String) -> Self {
        LookupError::UnexpectedStatus { what, status, body }
    }

    pub(crate) fn malformed_body(what: &'static str, source: serde_json::Error) -> Self {
        LookupError::MalformedBody { what, source }
    }
}
