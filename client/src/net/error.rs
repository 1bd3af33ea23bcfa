//! Error taxonomy for REST calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single request against the backend API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Connection, CORS, or timeout failure before a response arrived.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("{endpoint} failed: {status}")]
    Status { endpoint: &'static str, status: u16 },
    /// The body could not be decoded or had neither expected shape.
    #[error("unexpected response body: {0}")]
    Body(String),
    /// Called outside the browser build.
    #[error("not available on server")]
    Unavailable,
}
