//! Errors raised by the REST glue.

/// Failure talking to the portal API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("{context} failed: {status}")]
    Status { context: &'static str, status: u16 },
    /// The response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// Called outside a browser (SSR) or a browser API is missing.
    #[error("not available: {0}")]
    Unavailable(&'static str),
}
