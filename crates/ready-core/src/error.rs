use reqwest::StatusCode;
use thiserror::Error;

/// Transport-level error types shared across pyready crates.
///
/// Everything that can go wrong between "we have a URL" and "we have a
/// response body" lives here; domain-level errors (unknown package,
/// malformed metadata) belong to the consuming crate.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("request failed for {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: StatusCode },

    #[error("refusing non-HTTPS URL: {0}")]
    InsecureUrl(String),
}

impl CoreError {
    /// True if this error is an HTTP response with the given status code.
    pub fn is_status(&self, code: u16) -> bool {
        matches!(self, Self::Status { status, .. } if status.as_u16() == code)
    }
}

/// Convenience type alias for `Result<T, CoreError>`.
pub type Result<T> = std::result::Result<T, CoreError>;
