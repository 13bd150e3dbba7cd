//! Error taxonomy for upstream search calls.
//!
//! Each failure kind is distinct so the web handler can log them
//! differently while still degrading to the same empty-results page.

use thiserror::Error;

/// Errors that can occur while querying the upstream recipe API.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The per-attempt timeout elapsed before a response arrived
    #[error("upstream request timed out")]
    Timeout(#[source] reqwest::Error),

    /// The redirect limit was exceeded while following the upstream response
    #[error("too many redirects from upstream")]
    TooManyRedirects(#[source] reqwest::Error),

    /// Every attempt in the retry budget came back with a retryable status
    #[error("retries exhausted after {attempts} attempts, last status {status}")]
    RetriesExhausted { attempts: u32, status: u16 },

    /// A non-success status outside the retryable set
    #[error("upstream returned status {status}")]
    UpstreamStatus { status: u16 },

    /// The response body was not the expected JSON shape
    #[error("failed to parse upstream response: {0}")]
    MalformedResponse(#[source] reqwest::Error),

    /// Any other request-level failure (connection refused, DNS, TLS, ...)
    #[error("upstream transport error: {0}")]
    Transport(#[source] reqwest::Error),
}

impl SearchError {
    /// Classify a request-level failure into its taxonomy kind.
    pub(crate) fn from_request_error(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SearchError::Timeout(err)
        } else if err.is_redirect() {
            SearchError::TooManyRedirects(err)
        } else {
            SearchError::Transport(err)
        }
    }
}
