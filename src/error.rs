//! Error types for the BADSEC client.

use http::StatusCode;

use crate::resilience::retry::RetryError;

/// Failures of a single endpoint call, plus the terminal exhaustion error
/// handed back to the orchestration layer.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Connection refused, DNS failure, timeout and the like.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Anything other than 200 OK.
    #[error("{url} responded with status {status}")]
    Status { url: String, status: StatusCode },

    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to {operation} after {attempts} attempts: {last}")]
    Exhausted {
        operation: &'static str,
        attempts: u32,
        #[source]
        last: Box<FetchError>,
    },
}

impl FetchError {
    /// Every per-attempt failure is retried, client errors included.
    /// `Exhausted` is the only non-retryable variant and no attempt ever returns it.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Transport { .. }
            | FetchError::Status { .. }
            | FetchError::Body { .. } => true,
            FetchError::Exhausted { .. } => false,
        }
    }

    pub(crate) fn from_retry(operation: &'static str, err: RetryError<FetchError>) -> Self {
        match err {
            RetryError::Exhausted { attempts, last } => FetchError::Exhausted {
                operation,
                attempts,
                last: Box::new(last),
            },
            RetryError::Aborted { error, .. } => error,
        }
    }
}
