use std::fmt::Display;
use std::future::Future;

use tokio::time::{sleep, Duration};
use tracing::{error, warn};

use crate::utils::constants::{MAX_ATTEMPTS, RETRY_DELAY_MS};

/// Terminal outcome of a retried operation.
#[derive(Debug, thiserror::Error)]
pub enum RetryError<E> {
    /// Every attempt failed with a retryable error; `last` is the final one.
    #[error("all {attempts} attempts failed, last error: {last}")]
    Exhausted { attempts: u32, last: E },
    /// The classifier rejected the error, no further attempts were made.
    #[error("attempt {attempt} failed with a non-retryable error: {error}")]
    Aborted { attempt: u32, error: E },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrySettings {
    pub attempts: u32,
    /// constant, no backoff
    pub delay_ms: u64,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            attempts: MAX_ATTEMPTS,
            delay_ms: RETRY_DELAY_MS,
        }
    }
}

impl RetrySettings {
    pub fn new(attempts: u32, delay_ms: u64) -> Self {
        Self { attempts, delay_ms }
    }

    /// Run `operation` until it succeeds, `is_retryable` rejects its error,
    /// or `attempts` is reached. A ceiling of 0 still makes one attempt.
    pub async fn run_with_retry<F, Fut, T, E, C>(
        &self,
        name: &str,
        mut operation: F,
        is_retryable: C,
    ) -> Result<T, RetryError<E>>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
        C: Fn(&E) -> bool,
    {
        let attempts = self.attempts.max(1);
        let mut attempt = 1;

        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(e) if !is_retryable(&e) => {
                    error!("{name}: attempt {attempt}/{attempts} failed, not retrying: {e}");
                    return Err(RetryError::Aborted { attempt, error: e });
                }
                Err(e) if attempt < attempts => {
                    warn!(
                        "{name}: attempt {attempt}/{attempts} failed: {e}, retrying in {}ms",
                        self.delay_ms
                    );
                    sleep(Duration::from_millis(self.delay_ms)).await;
                    attempt += 1;
                }
                Err(e) => {
                    error!("{name}: all {attempts} attempts failed: {e}");
                    return Err(RetryError::Exhausted { attempts, last: e });
                }
            }
        }
    }
}
