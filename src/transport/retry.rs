use std::future::Future;
use std::time::Duration;

use log::warn;
use tokio::time::sleep;

use crate::transport::TransportError;

/// Re-runs a failed read a bounded number of times.
#[derive(Clone, Debug)]
pub struct RetryPolicy {
    /// Attempts after the first one.
    max_retries: u32,
    initial_delay: Duration,
    max_delay: Duration,
    exponential_base: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(2),
            exponential_base: 2.0,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, initial_delay: Duration) -> Self {
        Self {
            max_retries,
            initial_delay,
            ..Self::default()
        }
    }

    /// Single attempt, no retries.
    pub fn none() -> Self {
        Self::new(0, Duration::ZERO)
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub async fn execute<F, Fut, T>(&self, mut operation: F) -> Result<T, TransportError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, TransportError>>,
    {
        let mut attempt = 0;
        let mut delay = self.initial_delay;

        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(err) if !err.is_transient() || attempt >= self.max_retries => {
                    if attempt > 0 {
                        warn!("Request failed after {} attempts: {err}", attempt + 1);
                    }
                    return Err(err);
                }
                Err(err) => {
                    warn!("Request failed (attempt {}): {err}, retrying...", attempt + 1);
                    sleep(delay).await;
                    delay = std::cmp::min(
                        self.max_delay,
                        Duration::from_secs_f64(delay.as_secs_f64() * self.exponential_base),
                    );
                    attempt += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    #[tokio::test]
    async fn client_errors_on_the_server_are_not_retried() {
        let calls = AtomicU32::new(0);
        let not_found = TransportError::Server {
            status: 404,
            message: "no route".to_string(),
        };
        let result: Result<(), _> = RetryPolicy::default()
            .execute(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                let err = not_found.clone();
                async move { Err(err) }
            })
            .await;

        assert_eq!(result, Err(not_found));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn client_side_failures_are_retried() {
        let calls = AtomicU32::new(0);
        let result: Result<(), _> = RetryPolicy::default()
            .execute(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(TransportError::Client("connection reset".to_string())) }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    fn failure() -> TransportError {
        TransportError::Server {
            status: 503,
            message: "unavailable".to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn gives_up_after_two_retries() {
        let calls = AtomicU32::new(0);
        let result: Result<(), _> = RetryPolicy::default()
            .execute(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(failure()) }
            })
            .await;

        assert_eq!(result, Err(failure()));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn stops_on_first_success() {
        let calls = AtomicU32::new(0);
        let result = RetryPolicy::default()
            .execute(|| {
                let attempt = calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if attempt == 0 {
                        Err(failure())
                    } else {
                        Ok(attempt)
                    }
                }
            })
            .await;

        assert_eq!(result, Ok(1));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn none_makes_a_single_attempt() {
        let calls = AtomicU32::new(0);
        let result: Result<(), _> = RetryPolicy::none()
            .execute(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(failure()) }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
