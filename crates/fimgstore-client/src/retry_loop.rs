//! Bounded retry driver for delete attempts.
//!
//! The driver only ever retries attempts that failed before a status code
//! was known. A completed exchange is final whatever its status; after a
//! transport failure the status is unknown and is never read.

use std::future::Future;

use fimgstore_core::RetryPolicy;
use tokio::time::sleep;

use crate::error::ClientError;

/// What a single attempt produced.
#[derive(Debug)]
pub(crate) enum AttemptOutcome {
    /// The exchange completed and the status code is known. Terminal.
    Completed { status: u16 },
    /// The attempt failed before a status was known.
    Retryable { cause: ClientError },
}

/// Drive `attempt` under `policy`, sleeping `policy.backoff` between
/// attempts. Returns the final status code, or `RetriesExhausted` wrapping
/// the last cause once the budget is spent. The attempt closure receives
/// the 1-based attempt number.
pub(crate) async fn run_with_retries<F, Fut>(
    policy: &RetryPolicy,
    mut attempt: F,
) -> Result<u16, ClientError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = AttemptOutcome>,
{
    let mut attempts = 0;

    loop {
        attempts += 1;
        match attempt(attempts).await {
            AttemptOutcome::Completed { status } => return Ok(status),
            AttemptOutcome::Retryable { cause } => {
                if attempts >= policy.max_attempts() {
                    return Err(ClientError::RetriesExhausted {
                        attempts,
                        source: Box::new(cause),
                    });
                }
                tracing::info!(
                    attempt = attempts,
                    backoff_ms = policy.backoff.as_millis() as u64,
                    error = %cause,
                    "attempt failed, retrying"
                );
                sleep(policy.backoff).await;
            }
        }
    }
}
