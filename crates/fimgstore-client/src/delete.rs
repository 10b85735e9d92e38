//! Delete operations with bounded retry.
//!
//! Deletion is a GET on the delete action URI. A completed exchange is
//! final whatever its status code; only attempts that fail before a status
//! is known (connect failure, timeout) are retried, with a fixed pause
//! between attempts.

use fimgstore_core::{FileKey, RetryPolicy};
use tokio::time::sleep;

use crate::error::ClientError;
use crate::retry_loop::{run_with_retries, AttemptOutcome};
use crate::FimgStoreClient;

/// Outcome of one key in a batch deletion.
#[derive(Debug)]
pub struct KeyOutcome {
    pub file_key: FileKey,
    /// `Ok(true)` deleted, `Ok(false)` the server completed the exchange
    /// but did not delete, `Err` the attempts themselves failed.
    pub result: Result<bool, ClientError>,
}

/// Aggregate of a best-effort batch deletion.
#[derive(Debug, Default)]
pub struct BatchDeleteResult {
    pub outcomes: Vec<KeyOutcome>,
}

impl BatchDeleteResult {
    /// Keys not confirmed deleted, whether the server said no or the
    /// attempts errored out.
    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| !matches!(outcome.result, Ok(true)))
            .count()
    }

    pub fn is_complete_success(&self) -> bool {
        self.failed_count() == 0
    }
}

impl FimgStoreClient {
    /// Delete the file with this key, retrying transport failures per
    /// `policy`. Returns `Ok(true)` when the server answered below 300 and
    /// `Ok(false)` for any other completed status; a completed exchange is
    /// never retried.
    pub async fn delete_file(
        &self,
        key: &FileKey,
        policy: &RetryPolicy,
    ) -> Result<bool, ClientError> {
        let uri = self.uri_builder().delete_uri(key)?;
        tracing::debug!(uri = %uri, "delete");

        let status = run_with_retries(policy, |attempt| {
            let request = self.get(uri.clone());
            async move {
                match request.send().await {
                    Ok(response) => {
                        let status = response.status().as_u16();
                        tracing::debug!(attempt = attempt, status = status, "delete response");
                        AttemptOutcome::Completed { status }
                    }
                    Err(e) => {
                        tracing::error!(attempt = attempt, error = %e, "delete attempt failed");
                        AttemptOutcome::Retryable { cause: e.into() }
                    }
                }
            }
        })
        .await?;

        Ok(status < 300)
    }

    /// Delete a batch of files sequentially, best effort: every per-key
    /// failure is recorded and processing continues. The aggregate failure
    /// count covers both refused deletions and errored attempts.
    pub async fn delete_files(
        &self,
        keys: &[FileKey],
        policy: &RetryPolicy,
    ) -> BatchDeleteResult {
        let mut outcomes = Vec::with_capacity(keys.len());

        for (index, key) in keys.iter().enumerate() {
            tracing::debug!(key = %key, "batch delete");
            let result = self.delete_file(key, policy).await;
            match &result {
                Ok(true) => tracing::debug!(key = %key, "deleted"),
                Ok(false) => tracing::error!(key = %key, "file could not be deleted"),
                Err(e) => tracing::error!(key = %key, error = %e, "failed to delete file"),
            }
            outcomes.push(KeyOutcome {
                file_key: key.clone(),
                result,
            });

            // Do not flood the store.
            if index + 1 < keys.len() {
                sleep(self.batch_pause()).await;
            }
        }

        let batch = BatchDeleteResult { outcomes };
        let fails = batch.failed_count();
        if fails != 0 {
            tracing::error!(fails = fails, "batch delete left files on the server");
        }
        batch
    }
}
