//! Bounded waits for store calls.

use std::future::Future;
use std::time::Duration;

use crate::domain::repositories::StoreError;

/// Awaits `fut` for at most `limit`.
///
/// An elapsed deadline is reported as [`StoreError::Unavailable`]; the
/// pending call is dropped, not retried.
pub async fn with_deadline<T, F>(limit: Duration, fut: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, StoreError>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(timeout_ms = limit.as_millis() as u64, "Store call timed out");
            Err(StoreError::Unavailable(format!(
                "store did not answer within {}ms",
                limit.as_millis()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_passes_through_result() {
        let result =
            with_deadline(Duration::from_millis(50), async { Ok::<_, StoreError>(7) }).await;
        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_call_becomes_unavailable() {
        let result = with_deadline(Duration::from_millis(50), async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok::<_, StoreError>(())
        })
        .await;

        assert!(matches!(result, Err(StoreError::Unavailable(_))));
    }
}
