use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::error::AppError;

pub(super) async fn run_with_timeout<T, E, F, M>(
    timeout: Duration,
    timeout_operation: &'static str,
    future: F,
    map_error: M,
) -> Result<T, AppError>
where
    F: Future<Output = Result<T, E>>,
    M: FnOnce(E) -> AppError,
{
    match tokio::time::timeout(timeout, future).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(error)) => Err(map_error(error)),
        Err(_) => Err(AppError::timeout(timeout_operation, timeout.as_secs())),
    }
}

/// Wait for `delay`. Returns `false` if the token was cancelled first.
pub(super) async fn sleep_unless_cancelled(delay: Duration, cancel_token: CancellationToken) -> bool {
    tokio::select! {
        biased;
        () = cancel_token.cancelled() => false,
        () = tokio::time::sleep(delay) => true,
    }
}
