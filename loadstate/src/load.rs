use crate::{IntoLoadResult, LoadAction, LoadError};
use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Runs `operation` and packages its outcome as `ReceiveLoaded`, ready to be
/// dispatched back into the reducer.
pub async fn load<T, E, R, Fut>(operation: Fut) -> LoadAction<T, E>
where
    Fut: Future<Output = R>,
    R: IntoLoadResult<T, E>,
{
    LoadAction::ReceiveLoaded(operation.await.into_load_result())
}

/// Like [`load`], but gives up after `timeout` and reports [`LoadError::Timeout`].
pub async fn load_with_timeout<T, E, R, Fut>(operation: Fut, timeout: Duration) -> LoadAction<T, E>
where
    Fut: Future<Output = R>,
    R: IntoLoadResult<T, E>,
    E: From<LoadError>,
{
    let result = match tokio::time::timeout(timeout, operation).await {
        Ok(output) => output.into_load_result(),
        Err(_) => Err(E::from(LoadError::Timeout)),
    };
    LoadAction::ReceiveLoaded(result)
}

/// Like [`load`], but reports [`LoadError::Cancelled`] if `token` fires before
/// the operation completes.
pub async fn load_cancellable<T, E, R, Fut>(
    cancellation_token: CancellationToken,
    operation: Fut,
) -> LoadAction<T, E>
where
    Fut: Future<Output = R>,
    R: IntoLoadResult<T, E>,
    E: From<LoadError>,
{
    let result = tokio::select! {
        biased;
        _ = cancellation_token.cancelled() => Err(E::from(LoadError::Cancelled)),
        output = operation => output.into_load_result(),
    };
    LoadAction::ReceiveLoaded(result)
}
