//! The pause shown before an estimate is revealed.
//!
//! Purely presentational: the estimate is already computed when the pause
//! starts, and cancelling it only means the result is not shown.

use std::future::{Future, pending};
use std::time::Duration;

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Processing {
    Completed,
    Cancelled,
}

/// Waits for `delay` unless `cancel` resolves first.
pub async fn processing_pause<F>(
    delay: Duration,
    cancel: F,
) -> Processing
where
    F: Future<Output = ()>,
{
    if delay.is_zero() {
        return Processing::Completed;
    }

    debug!(delay_ms = delay.as_millis() as u64, "processing estimate");
    tokio::select! {
        _ = tokio::time::sleep(delay) => Processing::Completed,
        _ = cancel => Processing::Cancelled,
    }
}

/// Resolves on Ctrl-C. Never resolves if the signal handler cannot be
/// installed.
pub async fn ctrl_c() {
    if tokio::signal::ctrl_c().await.is_err() {
        pending::<()>().await;
    }
}
