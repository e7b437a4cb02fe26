use std::future::Future;
use std::time::Duration;

use catalog_logging::catalog_debug;
use tokio::time::{sleep_until, Instant};

pub const DEFAULT_MIN_LOADING: Duration = Duration::from_millis(3000);

/// Runs `operation` to completion and holds its output back until at least
/// `minimum` has passed since the call.
///
/// The operation starts immediately and is never cut short; an operation
/// slower than `minimum` returns as soon as it finishes.
pub async fn with_minimum_duration<F>(operation: F, minimum: Duration) -> F::Output
where
    F: Future,
{
    let started = Instant::now();
    let output = operation.await;

    let elapsed = started.elapsed();
    if elapsed < minimum {
        catalog_debug!(
            "Pacing: operation took {:?}, holding for another {:?}",
            elapsed,
            minimum - elapsed
        );
        sleep_until(started + minimum).await;
    }
    output
}
