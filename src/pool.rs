//! Per-stage worker pool: one task per partition, one completion barrier.
//!
//! Workers share nothing while running; the only synchronization is the
//! await of every join handle before the next stage starts. Results come
//! back index-aligned with the partitions regardless of completion order.

use crate::error::{EngineError, EngineResult};
use crate::stage::Stage;
use std::any::Any;
use std::sync::Arc;
use tracing::debug;

/// Run `task` once per partition and collect results in partition order.
///
/// Each partition moves into its own task on the runtime's blocking pool,
/// which bounds real thread use even when the partition count exceeds
/// hardware parallelism. Awaiting the handles in spawn order forms the
/// stage barrier and keeps `results[i]` paired with `partitions[i]`.
///
/// A panic inside `task` fails the whole stage with
/// [`EngineError::WorkerFailure`]; there is no retry and no partial
/// result collection.
pub async fn run_stage<I, O, F>(
    stage: Stage,
    partitions: Vec<Vec<I>>,
    task: F,
) -> EngineResult<Vec<O>>
where
    I: Send + 'static,
    O: Send + 'static,
    F: Fn(Vec<I>) -> O + Send + Sync + 'static,
{
    let task = Arc::new(task);

    let handles: Vec<_> = partitions
        .into_iter()
        .map(|partition| {
            let task = Arc::clone(&task);
            tokio::task::spawn_blocking(move || task(partition))
        })
        .collect();

    debug!("{} stage: spawned {} workers", stage, handles.len());

    let mut results = Vec::with_capacity(handles.len());
    for (worker, handle) in handles.into_iter().enumerate() {
        match handle.await {
            Ok(output) => results.push(output),
            Err(join_error) => {
                let message = if join_error.is_panic() {
                    panic_message(join_error.into_panic())
                } else {
                    join_error.to_string()
                };
                return Err(EngineError::WorkerFailure {
                    stage,
                    worker,
                    message,
                });
            }
        }
    }

    Ok(results)
}

/// Best-effort recovery of a readable message from a panic payload.
fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
