//! Structured error types for the aggregation engine.

use crate::stage::Stage;
use thiserror::Error;

/// Convenience alias used throughout the engine.
pub type EngineResult<T> = std::result::Result<T, EngineError>;

/// Errors surfaced by engine construction and execution.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A worker count is out of range. Raised by validation before any
    /// partitioning runs, so the pipeline never discovers a zero fan-out
    /// mid-flight as a modulo fault.
    #[error("invalid configuration: {field} must be at least 1 (got {value})")]
    InvalidConfiguration { field: &'static str, value: usize },

    /// A worker panicked while executing a stage function. Fatal to the
    /// whole run: the stage barrier aborts with no retry and no partial
    /// output.
    #[error("worker {worker} panicked during {stage} stage: {message}")]
    WorkerFailure {
        stage: Stage,
        worker: usize,
        message: String,
    },
}
