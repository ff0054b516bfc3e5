//! The orchestrator: drives one aggregation run through its stages.
//!
//! A run is a strict forward pipeline with a full barrier between stages:
//!
//! ```text
//! configured --> split --> map --> local-sort --> merge
//!                                                   |
//!                                                   v
//!        done <-- combine <-- reduce <-- split-for-reduce
//! ```
//!
//! Construction validates the worker counts, so a running pipeline never
//! observes a zero fan-out. A worker panic in either parallel stage
//! surfaces as [`EngineError::WorkerFailure`](crate::EngineError) and the
//! run fails with no partial output; no stage is retried or revisited.

use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::merge::merge;
use crate::partition::{fan_out, split_grouped};
use crate::pool;
use crate::stage::Stage;
use std::time::Instant;
use tracing::{debug, info};

/// A configured aggregation engine.
///
/// The engine holds no per-run state: worker counts are fixed at
/// construction and shared by every run, and runs leave nothing behind.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Create an engine with the given map and reduce fan-out. Either
    /// count being zero is an invalid configuration.
    pub fn new(map_workers: usize, reduce_workers: usize) -> EngineResult<Self> {
        Self::with_config(EngineConfig {
            map_workers,
            reduce_workers,
        })
    }

    /// Create an engine from a prebuilt configuration.
    pub fn with_config(config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the full pipeline over `input`.
    ///
    /// `map_fn` turns one raw partition into key items, `reduce_fn` folds
    /// one group-complete partition into a partial result, and
    /// `combine_fn` joins the partial results on the caller's task. Both
    /// parallel functions must be pure with respect to their partition:
    /// the engine guarantees every occurrence of a key reaches exactly
    /// one reduce invocation, and with order-insensitive functions the
    /// result does not depend on the worker counts.
    pub async fn run<T, U, V, W, M, R, C>(
        &self,
        input: Vec<T>,
        map_fn: M,
        reduce_fn: R,
        combine_fn: C,
    ) -> EngineResult<W>
    where
        T: Send + 'static,
        U: Ord + Send + 'static,
        V: Send + 'static,
        M: Fn(Vec<T>) -> Vec<U> + Send + Sync + 'static,
        R: Fn(Vec<U>) -> V + Send + Sync + 'static,
        C: FnOnce(Vec<V>) -> W,
    {
        let started = Instant::now();
        info!(
            "starting run: {} input items, {} map workers, {} reduce workers",
            input.len(),
            self.config.map_workers,
            self.config.reduce_workers
        );

        let partitions = fan_out(input, self.config.map_workers);
        debug!(
            "{} stage complete: {} partitions",
            Stage::Split,
            partitions.len()
        );

        let mut mapped = pool::run_stage(Stage::Map, partitions, map_fn).await?;
        debug!("{} stage complete", Stage::Map);

        for bucket in &mut mapped {
            bucket.sort();
        }
        debug!("{} stage complete", Stage::LocalSort);

        let merged = merge(mapped);
        debug!("{} stage complete: {} items", Stage::Merge, merged.len());

        let groups = split_grouped(merged, self.config.reduce_workers);
        debug!(
            "{} stage complete: {} partitions",
            Stage::SplitForReduce,
            groups.len()
        );

        let reduced = pool::run_stage(Stage::Reduce, groups, reduce_fn).await?;
        debug!("{} stage complete", Stage::Reduce);

        let output = combine_fn(reduced);
        debug!("{} stage complete", Stage::Combine);

        info!("run finished in {:.3}s", started.elapsed().as_secs_f64());
        Ok(output)
    }
}
