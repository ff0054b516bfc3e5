//! Pipeline stage labels for the aggregation state machine.

use std::fmt;

/// A stage of one aggregation run.
///
/// Runs move strictly forward through the stages below, with a full
/// barrier between each pair: every worker of a stage completes before
/// the next stage begins, and no stage is ever revisited.
///
/// ```text
/// Split -> Map -> LocalSort -> Merge -> SplitForReduce -> Reduce -> Combine
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Round-robin fan-out of raw input into map partitions.
    Split,
    /// Parallel execution of the map function.
    Map,
    /// Per-partition ascending sort of the map output.
    LocalSort,
    /// K-way merge into one globally sorted sequence.
    Merge,
    /// Group-preserving split into reduce partitions.
    SplitForReduce,
    /// Parallel execution of the reduce function.
    Reduce,
    /// Single combine invocation over all reduce results.
    Combine,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Split => "split",
            Stage::Map => "map",
            Stage::LocalSort => "local-sort",
            Stage::Merge => "merge",
            Stage::SplitForReduce => "split-for-reduce",
            Stage::Reduce => "reduce",
            Stage::Combine => "combine",
        };
        f.write_str(name)
    }
}
