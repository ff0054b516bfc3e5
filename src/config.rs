//! Worker fan-out configuration for one engine run.

use crate::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};

/// How many partitions, and therefore workers, the map and reduce stages
/// each get. Fixed for the duration of a run.
///
/// The counts are independent knobs: map fan-out is chosen for raw input
/// volume, reduce fan-out for the expected number of distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of map partitions.
    #[serde(default = "default_workers")]
    pub map_workers: usize,
    /// Number of reduce partitions.
    #[serde(default = "default_workers")]
    pub reduce_workers: usize,
}

fn default_workers() -> usize {
    3
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            map_workers: default_workers(),
            reduce_workers: default_workers(),
        }
    }
}

impl EngineConfig {
    /// Check both worker counts. Runs at engine construction so a zero
    /// fan-out is rejected before any stage touches data.
    pub fn validate(&self) -> EngineResult<()> {
        if self.map_workers == 0 {
            return Err(EngineError::InvalidConfiguration {
                field: "map_workers",
                value: self.map_workers,
            });
        }
        if self.reduce_workers == 0 {
            return Err(EngineError::InvalidConfiguration {
                field: "reduce_workers",
                value: self.reduce_workers,
            });
        }
        Ok(())
    }
}
