//! # Quern
//!
//! A single-process, multi-threaded batch aggregation engine built on the
//! map/sort/merge/group/reduce pattern. Callers supply pure map, reduce,
//! and combine functions plus a worker fan-out; the engine parallelizes
//! the map and reduce stages and re-groups keys between them so every
//! occurrence of a key is reduced in exactly one invocation.
//!
//! ## Usage
//!
//! ```bash
//! quern --src tokens.txt [-m map-workers] [-r reduce-workers]
//! ```
//!
//! ## Modules
//!
//! - `config` - worker fan-out configuration with validation
//! - `counted` - countable items: payload plus occurrence count
//! - `engine` - the orchestrator driving a run through its stages
//! - `error` - structured engine errors
//! - `merge` - k-way merge of sorted partitions via a cursor min-heap
//! - `partition` - round-robin fan-out and group-preserving splits
//! - `pool` - per-stage worker pool with a completion barrier
//! - `prefix` - demo reduction: minimal identifying prefix size
//! - `stage` - pipeline stage labels
//! - `tokens` - demo input acquisition
pub mod config;
pub mod counted;
pub mod engine;
pub mod error;
pub mod merge;
pub mod partition;
pub mod pool;
pub mod prefix;
pub mod stage;
pub mod tokens;

pub use config::EngineConfig;
pub use counted::{Counted, Sizeable};
pub use engine::Engine;
pub use error::{EngineError, EngineResult};
pub use stage::Stage;
