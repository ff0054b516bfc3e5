//! Partitioning strategies for the two parallel stages.
//!
//! The map side uses a content-oblivious round-robin fan-out; the reduce
//! side uses a group-preserving split that never separates occurrences of
//! the same key. Both always return exactly as many buckets as workers,
//! padding with empty buckets when the input runs short.

mod fanout;
mod grouped;

pub use fanout::fan_out;
pub use grouped::split_grouped;
