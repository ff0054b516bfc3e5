//! Countable items: a payload paired with an occurrence count.
//!
//! Reductions fold equal-payload duplicates into one surviving item by
//! summing their counts. Ordering and equality always forward to the
//! payload; the count is bookkeeping and never part of identity.

use std::cmp::Ordering;
use std::fmt;

/// Capability for payload types that expose a size.
///
/// Selection logic that ranks payloads by length bounds on this trait
/// instead of assuming strings. For strings the size is in bytes.
pub trait Sizeable {
    fn size(&self) -> usize;
}

impl Sizeable for String {
    fn size(&self) -> usize {
        self.len()
    }
}

impl Sizeable for &str {
    fn size(&self) -> usize {
        self.len()
    }
}

/// A payload with an occurrence count, starting at 1.
///
/// Values move through the pipeline by exclusive ownership and are
/// deliberately not `Clone`: folding duplicates transfers counts, it
/// never duplicates payloads.
#[derive(Debug)]
pub struct Counted<T> {
    payload: T,
    /// Always >= 1.
    count: usize,
}

impl<T> Counted<T> {
    /// Wrap a raw value with an initial count of 1.
    pub fn new(payload: T) -> Self {
        Self { payload, count: 1 }
    }

    /// Fold another occurrence total into this item.
    pub fn add_count(&mut self, n: usize) {
        self.count += n;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Consume the item, keeping only the payload.
    pub fn into_payload(self) -> T {
        self.payload
    }
}

impl<T: Sizeable> Counted<T> {
    /// Size of the payload, per [`Sizeable`].
    pub fn payload_size(&self) -> usize {
        self.payload.size()
    }
}

// Identity is payload-only: items with equal payloads and different
// counts are the same key.
impl<T: PartialEq> PartialEq for Counted<T> {
    fn eq(&self, other: &Self) -> bool {
        self.payload == other.payload
    }
}

impl<T: Eq> Eq for Counted<T> {}

impl<T: PartialOrd> PartialOrd for Counted<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.payload.partial_cmp(&other.payload)
    }
}

impl<T: Ord> Ord for Counted<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.payload.cmp(&other.payload)
    }
}

impl<T: fmt::Display> fmt::Display for Counted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.payload.fmt(f)
    }
}
