//! Round-robin fan-out of raw input across map partitions.

/// Deal a sequence into exactly `parts` buckets, element `i` landing in
/// bucket `i % parts`. Each bucket preserves the relative order of its
/// elements, and the input needs no ordering of its own.
///
/// `parts` must be at least 1; configuration validation guarantees this
/// before any split runs. Short inputs leave trailing buckets empty so
/// every map worker still receives a partition.
pub fn fan_out<T>(input: Vec<T>, parts: usize) -> Vec<Vec<T>> {
    let mut buckets: Vec<Vec<T>> = (0..parts).map(|_| Vec::new()).collect();
    for (index, item) in input.into_iter().enumerate() {
        buckets[index % parts].push(item);
    }
    buckets
}
