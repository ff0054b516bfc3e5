//! Group-preserving split of a sorted sequence across reduce partitions.
//!
//! The reduce stage must see every occurrence of a key in a single
//! invocation, so bucket boundaries may never land inside a run of equal
//! elements. Balance is secondary: a dominant key legitimately produces a
//! dominant bucket and no rebalancing is attempted.

/// Split an ascending-sorted sequence into exactly `parts` contiguous
/// buckets of roughly equal size.
///
/// A bucket closes once it reaches the target size of `ceil(len / parts)`
/// elements, but a run of equal elements is always absorbed whole, even
/// when that overshoots the target. The final bucket takes any remainder;
/// with fewer distinct keys than `parts`, trailing buckets stay empty.
///
/// `parts` must be at least 1 (guaranteed upstream by configuration
/// validation) and the input must already be sorted.
pub fn split_grouped<T: PartialEq>(input: Vec<T>, parts: usize) -> Vec<Vec<T>> {
    let target = input.len().div_ceil(parts);

    let mut buckets: Vec<Vec<T>> = Vec::with_capacity(parts);
    let mut current: Vec<T> = Vec::new();
    let mut run: Vec<T> = Vec::new();

    for item in input {
        if run.last().is_some_and(|head| *head != item) {
            // The run just ended: commit it, closing the bucket once it
            // reaches the target size.
            current.append(&mut run);
            if current.len() >= target {
                buckets.push(std::mem::take(&mut current));
            }
        }
        run.push(item);
    }
    current.append(&mut run);
    if !current.is_empty() {
        buckets.push(current);
    }

    // Closed buckets hold at least `target` elements each, so at most
    // `parts` buckets exist here; padding restores the exact count.
    buckets.resize_with(parts, Vec::new);
    buckets
}
