//! K-way merge of independently sorted partitions.
//!
//! Map workers sort their outputs locally; this module combines those
//! partitions into one globally sorted sequence with a min-heap of
//! sequence cursors. Cost is O(total log k) for k partitions, where
//! repeated pairwise merging would pay O(total * k).

mod cursor;

pub use cursor::Cursor;

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Merge ascending-sorted partitions into one ascending-sorted sequence.
///
/// The output is the multiset union of the inputs: total length is
/// preserved and nothing is deduplicated. Equal heads from different
/// partitions pop in heap order, which is not a documented tie order.
/// Empty partitions contribute nothing; an empty partition list yields an
/// empty sequence.
pub fn merge<T: Ord>(partitions: Vec<Vec<T>>) -> Vec<T> {
    let total: usize = partitions.iter().map(Vec::len).sum();

    let mut heap = BinaryHeap::with_capacity(partitions.len());
    for partition in partitions {
        let cursor = Cursor::new(partition);
        if cursor.has_next() {
            heap.push(Reverse(cursor));
        }
    }

    let mut merged = Vec::with_capacity(total);
    while let Some(Reverse(mut cursor)) = heap.pop() {
        if let Some(item) = cursor.extract() {
            merged.push(item);
        }
        if cursor.has_next() {
            heap.push(Reverse(cursor));
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_disjoint_sorted_partitions() {
        let merged = merge(vec![vec![1, 3, 5], vec![2, 4], vec![6]]);
        assert_eq!(merged, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn preserves_duplicates_across_partitions() {
        let merged = merge(vec![vec![1, 2, 2], vec![2, 3]]);
        assert_eq!(merged, vec![1, 2, 2, 2, 3]);
    }

    #[test]
    fn empty_partition_list_yields_empty_sequence() {
        let merged: Vec<i32> = merge(Vec::new());
        assert!(merged.is_empty());
    }

    #[test]
    fn all_empty_partitions_yield_empty_sequence() {
        let merged: Vec<i32> = merge(vec![Vec::new(), Vec::new(), Vec::new()]);
        assert!(merged.is_empty());
    }

    #[test]
    fn single_partition_passes_through() {
        let merged = merge(vec![vec![2, 4, 6, 8]]);
        assert_eq!(merged, vec![2, 4, 6, 8]);
    }

    #[test]
    fn handles_partitions_of_uneven_length() {
        let merged = merge(vec![vec![10], Vec::new(), vec![1, 2, 3, 4, 5], vec![3, 7]]);
        assert_eq!(merged, vec![1, 2, 3, 3, 4, 5, 7, 10]);
    }

    #[test]
    fn merges_string_partitions() {
        let merged = merge(vec![
            vec!["ant".to_string(), "cat".to_string()],
            vec!["bee".to_string(), "dog".to_string()],
        ]);
        assert_eq!(merged, vec!["ant", "bee", "cat", "dog"]);
    }

    #[test]
    fn matches_sort_of_concatenation() {
        let partitions = vec![
            vec![0, 5, 5, 12, 40],
            vec![1, 1, 2, 3],
            vec![5, 6, 7, 8, 9, 10, 11],
            vec![2],
        ];
        let mut expected: Vec<i32> = partitions.iter().flatten().copied().collect();
        expected.sort();

        assert_eq!(merge(partitions), expected);
    }
}
