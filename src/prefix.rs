//! Demonstration reduction: minimal identifying prefix size of a token set.
//!
//! The map function expands every token into all of its non-empty
//! prefixes, the reduce side folds duplicate prefixes into counted items
//! and keeps the best candidate per partition, and the combine picks the
//! overall winner. The reported size is one character past the longest
//! prefix occurring more than once: the shortest length at which no two
//! token occurrences still look alike.

use crate::counted::Counted;
use std::cmp::Ordering;

/// Expand each token into all of its non-empty prefixes, each wrapped
/// with an occurrence count of 1.
///
/// Prefixes are cut at character boundaries, so multi-byte tokens expand
/// into valid strings; prefix sizes are still measured in bytes.
pub fn expand_prefixes(tokens: Vec<String>) -> Vec<Counted<String>> {
    let mut prefixes = Vec::new();
    for token in tokens {
        for (index, ch) in token.char_indices() {
            let end = index + ch.len_utf8();
            prefixes.push(Counted::new(token[..end].to_string()));
        }
    }
    prefixes
}

/// Fold a sorted, group-complete partition of prefixes and return its
/// best candidate, or `None` for an empty partition.
///
/// Every occurrence of a prefix arrives in this partition, so duplicates
/// are adjacent and folding sums each prefix's count exactly once.
pub fn reduce_prefixes(prefixes: Vec<Counted<String>>) -> Option<Counted<String>> {
    select(fold_adjacent(prefixes))
}

/// Pick the overall winner from the per-partition candidates.
///
/// Candidate payloads are distinct because reduce partitions cover
/// disjoint key ranges, so the maximum here equals the maximum over all
/// folded prefixes regardless of how they were partitioned.
pub fn combine_candidates(candidates: Vec<Option<Counted<String>>>) -> Option<Counted<String>> {
    select(candidates.into_iter().flatten())
}

/// The reported size: one past the winner when it is genuinely shared,
/// otherwise 1, since a single leading character already tells every
/// token apart. An absent winner (empty input) also reports 1.
pub fn identifying_prefix_size(winner: Option<&Counted<String>>) -> usize {
    match winner {
        Some(item) if item.count() > 1 => item.payload_size() + 1,
        _ => 1,
    }
}

/// Sum counts of equal-payload neighbors into one surviving item each.
fn fold_adjacent(prefixes: Vec<Counted<String>>) -> Vec<Counted<String>> {
    let mut folded: Vec<Counted<String>> = Vec::new();
    for prefix in prefixes {
        match folded.last_mut() {
            Some(last) if *last == prefix => last.add_count(prefix.count()),
            _ => folded.push(prefix),
        }
    }
    folded
}

fn select(items: impl IntoIterator<Item = Counted<String>>) -> Option<Counted<String>> {
    items.into_iter().max_by(candidate_order)
}

// Duplicated beats unique, then longer beats shorter, then payload order
// breaks remaining ties. A total order, so the winner is independent of
// arrival and partition order.
fn candidate_order(a: &Counted<String>, b: &Counted<String>) -> Ordering {
    let a_key = (a.count() > 1, a.payload_size());
    let b_key = (b.count() > 1, b.payload_size());
    a_key
        .cmp(&b_key)
        .then_with(|| a.payload().cmp(b.payload()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counted(payload: &str, count: usize) -> Counted<String> {
        let mut item = Counted::new(payload.to_string());
        if count > 1 {
            item.add_count(count - 1);
        }
        item
    }

    fn payloads(items: &[Counted<String>]) -> Vec<&str> {
        items.iter().map(|i| i.payload().as_str()).collect()
    }

    #[test]
    fn expands_every_non_empty_prefix() {
        let prefixes = expand_prefixes(vec!["abc".to_string()]);
        assert_eq!(payloads(&prefixes), ["a", "ab", "abc"]);
        assert!(prefixes.iter().all(|p| p.count() == 1));
    }

    #[test]
    fn expansion_respects_character_boundaries() {
        let prefixes = expand_prefixes(vec!["día".to_string()]);
        assert_eq!(payloads(&prefixes), ["d", "dí", "día"]);
        // Sizes stay byte-measured.
        let sizes: Vec<usize> = prefixes.iter().map(Counted::payload_size).collect();
        assert_eq!(sizes, [1, 3, 4]);
    }

    #[test]
    fn empty_token_list_expands_to_nothing() {
        assert!(expand_prefixes(Vec::new()).is_empty());
    }

    #[test]
    fn folding_sums_adjacent_duplicates() {
        let folded = fold_adjacent(vec![
            counted("a", 1),
            counted("a", 1),
            counted("a", 2),
            counted("b", 1),
        ]);
        assert_eq!(payloads(&folded), ["a", "b"]);
        assert_eq!(folded[0].count(), 4);
        assert_eq!(folded[1].count(), 1);
    }

    #[test]
    fn duplicated_prefix_beats_longer_unique_one() {
        let winner = select(vec![counted("longunique", 1), counted("ab", 3)]).unwrap();
        assert_eq!(winner.payload(), "ab");
    }

    #[test]
    fn longest_duplicated_prefix_wins_among_duplicates() {
        let winner = select(vec![
            counted("a", 5),
            counted("abc", 2),
            counted("ab", 3),
        ])
        .unwrap();
        assert_eq!(winner.payload(), "abc");
    }

    #[test]
    fn all_unique_selects_the_longest() {
        let winner = select(vec![
            counted("xy", 1),
            counted("abcd", 1),
            counted("z", 1),
        ])
        .unwrap();
        assert_eq!(winner.payload(), "abcd");
    }

    #[test]
    fn equal_length_ties_resolve_by_payload_order() {
        let winner = select(vec![counted("ba", 2), counted("ab", 2)]).unwrap();
        assert_eq!(winner.payload(), "ba");
    }

    #[test]
    fn reduce_of_empty_partition_is_none() {
        assert!(reduce_prefixes(Vec::new()).is_none());
    }

    #[test]
    fn combine_skips_empty_partitions() {
        let winner = combine_candidates(vec![None, Some(counted("ab", 2)), None]).unwrap();
        assert_eq!(winner.payload(), "ab");
        assert!(combine_candidates(vec![None, None]).is_none());
    }

    #[test]
    fn reported_size_is_one_past_a_shared_winner() {
        let winner = counted("ab", 3);
        assert_eq!(identifying_prefix_size(Some(&winner)), 3);
    }

    #[test]
    fn unique_winner_reports_size_one() {
        let winner = counted("abcdef", 1);
        assert_eq!(identifying_prefix_size(Some(&winner)), 1);
    }

    #[test]
    fn absent_winner_reports_size_one() {
        assert_eq!(identifying_prefix_size(None), 1);
    }
}
