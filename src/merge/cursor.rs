//! Sequence cursors: incremental extraction from an owned sorted partition.

use std::cmp::Ordering;

/// A move-only cursor over one sorted partition.
///
/// The merge heap orders cursors by their current head, so popping the
/// heap always yields the cursor holding the globally smallest unread
/// element. A cursor lives only for the duration of one merge call.
#[derive(Debug)]
pub struct Cursor<T> {
    head: Option<T>,
    rest: std::vec::IntoIter<T>,
}

impl<T> Cursor<T> {
    /// Take ownership of a partition and position the cursor on its first
    /// element.
    pub fn new(partition: Vec<T>) -> Self {
        let mut rest = partition.into_iter();
        Self {
            head: rest.next(),
            rest,
        }
    }

    /// Whether unread elements remain.
    pub fn has_next(&self) -> bool {
        self.head.is_some()
    }

    /// The current head, without consuming it.
    pub fn peek(&self) -> Option<&T> {
        self.head.as_ref()
    }

    /// Consume and return the head, advancing to the next element.
    pub fn extract(&mut self) -> Option<T> {
        let item = self.head.take();
        self.head = self.rest.next();
        item
    }
}

// Cursors compare by their heads so a `Reverse`-wrapped heap pops the
// cursor with the smallest unread element first. Exhausted cursors order
// after live ones; the merge never re-inserts them anyway.
impl<T: Ord> Ord for Cursor<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.head, &other.head) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl<T: Ord> PartialOrd for Cursor<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> PartialEq for Cursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Ord> Eq for Cursor<T> {}
