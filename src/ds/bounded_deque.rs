//! Capacity-bounded deque with replace-on-reinsert semantics.
//!
//! Backs grid pages: a new value first removes every existing element that
//! matches it, is then pushed at the requested end, and any overflow is
//! evicted from the back.
//!
//! ## Architecture
//!
//! ```text
//!   insert(v, End::Front)                     insert(v, End::Back)
//!        │                                          │
//!        ▼                                          ▼
//!   front ─► [v] [a] [b] [c] [d] ◄─ back     front ─► [a] [b] [c] [v] ◄─ back
//!                              │                                   │
//!                  len > capacity? pop_back        len > capacity? pop_back
//! ```
//!
//! Eviction always removes from the back, whichever end the value went to.
//! A back insertion into a full deque therefore evicts the value it just
//! inserted.
//!
//! ## Performance
//! - `insert`: O(n) for the duplicate scan, O(1) amortized push and evict
//! - `iter`: O(n)
//!
//! `debug_validate_invariants()` is available in debug/test builds.
use std::collections::VecDeque;

/// Which end of the deque receives an inserted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum End {
    Front,
    Back,
}

/// Result of a single [`BoundedDeque::insert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertOutcome<T> {
    /// Number of matching elements removed before the push.
    pub removed: usize,
    /// Elements evicted from the back, oldest last.
    pub evicted: Vec<T>,
}

#[derive(Debug, Clone)]
/// Deque holding at most `capacity` elements.
pub struct BoundedDeque<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedDeque<T> {
    /// Creates an empty deque that holds at most `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        Self {
            // capacity is a user bound, not an allocation hint
            items: VecDeque::with_capacity(capacity.min(1024) + 1),
            capacity,
        }
    }

    /// Returns the configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every element matching `pred`; returns how many were removed.
    pub fn remove_matching<F>(&mut self, mut pred: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.items.len();
        self.items.retain(|item| !pred(item));
        before - self.items.len()
    }

    /// Inserts `value` at `end` after removing all elements that match it.
    ///
    /// `matches` is called with each existing element and decides whether it
    /// is a duplicate of `value`. Overflow is evicted from the back.
    pub fn insert<F>(&mut self, value: T, end: End, matches: F) -> InsertOutcome<T>
    where
        F: FnMut(&T) -> bool,
    {
        let removed = self.remove_matching(matches);
        match end {
            End::Front => self.items.push_front(value),
            End::Back => self.items.push_back(value),
        }

        let mut evicted = Vec::new();
        while self.items.len() > self.capacity {
            if let Some(old) = self.items.pop_back() {
                evicted.push(old);
            }
        }
        InsertOutcome { removed, evicted }
    }

    /// Front-to-back iterator.
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.items.iter()
    }

    /// Front-to-back mutable iterator.
    pub fn iter_mut(&mut self) -> std::collections::vec_deque::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Returns the front element.
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    /// Returns the back element.
    pub fn back(&self) -> Option<&T> {
        self.items.back()
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        assert!(self.items.len() <= self.capacity);
        if self.capacity == 0 {
            assert!(self.items.is_empty());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(deque: &BoundedDeque<&'static str>) -> Vec<&'static str> {
        deque.iter().copied().collect()
    }

    #[test]
    fn front_inserts_evict_oldest() {
        let mut deque = BoundedDeque::new(3);
        for v in ["a", "b", "c"] {
            deque.insert(v, End::Front, |x| *x == v);
        }
        assert_eq!(contents(&deque), ["c", "b", "a"]);

        let outcome = deque.insert("d", End::Front, |x| *x == "d");
        assert_eq!(outcome.evicted, vec!["a"]);
        assert_eq!(contents(&deque), ["d", "c", "b"]);
    }

    #[test]
    fn back_insert_into_full_deque_evicts_itself() {
        let mut deque = BoundedDeque::new(2);
        deque.insert("a", End::Back, |x| *x == "a");
        deque.insert("b", End::Back, |x| *x == "b");

        let outcome = deque.insert("c", End::Back, |x| *x == "c");
        assert_eq!(outcome.evicted, vec!["c"]);
        assert_eq!(contents(&deque), ["a", "b"]);
    }

    #[test]
    fn reinsert_moves_to_requested_end() {
        let mut deque = BoundedDeque::new(4);
        for v in ["a", "b", "c"] {
            deque.insert(v, End::Back, |x| *x == v);
        }
        let outcome = deque.insert("c", End::Front, |x| *x == "c");
        assert_eq!(outcome.removed, 1);
        assert!(outcome.evicted.is_empty());
        assert_eq!(contents(&deque), ["c", "a", "b"]);
    }

    #[test]
    fn removes_every_match_not_just_first() {
        let mut deque = BoundedDeque::new(5);
        // seed duplicates through a predicate that never matches
        for v in ["x", "y", "x", "x"] {
            deque.insert(v, End::Back, |_| false);
        }
        let outcome = deque.insert("x", End::Front, |v| *v == "x");
        assert_eq!(outcome.removed, 3);
        assert_eq!(contents(&deque), ["x", "y"]);
    }

    #[test]
    fn zero_capacity_is_always_empty() {
        let mut deque = BoundedDeque::new(0);
        let outcome = deque.insert("a", End::Front, |_| false);
        assert_eq!(outcome.evicted, vec!["a"]);
        assert!(deque.is_empty());
        deque.debug_validate_invariants();
    }

    #[test]
    fn front_and_back_accessors() {
        let mut deque = BoundedDeque::new(3);
        assert_eq!(deque.front(), None);
        deque.insert("a", End::Back, |_| false);
        deque.insert("b", End::Back, |_| false);
        assert_eq!(deque.front(), Some(&"a"));
        assert_eq!(deque.back(), Some(&"b"));
        deque.clear();
        assert!(deque.is_empty());
    }
}
