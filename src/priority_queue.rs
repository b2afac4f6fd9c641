//! A mutable-key priority queue: a multiset of `(key, value)` pairs ordered
//! by key, with a `modify_key` operation that relocates an existing entry.
//!
//! Plain `std::collections::BinaryHeap` has no notion of "find the entry
//! holding this value and change its priority" — that's exactly the
//! operation [`shortest_path`](crate::shortest_path) needs to relax a
//! vertex's distance. None of the common decrease-key implementations model
//! a true *multiset* with FIFO-broken ties at the same time (most collapse
//! on the value as if it were a map key), so this type is built directly on
//! `BinaryHeap` plus a side table of insertion slots rather than reused from
//! elsewhere.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// One logical entry: a lazily-deleted heap node pointing at a slot.
struct HeapEntry<K> {
    key: K,
    slot: usize,
    ticket: u64,
}

impl<K: Ord> PartialEq for HeapEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.ticket == other.ticket
    }
}
impl<K: Ord> Eq for HeapEntry<K> {}

impl<K: Ord> PartialOrd for HeapEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for HeapEntry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; invert key order to get a min-heap, and
        // among equal keys prefer the smaller (earlier) ticket, i.e. FIFO.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.ticket.cmp(&self.ticket))
    }
}

/// A slot holds the key/value/ticket for one insertion, or `None` value once
/// popped or relocated by `modify_key` (lazy deletion: the stale
/// `HeapEntry` is left in the heap and skipped when it surfaces).
struct Slot<K, T> {
    key: K,
    ticket: u64,
    value: Option<T>,
}

/// Ordered multiset of `(key, value)` pairs with `modify_key`.
///
/// `K` must be [`Ord`] `+ Clone`; `T` must be [`PartialEq`] so `modify_key`
/// can locate an entry by value. Duplicate `(key, value)` pairs are
/// permitted. Among entries with equal key, pops occur in insertion order
/// (FIFO).
pub struct PriorityQueue<K: Ord + Clone, T: PartialEq> {
    heap: BinaryHeap<HeapEntry<K>>,
    slots: Vec<Slot<K, T>>,
    next_ticket: u64,
    len: usize,
}

impl<K: Ord + Clone, T: PartialEq> Default for PriorityQueue<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone, T: PartialEq> PriorityQueue<K, T> {
    pub fn new() -> Self {
        PriorityQueue {
            heap: BinaryHeap::new(),
            slots: Vec::new(),
            next_ticket: 0,
            len: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Insert `(key, value)`. O(log n) amortised.
    pub fn push(&mut self, key: K, value: T) {
        let slot = self.slots.len();
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.slots.push(Slot {
            key: key.clone(),
            ticket,
            value: Some(value),
        });
        self.heap.push(HeapEntry { key, slot, ticket });
        self.len += 1;
        log::trace!("priority_queue: pushed into slot {}", slot);
    }

    /// Drop stale (already-popped-or-relocated) entries off the top of the
    /// heap so `self.heap.peek()` always reflects a live entry.
    fn prune(&mut self) {
        while let Some(top) = self.heap.peek() {
            if self.slots[top.slot].value.is_some() && self.slots[top.slot].ticket == top.ticket {
                break;
            }
            self.heap.pop();
        }
    }

    /// Reference the smallest-key entry without removing it.
    pub fn peek(&mut self) -> Option<(&K, &T)> {
        self.prune();
        let top = self.heap.peek()?;
        let value = self.slots[top.slot].value.as_ref()?;
        Some((&top.key, value))
    }

    /// Remove and return the smallest-key entry.
    pub fn pop(&mut self) -> Option<(K, T)> {
        self.prune();
        let top = self.heap.pop()?;
        let value = self.slots[top.slot].value.take()?;
        self.len -= 1;
        Some((top.key, value))
    }

    /// Locate the earliest-inserted live entry whose key equals `old_key`
    /// and value equals `value`, and relocate it to `new_key`.
    ///
    /// Returns `false` if no such entry exists. The relocated entry is
    /// assigned a fresh insertion ticket, so it sorts after any entries
    /// already queued at `new_key` — it does not retain its original
    /// relative position.
    pub fn modify_key(&mut self, old_key: &K, value: &T, new_key: K) -> bool {
        let mut found: Option<usize> = None;
        let mut best_ticket = u64::MAX;
        for (slot, s) in self.slots.iter().enumerate() {
            if s.key == *old_key {
                if let Some(v) = &s.value {
                    if v == value && s.ticket < best_ticket {
                        best_ticket = s.ticket;
                        found = Some(slot);
                    }
                }
            }
        }
        let slot = match found {
            Some(s) => s,
            None => return false,
        };
        let taken = match self.slots[slot].value.take() {
            Some(v) => v,
            None => return false,
        };
        self.len -= 1;
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.slots[slot].key = new_key.clone();
        self.slots[slot].ticket = ticket;
        self.heap.push(HeapEntry {
            key: new_key,
            slot,
            ticket,
        });
        self.slots[slot].value = Some(taken);
        self.len += 1;
        log::trace!("priority_queue: relocated slot {} to a new key", slot);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_nondecreasing_key_order() {
        let mut q = PriorityQueue::new();
        q.push(5, "e");
        q.push(1, "a");
        q.push(3, "c");
        q.push(2, "b");
        q.push(4, "d");
        let mut keys = Vec::new();
        while let Some((k, _)) = q.pop() {
            keys.push(k);
        }
        assert_eq!(keys, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn fifo_among_equal_keys() {
        let mut q = PriorityQueue::new();
        q.push(1, "a");
        q.push(1, "b");
        q.push(1, "c");
        assert_eq!(q.pop(), Some((1, "a")));
        assert_eq!(q.pop(), Some((1, "b")));
        assert_eq!(q.pop(), Some((1, "c")));
    }

    #[test]
    fn modify_key_relocates_and_reorders() {
        // Mirrors the upstream priority-queue test oracle's
        // "same key multivalue modifykey" scenario.
        let mut q = PriorityQueue::new();
        q.push(3, "A");
        q.push(1, "B");
        q.push(2, "C");
        assert!(q.modify_key(&1, &"B", 4));
        assert!(q.modify_key(&3, &"A", 1));
        let mut out = Vec::new();
        while let Some(entry) = q.pop() {
            out.push(entry);
        }
        assert_eq!(out, vec![(1, "A"), (2, "C"), (4, "B")]);
    }

    #[test]
    fn modify_key_missing_entry_returns_false() {
        let mut q: PriorityQueue<i32, &str> = PriorityQueue::new();
        q.push(1, "a");
        assert!(!q.modify_key(&1, &"nope", 2));
    }

    #[test]
    fn peek_does_not_remove() {
        let mut q = PriorityQueue::new();
        q.push(2, "b");
        q.push(1, "a");
        assert_eq!(q.peek(), Some((&1, &"a")));
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn empty_queue_returns_none() {
        let mut q: PriorityQueue<i32, &str> = PriorityQueue::new();
        assert!(q.is_empty());
        assert_eq!(q.pop(), None);
    }
}
