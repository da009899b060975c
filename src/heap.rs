//! Binary min-heap over the dense vertex domain `1..=capacity`.
//!
//! The heap stores vertex ids only. Priorities live in a slice owned by the
//! caller (indexed by vertex) and are borrowed by every operation, so an
//! algorithm can lower `priority[v]` itself and then call
//! [`IndexedMinHeap::decrease_key_notify`] to repair the order.
//!
//! Slot 0 of the heap array is unused; `pos[v] == 0` means `v` is not queued.

use crate::error::HeapError;
use crate::graph::Vertex;

#[derive(Debug, Clone)]
pub struct IndexedMinHeap {
    slots: Vec<Vertex>,
    pos: Vec<usize>,
    len: usize,
}

impl IndexedMinHeap {
    pub fn new(capacity: usize) -> Self {
        IndexedMinHeap {
            slots: vec![0; capacity + 1],
            pos: vec![0; capacity + 1],
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, v: Vertex) -> bool {
        self.position(v).is_some()
    }

    /// Current heap slot of `v`, if queued.
    pub fn position(&self, v: Vertex) -> Option<usize> {
        self.pos.get(v).copied().filter(|&k| k != 0)
    }

    /// Occupied slots `1..=len`, in heap order.
    pub fn slots(&self) -> &[Vertex] {
        &self.slots[1..=self.len]
    }

    pub fn insert<P: Ord>(&mut self, v: Vertex, priority: &[P]) -> Result<(), HeapError> {
        self.check_domain(v)?;
        if self.len == self.capacity() {
            return Err(HeapError::Overflow {
                capacity: self.capacity(),
            });
        }
        if self.contains(v) {
            return Err(HeapError::AlreadyQueued(v));
        }
        self.len += 1;
        self.slots[self.len] = v;
        self.sift_up(self.len, priority);
        Ok(())
    }

    pub fn remove_min<P: Ord>(&mut self, priority: &[P]) -> Result<Vertex, HeapError> {
        if self.is_empty() {
            return Err(HeapError::Underflow);
        }
        let min = self.slots[1];
        self.pos[min] = 0;
        let last = self.slots[self.len];
        self.slots[self.len] = 0;
        self.len -= 1;
        if self.len > 0 {
            self.slots[1] = last;
            self.sift_down(1, priority);
        }
        Ok(min)
    }

    /// Restores the heap after the caller lowered `priority[v]`.
    ///
    /// Raising a priority and then calling this leaves the heap unordered;
    /// only decreases are supported.
    pub fn decrease_key_notify<P: Ord>(
        &mut self,
        v: Vertex,
        priority: &[P],
    ) -> Result<(), HeapError> {
        self.check_domain(v)?;
        let k = self.position(v).ok_or(HeapError::NotQueued(v))?;
        self.sift_up(k, priority);
        Ok(())
    }

    /// Inserts `v` on first discovery, otherwise sifts it up from its slot.
    pub fn push_or_decrease<P: Ord>(&mut self, v: Vertex, priority: &[P]) -> Result<(), HeapError> {
        if self.contains(v) {
            self.decrease_key_notify(v, priority)
        } else {
            self.insert(v, priority)
        }
    }

    fn check_domain(&self, v: Vertex) -> Result<(), HeapError> {
        if v == 0 || v > self.capacity() {
            return Err(HeapError::OutOfRange {
                vertex: v,
                capacity: self.capacity(),
            });
        }
        Ok(())
    }

    fn sift_up<P: Ord>(&mut self, mut k: usize, priority: &[P]) {
        let v = self.slots[k];
        while k > 1 && priority[v] < priority[self.slots[k / 2]] {
            self.slots[k] = self.slots[k / 2];
            self.pos[self.slots[k]] = k;
            k /= 2;
        }
        self.slots[k] = v;
        self.pos[v] = k;
    }

    fn sift_down<P: Ord>(&mut self, mut k: usize, priority: &[P]) {
        let v = self.slots[k];
        while 2 * k <= self.len {
            let mut j = 2 * k;
            if j < self.len && priority[self.slots[j + 1]] < priority[self.slots[j]] {
                j += 1;
            }
            if priority[v] <= priority[self.slots[j]] {
                break;
            }
            self.slots[k] = self.slots[j];
            self.pos[self.slots[k]] = k;
            k = j;
        }
        self.slots[k] = v;
        self.pos[v] = k;
    }
}
