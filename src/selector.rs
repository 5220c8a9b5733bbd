//! Bounded top-N selection.
//!
//! Keeps the N largest records seen so far in a min-heap of fixed capacity.
//! Each incoming record costs one comparison against the root, plus an
//! O(log N) sift when it displaces the current minimum.

use crate::error::{Result, TopError};
use crate::order::{ByValue, RecordOrder};
use crate::record::Record;
use log::debug;
use std::cmp::Ordering;

/// Upper bound on the up-front reservation. Larger selectors grow as records
/// arrive, so a huge count over a short input costs only what it holds.
const MAX_PREALLOC: usize = 1024;

/// Streaming selector for the `capacity` largest records.
///
/// # Heap Construction
///
/// Below capacity, records are appended without any reordering. The push that
/// fills the selector heapifies everything in one pass; from then on the root
/// is always the minimum under the ordering policy.
///
/// # Ties
///
/// A full selector only replaces its minimum with a record that is *strictly*
/// greater. A record equal to the minimum is discarded and the incumbent kept.
#[derive(Debug, Clone)]
pub struct BoundedTopSelector<O = ByValue> {
    /// Maximum number of records held.
    capacity: usize,

    /// Held records. A min-heap under `order` once `members.len() == capacity`.
    members: Vec<Record>,

    /// Ordering policy.
    order: O,
}

impl BoundedTopSelector<ByValue> {
    /// Creates a selector that ranks by value.
    ///
    /// Fails with [`TopError::InvalidArgument`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_order(capacity, ByValue)
    }
}

impl<O: RecordOrder> BoundedTopSelector<O> {
    /// Creates a selector with an explicit ordering policy.
    pub fn with_order(capacity: usize, order: O) -> Result<Self> {
        if capacity == 0 {
            return Err(TopError::InvalidArgument(
                "record count must be a positive integer, got 0".to_string(),
            ));
        }

        Ok(BoundedTopSelector {
            capacity,
            members: Vec::with_capacity(capacity.min(MAX_PREALLOC)),
            order,
        })
    }

    /// Offers a record to the selector.
    pub fn add(&mut self, record: Record) {
        if self.members.len() < self.capacity {
            debug!(
                "Accepted {} ({} of {})",
                record,
                self.members.len() + 1,
                self.capacity
            );
            self.members.push(record);
            if self.members.len() == self.capacity {
                self.heapify();
            }
            return;
        }

        if self.order.less(&self.members[0], &record) {
            debug!("Evicted {} for {}", self.members[0], record);
            self.members[0] = record;
            self.sift_down(0);
        } else {
            debug!("Discarded {}", record);
        }
    }

    /// Returns the smallest held record, if any.
    pub fn peek_min(&self) -> Option<&Record> {
        if self.is_full() {
            return self.members.first();
        }
        self.members
            .iter()
            .reduce(|min, r| if self.order.less(r, min) { r } else { min })
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if no record has been accepted yet.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Maximum number of records held.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` once `capacity` records are held.
    pub fn is_full(&self) -> bool {
        self.members.len() == self.capacity
    }

    /// Held records in internal heap order. No ordering is guaranteed.
    pub fn snapshot(&self) -> &[Record] {
        &self.members
    }

    /// Consumes the selector, returning held records in internal heap order.
    pub fn into_records(self) -> Vec<Record> {
        self.members
    }

    /// Consumes the selector, returning held records largest first.
    ///
    /// Equivalent records keep no particular relative order.
    pub fn into_sorted_records(self) -> Vec<Record> {
        let order = self.order;
        let mut members = self.members;
        members.sort_by(|a, b| {
            if order.less(b, a) {
                Ordering::Less
            } else if order.less(a, b) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
        members
    }

    /// Establishes the heap invariant over all members.
    fn heapify(&mut self) {
        for pos in (0..self.members.len() / 2).rev() {
            self.sift_down(pos);
        }
    }

    /// Moves the record at `pos` down until neither child is smaller.
    fn sift_down(&mut self, mut pos: usize) {
        let len = self.members.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let child =
                if right < len && self.order.less(&self.members[right], &self.members[left]) {
                    right
                } else {
                    left
                };

            if !self.order.less(&self.members[child], &self.members[pos]) {
                break;
            }
            self.members.swap(pos, child);
            pos = child;
        }
    }

    /// Verifies the min-heap invariant (only meaningful once full).
    #[cfg(test)]
    fn check_invariant(&self) -> bool {
        (1..self.members.len())
            .all(|i| !self.order.less(&self.members[i], &self.members[(i - 1) / 2]))
    }
}
