//! Dynamic table implementation.
//!
//! An ordered sequence of header fields with front insertion: the newest
//! entry sits at relative index 0 (combined index 62), older entries
//! drift toward the back and are evicted from there. Backed by a ring
//! buffer so eviction pops the oldest slot in O(1).

use std::collections::VecDeque;

use tracing::trace;

use crate::field::HeaderField;

/// The dynamic table.
pub struct DynamicTable {
    entries: VecDeque<HeaderField>,
    size: usize,
    capacity: usize,
}

impl DynamicTable {
    /// Creates an empty dynamic table with the given byte capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            size: 0,
            capacity,
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the summed size of all entries in octets.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the current byte capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Inserts a field at the front, then evicts from the back until the
    /// size fits the capacity again.
    ///
    /// A field larger than the whole capacity empties the table (itself
    /// included); that is legal, not an error.
    pub fn insert(&mut self, field: HeaderField) {
        trace!(name = ?field.name, size = field.size(), "dynamic table insert");
        self.size += field.size();
        self.entries.push_front(field);
        self.evict();
    }

    /// Sets a new capacity, evicting oldest entries until the size fits.
    /// Capacity 0 is legal and drops the table to empty.
    pub fn resize(&mut self, new_capacity: usize) {
        trace!(
            old = self.capacity,
            new = new_capacity,
            "dynamic table resize"
        );
        self.capacity = new_capacity;
        self.evict();
    }

    fn evict(&mut self) {
        while self.size > self.capacity && !self.entries.is_empty() {
            if let Some(evicted) = self.entries.pop_back() {
                self.size -= evicted.size();
                trace!(name = ?evicted.name, "dynamic table evict");
            }
        }
    }

    /// Gets an entry by 0-based relative index, newest first.
    pub fn get(&self, index: usize) -> Option<&HeaderField> {
        self.entries.get(index)
    }

    /// Finds the lowest relative index matching name and value exactly.
    pub fn find_exact(&self, name: &[u8], value: &[u8]) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.name == name && e.value == value)
    }

    /// Finds the lowest relative index matching the name.
    pub fn find_name(&self, name: &[u8]) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }

    /// Iterates entries newest first.
    pub fn iter(&self) -> impl Iterator<Item = &HeaderField> {
        self.entries.iter()
    }
}
