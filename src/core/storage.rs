use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::error::MotionError;
use crate::Result;

/// A typed identifier handed out by a [`HandleStorage`]
pub trait Handle: Copy + Ord + Debug {
    /// Wraps a raw id
    fn from_raw(id: u32) -> Self;

    /// Human-readable kind used in error messages
    fn kind() -> &'static str;
}

/// Handle-keyed storage.
///
/// Iteration follows ascending handle order, which is also insertion order,
/// so stepping every item is deterministic for a given sequence of inserts.
#[derive(Debug, Clone)]
pub struct HandleStorage<H: Handle, T> {
    items: BTreeMap<H, T>,
    next_id: u32,
}

impl<H: Handle, T> Default for HandleStorage<H, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Handle, T> HandleStorage<H, T> {
    /// Creates a new empty storage
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
            next_id: 1, // Start at 1, so 0 can represent invalid handle
        }
    }

    /// Adds an item to the storage and returns its handle
    pub fn add(&mut self, item: T) -> H {
        let handle = H::from_raw(self.next_id);
        self.next_id += 1;
        self.items.insert(handle, item);
        handle
    }

    /// Gets an item by its handle, returning an error if not found
    pub fn get(&self, handle: H) -> Result<&T> {
        self.items
            .get(&handle)
            .ok_or_else(|| not_found(handle))
    }

    /// Gets a mutable reference to an item by its handle, returning an error if not found
    pub fn get_mut(&mut self, handle: H) -> Result<&mut T> {
        self.items
            .get_mut(&handle)
            .ok_or_else(|| not_found(handle))
    }

    /// Removes an item from the storage
    pub fn remove(&mut self, handle: H) -> Result<T> {
        self.items
            .remove(&handle)
            .ok_or_else(|| not_found(handle))
    }

    /// Returns whether the handle refers to a live item
    pub fn contains(&self, handle: H) -> bool {
        self.items.contains_key(&handle)
    }

    /// Returns the number of items in the storage
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the storage is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Clears all items from the storage
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns all live handles in ascending order
    pub fn handles(&self) -> Vec<H> {
        self.items.keys().copied().collect()
    }

    /// Returns an iterator over all items in handle order
    pub fn iter(&self) -> impl Iterator<Item = (H, &T)> + '_ {
        self.items.iter().map(|(h, item)| (*h, item))
    }

    /// Returns a mutable iterator over all items in handle order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (H, &mut T)> + '_ {
        self.items.iter_mut().map(|(h, item)| (*h, item))
    }
}

fn not_found<H: Handle>(handle: H) -> MotionError {
    MotionError::ResourceNotFound(format!("{} with handle {:?} not found", H::kind(), handle))
}
