//! Lock-protected registry with snapshot-on-iterate semantics.
//!
//! Used for overlays, paintlets, and the selection/left-click listener sets.
//! Every mutation and every snapshot goes through one `parking_lot` mutex.
//! Dispatch always runs over a point-in-time copy taken with the lock
//! released, so a callback may add or remove entries (including itself)
//! without deadlocking or disturbing the dispatch in progress.

use rasterview_core::types::{thread_safe_vec, ThreadSafeVec};
use std::fmt;
use std::sync::Arc;

/// Set of shared entries, compared by pointer identity.
///
/// Cloning a `Registry` yields another handle to the same set, which is how
/// a loader thread gets hold of the overlay registry.
pub struct Registry<T: ?Sized> {
    entries: ThreadSafeVec<Arc<T>>,
}

/// Pointer identity that ignores vtable metadata of trait objects.
pub(crate) fn same_entry<T: ?Sized>(a: &Arc<T>, b: &Arc<T>) -> bool {
    std::ptr::eq(Arc::as_ptr(a) as *const (), Arc::as_ptr(b) as *const ())
}

impl<T: ?Sized> Registry<T> {
    pub fn new() -> Self {
        Self {
            entries: thread_safe_vec(),
        }
    }

    /// Adds the entry; returns false if this exact instance is already registered.
    pub fn add(&self, entry: Arc<T>) -> bool {
        let mut entries = self.entries.lock();
        if entries.iter().any(|e| same_entry(e, &entry)) {
            return false;
        }
        entries.push(entry);
        true
    }

    /// Removes this exact instance; returns false if it was not registered.
    pub fn remove(&self, entry: &Arc<T>) -> bool {
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|e| !same_entry(e, entry));
        entries.len() != before
    }

    /// Removes every entry matching the predicate and returns them.
    pub fn remove_where<F>(&self, mut predicate: F) -> Vec<Arc<T>>
    where
        F: FnMut(&T) -> bool,
    {
        let mut entries = self.entries.lock();
        let mut removed = Vec::new();
        entries.retain(|e| {
            if predicate(e) {
                removed.push(Arc::clone(e));
                false
            } else {
                true
            }
        });
        removed
    }

    /// Removes and returns every entry.
    pub fn clear(&self) -> Vec<Arc<T>> {
        std::mem::take(&mut *self.entries.lock())
    }

    pub fn contains(&self, entry: &Arc<T>) -> bool {
        self.entries.lock().iter().any(|e| same_entry(e, entry))
    }

    /// Point-in-time copy of the registered entries.
    pub fn snapshot(&self) -> Vec<Arc<T>> {
        self.entries.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl<T: ?Sized> Clone for Registry<T> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<T: ?Sized> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry").field("len", &self.len()).finish()
    }
}
