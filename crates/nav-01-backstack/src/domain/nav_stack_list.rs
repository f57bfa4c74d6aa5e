//! Immutable list views of a navigation stack
//!
//! Index 0 is the top (most recently pushed), the last index is the root.
//! The cursor splits the list into:
//!
//! ```text
//!   [0 .. current)        forward items  (more recent than current)
//!   current
//!   (current .. len)      backward items (older than current, ending at root)
//! ```
//!
//! INVARIANT: a list is never empty and `current_index < len`.

use super::record::Record;

/// Non-empty, immutable view of entries plus a cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavStackList<T> {
    entries: Vec<T>,
    current_index: usize,
}

/// Immutable snapshot of one branch, stored under its root key.
pub type SavedStack<S> = NavStackList<Record<S>>;

impl<T> NavStackList<T> {
    /// Build a view, returning `None` if `entries` is empty or the cursor is
    /// out of range.
    pub fn new(entries: Vec<T>, current_index: usize) -> Option<Self> {
        if current_index < entries.len() {
            Some(Self {
                entries,
                current_index,
            })
        } else {
            None
        }
    }

    /// Most recently pushed entry.
    pub fn top(&self) -> &T {
        &self.entries[0]
    }

    /// Entry under the cursor.
    pub fn current(&self) -> &T {
        &self.entries[self.current_index]
    }

    /// Oldest entry.
    pub fn root(&self) -> &T {
        &self.entries[self.entries.len() - 1]
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries more recent than current, nearest first.
    pub fn forward_items(&self) -> impl Iterator<Item = &T> {
        self.entries[..self.current_index].iter().rev()
    }

    /// Entries older than current, nearest first, ending at root.
    pub fn backward_items(&self) -> impl Iterator<Item = &T> {
        self.entries[self.current_index + 1..].iter()
    }

    pub fn forward_count(&self) -> usize {
        self.current_index
    }

    pub fn backward_count(&self) -> usize {
        self.entries.len() - self.current_index - 1
    }

    /// All entries, top to root.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn into_parts(self) -> (Vec<T>, usize) {
        (self.entries, self.current_index)
    }

    /// Transform every entry, keeping the cursor.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> NavStackList<U> {
        NavStackList {
            entries: self.entries.iter().map(f).collect(),
            current_index: self.current_index,
        }
    }
}

impl<'a, T> IntoIterator for &'a NavStackList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
