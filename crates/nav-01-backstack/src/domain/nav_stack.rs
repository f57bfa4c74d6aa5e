//! NavStack - ordered history, cursor and per-root saved state
//!
//! ## Layout
//!
//! ```text
//! index:   0        1        2        3
//!        [ C ]    [ B ]    [ A ]    [ Root ]
//!          top     current            root
//!         (forward)        (backward ────────)
//! ```
//!
//! ## Invariants
//!
//! - INVARIANT-1: `current_index < entries.len()` whenever entries is non-empty
//!   (and `current_index == 0` when empty)
//! - INVARIANT-2: record keys are unique within `entries`
//! - INVARIANT-3: at most one saved snapshot per root key, and every snapshot
//!   is non-empty with its own cursor in range
//!
//! Every public mutation runs to completion under `&mut self`, so no caller
//! can observe a half-applied `reset_root`.

use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

use super::nav_stack_list::{NavStackList, SavedStack};
use super::record::{Record, RecordKey};
use super::screen::{RootKey, Screen};
use super::state_options::StateOptions;
use crate::error::BackStackError;

/// Outcome of `NavStack::switch_root`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootSwitch<S> {
    /// Screens of the replaced stack, top to root.
    pub previous: Vec<S>,
    /// Whether the live stack came from a saved snapshot.
    pub restored: bool,
}

/// Navigation history with a movable cursor and per-root saved snapshots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavStack<S: Screen> {
    /// Index 0 is the top (most recently pushed), last is the root.
    entries: Vec<Record<S>>,
    /// Position of the current record.
    current_index: usize,
    /// Saved branches keyed by their root screen.
    state_store: HashMap<RootKey<S>, SavedStack<S>>,
}

impl<S: Screen> Default for NavStack<S> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S: Screen> NavStack<S> {
    /// An empty stack. Only useful as a starting point for pushes.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            current_index: 0,
            state_store: HashMap::new(),
        }
    }

    /// A stack holding a single record for `root`.
    pub fn new(root: S) -> Self {
        let mut stack = Self::empty();
        stack.push(root);
        stack
    }

    /// A stack built by pushing `screens` in order; the last one ends on top.
    ///
    /// Consecutive equal screens collapse into one, as with `push`.
    pub fn from_screens<I>(screens: I) -> Result<Self, BackStackError>
    where
        I: IntoIterator<Item = S>,
    {
        let mut stack = Self::empty();
        for screen in screens {
            stack.push(screen);
        }
        if stack.is_empty() {
            return Err(BackStackError::EmptyInitialScreens);
        }
        Ok(stack)
    }

    /// A stack mirroring `list`: same order, cursor on the same entry.
    pub fn from_list(list: NavStackList<S>) -> Self {
        let (screens, current_index) = list.into_parts();
        Self {
            entries: screens.into_iter().map(Record::new).collect(),
            current_index,
            state_store: HashMap::new(),
        }
    }

    /// Reassemble a stack from decoded parts, checking every invariant.
    pub(crate) fn from_parts(
        entries: Vec<Record<S>>,
        current_index: usize,
        state_store: HashMap<RootKey<S>, SavedStack<S>>,
    ) -> Result<Self, BackStackError> {
        if entries.is_empty() && current_index != 0 {
            return Err(BackStackError::CorruptState(format!(
                "cursor {} on an empty stack",
                current_index
            )));
        }
        if !entries.is_empty() && current_index >= entries.len() {
            return Err(BackStackError::CorruptState(format!(
                "cursor {} out of range for {} entries",
                current_index,
                entries.len()
            )));
        }
        ensure_unique_keys(&entries)?;
        for (root, saved) in &state_store {
            if saved.root().screen() != root.screen() {
                return Err(BackStackError::CorruptState(format!(
                    "snapshot stored under {:?} is rooted at {:?}",
                    root.screen(),
                    saved.root().screen()
                )));
            }
            ensure_unique_keys(saved.entries())?;
        }
        Ok(Self {
            entries,
            current_index,
            state_store,
        })
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when the cursor sits on the root record.
    pub fn is_at_root(&self) -> bool {
        !self.entries.is_empty() && self.current_index == self.entries.len() - 1
    }

    /// True when the cursor sits on the top record.
    pub fn is_at_top(&self) -> bool {
        !self.entries.is_empty() && self.current_index == 0
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Most recently pushed record.
    pub fn top(&self) -> Option<&Record<S>> {
        self.entries.first()
    }

    /// Record under the cursor.
    pub fn current(&self) -> Option<&Record<S>> {
        self.entries.get(self.current_index)
    }

    /// Mutable access to the current record (context tags, pop results).
    pub fn current_mut(&mut self) -> Option<&mut Record<S>> {
        self.entries.get_mut(self.current_index)
    }

    /// Oldest record.
    pub fn root(&self) -> Option<&Record<S>> {
        self.entries.last()
    }

    /// All records, top to root.
    pub fn entries(&self) -> &[Record<S>] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record<S>> {
        self.entries.iter()
    }

    /// Records more recent than current, nearest first.
    pub fn forward_items(&self) -> impl Iterator<Item = &Record<S>> {
        self.entries[..self.current_index.min(self.entries.len())]
            .iter()
            .rev()
    }

    /// Records older than current, nearest first, ending at root.
    pub fn backward_items(&self) -> impl Iterator<Item = &Record<S>> {
        self.entries
            .get(self.current_index + 1..)
            .unwrap_or_default()
            .iter()
    }

    /// Screens top to root.
    pub fn screens(&self) -> Vec<S> {
        self.entries.iter().map(|r| r.screen().clone()).collect()
    }

    /// Immutable view of the live stack, `None` when empty.
    pub fn snapshot(&self) -> Option<NavStackList<Record<S>>> {
        NavStackList::new(self.entries.clone(), self.current_index)
    }

    /// Immutable view of the live screens, `None` when empty.
    pub fn screens_snapshot(&self) -> Option<NavStackList<S>> {
        NavStackList::new(self.screens(), self.current_index)
    }

    // =========================================================================
    // HISTORY MUTATIONS
    // =========================================================================

    /// Push a fresh record for `screen`.
    ///
    /// Returns `false` (and changes nothing) when `screen` equals the current
    /// screen. Otherwise truncates forward history, puts the record on top and
    /// moves the cursor to it.
    pub fn push(&mut self, screen: S) -> bool {
        self.push_record(Record::new(screen))
    }

    /// Push an existing record, with the same guard as `push`.
    ///
    /// A record whose key is already in the surviving history is rejected.
    pub fn push_record(&mut self, record: Record<S>) -> bool {
        if self
            .current()
            .is_some_and(|current| current.screen() == record.screen())
        {
            trace!(route = %record.route(), "push rejected: screen is already current");
            return false;
        }
        let surviving = self.entries.get(self.current_index..).unwrap_or_default();
        if surviving.iter().any(|r| r.key() == record.key()) {
            trace!(key = %record.key(), "push rejected: key already in history");
            return false;
        }

        let truncated = self.truncate_forward();
        debug!(
            route = %record.route(),
            key = %record.key(),
            truncated,
            "pushed record"
        );
        self.entries.insert(0, record);
        self.current_index = 0;
        true
    }

    /// Remove the current record together with any forward history above it.
    ///
    /// Returns `None` without mutating when at most one record remains; what a
    /// root pop means is the navigator's decision.
    pub fn pop(&mut self) -> Option<Record<S>> {
        if self.entries.len() <= 1 {
            trace!(len = self.entries.len(), "pop rejected at root");
            return None;
        }
        self.remove_through_current()
    }

    /// Pop while `predicate(current)` is false and records remain.
    ///
    /// Unlike `pop`, this may remove the root: a predicate that never holds
    /// clears the stack. Returns the removed current records in pop order.
    pub fn pop_until<F>(&mut self, mut predicate: F) -> Vec<Record<S>>
    where
        F: FnMut(&Record<S>) -> bool,
    {
        let mut popped = Vec::new();
        while let Some(current) = self.current() {
            if predicate(current) {
                break;
            }
            match self.remove_through_current() {
                Some(record) => popped.push(record),
                None => break,
            }
        }
        popped
    }

    /// Move the cursor one step toward the root.
    pub fn backward(&mut self) -> bool {
        if self.current_index + 1 < self.entries.len() {
            self.current_index += 1;
            trace!(index = self.current_index, "moved backward");
            true
        } else {
            false
        }
    }

    /// Move the cursor one step toward the top.
    pub fn forward(&mut self) -> bool {
        if self.current_index > 0 {
            self.current_index -= 1;
            trace!(index = self.current_index, "moved forward");
            true
        } else {
            false
        }
    }

    // =========================================================================
    // SAVED STATE
    // =========================================================================

    /// Snapshot the live stack under its root screen, replacing any previous
    /// snapshot for that root. Does nothing on an empty stack.
    pub fn save_state(&mut self) {
        let Some(snapshot) = self.snapshot() else {
            trace!("save_state skipped on empty stack");
            return;
        };
        let root = RootKey::new(snapshot.root().screen().clone());
        debug!(
            root = ?root.screen(),
            len = snapshot.len(),
            index = snapshot.current_index(),
            "saved branch state"
        );
        self.state_store.insert(root, snapshot);
    }

    /// Replace the live stack with the snapshot saved for `new_root`.
    ///
    /// The snapshot is consumed. Without a snapshot the live stack becomes a
    /// single fresh record for `new_root`. Returns `true` when a snapshot was
    /// restored.
    pub fn restore_state(&mut self, new_root: S) -> bool {
        match self.state_store.remove(&new_root) {
            Some(saved) => {
                let (entries, current_index) = saved.into_parts();
                debug!(
                    root = ?new_root,
                    len = entries.len(),
                    index = current_index,
                    "restored branch state"
                );
                self.discard_live();
                self.entries = entries;
                self.current_index = current_index;
                true
            }
            None => {
                trace!(root = ?new_root, "no saved state, starting fresh branch");
                self.replace_with_root(new_root);
                false
            }
        }
    }

    /// Replace the whole stack with `new_root`, optionally saving the outgoing
    /// branch and restoring the incoming one.
    ///
    /// Returns the previous screens, top to root.
    pub fn reset_root(&mut self, new_root: S, options: StateOptions) -> Vec<S> {
        self.switch_root(new_root, options).previous
    }

    /// `reset_root`, also reporting whether a saved snapshot was restored.
    ///
    /// Resetting to the outgoing root with `save` and `restore` restores the
    /// snapshot taken in the same call.
    pub fn switch_root(&mut self, new_root: S, options: StateOptions) -> RootSwitch<S> {
        let previous = self.screens();
        if options.save {
            self.save_state();
        }
        let restored = if options.restore {
            self.restore_state(new_root.clone())
        } else {
            self.replace_with_root(new_root.clone());
            false
        };
        if options.clear {
            self.remove_state(&new_root);
        }
        debug!(
            root = ?new_root,
            save = options.save,
            restore = options.restore,
            clear = options.clear,
            restored,
            previous_len = previous.len(),
            "reset root"
        );
        RootSwitch { previous, restored }
    }

    /// Root screens that currently have a saved snapshot.
    pub fn peek_state(&self) -> Vec<S> {
        self.state_store
            .keys()
            .map(|root| root.screen().clone())
            .collect()
    }

    /// Drop the snapshot saved for `root` without restoring it.
    pub fn remove_state(&mut self, root: &S) -> bool {
        self.state_store.remove(root).is_some()
    }

    /// The snapshot saved for `root`, if any.
    pub fn saved_state(&self, root: &S) -> Option<&SavedStack<S>> {
        self.state_store.get(root)
    }

    /// All saved snapshots.
    pub fn saved_states(&self) -> impl Iterator<Item = &SavedStack<S>> {
        self.state_store.values()
    }

    pub fn saved_state_count(&self) -> usize {
        self.state_store.len()
    }

    // =========================================================================
    // RECORD QUERIES
    // =========================================================================

    /// Whether a record with `key` is in the live stack, or (with
    /// `include_saved`) in any saved snapshot.
    pub fn contains_record(&self, key: &RecordKey, include_saved: bool) -> bool {
        if self.entries.iter().any(|r| r.key() == key) {
            return true;
        }
        include_saved
            && self
                .state_store
                .values()
                .any(|saved| saved.iter().any(|r| r.key() == key))
    }

    /// Whether a record with `key` lies in the window
    /// `[current_index - depth, current_index + depth)`.
    ///
    /// Depth 0 never matches. Saved snapshots are searched around their own
    /// cursor.
    pub fn is_record_reachable(&self, key: &RecordKey, depth: usize, include_saved: bool) -> bool {
        if reachable_within(&self.entries, self.current_index, key, depth) {
            return true;
        }
        include_saved
            && self.state_store.values().any(|saved| {
                reachable_within(saved.entries(), saved.current_index(), key, depth)
            })
    }

    /// Keys held by the live stack or any saved snapshot.
    pub fn retained_keys(&self) -> HashSet<RecordKey> {
        self.entries
            .iter()
            .chain(self.state_store.values().flat_map(|saved| saved.iter()))
            .map(|r| r.key().clone())
            .collect()
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    /// Drop entries above the cursor; returns how many were dropped.
    fn truncate_forward(&mut self) -> usize {
        let count = self.current_index.min(self.entries.len());
        self.entries.drain(..count);
        self.current_index = 0;
        count
    }

    /// Remove entries `0..=current_index` and return the old current record.
    fn remove_through_current(&mut self) -> Option<Record<S>> {
        if self.entries.is_empty() {
            return None;
        }
        let end = self.current_index.min(self.entries.len() - 1);
        let popped = self.entries.drain(..=end).last();
        self.current_index = 0;
        if let Some(record) = &popped {
            debug!(
                route = %record.route(),
                key = %record.key(),
                remaining = self.entries.len(),
                "popped record"
            );
        }
        popped
    }

    fn replace_with_root(&mut self, root: S) {
        self.discard_live();
        self.entries.push(Record::new(root));
        self.current_index = 0;
    }

    fn discard_live(&mut self) {
        self.entries.clear();
        self.current_index = 0;
    }
}

impl<'a, S: Screen> IntoIterator for &'a NavStack<S> {
    type Item = &'a Record<S>;
    type IntoIter = std::slice::Iter<'a, Record<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn reachable_within<S>(records: &[Record<S>], index: usize, key: &RecordKey, depth: usize) -> bool {
    let start = index.saturating_sub(depth);
    let end = index.saturating_add(depth).min(records.len());
    records
        .get(start..end)
        .is_some_and(|window| window.iter().any(|r| r.key() == key))
}

fn ensure_unique_keys<S>(records: &[Record<S>]) -> Result<(), BackStackError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.key()) {
            return Err(BackStackError::CorruptState(format!(
                "duplicate record key {}",
                record.key()
            )));
        }
    }
    Ok(())
}
