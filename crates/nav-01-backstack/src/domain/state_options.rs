//! Options for resetting the root of a stack

use serde::{Deserialize, Serialize};

/// How `reset_root` treats saved branch state.
///
/// | Flag | Effect |
/// |------|--------|
/// | `save` | Snapshot the outgoing branch under its root before replacing it |
/// | `restore` | Restore the snapshot saved for the new root, if any |
/// | `clear` | Drop any snapshot for the new root once the reset is done |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateOptions {
    pub save: bool,
    pub restore: bool,
    pub clear: bool,
}

impl StateOptions {
    /// Replace the stack without touching saved state.
    pub const DEFAULT: StateOptions = StateOptions {
        save: false,
        restore: false,
        clear: false,
    };

    /// Tab-switch semantics: keep the outgoing branch, bring back the incoming one.
    pub const SAVE_AND_RESTORE: StateOptions = StateOptions {
        save: true,
        restore: true,
        clear: false,
    };

    pub fn new(save: bool, restore: bool, clear: bool) -> Self {
        Self {
            save,
            restore,
            clear,
        }
    }

    pub fn with_save(mut self, save: bool) -> Self {
        self.save = save;
        self
    }

    pub fn with_restore(mut self, restore: bool) -> Self {
        self.restore = restore;
        self
    }

    pub fn with_clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }
}
