//! # Tab Switching Integration Tests
//!
//! `reset_root` driven through `NavigatorImpl`, the way a bottom-bar host
//! switches between Inbox, Search and Settings while each tab keeps its own
//! history.
//!
//! ## Flow Tested:
//!
//! 1. **Save and restore**: Each tab comes back where it was left
//! 2. **Clear**: A reset can drop the incoming tab's snapshot
//! 3. **Lifecycle**: Records parked in a snapshot stay retained, records
//!    discarded by a reset are released

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::fixtures::inbox_navigator;
    use crate::fixtures::AppScreen::{self, Account, Inbox, Search, Settings, Thread};
    use nav_01_backstack::{RecordLifecycle, RecordStore, StateOptions};
    use nav_02_navigator::{NavigationMetrics, Navigator};
    use parking_lot::Mutex;

    // =============================================================================
    // SAVE AND RESTORE
    // =============================================================================

    #[test]
    fn test_each_tab_keeps_its_own_history() {
        let (_, mut navigator) = inbox_navigator();
        navigator.go_to(Thread { id: 1 });
        navigator.go_to(Thread { id: 2 });

        let previous = navigator.reset_root(Search, StateOptions::SAVE_AND_RESTORE);
        assert_eq!(previous, vec![Thread { id: 2 }, Thread { id: 1 }, Inbox]);
        assert_eq!(navigator.peek_back_stack(), vec![Search]);

        navigator.go_to(Thread { id: 9 });
        navigator.reset_root(Settings, StateOptions::SAVE_AND_RESTORE);
        navigator.go_to(Account);

        navigator.reset_root(Inbox, StateOptions::SAVE_AND_RESTORE);
        assert_eq!(
            navigator.peek_back_stack(),
            vec![Thread { id: 2 }, Thread { id: 1 }, Inbox]
        );

        navigator.reset_root(Search, StateOptions::SAVE_AND_RESTORE);
        assert_eq!(navigator.peek_back_stack(), vec![Thread { id: 9 }, Search]);

        let mut parked = navigator.stack().peek_state();
        parked.sort_by_key(|screen| format!("{:?}", screen));
        assert_eq!(parked, vec![Inbox, Settings]);
    }

    #[test]
    fn test_restore_keeps_cursor_position() {
        let (_, mut navigator) = inbox_navigator();
        navigator.go_to(Thread { id: 1 });
        navigator.go_to(Thread { id: 2 });
        navigator.backward();

        navigator.reset_root(Search, StateOptions::SAVE_AND_RESTORE);
        navigator.reset_root(Inbox, StateOptions::SAVE_AND_RESTORE);

        assert_eq!(navigator.peek(), Some(Thread { id: 1 }));
        assert!(navigator.forward(), "Forward history survives the round trip");
        assert_eq!(navigator.peek(), Some(Thread { id: 2 }));
    }

    #[test]
    fn test_reset_without_save_forgets_branch() {
        let (_, mut navigator) = inbox_navigator();
        navigator.go_to(Thread { id: 1 });

        navigator.reset_root(Search, StateOptions::DEFAULT);
        navigator.reset_root(Inbox, StateOptions::SAVE_AND_RESTORE);

        assert_eq!(navigator.peek_back_stack(), vec![Inbox]);
    }

    #[test]
    fn test_reset_to_same_root_restores_what_was_just_saved() {
        let (_, mut navigator) = inbox_navigator();
        navigator.go_to(Thread { id: 4 });

        let previous = navigator.reset_root(Inbox, StateOptions::SAVE_AND_RESTORE);

        assert_eq!(previous, vec![Thread { id: 4 }, Inbox]);
        assert_eq!(navigator.peek_back_stack(), vec![Thread { id: 4 }, Inbox]);
        assert_eq!(navigator.stack().saved_state_count(), 0);
    }

    // =============================================================================
    // CLEAR
    // =============================================================================

    #[test]
    fn test_clear_drops_incoming_snapshot() {
        let (_, mut navigator) = inbox_navigator();
        navigator.go_to(Thread { id: 1 });
        navigator.reset_root(Search, StateOptions::SAVE_AND_RESTORE);
        navigator.go_to(Thread { id: 5 });

        // Save Search, skip restore, then drop anything held for Inbox.
        navigator.reset_root(Inbox, StateOptions::new(true, false, true));

        assert_eq!(navigator.peek_back_stack(), vec![Inbox]);
        assert_eq!(navigator.stack().peek_state(), vec![Search]);
    }

    #[test]
    fn test_reset_metrics_count_restores() {
        let metrics = Arc::new(NavigationMetrics::new());
        let (_, navigator) = inbox_navigator();
        let mut navigator = navigator.with_metrics(metrics.clone());

        navigator.reset_root(Search, StateOptions::SAVE_AND_RESTORE);
        navigator.reset_root(Inbox, StateOptions::SAVE_AND_RESTORE);
        navigator.reset_root(Settings, StateOptions::DEFAULT);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.resets, 3);
        assert_eq!(snapshot.restored_snapshots, 1);
    }

    // =============================================================================
    // LIFECYCLE
    // =============================================================================

    #[test]
    fn test_parked_records_keep_their_state() {
        let store = Arc::new(Mutex::new(RecordStore::<String>::new()));
        let mut lifecycle = RecordLifecycle::new();
        lifecycle.register(store.clone());

        let (_, navigator) = inbox_navigator();
        let mut navigator = navigator.with_lifecycle(lifecycle);
        navigator.go_to(Thread { id: 1 });
        let thread = navigator.current_record().map(|r| r.key().clone()).unwrap();
        store.lock().insert(thread.clone(), "draft reply".to_string());

        navigator.reset_root(Search, StateOptions::SAVE_AND_RESTORE);
        assert!(
            store.lock().contains(&thread),
            "A record parked in a snapshot is still retained"
        );
        assert!(navigator.lifecycle().unwrap().is_retained(&thread));

        navigator.reset_root(Inbox, StateOptions::SAVE_AND_RESTORE);
        assert_eq!(
            navigator.current_record().map(|r| r.key().clone()),
            Some(thread.clone())
        );
        assert_eq!(store.lock().get(&thread).map(String::as_str), Some("draft reply"));
    }

    #[test]
    fn test_discarded_branch_releases_state() {
        let store = Arc::new(Mutex::new(RecordStore::<u32>::new()));
        let mut lifecycle = RecordLifecycle::new();
        lifecycle.register(store.clone());

        let (_, navigator) = inbox_navigator();
        let mut navigator = navigator.with_lifecycle(lifecycle);
        navigator.go_to(Thread { id: 1 });
        let thread = navigator.current_record().map(|r| r.key().clone()).unwrap();
        store.lock().insert(thread.clone(), 1);

        navigator.reset_root(Search, StateOptions::DEFAULT);

        assert!(!store.lock().contains(&thread));
        assert!(!navigator.lifecycle().unwrap().is_retained(&thread));
    }
}
