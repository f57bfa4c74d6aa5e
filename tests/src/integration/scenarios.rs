//! # Canonical Back-Stack Walkthroughs
//!
//! The reference walkthroughs for `NavStack`, rooted at `RootAlpha`:
//!
//! 1. Push three screens, walk back to the root, stop there
//! 2. Push after walking back truncates forward history
//! 3. Pop with the cursor on the root empties the stack
//! 4. `save_state` snapshots without touching the live stack
//! 5. Clear, build a second branch, restore the first
//! 6. A repeated push of the current screen is ignored

#[cfg(test)]
mod tests {
    use crate::fixtures::Walk::{self, RootAlpha, RootBeta, A, B, C};
    use nav_01_backstack::{NavStack, Record};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn screens(records: &[Record<Walk>]) -> Vec<Walk> {
        records.iter().map(|r| r.screen().clone()).collect()
    }

    fn peek(stack: &NavStack<Walk>) -> Option<Walk> {
        stack.current().map(|r| r.screen().clone())
    }

    /// Scenario 1 state: `[C, B, A, RootAlpha]` with the cursor on top.
    fn three_deep() -> NavStack<Walk> {
        let mut stack = NavStack::new(RootAlpha);
        assert!(stack.push(A));
        assert!(stack.push(B));
        assert!(stack.push(C));
        stack
    }

    /// Scenario 1 state after walking all the way back.
    fn walked_back() -> NavStack<Walk> {
        let mut stack = three_deep();
        for _ in 0..3 {
            assert!(stack.backward());
        }
        stack
    }

    // =============================================================================
    // SCENARIOS
    // =============================================================================

    #[test]
    fn test_walk_back_to_root_and_stop() {
        let mut stack = three_deep();
        assert_eq!(peek(&stack), Some(C));

        for _ in 0..3 {
            assert!(stack.backward());
        }
        assert_eq!(peek(&stack), Some(RootAlpha));
        assert!(stack.is_at_root());
        assert!(!stack.backward(), "No record is older than the root");
        assert_eq!(stack.current_index(), 3);
    }

    #[test]
    fn test_push_after_walking_back_truncates_forward_history() {
        let mut stack = walked_back();

        assert!(stack.push(A));

        assert_eq!(screens(stack.entries()), vec![A, RootAlpha]);
        assert_eq!(stack.current_index(), 0);
        assert!(!stack.forward());
    }

    #[test]
    fn test_truncated_a_is_a_fresh_record() {
        let mut stack = three_deep();
        let old_a = stack.entries()[2].key().clone();
        for _ in 0..3 {
            stack.backward();
        }

        stack.push(A);

        assert!(!stack.contains_record(&old_a, true));
    }

    #[test]
    fn test_pop_with_cursor_on_root_empties_stack() {
        let mut stack = walked_back();

        let popped = stack.pop().map(|r| r.into_screen());

        assert_eq!(popped, Some(RootAlpha));
        assert!(stack.is_empty());
        assert_eq!(stack.current_index(), 0);
        assert!(!stack.forward());
        assert!(!stack.backward());
        assert!(stack.current().is_none());
    }

    #[test]
    fn test_save_state_keeps_live_stack() {
        let mut stack = NavStack::new(RootAlpha);
        stack.push(A);
        stack.push(B);

        stack.save_state();

        assert_eq!(stack.saved_state_count(), 1);
        let saved = stack.saved_state(&RootAlpha).expect("snapshot keyed by root");
        assert_eq!(screens(saved.entries()), vec![B, A, RootAlpha]);
        assert_eq!(saved.current_index(), 0);
        assert_eq!(screens(stack.entries()), vec![B, A, RootAlpha]);
    }

    #[test]
    fn test_clear_then_restore_saved_branch() {
        let mut stack = NavStack::new(RootAlpha);
        stack.push(A);
        stack.push(B);
        stack.save_state();
        let saved_keys: Vec<_> = stack.entries().iter().map(|r| r.key().clone()).collect();

        let cleared = stack.pop_until(|_| false);
        assert_eq!(
            cleared.into_iter().map(Record::into_screen).collect::<Vec<_>>(),
            vec![B, A, RootAlpha]
        );
        assert!(stack.is_empty());

        stack.push(RootBeta);
        stack.push(C);
        assert_eq!(screens(stack.entries()), vec![C, RootBeta]);

        assert!(stack.restore_state(RootAlpha));

        assert_eq!(screens(stack.entries()), vec![B, A, RootAlpha]);
        assert_eq!(stack.current_index(), 0);
        assert_eq!(stack.saved_state_count(), 0);
        let restored_keys: Vec<_> = stack.entries().iter().map(|r| r.key().clone()).collect();
        assert_eq!(restored_keys, saved_keys, "Restore brings back the same records");
    }

    #[test]
    fn test_repeated_push_of_current_is_ignored() {
        let mut stack = NavStack::new(RootAlpha);
        stack.push(A);
        stack.push(B);
        let before = stack.clone();

        assert!(!stack.push(B));

        assert_eq!(stack, before);
    }

    #[test]
    fn test_pop_until_stops_at_matching_record() {
        let mut stack = three_deep();

        let popped = stack.pop_until(|r| r.screen() == &A);

        assert_eq!(
            popped.into_iter().map(Record::into_screen).collect::<Vec<_>>(),
            vec![C, B]
        );
        assert_eq!(peek(&stack), Some(A));
    }
}
