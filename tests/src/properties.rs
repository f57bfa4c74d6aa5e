//! # Property-Based Stack Laws
//!
//! Random operation sequences over `NavStack`:
//!
//! 1. The cursor stays in range whenever the stack is non-empty
//! 2. Backward items, the current record and forward items partition the stack
//! 3. Pushing the current screen again changes nothing
//! 4. Saving and restoring reproduces the stack, snapshots included

#[cfg(test)]
mod tests {
    use crate::fixtures::Walk::{self, RootAlpha, RootBeta, A, B, C};
    use nav_01_backstack::{NavStack, NavStackSaver, StackSaver, StateOptions};
    use proptest::prelude::*;

    // ============================================================================
    // Operation model
    // ============================================================================

    #[derive(Clone, Debug)]
    enum Op {
        Push(Walk),
        Pop,
        PopUntil(Walk),
        Forward,
        Backward,
        SaveState,
        RestoreState(Walk),
        ResetRoot(Walk, StateOptions),
    }

    fn screen() -> impl Strategy<Value = Walk> {
        prop_oneof![Just(RootAlpha), Just(RootBeta), Just(A), Just(B), Just(C)]
    }

    fn root() -> impl Strategy<Value = Walk> {
        prop_oneof![Just(RootAlpha), Just(RootBeta)]
    }

    fn options() -> impl Strategy<Value = StateOptions> {
        (any::<bool>(), any::<bool>(), any::<bool>())
            .prop_map(|(save, restore, clear)| StateOptions::new(save, restore, clear))
    }

    /// History moves only.
    fn history_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => screen().prop_map(Op::Push),
            2 => Just(Op::Pop),
            2 => Just(Op::Forward),
            2 => Just(Op::Backward),
        ]
    }

    /// History moves plus saved-state operations.
    fn any_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            6 => history_op(),
            1 => screen().prop_map(Op::PopUntil),
            1 => Just(Op::SaveState),
            1 => root().prop_map(Op::RestoreState),
            2 => (root(), options()).prop_map(|(root, options)| Op::ResetRoot(root, options)),
        ]
    }

    fn apply(stack: &mut NavStack<Walk>, op: &Op) {
        match op {
            Op::Push(screen) => {
                stack.push(screen.clone());
            }
            Op::Pop => {
                stack.pop();
            }
            Op::PopUntil(target) => {
                stack.pop_until(|record| record.screen() == target);
            }
            Op::Forward => {
                stack.forward();
            }
            Op::Backward => {
                stack.backward();
            }
            Op::SaveState => stack.save_state(),
            Op::RestoreState(root) => {
                stack.restore_state(root.clone());
            }
            Op::ResetRoot(root, options) => {
                stack.reset_root(root.clone(), *options);
            }
        }
    }

    fn run(ops: &[Op]) -> NavStack<Walk> {
        let mut stack = NavStack::new(RootAlpha);
        for op in ops {
            apply(&mut stack, op);
        }
        stack
    }

    // ============================================================================
    // Properties
    // ============================================================================

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn prop_cursor_stays_in_range(ops in prop::collection::vec(any_op(), 0..64)) {
            let mut stack = NavStack::new(RootAlpha);
            for op in &ops {
                apply(&mut stack, op);
                if stack.is_empty() {
                    prop_assert_eq!(stack.current_index(), 0);
                } else {
                    prop_assert!(stack.current_index() < stack.len());
                }
            }
        }

        #[test]
        fn prop_cursor_partitions_stack(ops in prop::collection::vec(history_op(), 0..64)) {
            let stack = run(&ops);
            prop_assume!(!stack.is_empty());

            let backward = stack.backward_items().count();
            let forward = stack.forward_items().count();
            prop_assert_eq!(backward + 1 + forward, stack.len());
            prop_assert_eq!(forward, stack.current_index());
        }

        #[test]
        fn prop_repeated_push_is_noop(
            ops in prop::collection::vec(history_op(), 0..32),
            next in screen(),
        ) {
            let mut stack = run(&ops);
            stack.push(next.clone());
            let before = stack.clone();

            prop_assert!(!stack.push(next));
            prop_assert_eq!(stack, before);
        }

        #[test]
        fn prop_keys_stay_unique(ops in prop::collection::vec(any_op(), 0..64)) {
            let stack = run(&ops);
            let live: Vec<_> = stack.iter().map(|r| r.key().clone()).collect();
            let mut deduped = live.clone();
            deduped.sort();
            deduped.dedup();
            prop_assert_eq!(live.len(), deduped.len());
        }

        #[test]
        fn prop_save_restore_round_trip(ops in prop::collection::vec(any_op(), 0..64)) {
            let stack = run(&ops);

            let sections = NavStackSaver.save(&stack).unwrap();
            let restored: NavStack<Walk> = NavStackSaver.restore(sections).unwrap();
            prop_assert_eq!(&restored, &stack);

            let bytes = NavStackSaver.to_json_bytes(&stack).unwrap();
            let from_bytes: NavStack<Walk> = NavStackSaver.from_json_bytes(&bytes).unwrap();
            prop_assert_eq!(from_bytes, stack);
        }

        #[test]
        fn prop_one_snapshot_per_root(ops in prop::collection::vec(any_op(), 0..64)) {
            let stack = run(&ops);
            let mut roots = stack.peek_state();
            let count = roots.len();
            roots.sort_by_key(|root| format!("{:?}", root));
            roots.dedup();
            prop_assert_eq!(roots.len(), count);
            for saved in stack.saved_states() {
                prop_assert!(saved.current_index() < saved.len());
            }
        }
    }
}
