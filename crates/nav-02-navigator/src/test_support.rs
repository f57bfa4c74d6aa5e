//! Screens and recording collaborators shared by unit tests.

use nav_01_backstack::{NavStackList, PopResult, Screen, StateOptions};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::{InterceptFailure, NavIntent, NavigationContext};
use crate::ports::{FailureNotifier, NavigationEventListener};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub(crate) enum TestScreen {
    Home,
    Inbox,
    Thread { id: u32 },
    Login,
    Settings,
    External,
}

impl Screen for TestScreen {
    fn route(&self) -> String {
        match self {
            TestScreen::Thread { .. } => "thread".to_string(),
            other => format!("{:?}", other).to_lowercase(),
        }
    }
}

/// Everything a listener or notifier was told, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Seen {
    Intent(NavIntent, Option<TestScreen>),
    BackStack(Vec<TestScreen>),
    NavStack(Option<NavStackList<TestScreen>>),
    Failure(NavIntent, InterceptFailure),
}

#[derive(Clone, Default)]
pub(crate) struct Recorder {
    seen: Arc<Mutex<Vec<Seen>>>,
}

impl Recorder {
    pub(crate) fn seen(&self) -> Vec<Seen> {
        self.seen.lock().clone()
    }

    pub(crate) fn intents(&self) -> Vec<(NavIntent, Option<TestScreen>)> {
        self.seen()
            .into_iter()
            .filter_map(|seen| match seen {
                Seen::Intent(intent, screen) => Some((intent, screen)),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn back_stacks(&self) -> Vec<Vec<TestScreen>> {
        self.seen()
            .into_iter()
            .filter_map(|seen| match seen {
                Seen::BackStack(screens) => Some(screens),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn failures(&self) -> Vec<(NavIntent, InterceptFailure)> {
        self.seen()
            .into_iter()
            .filter_map(|seen| match seen {
                Seen::Failure(intent, failure) => Some((intent, failure)),
                _ => None,
            })
            .collect()
    }

    fn push(&self, seen: Seen) {
        self.seen.lock().push(seen);
    }
}

impl NavigationEventListener<TestScreen> for Recorder {
    fn go_to(&self, screen: &TestScreen, _: &NavigationContext<TestScreen>) {
        self.push(Seen::Intent(NavIntent::GoTo, Some(screen.clone())));
    }

    fn pop(&self, _: Option<&PopResult>, _: &NavigationContext<TestScreen>) {
        self.push(Seen::Intent(NavIntent::Pop, None));
    }

    fn forward(&self, _: &NavigationContext<TestScreen>) {
        self.push(Seen::Intent(NavIntent::Forward, None));
    }

    fn backward(&self, _: &NavigationContext<TestScreen>) {
        self.push(Seen::Intent(NavIntent::Backward, None));
    }

    fn reset_root(&self, new_root: &TestScreen, _: StateOptions, _: &NavigationContext<TestScreen>) {
        self.push(Seen::Intent(NavIntent::ResetRoot, Some(new_root.clone())));
    }

    fn on_back_stack_changed(&self, back_stack: &[TestScreen]) {
        self.push(Seen::BackStack(back_stack.to_vec()));
    }

    fn on_nav_stack_changed(&self, nav_stack: Option<&NavStackList<TestScreen>>) {
        self.push(Seen::NavStack(nav_stack.cloned()));
    }
}

impl FailureNotifier for Recorder {
    fn go_to_failure(&self, failure: &InterceptFailure) {
        self.push(Seen::Failure(NavIntent::GoTo, failure.clone()));
    }

    fn pop_failure(&self, failure: &InterceptFailure) {
        self.push(Seen::Failure(NavIntent::Pop, failure.clone()));
    }

    fn forward_failure(&self, failure: &InterceptFailure) {
        self.push(Seen::Failure(NavIntent::Forward, failure.clone()));
    }

    fn backward_failure(&self, failure: &InterceptFailure) {
        self.push(Seen::Failure(NavIntent::Backward, failure.clone()));
    }

    fn reset_root_failure(&self, failure: &InterceptFailure) {
        self.push(Seen::Failure(NavIntent::ResetRoot, failure.clone()));
    }
}
