//! # Shared Test Fixtures
//!
//! Screens and collaborators used across the integration suite.

use nav_01_backstack::{NavStack, Screen};
use nav_02_navigator::{
    FailureNotifier, InterceptFailure, NavigationContext, NavigationEventListener, NavigatorImpl,
};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A mail-client-shaped set of destinations with three tab roots.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppScreen {
    // Tab roots
    Inbox,
    Search,
    Settings,
    // Leaves
    Thread { id: u32 },
    Compose { reply_to: Option<u32> },
    Login,
    Account,
}

impl Screen for AppScreen {
    fn route(&self) -> String {
        match self {
            AppScreen::Inbox => "inbox",
            AppScreen::Search => "search",
            AppScreen::Settings => "settings",
            AppScreen::Thread { .. } => "thread",
            AppScreen::Compose { .. } => "compose",
            AppScreen::Login => "login",
            AppScreen::Account => "account",
        }
        .to_string()
    }
}

/// Screens named after the canonical walkthroughs.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Walk {
    RootAlpha,
    RootBeta,
    A,
    B,
    C,
}

impl Screen for Walk {}

/// Navigator over a fresh inbox stack that counts root pops.
pub fn inbox_navigator() -> (Arc<Mutex<usize>>, NavigatorImpl<AppScreen>) {
    let exits = Arc::new(Mutex::new(0));
    let sink = exits.clone();
    let navigator = NavigatorImpl::new(NavStack::new(AppScreen::Inbox), move |_| {
        *sink.lock() += 1;
    })
    .expect("a fresh stack holds its root");
    (exits, navigator)
}

/// Listener and notifier that write a readable line per callback.
#[derive(Clone, Default)]
pub struct Journal {
    lines: Arc<Mutex<Vec<String>>>,
}

impl Journal {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn starting_with(&self, prefix: &str) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|line| line.starts_with(prefix))
            .collect()
    }

    fn write(&self, line: String) {
        self.lines.lock().push(line);
    }
}

impl NavigationEventListener<AppScreen> for Journal {
    fn go_to(&self, screen: &AppScreen, _context: &NavigationContext<AppScreen>) {
        self.write(format!("go_to {}", screen.route()));
    }

    fn pop(
        &self,
        _result: Option<&nav_01_backstack::PopResult>,
        _context: &NavigationContext<AppScreen>,
    ) {
        self.write("pop".to_string());
    }

    fn reset_root(
        &self,
        new_root: &AppScreen,
        _options: nav_01_backstack::StateOptions,
        _context: &NavigationContext<AppScreen>,
    ) {
        self.write(format!("reset_root {}", new_root.route()));
    }

    fn on_back_stack_changed(&self, back_stack: &[AppScreen]) {
        let routes: Vec<String> = back_stack.iter().map(Screen::route).collect();
        self.write(format!("back_stack {}", routes.join(",")));
    }
}

impl FailureNotifier for Journal {
    fn go_to_failure(&self, failure: &InterceptFailure) {
        self.write(format!(
            "failure go_to consumed={} reason={}",
            failure.consumed,
            failure.reason.as_deref().unwrap_or("-")
        ));
    }

    fn pop_failure(&self, failure: &InterceptFailure) {
        self.write(format!("failure pop consumed={}", failure.consumed));
    }
}
