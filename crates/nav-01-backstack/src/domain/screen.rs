//! Screen payloads and root keys
//!
//! A screen is the application's description of "what is shown". The back
//! stack never looks inside it: it only clones, compares, hashes and
//! serializes screens.
//!
//! ## Equality Contract
//!
//! Screens are compared by VALUE (`Eq`). Two screens that compare equal are
//! the same destination, regardless of which record carries them. This is the
//! contract used by the duplicate-push guard and by saved-state lookup.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;

/// A navigable destination.
///
/// Applications usually implement this for a closed enum of destinations:
///
/// ```ignore
/// #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// enum AppScreen {
///     Inbox,
///     Thread { id: u64 },
///     Settings,
/// }
///
/// impl Screen for AppScreen {
///     fn route(&self) -> String {
///         match self {
///             AppScreen::Inbox => "inbox".into(),
///             AppScreen::Thread { .. } => "thread".into(),
///             AppScreen::Settings => "settings".into(),
///         }
///     }
/// }
/// ```
pub trait Screen:
    Clone + Debug + Eq + Hash + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Route label stored alongside the screen in every record.
    ///
    /// Defaults to the short type name.
    fn route(&self) -> String {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full).to_string()
    }
}

/// Key of a saved snapshot: the root screen of the branch it was taken from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RootKey<S>(S);

impl<S: Screen> RootKey<S> {
    /// Key for the branch rooted at `screen`.
    pub fn new(screen: S) -> Self {
        Self(screen)
    }

    /// The root screen this key was derived from.
    pub fn screen(&self) -> &S {
        &self.0
    }

    pub fn into_screen(self) -> S {
        self.0
    }
}

// Derived `Hash` on a single-field tuple struct hashes only that field, so
// lookups by `&S` agree with lookups by `&RootKey<S>`.
impl<S> Borrow<S> for RootKey<S> {
    fn borrow(&self) -> &S {
        &self.0
    }
}
