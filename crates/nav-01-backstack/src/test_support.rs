//! Screens shared by unit tests.

use serde::{Deserialize, Serialize};

use crate::domain::Screen;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub(crate) enum TestScreen {
    RootAlpha,
    RootBeta,
    A,
    B,
    C,
    Detail { id: u32 },
}

impl Screen for TestScreen {
    fn route(&self) -> String {
        match self {
            TestScreen::Detail { .. } => "detail".to_string(),
            other => format!("{:?}", other).to_lowercase(),
        }
    }
}
