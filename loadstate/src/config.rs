use crate::AutoloadPolicy;
use std::time::Duration;

/// Settings for a [`LoadReducer`](crate::LoadReducer) and the views driving it.
#[derive(Debug, Clone, Eq, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoadConfig {
    /// Autoload behavior of the not-yet-loaded view.
    pub autoload: AutoloadPolicy,
    /// Cancel the in-flight loader when a newer `Load` is handled.
    pub cancel_superseded: bool,
    /// Upper bound for a single loader run.
    pub timeout: Option<Duration>,
}

impl LoadConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_autoload(self, autoload: AutoloadPolicy) -> Self {
        Self { autoload, ..self }
    }

    pub fn with_cancel_superseded(self, cancel_superseded: bool) -> Self {
        Self {
            cancel_superseded,
            ..self
        }
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..self
        }
    }
}
