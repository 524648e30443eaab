use thiserror::Error;

/// Errors produced by the loading helpers and the [`Store`](crate::Store).
///
/// Load operations carry their own error type `E`; the variants here are the
/// failures this crate can originate itself. Operations that want them reported
/// inside a [`LoadState`](crate::LoadState) use an `E: From<LoadError>`.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum LoadError {
    /// A general failure with a message describing what went wrong.
    #[error("{0}")]
    Failed(String),

    /// The operation finished without producing a value.
    #[error("operation returned no value")]
    Missing,

    /// The operation was cancelled before it completed.
    #[error("load was cancelled")]
    Cancelled,

    /// The operation did not finish within its deadline.
    #[error("deadline has elapsed")]
    Timeout,

    /// The store's processing task is no longer running.
    #[error("store is closed")]
    StoreClosed,
}

impl LoadError {
    pub fn failed(message: impl Into<String>) -> Self {
        LoadError::Failed(message.into())
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadError::Failed(_))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, LoadError::Missing)
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, LoadError::Cancelled)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, LoadError::Timeout)
    }
}

impl From<String> for LoadError {
    fn from(message: String) -> Self {
        LoadError::Failed(message)
    }
}

impl From<&str> for LoadError {
    fn from(message: &str) -> Self {
        LoadError::Failed(message.to_string())
    }
}
