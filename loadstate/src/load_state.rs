use std::fmt;

/// The lifecycle of a single value that has to be fetched from somewhere else.
///
/// A `LoadState` starts out as [`LoadState::NotRequested`], moves to
/// [`LoadState::Loading`] when a load is requested and settles on either
/// [`LoadState::Loaded`] or [`LoadState::Failed`] once the outcome arrives.
/// Every state can go back to `Loading`; there is no terminal state.
///
/// `Loading` keeps the last value that was available so that it can still be
/// shown while a refresh is in flight.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum LoadState<T, E> {
    /// Nothing has been requested yet.
    NotRequested,
    /// A load is in flight. `previous` is the value available before it started.
    Loading { previous: Option<T> },
    /// The most recent load succeeded.
    Loaded { value: T },
    /// The most recent load failed.
    Failed { error: E },
}

/// Discriminant of a [`LoadState`], without its payload.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum LoadStateTag {
    NotRequested,
    Loading,
    Loaded,
    Failed,
}

impl fmt::Display for LoadStateTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LoadStateTag::NotRequested => "not requested",
            LoadStateTag::Loading => "loading",
            LoadStateTag::Loaded => "loaded",
            LoadStateTag::Failed => "failed",
        };
        f.write_str(name)
    }
}

impl<T, E> LoadState<T, E> {
    pub fn not_requested() -> Self {
        LoadState::NotRequested
    }

    pub fn loading(previous: Option<T>) -> Self {
        LoadState::Loading { previous }
    }

    pub fn loaded(value: T) -> Self {
        LoadState::Loaded { value }
    }

    pub fn failed(error: E) -> Self {
        LoadState::Failed { error }
    }

    pub fn current_variant(&self) -> LoadStateTag {
        match self {
            LoadState::NotRequested => LoadStateTag::NotRequested,
            LoadState::Loading { .. } => LoadStateTag::Loading,
            LoadState::Loaded { .. } => LoadStateTag::Loaded,
            LoadState::Failed { .. } => LoadStateTag::Failed,
        }
    }

    pub fn is_not_requested(&self) -> bool {
        matches!(self, LoadState::NotRequested)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading { .. })
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed { .. })
    }

    /// True once the most recent load has produced an outcome.
    pub fn is_settled(&self) -> bool {
        matches!(self, LoadState::Loaded { .. } | LoadState::Failed { .. })
    }

    pub fn has_value(&self) -> bool {
        self.value_ref().is_some()
    }

    /// The best known value: the loaded value, or the one carried through a
    /// refresh. `Failed` and `NotRequested` have none.
    pub fn value_ref(&self) -> Option<&T> {
        match self {
            LoadState::Loaded { value } => Some(value),
            LoadState::Loading { previous } => previous.as_ref(),
            LoadState::NotRequested | LoadState::Failed { .. } => None,
        }
    }

    /// Owned copy of [`value_ref`](Self::value_ref).
    pub fn current_value(&self) -> Option<T>
    where
        T: Clone,
    {
        self.value_ref().cloned()
    }

    /// Consumes the state, keeping only the best known value.
    pub fn into_value(self) -> Option<T> {
        match self {
            LoadState::Loaded { value } => Some(value),
            LoadState::Loading { previous } => previous,
            LoadState::NotRequested | LoadState::Failed { .. } => None,
        }
    }

    pub fn error_ref(&self) -> Option<&E> {
        match self {
            LoadState::Failed { error } => Some(error),
            _ => None,
        }
    }

    /// Replaces the state with `Loaded`, dropping whatever was there before.
    pub fn set_loaded(&mut self, value: T) {
        *self = LoadState::Loaded { value };
    }

    /// Converts the value, in `Loaded` or carried by `Loading`, keeping the variant.
    pub fn map<U, F>(self, f: F) -> LoadState<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            LoadState::NotRequested => LoadState::NotRequested,
            LoadState::Loading { previous } => LoadState::Loading {
                previous: previous.map(f),
            },
            LoadState::Loaded { value } => LoadState::Loaded { value: f(value) },
            LoadState::Failed { error } => LoadState::Failed { error },
        }
    }

    pub fn map_err<F2, F>(self, f: F) -> LoadState<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            LoadState::NotRequested => LoadState::NotRequested,
            LoadState::Loading { previous } => LoadState::Loading { previous },
            LoadState::Loaded { value } => LoadState::Loaded { value },
            LoadState::Failed { error } => LoadState::Failed { error: f(error) },
        }
    }
}

impl<T, E> Default for LoadState<T, E> {
    fn default() -> Self {
        LoadState::NotRequested
    }
}

impl<T, E> From<Result<T, E>> for LoadState<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => LoadState::Loaded { value },
            Err(error) => LoadState::Failed { error },
        }
    }
}

// Only the best known value is encoded. Loading and failure bookkeeping is not
// part of the wire form, so anything decoded comes back as `Loaded`.
#[cfg(feature = "serde")]
impl<T, E> serde::Serialize for LoadState<T, E>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.value_ref(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, E> serde::Deserialize<'de> for LoadState<T, E>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        T::deserialize(deserializer).map(LoadState::loaded)
    }
}
