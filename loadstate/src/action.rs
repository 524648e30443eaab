/// Identifies the `Load` a loader outcome belongs to.
///
/// Tickets are handed out by [`LoadReducer`](crate::LoadReducer) and cannot be
/// made outside this crate.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub(crate) fn new(generation: u64) -> Self {
        LoadTicket(generation)
    }

    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Events that drive a [`LoadState`](crate::LoadState).
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum LoadAction<T, E> {
    /// Request a (re)load.
    Load,
    /// The outcome of a load attempt.
    ReceiveLoaded(Result<T, E>),
    /// The outcome of the loader started for the `Load` that issued `ticket`.
    ///
    /// [`LoadReducer`](crate::LoadReducer) discards it when a newer `Load` has
    /// been handled since. Without a reducer to compare against it is applied
    /// like `ReceiveLoaded`.
    Settled(LoadTicket, Result<T, E>),
}

impl<T, E> LoadAction<T, E> {
    pub fn loaded(value: T) -> Self {
        LoadAction::ReceiveLoaded(Ok(value))
    }

    pub fn failed(error: E) -> Self {
        LoadAction::ReceiveLoaded(Err(error))
    }

    pub fn is_load(&self) -> bool {
        matches!(self, LoadAction::Load)
    }

    /// The carried outcome, if this is one of the outcome actions.
    pub fn result(&self) -> Option<&Result<T, E>> {
        match self {
            LoadAction::Load => None,
            LoadAction::ReceiveLoaded(result) | LoadAction::Settled(_, result) => Some(result),
        }
    }

    pub(crate) fn settled_by(self, ticket: LoadTicket) -> Self {
        match self {
            LoadAction::ReceiveLoaded(result) => LoadAction::Settled(ticket, result),
            other => other,
        }
    }
}

impl<T, E> From<Result<T, E>> for LoadAction<T, E> {
    fn from(result: Result<T, E>) -> Self {
        LoadAction::ReceiveLoaded(result)
    }
}
