use crate::{
    load, load_with_timeout, Effects, IntoLoadResult, LoadAction, LoadConfig, LoadError,
    LoadState, LoadTicket,
};
use futures::future::{BoxFuture, FutureExt};
use std::future::Future;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// Maps a state and an action to the next state plus the work to run next.
pub trait Reducer<S, A> {
    fn reduce(&self, state: S, action: A) -> (S, Effects<A>);
}

impl<S, A, F> Reducer<S, A> for F
where
    F: Fn(S, A) -> (S, Effects<A>),
{
    fn reduce(&self, state: S, action: A) -> (S, Effects<A>) {
        self(state, action)
    }
}

/// The bare transition of a [`LoadState`]. Total: every state accepts every
/// action.
///
/// | action                     | next state                             |
/// |----------------------------|----------------------------------------|
/// | `Load`                     | `Loading` carrying the best known value |
/// | `ReceiveLoaded(Ok(value))` | `Loaded { value }`                     |
/// | `ReceiveLoaded(Err(error))`| `Failed { error }`                     |
///
/// `Settled` is applied like `ReceiveLoaded`; its ticket only matters to a
/// [`LoadReducer`].
pub fn reduce<T, E>(state: LoadState<T, E>, action: LoadAction<T, E>) -> LoadState<T, E> {
    match action {
        LoadAction::Load => LoadState::Loading {
            previous: state.into_value(),
        },
        LoadAction::ReceiveLoaded(Ok(value)) | LoadAction::Settled(_, Ok(value)) => {
            LoadState::Loaded { value }
        }
        LoadAction::ReceiveLoaded(Err(error)) | LoadAction::Settled(_, Err(error)) => {
            LoadState::Failed { error }
        }
    }
}

type Loader<T, E> = Arc<dyn Fn() -> BoxFuture<'static, LoadAction<T, E>> + Send + Sync>;

/// Reducer for a single [`LoadState`], optionally running a loader on `Load`.
///
/// Every `Load` bumps a generation counter. The loader started for it reports
/// back with [`LoadAction::Settled`], tagged with that generation, and the
/// outcome is only applied if no newer `Load` has been handled by then. An
/// older load that completes late cannot overwrite a newer one, even when its
/// outcome is queued behind the newer `Load`. `ReceiveLoaded` actions sent by
/// callers carry no ticket and are applied as they come.
pub struct LoadReducer<T, E> {
    loader: Option<Loader<T, E>>,
    cancel_superseded: bool,
    generation: AtomicU64,
    pub(crate) in_flight: Mutex<Option<CancellationToken>>,
}

impl<T, E> LoadReducer<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// A reducer without a loader. The caller dispatches `ReceiveLoaded` itself.
    pub fn new() -> Self {
        LoadReducer {
            loader: None,
            cancel_superseded: false,
            generation: AtomicU64::new(0),
            in_flight: Mutex::new(None),
        }
    }

    pub fn with_loader<F, Fut, R>(loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: IntoLoadResult<T, E> + Send + 'static,
    {
        let loader: Loader<T, E> = Arc::new(move || load(loader()).boxed());
        LoadReducer {
            loader: Some(loader),
            ..Self::new()
        }
    }

    /// A reducer whose loader honors `config.timeout` and `config.cancel_superseded`.
    pub fn from_config<F, Fut, R>(config: &LoadConfig, loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: IntoLoadResult<T, E> + Send + 'static,
        E: From<LoadError>,
    {
        let reducer = match config.timeout {
            Some(timeout) => {
                let loader: Loader<T, E> =
                    Arc::new(move || load_with_timeout(loader(), timeout).boxed());
                LoadReducer {
                    loader: Some(loader),
                    ..Self::new()
                }
            }
            None => Self::with_loader(loader),
        };
        reducer.cancel_superseded(config.cancel_superseded)
    }

    pub fn cancel_superseded(self, cancel_superseded: bool) -> Self {
        Self {
            cancel_superseded,
            ..self
        }
    }

    pub fn has_loader(&self) -> bool {
        self.loader.is_some()
    }

    /// Number of `Load` actions handled so far.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub(crate) fn in_flight(&self) -> MutexGuard<'_, Option<CancellationToken>> {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn track_in_flight(&self) -> Option<CancellationToken> {
        if !self.cancel_superseded {
            return None;
        }
        let token = CancellationToken::new();
        if let Some(previous) = self.in_flight().replace(token.clone()) {
            previous.cancel();
        }
        Some(token)
    }

    fn start_load(&self, loader: &Loader<T, E>, generation: u64) -> Effects<LoadAction<T, E>> {
        let operation = loader();
        let ticket = LoadTicket::new(generation);
        let token = self.track_in_flight();
        let effect = async move {
            let action = match token {
                Some(token) => tokio::select! {
                    biased;
                    _ = token.cancelled() => None,
                    action = operation => Some(action),
                },
                None => Some(operation.await),
            };
            if action.is_none() {
                debug!(generation, "superseded load cancelled");
            }
            action.map(|action| action.settled_by(ticket))
        };
        Effects::one(effect.boxed())
    }

    fn apply_settled(
        &self,
        state: LoadState<T, E>,
        ticket: LoadTicket,
        result: Result<T, E>,
    ) -> LoadState<T, E> {
        let generation = ticket.generation();
        if generation != self.generation() {
            debug!(generation, latest = self.generation(), "dropping outcome of superseded load");
            return state;
        }
        self.in_flight().take();
        let next = reduce(state, LoadAction::ReceiveLoaded(result));
        trace!(generation, to = %next.current_variant(), "load outcome applied");
        next
    }
}

impl<T, E> Default for LoadReducer<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Reducer<LoadState<T, E>, LoadAction<T, E>> for LoadReducer<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    fn reduce(
        &self,
        state: LoadState<T, E>,
        action: LoadAction<T, E>,
    ) -> (LoadState<T, E>, Effects<LoadAction<T, E>>) {
        match action {
            LoadAction::Load => {
                let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
                debug!(generation, from = %state.current_variant(), "load requested");
                let effects = match &self.loader {
                    Some(loader) => self.start_load(loader, generation),
                    None => Effects::none(),
                };
                (reduce(state, LoadAction::Load), effects)
            }
            LoadAction::Settled(ticket, result) => {
                (self.apply_settled(state, ticket, result), Effects::none())
            }
            received => {
                let next = reduce(state, received);
                trace!(to = %next.current_variant(), "load outcome applied");
                (next, Effects::none())
            }
        }
    }
}

/// A child reducer lifted onto a parent state. See [`pullback`].
pub struct Pullback<R, Get, ToChild, FromChild, CS, CA> {
    reducer: R,
    get: Get,
    to_child: ToChild,
    from_child: FromChild,
    _child: PhantomData<fn(CS, CA)>,
}

/// Lifts `reducer` so it runs on the field `get` points at, for the parent
/// actions `to_child` recognizes. Effects are mapped back with `from_child`.
/// Other parent actions leave the parent state untouched.
pub fn pullback<R, PS, PA, CS, CA, Get, ToChild, FromChild>(
    reducer: R,
    get: Get,
    to_child: ToChild,
    from_child: FromChild,
) -> Pullback<R, Get, ToChild, FromChild, CS, CA>
where
    R: Reducer<CS, CA>,
    Get: Fn(&mut PS) -> &mut CS,
    ToChild: Fn(PA) -> Option<CA>,
    FromChild: Fn(CA) -> PA + Clone + Send + Sync + 'static,
{
    Pullback {
        reducer,
        get,
        to_child,
        from_child,
        _child: PhantomData,
    }
}

impl<R, PS, PA, CS, CA, Get, ToChild, FromChild> Reducer<PS, PA>
    for Pullback<R, Get, ToChild, FromChild, CS, CA>
where
    R: Reducer<CS, CA>,
    CS: Default,
    CA: Send + 'static,
    PA: Send + 'static,
    Get: Fn(&mut PS) -> &mut CS,
    ToChild: Fn(PA) -> Option<CA>,
    FromChild: Fn(CA) -> PA + Clone + Send + Sync + 'static,
{
    fn reduce(&self, mut state: PS, action: PA) -> (PS, Effects<PA>) {
        let Some(child_action) = (self.to_child)(action) else {
            return (state, Effects::none());
        };
        let slot = (self.get)(&mut state);
        let (child, effects) = self.reducer.reduce(std::mem::take(slot), child_action);
        *slot = child;
        (state, effects.map(self.from_child.clone()))
    }
}

/// Two reducers run one after the other on the same action.
pub struct Combine<R1, R2> {
    first: R1,
    second: R2,
}

pub fn combine<R1, R2>(first: R1, second: R2) -> Combine<R1, R2> {
    Combine { first, second }
}

impl<S, A, R1, R2> Reducer<S, A> for Combine<R1, R2>
where
    A: Clone,
    R1: Reducer<S, A>,
    R2: Reducer<S, A>,
{
    fn reduce(&self, state: S, action: A) -> (S, Effects<A>) {
        let (state, first) = self.first.reduce(state, action.clone());
        let (state, second) = self.second.reduce(state, action);
        (state, first.join(second))
    }
}
