use crate::{AutoloadPolicy, Effects, LoadAction, LoadError, LoadState, Reducer, State};
use futures_signals::signal::{Mutable, MutableSignalCloned, SignalExt, SignalStream};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// Holds a state and applies actions to it through a [`Reducer`], one at a time.
///
/// Actions and state queries share one FIFO queue handled by a single
/// background task, so the state has exactly one writer and a query is
/// answered right after the actions queued ahead of it, however many effects
/// keep feeding actions in behind it. Effects returned by the reducer run as
/// separate tasks and their actions are queued like any other. Dropping the
/// store cancels the processing task and every effect still running.
///
/// Must be created from within a tokio runtime.
pub struct Store<S: State, A> {
    state: Mutable<S>,
    command_tx: UnboundedSender<Command<S, A>>,
    shutdown: CancellationToken,
}

enum Command<S, A> {
    Dispatch(A),
    Inspect(Box<dyn FnOnce(S) + Send>),
}

impl<S: State, A: Send + 'static> Store<S, A> {
    pub fn new<R>(initial_state: S, reducer: R) -> Self
    where
        R: Reducer<S, A> + Send + 'static,
    {
        let state = Mutable::new(initial_state);
        let (command_tx, command_rx) =
            tokio::sync::mpsc::unbounded_channel::<Command<S, A>>();
        let shutdown = CancellationToken::new();

        tokio::spawn(Self::process_queue(
            state.clone(),
            reducer,
            command_tx.clone(),
            command_rx,
            shutdown.clone(),
        ));

        Store {
            state,
            command_tx,
            shutdown,
        }
    }

    async fn process_queue<R>(
        state: Mutable<S>,
        reducer: R,
        command_tx: UnboundedSender<Command<S, A>>,
        mut command_rx: UnboundedReceiver<Command<S, A>>,
        shutdown: CancellationToken,
    ) where
        R: Reducer<S, A>,
    {
        loop {
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                Some(command) = command_rx.recv() => match command {
                    Command::Dispatch(action) => {
                        let (next_state, effects) = reducer.reduce(state.get_cloned(), action);
                        state.set(next_state);
                        Self::run_effects(effects, &command_tx, &shutdown);
                    }
                    Command::Inspect(inspect) => inspect(state.get_cloned()),
                },
                else => break,
            }
        }
        debug!("store processing stopped");
    }

    fn run_effects(
        effects: Effects<A>,
        command_tx: &UnboundedSender<Command<S, A>>,
        shutdown: &CancellationToken,
    ) {
        for effect in effects {
            let command_tx = command_tx.clone();
            let shutdown = shutdown.clone();
            tokio::spawn(async move {
                tokio::select! {
                    biased;
                    _ = shutdown.cancelled() => trace!("effect dropped on shutdown"),
                    action = effect => {
                        if let Some(action) = action {
                            let _ = command_tx.send(Command::Dispatch(action));
                        }
                    }
                }
            });
        }
    }

    /// Queues `action` for the reducer.
    pub fn send(&self, action: A) -> Result<(), LoadError> {
        self.command_tx
            .send(Command::Dispatch(action))
            .map_err(|_| LoadError::StoreClosed)
    }

    /// The state as of the last handled action.
    pub fn state(&self) -> S {
        self.state.get_cloned()
    }

    /// The state once every action queued before this call has been handled.
    pub async fn await_state(&self) -> Result<S, LoadError> {
        let (tx, rx) = tokio::sync::oneshot::channel();
        self.command_tx
            .send(Command::Inspect(Box::new(move |state| {
                let _ = tx.send(state);
            })))
            .map_err(|_| LoadError::StoreClosed)?;
        rx.await.map_err(|_| LoadError::StoreClosed)
    }

    pub fn to_signal(&self) -> MutableSignalCloned<S> {
        self.state.signal_cloned()
    }

    pub fn to_stream(&self) -> SignalStream<MutableSignalCloned<S>> {
        self.state.signal_cloned().to_stream()
    }

    /// Reports that the view for the `LoadState` picked by `get` was displayed.
    /// Sends the `Load` the policy calls for, wrapped by `embed`, and returns
    /// whether one was sent.
    pub fn display<T, E, G, W>(
        &self,
        policy: AutoloadPolicy,
        get: G,
        embed: W,
    ) -> Result<bool, LoadError>
    where
        G: FnOnce(&S) -> &LoadState<T, E>,
        W: FnOnce(LoadAction<T, E>) -> A,
    {
        let action = {
            let state = self.state.lock_ref();
            policy.on_display(get(&*state))
        };
        match action {
            Some(action) => {
                trace!(?policy, "display triggered a load");
                self.send(embed(action))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Stops handling actions and cancels running effects.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }

    pub fn is_shut_down(&self) -> bool {
        self.shutdown.is_cancelled()
    }
}

impl<S: State, A> Drop for Store<S, A> {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
