use futures_core::stream::Stream;
use pin_project::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Extension trait with stream adaptors for following state changes.
///
/// Implemented for every [`Stream`], most usefully the change stream of a
/// [`Store`](crate::Store), which yields the current state first and then
/// each state it settles into.
pub trait LoadStreamExt: Stream {
    /// Creates a stream that yields items up to and including the first one
    /// `done` accepts, then ends.
    ///
    /// Unlike `take_while`, the accepted item is still yielded, which is what
    /// a caller waiting for a load wants: the settled state itself. If the
    /// inner stream ends first, this stream ends with it.
    ///
    /// ## Examples
    ///
    /// ```
    /// use futures::stream::{self, StreamExt};
    /// use loadstate::{LoadState, LoadStreamExt};
    ///
    /// async fn example() {
    ///     let states = stream::iter(vec![
    ///         LoadState::<u32, String>::NotRequested,
    ///         LoadState::loading(None),
    ///         LoadState::loaded(7),
    ///         LoadState::loading(Some(7)),
    ///     ]);
    ///
    ///     // Collects everything up to the first settled state.
    ///     let seen: Vec<_> = states.stop_after(|state| state.is_settled()).collect().await;
    ///     assert_eq!(seen.last(), Some(&LoadState::loaded(7)));
    ///     assert_eq!(seen.len(), 3);
    /// }
    /// ```
    fn stop_after<F>(self, done: F) -> StopAfter<Self, F>
    where
        F: FnMut(&Self::Item) -> bool,
        Self: Sized,
    {
        StopAfter {
            stream: self,
            finished: false,
            done,
        }
    }
}

impl<T: ?Sized> LoadStreamExt for T where T: Stream {}

/// A stream that ends right after the first item its predicate accepts.
///
/// Created by [`LoadStreamExt::stop_after`]. It wraps the inner stream and the
/// predicate, and remembers once it has finished so it never polls the inner
/// stream again.
#[pin_project(project = StopAfterProj)]
#[derive(Debug)]
#[must_use = "streams do nothing unless polled"]
pub struct StopAfter<St, F> {
    #[pin]
    stream: St,
    finished: bool,
    done: F,
}

impl<St, F> Stream for StopAfter<St, F>
where
    St: Stream,
    F: FnMut(&St::Item) -> bool,
{
    type Item = St::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let StopAfterProj {
            stream,
            finished,
            done,
        } = self.project();

        if *finished {
            return Poll::Ready(None);
        }
        let polled = stream.poll_next(cx);
        match &polled {
            Poll::Ready(Some(item)) => *finished = done(item),
            Poll::Ready(None) => *finished = true,
            Poll::Pending => {}
        }
        polled
    }
}
