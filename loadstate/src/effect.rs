use futures::future::{BoxFuture, FutureExt};
use std::fmt;
use std::future::Future;

/// A deferred piece of work returned by a reducer. Resolves to the action to
/// dispatch next, or `None` when there is nothing to report.
pub type EffectFuture<A> = BoxFuture<'static, Option<A>>;

/// Ordered effects produced while handling one action.
#[must_use = "effects do nothing unless they are run"]
pub struct Effects<A> {
    effects: Vec<EffectFuture<A>>,
}

impl<A> Effects<A> {
    pub fn none() -> Self {
        Effects { effects: vec![] }
    }

    pub fn one(effect: EffectFuture<A>) -> Self {
        Effects {
            effects: vec![effect],
        }
    }

    pub fn many(effects: Vec<EffectFuture<A>>) -> Self {
        Effects { effects }
    }

    /// An effect that always reports the action its future resolves to.
    pub fn future<F>(future: F) -> Self
    where
        F: Future<Output = A> + Send + 'static,
        A: Send + 'static,
    {
        Effects::one(future.map(Some).boxed())
    }

    pub fn join(mut self, mut effects: Effects<A>) -> Self {
        self.effects.append(&mut effects.effects);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Wraps every reported action, e.g. to embed a child action in its parent.
    pub fn map<B, F>(self, f: F) -> Effects<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: Fn(A) -> B + Clone + Send + Sync + 'static,
    {
        let effects = self
            .effects
            .into_iter()
            .map(|effect| {
                let f = f.clone();
                effect.map(move |action| action.map(f)).boxed()
            })
            .collect();
        Effects { effects }
    }
}

impl<A> Default for Effects<A> {
    fn default() -> Self {
        Effects::none()
    }
}

impl<A> fmt::Debug for Effects<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Effects")
            .field("len", &self.effects.len())
            .finish()
    }
}

impl<A> IntoIterator for Effects<A> {
    type Item = EffectFuture<A>;
    type IntoIter = std::vec::IntoIter<EffectFuture<A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.effects.into_iter()
    }
}
