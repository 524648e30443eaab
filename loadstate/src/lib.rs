mod action;
mod autoload;
mod config;
mod effect;
mod load;
mod load_error;
mod load_result;
mod load_state;
mod reducer;
mod store;
mod stream_ext;

pub use action::*;
pub use autoload::*;
pub use config::*;
pub use effect::*;
pub use load::*;
pub use load_error::*;
pub use load_result::*;
pub use load_state::*;
pub use reducer::*;
pub use store::*;
pub use stream_ext::*;

#[cfg(test)]
mod unit_tests;

/// Marker for values that can live inside a [`Store`].
pub trait State: Clone + Send + Sync + 'static {}

impl<T, E> State for LoadState<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
}
