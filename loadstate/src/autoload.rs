use crate::{LoadAction, LoadState, LoadStateTag};

/// Whether showing the placeholder for a value that is not loaded yet should
/// request a load by itself.
///
/// The placeholder is what gets displayed for `NotRequested` and `Loading`.
/// `Loaded` and `Failed` have their own views and never autoload.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AutoloadPolicy {
    /// Request a load every time the placeholder is displayed.
    Always,
    /// Never request a load; the caller dispatches `Load` itself.
    Never,
    /// Request a load only if nothing has been requested yet.
    #[default]
    WhenNotRequested,
}

impl AutoloadPolicy {
    pub fn should_load<T, E>(&self, state: &LoadState<T, E>) -> bool {
        match self {
            AutoloadPolicy::Always => matches!(
                state.current_variant(),
                LoadStateTag::NotRequested | LoadStateTag::Loading
            ),
            AutoloadPolicy::Never => false,
            AutoloadPolicy::WhenNotRequested => state.is_not_requested(),
        }
    }

    /// The action a single display of `state` issues, if any.
    pub fn on_display<T, E>(&self, state: &LoadState<T, E>) -> Option<LoadAction<T, E>> {
        self.should_load(state).then_some(LoadAction::Load)
    }
}
