use crate::{Effects, LoadAction, LoadError, LoadState, State};

mod autoload_test;
#[cfg(feature = "serde")]
mod serde_test;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct TestState {
    pub count: u32,
    pub item: LoadState<String, LoadError>,
}

impl State for TestState {}

#[derive(Clone, Debug, PartialEq)]
pub enum TestAction {
    Increment,
    Item(LoadAction<String, LoadError>),
}

impl TestAction {
    pub fn item(self) -> Option<LoadAction<String, LoadError>> {
        match self {
            TestAction::Item(action) => Some(action),
            _ => None,
        }
    }
}

pub fn count_increments(state: TestState, action: TestAction) -> (TestState, Effects<TestAction>) {
    match action {
        TestAction::Increment => (
            TestState {
                count: state.count + 1,
                ..state
            },
            Effects::none(),
        ),
        _ => (state, Effects::none()),
    }
}

/// Awaits every effect in order and collects the actions they report.
pub async fn run_effects<A>(effects: Effects<A>) -> Vec<A> {
    let mut actions = Vec::new();
    for effect in effects {
        if let Some(action) = effect.await {
            actions.push(action);
        }
    }
    actions
}
