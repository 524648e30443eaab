use crate::{AutoloadPolicy, LoadAction, LoadState};

type Item = LoadState<i32, String>;

fn displays(policy: AutoloadPolicy, state: &Item) -> usize {
    policy.on_display(state).into_iter().count()
}

#[test]
fn test_default_policy() {
    assert_eq!(AutoloadPolicy::default(), AutoloadPolicy::WhenNotRequested);
}

#[test]
fn test_when_not_requested() {
    let policy = AutoloadPolicy::WhenNotRequested;
    assert_eq!(displays(policy, &LoadState::NotRequested), 1);
    assert_eq!(displays(policy, &LoadState::loading(None)), 0);
    assert_eq!(displays(policy, &LoadState::loaded(1)), 0);
    assert_eq!(displays(policy, &LoadState::failed("x".to_string())), 0);
    assert_eq!(
        policy.on_display(&Item::NotRequested),
        Some(LoadAction::Load)
    );
}

#[test]
fn test_always() {
    let policy = AutoloadPolicy::Always;
    assert_eq!(displays(policy, &LoadState::NotRequested), 1);
    assert_eq!(displays(policy, &LoadState::loading(Some(1))), 1);
    assert_eq!(displays(policy, &LoadState::loaded(1)), 0);
    assert_eq!(displays(policy, &LoadState::failed("x".to_string())), 0);
}

#[test]
fn test_never() {
    let policy = AutoloadPolicy::Never;
    assert_eq!(displays(policy, &LoadState::NotRequested), 0);
    assert_eq!(displays(policy, &LoadState::loading(None)), 0);
    assert!(!policy.should_load(&Item::NotRequested));
}
