use crate::{AutoloadPolicy, LoadConfig, LoadState};
use std::time::Duration;

type Item = LoadState<i32, String>;

#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
struct Profile {
    name: String,
    friends: LoadState<Vec<String>, String>,
}

#[test]
fn test_loaded_encodes_bare_value() {
    let json = serde_json::to_string(&Item::loaded(5)).unwrap();
    assert_eq!(json, "5");
    let decoded: Item = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, LoadState::loaded(5));
}

#[test]
fn test_loading_collapses_to_loaded() {
    let json = serde_json::to_string(&Item::loading(Some(9))).unwrap();
    assert_eq!(json, "9");
    let decoded: Item = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, LoadState::loaded(9));
}

#[test]
fn test_states_without_value_encode_as_null() {
    assert_eq!(serde_json::to_string(&Item::NotRequested).unwrap(), "null");
    assert_eq!(serde_json::to_string(&Item::loading(None)).unwrap(), "null");
    assert_eq!(
        serde_json::to_string(&Item::failed("boom".to_string())).unwrap(),
        "null"
    );
    assert!(serde_json::from_str::<Item>("null").is_err());
}

#[test]
fn test_nested_state_round_trip() {
    let profile = Profile {
        name: "ada".to_string(),
        friends: LoadState::loading(Some(vec!["grace".to_string()])),
    };
    let json = serde_json::to_string(&profile).unwrap();
    assert_eq!(json, r#"{"name":"ada","friends":["grace"]}"#);

    let decoded: Profile = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.friends, LoadState::loaded(vec!["grace".to_string()]));
}

#[test]
fn test_autoload_policy_names() {
    assert_eq!(
        serde_json::to_string(&AutoloadPolicy::WhenNotRequested).unwrap(),
        r#""when_not_requested""#
    );
    let policy: AutoloadPolicy = serde_json::from_str(r#""always""#).unwrap();
    assert_eq!(policy, AutoloadPolicy::Always);
}

#[test]
fn test_config_defaults_missing_fields() {
    let config: LoadConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, LoadConfig::default());

    let config: LoadConfig =
        serde_json::from_str(r#"{"autoload":"never","cancel_superseded":true}"#).unwrap();
    assert_eq!(config.autoload, AutoloadPolicy::Never);
    assert!(config.cancel_superseded);
    assert_eq!(config.timeout, None);

    let config = LoadConfig::new().with_timeout(Duration::from_millis(1500));
    let json = serde_json::to_string(&config).unwrap();
    let decoded: LoadConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, config);
}
