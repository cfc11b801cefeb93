//! Integration tests for loading the YAML config

use foliotui::config::{Config, PLACEHOLDER_SERVICE_ID};
use foliotui::content::PHRASES;
use foliotui::services::RelayCredentials;

/// Test: a full config overrides the relay ids and the hero phrases
#[test]
fn test_full_config() {
    let config = Config::from_yaml(
        r#"
relay:
  service_id: service_abc
  template_id: template_xyz
  user_id: user_123
  endpoint: http://localhost:8080
  timeout_secs: 3
hero:
  phrases:
    - "Ada | Engineer"
    - "Ada | Analyst"
"#,
    )
    .unwrap();

    assert!(!config.uses_placeholder_relay());
    assert_eq!(config.relay.endpoint, "http://localhost:8080");
    assert_eq!(config.relay.timeout_secs, 3);
    assert_eq!(config.phrases(), vec!["Ada | Engineer", "Ada | Analyst"]);

    let credentials = RelayCredentials::from(&config.relay);
    assert_eq!(credentials.service_id, "service_abc");
    assert_eq!(credentials.template_id, "template_xyz");
    assert_eq!(credentials.user_id, "user_123");
}

/// Test: without a hero block the built-in phrases are used
#[test]
fn test_builtin_phrases_by_default() {
    let config = Config::from_yaml("relay:\n  service_id: a\n  template_id: b\n  user_id: c\n").unwrap();
    assert_eq!(config.phrases().len(), PHRASES.len());
    assert_eq!(config.phrases()[0], PHRASES[0]);
}

/// Test: the built-in default runs with placeholder ids
#[test]
fn test_default_config_uses_placeholders() {
    let config = Config::default();
    assert!(config.uses_placeholder_relay());
    assert_eq!(config.relay.service_id, PLACEHOLDER_SERVICE_ID);
    assert!(config.validate().is_ok());
}

/// Test: invalid documents are rejected
#[test]
fn test_invalid_configs_rejected() {
    // Missing relay block
    assert!(Config::from_yaml("hero:\n  phrases: [a]\n").is_err());

    // Empty phrase list would leave the typewriter with nothing to type
    let empty = "relay:\n  service_id: a\n  template_id: b\n  user_id: c\nhero:\n  phrases: []\n";
    let err = Config::from_yaml(empty).unwrap_err();
    assert!(err.to_string().contains("hero.phrases"));

    let zero_timeout =
        "relay:\n  service_id: a\n  template_id: b\n  user_id: c\n  timeout_secs: 0\n";
    assert!(Config::from_yaml(zero_timeout).is_err());
}
