//! Lookup and enumeration contract of the built-in registry

use personas::agent::{validate_registry, AgentRegistry};
use personas::{get_profile, list_keys, RegistryError};

#[test]
fn test_every_listed_key_resolves_to_itself() {
    for key in list_keys() {
        let profile = get_profile(key).unwrap();
        assert_eq!(profile.key, key);
    }
}

#[test]
fn test_every_profile_has_non_empty_fields() {
    for profile in AgentRegistry::builtin().profiles() {
        assert!(!profile.name.is_empty(), "{} has empty name", profile.key);
        assert!(
            !profile.description.is_empty(),
            "{} has empty description",
            profile.key
        );
        assert!(
            !profile.system_prompt.is_empty(),
            "{} has empty system prompt",
            profile.key
        );
    }
}

#[test]
fn test_list_keys_is_deterministic() {
    let first = list_keys();
    for _ in 0..10 {
        assert_eq!(list_keys(), first);
    }
    assert_eq!(first, vec!["financial", "weather", "technical"]);
}

#[test]
fn test_repeated_lookups_are_equal() {
    let first = get_profile("financial").unwrap().clone();
    for _ in 0..10 {
        assert_eq!(*get_profile("financial").unwrap(), first);
    }
}

#[test]
fn test_financial_profile() {
    let profile = get_profile("financial").unwrap();
    assert_eq!(profile.name, "Financial Research Agent");
    assert_eq!(
        profile.description,
        "Iterative financial market analysis and research agent"
    );
    assert!(profile
        .system_prompt
        .starts_with("You are a financial research agent"));
    assert!(profile
        .system_prompt
        .ends_with("Maintain objectivity and avoid biased recommendations"));
}

#[test]
fn test_weather_profile() {
    let profile = get_profile("weather").unwrap();
    assert_eq!(profile.name, "Weather Analysis Agent");
    assert_eq!(
        profile.description,
        "Professional weather analysis and forecasting agent"
    );
}

#[test]
fn test_technical_profile() {
    let profile = get_profile("technical").unwrap();
    assert_eq!(profile.name, "Technical Support Agent");
    assert_eq!(
        profile.description,
        "System troubleshooting and technical support agent"
    );
}

#[test]
fn test_nonexistent_key() {
    match get_profile("nonexistent") {
        Err(RegistryError::UnknownAgentType { key, available }) => {
            assert_eq!(key, "nonexistent");
            assert_eq!(available, vec!["financial", "weather", "technical"]);
        }
        other => panic!("expected UnknownAgentType, got {:?}", other),
    }
}

#[test]
fn test_builtin_registry_validates() {
    assert!(validate_registry(AgentRegistry::builtin())
        .iter()
        .all(|report| report.is_valid()));
}
