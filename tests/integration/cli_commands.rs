//! Integration tests for CLI commands driven through RunContext

use personas::cli::{map_error, Commands, RunContext};
use personas::config::{OutputFormat, PersonasConfig};

fn context() -> RunContext<'static> {
    let mut config = PersonasConfig::default();
    config.output.color = false;
    RunContext::new(&config)
}

#[test]
fn test_list_text() {
    let output = context()
        .execute(&Commands::List {
            format: Some(OutputFormat::Text),
        })
        .unwrap();
    assert!(output.contains("Financial Research Agent"));
    assert!(output.contains("Weather Analysis Agent"));
    assert!(output.contains("Technical Support Agent"));
    assert!(output.contains("Total: 3 agent type(s)"));
}

#[test]
fn test_list_json() {
    let output = context()
        .execute(&Commands::List {
            format: Some(OutputFormat::Json),
        })
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["total"], 3);
    assert_eq!(value["agents"][1]["key"], "weather");
    assert_eq!(value["agents"][1]["name"], "Weather Analysis Agent");
}

#[test]
fn test_show_json_round_trips_profile() {
    let output = context()
        .execute(&Commands::Show {
            key: "technical".to_string(),
            format: Some(OutputFormat::Json),
            prompt_only: false,
        })
        .unwrap();
    let profile: personas::AgentProfile = serde_json::from_str(&output).unwrap();
    assert_eq!(&profile, personas::get_profile("technical").unwrap());
}

#[test]
fn test_show_unknown_maps_to_helpful_message() {
    let err = context()
        .execute(&Commands::Show {
            key: "nonexistent".to_string(),
            format: None,
            prompt_only: false,
        })
        .unwrap_err();
    assert_eq!(
        map_error(&err),
        "Unknown agent type: 'nonexistent'. Available agent types: financial, weather, technical"
    );
}

#[test]
fn test_validate_builtin() {
    let output = context()
        .execute(&Commands::Validate {
            format: Some(OutputFormat::Text),
            detailed: true,
        })
        .unwrap();
    assert!(output.contains("✓ technical: All checks passed (5/5 checks)"));
    assert!(output.contains("  ✓ Key matches registry entry"));
    assert!(output.contains("Summary: 3 valid, 0 invalid (out of 3 total)"));
}
