//! CLI presentation: text and json formatters for list, show and validate.

use crate::agent::{AgentProfile, AgentRegistry, ProfileReport};
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde_json::json;

pub fn format_list_text(registry: &AgentRegistry) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Key", "Name", "Description"]);
    for profile in registry.profiles() {
        table.add_row(vec![&profile.key, &profile.name, &profile.description]);
    }
    format!("{}\n\nTotal: {} agent type(s)", table, registry.len())
}

pub fn format_list_json(registry: &AgentRegistry) -> String {
    let agents: Vec<_> = registry
        .profiles()
        .map(|p| {
            json!({
                "key": p.key,
                "name": p.name,
                "description": p.description,
            })
        })
        .collect();
    let out = json!({ "agents": agents, "total": registry.len() });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_show_text(profile: &AgentProfile) -> String {
    let mut output = format!("Agent: {}\n", profile.key);
    output.push_str(&format!("Name: {}\n", profile.name));
    output.push_str(&format!("Description: {}\n", profile.description));
    output.push_str("\nSystem Prompt:\n");
    output.push_str(&profile.system_prompt);
    output
}

pub fn format_show_json(profile: &AgentProfile) -> String {
    serde_json::to_string_pretty(profile).unwrap_or_else(|_| "{}".to_string())
}

fn mark(passed: bool, color: bool) -> String {
    match (passed, color) {
        (true, true) => "✓".green().to_string(),
        (false, true) => "✗".red().to_string(),
        (true, false) => "✓".to_string(),
        (false, false) => "✗".to_string(),
    }
}

pub fn format_validation_text(reports: &[ProfileReport], detailed: bool, color: bool) -> String {
    let mut output = String::from("Validating agent registry:\n\n");

    for report in reports {
        if report.is_valid() {
            output.push_str(&format!(
                "{} {}: All checks passed ({}/{} checks)\n",
                mark(true, color),
                report.key,
                report.passed(),
                report.checks.len()
            ));
        } else {
            output.push_str(&format!(
                "{} {}: Validation failed\n",
                mark(false, color),
                report.key
            ));
        }

        for outcome in &report.checks {
            if detailed || !outcome.passed {
                output.push_str(&format!(
                    "  {} {}\n",
                    mark(outcome.passed, color),
                    outcome.check
                ));
            }
        }
    }

    let valid = reports.iter().filter(|r| r.is_valid()).count();
    output.push_str(&format!(
        "\nSummary: {} valid, {} invalid (out of {} total)",
        valid,
        reports.len() - valid,
        reports.len()
    ));
    output
}

pub fn format_validation_json(reports: &[ProfileReport]) -> String {
    let agents: Vec<_> = reports
        .iter()
        .map(|report| {
            json!({
                "key": report.key,
                "valid": report.is_valid(),
                "checks": report.checks,
            })
        })
        .collect();
    let valid = reports.iter().filter(|r| r.is_valid()).count();
    let out = json!({
        "agents": agents,
        "valid": valid,
        "invalid": reports.len() - valid,
    });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}
