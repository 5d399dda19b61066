//! Registry validation: named checks over every profile.

use crate::agent::profile::AgentProfile;
use crate::agent::registry::AgentRegistry;
use serde::Serialize;

/// Outcome of one named check against one profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub check: &'static str,
    pub passed: bool,
}

/// Every check run against one registry entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileReport {
    pub key: String,
    pub checks: Vec<CheckOutcome>,
}

impl ProfileReport {
    pub fn is_valid(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    pub fn passed(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.checks.iter().filter(|c| !c.passed)
    }
}

/// Checks applied to a profile found under `key`.
const PROFILE_CHECKS: &[(&str, fn(&str, &AgentProfile) -> bool)] = &[
    ("Key matches registry entry", |key, p| p.key == key),
    ("Name is non-empty", |_, p| !p.name.trim().is_empty()),
    ("Description is non-empty", |_, p| !p.description.trim().is_empty()),
    ("System prompt is non-empty", |_, p| !p.system_prompt.trim().is_empty()),
    ("Description is a single line", |_, p| !p.description.contains('\n')),
];

/// Validate every profile in the registry, in declaration order.
pub fn validate_registry(registry: &AgentRegistry) -> Vec<ProfileReport> {
    registry
        .list_keys()
        .into_iter()
        .map(|key| ProfileReport {
            key: key.to_string(),
            checks: match registry.get(key) {
                Some(profile) => PROFILE_CHECKS
                    .iter()
                    .map(|&(check, rule)| CheckOutcome {
                        check,
                        passed: rule(key, profile),
                    })
                    .collect(),
                None => vec![CheckOutcome {
                    check: "Key resolves to a profile",
                    passed: false,
                }],
            },
        })
        .collect()
}
