//! Agent Profiles
//!
//! The built-in table of agent personas, the immutable registry that indexes
//! it, and validation of the registry invariants. The registry is built once
//! on first access and shared by `&'static` reference afterwards; nothing in
//! this module mutates it.

pub mod builtin;
pub mod profile;
pub mod registry;
pub mod validation;

pub use builtin::{BuiltinProfile, BUILTIN_PROFILES};
pub use profile::AgentProfile;
pub use registry::AgentRegistry;
pub use validation::{validate_registry, CheckOutcome, ProfileReport};

use crate::error::RegistryError;

/// Look up a profile in the built-in registry.
pub fn get_profile(key: &str) -> Result<&'static AgentProfile, RegistryError> {
    AgentRegistry::builtin().get_profile(key)
}

/// Keys of the built-in registry in declaration order.
pub fn list_keys() -> Vec<&'static str> {
    AgentRegistry::builtin().list_keys()
}
