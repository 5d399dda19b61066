//! Personas: Built-in Agent Profiles
//!
//! An immutable registry mapping agent-type keys (`financial`, `weather`,
//! `technical`) to a display name, a one-line description and the system
//! prompt an agent runtime uses to steer its language model.

pub mod agent;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

pub use agent::{get_profile, list_keys, AgentProfile, AgentRegistry};
pub use error::{ApiError, RegistryError};
