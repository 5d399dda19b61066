//! Integration tests for the persona registry and CLI

mod cli_commands;
mod registry_contract;
