//! CLI parse: clap types for personas. No behavior; definitions only.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Personas CLI - inspect built-in agent personas and their system prompts
#[derive(Parser)]
#[command(name = "personas")]
#[command(about = "Inspect built-in agent personas and their system prompts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (replaces the global config file)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable logging entirely
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr)
    #[arg(long)]
    pub log_output: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List available agent types
    List {
        /// Output format (defaults to the configured format)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Show one agent profile
    Show {
        /// Agent type key (e.g. financial)
        key: String,
        /// Output format (defaults to the configured format)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Print only the system prompt
        #[arg(long)]
        prompt_only: bool,
    },
    /// Check registry invariants for every profile
    Validate {
        /// Output format (defaults to the configured format)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// List every check, not just failures
        #[arg(long)]
        detailed: bool,
    },
}
