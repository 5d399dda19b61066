//! Personas CLI Binary
//!
//! Command-line interface for listing and inspecting the built-in agent personas.

use clap::Parser;
use personas::cli::{Cli, RunContext};
use personas::config::{ConfigLoader, PersonasConfig};
use personas::logging::{init_logging, LoggingConfig};
use personas::ApiError;
use std::process;
use tracing::debug;

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", personas::cli::map_error(&e));
            process::exit(1);
        }
    };

    let logging_config = build_logging_config(&cli, &config);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    debug!("Personas CLI starting");

    let context = RunContext::new(&config);
    let outcome = Outcome::from_result(context.execute(&cli.command));
    if let Some(ref stdout) = outcome.stdout {
        println!("{}", stdout);
    }
    if let Some(ref stderr) = outcome.stderr {
        eprintln!("{}", stderr);
    }
    debug!(exit_code = outcome.exit_code, "Command finished");
    process::exit(outcome.exit_code);
}

/// What the process prints and its exit status for one command result.
#[derive(Debug, PartialEq, Eq)]
struct Outcome {
    stdout: Option<String>,
    stderr: Option<String>,
    exit_code: i32,
}

impl Outcome {
    /// A failed validation still prints its report on stdout, so JSON
    /// consumers get the report along with the non-zero exit status.
    fn from_result(result: Result<String, ApiError>) -> Self {
        match result {
            Ok(output) => Self {
                stdout: Some(output),
                stderr: None,
                exit_code: 0,
            },
            Err(e) => {
                let stderr = Some(personas::cli::map_error(&e));
                let stdout = match e {
                    ApiError::ValidationFailed(report) => Some(report),
                    _ => None,
                };
                Self {
                    stdout,
                    stderr,
                    exit_code: 1,
                }
            }
        }
    }
}

fn load_config(cli: &Cli) -> Result<PersonasConfig, ApiError> {
    match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

/// Build logging configuration from CLI args and the loaded config.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, config: &PersonasConfig) -> LoggingConfig {
    let mut logging = config.logging.clone();

    if cli.quiet {
        logging.enabled = false;
    }
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        logging.output = output.clone();
    }

    logging
}
