//! CLI domain: parse, route, output, and presentation only.
//! Lookups go to the agent registry; formatting stays in presentation.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_list_json, format_list_text, format_show_json, format_show_text,
    format_validation_json, format_validation_text,
};
pub use route::RunContext;
