//! CLI domain: parse, route, help, output, and presentation only.
//! No quiz logic; the route table dispatches to the quiz service.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::{command_name, is_interactive};
pub use output::{exit_code, map_error};
pub use parse::{Cli, Commands};
pub use presentation::{
    format_quiz_json, format_quiz_list_json, format_quiz_list_text, format_quiz_text,
    format_result_text, format_validation_result,
};
pub use route::{collect_answers, RunContext};
