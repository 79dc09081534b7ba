//! CLI help and command-name contract for logging and routing.

use crate::cli::parse::Commands;

/// Command name string for log fields (e.g. "list", "take").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::List { .. } => "list",
        Commands::Show { .. } => "show",
        Commands::Take { .. } => "take",
        Commands::Validate => "validate",
    }
}

/// Whether a command reads answers from the terminal.
pub fn is_interactive(command: &Commands) -> bool {
    matches!(command, Commands::Take { .. })
}
