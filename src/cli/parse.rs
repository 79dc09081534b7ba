//! CLI parse: clap types for flashcards. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Flashcards CLI - practice-math quizzes from configured prompt pools
#[derive(Parser)]
#[command(name = "flashcards")]
#[command(about = "Practice-math flashcard quizzes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (holds config/config.toml and config/quizzes.toml)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for prompt shuffling (default: random)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List available quizzes by category
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Issue a quiz and print its prompts
    Show {
        /// Quiz name (case-insensitive)
        name: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Take a quiz interactively and see the graded result
    Take {
        /// Quiz name (case-insensitive)
        name: String,
    },
    /// Validate configuration and quiz definitions
    Validate,
}
