//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::QuizError;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &QuizError) -> String {
    match e {
        QuizError::NotFound(msg) => msg.clone(),
        QuizError::InvalidArgument(msg) => format!("Invalid input: {}", msg),
        QuizError::InvalidState(msg) => format!("Internal error: {}", msg),
        other => other.to_string(),
    }
}

/// Process exit code for a failed command.
pub fn exit_code(e: &QuizError) -> i32 {
    match e {
        QuizError::NotFound(_) | QuizError::InvalidArgument(_) => 2,
        _ => 1,
    }
}
