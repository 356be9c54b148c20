//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::RmcharsError;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &RmcharsError) -> String {
    match e {
        RmcharsError::TargetExists { .. } | RmcharsError::EmptyName { .. } => format!(
            "rmchars: {}\nhint: rerun with --on-collision skip or --on-collision suffix",
            e
        ),
        _ => format!("rmchars: {}", e),
    }
}
