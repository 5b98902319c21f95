//! Commands that generate quiz questions with the configured model.

/// Submodule defining the `/generate` command.
pub mod generate;
/// Submodule defining the `/start` command.
pub mod start;
