//! Quiz request parsing and prompt rendering.
//!
//! A `/generate` invocation carries a comma-delimited argument string. [`QuizParser`]
//! turns that string into a [`QuizRequest`], and [`QuizPrompt`] renders the request
//! into the two-message exchange handed to the model.

/// Prompt rendering for a parsed request.
pub mod prompt;
/// Argument parsing and the request value object.
pub mod request;

pub use prompt::QuizPrompt;
pub use request::{QuizError, QuizParser, QuizRequest, Weights};
