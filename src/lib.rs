//! A Discord bot that turns `/generate <subject>, <topic>, ...` into quiz questions
//! written by a hosted language model.

/// Slash and prefix commands.
pub mod commands;
/// Startup configuration.
pub mod config;
/// Framework event and error handling.
pub mod events;
/// Request parsing and prompt rendering.
pub mod quiz;
/// Model provider clients.
pub mod utils;

use quiz::QuizParser;
use utils::model::ModelClient;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;
pub type CommandResult = Result<(), Error>;

/// User data, which is stored and accessible in all command invocations.
pub struct Data {
    pub parser: QuizParser,
    pub model: ModelClient,
}
