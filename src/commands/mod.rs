//! This module aggregates all the command modules for the bot.

use std::future::Future;

use crate::{CommandResult, Context};

/// Quiz generation commands (`/start`, `/generate`).
pub mod quiz;

/// The maximum character length allowed for a single Discord message.
const MAX_MESSAGE_LENGTH: usize = 2000;

/// Where a command sends its plain-text replies.
///
/// Messages must be delivered in the order `send_text` is awaited.
pub trait ChatReply {
    fn send_text(&mut self, text: String) -> impl Future<Output = CommandResult> + Send;
}

/// Replies through a poise invocation context, chunked to fit Discord's limit.
pub struct PoiseReply<'a>(pub Context<'a>);

impl<'a> ChatReply for PoiseReply<'a> {
    async fn send_text(&mut self, text: String) -> CommandResult {
        chunk_response(self.0, text).await
    }
}

/// Sends a potentially long response string by splitting it into chunks
/// that respect Discord's message length limit.
pub async fn chunk_response<S: AsRef<str>>(ctx: Context<'_>, response: S) -> CommandResult {
    for chunk in split_message(response.as_ref()) {
        ctx.say(chunk).await?;
    }

    Ok(())
}

/// Splits `text` into consecutive pieces of at most [`MAX_MESSAGE_LENGTH`] characters,
/// never breaking a UTF-8 character.
pub fn split_message(text: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut iter = text.chars();
    let mut pos = 0;
    while pos < text.len() {
        let mut len = 0;
        for ch in iter.by_ref().take(MAX_MESSAGE_LENGTH) {
            len += ch.len_utf8();
        }
        chunks.push(&text[pos..pos + len]);
        pos += len;
    }

    chunks
}
