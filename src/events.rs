use futures::FutureExt;
use futures::future::BoxFuture;
use tracing::error;

use crate::{Data, Error};

/// Framework-wide error observer.
///
/// Failures are logged and swallowed so one bad invocation never stops the bot
/// from serving the next.
pub fn on_error(error: poise::FrameworkError<'_, Data, Error>) -> BoxFuture<'_, ()> {
    async move {
        match error {
            poise::FrameworkError::Command { error, ctx, .. } => {
                error!(
                    "Command '{}' invoked by {} as {:?} caused error {}",
                    ctx.command().qualified_name,
                    ctx.author().name,
                    ctx.invocation_string(),
                    error
                );
            }
            other => {
                if let Err(e) = poise::builtins::on_error(other).await {
                    error!("Error while handling error: {}", e);
                }
            }
        }
    }
    .boxed()
}
