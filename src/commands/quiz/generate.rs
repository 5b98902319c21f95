//! Defines the `/generate` command, which turns a comma-delimited request into quiz
//! questions produced by the configured model.

use tracing::{debug, error, info};

use crate::commands::{ChatReply, PoiseReply};
use crate::quiz::{QuizParser, QuizPrompt, QuizRequest};
use crate::utils::model::{ModelError, QuestionModel};
use crate::{CommandResult, Context};

/// Reply sent when generation fails for any reason after the request parsed.
pub const GENERATION_FAILED: &str = "Sorry, I couldn't generate questions. Try again later!";

/// Generate quiz questions for a subject and topic
#[poise::command(slash_command, prefix_command, category = "Quiz")]
pub async fn generate(
    ctx: Context<'_>,
    #[description = "subject, topic[, language[, count[, comment[, w1,w2,w3,w4]]]]"]
    #[rest]
    request: Option<String>,
) -> CommandResult {
    let request = request.unwrap_or_default();
    let author = ctx.author();
    info!(
        "UserID: {}, Username: {}, ChannelID: {}, Message: {}",
        author.id,
        author.name,
        ctx.channel_id(),
        request
    );

    // Model calls routinely outlive the interaction acknowledgement window.
    ctx.defer().await?;

    let data = ctx.data();
    let mut reply = PoiseReply(ctx);
    run_generate(&data.parser, &data.model, &mut reply, &request).await
}

/// Parses `args`, asks `model` for questions and relays the outcome through `reply`.
///
/// On success three messages are sent in order: an acknowledgement, a completion
/// notice and the model output. Invalid arguments produce a single guidance message
/// and skip the model entirely. Any failure after parsing (a failed send, a model
/// error or blank model output) is logged and replaced by [`GENERATION_FAILED`].
pub async fn run_generate<M, R>(
    parser: &QuizParser,
    model: &M,
    reply: &mut R,
    args: &str,
) -> CommandResult
where
    M: QuestionModel + Sync,
    R: ChatReply + Send,
{
    let request = match parser.parse(args) {
        Ok(request) => request,
        Err(e) => {
            debug!("Rejected /generate arguments {:?}: {:?}", args, e);
            return reply.send_text(e.to_string()).await;
        }
    };

    if let Err(e) = relay_questions(model, reply, &request).await {
        error!("Error generating questions: {}", e);
        return reply.send_text(GENERATION_FAILED.to_string()).await;
    }

    Ok(())
}

async fn relay_questions<M, R>(model: &M, reply: &mut R, request: &QuizRequest) -> CommandResult
where
    M: QuestionModel + Sync,
    R: ChatReply + Send,
{
    let prompt = QuizPrompt::render(request);

    reply
        .send_text(format!("Generating {}...", describe(request)))
        .await?;

    let questions = model.generate(&prompt).await?;
    debug!(
        "Model returned {} bytes for {} / {}",
        questions.len(),
        request.subject,
        request.topic
    );
    if questions.trim().is_empty() {
        return Err(ModelError::EmptyResponse.into());
    }

    reply
        .send_text(format!("Generated {}...", describe(request)))
        .await?;
    reply.send_text(questions).await
}

fn describe(request: &QuizRequest) -> String {
    format!(
        "{} questions for {} and {}",
        request.num_questions, request.subject, request.topic
    )
}
