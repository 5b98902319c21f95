use crate::{CommandResult, Context};

/// Usage text listing every `/generate` shape and its defaults.
pub const USAGE: &str = "Hi! Use /generate <subject>, <topic>\n\n\
Or use /generate <subject>, <topic>, <language>\n\n\
Or use /generate <subject>, <topic>, <language>, <number of questions>\n\n\
Or use /generate <subject>, <topic>, <language>, <number of questions>, <comment>\n\n\
To create questions with default weights \n(e.g., /generate Computer Science, Algorithms, 5, beginner level) and language (default English). \
Comment and number of question (default=5) is optional.\n\n\n\
Or use /generate <subject>, <topic>, <language>, <number of questions>, <comment>, \
<Problem-Solving-weight out of 10>,<Analytical Reasoning-weight out of 10>,\
<Conceptual Understanding-weight out of 10>,<Factual Recall-weight out of 10> \
to create questions with weighted preferences (0=lowest, 10=highest) \n\
(e.g., /generate Computer Science, Algorithms, 5, beginner level, 10,8,9,1).";

/// Show how to use the quiz generator
#[poise::command(slash_command, prefix_command, category = "Quiz")]
pub async fn start(ctx: Context<'_>) -> CommandResult {
    ctx.say(USAGE).await?;
    Ok(())
}
