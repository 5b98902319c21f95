use ::serenity::all::ClientBuilder;
use dotenv::dotenv;
use poise::serenity_prelude as serenity;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use question_maker::{
    Data, Error,
    commands::quiz::{generate::*, start::*},
    config::Config,
    events,
    quiz::QuizParser,
    utils::model::ModelClient,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize logging with debug level for our crate
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("question_maker=debug,warn")),
        )
        .with_thread_ids(true)
        .with_line_number(true)
        .with_file(true)
        .with_target(true)
        .with_ansi(true)
        .pretty()
        .init();

    dotenv().ok();

    let config = Config::from_env().inspect_err(|e| error!("Invalid configuration: {}", e))?;

    info!("Question model: {}", config.model);

    let data = Data {
        parser: QuizParser::new(config.default_weights),
        model: ModelClient::from_config(&config.model),
    };

    info!("Default weights: {:?}", data.parser.defaults());

    let intents =
        serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::MESSAGE_CONTENT;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![start(), generate()],
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some("!".into()),
                ..Default::default()
            },
            on_error: events::on_error,
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                info!("Bot is running as {}...", ready.user.name);
                Ok(data)
            })
        });

    let mut client = ClientBuilder::new(config.discord_token, intents)
        .framework(framework.build())
        .await?;

    client.start().await.map_err(Into::into)
}
