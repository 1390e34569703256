//! Newsroom command-line entry point.

mod cli;

use clap::Parser;
use cli::{
    Cli, Commands, handle_batch, handle_calendar, handle_check, handle_generate, handle_request,
    handle_schedule, handle_validate, handle_variants,
};
use newsroom::Newsroom;
use newsroom::telemetry::init_console_telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before anything reads API keys
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_console_telemetry(cli.verbose, cli.log_json)?;

    let newsroom = match &cli.config {
        Some(path) => Newsroom::from_file(path)?,
        None => Newsroom::load()?,
    };
    let format = cli.format;

    match cli.command {
        Commands::Validate {
            platform,
            text,
            file,
        } => handle_validate(&newsroom, &platform, text, file.as_deref(), format)?,
        Commands::Check { news } => handle_check(&newsroom, &news, format)?,
        Commands::Generate {
            news,
            platform,
            variant,
        } => handle_generate(&newsroom, &news, &platform, variant, format).await?,
        Commands::Batch {
            news,
            platforms,
            variants,
        } => handle_batch(&newsroom, &news, &platforms, &variants, format).await?,
        Commands::Request {
            body,
            authorization,
        } => handle_request(&newsroom, &body, authorization.as_deref(), format).await?,
        Commands::Schedule {
            topic,
            platforms,
            from,
        } => handle_schedule(&newsroom, &topic, &platforms, from.as_deref(), format).await?,
        Commands::Calendar { themes, from } => {
            handle_calendar(&newsroom, &themes, from.as_deref(), format)?
        }
        Commands::Variants { platform, seed } => handle_variants(&platform, seed, format)?,
    }

    Ok(())
}
