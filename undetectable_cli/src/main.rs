mod commands;
mod config;
mod input;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use undetectable_api::Client;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "undetectable")]
#[command(about = "Detect and humanize AI-written text with the Undetectable API")]
struct Cli {
    /// Output format: table, json, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score how human-like a piece of text reads
    Detect(commands::detect::DetectArgs),
    /// Submit a document for humanization
    Submit(commands::submit::SubmitArgs),
    /// Retrieve a submitted document
    Document(commands::documents::DocumentArgs),
    /// Humanize a submitted document again
    Rehumanize(commands::documents::RehumanizeArgs),
    /// List submitted documents
    List(commands::documents::ListArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("undetectable_api=info".parse()?)
                .add_directive("undetectable_cli=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let client = Client::with_config(config::load()?)?;

    match &cli.command {
        Commands::Detect(args) => commands::detect::run(args, &client, &format).await?,
        Commands::Submit(args) => commands::submit::run(args, &client, &format).await?,
        Commands::Document(args) => {
            commands::documents::run_document(args, &client, &format).await?
        }
        Commands::Rehumanize(args) => {
            commands::documents::run_rehumanize(args, &client, &format).await?
        }
        Commands::List(args) => commands::documents::run_list(args, &client, &format).await?,
    }

    Ok(())
}
