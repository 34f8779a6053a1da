use anyhow::Result;
use clap::Args;
use undetectable_api::Client;

use crate::input;
use crate::output::{print_detect, OutputFormat};

#[derive(Args)]
pub struct DetectArgs {
    /// Text to score, or `-` to read it from stdin
    pub text: String,

    /// Score with the individual third-party detectors instead of the combined one
    #[arg(long)]
    pub individual: bool,
}

pub async fn run(args: &DetectArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let text = input::read_text(&args.text)?;

    let result = if args.individual {
        client.detect_individual(&text).await?
    } else {
        client.detect(&text).await?
    };

    print_detect(&result, format);
    Ok(())
}
